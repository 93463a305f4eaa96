//! Movie payload validation.
//!
//! The schema is evaluated against an untyped JSON value in two passes:
//! a shape pass that checks presence and JSON types field by field, and a
//! rule pass that runs the `validator` rules declared on [`MoviePatch`].
//! Every failure from both passes is collected; nothing is fail-fast.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use crate::movie::{Genre, MoviePatch, NewMovie};

/// Known fields in declaration order. Issue lists are sorted by this order.
pub const MOVIE_FIELDS: [&str; 7] = [
    "title", "year", "director", "duration", "poster", "genre", "rate",
];

/// One element of an issue path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Machine-readable category of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    InvalidType,
    UnrecognizedKey,
    InvalidEnumValue,
    TooShort,
    OutOfRange,
    InvalidUrl,
    InvalidValue,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub path: Vec<PathSegment>,
    pub code: IssueCode,
    pub message: String,
}

impl Issue {
    fn at(key: &str, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: vec![key.into()],
            code,
            message: message.into(),
        }
    }

    /// The top-level field this issue is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self.path.first() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }

    fn rank(&self) -> usize {
        self.field()
            .and_then(|f| MOVIE_FIELDS.iter().position(|known| *known == f))
            .unwrap_or(MOVIE_FIELDS.len())
    }
}

/// The full list of problems found in one payload. Serializes as a plain
/// JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<Issue>);

impl ValidationIssues {
    /// A single issue about the payload as a whole rather than one field.
    pub fn root(code: IssueCode, message: impl Into<String>) -> Self {
        Self(vec![Issue {
            path: Vec::new(),
            code,
            message: message.into(),
        }])
    }

    fn sorted(mut issues: Vec<Issue>) -> Self {
        issues.sort_by_key(Issue::rank);
        Self(issues)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Issues whose top-level field is `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.0.iter().filter(move |i| i.field() == Some(field))
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|i| i.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    Partial,
}

/// Validate a create payload. Every field but `rate` is required; `rate`
/// defaults to `0`.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationIssues> {
    let (patch, issues) = evaluate(input, Mode::Full)?;

    // A required field is only absent when the shape pass recorded why.
    match patch {
        MoviePatch {
            title: Some(title),
            year: Some(year),
            director: Some(director),
            duration: Some(duration),
            poster: Some(poster),
            genre: Some(genre),
            rate,
        } if issues.is_empty() => Ok(NewMovie {
            title,
            year,
            director,
            duration,
            poster,
            genre,
            rate: rate.unwrap_or(0.0),
        }),
        _ => Err(ValidationIssues::sorted(issues)),
    }
}

/// Validate an update payload. Every field is optional and only the fields
/// present in `input` come back set.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationIssues> {
    let (patch, issues) = evaluate(input, Mode::Partial)?;

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationIssues::sorted(issues))
    }
}

/// Run the shape and rule passes, returning whatever parsed alongside every
/// issue found. Only a non-object input fails outright.
fn evaluate(input: &Value, mode: Mode) -> Result<(MoviePatch, Vec<Issue>), ValidationIssues> {
    let Some(object) = input.as_object() else {
        return Err(ValidationIssues::root(
            IssueCode::InvalidType,
            "Movie must be a JSON object",
        ));
    };

    let required = mode == Mode::Full;
    let mut issues = Vec::new();

    let patch = MoviePatch {
        title: extract(object, "title", required, &mut issues, |v| as_string(v, "title")),
        year: extract(object, "year", required, &mut issues, |v| as_integer(v, "year")),
        director: extract(object, "director", required, &mut issues, |v| as_string(v, "director")),
        duration: extract(object, "duration", required, &mut issues, |v| as_integer(v, "duration")),
        poster: extract(object, "poster", required, &mut issues, |v| as_string(v, "poster")),
        genre: extract(object, "genre", required, &mut issues, as_genres),
        rate: extract(object, "rate", false, &mut issues, |v| {
            v.as_f64().ok_or_else(|| {
                vec![Issue::at(
                    "rate",
                    IssueCode::InvalidType,
                    "Movie rate must be a number",
                )]
            })
        }),
    };

    for key in object.keys() {
        if !MOVIE_FIELDS.contains(&key.as_str()) {
            issues.push(Issue::at(
                key,
                IssueCode::UnrecognizedKey,
                format!("Unrecognized key '{key}'"),
            ));
        }
    }

    if let Err(errors) = patch.validate() {
        issues.extend(rule_issues(&errors));
    }

    Ok((patch, issues))
}

/// Look up `key`, recording a `required` issue when it is absent and
/// required, or the parser's issues when it has the wrong shape.
fn extract<T>(
    object: &Map<String, Value>,
    key: &str,
    required: bool,
    issues: &mut Vec<Issue>,
    parse: impl FnOnce(&Value) -> Result<T, Vec<Issue>>,
) -> Option<T> {
    match object.get(key) {
        None => {
            if required {
                issues.push(Issue::at(
                    key,
                    IssueCode::Required,
                    format!("Movie {key} is required"),
                ));
            }
            None
        }
        Some(value) => match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(found) => {
                issues.extend(found);
                None
            }
        },
    }
}

fn as_string(value: &Value, key: &str) -> Result<String, Vec<Issue>> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        vec![Issue::at(
            key,
            IssueCode::InvalidType,
            format!("Movie {key} must be a string"),
        )]
    })
}

fn as_integer(value: &Value, key: &str) -> Result<i64, Vec<Issue>> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    let message = if value.is_number() {
        format!("Movie {key} must be an integer")
    } else {
        format!("Movie {key} must be a number")
    };
    Err(vec![Issue::at(key, IssueCode::InvalidType, message)])
}

fn as_genres(value: &Value) -> Result<Vec<Genre>, Vec<Issue>> {
    let Some(items) = value.as_array() else {
        return Err(vec![Issue::at(
            "genre",
            IssueCode::InvalidType,
            "Movie genre must be an array of strings",
        )]);
    };

    let mut genres = Vec::with_capacity(items.len());
    let mut issues = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match item.as_str().map(str::parse::<Genre>) {
            Some(Ok(genre)) => genres.push(genre),
            Some(Err(_)) | None => issues.push(Issue {
                path: vec!["genre".into(), index.into()],
                code: IssueCode::InvalidEnumValue,
                message: format!("Movie genre must be one of: {}", genre_names()),
            }),
        }
    }

    if issues.is_empty() {
        Ok(genres)
    } else {
        Err(issues)
    }
}

fn genre_names() -> String {
    Genre::ALL
        .iter()
        .map(|g| g.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn rule_issues(errors: &ValidationErrors) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        for error in field_errors.iter() {
            let code = match &*error.code {
                "length" => IssueCode::TooShort,
                "range" => IssueCode::OutOfRange,
                "url" => IssueCode::InvalidUrl,
                _ => IssueCode::InvalidValue,
            };
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Movie {field} is invalid"));
            issues.push(Issue::at(&field, code, message));
        }
    }
    issues
}
