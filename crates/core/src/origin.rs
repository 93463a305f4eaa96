//! Cross-origin allow-list.

/// Outcome of checking a request's `Origin` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    Allow,
    Deny,
}

/// Fixed set of browser origins permitted to call the API.
///
/// Requests without an `Origin` header (curl, server-to-server, same-origin
/// tooling) are always allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    allowed_origins: Vec<String>,
}

impl OriginPolicy {
    pub fn new<I, S>(allowed_origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: allowed_origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// Exact string comparison against the allow-list.
    pub fn check(&self, origin: Option<&str>) -> OriginDecision {
        match origin {
            None => OriginDecision::Allow,
            Some(origin) if self.allowed_origins.iter().any(|o| o == origin) => {
                OriginDecision::Allow
            }
            Some(_) => OriginDecision::Deny,
        }
    }

    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        self.check(origin) == OriginDecision::Allow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> OriginPolicy {
        OriginPolicy::new(["http://localhost:8080", "http://localhost:3000"])
    }

    #[test]
    fn missing_origin_is_allowed() {
        assert_eq!(policy().check(None), OriginDecision::Allow);
    }

    #[test]
    fn listed_origin_is_allowed() {
        assert_eq!(
            policy().check(Some("http://localhost:3000")),
            OriginDecision::Allow
        );
    }

    #[test]
    fn unlisted_origin_is_denied() {
        assert_eq!(
            policy().check(Some("http://evil.example")),
            OriginDecision::Deny
        );
    }

    #[test]
    fn match_is_exact() {
        let policy = policy();
        assert!(!policy.is_allowed(Some("http://localhost:8080/")));
        assert!(!policy.is_allowed(Some("HTTP://LOCALHOST:8080")));
        assert!(!policy.is_allowed(Some("")));
    }

    #[test]
    fn empty_policy_still_allows_originless_requests() {
        let policy = OriginPolicy::new(Vec::<String>::new());
        assert!(policy.is_allowed(None));
        assert!(!policy.is_allowed(Some("http://localhost:8080")));
    }
}
