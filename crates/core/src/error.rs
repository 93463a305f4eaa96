use crate::schema::ValidationIssues;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationIssues),

    #[error("Invalid seed dataset: {0}")]
    Seed(#[source] serde_json::Error),
}
