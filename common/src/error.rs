use thiserror::Error;

/// Why a search form field could not be turned into a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    #[error("unknown property type `{0}`")]
    UnknownPropertyType(String),

    #[error("{field}: `{value}` is not a whole non-negative number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field}: `{value}` is not a date in YYYY-MM-DD form")]
    InvalidDate { field: &'static str, value: String },
}

/// Problems with the embedded catalogue document.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("catalogue is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("property id {0} appears more than once")]
    DuplicateId(u32),

    #[error("property {0} has no images")]
    MissingImages(u32),
}
