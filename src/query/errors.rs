#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("invalid query definition: {0}")]
    Config(String),
    #[error("invalid filter on column '{column}': {reason}")]
    Filter { column: String, reason: String },
}
