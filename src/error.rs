use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A selection or statistic was requested over zero elements.
    #[error("empty input: {what} requires at least one element")]
    EmptyInput { what: &'static str },

    #[error("dataset '{name}' has no results")]
    EmptyDataset { name: String },

    #[error("dataset '{name}' registered twice")]
    DuplicateDataset { name: String },
}

impl CoreError {
    pub fn is_empty_input(&self) -> bool {
        matches!(self, CoreError::EmptyInput { .. })
    }
}
