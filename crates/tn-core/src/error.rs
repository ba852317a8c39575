use thiserror::Error;

pub type TnResult<T> = Result<T, TnError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TnError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unknown {what}: {name}")]
    NotFound { what: &'static str, name: String },
}

impl TnError {
    pub fn invalid_arg(what: impl Into<String>) -> Self {
        TnError::InvalidArg { what: what.into() }
    }
}
