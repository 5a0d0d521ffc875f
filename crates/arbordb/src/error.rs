use crate::{
    config::ConfigError,
    db::{predicate::ValidateError, query::QueryError, store::StoreError, tree::TreeError},
    types::TreePathError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured error with a stable classification.
/// Every layer error converts into this type so callers can branch on
/// `class` without matching each layer's enum.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<TreeError> for Error {
    fn from(err: TreeError) -> Self {
        let class = match &err {
            TreeError::MissingPathField { .. } => ErrorClass::Configuration,
            TreeError::AmbiguousPathField { .. } | TreeError::NotAPathField { .. } => {
                ErrorClass::Usage
            }
            TreeError::UnknownField { .. } => ErrorClass::NotFound,
            TreeError::Query(inner) => return inner.clone().into(),
        };

        Self::new(class, ErrorOrigin::Tree, err.to_string())
    }
}

impl From<QueryError> for Error {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Validate(inner) => inner.into(),
            QueryError::Store(inner) => inner.into(),
        }
    }
}

impl From<ValidateError> for Error {
    fn from(err: ValidateError) -> Self {
        let class = match &err {
            ValidateError::UnknownField { .. } => ErrorClass::NotFound,
            ValidateError::UnsupportedOperator { .. } | ValidateError::InvalidLiteral { .. } => {
                ErrorClass::Unsupported
            }
        };

        Self::new(class, ErrorOrigin::Query, err.to_string())
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        let class = match &err {
            StoreError::DuplicateKey { .. } => ErrorClass::Conflict,
            StoreError::NotFound { .. } => ErrorClass::NotFound,
            StoreError::Busy { .. } => ErrorClass::Internal,
        };

        Self::new(class, ErrorOrigin::Store, err.to_string())
    }
}

impl From<TreePathError> for Error {
    fn from(err: TreePathError) -> Self {
        Self::new(ErrorClass::Usage, ErrorOrigin::Value, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorClass::Configuration, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The schema or configuration must be fixed before retrying.
    Configuration,
    /// The caller passed arguments that cannot be honored as given.
    Usage,
    NotFound,
    Conflict,
    Unsupported,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "configuration",
            Self::Usage => "usage",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unsupported => "unsupported",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Config,
    Query,
    Store,
    Tree,
    Value,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Query => "query",
            Self::Store => "store",
            Self::Tree => "tree",
            Self::Value => "value",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
