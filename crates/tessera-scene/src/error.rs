use thiserror::Error;

/// What was wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Wrong JSON type, a missing field (`found == "missing"`), or a
    /// fractional number where an integer was required.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Numeric value outside its bounds, or an odd canvas height.
    #[error("{value} {constraint}")]
    RangeViolation { value: String, constraint: String },

    /// String not in the allowed set.
    #[error("{value:?} is not one of {allowed:?}")]
    InvalidEnum {
        value: String,
        allowed: &'static [&'static str],
    },

    /// `null` or an array where a record was required.
    #[error("expected an object, found {found}")]
    StructuralError { found: &'static str },
}

/// A rejected render request: the first offending field and the reason.
///
/// `path` uses dotted field names and bracketed indices, e.g.
/// `shapes[2].strokeColor.g`. Errors on the request itself use `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid render request at {path}: {kind}")]
pub struct ValidationError {
    pub path: String,
    pub kind: ErrorKind,
}

impl ValidationError {
    pub(crate) fn new(path: impl Into<String>, kind: ErrorKind) -> Self {
        Self { path: path.into(), kind }
    }
}

/// Failure to turn request text into a [`RenderRequest`](crate::RenderRequest).
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
