//! The comparison operator atomic propositions are built from.

use std::fmt;

use crate::error::ModelCheckingError;

/// The only two comparison operators an atomic proposition may use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonOp {
    Ge,
    Le,
}

impl ComparisonOp {
    /// Parse the ASCII token a formula key (or an external parser) would use. Kept for callers
    /// that build formulae from raw operator strings; the typed constructors in [`super::atomic`]
    /// never go through this path, so [`ModelCheckingError::UnsupportedOperator`] is otherwise
    /// unreachable from inside this crate.
    pub fn from_token(token: &str) -> Result<Self, ModelCheckingError> {
        match token {
            ">=" => Ok(ComparisonOp::Ge),
            "<=" => Ok(ComparisonOp::Le),
            other => Err(ModelCheckingError::UnsupportedOperator {
                operator: other.to_string(),
            }),
        }
    }

    /// The operator obtained by negating a proposition that uses this one, per `x >= k -> x <= k-1`
    /// and `x <= k -> x >= k+1`.
    pub fn flip(self) -> Self {
        match self {
            ComparisonOp::Ge => ComparisonOp::Le,
            ComparisonOp::Le => ComparisonOp::Ge,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ComparisonOp::Ge => ">=",
            ComparisonOp::Le => "<=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
