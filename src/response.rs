//! The response model.
//!
//! Every invocation handled by a bridge yields exactly one [`Response`]:
//! either a success payload or the unimplemented sentinel. The sentinel is a
//! variant of the sum type, not a magic constant, so callers match on it
//! instead of comparing strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The bridge's single return value per invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    /// The capability ran and produced a value.
    Success {
        /// Value produced by the capability.
        value: Value,
    },
    /// The method name is not in the capability registry.
    Unimplemented,
}

impl Response {
    /// Create a successful response.
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success { value: value.into() }
    }

    /// Check whether this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Check whether this is the unimplemented sentinel.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented)
    }

    /// Borrow the success value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success { value } => Some(value),
            Self::Unimplemented => None,
        }
    }

    /// Consume the response, returning the success value if present.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Success { value } => Some(value),
            Self::Unimplemented => None,
        }
    }
}
