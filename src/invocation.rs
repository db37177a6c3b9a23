//! The invocation model.
//!
//! An [`Invocation`] is one named request arriving over a method channel:
//! a method name plus an optional, opaque JSON argument payload. It is built
//! once by the dispatcher and never mutated while being handled.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single named request with optional arguments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invocation {
    /// Method name, matched against the capability registry.
    pub method: String,
    /// Opaque argument payload. Capabilities decide whether to read it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self { method: method.into(), arguments: None }
    }

    /// Attach an argument payload.
    pub fn with_arguments(mut self, arguments: impl Into<Value>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }

    /// Borrow the argument payload, if any.
    pub fn arguments(&self) -> Option<&Value> {
        self.arguments.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_builder() {
        let call = Invocation::new("getPlatformVersion");
        assert_eq!(call.method, "getPlatformVersion");
        assert!(call.arguments.is_none());

        let call = Invocation::new("getPlatformVersion")
            .with_arguments(serde_json::json!({"ignored": true}));
        assert_eq!(call.arguments().and_then(|a| a.get("ignored")), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_invocation_serialization_omits_missing_arguments() {
        let json = serde_json::to_string(&Invocation::new("getPlatformVersion")).unwrap();
        assert_eq!(json, r#"{"method":"getPlatformVersion"}"#);
    }
}
