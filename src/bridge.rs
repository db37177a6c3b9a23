//! The capability bridge.
//!
//! Receives one [`Invocation`], resolves it against the capability registry,
//! and returns exactly one [`Response`]. `handle` is a total function: there
//! is no path that drops an invocation or answers it twice, and an unknown
//! method is a normal signaled outcome, not an error.

use crate::capability::{Capability, CapabilityRegistry};
use crate::config::BridgeConfig;
use crate::invocation::Invocation;
use crate::platform::PlatformVersion;
use crate::response::Response;

/// Answers portable method calls with host queries.
///
/// Stateless with respect to invocations: handling one leaves the bridge
/// unchanged, so a shared reference can serve any number of calls.
#[derive(Debug)]
pub struct CapabilityBridge {
    registry: CapabilityRegistry,
    log_unimplemented: bool,
}

impl CapabilityBridge {
    /// Create a bridge over an explicit registry.
    pub fn new(registry: CapabilityRegistry) -> Self {
        Self { registry, log_unimplemented: true }
    }

    /// Create a bridge with the shipped capability set.
    pub fn with_defaults() -> Self {
        let mut registry = CapabilityRegistry::new();
        registry.register(Box::new(PlatformVersion));
        Self::new(registry)
    }

    /// Create a bridge with the shipped capability set, configured.
    pub fn with_config(config: &BridgeConfig) -> Self {
        let mut bridge = Self::with_defaults();
        bridge.log_unimplemented = config.log_unimplemented;
        bridge
    }

    /// Register an additional capability.
    pub fn register(&mut self, capability: Box<dyn Capability>) {
        self.registry.register(capability);
    }

    /// The capability registry backing this bridge.
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Handle one invocation, producing exactly one response.
    pub fn handle(&self, invocation: &Invocation) -> Response {
        match self.registry.get(&invocation.method) {
            Some(capability) => {
                tracing::debug!(method = %invocation.method, "capability invoked");
                Response::success(capability.invoke(invocation.arguments()))
            }
            None => {
                if self.log_unimplemented {
                    tracing::debug!(method = %invocation.method, "method not implemented");
                }
                Response::Unimplemented
            }
        }
    }
}

impl Default for CapabilityBridge {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::METHOD_GET_PLATFORM_VERSION;

    #[test]
    fn test_platform_version_is_success() {
        let bridge = CapabilityBridge::with_defaults();
        let response = bridge.handle(&Invocation::new(METHOD_GET_PLATFORM_VERSION));

        let value = response.value().and_then(|v| v.as_str()).expect("string value");
        assert!(!value.is_empty());
    }

    #[test]
    fn test_unknown_method_is_unimplemented() {
        let bridge = CapabilityBridge::with_defaults();
        assert!(bridge.handle(&Invocation::new("unknownMethod")).is_unimplemented());

        // Deterministic regardless of arguments.
        let with_args =
            Invocation::new("unknownMethod").with_arguments(serde_json::json!({"any": [1, 2]}));
        assert!(bridge.handle(&with_args).is_unimplemented());
    }

    #[test]
    fn test_arguments_are_ignored_not_validated() {
        let bridge = CapabilityBridge::with_defaults();
        let bare = bridge.handle(&Invocation::new(METHOD_GET_PLATFORM_VERSION));
        let with_args = bridge.handle(
            &Invocation::new(METHOD_GET_PLATFORM_VERSION)
                .with_arguments(serde_json::json!({"ignored": true})),
        );
        assert_eq!(bare, with_args);
    }

    #[test]
    fn test_idempotent_response_shape() {
        let bridge = CapabilityBridge::with_defaults();
        let call = Invocation::new(METHOD_GET_PLATFORM_VERSION);
        assert_eq!(bridge.handle(&call), bridge.handle(&call));
    }

    #[test]
    fn test_default_registry_has_one_entry() {
        let bridge = CapabilityBridge::default();
        assert_eq!(bridge.registry().len(), 1);
        assert!(bridge.registry().has(METHOD_GET_PLATFORM_VERSION));
    }
}
