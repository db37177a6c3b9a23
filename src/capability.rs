//! Capabilities and their registry.
//!
//! A capability is one named host query the bridge can answer. The registry
//! maps method names to boxed capabilities; the bridge consults it on every
//! invocation. The shipped registry holds a single entry (the OS-version
//! query), but the map is general so further capabilities are additive.

use std::collections::HashMap;

use serde_json::Value;

/// One named, read-only host query.
///
/// Implementations must not mutate host state: an invocation may be replayed
/// and must stay idempotent. Arguments are passed through untouched and a
/// capability is free to ignore them.
pub trait Capability: Send + Sync {
    /// The method name this capability answers.
    fn name(&self) -> &'static str;

    /// Run the host query.
    fn invoke(&self, arguments: Option<&Value>) -> Value;
}

/// Registry of capabilities, indexed by method name.
#[derive(Default)]
pub struct CapabilityRegistry {
    capabilities: HashMap<&'static str, Box<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a capability under its own name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, capability: Box<dyn Capability>) {
        self.capabilities.insert(capability.name(), capability);
    }

    /// Get a capability by method name.
    pub fn get(&self, name: &str) -> Option<&dyn Capability> {
        self.capabilities.get(name).map(Box::as_ref)
    }

    /// Check if a method name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Registered method names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.capabilities.keys().copied()
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("names", &self.capabilities.keys().collect::<Vec<_>>())
            .finish()
    }
}
