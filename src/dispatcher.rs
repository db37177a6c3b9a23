//! Channel dispatching.
//!
//! The dispatcher owns the channel-name-to-bridge association the host
//! registrar would normally hold; bridges themselves carry no registration
//! logic. Dispatch is synchronous: an invocation is handled to completion and
//! its single response returned before the call ends.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::bridge::CapabilityBridge;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::invocation::Invocation;
use crate::response::Response;

/// Routes invocations arriving on named channels to their bridges.
#[derive(Debug, Default)]
pub struct ChannelDispatcher {
    channels: RwLock<HashMap<String, Arc<CapabilityBridge>>>,
}

impl ChannelDispatcher {
    /// Create a dispatcher with no channels registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with a default bridge on the configured channel.
    pub fn with_config(config: &BridgeConfig) -> Self {
        let dispatcher = Self::new();
        let bridge = CapabilityBridge::with_config(config);
        // A fresh dispatcher has no channels, so this cannot collide.
        let _ = dispatcher.register(&config.channel, Arc::new(bridge));
        dispatcher
    }

    /// Associate a channel name with a bridge.
    pub fn register(
        &self,
        channel: impl Into<String>,
        bridge: Arc<CapabilityBridge>,
    ) -> BridgeResult<()> {
        let channel = channel.into();
        let mut channels = self.channels.write();
        if channels.contains_key(&channel) {
            return Err(BridgeError::ChannelTaken(channel));
        }
        tracing::debug!(%channel, "bridge registered");
        channels.insert(channel, bridge);
        Ok(())
    }

    /// Remove a channel association. Returns the bridge if one was registered.
    pub fn unregister(&self, channel: &str) -> Option<Arc<CapabilityBridge>> {
        self.channels.write().remove(channel)
    }

    /// Check whether a channel has a bridge.
    pub fn has_channel(&self, channel: &str) -> bool {
        self.channels.read().contains_key(channel)
    }

    /// Route one invocation to the bridge on `channel`.
    ///
    /// An unknown channel is a dispatcher-level error: no bridge ever saw the
    /// invocation, so no [`Response`] exists for it.
    pub fn dispatch(&self, channel: &str, invocation: &Invocation) -> BridgeResult<Response> {
        let bridge = self
            .channels
            .read()
            .get(channel)
            .cloned()
            .ok_or_else(|| BridgeError::UnknownChannel(channel.to_string()))?;

        tracing::debug!(%channel, method = %invocation.method, "dispatch");
        Ok(bridge.handle(invocation))
    }
}
