//! # Vodbridge
//!
//! Platform capability bridge for the `ve_vod_controls` plugin method
//! channel.
//!
//! A [`CapabilityBridge`] receives a named [`Invocation`] with optional
//! arguments, resolves it against a [`CapabilityRegistry`] of read-only host
//! queries, and returns exactly one [`Response`]: a success value or the
//! [`Response::Unimplemented`] sentinel. A [`ChannelDispatcher`] owns the
//! channel-name-to-bridge association the host registrar would normally hold.
//!
//! ## Quick Start
//!
//! ```
//! use vodbridge::{CapabilityBridge, Invocation};
//!
//! let bridge = CapabilityBridge::with_defaults();
//! let response = bridge.handle(&Invocation::new("getPlatformVersion"));
//! assert!(response.is_success());
//! ```

#![forbid(unsafe_code)]

pub mod bridge;
pub mod capability;
pub mod codec;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod invocation;
pub mod platform;
pub mod response;

pub use bridge::CapabilityBridge;
pub use capability::{Capability, CapabilityRegistry};
pub use codec::{decode_invocation, decode_response, encode_invocation, encode_response};
pub use config::BridgeConfig;
pub use dispatcher::ChannelDispatcher;
pub use error::{BridgeError, BridgeResult};
pub use invocation::Invocation;
pub use platform::{os_version, PlatformVersion, METHOD_GET_PLATFORM_VERSION};
pub use response::Response;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default channel name the bridge is registered under.
pub const CHANNEL_NAME: &str = "ve_vod_controls";
