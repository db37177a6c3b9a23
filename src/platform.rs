//! Host platform queries.
//!
//! The one capability the channel ships: answering the host OS version as
//! `"<Platform> <version>"` (for example `"Linux 6.8.0"`).

use once_cell::sync::Lazy;
use serde_json::Value;
use sysinfo::System;

use crate::capability::Capability;

/// Method name of the OS-version capability.
pub const METHOD_GET_PLATFORM_VERSION: &str = "getPlatformVersion";

// The OS does not change under a running process; probe once.
static OS_VERSION: Lazy<String> = Lazy::new(probe_os_version);

fn probe_os_version() -> String {
    let name = System::name().unwrap_or_else(|| platform_label().to_string());
    match System::os_version() {
        Some(version) => format!("{} {}", name, version),
        None => name,
    }
}

fn platform_label() -> &'static str {
    // Compile-time label, capitalized the way vendors spell it.
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "ios" => "iOS",
        "android" => "Android",
        "windows" => "Windows",
        other => other,
    }
}

/// The host OS version string, e.g. `"Linux 6.8.0"`.
///
/// Never empty: when the probe has nothing to report, the compile-time
/// platform label stands in.
pub fn os_version() -> &'static str {
    &OS_VERSION
}

/// Capability answering [`METHOD_GET_PLATFORM_VERSION`].
///
/// Arguments are ignored, not validated.
#[derive(Debug, Default)]
pub struct PlatformVersion;

impl Capability for PlatformVersion {
    fn name(&self) -> &'static str {
        METHOD_GET_PLATFORM_VERSION
    }

    fn invoke(&self, _arguments: Option<&Value>) -> Value {
        Value::String(os_version().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_version_is_non_empty() {
        assert!(!os_version().is_empty());
    }

    #[test]
    fn test_os_version_is_stable_within_process() {
        assert_eq!(os_version(), os_version());
    }

    #[test]
    fn test_capability_ignores_arguments() {
        let capability = PlatformVersion;
        let bare = capability.invoke(None);
        let with_args = capability.invoke(Some(&serde_json::json!({"ignored": true})));
        assert_eq!(bare, with_args);
        assert!(matches!(bare, Value::String(ref s) if !s.is_empty()));
    }
}
