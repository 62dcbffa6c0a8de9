//! Configuration types
//!
//! The single aggregate produced by a successful load. Every string and
//! list field is owned by the aggregate, so cloning duplicates all of
//! them and a clone shares no mutable storage with its source.

/// Proxy server configuration
///
/// Constructed only by [`Config::from_file`] / [`Config::from_buffer`] and
/// treated as immutable once built. Safe to read from multiple threads;
/// consumers that need a private mutable copy clone it instead of sharing
/// the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    // --- Server ---
    /// Bind host; absent means the runtime binds its default interface
    pub host: Option<String>,
    /// Bind port, meaningful only when `host` is set
    pub port: u16,

    // --- Target ---
    /// When set, every session is forwarded to the fixed target below
    /// instead of the one the client asked for
    pub fixed_target: bool,
    pub target_host: Option<String>,
    pub target_port: u16,

    // --- Channels ---
    pub gfx: bool,
    pub display_control: bool,
    pub clipboard: bool,
    pub audio_output: bool,
    pub remote_app: bool,
    /// Static virtual channels forwarded transparently rather than
    /// interpreted by the proxy
    pub passthrough: Vec<String>,

    // --- Input ---
    pub keyboard: bool,
    pub mouse: bool,

    // --- Security ---
    pub server_tls_security: bool,
    pub server_rdp_security: bool,
    pub client_tls_security: bool,
    pub client_nla_security: bool,
    pub client_rdp_security: bool,
    pub client_allow_fallback_to_tls: bool,

    // --- Clipboard ---
    pub text_only: bool,
    /// 0 means no cap on clipboard text length
    pub max_text_length: u32,

    // --- Plugins ---
    pub modules: Vec<String>,
    pub required_plugins: Vec<String>,

    // --- GFX settings ---
    pub decode_gfx: bool,

    // --- Certificates ---
    /// Exactly one of `certificate_file`/`certificate_content` is set
    /// after a successful load
    pub certificate_file: Option<String>,
    pub certificate_content: Option<String>,
    /// Exactly one of `private_key_file`/`private_key_content` is set
    pub private_key_file: Option<String>,
    pub private_key_content: Option<String>,
    /// Exactly one of `rdp_key_file`/`rdp_key_content` is set
    pub rdp_key_file: Option<String>,
    pub rdp_key_content: Option<String>,
}

impl Config {
    /// Number of modules the runtime should load.
    pub fn modules_count(&self) -> usize {
        self.modules.len()
    }

    /// Module name at `index`, or `None` when out of range.
    pub fn module(&self, index: usize) -> Option<&str> {
        self.modules.get(index).map(String::as_str)
    }

    /// Number of plugins the runtime must refuse to start without.
    pub fn required_plugins_count(&self) -> usize {
        self.required_plugins.len()
    }

    /// Required plugin name at `index`, or `None` when out of range.
    pub fn required_plugin(&self, index: usize) -> Option<&str> {
        self.required_plugins.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_helpers() {
        let mut config = Config::default();
        assert_eq!(config.modules_count(), 0);
        assert_eq!(config.required_plugins_count(), 0);
        assert_eq!(config.module(0), None);
        assert_eq!(config.required_plugin(0), None);

        config.modules = vec!["demo".to_string(), "cap".to_string()];
        config.required_plugins = vec!["cap".to_string()];

        assert_eq!(config.modules_count(), 2);
        assert_eq!(config.module(0), Some("demo"));
        assert_eq!(config.module(1), Some("cap"));
        assert_eq!(config.module(2), None);

        assert_eq!(config.required_plugins_count(), 1);
        assert_eq!(config.required_plugin(0), Some("cap"));
        assert_eq!(config.required_plugin(1), None);
    }

    #[test]
    fn test_clone_is_storage_disjoint() {
        let mut config = Config::default();
        config.host = Some("0.0.0.0".to_string());
        config.passthrough = vec!["rdpdr".to_string()];
        config.modules = vec!["demo".to_string()];
        config.certificate_file = Some("/tmp/server.crt".to_string());

        let mut copy = config.clone();
        assert_eq!(copy, config);

        // Mutating the copy must not reach through to the source.
        copy.host = Some("127.0.0.1".to_string());
        copy.passthrough.push("rdpsnd".to_string());
        copy.modules[0].push_str("-patched");

        assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.passthrough, vec!["rdpdr".to_string()]);
        assert_eq!(config.modules, vec!["demo".to_string()]);
        assert_ne!(copy, config);
    }
}
