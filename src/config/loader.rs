//! Section loaders and the load entry points
//!
//! One loader per configuration domain, run in a fixed order against one
//! INI store. Each loader validates its own section and fails fast on the
//! first violated rule; the first failing loader aborts the whole load
//! and the partially filled aggregate is dropped here, never returned.

use std::path::Path;

use log::error;

use crate::common::fs::file_exists;

use super::defaults;
use super::error::{ConfigError, Result};
use super::keystore::IniStore;
use super::reader::{read_bool, read_list, read_str, read_u16, read_u32};
use super::types::Config;

impl Config {
    /// Load and validate a configuration from an INI file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = IniStore::from_file(path.as_ref())?;
        load_sections(&store)
    }

    /// Load and validate a configuration from INI text held in memory.
    pub fn from_buffer(text: &str) -> Result<Self> {
        let store = IniStore::from_buffer(text)?;
        load_sections(&store)
    }
}

fn load_sections(store: &IniStore) -> Result<Config> {
    let mut config = Config::default();

    load_server(store, &mut config)?;
    load_target(store, &mut config)?;
    load_channels(store, &mut config)?;
    load_input(store, &mut config)?;
    load_security(store, &mut config)?;
    load_plugins(store, &mut config)?;
    load_clipboard(store, &mut config)?;
    load_gfx_settings(store, &mut config)?;
    load_certificates(store, &mut config)?;

    Ok(config)
}

/// `[Server]`: optional bind host; the port becomes required as soon as a
/// host is given.
fn load_server(store: &IniStore, config: &mut Config) -> Result<()> {
    let host = match read_str(store, "Server", "Host", false)? {
        Some(host) => host,
        None => return Ok(()),
    };
    config.host = Some(host);

    if let Some(port) = read_u16(store, "Server", "Port", true)? {
        config.port = port;
    }

    Ok(())
}

/// `[Target]`: host and port are required only when `FixedTarget` is set.
/// The port is checked before the host so a fully missing section reports
/// the port first.
fn load_target(store: &IniStore, config: &mut Config) -> Result<()> {
    config.fixed_target = read_bool(store, &defaults::FIXED_TARGET);

    if let Some(port) = read_u16(store, "Target", "Port", config.fixed_target)? {
        config.target_port = port;
    }

    let host = read_str(store, "Target", "Host", config.fixed_target)?;
    if config.fixed_target && matches!(host.as_deref(), Some("")) {
        error!("key 'Target.Host' must not be empty when FixedTarget is set");
        return Err(ConfigError::InvalidValue {
            section: "Target".to_string(),
            key: "Host".to_string(),
            value: String::new(),
        });
    }
    config.target_host = host;

    Ok(())
}

/// `[Channels]`: feature flags plus the passthrough channel list. Names
/// longer than the wire limit reject the configuration, they are never
/// truncated.
fn load_channels(store: &IniStore, config: &mut Config) -> Result<()> {
    config.gfx = read_bool(store, &defaults::GFX);
    config.display_control = read_bool(store, &defaults::DISPLAY_CONTROL);
    config.clipboard = read_bool(store, &defaults::CLIPBOARD);
    config.audio_output = read_bool(store, &defaults::AUDIO_OUTPUT);
    config.remote_app = read_bool(store, &defaults::REMOTE_APP);
    config.passthrough = read_list(store.get_str("Channels", "Passthrough"));

    for name in &config.passthrough {
        if name.len() > defaults::CHANNEL_NAME_MAX {
            error!("passthrough channel '{}': name too long", name);
            return Err(ConfigError::NameTooLong {
                name: name.clone(),
                max: defaults::CHANNEL_NAME_MAX,
            });
        }
    }

    Ok(())
}

fn load_input(store: &IniStore, config: &mut Config) -> Result<()> {
    config.keyboard = read_bool(store, &defaults::KEYBOARD);
    config.mouse = read_bool(store, &defaults::MOUSE);
    Ok(())
}

fn load_security(store: &IniStore, config: &mut Config) -> Result<()> {
    config.server_tls_security = read_bool(store, &defaults::SERVER_TLS_SECURITY);
    config.server_rdp_security = read_bool(store, &defaults::SERVER_RDP_SECURITY);

    config.client_tls_security = read_bool(store, &defaults::CLIENT_TLS_SECURITY);
    config.client_nla_security = read_bool(store, &defaults::CLIENT_NLA_SECURITY);
    config.client_rdp_security = read_bool(store, &defaults::CLIENT_RDP_SECURITY);
    config.client_allow_fallback_to_tls = read_bool(store, &defaults::CLIENT_ALLOW_FALLBACK_TO_TLS);

    Ok(())
}

fn load_plugins(store: &IniStore, config: &mut Config) -> Result<()> {
    config.modules = read_list(store.get_str("Plugins", "Modules"));
    config.required_plugins = read_list(store.get_str("Plugins", "Required"));
    Ok(())
}

fn load_clipboard(store: &IniStore, config: &mut Config) -> Result<()> {
    config.text_only = read_bool(store, &defaults::TEXT_ONLY);

    if let Some(max) = read_u32(store, "Clipboard", "MaxTextLength", false)? {
        config.max_text_length = max;
    }

    Ok(())
}

fn load_gfx_settings(store: &IniStore, config: &mut Config) -> Result<()> {
    config.decode_gfx = read_bool(store, &defaults::DECODE_GFX);
    Ok(())
}

/// `[Certificates]`: three credential pairs, each of which must be given
/// as exactly one of a file path or inline content.
fn load_certificates(store: &IniStore, config: &mut Config) -> Result<()> {
    (config.certificate_file, config.certificate_content) =
        load_credential(store, "CertificateFile", "CertificateContent")?;
    (config.private_key_file, config.private_key_content) =
        load_credential(store, "PrivateKeyFile", "PrivateKeyContent")?;
    (config.rdp_key_file, config.rdp_key_content) =
        load_credential(store, "RdpKeyFile", "RdpKeyContent")?;

    Ok(())
}

/// Read one credential pair: a declared file must exist, declared content
/// must be non-empty, and exactly one of the two must be present.
fn load_credential(
    store: &IniStore,
    file_key: &str,
    content_key: &str,
) -> Result<(Option<String>, Option<String>)> {
    const SECTION: &str = "Certificates";

    let file = read_str(store, SECTION, file_key, false)?;
    if let Some(path) = &file {
        if !file_exists(Path::new(path)) {
            error!("{}/{} file {} does not exist", SECTION, file_key, path);
            return Err(ConfigError::FileNotFound {
                section: SECTION.to_string(),
                key: file_key.to_string(),
                path: path.clone(),
            });
        }
    }

    let content = read_str(store, SECTION, content_key, false)?;
    if let Some(content) = &content {
        if content.is_empty() {
            error!("{}/{} has invalid empty value", SECTION, content_key);
            return Err(ConfigError::EmptyContent {
                section: SECTION.to_string(),
                key: content_key.to_string(),
            });
        }
    }

    match (&file, &content) {
        (Some(_), Some(_)) => {
            error!(
                "{}/{} and {}/{} are mutually exclusive options",
                SECTION, file_key, SECTION, content_key
            );
            Err(ConfigError::MutuallyExclusive {
                section: SECTION.to_string(),
                file_key: file_key.to_string(),
                content_key: content_key.to_string(),
            })
        }
        (None, None) => {
            error!(
                "{}/{} or {}/{} are required settings",
                SECTION, file_key, SECTION, content_key
            );
            Err(ConfigError::RequiredMissing {
                section: SECTION.to_string(),
                file_key: file_key.to_string(),
                content_key: content_key.to_string(),
            })
        }
        _ => Ok((file, content)),
    }
}
