//! Default configuration values
//!
//! Single source of truth for per-key boolean defaults. Section loaders
//! pass these descriptors to the boolean reader instead of spelling the
//! section, key, and fallback at every call site.

/// Descriptor of one boolean configuration key.
pub(crate) struct BoolKey {
    /// INI section the key lives in
    pub section: &'static str,
    /// Key name within the section
    pub key: &'static str,
    /// Value used when the key is absent
    pub fallback: bool,
}

const fn bool_key(section: &'static str, key: &'static str, fallback: bool) -> BoolKey {
    BoolKey {
        section,
        key,
        fallback,
    }
}

// Target
pub(crate) const FIXED_TARGET: BoolKey = bool_key("Target", "FixedTarget", false);

// Channels
pub(crate) const GFX: BoolKey = bool_key("Channels", "GFX", true);
pub(crate) const DISPLAY_CONTROL: BoolKey = bool_key("Channels", "DisplayControl", true);
pub(crate) const CLIPBOARD: BoolKey = bool_key("Channels", "Clipboard", false);
pub(crate) const AUDIO_OUTPUT: BoolKey = bool_key("Channels", "AudioOutput", true);
pub(crate) const REMOTE_APP: BoolKey = bool_key("Channels", "RemoteApp", false);

// Input
pub(crate) const KEYBOARD: BoolKey = bool_key("Input", "Keyboard", true);
pub(crate) const MOUSE: BoolKey = bool_key("Input", "Mouse", true);

// Security
pub(crate) const SERVER_TLS_SECURITY: BoolKey = bool_key("Security", "ServerTlsSecurity", true);
pub(crate) const SERVER_RDP_SECURITY: BoolKey = bool_key("Security", "ServerRdpSecurity", true);
pub(crate) const CLIENT_TLS_SECURITY: BoolKey = bool_key("Security", "ClientTlsSecurity", true);
pub(crate) const CLIENT_NLA_SECURITY: BoolKey = bool_key("Security", "ClientNlaSecurity", true);
pub(crate) const CLIENT_RDP_SECURITY: BoolKey = bool_key("Security", "ClientRdpSecurity", true);
pub(crate) const CLIENT_ALLOW_FALLBACK_TO_TLS: BoolKey =
    bool_key("Security", "ClientAllowFallbackToTls", true);

// Clipboard
pub(crate) const TEXT_ONLY: BoolKey = bool_key("Clipboard", "TextOnly", false);

// GFXSettings
pub(crate) const DECODE_GFX: BoolKey = bool_key("GFXSettings", "DecodeGFX", false);

/// Maximum length of a static virtual channel name, in bytes.
///
/// Names longer than this cannot be carried by the wire protocol, so a
/// longer passthrough entry rejects the whole configuration rather than
/// being truncated.
pub const CHANNEL_NAME_MAX: usize = 7;
