//! Diagnostic rendering of a loaded configuration
//!
//! Purely observational: rendering never fails and never validates.
//! Credential content is reported as a presence indicator only, the
//! secret value itself never reaches the report.

use log::info;

use super::types::Config;

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

fn presence(value: Option<&str>) -> &'static str {
    if value.is_some() {
        "set"
    } else {
        "unset"
    }
}

/// Render the full configuration as a structured diagnostic report.
///
/// Identical configurations render to identical text. Blocks that do not
/// apply are omitted: the Server block without a bind host, the Target
/// block unless a fixed target is set, the passthrough list when empty,
/// and the clipboard length cap when zero.
pub fn render(config: &Config) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Proxy configuration:".to_string());

    if let Some(host) = &config.host {
        lines.push("Server:".to_string());
        lines.push(format!("  Host: {}", host));
        lines.push(format!("  Port: {}", config.port));
    }

    if config.fixed_target {
        lines.push("Target:".to_string());
        if let Some(host) = &config.target_host {
            lines.push(format!("  Host: {}", host));
        }
        lines.push(format!("  Port: {}", config.target_port));
    }

    lines.push("Input:".to_string());
    lines.push(format!("  Keyboard: {}", flag(config.keyboard)));
    lines.push(format!("  Mouse: {}", flag(config.mouse)));

    lines.push("Server security:".to_string());
    lines.push(format!("  ServerTlsSecurity: {}", flag(config.server_tls_security)));
    lines.push(format!("  ServerRdpSecurity: {}", flag(config.server_rdp_security)));

    lines.push("Client security:".to_string());
    lines.push(format!("  ClientNlaSecurity: {}", flag(config.client_nla_security)));
    lines.push(format!("  ClientTlsSecurity: {}", flag(config.client_tls_security)));
    lines.push(format!("  ClientRdpSecurity: {}", flag(config.client_rdp_security)));
    lines.push(format!(
        "  ClientAllowFallbackToTls: {}",
        flag(config.client_allow_fallback_to_tls)
    ));

    lines.push("Channels:".to_string());
    lines.push(format!("  GFX: {}", flag(config.gfx)));
    lines.push(format!("  DisplayControl: {}", flag(config.display_control)));
    lines.push(format!("  Clipboard: {}", flag(config.clipboard)));
    lines.push(format!("  AudioOutput: {}", flag(config.audio_output)));
    lines.push(format!("  RemoteApp: {}", flag(config.remote_app)));

    if !config.passthrough.is_empty() {
        lines.push("Passthrough channels:".to_string());
        for name in &config.passthrough {
            lines.push(format!("  - {}", name));
        }
    }

    lines.push("Clipboard:".to_string());
    lines.push(format!("  TextOnly: {}", flag(config.text_only)));
    if config.max_text_length > 0 {
        lines.push(format!("  MaxTextLength: {}", config.max_text_length));
    }

    lines.push("GFXSettings:".to_string());
    lines.push(format!("  DecodeGFX: {}", flag(config.decode_gfx)));

    lines.push("Plugins/Modules:".to_string());
    for name in &config.modules {
        lines.push(format!("  - {}", name));
    }

    lines.push("Plugins/Required:".to_string());
    for name in &config.required_plugins {
        lines.push(format!("  - {}", name));
    }

    lines.push("Certificates:".to_string());
    if let Some(path) = &config.certificate_file {
        lines.push(format!("  CertificateFile: {}", path));
    }
    lines.push(format!(
        "  CertificateContent: {}",
        presence(config.certificate_content.as_deref())
    ));
    if let Some(path) = &config.private_key_file {
        lines.push(format!("  PrivateKeyFile: {}", path));
    }
    lines.push(format!(
        "  PrivateKeyContent: {}",
        presence(config.private_key_content.as_deref())
    ));
    if let Some(path) = &config.rdp_key_file {
        lines.push(format!("  RdpKeyFile: {}", path));
    }
    lines.push(format!(
        "  RdpKeyContent: {}",
        presence(config.rdp_key_content.as_deref())
    ));

    lines.join("\n")
}

/// Write the diagnostic report to the log sink, one line per entry.
pub fn log_config(config: &Config) {
    for line in render(config).lines() {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditional_blocks_omitted() {
        let config = Config::default();
        let report = render(&config);

        assert!(!report.contains("Server:"), "no bind host, no Server block");
        assert!(!report.contains("Target:"));
        assert!(!report.contains("Passthrough channels:"));
        assert!(!report.contains("MaxTextLength"));
    }

    #[test]
    fn test_conditional_blocks_present() {
        let mut config = Config::default();
        config.host = Some("0.0.0.0".to_string());
        config.port = 3389;
        config.fixed_target = true;
        config.target_host = Some("192.168.1.2".to_string());
        config.target_port = 3389;
        config.passthrough = vec!["rdpdr".to_string()];
        config.max_text_length = 1024;

        let report = render(&config);

        assert!(report.contains("Server:"));
        assert!(report.contains("Target:"));
        assert!(report.contains("  - rdpdr"));
        assert!(report.contains("  MaxTextLength: 1024"));
    }

    #[test]
    fn test_credential_content_is_redacted() {
        let mut config = Config::default();
        config.certificate_content = Some("-----BEGIN CERTIFICATE----- secret".to_string());
        config.private_key_file = Some("/etc/rdproxy/server.key".to_string());

        let report = render(&config);

        assert!(report.contains("CertificateContent: set"));
        assert!(!report.contains("secret"));
        assert!(report.contains("PrivateKeyFile: /etc/rdproxy/server.key"));
        assert!(report.contains("PrivateKeyContent: unset"));
        assert!(report.contains("RdpKeyContent: unset"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut config = Config::default();
        config.modules = vec!["demo".to_string(), "cap".to_string()];

        assert_eq!(render(&config), render(&config));
        assert_eq!(render(&config), render(&config.clone()));
    }
}
