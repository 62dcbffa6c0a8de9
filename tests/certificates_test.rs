//! Certificate section tests
//!
//! Each of the three credentials must be supplied as exactly one of a
//! file path or inline content; a declared file must exist and declared
//! content must be non-empty. Every triple is checked independently.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rdproxy_config::{Config, ConfigError};

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "-----BEGIN-----\n").unwrap();
    path
}

#[test]
fn test_all_file_variants_accepted() {
    let dir = TempDir::new().unwrap();
    let cert = touch(dir.path(), "server.crt");
    let key = touch(dir.path(), "server.key");
    let rdp_key = touch(dir.path(), "rdp.key");

    let ini = format!(
        "[Certificates]\nCertificateFile = {}\nPrivateKeyFile = {}\nRdpKeyFile = {}\n",
        cert.display(),
        key.display(),
        rdp_key.display()
    );

    let config = Config::from_buffer(&ini).unwrap();

    assert_eq!(config.certificate_file.as_deref(), Some(cert.to_str().unwrap()));
    assert_eq!(config.certificate_content, None);
    assert_eq!(config.private_key_file.as_deref(), Some(key.to_str().unwrap()));
    assert_eq!(config.rdp_key_file.as_deref(), Some(rdp_key.to_str().unwrap()));
}

#[test]
fn test_all_content_variants_accepted() {
    let ini = "[Certificates]\n\
               CertificateContent = cert-pem\n\
               PrivateKeyContent = key-pem\n\
               RdpKeyContent = rdp-pem\n";

    let config = Config::from_buffer(ini).unwrap();

    assert_eq!(config.certificate_file, None);
    assert_eq!(config.certificate_content.as_deref(), Some("cert-pem"));
    assert_eq!(config.private_key_content.as_deref(), Some("key-pem"));
    assert_eq!(config.rdp_key_content.as_deref(), Some("rdp-pem"));
}

/// The variants are chosen per triple, not globally.
#[test]
fn test_mixed_variants_across_triples() {
    let dir = TempDir::new().unwrap();
    let cert = touch(dir.path(), "server.crt");
    let rdp_key = touch(dir.path(), "rdp.key");

    let ini = format!(
        "[Certificates]\nCertificateFile = {}\nPrivateKeyContent = key-pem\nRdpKeyFile = {}\n",
        cert.display(),
        rdp_key.display()
    );

    let config = Config::from_buffer(&ini).unwrap();

    assert!(config.certificate_file.is_some());
    assert!(config.private_key_file.is_none());
    assert_eq!(config.private_key_content.as_deref(), Some("key-pem"));
    assert!(config.rdp_key_file.is_some());
}

#[test]
fn test_both_variants_rejected() {
    let dir = TempDir::new().unwrap();
    let cert = touch(dir.path(), "server.crt");

    let ini = format!(
        "[Certificates]\nCertificateFile = {}\nCertificateContent = cert-pem\n",
        cert.display()
    );

    let err = Config::from_buffer(&ini).unwrap_err();
    match err {
        ConfigError::MutuallyExclusive {
            file_key,
            content_key,
            ..
        } => {
            assert_eq!(file_key, "CertificateFile");
            assert_eq!(content_key, "CertificateContent");
        }
        other => panic!("expected MutuallyExclusive, got {other:?}"),
    }
}

/// A triple with neither variant fails, even when the other triples are
/// complete.
#[test]
fn test_missing_triple_rejected() {
    let dir = TempDir::new().unwrap();
    let cert = touch(dir.path(), "server.crt");
    let key = touch(dir.path(), "server.key");

    let ini = format!(
        "[Certificates]\nCertificateFile = {}\nPrivateKeyFile = {}\n",
        cert.display(),
        key.display()
    );

    let err = Config::from_buffer(&ini).unwrap_err();
    match err {
        ConfigError::RequiredMissing { file_key, .. } => {
            assert_eq!(file_key, "RdpKeyFile");
        }
        other => panic!("expected RequiredMissing, got {other:?}"),
    }
}

#[test]
fn test_nonexistent_file_rejected() {
    let ini = "[Certificates]\nCertificateFile = /does/not/exist.crt\n";

    let err = Config::from_buffer(ini).unwrap_err();
    match err {
        ConfigError::FileNotFound { key, path, .. } => {
            assert_eq!(key, "CertificateFile");
            assert_eq!(path, "/does/not/exist.crt");
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_empty_content_rejected() {
    let ini = "[Certificates]\nCertificateContent =\n";

    let err = Config::from_buffer(ini).unwrap_err();
    match err {
        ConfigError::EmptyContent { key, .. } => {
            assert_eq!(key, "CertificateContent");
        }
        other => panic!("expected EmptyContent, got {other:?}"),
    }
}

/// The first failing triple wins; here the certificate triple is fine and
/// the private key triple carries both variants.
#[test]
fn test_second_triple_failure_names_private_key() {
    let dir = TempDir::new().unwrap();
    let cert = touch(dir.path(), "server.crt");
    let key = touch(dir.path(), "server.key");

    let ini = format!(
        "[Certificates]\nCertificateFile = {}\nPrivateKeyFile = {}\nPrivateKeyContent = key-pem\n",
        cert.display(),
        key.display()
    );

    let err = Config::from_buffer(&ini).unwrap_err();
    match err {
        ConfigError::MutuallyExclusive { file_key, .. } => {
            assert_eq!(file_key, "PrivateKeyFile");
        }
        other => panic!("expected MutuallyExclusive, got {other:?}"),
    }
}
