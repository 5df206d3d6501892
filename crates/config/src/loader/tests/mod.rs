//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Environment tunables (port, timeout, TLS) and their validation.
//! - Explicit values overriding the environment.
//! - Credential resolution through the chain during `build()`.

use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

use crate::credentials::{ConfigFileCredentials, CredentialChain, EnvCredentials, ExplicitCredentials};
use crate::loader::{ConfigError, ConfigLoader, env_var_or_none};

const CREDENTIAL_VARS: [(&str, Option<&str>); 5] = [
    ("SPLUNK_HOST", None),
    ("SPLUNK_TOKEN", None),
    ("SPLUNK_PORT", None),
    ("SPLUNK_TIMEOUT", None),
    ("SPLUNK_SKIP_VERIFY", None),
];

fn env_only_chain() -> CredentialChain {
    CredentialChain::new()
        .with_host_provider(EnvCredentials)
        .with_token_provider(EnvCredentials)
}

#[test]
#[serial]
fn test_env_var_or_none_filters_blank_values() {
    temp_env::with_vars([("SPLUNK_TEST_BLANK", Some("   "))], || {
        assert_eq!(env_var_or_none("SPLUNK_TEST_BLANK"), None);
    });
    temp_env::with_vars([("SPLUNK_TEST_PADDED", Some("  value  "))], || {
        assert_eq!(
            env_var_or_none("SPLUNK_TEST_PADDED").as_deref(),
            Some("value")
        );
    });
}

#[test]
#[serial]
fn test_build_from_environment_credentials() {
    temp_env::with_vars(
        [
            ("SPLUNK_HOST", Some("env.example.com")),
            ("SPLUNK_TOKEN", Some("env-token")),
            ("SPLUNK_PORT", None),
            ("SPLUNK_TIMEOUT", None),
            ("SPLUNK_SKIP_VERIFY", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_credential_chain(env_only_chain())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.host, "env.example.com");
            assert_eq!(config.token.expose_secret(), "env-token");
            assert_eq!(config.port, 8089);
            assert_eq!(config.timeout, Duration::from_secs(30));
            assert!(!config.skip_verify);
        },
    );
}

#[test]
#[serial]
fn test_env_tunables_are_applied() {
    temp_env::with_vars(
        [
            ("SPLUNK_HOST", Some("h")),
            ("SPLUNK_TOKEN", Some("t")),
            ("SPLUNK_PORT", Some("18089")),
            ("SPLUNK_TIMEOUT", Some("5")),
            ("SPLUNK_SKIP_VERIFY", Some("true")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_credential_chain(env_only_chain())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.port, 18089);
            assert_eq!(config.timeout, Duration::from_secs(5));
            assert!(config.skip_verify);
        },
    );
}

#[test]
#[serial]
fn test_explicit_tunables_beat_environment() {
    temp_env::with_vars(
        [("SPLUNK_TIMEOUT", Some("5")), ("SPLUNK_PORT", Some("1234"))],
        || {
            let loader = ConfigLoader::new()
                .with_timeout(Duration::from_secs(9))
                .with_port(9999)
                .from_env()
                .unwrap();
            let config = loader
                .with_credential_chain(
                    CredentialChain::new()
                        .with_host_provider(ExplicitCredentials::new(
                            Some("h".to_string()),
                            None,
                        ))
                        .with_token_provider(ExplicitCredentials::new(
                            None,
                            Some("t".to_string()),
                        )),
                )
                .build()
                .unwrap();

            assert_eq!(config.timeout, Duration::from_secs(9));
            assert_eq!(config.port, 9999);
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_is_rejected() {
    for bad in ["abc", "0", "99999"] {
        temp_env::with_vars([("SPLUNK_TIMEOUT", Some(bad))], || {
            let err = ConfigLoader::new().from_env().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "SPLUNK_TIMEOUT"),
                "unexpected error for {bad}: {err:?}"
            );
        });
    }
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    temp_env::with_vars([("SPLUNK_PORT", Some("70000"))], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_invalid_skip_verify_is_rejected() {
    temp_env::with_vars([("SPLUNK_SKIP_VERIFY", Some("maybe"))], || {
        assert!(matches!(
            ConfigLoader::new().from_env(),
            Err(ConfigError::InvalidValue { .. })
        ));
    });
}

#[test]
#[serial]
fn test_missing_host_is_fatal() {
    temp_env::with_vars(CREDENTIAL_VARS, || {
        let err = ConfigLoader::new()
            .with_credential_chain(env_only_chain())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::HostNotConfigured));
        assert!(err.to_string().contains("splunk configure"));
    });
}

#[test]
#[serial]
fn test_missing_token_is_fatal() {
    temp_env::with_vars(
        [("SPLUNK_HOST", Some("h")), ("SPLUNK_TOKEN", None)],
        || {
            let err = ConfigLoader::new()
                .with_credential_chain(env_only_chain())
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::TokenNotConfigured));
        },
    );
}

#[test]
#[serial]
fn test_config_file_host_takes_precedence_over_env_host() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"host": "file.example.com"}"#).unwrap();

    temp_env::with_vars(
        [
            ("SPLUNK_HOST", Some("env.example.com")),
            ("SPLUNK_TOKEN", Some("t")),
        ],
        || {
            let chain = CredentialChain::new()
                .with_host_provider(ConfigFileCredentials::new(Some(path.clone())))
                .with_host_provider(EnvCredentials)
                .with_token_provider(EnvCredentials);

            let config = ConfigLoader::new()
                .with_credential_chain(chain)
                .build()
                .unwrap();
            assert_eq!(config.host, "file.example.com");
        },
    );
}

#[test]
#[serial]
fn test_explicit_host_beats_config_file_in_standard_chain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"host": "file.example.com"}"#).unwrap();

    temp_env::with_vars(CREDENTIAL_VARS, || {
        let config = ConfigLoader::new()
            .with_host("flag.example.com".to_string())
            .with_token("flag-token".to_string())
            .with_config_path(path.clone())
            .build()
            .unwrap();

        assert_eq!(config.host, "flag.example.com");
        assert_eq!(config.token.expose_secret(), "flag-token");
    });
}
