//! CLI-owned configuration: TOML file + environment + flag overrides.
//!
//! Core never sees these types -- it receives a pre-built `CheckConfig`
//! and `Credentials`. Precedence is flags over environment over file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use uniprobe_core::{CheckConfig, Credentials};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// On-disk configuration for one monitored controller.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    pub controller: Option<String>,
    pub port: Option<u16>,
    /// TLS certificate verification.
    pub ssl: Option<bool>,
    pub site: Option<String>,
    pub mac: Option<String>,
    pub username: Option<String>,
    /// Plaintext password -- prefer the UNIPROBE_PASSWORD env var.
    pub password: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

/// Default config file location, unless overridden on the command line.
pub fn config_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_owned());
    }
    ProjectDirs::from("dev", "ksc98", "uniprobe").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the file config, merged with `UNIPROBE_`-prefixed env vars.
pub fn load(override_path: Option<&Path>) -> Result<FileConfig, CliError> {
    let mut figment = Figment::from(Serialized::defaults(FileConfig::default()));
    if let Some(path) = config_path(override_path) {
        figment = figment.merge(Toml::file(path));
    }
    figment = figment.merge(Env::prefixed("UNIPROBE_"));
    Ok(figment.extract()?)
}

/// Combine CLI flags with the file config into the core's input types.
pub fn resolve(global: &GlobalOpts, file: &FileConfig) -> (CheckConfig, Credentials) {
    let check = CheckConfig {
        controller: global.controller.clone().or_else(|| file.controller.clone()),
        port: global.port.or(file.port).unwrap_or(443),
        verify_tls: if global.insecure {
            false
        } else {
            file.ssl.unwrap_or(true)
        },
        site: global
            .site
            .clone()
            .or_else(|| file.site.clone())
            .unwrap_or_else(|| "default".into()),
        // The MAC is command-specific; the device command fills it in.
        mac: None,
        timeout: Duration::from_secs(global.timeout.or(file.timeout).unwrap_or(30)),
    };

    let credentials = Credentials {
        username: global.username.clone().or_else(|| file.username.clone()),
        password: global
            .password
            .clone()
            .or_else(|| file.password.clone())
            .map(SecretString::from),
    };

    (check, credentials)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global_from(args: &[&str]) -> GlobalOpts {
        Cli::try_parse_from(args).expect("args parse").global
    }

    #[test]
    fn flags_override_file_values() {
        let global = global_from(&[
            "uniprobe",
            "--controller",
            "flag-host",
            "--port",
            "8443",
            "system",
        ]);
        let file = FileConfig {
            controller: Some("file-host".into()),
            port: Some(443),
            site: Some("branch".into()),
            ..FileConfig::default()
        };

        let (check, _) = resolve(&global, &file);
        assert_eq!(check.controller.as_deref(), Some("flag-host"));
        assert_eq!(check.port, 8443);
        // No flag given -- the file value holds.
        assert_eq!(check.site, "branch");
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let global = global_from(&["uniprobe", "system"]);
        let (check, credentials) = resolve(&global, &FileConfig::default());

        assert_eq!(check.controller, None);
        assert_eq!(check.port, 443);
        assert!(check.verify_tls);
        assert_eq!(check.site, "default");
        assert_eq!(check.timeout, Duration::from_secs(30));
        assert_eq!(credentials.username, None);
    }

    #[test]
    fn insecure_flag_disables_verification() {
        let global = global_from(&["uniprobe", "-k", "system"]);
        let file = FileConfig {
            ssl: Some(true),
            ..FileConfig::default()
        };
        let (check, _) = resolve(&global, &file);
        assert!(!check.verify_tls);
    }
}
