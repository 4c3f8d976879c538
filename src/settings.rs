// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tripclip", "tripclip"));

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub admin_username: String,
    pub currency_symbol: String,
    pub log_level: String,
    pub demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            currency_symbol: "$".to_string(),
            log_level: "warn".to_string(),
            demo: false,
        }
    }
}

/// `tripclip.toml` in the platform config dir. The file is optional.
pub fn default_config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("tripclip.toml"))
}

/// Defaults, then the config file, then `TRIPCLIP_*` env vars, then flags.
pub fn load(m: &clap::ArgMatches) -> Result<Settings> {
    load_with_env(m, None)
}

/// Like [`load`], reading the env layer from `env` instead of the process
/// environment when one is given.
pub fn load_with_env(
    m: &clap::ArgMatches,
    env: Option<config::Map<String, String>>,
) -> Result<Settings> {
    let (path, required) = match m.get_one::<String>("config") {
        Some(p) => (PathBuf::from(p.trim()), true),
        None => (default_config_path()?, false),
    };
    let mut settings: Settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()).required(required))
        .add_source(
            config::Environment::with_prefix("TRIPCLIP")
                .try_parsing(true)
                .source(env),
        )
        .build()
        .with_context(|| format!("Load settings from {}", path.display()))?
        .try_deserialize()
        .context("Invalid settings")?;

    if let Some(admin) = m.get_one::<String>("admin") {
        settings.admin_username = admin.trim().to_string();
    }
    if let Some(sym) = m.get_one::<String>("currency") {
        settings.currency_symbol = sym.trim().to_string();
    }
    if let Some(level) = m.get_one::<String>("log-level") {
        settings.log_level = level.trim().to_string();
    }
    if m.get_flag("demo") {
        settings.demo = true;
    }
    Ok(settings)
}
