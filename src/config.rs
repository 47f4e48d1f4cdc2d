//! Configuration constants and utilities for orthochat
//!
//! The webhook endpoint resolves, highest priority first, from the `--endpoint`
//! flag, the `ORTHOCHAT_ENDPOINT_URL` environment variable, the `endpoint` key of
//! the selected INI profile section, and finally the built-in default.

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Webhook that receives booked demos
pub const DEFAULT_ENDPOINT_URL: &str = "https://automation.moezzhioua.com/webhook/book-demo";

/// Environment variable name for overriding the endpoint
pub const ENDPOINT_ENV_VAR: &str = "ORTHOCHAT_ENDPOINT_URL";

/// Default profile file path for orthochat
pub const DEFAULT_PROFILE_PATH: &str = "~/.orthochat/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "ORTHOCHAT_PROFILE_PATH";

/// Environment variable holding the tracing filter directives
pub const LOG_FILTER_ENV_VAR: &str = "ORTHOCHAT_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

const ENDPOINT_KEY: &str = "endpoint";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Endpoint override from the environment, ignoring blank values
pub fn endpoint_from_env() -> Option<String> {
    std::env::var(ENDPOINT_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

/// Named section of the profile file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub endpoint: Option<String>,
}

impl Profile {
    pub fn blank(name: &str) -> Self {
        Self {
            name: name.to_string(),
            endpoint: None,
        }
    }
}

/// Load a profile section from an INI file
///
/// A missing file or section yields a blank profile. A file that exists but does
/// not parse is an error.
pub fn load_profile(name: &str, path: &str) -> Result<Profile> {
    let expanded = shellexpand::tilde(path);
    let file = Path::new(expanded.as_ref());
    tracing::debug!("Loading profile '{}' from '{}'", name, file.display());

    if !file.exists() {
        tracing::debug!("Profile file not found, using blank profile");
        return Ok(Profile::blank(name));
    }

    let ini = Ini::load_from_file(file)
        .with_context(|| format!("failed to read profile file '{}'", file.display()))?;

    let Some(section) = ini.section(Some(name)) else {
        tracing::debug!("Profile '{}' not found, using blank profile", name);
        return Ok(Profile::blank(name));
    };

    let endpoint = section
        .get(ENDPOINT_KEY)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    Ok(Profile {
        name: name.to_string(),
        endpoint,
    })
}

/// Pick the endpoint by precedence: flag, environment, profile, default
pub fn resolve_endpoint(flag: Option<&str>, env: Option<String>, profile: &Profile) -> String {
    flag.map(str::to_string)
        .or(env)
        .or_else(|| profile.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string())
}
