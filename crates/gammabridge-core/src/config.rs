//! Bridge configuration.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BridgeError, Result};
use crate::owned::AllocPolicy;
use crate::surface::SurfaceKind;

/// Environment variable selecting the surface (`builtin` or `linked`).
pub const SURFACE_ENV: &str = "GAMMABRIDGE_SURFACE";

/// Environment variable selecting the allocation policy (`abort` or `propagate`).
pub const ALLOC_POLICY_ENV: &str = "GAMMABRIDGE_ALLOC_POLICY";

/// Settings for a [`Bridge`](crate::Bridge).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub surface: SurfaceKind,
    pub alloc_policy: AllocPolicy,
}

impl BridgeConfig {
    /// Read settings from the environment, falling back to defaults on bad
    /// values.
    pub fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring bridge configuration from environment");
            Self::default()
        })
    }

    /// Read settings from the environment. Unset variables keep defaults.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(SURFACE_ENV) {
            config.surface = utf8("surface", value)?.parse()?;
        }
        if let Some(value) = lookup(ALLOC_POLICY_ENV) {
            config.alloc_policy = utf8("alloc_policy", value)?.parse()?;
        }
        Ok(config)
    }
}

fn utf8(key: &'static str, value: OsString) -> Result<String> {
    value.into_string().map_err(|raw| BridgeError::Config {
        key,
        value: raw.to_string_lossy().into_owned(),
    })
}
