use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use paysign::TransactionFields;
use serde::Deserialize;
use zeroize::Zeroize;

/// A string that must not appear in logs or debug output.
///
/// `Debug` prints `***`; the value is zeroized on drop.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// HTTP basic-auth credentials sent with the request.
#[derive(Debug, Deserialize)]
pub struct BasicAuth {
    pub username: String,
    pub password: Secret,
}

/// Client configuration, loaded from a JSON file.
///
/// `transaction_details` keeps its insertion order — that order is the
/// canonical message order.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub transaction_details: TransactionFields,
    pub pfx_path: PathBuf,
    /// Bundle password. May be omitted from the file and supplied via
    /// `--pfx-password` / `PFX_PASSWORD` instead.
    #[serde(default)]
    pub pfx_password: Option<Secret>,
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub auth: BasicAuth,
    /// When set, log output goes to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_method() -> String {
    "POST".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
