//! Configuration file support.
//!
//! Loads optional `speechbridge.toml` from the working directory. The file
//! fills in deploy-time details (real phone number, booking link, document
//! URLs) without touching the content literals.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use speechbridge_site::types::{RevealOptions, SiteContent};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "speechbridge.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactOverrides,
    /// Replaces the default reveal timing when present
    pub reveal: Option<RevealOptions>,
    /// Document label -> href. Replaces placeholder hrefs before deployment.
    pub documents: BTreeMap<String, String>,
    pub build: BuildConfig,
}

/// Contact fields to override; unset fields keep the defaults.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactOverrides {
    pub email: Option<String>,
    pub enquiry_subject: Option<String>,
    pub region_subject: Option<String>,
    pub phone: Option<String>,
    pub booking_url: Option<String>,
    pub region_list_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for `index.html`
    pub out_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Load `speechbridge.toml` from the given root directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %error_chain(&e), "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Unlike [`SiteConfig::load`], a
    /// missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply the overrides to `content`.
    ///
    /// Returns the `[documents]` labels that matched no document link.
    pub fn apply(&self, content: &mut SiteContent) -> Vec<String> {
        let c = &self.contact;
        let contact = &mut content.contact;
        for (field, value) in [
            (&mut contact.email, &c.email),
            (&mut contact.enquiry_subject, &c.enquiry_subject),
            (&mut contact.region_subject, &c.region_subject),
            (&mut contact.phone, &c.phone),
            (&mut contact.booking_url, &c.booking_url),
            (&mut contact.region_list_url, &c.region_list_url),
        ] {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        if let Some(reveal) = &self.reveal {
            content.reveal = reveal.clone();
        }

        let mut unmatched = Vec::new();
        for (label, href) in &self.documents {
            let mut hits = 0;
            for doc in content.documents_mut().filter(|d| &d.label == label) {
                doc.href = href.clone();
                hits += 1;
            }
            if hits == 0 {
                warn!(label = %label, "document label not found on the page");
                unmatched.push(label.clone());
            } else {
                debug!(label = %label, href = %href, "document link configured");
            }
        }
        unmatched
    }

    /// Build the effective content: defaults plus overrides, validated.
    pub fn content(&self) -> Result<SiteContent, ConfigError> {
        let mut content = SiteContent::default();
        self.apply(&mut content);
        content.validate()?;
        Ok(content)
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
