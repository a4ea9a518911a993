//! # speechbridge
//!
//! Build tooling for the Speechbridge website. The page itself is rendered by
//! [`speechbridge_site`]; this crate adds:
//!
//! - [`config`]: optional `speechbridge.toml` with deploy-time overrides
//! - [`audit`]: anchor and placeholder checks on the rendered HTML
//! - [`cli`]: the `speechbridge build | check | content` commands
//!
//! ```no_run
//! use speechbridge::config::SiteConfig;
//!
//! let config = SiteConfig::load(std::path::Path::new("."));
//! let content = config.content().expect("valid content");
//! let html = speechbridge_site::render_site(&content);
//! let report = speechbridge::audit::audit_html(&html);
//! assert!(report.is_sound());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;

pub use audit::{AuditReport, audit_html};
pub use config::SiteConfig;
pub use error::ConfigError;
