//! Command-line interface: argument parsing and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use speechbridge_site::render_site;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::audit::{AuditReport, audit_html};
use crate::config::{CONFIG_FILE, SiteConfig};

/// Default output directory for `build`.
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Parser, Debug)]
#[command(name = "speechbridge")]
#[command(about = "Build and link-check the Speechbridge static website")]
#[command(version)]
pub struct Args {
    /// Config file (default: ./speechbridge.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the site and write <out>/index.html
    Build {
        /// Output directory (default: build.out_dir from config, then "dist")
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Render in memory and audit anchors and placeholder links
    Check {
        /// Treat placeholder links and phone numbers as failures
        #[arg(long)]
        strict: bool,
        /// Print the audit report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective content (defaults plus config overrides) as JSON
    Content,
}

/// Outcome of a command that can fail without erroring, like a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--log-level`.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
            }),
        )
        .init();
}

/// Resolve configuration: explicit `--config` must load, the default file may be absent.
pub fn resolve_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok(SiteConfig::load_from_path(path)?)
        }
        None => {
            let cwd = std::env::current_dir().context("failed to resolve working directory")?;
            Ok(SiteConfig::load(&cwd))
        }
    }
}

/// Run the parsed command. Logging must already be initialised.
pub fn run(args: &Args) -> Result<Outcome> {
    let config = resolve_config(args.config.as_deref())?;

    match &args.command {
        Command::Build { out } => {
            let out_dir = out
                .clone()
                .or_else(|| config.build.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
            let path = build(&config, &out_dir)?;
            println!("{}", path.display());
            Ok(Outcome::Success)
        }
        Command::Check { strict, json } => check(&config, *strict, *json),
        Command::Content => {
            let content = config.content().context("invalid site content")?;
            println!("{}", serde_json::to_string_pretty(&content)?);
            Ok(Outcome::Success)
        }
    }
}

fn render(config: &SiteConfig) -> Result<String> {
    let content = config.content().context("invalid site content")?;
    let html = render_site(&content);
    debug!(bytes = html.len(), "rendered page");
    Ok(html)
}

/// Render and write `index.html` into `out_dir`, creating it if needed.
pub fn build(config: &SiteConfig, out_dir: &Path) -> Result<PathBuf> {
    let html = render(config)?;

    let report = audit_html(&html);
    if !report.is_sound() {
        bail!(
            "rendered page has broken anchors: dangling {:?}, duplicate ids {:?}",
            report.dangling_anchors,
            report.duplicate_ids
        );
    }
    warn_placeholders(&report);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let path = out_dir.join("index.html");
    std::fs::write(&path, &html).with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = html.len(), "site built");
    Ok(path)
}

fn check(config: &SiteConfig, strict: bool, json: bool) -> Result<Outcome> {
    let html = render(config)?;
    let report = audit_html(&html);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    let passed = if strict {
        report.is_deployable()
    } else {
        report.is_sound()
    };
    if passed {
        Ok(Outcome::Success)
    } else {
        Ok(Outcome::Failure)
    }
}

fn warn_placeholders(report: &AuditReport) {
    for link in &report.placeholder_links {
        warn!(
            href = %link.href,
            count = link.count,
            "placeholder links still on the page; set them in {}", CONFIG_FILE
        );
    }
    if let Some(tel) = &report.placeholder_phone {
        warn!(href = %tel, "placeholder phone number; set contact.phone in {}", CONFIG_FILE);
    }
}

fn print_report(report: &AuditReport) {
    println!(
        "ids: {}  anchors: {}  mail addresses: {}",
        report.ids.len(),
        report.anchors.len(),
        report.mailto_addresses.len()
    );

    for anchor in &report.dangling_anchors {
        println!("[error] #{} has no matching element", anchor);
    }
    for id in &report.duplicate_ids {
        println!("[error] id \"{}\" is used more than once", id);
    }
    if report.placeholder_count() > 0 {
        println!(
            "[warn] {} placeholder link(s) still point at \"#\"",
            report.placeholder_count()
        );
    }
    if let Some(tel) = &report.placeholder_phone {
        println!("[warn] placeholder phone number: {}", tel);
    }

    if report.is_deployable() {
        println!("ok: ready to deploy");
    } else if report.is_sound() {
        println!("ok: anchors resolve (placeholders remain)");
    } else {
        println!("failed: broken anchors");
    }
}
