use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::warn;

use ij_compat::build::CompatibilityRange;
use ij_compat::catalog::{self, Catalog, CatalogEntry, CatalogError};
use ij_compat::check::{self, Report, evaluate};
use ij_compat::config::{self, CatalogSource};

/// Any target below or above the declared range
const EXIT_INCOMPATIBLE: u8 = 1;
/// Malformed declarations, unknown target versions, unreadable files
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "ij-compat",
    version,
    about = "Build-range compatibility checker for IntelliJ Platform plugins"
)]
struct Cli {
    /// Catalog file overriding IJ_COMPAT_CATALOG and the bundled snapshot
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a declared since-build/until-build range against IDE releases
    Check {
        /// since-build declaration, e.g. 243 or 243.12.5 (the lower bound is mandatory)
        #[arg(long)]
        since: String,

        /// until-build declaration, e.g. 251.* (omit for an open-ended range)
        #[arg(long)]
        until: Option<String>,

        /// Marketing versions or branch numbers to verify, e.g. 2024.3,251
        #[arg(long, value_delimiter = ',', required = true)]
        targets: Vec<String>,

        /// JSON file of API-usage findings to merge into the report
        #[arg(long, value_name = "FILE")]
        issues: Option<PathBuf>,
    },

    /// List the releases in the catalog
    Releases,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Check {
            since,
            until,
            targets,
            issues,
        } => check_command(
            &catalog,
            &since,
            until.as_deref(),
            &targets,
            issues.as_deref(),
            cli.json,
        ),
        Command::Releases => {
            releases_command(&catalog, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_catalog(flag: Option<&Path>) -> anyhow::Result<Catalog> {
    match config::resolve_catalog_source(flag) {
        CatalogSource::File(path) => catalog::load_from_file(&path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        CatalogSource::Bundled => catalog::load_bundled().context("bundled catalog is invalid"),
    }
}

fn check_command(
    catalog: &Catalog,
    since: &str,
    until: Option<&str>,
    targets: &[String],
    issues_file: Option<&Path>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let range = CompatibilityRange::parse(since, until)?;

    let issues = match issues_file {
        Some(path) => check::load_issues(path)
            .with_context(|| format!("failed to load issues from {}", path.display()))?,
        None => Vec::new(),
    };

    let mut results = Vec::new();
    let mut unknown: Vec<CatalogError> = Vec::new();
    for target in targets {
        match catalog.lookup(target) {
            Ok(entry) => results.push((entry.clone(), evaluate(&range, entry))),
            Err(error) => unknown.push(error),
        }
    }

    let report = Report::build(&range, &results, &issues);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if report.summary.unbounded_above > 0 {
        warn!(
            "Declared range has no until-build; {} target(s) cannot be verified",
            report.summary.unbounded_above
        );
    }
    // Unknown versions mean "cannot verify", never "incompatible"; they are
    // listed after the report and turn the run into an input error.
    for error in &unknown {
        eprintln!("error: {error}");
    }

    if !unknown.is_empty() {
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    } else if report.summary.has_failures() {
        Ok(ExitCode::from(EXIT_INCOMPATIBLE))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn releases_command(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }
    print_releases_table(catalog.entries());
    Ok(())
}

/// Print the catalog as an aligned table
fn print_releases_table(entries: &[CatalogEntry]) {
    let headers = ["VERSION", "BUILD", "RELEASED", "TOOLCHAIN"];
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            [
                entry.marketing_version.clone(),
                entry.build_number.to_string(),
                entry.release_date.to_string(),
                entry.recommended_toolchain.clone(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{h:<width$}", width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect();
        println!("{}", cells.join("  "));
    }
}
