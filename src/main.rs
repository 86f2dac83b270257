//! Voyager Summary - consolidated reports from analysis tool summaries
//!
//! A CLI tool that reads the summary file written by each analysis tool,
//! orders the tools by a fixed priority list, and writes one HTML report
//! and one Markdown report.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Invalid arguments, unreadable input, malformed summary or write failure

mod cli;
mod config;
mod error;
mod io;
mod models;
mod parser;
mod report;
mod scanner;
mod summary;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use io::FsFileAccess;
use scanner::InputScanner;
use summary::{GenerateSummaryInput, GenerateSummaryResult};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Voyager Summary v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run_summary(args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Summary failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .voyager-summary.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to change output paths and the input directory.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run one aggregation and report the outcome.
async fn run_summary(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let scanner = InputScanner::new(config.general.input_dir.clone());
    let inputs = scanner.resolve(&args.tool_md, &args.tool_html)?;

    if inputs.is_empty() {
        warn!("No known tool summaries found; writing empty reports");
    }

    info!(
        "Aggregating {} tool summaries ({} HTML templates)",
        inputs.tool_md.len(),
        inputs.tool_html.len()
    );

    let input = GenerateSummaryInput {
        tool_md: inputs.tool_md,
        tool_html: inputs.tool_html,
        conditions_file: args.conditions_file.clone(),
        conditions: args.conditions.clone(),
        out_html: Some(config.output.html.clone()),
        out_md: Some(config.output.markdown.clone()),
    };

    let result = summary::generate_summary(&FsFileAccess, &input).await?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialize summary result")?;
        println!("{}", json);
    } else if !args.quiet {
        print_result(&result);
    }

    Ok(())
}

fn print_result(result: &GenerateSummaryResult) {
    println!("\n📊 Summary:");
    println!("   Tool summaries parsed: {}", result.parsed_tools_count);
    if let Some(ref path) = result.written_html_path {
        println!("   HTML report: {}", path.display());
    }
    if let Some(ref path) = result.written_md_path {
        println!("   Markdown report: {}", path.display());
    }
    println!("\n✅ Summary complete!");
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
