use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use collate_mastery::config::{accounts_file, load_account_list, load_out_folder, out_folder_file};
use collate_mastery::models::{DEFAULT_BASE_URL, DEFAULT_REGION};
use collate_mastery::report::{collated_report, render_report};
use collate_mastery::report_out::{write_json_report, write_report};
use collate_mastery::{DisplayMode, HttpPageSource, MasteryError, ReportOptions, collate};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "collate-mastery",
    version,
    about = "Collate champion mastery across several accounts into one ranked report"
)]
struct Cli {
    /// Draw a bar of X marks per champion instead of points and tokens.
    #[arg(short, long)]
    visual: bool,

    /// Directory holding usernames.txt and out_folder.txt.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Region code sent with every lookup.
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Mastery lookup endpoint.
    #[arg(long, env = "MASTERY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout; waits indefinitely when omitted.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the collated data as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let accounts_path = accounts_file(&cli.config_dir);
    let accounts = load_account_list(&accounts_path)
        .with_context(|| format!("failed to read '{}'", accounts_path.display()))?;
    let out_folder_path = out_folder_file(&cli.config_dir);
    let out_folder = load_out_folder(&out_folder_path)
        .with_context(|| format!("failed to read '{}'", out_folder_path.display()))?;

    let source = HttpPageSource::new(
        cli.base_url.as_str(),
        cli.region.as_str(),
        cli.timeout_secs.map(Duration::from_secs),
    )?;
    let collation = collate(&source, &accounts).context("failed to collate mastery pages")?;

    let generated_at = Local::now().naive_local();
    if cli.json {
        let view = collated_report(&collation.combined, &collation.stats, generated_at);
        let json = serde_json::to_string_pretty(&view).map_err(MasteryError::from)?;
        println!("{json}");
        if let Some(folder) = out_folder {
            let path = write_json_report(&folder, &json, generated_at)
                .with_context(|| format!("failed to write report into '{}'", folder.display()))?;
            tracing::info!("wrote to {}", path.display());
        }
        return Ok(());
    }

    let report_options = ReportOptions {
        display: DisplayMode::from_visual_flag(cli.visual),
    };
    let report = render_report(
        &collation.combined,
        &collation.stats,
        &report_options,
        generated_at,
    );
    println!("{report}");

    if let Some(folder) = out_folder {
        let path = write_report(&folder, &report, generated_at)
            .with_context(|| format!("failed to write report into '{}'", folder.display()))?;
        tracing::info!("wrote to {}", path.display());
    }

    Ok(())
}

fn error_code(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<MasteryError>()
        .map_or("error", MasteryError::code)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("collate_mastery=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error[{}]: {error:#}", error_code(&error));
            ExitCode::from(1)
        }
    }
}
