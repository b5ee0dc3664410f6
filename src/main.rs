use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use covmark::config::Config;
use covmark::coverage::{parse_report, validate_threshold};
use covmark::markdown::{render_markdown, DEFAULT_BADGE_URL};

const CONFIG_FILE: &str = "covmark.toml";
const DEFAULT_INPUT: &str = "coverage.xml";

#[derive(Parser)]
#[command(name = "covmark")]
#[command(about = "Render a coverage XML report as a Markdown summary")]
#[command(version)]
struct Cli {
    /// Coverage report to read (default: coverage.xml)
    input: Option<PathBuf>,

    /// Badge image URL for the report header
    #[arg(long)]
    badge_url: Option<String>,

    /// Fail when overall line coverage is below this percentage
    #[arg(long)]
    fail_under: Option<f64>,

    /// Write the Markdown report to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to config file (default: covmark.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = Config::load(&config_path)?;

    // CLI flags win over config values, config over built-in defaults
    let input = cli
        .input
        .or(config.input)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let badge_url = cli
        .badge_url
        .or(config.badge_url)
        .unwrap_or_else(|| DEFAULT_BADGE_URL.to_string());
    let fail_under = cli.fail_under.or(config.fail_under);

    let content = fs::read_to_string(&input)
        .with_context(|| format!("Could not read coverage report: {}", input.display()))?;

    let report = parse_report(&content)
        .with_context(|| format!("Could not parse coverage report: {}", input.display()))?;

    let rendered = render_markdown(&report, &badge_url);

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Could not write report: {}", path.display()))?;
            println!(
                "{} Report written: {}",
                "📊".cyan(),
                path.display().to_string().green()
            );
        }
        None => print!("{}", rendered),
    }

    if let Some(min) = fail_under {
        let result = validate_threshold(&report, min);
        result.print_summary();
        if !result.passed {
            std::process::exit(1);
        }
    }

    Ok(())
}
