//! Wi-Fi Extender Pro CLI

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;
use wx_core::catalog::{products_in, ProductCategory};
use wx_core::config::PHASE_INTERVAL_ENV;
use wx_core::report::{self, ReportFormat};
use wx_core::support::{results_summary, search};
use wx_core::{
    AnalysisConfig, AnalysisSequencer, CategoryFilter, CoreError, CoreResult, Notice, NoticeLevel, Notifier,
};

#[derive(Parser)]
#[command(name = "wx-analyze")]
#[command(about = "Wi-Fi network analysis and support lookup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a network analysis and print the report
    Analyze {
        /// Pause between phases in milliseconds (overrides WX_PHASE_INTERVAL_MS)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Search the FAQ
    Faq {
        /// Text to look for in questions and answers
        query: Option<String>,

        /// Category (all, setup, troubleshooting, features, technical)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// List products
    Products {
        /// Category (home, business)
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Sends sequencer notices to the log
struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Info => info!("{}", notice.message),
            NoticeLevel::Success => info!("✓ {}", notice.message),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    match cli.command {
        Commands::Analyze { interval_ms, seed, format } => {
            cmd_analyze(interval_ms, seed, format).await;
        }
        Commands::Faq { query, category } => {
            cmd_faq(query.unwrap_or_default(), category);
        }
        Commands::Products { category } => {
            cmd_products(category);
        }
    }
}

async fn cmd_analyze(interval_ms: Option<u64>, seed: Option<u64>, format: String) {
    let config = match analysis_config(interval_ms, |key| std::env::var(key).ok()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("Analyzing network");
    match analyze(&config, &mut rng, format).await {
        Ok(content) => println!("{}", content),
        Err(e) => {
            error!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Only the phase interval matters here. `--interval-ms` takes precedence and
/// the environment is not consulted when it is given.
fn analysis_config<F>(interval_ms: Option<u64>, lookup: F) -> CoreResult<AnalysisConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let phase_interval_ms = match interval_ms {
        Some(ms) => ms,
        None => {
            AnalysisConfig::from_lookup(|key| if key == PHASE_INTERVAL_ENV { lookup(key) } else { None })?
                .phase_interval_ms
        }
    };

    Ok(AnalysisConfig {
        phase_interval_ms,
        ..Default::default()
    })
}

/// Run a full analysis and render its report
async fn analyze<R>(config: &AnalysisConfig, rng: &mut R, format: ReportFormat) -> CoreResult<String>
where
    R: Rng + ?Sized,
{
    let mut sequencer = AnalysisSequencer::new(config);
    run_analysis(&mut sequencer, config.phase_interval(), rng, &LogNotifier).await?;

    match sequencer.report() {
        Some(result) => report::generate_report(result, format),
        None => Err(CoreError::AnalysisInProgress),
    }
}

/// Start a run and tick it to completion, sleeping `interval` before each phase
async fn run_analysis<R, N>(
    sequencer: &mut AnalysisSequencer,
    interval: Duration,
    rng: &mut R,
    notifier: &N,
) -> CoreResult<()>
where
    R: Rng + ?Sized,
    N: Notifier + ?Sized,
{
    sequencer.start()?;
    loop {
        tokio::time::sleep(interval).await;
        if !sequencer.advance(rng, notifier) {
            break;
        }
    }
    debug!(progress = sequencer.progress(), "Analysis loop finished");
    Ok(())
}

fn cmd_faq(query: String, category: String) {
    let filter: CategoryFilter = match category.parse() {
        Ok(filter) => filter,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let entries = search(&query, filter);
    println!("\n{}\n{}", results_summary(entries.len(), &query), "=".repeat(50));

    for entry in entries {
        println!("\n[{}] {}", entry.category, entry.question);
        println!("  {}", entry.answer);
    }
}

fn cmd_products(category: Option<String>) {
    let categories = match category.map(|c| c.parse::<ProductCategory>()) {
        None => ProductCategory::ALL.to_vec(),
        Some(Ok(category)) => vec![category],
        Some(Err(e)) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    for category in categories {
        println!("\n{} {}\n{}", category.icon(), category.name(), "=".repeat(50));
        for product in products_in(category) {
            let popular = if product.popular { "  [Most Popular]" } else { "" };
            println!("\n{} - {}{}", product.name, product.price, popular);
            println!("  Coverage: {} | Speed: {} | Devices: {}", product.coverage, product.speeds, product.devices);
            println!("  Rating: {:.1} | Best for: {}", product.rating, product.best_for);
            println!("  Features: {}", product.features.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use wx_core::config::TOAST_LIFETIME_ENV;
    use wx_core::sequencer::PHASES;

    #[tokio::test]
    async fn test_run_analysis_completes() {
        let mut sequencer = AnalysisSequencer::default();
        let mut rng = StdRng::seed_from_u64(42);
        let notices = RefCell::new(Vec::new());
        let record = |n: Notice| notices.borrow_mut().push(n);

        run_analysis(&mut sequencer, Duration::ZERO, &mut rng, &record)
            .await
            .unwrap();

        assert_eq!(sequencer.progress(), 100);
        assert_eq!(sequencer.phase_label(), "Complete");
        assert!(sequencer.report().is_some());

        let notices = notices.into_inner();
        assert_eq!(notices.len(), PHASES.len() + 1);
        assert_eq!(notices.last().unwrap().level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn test_run_analysis_is_reproducible() {
        let mut first = AnalysisSequencer::default();
        let mut second = AnalysisSequencer::default();

        run_analysis(&mut first, Duration::ZERO, &mut StdRng::seed_from_u64(7), &LogNotifier)
            .await
            .unwrap();
        run_analysis(&mut second, Duration::ZERO, &mut StdRng::seed_from_u64(7), &LogNotifier)
            .await
            .unwrap();

        let (a, b) = (first.report().unwrap(), second.report().unwrap());
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.speed_history, b.speed_history);
    }

    #[tokio::test]
    async fn test_run_analysis_rejects_active_sequencer() {
        let mut sequencer = AnalysisSequencer::default();
        sequencer.start().unwrap();

        let result = run_analysis(&mut sequencer, Duration::ZERO, &mut StdRng::seed_from_u64(1), &LogNotifier).await;
        assert_eq!(result, Err(CoreError::AnalysisInProgress));
    }

    #[test]
    fn test_cli_parses_analyze_flags() {
        let cli = Cli::try_parse_from(["wx-analyze", "-v", "analyze", "--interval-ms", "0", "--seed", "3", "--format", "json"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { interval_ms, seed, format } => {
                assert_eq!(interval_ms, Some(0));
                assert_eq!(seed, Some(3));
                assert_eq!(format, "json");
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_cli_faq_defaults_to_all() {
        let cli = Cli::try_parse_from(["wx-analyze", "faq", "router"]).unwrap();
        match cli.command {
            Commands::Faq { query, category } => {
                assert_eq!(query.as_deref(), Some("router"));
                assert_eq!(category, "all");
            }
            _ => panic!("expected faq"),
        }
    }

    #[tokio::test]
    async fn test_json_report_is_the_only_output() {
        let config = analysis_config(Some(0), |_| None).unwrap();
        let json = analyze(&config, &mut StdRng::seed_from_u64(1), ReportFormat::Json)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["metrics"]["network_name"].is_string());
        assert_eq!(value["speed_history"].as_array().unwrap().len(), 24);
        assert!(value["recommendations"].is_array());
    }

    #[test]
    fn test_config_ignores_toast_lifetime() {
        let config = analysis_config(None, |key| match key {
            TOAST_LIFETIME_ENV => Some("soon".to_string()),
            PHASE_INTERVAL_ENV => Some("25".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.phase_interval(), Duration::from_millis(25));
    }

    #[test]
    fn test_interval_flag_skips_environment() {
        let config = analysis_config(Some(10), |key| match key {
            PHASE_INTERVAL_ENV => Some("later".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.phase_interval_ms, 10);
    }

    #[test]
    fn test_bad_interval_without_flag_is_error() {
        let result = analysis_config(None, |key| match key {
            PHASE_INTERVAL_ENV => Some("later".to_string()),
            _ => None,
        });

        assert!(matches!(result, Err(CoreError::Config(_))));
    }
}
