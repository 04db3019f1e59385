use anyhow::{Context, Result};
use care::{CareThresholds, ServiceReport, WeatherCondition};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::UserId;
use engine::{
    EngineConfig, ModelStatus, Preview, Recommendation, ShoeEngine, Statistics, DEFAULT_ROWS,
};
use model::TrainingConfig;
use pipeline::Occasion;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// SoleMate - Shoe Recommendation and Care Assistant
#[derive(Parser)]
#[command(name = "solemate")]
#[command(about = "Shoe recommendations and personalized care advice", long_about = None)]
struct Cli {
    /// Directory holding users.csv, shoes.csv, interactions.csv and care_history.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Seed for model initialisation and negative sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Training epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Latent factors per embedding
    #[arg(long)]
    components: Option<usize>,

    /// Unobserved items sampled per interaction during training
    #[arg(long)]
    negatives: Option<usize>,

    /// Default number of recommendations when a command gives no --limit
    #[arg(long)]
    limit: Option<usize>,

    /// Days without care before a care tip is given
    #[arg(long)]
    tip_days: Option<i64>,

    /// Temperature (Celsius) below which cold-storage tips are given
    #[arg(long)]
    cold_below: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the first rows of every table
    Preview {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
    },

    /// Get shoe recommendations for a user
    Recommend {
        #[arg(long)]
        user_id: UserId,

        /// Number of recommendations (defaults to the engine's limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Get recommendations for an outfit or event
    Occasion {
        /// Casual, Formal, Sports, Wedding, Workout or Party
        #[arg(long)]
        event: Occasion,

        #[arg(long)]
        user_id: UserId,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Cleaning notifications and replacement suggestions
    Services {
        /// Sunny, Rainy, Humid or Cold
        #[arg(long, default_value = "Sunny")]
        weather: WeatherCondition,
    },

    /// Care tips for the current weather
    Tips {
        #[arg(long, default_value = "Sunny")]
        weather: WeatherCondition,

        /// Only evaluate this user's shoes
        #[arg(long)]
        user_id: Option<UserId>,
    },

    /// Dataset statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli);

    let start = Instant::now();
    let engine = ShoeEngine::load(&cli.data_dir, config)
        .with_context(|| format!("Failed to load shoe data from {}", cli.data_dir.display()))?;
    info!("Engine ready in {:?}", start.elapsed());
    if let ModelStatus::Unavailable(reason) = engine.model_status() {
        eprintln!("{} Recommendations unavailable: {}", "!".yellow(), reason);
    }

    let default_limit = engine.config().default_limit;
    match cli.command {
        Commands::Preview { rows } => {
            let preview = engine.preview(rows);
            emit(cli.format, &preview, print_preview)?;
        }
        Commands::Recommend { user_id, limit } => {
            let recs = engine
                .recommend(user_id, limit.unwrap_or(default_limit))
                .context("Failed to generate recommendations")?;
            emit(cli.format, &recs, |r| print_recommendations(user_id, None, r))?;
        }
        Commands::Occasion {
            event,
            user_id,
            limit,
        } => {
            let recs = engine
                .recommend_for_occasion(user_id, event, limit.unwrap_or(default_limit))
                .context("Failed to generate occasion recommendations")?;
            emit(cli.format, &recs, |r| print_recommendations(user_id, Some(event), r))?;
        }
        Commands::Services { weather } => {
            let report = engine.personalized_services(weather);
            emit(cli.format, &report, |r| print_services(weather, r))?;
        }
        Commands::Tips { weather, user_id } => {
            let tips = engine.care_tips(weather, user_id);
            emit(cli.format, &tips, |t| print_tips(weather, t))?;
        }
        Commands::Stats => {
            let stats = engine.statistics();
            emit(cli.format, &stats, print_statistics)?;
        }
    }

    Ok(())
}

/// Defaults overridden by the global flags
fn build_config(cli: &Cli) -> EngineConfig {
    let mut training = TrainingConfig::default();
    if let Some(seed) = cli.seed {
        training = training.with_seed(seed);
    }
    if let Some(epochs) = cli.epochs {
        training = training.with_epochs(epochs);
    }
    if let Some(components) = cli.components {
        training = training.with_components(components);
    }
    if let Some(negatives) = cli.negatives {
        training = training.with_negatives_per_positive(negatives);
    }

    let mut thresholds = CareThresholds::default();
    if let Some(days) = cli.tip_days {
        thresholds = thresholds.with_tip_days(days);
    }
    if let Some(celsius) = cli.cold_below {
        thresholds = thresholds.with_cold_temperature(celsius);
    }

    let mut config = EngineConfig::default()
        .with_training(training)
        .with_thresholds(thresholds);
    if let Some(limit) = cli.limit {
        config = config.with_default_limit(limit);
    }
    config
}

/// Print `value` as pretty JSON or through the text printer
fn emit<T: Serialize>(format: Format, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    match format {
        Format::Json => {
            let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{}", json);
        }
        Format::Text => text(value),
    }
    Ok(())
}

fn print_recommendations(user_id: UserId, occasion: Option<Occasion>, recs: &[Recommendation]) {
    let header = match occasion {
        Some(o) => format!("Recommendations for user {} ({}):", user_id, o),
        None => format!("Recommendations for user {}:", user_id),
    };
    println!("{}", header.bold().blue());

    if recs.is_empty() {
        println!("  No recommendations available.");
        return;
    }
    for (i, rec) in recs.iter().enumerate() {
        println!(
            "{}. {} {} [{}, {}] (id {})",
            (i + 1).to_string().green(),
            rec.brand,
            rec.model.bold(),
            rec.shoe_type,
            rec.color,
            rec.shoe_id
        );
    }
}

fn print_services(weather: WeatherCondition, report: &ServiceReport) {
    println!("{}", format!("Personalized services ({}):", weather).bold().blue());

    println!("{}", "Notifications".bold());
    if report.notifications.is_empty() {
        println!("  No notifications at this time.");
    }
    for n in &report.notifications {
        println!("{}{}", "• ".cyan(), n);
    }

    println!("{}", "Replacement suggestions".bold());
    if report.replacements.is_empty() {
        println!("  No replacement suggestions at this time.");
    }
    for r in &report.replacements {
        println!("{}{}", "• ".yellow(), r);
    }
}

fn print_tips(weather: WeatherCondition, tips: &[String]) {
    println!("{}", format!("Care tips ({}):", weather).bold().blue());
    if tips.is_empty() {
        println!("  No care tips at this time.");
    }
    for tip in tips {
        println!("{}{}", "• ".green(), tip);
    }
}

fn print_counts<L: std::fmt::Display>(title: &str, counts: &[(L, usize)]) {
    println!("{}", title.bold());
    for (label, count) in counts {
        println!("  {:<16} {}", label.to_string(), count);
    }
}

fn print_statistics(stats: &Statistics) {
    println!("{}", "Dataset statistics:".bold().blue());
    print_counts("Interaction types", &stats.interaction_types);
    print_counts("Shoe types", &stats.shoe_types);
    print_counts("Most active users", &stats.most_active_users);
    print_counts("Most cared-for shoes", &stats.most_cared_for_shoes);
}

fn print_preview(preview: &Preview) {
    println!("{}", "Users".bold().blue());
    for u in &preview.users {
        println!("  {} {} {}", u.user_id, u.typical_usage, u.preferred_color);
    }

    println!("{}", "Shoes".bold().blue());
    for s in &preview.shoes {
        println!(
            "  {} {} {} | {} | {} | {}",
            s.shoe_id, s.brand, s.model, s.shoe_type, s.color, s.material
        );
    }

    println!("{}", "Interactions".bold().blue());
    for i in &preview.interactions {
        println!(
            "  user {} shoe {} {} at {}",
            i.user_id,
            i.shoe_id,
            i.kind.as_str(),
            i.timestamp
        );
    }

    println!("{}", "Care history".bold().blue());
    for c in &preview.care_history {
        println!(
            "  user {} shoe {} {:?} at {}",
            c.user_id, c.shoe_id, c.care_type, c.timestamp
        );
    }
}
