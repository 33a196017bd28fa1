//! Command line front end: threshold sweeps over labelled scenarios, and
//! one-off scoring of two texts.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser as _;
use tfidf_matcher::scenario::{reports_to_json, Suite};
use tfidf_matcher::{Matcher, MatcherConfig, ThresholdClassifier};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Sweep {
            scenarios,
            thresholds,
            dictionary,
            json,
        } => sweep(scenarios, &thresholds, dictionary, json),
        Command::Score {
            left,
            right,
            threshold,
            dictionary,
            json,
        } => score(&left, &right, threshold, dictionary, json),
    }
}

#[derive(clap::Parser)]
#[command(name = "tfidf-matcher")]
#[command(about = "Score candidate profiles against job advertisements with TF-IDF n-grams")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Evaluate labelled scenarios at a range of thresholds
    Sweep {
        /// Scenario suite (TOML); the built-in suite when omitted
        #[arg(short, long)]
        scenarios: Option<PathBuf>,

        /// Threshold to evaluate at; repeat for several. Overrides the suite's sweep
        #[arg(short, long = "threshold")]
        thresholds: Vec<f64>,

        /// Phrase dictionary and stop words (TOML)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score two texts against each other
    Score {
        left: String,
        right: String,

        /// Also classify the score at this threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Phrase dictionary and stop words (TOML)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

fn load_config(dictionary: Option<PathBuf>) -> anyhow::Result<MatcherConfig> {
    match dictionary {
        Some(path) => MatcherConfig::from_path(&path)
            .with_context(|| format!("loading dictionary {}", path.display())),
        None => Ok(MatcherConfig::default()),
    }
}

fn sweep(
    scenarios: Option<PathBuf>,
    thresholds: &[f64],
    dictionary: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(dictionary)?;
    let suite = match scenarios {
        Some(path) => Suite::from_path(&path)
            .with_context(|| format!("loading scenarios {}", path.display()))?,
        None => Suite::builtin().context("loading built-in scenarios")?,
    };
    let reports = if thresholds.is_empty() {
        suite.sweep_default(&config)?
    } else {
        suite.sweep(thresholds, &config)?
    };

    if json {
        println!("{}", reports_to_json(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}

fn score(
    left: &str,
    right: &str,
    threshold: Option<f64>,
    dictionary: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(dictionary)?;
    let mut matcher: Matcher = Matcher::with_config(&config);
    let score = matcher.score_breakdown(left, right);
    let is_match = threshold.map(|t| ThresholdClassifier::new(t).classify(score.average));

    if json {
        let out = serde_json::json!({
            "score": score,
            "threshold": threshold,
            "is_match": is_match,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Score: {score}");
        if let Some(is_match) = is_match {
            println!("Predicted Match: {is_match}");
        }
    }
    Ok(())
}
