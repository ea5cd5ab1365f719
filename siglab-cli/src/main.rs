//! SigLab CLI — signal analysis, search-space inspection, and candidate sampling.
//!
//! Commands:
//! - `run` — analyze a CSV candle file with a named strategy or a TOML parameter file
//! - `space` — print the hyperopt search space as JSON
//! - `sample` — draw random candidates from the search space and evaluate them

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

use siglab_core::domain::{Candle, Metadata};
use siglab_core::eval::CandidateEvaluator;
use siglab_core::hyperopt::{
    full_space, indicator_space, roi_space, sample_space, sell_indicator_space, stoploss_space,
    HyperStrategy, ParamMap,
};
use siglab_core::strategy::{HeikinAshiReversal, SmaOpt, SmaTema, Strategy};

#[derive(Parser)]
#[command(name = "siglab", about = "SigLab CLI — candle signal analysis toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a CSV candle file and print a signal summary.
    Run {
        /// Path to a CSV file with date,open,high,low,close,volume rows.
        #[arg(long)]
        candles: PathBuf,

        /// Named strategy: heikinashi, sma_tema, sma_opt.
        #[arg(long)]
        strategy: Option<String>,

        /// Path to a TOML parameter file for the parameterized strategy.
        #[arg(long)]
        params: Option<PathBuf>,

        /// Pair label carried into the analysis.
        #[arg(long, default_value = "UNKNOWN/USDT")]
        pair: String,
    },
    /// Print the hyperopt search space as JSON.
    Space {
        /// Subspace: buy, sell, stoploss, roi, or all.
        #[arg(long, default_value = "all")]
        subspace: String,
    },
    /// Draw random candidates from the full space and evaluate them.
    Sample {
        /// Path to a CSV file with date,open,high,low,close,volume rows.
        #[arg(long)]
        candles: PathBuf,

        /// Number of candidates to draw.
        #[arg(long, default_value_t = 20)]
        count: usize,

        /// RNG seed for reproducible draws.
        #[arg(long)]
        seed: Option<u64>,

        /// Pair label carried into the analysis.
        #[arg(long, default_value = "UNKNOWN/USDT")]
        pair: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            candles,
            strategy,
            params,
            pair,
        } => run_analysis(&candles, strategy.as_deref(), params.as_deref(), &pair),
        Commands::Space { subspace } => print_space(&subspace),
        Commands::Sample {
            candles,
            count,
            seed,
            pair,
        } => run_sample(&candles, count, seed, &pair),
    }
}

fn run_analysis(
    candle_path: &Path,
    strategy_name: Option<&str>,
    params_path: Option<&Path>,
    pair: &str,
) -> Result<()> {
    if strategy_name.is_some() && params_path.is_some() {
        bail!("--strategy and --params are mutually exclusive");
    }

    let candles = load_candles(candle_path)?;
    let metadata = Metadata::new(pair);

    let strategy: Box<dyn Strategy> = if let Some(path) = params_path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let params: ParamMap = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Box::new(HyperStrategy::new(params)?)
    } else {
        build_strategy(strategy_name.unwrap_or("sma_opt"))?
    };

    let analysis = strategy.analyze(&candles, &metadata)?;

    println!("strategy:  {}", strategy.name());
    println!("pair:      {}", analysis.pair);
    println!("candles:   {}", analysis.len());
    println!("buys:      {}", analysis.buy_count());
    println!("sells:     {}", analysis.sell_count());
    println!("stoploss:  {}", strategy.stoploss());
    println!("roi:");
    for (minutes, ratio) in strategy.minimal_roi() {
        println!("  {minutes:>4} min -> {ratio}");
    }

    Ok(())
}

fn build_strategy(name: &str) -> Result<Box<dyn Strategy>> {
    Ok(match name {
        "heikinashi" => Box::new(HeikinAshiReversal::new()),
        "sma_tema" => Box::new(SmaTema::new()),
        "sma_opt" => Box::new(SmaOpt::new()),
        _ => bail!("unknown strategy '{name}'. Valid: heikinashi, sma_tema, sma_opt"),
    })
}

fn print_space(subspace: &str) -> Result<()> {
    let dimensions = match subspace {
        "buy" => indicator_space(),
        "sell" => sell_indicator_space(),
        "stoploss" => stoploss_space(),
        "roi" => roi_space(),
        "all" => full_space(),
        _ => bail!("unknown subspace '{subspace}'. Valid: buy, sell, stoploss, roi, all"),
    };
    println!("{}", serde_json::to_string_pretty(&dimensions)?);
    Ok(())
}

fn run_sample(candle_path: &Path, count: usize, seed: Option<u64>, pair: &str) -> Result<()> {
    let candles = load_candles(candle_path)?;
    let metadata = Metadata::new(pair);
    let space = full_space();

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let candidates: Vec<ParamMap> = (0..count)
        .map(|_| sample_space(&space, &mut rng))
        .collect();

    let evaluations = CandidateEvaluator::new().evaluate(&candles, &metadata, &candidates)?;

    for (params, eval) in candidates.iter().zip(evaluations.iter()) {
        println!(
            "{} buys={} sells={} stoploss={:.4} params={}",
            eval.params_hash,
            eval.buy.iter().filter(|&&b| b).count(),
            eval.sell.iter().filter(|&&b| b).count(),
            eval.stoploss,
            serde_json::to_string(params)?,
        );
    }

    Ok(())
}

// ── CSV ingest ───────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct CandleRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

fn parse_date(raw: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("unparseable date '{raw}'"))?;
    date.and_hms_opt(0, 0, 0)
        .context("midnight is always representable")
}

fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut candles = Vec::new();
    for row in reader.deserialize() {
        let row: CandleRow = row?;
        candles.push(Candle {
            date: parse_date(&row.date)?,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        });
    }
    if candles.is_empty() {
        bail!("no candle rows in {}", path.display());
    }
    Ok(candles)
}
