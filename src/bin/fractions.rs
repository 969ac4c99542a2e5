use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use lib::display::{decimal_places, render_table};
use lib::{search, SearchParameters, SelectionMode};

// built-in example parameters from before the flags existed: pi to five
// decimals, a tight tolerance, and a few seconds to look around
const DEFAULT_TARGET: f64 = 3.14159265;
const DEFAULT_DELTA: f64 = 0.00001;
const DEFAULT_TIME_LIMIT: f64 = 5.0;

#[derive(Debug, Parser)]
#[command(name = "fractions")]
#[command(about = "approximate a target ratio with small integer fractions")]
struct Opt {
    /// target ratio to approximate
    #[arg(long, short = 'c')]
    target: Option<f64>,

    /// largest allowed |a/b - target|
    #[arg(long)]
    delta: Option<f64>,

    /// wall clock budget for the search, in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// only keep fractions at or above the target
    #[arg(long)]
    positive_only: bool,

    /// 1: stop at the first ten within delta, 2: minimize a + b for the whole budget
    #[arg(long)]
    mode: Option<u8>,

    /// TOML file with the same parameters; explicit flags win
    #[arg(long)]
    config: Option<String>,

    /// write the resolved parameters back out as TOML before searching
    #[arg(long)]
    write_config: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
struct SearchConfig {
    target: f64,
    delta: f64,
    time_limit: f64,
    positive_only: bool,
    mode: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            target: DEFAULT_TARGET,
            delta: DEFAULT_DELTA,
            time_limit: DEFAULT_TIME_LIMIT,
            positive_only: false,
            mode: 1,
        }
    }
}

fn load_config(path: &str) -> Option<SearchConfig> {
    let mut file = File::open(path).ok()?;
    let mut buf = String::new();
    file.read_to_string(&mut buf).ok()?;
    toml::from_str(buf.as_str()).ok()
}

fn save_config(config: &SearchConfig, path: &str) {
    let string = toml::to_string(config).unwrap();
    let mut file = BufWriter::new(
        File::options()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)
            .unwrap(),
    );
    file.write_all(string.as_bytes()).unwrap();
    file.flush().unwrap();
}

fn main() {
    let opts = Opt::parse();

    let base = opts
        .config
        .as_deref()
        .and_then(load_config)
        .unwrap_or_default();
    let config = SearchConfig {
        target: opts.target.unwrap_or(base.target),
        delta: opts.delta.unwrap_or(base.delta),
        time_limit: opts.time_limit.unwrap_or(base.time_limit),
        positive_only: opts.positive_only || base.positive_only,
        mode: opts.mode.unwrap_or(base.mode),
    };

    if let Some(path) = &opts.write_config {
        save_config(&config, path);
    }

    let mode = SelectionMode::from_flag(config.mode).unwrap();
    let params = SearchParameters {
        target: config.target,
        tolerance: config.delta,
        time_limit: Duration::from_secs_f64(config.time_limit),
        positive_only: config.positive_only,
        mode,
    };

    println!(
        "searching for fractions close to {} within a delta of {} and a time limit of {} seconds",
        config.target, config.delta, config.time_limit
    );

    let results = search(&params);

    println!(
        "{}",
        render_table(&results, decimal_places(&config.delta.to_string()))
    );
}
