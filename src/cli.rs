use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub inputs: InputArgs,

    /// Where the report lands; created when absent.
    #[clap(long, env = "OUTPUT_DIR", default_value = "processed")]
    pub output_dir: PathBuf,

    /// Processing year: the consumption export carries no year of its own.
    #[clap(
        long,
        env = "PROCESSING_YEAR",
        default_value_t = Local::now().year(),
        value_parser = clap::value_parser!(i32).range(0..=9999),
    )]
    pub year: i32,

    /// Print a monthly summary table after writing the report.
    #[clap(long)]
    pub summary: bool,
}

#[derive(Parser)]
pub struct InputArgs {
    /// Where the acquisition jobs drop their downloads.
    #[clap(long, env = "DOWNLOADS_DIR", default_value = "downloads")]
    pub downloads_dir: PathBuf,

    /// Spot price dump; defaults to `spot_prices.csv` under the downloads
    /// directory.
    #[clap(long, env = "PRICES_FILE")]
    pub prices_file: Option<PathBuf>,

    /// Filename pattern of the consumption export; the newest match wins.
    #[clap(long, env = "CONSUMPTION_PATTERN", default_value = "consumption*.csv")]
    pub consumption_pattern: String,
}

impl InputArgs {
    #[must_use]
    pub fn prices_file(&self) -> PathBuf {
        self.prices_file.clone().unwrap_or_else(|| self.downloads_dir.join("spot_prices.csv"))
    }
}
