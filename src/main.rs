#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod encoding;
mod import;
mod locale;
mod prelude;
mod quantity;
mod reconcile;
mod report;
mod select;
mod series;
mod tables;

use chrono::Local;
use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*, reconcile::ReportingWindow};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    let prices_path = args.inputs.prices_file();
    let consumption_path =
        select::newest_matching(&args.inputs.downloads_dir, &args.inputs.consumption_pattern)?;

    let prices = import::prices::load(&prices_path)?;
    let consumption = import::consumption::load(&consumption_path, args.year)?;

    let window = ReportingWindow::try_new(args.year, Local::now().date_naive())?;
    let report = reconcile::reconcile(window, &prices, &consumption);

    let file_name = format!("processed_data_{}.csv", args.year);
    report::write(&report, &args.output_dir, &file_name)?;

    if args.summary {
        println!("{}", tables::build_monthly_table(&report));
    }

    info!("done!");
    Ok(())
}
