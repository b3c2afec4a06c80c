use std::path::Path;

use chrono::NaiveDateTime;

use crate::{
    encoding,
    import::SkipReason,
    locale::parse_decimal_comma,
    prelude::*,
    quantity::price::CentsPerKilowattHour,
    series::{HourStamp, PriceSeries},
};

/// One data row of the spot price dump.
pub struct PriceRow {
    pub stamp: HourStamp,
    pub price: CentsPerKilowattHour,
}

impl PriceRow {
    /// Columns: ISO-8601 timestamp, trading zone, volume, price in cents.
    /// Only the timestamp and the price are read.
    pub fn parse(record: &csv::StringRecord) -> Result<Self, SkipReason> {
        let text = record.get(0).ok_or(SkipReason::MissingColumn(0))?;
        let timestamp = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
            .map_err(|source| SkipReason::BadTimestamp { text: text.to_string(), source })?;
        let price = record.get(3).ok_or(SkipReason::MissingColumn(3))?;
        Ok(Self {
            stamp: HourStamp::from(timestamp),
            price: CentsPerKilowattHour(parse_decimal_comma(price)?),
        })
    }
}

/// Loads the hourly spot prices, skipping rows the dump got wrong.
#[instrument(skip_all)]
pub fn load(path: &Path) -> Result<PriceSeries> {
    info!(path = %path.display(), "loading spot prices…");

    let text = encoding::read_to_string(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut series = PriceSeries::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "skipping an unreadable row");
                continue;
            }
        };
        match PriceRow::parse(&record) {
            Ok(row) => {
                series.insert(row.stamp, row.price);
            }
            Err(reason) => {
                warn!(?record, %reason, "skipping the row");
            }
        }
    }

    info!(n_hours = series.len(), "loaded");
    Ok(series)
}
