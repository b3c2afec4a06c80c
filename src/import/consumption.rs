use std::path::Path;

use chrono::NaiveDateTime;

use crate::{
    encoding,
    import::SkipReason,
    locale::parse_decimal_comma,
    prelude::*,
    quantity::energy::KilowattHours,
    series::{ConsumptionSeries, HourStamp},
};

/// The grand-total footer the grid operator appends to the export.
const TOTALS_MARKER: &str = "Yhteensä";

/// One data row of the grid operator's consumption export.
pub struct ConsumptionRow {
    pub stamp: HourStamp,
    pub energy: KilowattHours,
}

impl ConsumptionRow {
    /// Columns: `DD.MM. HH:MM:SS` timestamp without a year, day-rate energy,
    /// night-rate energy. The day rate wins when both are filled. The year
    /// always comes from the caller, never from the file.
    pub fn parse(record: &csv::StringRecord, year: i32) -> Result<Self, SkipReason> {
        let text = record.get(0).ok_or(SkipReason::MissingColumn(0))?;
        let timestamp =
            NaiveDateTime::parse_from_str(&format!("{year} {text}"), "%Y %d.%m. %H:%M:%S")
                .map_err(|source| {
                    if text.contains(TOTALS_MARKER) {
                        SkipReason::TotalsFooter
                    } else {
                        SkipReason::BadTimestamp { text: text.to_string(), source }
                    }
                })?;
        let day = record.get(1).ok_or(SkipReason::MissingColumn(1))?.trim();
        let night = record.get(2).ok_or(SkipReason::MissingColumn(2))?.trim();
        let energy = if !day.is_empty() {
            parse_decimal_comma(day)?
        } else if !night.is_empty() {
            parse_decimal_comma(night)?
        } else {
            return Err(SkipReason::MissingConsumption);
        };
        Ok(Self { stamp: HourStamp::from(timestamp), energy: KilowattHours(energy) })
    }
}

/// Loads the hourly consumption, stamping every row with `year`.
#[instrument(skip_all)]
pub fn load(path: &Path, year: i32) -> Result<ConsumptionSeries> {
    info!(path = %path.display(), year, "loading consumption…");

    let text = encoding::read_to_string(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut series = ConsumptionSeries::default();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(%error, "skipping an unreadable row");
                continue;
            }
        };
        match ConsumptionRow::parse(&record, year) {
            Ok(row) => {
                series.insert(row.stamp, row.energy);
            }
            Err(SkipReason::TotalsFooter) => {
                debug!(?record, "skipping the footer");
            }
            Err(reason) => {
                warn!(?record, %reason, "skipping the row");
            }
        }
    }

    info!(n_hours = series.len(), "loaded");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_parse_prefers_day_rate() {
        let record = csv::StringRecord::from(vec!["01.01. 00:00:00", "2,0", "1,0"]);
        let row = ConsumptionRow::parse(&record, 2024).unwrap();
        assert_eq!(row.stamp, HourStamp::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 0));
        assert_eq!(row.energy, KilowattHours(2.0));
    }

    #[test]
    fn test_parse_falls_back_to_night_rate() {
        let record = csv::StringRecord::from(vec!["01.01. 07:00:00", "", "1,5"]);
        let row = ConsumptionRow::parse(&record, 2024).unwrap();
        assert_eq!(row.stamp, HourStamp::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 7));
        assert_eq!(row.energy, KilowattHours(1.5));
    }

    #[test]
    fn test_parse_bad_day_rate() {
        let record = csv::StringRecord::from(vec!["01.01. 00:00:00", "abc", ""]);
        assert!(matches!(ConsumptionRow::parse(&record, 2024), Err(SkipReason::BadNumber(_))));
    }

    #[test]
    fn test_parse_both_rates_empty() {
        let record = csv::StringRecord::from(vec!["02.01. 00:00:00", "", ""]);
        assert!(matches!(
            ConsumptionRow::parse(&record, 2024),
            Err(SkipReason::MissingConsumption)
        ));
    }

    /// Both rate columns must exist even though only one is read.
    #[test]
    fn test_parse_short_row() {
        let record = csv::StringRecord::from(vec!["01.01. 00:00:00", "2,0"]);
        assert!(matches!(ConsumptionRow::parse(&record, 2024), Err(SkipReason::MissingColumn(2))));
    }

    #[test]
    fn test_parse_footer() {
        let record = csv::StringRecord::from(vec!["Yhteensä", "1320,5", ""]);
        assert!(matches!(ConsumptionRow::parse(&record, 2024), Err(SkipReason::TotalsFooter)));
    }

    /// The forced year decides whether the leap day exists.
    #[test]
    fn test_parse_leap_day() {
        let record = csv::StringRecord::from(vec!["29.02. 10:00:00", "1,0", ""]);
        let row = ConsumptionRow::parse(&record, 2024).unwrap();
        assert_eq!(row.stamp, HourStamp::new(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), 10));
        assert!(matches!(
            ConsumptionRow::parse(&record, 2023),
            Err(SkipReason::BadTimestamp { .. })
        ));
    }

    #[test]
    fn test_load() -> Result {
        let directory = tempfile::tempdir()?;
        let path = directory.path().join("consumption_2024.csv");
        fs::write(
            &path,
            "Aika;Päiväkulutus;Yökulutus\n\
             01.01. 00:00:00;2,0;\n\
             01.01. 01:00:00;;0,5\n\
             01.01. 02:00:00;;\n\
             Yhteensä;2,5;\n",
        )?;

        let series = load(&path, 2024)?;

        assert_eq!(series.len(), 2);
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(series.zero_filled(HourStamp::new(date, 0)), KilowattHours(2.0));
        assert_eq!(series.zero_filled(HourStamp::new(date, 1)), KilowattHours(0.5));
        Ok(())
    }
}
