use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{cost::Euros, energy::KilowattHours, price::CentsPerKilowattHour},
    reconcile::CostReport,
};

/// One line of the written report. The column titles are part of the file
/// format, consumers parse them by name.
#[derive(Serialize)]
struct ReportRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Hour")]
    hour: String,
    #[serde(rename = "Consumption (kW)")]
    consumption: KilowattHours,
    #[serde(rename = "Price (snt/kWh)")]
    price: CentsPerKilowattHour,
    #[serde(rename = "Cost (EUR)")]
    cost: Euros,
}

/// Writes the report as a flat comma-separated file, 24 rows per day, creating
/// the output directory when absent. An empty report still gets its header
/// row. Returns the written path.
#[instrument(skip_all)]
pub fn write(report: &CostReport, output_dir: &Path, file_name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    let path = output_dir.join(file_name);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create `{}`", path.display()))?;
    if report.is_empty() {
        // `serialize` only emits the header alongside the first row.
        writer
            .write_record(["Date", "Hour", "Consumption (kW)", "Price (snt/kWh)", "Cost (EUR)"])?;
    }
    for day in report.values() {
        for hourly in &day.hours {
            writer.serialize(ReportRow {
                date: day.date,
                hour: hourly.label(),
                consumption: hourly.consumption,
                price: hourly.price,
                cost: hourly.cost,
            })?;
        }
    }
    writer.flush()?;

    info!(path = %path.display(), "saved the report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reconcile::{ReportingWindow, reconcile},
        series::{ConsumptionSeries, HourStamp, PriceSeries},
    };

    #[test]
    fn test_write() -> Result {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let at = HourStamp::new(date, 0);
        let prices: PriceSeries = [(at, CentsPerKilowattHour(5.5))].into_iter().collect();
        let consumption: ConsumptionSeries = [(at, KilowattHours(2.0))].into_iter().collect();
        let window = ReportingWindow::try_new(2024, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())?;
        let report = reconcile(window, &prices, &consumption);

        let directory = tempfile::tempdir()?;
        let output_dir = directory.path().join("processed");
        let path = write(&report, &output_dir, "processed_data_2024.csv")?;

        assert_eq!(path, output_dir.join("processed_data_2024.csv"));
        let written = fs::read_to_string(&path)?;
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Date,Hour,Consumption (kW),Price (snt/kWh),Cost (EUR)"));
        assert_eq!(lines.next(), Some("2024-01-01,00:00,2.0,5.5,0.11"));
        assert_eq!(lines.next(), Some("2024-01-01,01:00,0.0,0.0,0.0"));
        assert_eq!(written.lines().count(), 25);
        Ok(())
    }

    #[test]
    fn test_write_empty_report() -> Result {
        let directory = tempfile::tempdir()?;
        let path = write(&CostReport::default(), directory.path(), "processed_data_2026.csv")?;

        let written = fs::read_to_string(&path)?;
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Date,Hour,Consumption (kW),Price (snt/kWh),Cost (EUR)"));
        assert_eq!(lines.next(), None);
        Ok(())
    }
}
