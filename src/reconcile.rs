use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    prelude::*,
    quantity::{cost::Euros, energy::KilowattHours, price::CentsPerKilowattHour},
    series::{ConsumptionSeries, HourStamp, PriceSeries},
};

pub type CostReport = BTreeMap<NaiveDate, DayRecord>;

/// The day range a report covers.
///
/// The window spans the processing year but never reaches into the future: it
/// ends on the earlier of next New Year and `today`, exclusive. Run mid-year,
/// the report ends with yesterday.
#[derive(Clone, Copy)]
pub struct ReportingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingWindow {
    pub fn try_new(year: i32, today: NaiveDate) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .with_context(|| format!("year {year} is out of range"))?;
        let next_new_year = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .with_context(|| format!("year {} is out of range", year + 1))?;
        Ok(Self { start, end: next_new_year.min(today) })
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |day| *day < self.end)
    }
}

/// One reconciled hour.
#[derive(Clone, Copy)]
pub struct HourRecord {
    pub hour: u32,
    pub consumption: KilowattHours,
    pub price: CentsPerKilowattHour,
    pub cost: Euros,
}

impl HourRecord {
    fn new(hour: u32, consumption: KilowattHours, price: CentsPerKilowattHour) -> Self {
        Self { hour, consumption, price, cost: consumption * price }
    }

    /// The report label, e.g. `"07:00"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

/// One reconciled day: always the full 24 hours, zeros where data is absent.
pub struct DayRecord {
    pub date: NaiveDate,
    pub hours: [HourRecord; 24],
    pub total_consumption: KilowattHours,
    pub total_cost: Euros,
}

impl DayRecord {
    fn new(date: NaiveDate, prices: &PriceSeries, consumption: &ConsumptionSeries) -> Self {
        let hours = core::array::from_fn(|hour| {
            #[expect(clippy::cast_possible_truncation)]
            let hour = hour as u32;
            let at = HourStamp::new(date, hour);
            HourRecord::new(hour, consumption.zero_filled(at), prices.zero_filled(at))
        });
        Self {
            date,
            total_consumption: hours.iter().map(|record| record.consumption).sum(),
            total_cost: hours.iter().map(|record| record.cost).sum(),
            hours,
        }
    }
}

/// Walks the window day by day and reconciles the two series.
///
/// Infallible: an hour absent from either series reads as zero, so thin input
/// produces a thin-looking report rather than an error.
#[instrument(skip_all)]
pub fn reconcile(
    window: ReportingWindow,
    prices: &PriceSeries,
    consumption: &ConsumptionSeries,
) -> CostReport {
    let report: CostReport =
        window.days().map(|date| (date, DayRecord::new(date, prices, consumption))).collect();
    info!(n_days = report.len(), "reconciled");
    report
}
