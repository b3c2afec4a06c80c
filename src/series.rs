use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::quantity::{Zero, energy::KilowattHours, price::CentsPerKilowattHour};

pub type PriceSeries = HourlySeries<CentsPerKilowattHour>;
pub type ConsumptionSeries = HourlySeries<KilowattHours>;

/// Naive wall-clock time truncated to the hour.
///
/// Two stamps are equal iff their calendar day and hour match, which is what
/// lets a price row and a consumption row meet each other.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct HourStamp {
    pub date: NaiveDate,
    pub hour: u32,
}

impl HourStamp {
    pub const fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }
}

impl From<NaiveDateTime> for HourStamp {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::new(timestamp.date(), timestamp.hour())
    }
}

/// One year of hourly measurements, keyed by the hour they belong to.
pub struct HourlySeries<V>(BTreeMap<HourStamp, V>);

impl<V> Default for HourlySeries<V> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<V> HourlySeries<V> {
    /// On a duplicate stamp the later entry wins.
    pub fn insert(&mut self, stamp: HourStamp, value: V) {
        self.0.insert(stamp, value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Copy + Zero> HourlySeries<V> {
    /// The gap policy: an hour absent from the series reads as zero.
    #[must_use]
    pub fn zero_filled(&self, at: HourStamp) -> V {
        self.0.get(&at).copied().unwrap_or(V::ZERO)
    }
}

impl<V> FromIterator<(HourStamp, V)> for HourlySeries<V> {
    fn from_iter<T: IntoIterator<Item = (HourStamp, V)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
