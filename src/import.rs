pub mod consumption;
pub mod prices;

use crate::locale::FormatError;

/// Why a data row was left out of a series.
///
/// Skips are consumed where they occur: the offending row is logged and the
/// load carries on. One bad row never fails a whole file.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error("missing column {0}")]
    MissingColumn(usize),

    #[error("unparseable timestamp {text:?}: {source}")]
    BadTimestamp {
        text: String,
        source: chrono::format::ParseError,
    },

    #[error(transparent)]
    BadNumber(#[from] FormatError),

    #[error("both day and night rates are empty")]
    MissingConsumption,

    #[error("grand-total footer")]
    TotalsFooter,
}
