use std::{fs, path::Path};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::prelude::*;

/// Reads a file whose encoding is unknown in advance.
///
/// The grid operator's export arrives in whatever encoding their backend
/// happened to use, so the bytes are sniffed before decoding. A byte-order
/// mark, when present, overrides the guess.
#[instrument(skip_all)]
pub fn read_to_string(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;

    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding: &'static Encoding = detector.guess(None, true);
    debug!(path = %path.display(), encoding = encoding.name(), "detected the encoding");

    let (text, _, had_errors) = encoding.decode(&bytes);
    ensure!(!had_errors, "failed to decode `{}` as {}", path.display(), encoding.name());
    Ok(text.into_owned())
}
