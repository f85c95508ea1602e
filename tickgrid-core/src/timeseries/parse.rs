use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tickgrid_types::{GridConfig, ParseError, ParsedRecord, RawRecord, RecordReject};

// `%.f` also accepts a missing fraction, so `09:30:00` parses too.
const TIME_OF_DAY: &str = "%H:%M:%S%.f";

/// Records that parsed, plus the ones that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBatch {
    /// Valid records, in input order.
    pub records: Vec<ParsedRecord>,
    /// Rejected records with their input position.
    pub rejects: Vec<RecordReject>,
}

impl ParsedBatch {
    /// Earliest and latest valid timestamp, if any record parsed.
    #[must_use]
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut it = self.records.iter().map(|r| r.ts);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
    }
}

fn significant_prefix(text: &str, width: usize) -> &str {
    text.char_indices()
        .nth(width)
        .map_or(text, |(cut, _)| &text[..cut])
}

/// Parse the first `width` characters of `text` as a time of day on `run_date`.
///
/// ```
/// use chrono::NaiveDate;
/// use tickgrid_core::parse_timestamp;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
/// // Everything past the 15th character is ignored.
/// let ts = parse_timestamp("09:30:01.123456789", day, 15).unwrap();
/// assert_eq!(ts.to_string(), "2025-01-25 09:30:01.123456");
/// assert!(parse_timestamp("not a time", day, 15).is_err());
/// ```
///
/// # Errors
/// Returns `ParseError::InvalidTimestamp` carrying the significant prefix when
/// it is not `HH:MM:SS[.fraction]`.
pub fn parse_timestamp(
    text: &str,
    run_date: NaiveDate,
    width: usize,
) -> Result<NaiveDateTime, ParseError> {
    let head = significant_prefix(text, width).trim();
    NaiveTime::parse_from_str(head, TIME_OF_DAY)
        .map(|time| run_date.and_time(time))
        .map_err(|_| ParseError::InvalidTimestamp {
            text: head.to_string(),
        })
}

/// Parse one raw record. A record needs a valid timestamp and a finite price.
///
/// # Errors
/// Returns the first problem found, checking the timestamp before the price.
pub fn parse_record(raw: &RawRecord, cfg: &GridConfig) -> Result<ParsedRecord, ParseError> {
    let text = raw.timestamp_text().ok_or(ParseError::MissingTimestamp)?;
    let ts = parse_timestamp(text, cfg.run_date, cfg.timestamp_width)?;
    let price = raw.price().ok_or(ParseError::MissingPrice)?;
    if !price.is_finite() {
        return Err(ParseError::NonFinitePrice);
    }
    Ok(ParsedRecord { ts, price })
}

/// Parse a whole instrument, keeping input order and collecting rejects.
///
/// Both the window computation and the resampler go through this function, so
/// they always agree on which records are valid.
#[must_use]
pub fn parse_records(raw: &[RawRecord], cfg: &GridConfig) -> ParsedBatch {
    let mut batch = ParsedBatch {
        records: Vec::with_capacity(raw.len()),
        rejects: Vec::new(),
    };
    for (row, rec) in raw.iter().enumerate() {
        match parse_record(rec, cfg) {
            Ok(parsed) => batch.records.push(parsed),
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(row, reason = %reason, "dropping unparsable record");
                batch.rejects.push(RecordReject { row, reason });
            }
        }
    }
    #[cfg(feature = "tracing")]
    if !batch.rejects.is_empty() {
        tracing::warn!(
            rejected = batch.rejects.len(),
            total = raw.len(),
            "skipped invalid records"
        );
    }
    batch
}
