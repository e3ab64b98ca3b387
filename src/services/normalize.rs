//! Record normalization
//!
//! Turns raw storage records into [`Transaction`]s. Each record either
//! becomes a valid transaction or is discarded; discarding is a data-cleaning
//! policy and never an error. Type and category are not validated here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{RawRecord, RawValue, Transaction, MAX_AMOUNT};

/// Date-only formats accepted for text dates
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Date-time formats accepted for text dates; the time part is ignored
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Why a record was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// The date field could not be read as a calendar date
    InvalidDate,
    /// The amount field could not be read as a finite number
    InvalidAmount,
}

/// Outcome of normalizing one record
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Valid(Transaction),
    Discarded(DiscardReason),
}

/// Counts from a normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Records seen
    pub total: usize,
    /// Records that became transactions
    pub kept: usize,
    /// Records dropped for a bad date
    pub discarded_dates: usize,
    /// Records dropped for a bad amount
    pub discarded_amounts: usize,
}

impl NormalizeReport {
    /// Total records dropped
    pub fn discarded(&self) -> usize {
        self.discarded_dates + self.discarded_amounts
    }
}

/// Read a raw value as a calendar date
pub fn parse_date(value: &RawValue) -> Option<NaiveDate> {
    match value {
        RawValue::Date(date) => Some(*date),
        RawValue::Text(text) => parse_date_text(text.trim()),
        RawValue::Null | RawValue::Integer(_) | RawValue::Real(_) => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Read a raw value as a finite amount no larger than [`MAX_AMOUNT`]
pub fn parse_amount(value: &RawValue) -> Option<f64> {
    let amount = match value {
        RawValue::Integer(n) => *n as f64,
        RawValue::Real(r) => *r,
        RawValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        RawValue::Null | RawValue::Date(_) => return None,
    };

    (amount.is_finite() && amount.abs() <= MAX_AMOUNT).then_some(amount)
}

/// Normalize a single record
pub fn normalize_record(record: &RawRecord) -> Normalized {
    let Some(date) = parse_date(&record.date) else {
        return Normalized::Discarded(DiscardReason::InvalidDate);
    };
    let Some(amount) = parse_amount(&record.amount) else {
        return Normalized::Discarded(DiscardReason::InvalidAmount);
    };

    Normalized::Valid(Transaction {
        date,
        kind: record.kind.to_string(),
        category: record.category.to_string(),
        amount,
    })
}

/// Normalize a batch, keeping input order and reporting what was dropped
pub fn normalize_with_report(records: &[RawRecord]) -> (Vec<Transaction>, NormalizeReport) {
    let mut report = NormalizeReport {
        total: records.len(),
        ..Default::default()
    };
    let mut transactions = Vec::with_capacity(records.len());

    for (row, record) in records.iter().enumerate() {
        match normalize_record(record) {
            Normalized::Valid(txn) => transactions.push(txn),
            Normalized::Discarded(reason) => {
                tracing::debug!(
                    row,
                    ?reason,
                    date = %record.date,
                    amount = %record.amount,
                    "discarding record"
                );
                match reason {
                    DiscardReason::InvalidDate => report.discarded_dates += 1,
                    DiscardReason::InvalidAmount => report.discarded_amounts += 1,
                }
            }
        }
    }

    report.kept = transactions.len();
    (transactions, report)
}

/// Normalize a batch, silently dropping records that fail coercion
pub fn normalize(records: &[RawRecord]) -> Vec<Transaction> {
    normalize_with_report(records).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = Some(date(2024, 1, 5));
        assert_eq!(parse_date(&"2024-01-05".into()), expected);
        assert_eq!(parse_date(&" 2024-01-05 ".into()), expected);
        assert_eq!(parse_date(&"2024/01/05".into()), expected);
        assert_eq!(parse_date(&"2024-01-05 13:45:00".into()), expected);
        assert_eq!(parse_date(&"2024-01-05T13:45:00.250".into()), expected);
        assert_eq!(parse_date(&"2024-01-05T13:45:00+05:30".into()), expected);
        assert_eq!(parse_date(&"2024-01-05 10:30".into()), expected);
        assert_eq!(parse_date(&"2024-01-05T10:30".into()), expected);
        assert_eq!(parse_date(&RawValue::Date(date(2024, 1, 5))), expected);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(&"".into()), None);
        assert_eq!(parse_date(&"yesterday".into()), None);
        assert_eq!(parse_date(&"2024-02-30".into()), None);
        assert_eq!(parse_date(&RawValue::Integer(20240105)), None);
        assert_eq!(parse_date(&RawValue::Null), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(&RawValue::Integer(5000)), Some(5000.0));
        assert_eq!(parse_amount(&RawValue::Real(12.5)), Some(12.5));
        assert_eq!(parse_amount(&" 199.99 ".into()), Some(199.99));
        assert_eq!(parse_amount(&"-20".into()), Some(-20.0));

        assert_eq!(parse_amount(&"abc".into()), None);
        assert_eq!(parse_amount(&"".into()), None);
        assert_eq!(parse_amount(&"   ".into()), None);
        assert_eq!(parse_amount(&"NaN".into()), None);
        assert_eq!(parse_amount(&"inf".into()), None);
        assert_eq!(parse_amount(&RawValue::Real(f64::NAN)), None);
        assert_eq!(parse_amount(&RawValue::Null), None);

        assert_eq!(parse_amount(&"1e15".into()), Some(1e15));
        assert_eq!(parse_amount(&"-1e15".into()), Some(-1e15));
        assert_eq!(parse_amount(&"1e300".into()), None);
        assert_eq!(parse_amount(&RawValue::Real(f64::MAX)), None);
    }

    #[test]
    fn test_normalize_record_outcomes() {
        let valid = RawRecord::new("2024-01-10", "expense", "food", "200");
        assert_eq!(
            normalize_record(&valid),
            Normalized::Valid(Transaction::new(date(2024, 1, 10), "expense", "food", 200.0))
        );

        let bad_date = RawRecord::new("someday", "expense", "food", "abc");
        assert_eq!(
            normalize_record(&bad_date),
            Normalized::Discarded(DiscardReason::InvalidDate)
        );

        let bad_amount = RawRecord::new("2024-01-10", "expense", "food", "abc");
        assert_eq!(
            normalize_record(&bad_amount),
            Normalized::Discarded(DiscardReason::InvalidAmount)
        );
    }

    #[test]
    fn test_type_and_category_pass_through() {
        let record = RawRecord::new("2024-01-10", "refund", " Food ", 3_i64);
        let txns = normalize(&[record]);
        assert_eq!(txns[0].kind, "refund");
        assert_eq!(txns[0].category, " Food ");

        let record = RawRecord::new("2024-01-10", RawValue::Null, RawValue::Integer(7), 3_i64);
        let txns = normalize(&[record]);
        assert_eq!(txns[0].kind, "");
        assert_eq!(txns[0].category, "7");
    }

    #[test]
    fn test_normalize_keeps_order_and_counts_discards() {
        let records = vec![
            RawRecord::new("2024-02-01", "expense", "rent", 1000_i64),
            RawRecord::new("bad", "expense", "food", 10_i64),
            RawRecord::new("2024-01-05", "income", "salary", "5000"),
            RawRecord::new("2024-01-06", "expense", "food", ""),
            RawRecord::new(RawValue::Null, "expense", "food", 1_i64),
        ];

        let (txns, report) = normalize_with_report(&records);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].category, "rent");
        assert_eq!(txns[1].category, "salary");
        assert_eq!(
            report,
            NormalizeReport {
                total: 5,
                kept: 2,
                discarded_dates: 2,
                discarded_amounts: 1,
            }
        );
        assert_eq!(report.discarded(), 3);
    }

    #[test]
    fn test_minute_precision_timestamps_are_kept() {
        let records = vec![
            RawRecord::new("2024-01-05", "income", "salary", 5000_i64),
            RawRecord::new("2024-01-09 10:30", "expense", "food", 1_i64),
            RawRecord::new("2024-01-09T10:30", "expense", "food", 2_i64),
        ];

        let (txns, report) = normalize_with_report(&records);
        assert_eq!(report.kept, 3);
        assert_eq!(txns[1].date, date(2024, 1, 9));
        assert_eq!(txns[2].date, date(2024, 1, 9));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize(&[]).is_empty());
    }
}
