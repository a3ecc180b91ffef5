//! Pure aggregates over scored records.
//!
//! # Responsibility
//! - Compute count, mean, top entry and pass tally for a record slice.
//!
//! # Invariants
//! - No function divides by zero; empty input yields the `Empty` variant.
//! - Ties for the top score resolve to the earliest record in input order.

/// Default pass threshold for the marks dashboard.
pub const PASS_MARK: f64 = 40.0;

/// A record with one numeric field to aggregate over.
pub trait Scored {
    fn score(&self) -> f64;
}

/// Aggregate value that does not exist for an empty collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat<T> {
    Empty,
    Value(T),
}

impl<T> Stat<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Empty => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stat<U> {
        match self {
            Self::Empty => Stat::Empty,
            Self::Value(value) => Stat::Value(f(value)),
        }
    }
}

/// Whether every record reaches the pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassStatus {
    Empty,
    AllPassed,
    SomeFailed { passed: usize, total: usize },
}

/// Everything one dashboard render needs, computed in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a, R> {
    pub count: usize,
    pub average: Stat<f64>,
    pub topper: Stat<&'a R>,
    pub pass: PassStatus,
}

pub fn count<R>(records: &[R]) -> usize {
    records.len()
}

pub fn average<R: Scored>(records: &[R]) -> Stat<f64> {
    if records.is_empty() {
        return Stat::Empty;
    }
    let total: f64 = records.iter().map(|record| record.score()).sum();
    Stat::Value(total / records.len() as f64)
}

pub fn topper<R: Scored>(records: &[R]) -> Stat<&R> {
    let mut iter = records.iter();
    let Some(first) = iter.next() else {
        return Stat::Empty;
    };
    let top = iter.fold(first, |top, record| {
        if record.score() > top.score() {
            record
        } else {
            top
        }
    });
    Stat::Value(top)
}

pub fn passed_count<R: Scored>(records: &[R], threshold: f64) -> usize {
    records
        .iter()
        .filter(|record| record.score() >= threshold)
        .count()
}

pub fn all_pass<R: Scored>(records: &[R], threshold: f64) -> PassStatus {
    if records.is_empty() {
        return PassStatus::Empty;
    }
    let passed = passed_count(records, threshold);
    if passed == records.len() {
        PassStatus::AllPassed
    } else {
        PassStatus::SomeFailed {
            passed,
            total: records.len(),
        }
    }
}

pub fn summarize<R: Scored>(records: &[R], threshold: f64) -> Summary<'_, R> {
    Summary {
        count: count(records),
        average: average(records),
        topper: topper(records),
        pass: all_pass(records, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::{all_pass, average, summarize, topper, PassStatus, Scored, Stat};

    #[derive(Debug, PartialEq)]
    struct Entry {
        name: &'static str,
        score: f64,
    }

    impl Scored for Entry {
        fn score(&self) -> f64 {
            self.score
        }
    }

    fn entry(name: &'static str, score: f64) -> Entry {
        Entry { name, score }
    }

    #[test]
    fn average_of_empty_is_empty() {
        let records: Vec<Entry> = Vec::new();
        assert_eq!(average(&records), Stat::Empty);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let records = vec![entry("a", 40.0), entry("b", 60.0)];
        assert_eq!(average(&records), Stat::Value(50.0));
    }

    #[test]
    fn topper_prefers_first_of_equal_maxima() {
        let records = vec![entry("A", 80.0), entry("B", 80.0), entry("C", 20.0)];
        assert_eq!(topper(&records).value().map(|top| top.name), Some("A"));

        let reordered = vec![entry("B", 80.0), entry("A", 80.0)];
        assert_eq!(topper(&reordered).value().map(|top| top.name), Some("B"));
    }

    #[test]
    fn topper_of_empty_is_empty() {
        let records: Vec<Entry> = Vec::new();
        assert!(topper(&records).is_empty());
    }

    #[test]
    fn all_pass_is_tri_state() {
        let empty: Vec<Entry> = Vec::new();
        assert_eq!(all_pass(&empty, 40.0), PassStatus::Empty);

        let mixed = vec![entry("a", 40.0), entry("b", 39.0)];
        assert_eq!(
            all_pass(&mixed, 40.0),
            PassStatus::SomeFailed {
                passed: 1,
                total: 2
            }
        );

        let passing = vec![entry("a", 40.0), entry("b", 99.0)];
        assert_eq!(all_pass(&passing, 40.0), PassStatus::AllPassed);
    }

    #[test]
    fn summarize_bundles_all_aggregates() {
        let records = vec![entry("a", 30.0), entry("b", 90.0)];
        let summary = summarize(&records, 40.0);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, Stat::Value(60.0));
        assert_eq!(summary.topper.map(|top| top.name), Stat::Value("b"));
        assert_eq!(
            summary.pass,
            PassStatus::SomeFailed {
                passed: 1,
                total: 2
            }
        );
    }
}
