use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One histogram bucket covering `[lower_ms, lower_ms + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub lower_ms: f64,
    pub count: usize,
}

/// Offsets grouped into fixed-width buckets aligned on zero.
///
/// Only non-empty buckets are stored, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetHistogram {
    pub bucket_ms: f64,
    pub buckets: Vec<Bucket>,
}

impl OffsetHistogram {
    /// Returns `None` for a non-positive or non-finite bucket width.
    pub fn from_offsets(offsets: &[f64], bucket_ms: f64) -> Option<Self> {
        if !bucket_ms.is_finite() || bucket_ms <= 0.0 {
            return None;
        }

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for offset in offsets.iter().filter(|o| o.is_finite()) {
            let slot = (offset / bucket_ms).floor() as i64;
            *counts.entry(slot).or_insert(0) += 1;
        }

        let buckets = counts
            .into_iter()
            .map(|(slot, count)| Bucket {
                lower_ms: slot as f64 * bucket_ms,
                count,
            })
            .collect();

        Some(Self { bucket_ms, buckets })
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// The most populated bucket (earliest on ties).
    pub fn peak(&self) -> Option<&Bucket> {
        self.buckets
            .iter()
            .fold(None, |best: Option<&Bucket>, b| match best {
                Some(best) if best.count >= b.count => Some(best),
                _ => Some(b),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucketing() {
        let hist = OffsetHistogram::from_offsets(&[-7.0, -1.0, 0.0, 3.0, 4.9, 12.0], 5.0).unwrap();
        let lowers: Vec<f64> = hist.buckets.iter().map(|b| b.lower_ms).collect();
        let counts: Vec<usize> = hist.buckets.iter().map(|b| b.count).collect();
        assert_eq!(lowers, vec![-10.0, -5.0, 0.0, 10.0]);
        assert_eq!(counts, vec![1, 1, 3, 1]);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.peak().unwrap().lower_ms, 0.0);
    }

    #[test]
    fn test_invalid_width() {
        assert!(OffsetHistogram::from_offsets(&[1.0], 0.0).is_none());
        assert!(OffsetHistogram::from_offsets(&[1.0], -1.0).is_none());
        assert!(OffsetHistogram::from_offsets(&[1.0], f64::NAN).is_none());
    }

    #[test]
    fn test_empty_offsets() {
        let hist = OffsetHistogram::from_offsets(&[], 2.0).unwrap();
        assert!(hist.buckets.is_empty());
        assert!(hist.peak().is_none());
    }
}
