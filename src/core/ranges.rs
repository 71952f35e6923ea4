use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a range table
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("Bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),

    #[error("Salary bounds must be finite (min: {min}, max: {max})")]
    NonFinite { min: f64, max: f64 },

    #[error("Maximum salary {max} must be greater than minimum salary {min}")]
    EmptyDomain { min: f64, max: f64 },
}

/// A half-open salary bracket `[lower, upper)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub lower: i64,
    pub upper: i64,
}

impl SalaryRange {
    /// Check whether a value falls inside the bracket.
    /// The upper bound is exclusive, NaN never matches.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower as f64 <= value && value < self.upper as f64
    }

    /// Width of the bracket in salary units
    pub fn width(&self) -> i64 {
        self.upper - self.lower
    }
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            format_thousands(self.lower),
            format_thousands(self.upper)
        )
    }
}

/// Ordered, contiguous partition of the historical salary domain
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    ranges: Vec<SalaryRange>,
}

impl RangeTable {
    /// Find the bracket containing `value`, if any
    pub fn bucket_for(&self, value: f64) -> Option<SalaryRange> {
        bucket_for(value, &self.ranges)
    }

    pub fn ranges(&self) -> &[SalaryRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Lowest covered salary (inclusive)
    pub fn lower_bound(&self) -> Option<i64> {
        self.ranges.first().map(|r| r.lower)
    }

    /// Highest covered salary (exclusive)
    pub fn upper_bound(&self) -> Option<i64> {
        self.ranges.last().map(|r| r.upper)
    }
}

/// Partition `[min_value, max_value]` into `bucket_count` equal-width brackets
///
/// Boundaries are linearly interpolated from `min_value` to `max_value`
/// (both inclusive) and floored to whole salary units, so the first bracket
/// starts at `floor(min_value)` and the last ends at `floor(max_value)`.
///
/// # Errors
/// Rejects a zero bucket count, non-finite bounds, and `max_value <= min_value`.
pub fn build_ranges(
    min_value: f64,
    max_value: f64,
    bucket_count: usize,
) -> Result<RangeTable, RangeError> {
    if bucket_count < 1 {
        return Err(RangeError::InvalidBucketCount(bucket_count));
    }
    if !min_value.is_finite() || !max_value.is_finite() {
        return Err(RangeError::NonFinite { min: min_value, max: max_value });
    }
    if max_value <= min_value {
        return Err(RangeError::EmptyDomain { min: min_value, max: max_value });
    }

    let step = (max_value - min_value) / bucket_count as f64;
    let boundaries: Vec<i64> = (0..=bucket_count)
        .map(|i| {
            // Pin the last point so float drift can't move the top edge
            let point = if i == bucket_count {
                max_value
            } else {
                min_value + step * i as f64
            };
            point.floor() as i64
        })
        .collect();

    let ranges = boundaries
        .windows(2)
        .map(|pair| SalaryRange { lower: pair[0], upper: pair[1] })
        .collect();

    Ok(RangeTable { ranges })
}

/// Return the first bracket with `lower <= value < upper`
///
/// Values below the first bracket, at or above the last upper bound, and NaN
/// have no bracket.
pub fn bucket_for(value: f64, ranges: &[SalaryRange]) -> Option<SalaryRange> {
    ranges.iter().find(|r| r.contains(value)).copied()
}

/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`)
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
