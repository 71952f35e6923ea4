// Core algorithm exports
pub mod aggregate;
pub mod color;
pub mod ranges;

pub use aggregate::{median, median_by, build_charts};
pub use color::{ColorScale, scale_index};
pub use ranges::{build_ranges, bucket_for, format_thousands, RangeError, RangeTable, SalaryRange};
