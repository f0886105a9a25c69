//! The descriptive statistics functions.
//!
//! [`math`] holds the public, validating operations. The [`util::math`]
//! module holds one trait per statistic, implemented over slices and sorted
//! views, which the operations are built on.

pub mod math;
pub mod util;
