//! The values which the statistics functions operate on and produce.

pub mod number;
pub mod sample;
pub mod summary;

pub use self::number::{Number, Sort, Sorted};
pub use self::sample::Sample;
pub use self::summary::{Mode, Summary};
