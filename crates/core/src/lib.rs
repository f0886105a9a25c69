//! # destat core
//!
//! Descriptive statistics over small in-memory samples. A sample is an
//! immutable sequence of numeric values ([`val::Number`] or any primitive
//! number) or categorical labels (any [`Ord`] type).
//!
//! The fallible operations live in [`fnc::math`]; they validate their input
//! and return an [`anyhow::Result`] whose error downcasts to [`err::Error`].
//!
//! ```
//! use destat_core::fnc::math;
//! use destat_core::val::Sample;
//!
//! let ages = Sample::from([23, 20, 22, 21, 110]);
//! assert_eq!(math::mean(&ages).unwrap(), 39.2);
//! assert_eq!(math::median(&ages).unwrap(), 22.0);
//! ```

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod err;
pub mod fnc;
pub mod val;
