use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::val::Number;

pub mod frequency;
pub mod mean;
pub mod median;
pub mod mode;
pub mod percentile;
pub mod tally;
pub mod trimmedmean;

/// A value which can take part in a numeric statistic
pub trait ToFloat {
	fn to_float(&self) -> f64;
}

impl ToFloat for Number {
	fn to_float(&self) -> f64 {
		Number::to_float(self)
	}
}

impl ToFloat for Decimal {
	fn to_float(&self) -> f64 {
		self.to_f64().unwrap_or_default()
	}
}

macro_rules! to_float_lossless {
	($($t: ty),*) => {
		$(
			impl ToFloat for $t {
				fn to_float(&self) -> f64 {
					f64::from(*self)
				}
			}
		)*
	};
}

to_float_lossless!(f32, f64, i8, i16, i32, u8, u16, u32);

macro_rules! to_float_cast {
	($($t: ty),*) => {
		$(
			impl ToFloat for $t {
				fn to_float(&self) -> f64 {
					*self as f64
				}
			}
		)*
	};
}

to_float_cast!(i64, u64, isize, usize);

impl<T: ToFloat + ?Sized> ToFloat for &T {
	fn to_float(&self) -> f64 {
		(**self).to_float()
	}
}
