use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A numeric sample value.
///
/// Numbers of different variants compare by their numeric value, so an
/// `Int(2)` and a `Float(2.0)` are equal and fall into the same bucket when
/// counting occurrences. Floats are ordered with [`f64::total_cmp`], which
/// makes the ordering total: `NaN` sorts after every other float.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
	Int(i64),
	Float(f64),
	Decimal(Decimal),
}

impl Default for Number {
	fn default() -> Self {
		Self::Int(0)
	}
}

macro_rules! from_prim_ints {
	($($int: ty),*) => {
		$(
			impl From<$int> for Number {
				fn from(i: $int) -> Self {
					Self::Int(i64::from(i))
				}
			}
		)*
	};
}

from_prim_ints!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
	fn from(f: f32) -> Self {
		Self::Float(f64::from(f))
	}
}

impl From<f64> for Number {
	fn from(f: f64) -> Self {
		Self::Float(f)
	}
}

impl From<Decimal> for Number {
	fn from(v: Decimal) -> Self {
		Self::Decimal(v)
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Number::Int(v) => Display::fmt(v, f),
			Number::Float(v) => Display::fmt(v, f),
			Number::Decimal(v) => Display::fmt(v, f),
		}
	}
}

impl Number {
	pub fn to_float(&self) -> f64 {
		match self {
			Number::Int(v) => *v as f64,
			Number::Float(v) => *v,
			Number::Decimal(v) => v.to_f64().unwrap_or_default(),
		}
	}
}

/// 2^63, the first float above every `i64`
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Compares an integer with a float without rounding the integer.
fn cmp_int_float(v: i64, w: f64) -> Ordering {
	// NaN sorts beyond every number, on the side of its sign
	if w.is_nan() {
		return if w.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if w >= I64_UPPER {
		return Ordering::Less;
	}
	if w < -I64_UPPER {
		return Ordering::Greater;
	}
	// The float now lies within the i64 range, so its whole part is exact
	v.cmp(&(w.trunc() as i64)).then_with(|| 0.0f64.total_cmp(&w.fract()))
}

/// Compares a float with a decimal, converting the float to a decimal.
fn cmp_float_decimal(v: f64, w: &Decimal) -> Ordering {
	match Decimal::from_f64_retain(v) {
		// Digits beyond the decimal precision decide a tie
		Some(d) => d.cmp(w).then_with(|| v.total_cmp(&w.to_f64().unwrap_or_default())),
		// NaN, infinite, or beyond the decimal range
		None => {
			if v.is_sign_negative() {
				Ordering::Less
			} else {
				Ordering::Greater
			}
		}
	}
}

impl Eq for Number {}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl PartialOrd for Number {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Number {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Number::Int(v), Number::Int(w)) => v.cmp(w),
			(Number::Float(v), Number::Float(w)) => v.total_cmp(w),
			(Number::Decimal(v), Number::Decimal(w)) => v.cmp(w),
			// ------------------------------
			(Number::Int(v), Number::Float(w)) => cmp_int_float(*v, *w),
			(Number::Float(v), Number::Int(w)) => cmp_int_float(*w, *v).reverse(),
			// ------------------------------
			(Number::Int(v), Number::Decimal(w)) => Decimal::from(*v).cmp(w),
			(Number::Decimal(v), Number::Int(w)) => v.cmp(&Decimal::from(*w)),
			// ------------------------------
			(Number::Float(v), Number::Decimal(w)) => cmp_float_decimal(*v, w),
			(Number::Decimal(v), Number::Float(w)) => cmp_float_decimal(*w, v).reverse(),
		}
	}
}

impl hash::Hash for Number {
	fn hash<H: hash::Hasher>(&self, state: &mut H) {
		// Equal numbers of different variants must hash alike
		self.to_float().to_bits().hash(state)
	}
}

/// A collection which is known to be sorted in ascending order.
pub struct Sorted<T>(pub T);

pub trait Sort {
	type Item;
	/// Sorts the collection in place, returning a sorted view of it
	fn sorted(&mut self) -> Sorted<&[Self::Item]>;
}

impl Sort for [f64] {
	type Item = f64;
	fn sorted(&mut self) -> Sorted<&[f64]> {
		self.sort_by(f64::total_cmp);
		Sorted(self)
	}
}
