/// A macro that allows lazily parsing a value from the environment variable,
/// with a fallback default value if the variable is not set or parsing fails.
///
/// # Parameters
///
/// - `$key`: An expression representing the name of the environment variable.
/// - `$t`: The type of the value to be parsed.
/// - `$default`: The default value to fall back to if the environment variable is not set or
///   parsing fails.
///
/// # Return Value
///
/// A lazy static variable of type `std::sync::LazyLock`, which holds the parsed
/// value from the environment variable or the default value.
#[macro_export]
macro_rules! lazy_env_parse {
	// With no default specified
	($key:expr_2021, Option<String>) => {
		std::sync::LazyLock::new(|| std::env::var($key).ok())
	};
	// With no default specified
	($key:expr_2021, $t:ty) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or_default()
		})
	};
	// With a closure for the default value
	($key:expr_2021, $t:ty, || $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or_else(|| $default)
		})
	};
	// With a static expression for the default value
	($key:expr_2021, $t:ty, $default:expr_2021) => {
		std::sync::LazyLock::new(|| {
			std::env::var($key).ok().and_then(|s| s.parse::<$t>().ok()).unwrap_or($default)
		})
	};
}

/// Checks that a value lies within a range, otherwise returns an
/// `Error::InvalidParameter` for the named function.
macro_rules! ensure_within {
	($name:expr_2021, $value:expr_2021, $range:expr_2021, $message:literal) => {
		anyhow::ensure!(
			$range.contains(&$value),
			$crate::err::Error::InvalidParameter {
				name: String::from($name),
				message: format!($message, $value),
			}
		)
	};
}

/// Checks that a sample holds at least one value, otherwise returns an
/// `Error::EmptyInput` for the named function.
macro_rules! ensure_not_empty {
	($name:expr_2021, $sample:expr_2021) => {
		anyhow::ensure!(
			!$sample.is_empty(),
			$crate::err::Error::EmptyInput {
				name: String::from($name),
			}
		)
	};
}
