use std::sync::LazyLock;

use destat_core::lazy_env_parse;

/// The publicly visible name of the program
pub const PKG_NAME: &str = "destat";

/// The tracing filter used for logging (defaults to info)
pub static LOG: LazyLock<String> = lazy_env_parse!("DESTAT_LOG", String, || "info".to_owned());

/// The fraction cut from each end of the sample in the trimmed mean report (defaults to 0.2)
pub static TRIM_FRACTION: LazyLock<f64> = lazy_env_parse!("DESTAT_TRIM_FRACTION", f64, 0.2);
