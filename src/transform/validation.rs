use serde_json::Value;

use crate::config::ParameterConfig;
use crate::error::{AdapterError, Result};

/// Validate a resolved value against an entry's inclusive numeric bounds.
///
/// Only JSON numbers are checked; non-numeric values under a bounded
/// entry pass through untouched, matching the number-only checks of the
/// wire tables this mirrors.
pub fn check_range(entry: &ParameterConfig, value: &Value) -> Result<()> {
    let Some(number) = value.as_f64() else {
        return Ok(());
    };

    if let Some(min) = entry.min
        && number < min
    {
        return Err(AdapterError::Validation(format!(
            "Field '{}': value {} below minimum {}",
            entry.unified, number, min
        )));
    }

    if let Some(max) = entry.max
        && number > max
    {
        return Err(AdapterError::Validation(format!(
            "Field '{}': value {} above maximum {}",
            entry.unified, number, max
        )));
    }

    Ok(())
}
