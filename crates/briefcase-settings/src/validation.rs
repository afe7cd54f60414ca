// ABOUTME: Boundary checks for settings values
// ABOUTME: Applied to local edits and to payloads received from the server

use briefcase_types::{DIMENSION_STEP, MIN_DIMENSION, Settings};

use crate::error::{Result, SettingsError};

pub const RESIZED_HEIGHT: &str = "resized_height";
pub const RESIZED_WIDTH: &str = "resized_width";

/// Check a resize dimension: at least 28 and a multiple of 28
pub fn validate_dimension(field: &'static str, value: u32) -> Result<u32> {
    if value < MIN_DIMENSION {
        return Err(SettingsError::validation(
            field,
            value,
            format!("must be at least {MIN_DIMENSION}"),
        ));
    }
    if value % DIMENSION_STEP != 0 {
        return Err(SettingsError::validation(
            field,
            value,
            format!("must be a multiple of {DIMENSION_STEP}"),
        ));
    }
    Ok(value)
}

pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_dimension(RESIZED_HEIGHT, settings.resized_height)?;
    validate_dimension(RESIZED_WIDTH, settings.resized_width)?;
    Ok(())
}
