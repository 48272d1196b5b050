//! Error handling and exit codes.

use maskdash_core::exit_codes;
use maskdash_core::DashError;

/// Failures raised by the binary itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `--check-assets` found unavailable assets.
    #[error("{missing} of {total} assets unavailable")]
    MissingAssets { missing: usize, total: usize },
}

/// Exit code for a dashboard error.
#[must_use]
pub fn handle_error(err: &DashError) -> u8 {
    let code = match err {
        DashError::InvalidSection(_) | DashError::InvalidModel(_) | DashError::MissingModelChoice => {
            exit_codes::ERROR_USAGE
        }
        DashError::Config(_) => exit_codes::ERROR_CONFIG,
    };
    to_u8(code)
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(dash) = err.downcast_ref::<DashError>() {
        return handle_error(dash);
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::MissingAssets { .. }) => to_u8(exit_codes::ERROR_MISSING_ASSETS),
        None => to_u8(exit_codes::ERROR_GENERIC),
    }
}

fn to_u8(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
