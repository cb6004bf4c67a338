//! Error handling and exit codes.

use modfib_core::exit_codes;
use modfib_core::OrbitError;

/// Errors raised by the application layer itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A flag value could not be understood.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(orbit_err) = err.downcast_ref::<OrbitError>() {
        return match orbit_err {
            OrbitError::InvalidBase(_)
            | OrbitError::BaseTooLarge(_)
            | OrbitError::Allocation { .. }
            | OrbitError::MemoryLimit { .. } => exit_codes::ERROR_CONFIG,
        };
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&OrbitError::BaseTooLarge(1 << 40).into()), 4);
        assert_eq!(
            exit_code(
                &OrbitError::MemoryLimit {
                    required: 10,
                    limit: 1
                }
                .into()
            ),
            4
        );
        assert_eq!(exit_code(&OrbitError::Allocation { bytes: 1 << 50 }.into()), 4);
        assert_eq!(exit_code(&AppError::Config("bad".into()).into()), 4);
        assert_eq!(exit_code(&anyhow::anyhow!("io failure")), 1);
    }

    #[test]
    fn context_preserves_code() {
        let err = anyhow::Error::from(OrbitError::InvalidBase(0)).context("while enumerating");
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
    }
}
