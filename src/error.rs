//! Process-level error type.
//!
//! The analytics core itself is total (every function returns a value), so
//! `AppError` only surfaces from the outer layers: CLI argument validation,
//! file I/O, and JSON decoding. The exit code travels with the message so
//! `main` stays a one-line match.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Invalid input at the process boundary: bad flag values, unreadable or
    /// malformed report files. Exit code 2 across the board.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_carry_exit_code_2() {
        let err = AppError::usage("bad flag");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "bad flag");
    }
}
