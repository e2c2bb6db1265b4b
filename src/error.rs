//! Application error type.
//!
//! Every failure carries the process exit code it should terminate with, so
//! `main` stays a one-line match. Exit code policy:
//!
//! - `2` — input problems (missing file, unreadable file, malformed JSON)
//! - `3` — data problems (empty history, nothing to fit)
//! - `4` — numerical problems (solver failure, non-finite coefficients)

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

    /// Input error: file access or JSON parsing.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Data error: history shape is unusable for fitting.
    pub fn data(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// Numerical error: the fit itself failed.
    pub fn numerics(message: impl Into<String>) -> Self {
        Self::new(4, message)
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
