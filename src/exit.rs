// src/exit.rs
//! Standardized process exit codes for `cscan`.
//!
//! Provides a stable contract for scripts and CI jobs.

use crate::error::CscanError;
use colored::Colorize;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CscanExit {
    /// Scan completed (diagnostics may still have been reported).
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input rejected before analysis (oversize input, nothing to scan).
    InvalidInput = 2,
    /// `--strict` was set and at least one diagnostic was found.
    CheckFailed = 3,
}

impl CscanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for CscanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<CscanExit>> for CscanExit {
    fn from(res: anyhow::Result<CscanExit>) -> Self {
        match res {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                let oversize = matches!(
                    e.downcast_ref::<CscanError>(),
                    Some(CscanError::InputTooLarge { .. })
                );
                if oversize {
                    Self::InvalidInput
                } else {
                    Self::Error
                }
            }
        }
    }
}
