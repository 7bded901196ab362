//! # lpr Spooler
//!
//! Submits jobs through the system print command:
//!
//! ```bash
//! lpr -P <destination> -o raw
//! ```
//!
//! `-o raw` stops CUPS from running the job through a filter, so the EPL2
//! bytes reach the printer untouched. The queue must point at the label
//! printer's device (USB, serial or network).
//!
//! The job is written to `lpr`'s stdin. A non-zero exit status is logged and
//! otherwise ignored. Failing to run `lpr` or to hand it the whole job is an
//! error.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{info, warn};

use super::Spooler;
use crate::error::{EtiquetaError, Result};

/// Default print command
pub const DEFAULT_PROGRAM: &str = "lpr";

/// # lpr Spooler
///
/// ## Example
///
/// ```no_run
/// use etiqueta::label::{Label, TextOptions};
/// use etiqueta::transport::LprSpooler;
///
/// let mut label = Label::new();
/// label.write_line("FRAGILE", &TextOptions::new().center().font(5))?;
/// label.print_to(&LprSpooler::new(), "tagprinter", 2)?;
/// # Ok::<(), etiqueta::EtiquetaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LprSpooler {
    program: String,
}

impl Default for LprSpooler {
    fn default() -> Self {
        Self::new()
    }
}

impl LprSpooler {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Use another `lpr`-compatible program (e.g. a full path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program for `destination`.
    pub fn args(destination: &str) -> [&str; 4] {
        ["-P", destination, "-o", "raw"]
    }
}

impl Spooler for LprSpooler {
    fn submit(&self, destination: &str, data: &[u8]) -> Result<()> {
        info!(program = %self.program, destination, bytes = data.len(), "submitting print job");

        let mut child = Command::new(&self.program)
            .args(Self::args(destination))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EtiquetaError::Spooler(format!("Failed to run {}: {}", self.program, e)))?;

        // stdin drops at the end of the match, closing the pipe
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(data),
            None => Ok(()),
        };

        // Reap the child even when the write failed.
        let output = child
            .wait_with_output()
            .map_err(|e| EtiquetaError::Spooler(format!("Failed to wait for {}: {}", self.program, e)))?;
        written.map_err(|e| {
            EtiquetaError::Spooler(format!("Failed to send job to {}: {}", self.program, e))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                destination,
                status = %output.status,
                stderr = %stderr.trim(),
                "print command exited unsuccessfully"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        assert_eq!(LprSpooler::args("zebra"), ["-P", "zebra", "-o", "raw"]);
    }

    #[test]
    fn test_default_program() {
        assert_eq!(LprSpooler::default().program(), "lpr");
    }

    #[test]
    fn test_missing_program_is_spooler_error() {
        let spooler = LprSpooler::with_program("/nonexistent/etiqueta-lpr");
        let err = spooler.submit("tagprinter", b"\nN\nP1\n").unwrap_err();
        assert!(matches!(err, EtiquetaError::Spooler(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_program_that_ignores_stdin_is_spooler_error() {
        // `true` exits without reading; a job larger than the pipe buffer
        // cannot be written in full.
        let spooler = LprSpooler::with_program("true");
        let data = vec![b'N'; 8 * 1024 * 1024];
        let err = spooler.submit("tagprinter", &data).unwrap_err();
        assert!(matches!(err, EtiquetaError::Spooler(ref m) if m.contains("send job")));
    }
}
