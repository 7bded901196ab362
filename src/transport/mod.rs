//! # Print Dispatch
//!
//! This module hands finished print jobs to whatever queues them for the
//! printer.
//!
//! ## Available Spoolers
//!
//! - [`lpr`]: The system `lpr` command, raw mode (CUPS or BSD lpd)
//! - [`MemorySpooler`]: Keeps jobs in memory, for tests and dry runs
//!
//! Submission is fire-and-forget: a spooler reports whether it accepted the
//! bytes, never whether a label came out.

pub mod lpr;

use std::sync::Mutex;

use crate::error::{EtiquetaError, Result};

pub use lpr::LprSpooler;

/// Queue name used when none is given.
pub const DEFAULT_DESTINATION: &str = "tagprinter";

/// Something that accepts raw print jobs for a named destination.
pub trait Spooler {
    /// Queue `data` for `destination`.
    fn submit(&self, destination: &str, data: &[u8]) -> Result<()>;
}

/// A job captured by [`MemorySpooler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    pub destination: String,
    pub data: Vec<u8>,
}

/// Spooler that records jobs instead of printing them.
#[derive(Debug, Default)]
pub struct MemorySpooler {
    jobs: Mutex<Vec<SubmittedJob>>,
}

impl MemorySpooler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs submitted so far, oldest first.
    pub fn jobs(&self) -> Vec<SubmittedJob> {
        self.jobs
            .lock()
            .map(|jobs| jobs.clone())
            .unwrap_or_default()
    }
}

impl Spooler for MemorySpooler {
    fn submit(&self, destination: &str, data: &[u8]) -> Result<()> {
        let mut jobs = self
            .jobs
            .lock()
            .map_err(|_| EtiquetaError::Spooler("job list poisoned".to_string()))?;
        jobs.push(SubmittedJob {
            destination: destination.to_string(),
            data: data.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_spooler_records() {
        let spooler = MemorySpooler::new();
        spooler.submit("a", b"one").unwrap();
        spooler.submit(DEFAULT_DESTINATION, b"two").unwrap();

        let jobs = spooler.jobs();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].destination, "a");
        assert_eq!(jobs[1].destination, "tagprinter");
        assert_eq!(jobs[1].data, b"two");
    }
}
