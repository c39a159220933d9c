//! Diagnostic channel for recoverable walk errors

use crate::error::WalkError;

/// Receives errors the walk recovers from.
pub trait Reporter {
    fn report(&mut self, err: WalkError);
}

/// Writes one `dircnt: <message>` line per error to stderr.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, err: WalkError) {
        eprintln!("dircnt: {}", err);
    }
}

/// Keeps reported errors in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub errors: Vec<WalkError>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, err: WalkError) {
        self.errors.push(err);
    }
}
