use crate::error::{Error, Result};
use std::time::Instant;

/// Wall-clock timer around a layout call.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunTime {
    start: Option<Instant>,
    end: Option<Instant>,
}

impl RunTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    pub fn end(&mut self) {
        self.end = Some(Instant::now());
    }

    /// Elapsed seconds between [`start`](Self::start) and [`end`](Self::end).
    ///
    /// Fails unless both were recorded, with `end` after `start`.
    pub fn quality(&self) -> Result<f64> {
        let (start, end) = self.start.zip(self.end).ok_or(Error::RunTimeNotMeasured)?;
        end.checked_duration_since(start)
            .map(|elapsed| elapsed.as_secs_f64())
            .ok_or(Error::RunTimeNotMeasured)
    }
}
