//! Advisory progress reporting.

/// Injectable sink for embed/extract progress.
///
/// `percent` runs 0–50 through the payload region and 50–100 through the
/// side-information region; `frame` is the index of the frame the current
/// traversal step touched. Reports are advisory: the codec behaves
/// identically when no sink is installed.
pub trait ProgressSink {
    fn report(&mut self, percent: f64, frame: usize);
}

impl<F: FnMut(f64, usize)> ProgressSink for F {
    fn report(&mut self, percent: f64, frame: usize) {
        self(percent, frame)
    }
}

/// Emits once per integer percent step so sinks are not flooded.
pub(crate) struct ProgressGate {
    last: i32,
}

impl ProgressGate {
    pub fn new() -> Self {
        Self { last: -1 }
    }

    pub fn advance(
        &mut self,
        sink: &mut Option<&mut dyn ProgressSink>,
        percent: f64,
        frame: usize,
    ) {
        let bucket = percent as i32;
        if bucket != self.last {
            self.last = bucket;
            if let Some(sink) = sink.as_mut() {
                sink.report(percent, frame);
            }
        }
    }
}
