use std::sync::Arc;

pub const DEFAULT_SAMPLE_COUNT: usize = 1000;
pub const DEFAULT_DURATION_SEC: f64 = 10.0;

/// Evenly spaced sample times over `[0, duration]`, both ends included.
///
/// Cloning shares the underlying samples; a run hands the same series to every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    samples: Arc<[f64]>,
}

impl TimeSeries {
    pub fn linspace(start: f64, end: f64, count: usize) -> Self {
        let samples: Arc<[f64]> = match count {
            0 => Arc::from(Vec::new()),
            1 => Arc::from(vec![start]),
            n => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                    .collect()
            }
        };
        Self { samples }
    }

    pub fn over(duration_sec: f64, count: usize) -> Self {
        Self::linspace(0.0, duration_sec, count)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples strictly before frame `frame`; indices past the end are clamped.
    pub fn prefix(&self, frame: usize) -> &[f64] {
        &self.samples[..frame.min(self.samples.len())]
    }

    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::over(DEFAULT_DURATION_SEC, DEFAULT_SAMPLE_COUNT)
    }
}
