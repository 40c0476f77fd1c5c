//! The time-indexed density history.

/// One density measurement: a 1-based export time step paired with the
/// per-corridor density vector (pedestrians per square metre), in corridor
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct DensitySample {
    pub time_step: u64,
    pub densities: Vec<f64>,
}

/// Append-only, time-ordered sequence of density samples — one per sensing
/// tick since run start.  Samples are never mutated in place; the selection
/// policy reads a tail window of this history to average over the most
/// recent control period.
#[derive(Clone, Debug, Default)]
pub struct DensityHistory {
    samples: Vec<DensitySample>,
}

impl DensityHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: DensitySample) {
        self.samples.push(sample);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[DensitySample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&DensitySample> {
        self.samples.last()
    }

    /// Element-wise mean over the most recent `window` samples.
    ///
    /// Shorter histories average over what is there (the seed measurement
    /// means the first control tick sees only two samples).  Returns `None`
    /// on an empty history.
    pub fn mean_over_last(&self, window: usize) -> Option<Vec<f64>> {
        let last = self.samples.last()?;
        let tail_len = window.min(self.samples.len());
        let tail = &self.samples[self.samples.len() - tail_len..];

        let mut mean = vec![0.0; last.densities.len()];
        for sample in tail {
            for (acc, &d) in mean.iter_mut().zip(&sample.densities) {
                *acc += d;
            }
        }
        for acc in &mut mean {
            *acc /= tail_len as f64;
        }
        Some(mean)
    }
}
