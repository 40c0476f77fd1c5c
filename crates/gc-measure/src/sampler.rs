//! Point-in-polygon density sampling.

use gc_core::{Point, Polygon, RegionId};

use crate::{DensityHistory, DensitySample};

/// Counts pedestrians strictly inside each measurement region and normalizes
/// by region area.
///
/// Regions are fixed for the lifetime of a run (loaded once at init, in
/// corridor order); the sampler itself is immutable and side-effect-free
/// apart from appending to the [`DensityHistory`] handed to it.
#[derive(Clone, Debug)]
pub struct DensitySampler {
    regions: Vec<(RegionId, Polygon)>,
}

impl DensitySampler {
    pub fn new(regions: Vec<(RegionId, Polygon)>) -> Self {
        Self { regions }
    }

    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn regions(&self) -> &[(RegionId, Polygon)] {
        &self.regions
    }

    /// Measure densities for the given pedestrian positions.
    ///
    /// An empty position set yields an all-zero sample, not an error.
    pub fn sample(&self, time_step: u64, positions: &[Point]) -> DensitySample {
        let densities = self
            .regions
            .iter()
            .map(|(_, polygon)| {
                let count = positions.iter().filter(|&&p| polygon.contains(p)).count();
                count as f64 / polygon.area()
            })
            .collect();

        DensitySample { time_step, densities }
    }

    /// Measure and append to `history` in one step — the per-sensing-tick
    /// operation of the run controller.
    pub fn sample_into(
        &self,
        history: &mut DensityHistory,
        time_step: u64,
        positions: &[Point],
    ) {
        history.push(self.sample(time_step, positions));
    }
}
