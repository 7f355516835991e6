//! Weighted angular histogram profiling hit directions around a candidate.

/// Fixed-range histogram over `[phi_min, phi_max)` accumulating weighted
/// angle entries. One instance is created per (candidate, view) scan, filled,
/// read once, and discarded.
#[derive(Clone, Debug)]
pub struct PhiHistogram {
    bins: Vec<f32>,
    phi_min: f32,
    bin_width: f32,
}

impl PhiHistogram {
    pub fn new(n_bins: usize, phi_min: f32, phi_max: f32) -> Self {
        assert!(n_bins > 0, "phi histogram requires at least one bin");
        assert!(
            phi_max > phi_min,
            "phi histogram requires a non-empty angular range"
        );
        PhiHistogram {
            bins: vec![0.0; n_bins],
            phi_min,
            bin_width: (phi_max - phi_min) / n_bins as f32,
        }
    }

    /// Adds `weight` to the bin containing `angle`. Entries outside
    /// `[phi_min, phi_max)` are discarded, as are non-finite angles or
    /// weights.
    pub fn fill(&mut self, angle: f32, weight: f32) {
        if !angle.is_finite() || !weight.is_finite() {
            return;
        }
        let offset = (angle - self.phi_min) / self.bin_width;
        if offset < 0.0 {
            return;
        }
        let index = offset as usize;
        if index >= self.bins.len() {
            return;
        }
        self.bins[index] += weight;
    }

    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    /// Accumulated weight of bin `index`.
    pub fn bin_content(&self, index: usize) -> f32 {
        self.bins[index]
    }

    /// Iterates over all bin contents in bin order.
    pub fn contents(&self) -> impl Iterator<Item = f32> + '_ {
        self.bins.iter().copied()
    }
}
