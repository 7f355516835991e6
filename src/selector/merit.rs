//! Figure of merit reducing phi histograms to a scalar score.

use crate::histogram::PhiHistogram;

/// Sum of squared bin occupancies. Hit weight concentrated in a few angular
/// bins (tracks radiating from a true vertex) yields a large value; the same
/// total weight spread uniformly yields a small one.
pub fn histogram_merit(histogram: &PhiHistogram) -> f32 {
    histogram.contents().map(|content| content * content).sum()
}

/// Additive combination across the three views, with no inter-view
/// weighting.
pub fn combined_merit(histograms: &[PhiHistogram; 3]) -> f32 {
    histograms.iter().map(histogram_merit).sum()
}
