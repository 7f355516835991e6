//! Projection seam between the 3D event and the 2D readout views.

use crate::types::TpcView;
use nalgebra::{Point2, Point3};

/// Maps a 3D position into a view's 2D coordinate system.
///
/// Pure and exact: there is no error path here. Hosts with their own detector
/// geometry implement this trait; [`WirePlaneProjector`] is the built-in
/// default used by the demo binary and the tests.
pub trait ViewProjector {
    fn project(&self, position: &Point3<f32>, view: TpcView) -> Point2<f32>;
}

/// Wire-plane projection: the first view coordinate is the drift coordinate
/// `x`, the second the wire coordinate `z·cos(α) + y·sin(α)` with a per-view
/// wire angle (U: `+α`, V: `-α`, W: `0`).
#[derive(Clone, Copy, Debug)]
pub struct WirePlaneProjector {
    /// Inclination of the U/V wire planes relative to the W (collection)
    /// plane, in radians.
    pub wire_angle_rad: f32,
}

impl Default for WirePlaneProjector {
    fn default() -> Self {
        Self {
            wire_angle_rad: std::f32::consts::FRAC_PI_3,
        }
    }
}

impl ViewProjector for WirePlaneProjector {
    fn project(&self, position: &Point3<f32>, view: TpcView) -> Point2<f32> {
        let alpha = match view {
            TpcView::U => self.wire_angle_rad,
            TpcView::V => -self.wire_angle_rad,
            TpcView::W => 0.0,
        };
        let wire = position.z * alpha.cos() + position.y * alpha.sin();
        Point2::new(position.x, wire)
    }
}
