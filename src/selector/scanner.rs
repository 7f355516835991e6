//! Per-view hit scan: fills the phi histogram with deweighted hit
//! displacements around a candidate vertex and reports whether the vertex
//! sits on a hit in that view.

use super::params::SelectionParams;
use super::SelectionError;
use crate::event::EventStore;
use crate::geometry::ViewProjector;
use crate::histogram::PhiHistogram;
use crate::types::TpcView;
use log::debug;
use nalgebra::Point3;

/// Smallest displacement magnitude used when deweighting a hit. Guards the
/// negative-exponent weight against a hit exactly at the projected vertex;
/// range and on-hit checks still use the raw magnitude.
pub(crate) const MIN_HIT_DISPLACEMENT: f32 = 1e-6;

/// Scans every hit in the named cluster list, filling `histogram` with one
/// weighted entry per in-range hit. Returns whether any hit lies strictly
/// within the on-hit threshold of the projected vertex position.
///
/// A cluster recorded for a different view than `view` means the caller
/// wired a cluster list to the wrong view and aborts the run.
pub(crate) fn scan_view<S, P>(
    store: &S,
    projector: &P,
    params: &SelectionParams,
    vertex_position: &Point3<f32>,
    view: TpcView,
    list_name: &str,
    histogram: &mut PhiHistogram,
) -> Result<bool, SelectionError>
where
    S: EventStore + ?Sized,
    P: ViewProjector + ?Sized,
{
    let clusters = store
        .cluster_list(list_name)
        .ok_or_else(|| SelectionError::MissingClusterList {
            name: list_name.to_string(),
        })?;

    let vertex_2d = projector.project(vertex_position, view);
    let mut on_hit = false;

    for cluster in clusters {
        if cluster.view != view {
            return Err(SelectionError::ViewMismatch {
                list_name: list_name.to_string(),
                expected: view,
                found: cluster.view,
            });
        }

        for hit in &cluster.hits {
            let displacement = hit.position - vertex_2d;
            let magnitude = displacement.norm();

            if magnitude > params.max_hit_vertex_displacement {
                continue;
            }
            if magnitude < params.max_on_hit_displacement {
                on_hit = true;
            }

            let phi = displacement.y.atan2(displacement.x);
            let weight = magnitude
                .max(MIN_HIT_DISPLACEMENT)
                .powf(params.hit_deweighting_power);
            histogram.fill(phi, weight);
        }
    }

    debug!("scan_view view={view} list={list_name} on_hit={on_hit}");
    Ok(on_hit)
}
