mod common;

use common::synthetic_event::{EventBuilder, CANDIDATE_LIST, OUTPUT_LIST};
use nalgebra::Point3;
use vertex_select::diagnostics::CandidateOutcome;
use vertex_select::types::TpcView;
use vertex_select::{SelectionParams, VertexSelector};

/// Parameters with unit hit weights (deweighting power 0) so per-view merits
/// are exact squared hit counts, plus a finite hit range so candidates far
/// apart do not see each other's hits.
fn exact_params() -> SelectionParams {
    SelectionParams {
        hit_deweighting_power: 0.0,
        max_hit_vertex_displacement: 10.0,
        ..Default::default()
    }
}

#[test]
fn output_list_is_a_singleton_and_holds_the_global_best() {
    let mut builder = EventBuilder::new();
    // Four candidates, 1..4 coincident-direction hits each: more hits in one
    // angular bin means a strictly larger score.
    for n in 1..=4usize {
        let position = Point3::new(50.0 * n as f32, 0.0, 0.0);
        builder.add_vertex(position);
        for _ in 0..n {
            builder.add_hit_near_all_views(position, 0.0, 0.5);
        }
    }
    let mut store = builder.build();

    let selector = VertexSelector::new(SelectionParams {
        max_hit_vertex_displacement: 10.0,
        ..Default::default()
    });
    let result = selector.run(&mut store).expect("run succeeds");

    assert!(result.found);
    assert_eq!(result.candidates_scored, 4);
    let selected = store.vertex_list(OUTPUT_LIST).expect("output saved");
    assert_eq!(selected.len(), 1, "output is always a singleton");
    assert_eq!(selected[0].id, 3, "highest-scoring candidate wins");
    assert_eq!(result.vertex.as_ref().map(|v| v.id), Some(3));
}

#[test]
fn off_hit_candidate_never_wins_regardless_of_score() {
    let mut builder = EventBuilder::new();

    // Heavy activity around this candidate, but its W hits all sit beyond
    // the on-hit threshold.
    let loud = Point3::new(0.0, 0.0, 0.0);
    builder.add_vertex(loud);
    for _ in 0..20 {
        builder.add_hit_near(loud, TpcView::U, 0.0, 0.5);
        builder.add_hit_near(loud, TpcView::V, 0.0, 0.5);
        builder.add_hit_near(loud, TpcView::W, 0.0, 3.0);
    }

    // Modest but on a hit everywhere.
    let quiet = Point3::new(50.0, 0.0, 0.0);
    builder.add_vertex(quiet);
    builder.add_hit_near_all_views(quiet, 0.0, 0.5);

    let mut store = builder.build();
    let selector = VertexSelector::new(exact_params());
    let report = selector
        .run_with_diagnostics(&mut store)
        .expect("run succeeds");

    assert_eq!(report.result.candidates_scored, 1);
    assert_eq!(report.result.vertex.as_ref().map(|v| v.id), Some(1));
    assert_eq!(report.candidates[0].outcome, CandidateOutcome::OffHit);
    assert_eq!(report.candidates[0].on_hit, [true, true, false]);
    assert!(report.candidates[0].score.is_none());
}

#[test]
fn hit_exactly_at_the_on_hit_threshold_does_not_count() {
    let mut builder = EventBuilder::new();
    let position = Point3::new(0.0, 0.0, 0.0);
    builder.add_vertex(position);
    builder.add_hit_near(position, TpcView::U, 0.0, 0.5);
    builder.add_hit_near(position, TpcView::V, 0.0, 0.5);
    // Exactly the default threshold: the on-hit condition is strict.
    builder.add_hit_near(position, TpcView::W, 0.0, 1.0);

    let mut store = builder.build();
    let selector = VertexSelector::new(SelectionParams::default());
    let report = selector
        .run_with_diagnostics(&mut store)
        .expect("run succeeds");

    assert_eq!(report.candidates[0].on_hit, [true, true, false]);
    assert!(!report.result.found);
    assert!(store.vertex_list(OUTPUT_LIST).is_none());
}

#[test]
fn spatial_exclusion_flips_at_the_displacement_boundary() {
    let run = |separation: f32| {
        let mut builder = EventBuilder::new();
        let a = Point3::new(0.0, 0.0, 0.0);
        builder.add_vertex(a);
        for distance in [0.3, 0.5, 0.7] {
            builder.add_hit_near_all_views(a, 0.0, distance);
        }
        let b = Point3::new(separation, 0.0, 0.0);
        builder.add_vertex(b);
        for distance in [0.4, 0.6] {
            builder.add_hit_near_all_views(b, 0.0, distance);
        }
        let mut store = builder.build();

        let selector = VertexSelector::new(SelectionParams {
            hit_deweighting_power: 0.0,
            max_hit_vertex_displacement: 1.0,
            min_candidate_displacement: 2.0,
            min_candidate_score_fraction: 0.0,
            ..Default::default()
        });
        selector
            .run_with_diagnostics(&mut store)
            .expect("run succeeds")
    };

    // Just below the threshold: the runner-up is rejected as a duplicate.
    let report = run(1.9);
    assert_eq!(report.candidates[0].outcome, CandidateOutcome::Accepted);
    assert_eq!(report.candidates[1].outcome, CandidateOutcome::TooClose);
    assert_eq!(report.result.vertex.as_ref().map(|v| v.id), Some(0));

    // Just above: both candidates coexist in the working set.
    let report = run(2.1);
    assert_eq!(report.candidates[0].outcome, CandidateOutcome::Accepted);
    assert_eq!(report.candidates[1].outcome, CandidateOutcome::Accepted);
    assert_eq!(report.result.vertex.as_ref().map(|v| v.id), Some(0));
}

#[test]
fn score_dominance_boundary_is_inclusive() {
    let mut builder = EventBuilder::new();

    // Combined scores with unit weights: 3·(hits per bin)² summed per view.
    // a: 2 hits, one bin  -> 3·4  = 12
    // b: 3 hits, 3 bins   -> 3·3  = 9  (exactly 0.75 × 12)
    // c: 2 hits, 2 bins   -> 3·2  = 6  (below the fraction)
    let a = Point3::new(0.0, 0.0, 0.0);
    builder.add_vertex(a);
    builder.add_hit_near_all_views(a, 0.0, 0.4);
    builder.add_hit_near_all_views(a, 0.0, 0.6);

    let b = Point3::new(50.0, 0.0, 0.0);
    builder.add_vertex(b);
    for angle in [0.0, 1.0, 2.0] {
        builder.add_hit_near_all_views(b, angle, 0.5);
    }

    let c = Point3::new(100.0, 0.0, 0.0);
    builder.add_vertex(c);
    for angle in [0.0, 1.0] {
        builder.add_hit_near_all_views(c, angle, 0.5);
    }

    let mut store = builder.build();
    let selector = VertexSelector::new(SelectionParams {
        hit_deweighting_power: 0.0,
        max_hit_vertex_displacement: 10.0,
        min_candidate_displacement: 0.0,
        min_candidate_score_fraction: 0.75,
        ..Default::default()
    });
    let report = selector
        .run_with_diagnostics(&mut store)
        .expect("run succeeds");

    assert_eq!(report.candidates[0].score, Some(12.0));
    assert_eq!(report.candidates[1].score, Some(9.0));
    assert_eq!(report.candidates[2].score, Some(6.0));

    assert_eq!(report.candidates[0].outcome, CandidateOutcome::Accepted);
    assert_eq!(
        report.candidates[1].outcome,
        CandidateOutcome::Accepted,
        "a score exactly at the fraction is admitted"
    );
    assert_eq!(report.candidates[2].outcome, CandidateOutcome::Dominated);
    assert_eq!(report.result.vertex.as_ref().map(|v| v.id), Some(0));
}

#[test]
fn acceptance_walk_stops_at_the_configured_depth() {
    let mut builder = EventBuilder::new();
    for n in 1..=7usize {
        let position = Point3::new(50.0 * n as f32, 0.0, 0.0);
        builder.add_vertex(position);
        for _ in 0..n {
            builder.add_hit_near_all_views(position, 0.0, 0.5);
        }
    }
    let mut store = builder.build();

    let selector = VertexSelector::new(SelectionParams {
        hit_deweighting_power: 0.0,
        max_hit_vertex_displacement: 10.0,
        min_candidate_displacement: 0.0,
        min_candidate_score_fraction: 0.0,
        max_top_score_candidates: 3,
        ..Default::default()
    });
    let report = selector
        .run_with_diagnostics(&mut store)
        .expect("run succeeds");

    // Scores ascend with the candidate index, so the walk visits 6, 5, 4.
    for trace in &report.candidates {
        let expected = if trace.candidate >= 4 {
            CandidateOutcome::Accepted
        } else {
            CandidateOutcome::BeyondDepth
        };
        assert_eq!(trace.outcome, expected, "candidate {}", trace.candidate);
    }
    assert_eq!(report.result.vertex.as_ref().map(|v| v.id), Some(6));
}

#[test]
fn replace_current_vertex_list_is_optional() {
    let build = || {
        let mut builder = EventBuilder::new();
        let position = Point3::new(0.0, 0.0, 0.0);
        builder.add_vertex(position);
        builder.add_hit_near_all_views(position, 0.0, 0.5);
        builder.build()
    };

    let mut store = build();
    let selector = VertexSelector::new(SelectionParams::default());
    selector.run(&mut store).expect("run succeeds");
    assert_eq!(store.current_vertex_list_name(), Some(OUTPUT_LIST));

    let mut store = build();
    let selector = VertexSelector::new(SelectionParams {
        replace_current_vertex_list: false,
        ..Default::default()
    });
    selector.run(&mut store).expect("run succeeds");
    assert_eq!(store.current_vertex_list_name(), Some(CANDIDATE_LIST));
    assert!(store.vertex_list(OUTPUT_LIST).is_some(), "still saved");
}
