use std::env;
use std::path::Path;
use vertex_select::config::{load_config, load_event};
use vertex_select::diagnostics::{CandidateOutcome, SelectionReport};
use vertex_select::VertexSelector;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: select_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;
    let mut store = load_event(&config.event_path)?;

    let selector = VertexSelector::new(config.selection.resolve());
    let report = selector
        .run_with_diagnostics(&mut store)
        .map_err(|e| format!("Selection failed: {e}"))?;

    print_text_summary(&report);

    if let Some(path) = &config.output.json_out {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &SelectionReport) {
    let res = &report.result;
    println!("Selection summary");
    println!("  found: {}", res.found);
    println!("  candidates scored: {}", res.candidates_scored);
    println!("  latency_ms: {:.3}", res.latency_ms);
    if let Some(vertex) = &res.vertex {
        println!(
            "  vertex: id={} position=({:.2}, {:.2}, {:.2}) score={:.4}",
            vertex.id, vertex.position.x, vertex.position.y, vertex.position.z, res.score
        );
    }

    println!("Candidates");
    for trace in &report.candidates {
        let score = trace
            .score
            .map(|s| format!("{s:.4}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  #{} id={} on_hit=[{} {} {}] score={} outcome={}",
            trace.candidate,
            trace.vertex_id,
            trace.on_hit[0],
            trace.on_hit[1],
            trace.on_hit[2],
            score,
            outcome_label(trace.outcome)
        );
    }
}

fn outcome_label(outcome: CandidateOutcome) -> &'static str {
    match outcome {
        CandidateOutcome::OffHit => "off-hit",
        CandidateOutcome::BeyondDepth => "beyond-depth",
        CandidateOutcome::TooClose => "too-close",
        CandidateOutcome::Dominated => "dominated",
        CandidateOutcome::Accepted => "accepted",
    }
}
