//! Results persistence module

use anyhow::Result;
use serde_json::{json, to_string_pretty, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AnalysisError;
use crate::graph::SocialGraph;
use crate::metrics::HerdAnalysis;
use crate::sim::SimulationResult;

/// Save a complete analysis to the output directory.
pub fn save_results(
    analysis: &HerdAnalysis,
    graph: &SocialGraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving analysis results to {}", output_dir);
    fs::create_dir_all(output_dir)?;

    let summary = json!({
        "herd_metrics": analysis.herd,
        "top_risk": analysis.top_risk,
    });
    write_json(Path::new(output_dir).join("summary.json"), &summary)?;

    write_json(
        Path::new(output_dir).join("per_member_metrics.json"),
        &serde_json::to_value(&analysis.per_member)?,
    )?;
    write_json(
        Path::new(output_dir).join("risk_scores.json"),
        &serde_json::to_value(&analysis.risk)?,
    )?;
    write_json(
        Path::new(output_dir).join("graph.json"),
        &serde_json::to_value(graph)?,
    )?;

    log::info!("Results saved successfully");
    Ok(())
}

/// Save a removal simulation next to the baseline results.
pub fn save_simulation(result: &SimulationResult, output_dir: &str) -> Result<()> {
    log::info!("Saving simulation results to {}", output_dir);
    fs::create_dir_all(output_dir)?;

    let delta = json!({
        "summary": result.summary,
        "removed_member_degree": result.removed_member_degree,
        "member_count": result.modified_graph.member_count(),
        "edge_count": result.modified_graph.edge_count(),
    });
    write_json(Path::new(output_dir).join("simulation.json"), &delta)?;

    write_json(
        Path::new(output_dir).join("modified_graph.json"),
        &serde_json::to_value(&result.modified_graph)?,
    )?;
    write_json(
        Path::new(output_dir).join("modified_metrics.json"),
        &serde_json::to_value(&result.modified_metrics)?,
    )?;

    Ok(())
}

/// Load a previously saved adjacency snapshot as a baseline graph.
pub fn load_graph(path: &str) -> Result<SocialGraph> {
    log::info!("Loading graph snapshot: {}", path);

    if !Path::new(path).exists() {
        return Err(AnalysisError::MissingBaseline.into());
    }

    let contents = fs::read_to_string(path)?;
    let graph = serde_json::from_str(&contents)?;
    Ok(graph)
}

fn write_json(path: PathBuf, value: &Value) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(value)?.as_bytes())?;
    Ok(())
}
