//! CLI command implementations.

use std::io::Write;
use std::path::Path;

use crate::engine::{ReductionConfig, ReductionEngine, ReductionLevel};
use crate::format::{DotWriter, PairReader};
use crate::graph::digraph::bypass_degrees;
use crate::graph::Digraph;
use crate::types::DigraphResult;

/// Load a dictionary from `input`, or from stdin when no path is given.
pub fn load_dictionary(input: Option<&Path>) -> DigraphResult<Digraph<String>> {
    match input {
        Some(path) => {
            log::debug!("Reading dictionary from {}", path.display());
            PairReader::read_from_file(path)
        }
        None => {
            log::debug!("Reading dictionary from stdin");
            PairReader::read_from(std::io::stdin().lock())
        }
    }
}

/// Reduce a dictionary and print its size before and after.
pub fn cmd_summary(
    input: Option<&Path>,
    levels: &[ReductionLevel],
    config: ReductionConfig,
    json: bool,
) -> DigraphResult<()> {
    let mut graph = load_dictionary(input)?;
    let engine = ReductionEngine::new(config);
    let report = engine.reduce(&mut graph, levels)?;

    if json {
        let info = serde_json::json!({
            "words": report.vertices_before,
            "links": report.edges_before,
            "essential_words": report.vertices_after,
            "essential_links": report.edges_after,
            "rounds": report.rounds,
            "levels": report.levels,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Print a dictionary as DOT, optionally reduced first.
pub fn cmd_dot(
    input: Option<&Path>,
    levels: &[ReductionLevel],
    config: ReductionConfig,
    output: Option<&Path>,
) -> DigraphResult<()> {
    let mut graph = load_dictionary(input)?;
    if !levels.is_empty() {
        ReductionEngine::new(config).reduce(&mut graph, levels)?;
    }

    match output {
        Some(path) => {
            DotWriter::write_to_file(&graph, path)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            DotWriter::write_to(&graph, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}

/// Print vertex, edge and structural counts of a dictionary.
pub fn cmd_stats(input: Option<&Path>, json: bool) -> DigraphResult<()> {
    let graph = load_dictionary(input)?;

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();
    let in_degrees = graph.in_degrees();
    let loops = graph.vertices().filter(|u| graph.is_loop(u)).count();
    let sinks = graph.vertices().filter(|u| graph.is_sink(u)).count();
    let sources = in_degrees.values().filter(|&&d| d == 0).count();
    let bypasses = graph
        .vertices()
        .filter(|u| {
            let in_degree = in_degrees.get(*u).copied().unwrap_or(0);
            !graph.is_loop(u) && bypass_degrees(in_degree, graph.out_degree(u))
        })
        .count();
    let max_out_degree = graph
        .vertices()
        .map(|u| graph.out_degree(u))
        .max()
        .unwrap_or(0);

    if json {
        let info = serde_json::json!({
            "words": vertex_count,
            "links": edge_count,
            "loops": loops,
            "sinks": sinks,
            "sources": sources,
            "bypasses": bypasses,
            "max_out_degree": max_out_degree,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Dictionary Statistics:");
        println!("  Words: {}", vertex_count);
        println!("  Links: {}", edge_count);
        println!("  Self-referencing words: {}", loops);
        println!("  Undefined words (sinks): {}", sinks);
        println!("  Unreferenced words (sources): {}", sources);
        println!("  Bypass words: {}", bypasses);
        println!("  Max links per word: {}", max_out_degree);
    }
    Ok(())
}
