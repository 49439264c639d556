//! CLI entry point for the `dreduce` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use digraph_reduce::cli::commands;
use digraph_reduce::engine::{ReductionConfig, ReductionLevel};
use digraph_reduce::graph::CycleSearch;
use digraph_reduce::DigraphError;

#[derive(Parser)]
#[command(
    name = "dreduce",
    about = "Reduce a word-reference dictionary to its essential words"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Re-explore vertices per search branch in the cycle test (slow)
    #[arg(long)]
    branch_local_search: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a dictionary and print word counts before and after
    Summary {
        /// Dictionary of "source destination" pairs; stdin when omitted
        file: Option<PathBuf>,
        /// Reduction level to apply: basic, intermediate, advanced (repeatable)
        #[arg(long = "level", default_value = "basic")]
        levels: Vec<String>,
    },
    /// Print a dictionary as a Graphviz DOT description
    Dot {
        /// Dictionary of "source destination" pairs; stdin when omitted
        file: Option<PathBuf>,
        /// Reduction level to apply first (repeatable); none by default
        #[arg(long = "level")]
        levels: Vec<String>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Structural statistics about a dictionary
    Stats {
        /// Dictionary of "source destination" pairs; stdin when omitted
        file: Option<PathBuf>,
    },
}

fn parse_levels(names: &[String]) -> Result<Vec<ReductionLevel>, DigraphError> {
    names
        .iter()
        .map(|name| {
            ReductionLevel::from_name(name.trim())
                .ok_or_else(|| DigraphError::InvalidLevel(name.clone()))
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let search = if cli.branch_local_search {
        CycleSearch::BranchLocal
    } else {
        CycleSearch::Shared
    };
    let config = ReductionConfig::default().with_cycle_search(search);

    let result = match cli.command {
        Commands::Summary { file, levels } => parse_levels(&levels)
            .and_then(|levels| commands::cmd_summary(file.as_deref(), &levels, config, json)),
        Commands::Dot {
            file,
            levels,
            output,
        } => parse_levels(&levels).and_then(|levels| {
            commands::cmd_dot(file.as_deref(), &levels, config, output.as_deref())
        }),
        Commands::Stats { file } => commands::cmd_stats(file.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            DigraphError::Io(_) => 1,
            DigraphError::InvalidLevel(_) => 3,
            DigraphError::EmptyGraph { .. } | DigraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
