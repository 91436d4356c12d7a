//! # grid_planning
//!
//! Runs one planner on one CSV map and writes the result as JSON, or runs every planner over a
//! set of maps.
//!
//! Usage:
//!   grid_planning astar map.csv out.json manhattan
//!   grid_planning brushfire map.csv out.json
//!   grid_planning wavefront map.csv out.json
//!   grid_planning compare maps/ results/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use grid_planning::{run_astar, Algorithm, Grid, SearchResult, Stopwatch, StatusCode};
use grid_planning_io::compare::report;
use grid_planning_io::{
    allocated_bytes, load_grid, run_comparison, save_result, LoadError, TrackingAllocator,
};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[global_allocator]
static ALLOCATOR: TrackingAllocator = TrackingAllocator;

#[derive(Parser)]
#[command(name = "grid_planning")]
#[command(about = "A*, wavefront and brushfire planning on CSV occupancy grids")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Shortest path with A*
    Astar {
        map: PathBuf,
        output: PathBuf,
        /// "manhattan" or "airplane", any case
        heuristic: String,
    },
    /// Distance to the nearest obstacle for every cell
    Brushfire { map: PathBuf, output: PathBuf },
    /// Shortest path with breadth-first search from the start
    Wavefront { map: PathBuf, output: PathBuf },
    /// Every planner on every map
    Compare {
        /// A CSV map or a directory searched recursively for them
        maps: PathBuf,
        output_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Astar {
            map,
            output,
            heuristic,
        } => run_single(&map, &output, |input, meter| {
            run_astar(input, &heuristic, meter)
        }),
        Command::Brushfire { map, output } => run_single(&map, &output, |input, meter| {
            Algorithm::Brushfire.run(input, meter)
        }),
        Command::Wavefront { map, output } => run_single(&map, &output, |input, meter| {
            Algorithm::Wavefront.run(input, meter)
        }),
        Command::Compare { maps, output_dir } => {
            let runs = run_comparison(&maps, &output_dir, Some(allocated_bytes))?;
            let solved = runs.iter().filter(|run| run.status.is_success()).count();
            info!(
                "Wrote {} results to {}, {} with status 200",
                runs.len(),
                output_dir.display(),
                solved
            );
            Ok(())
        }
    }
}

fn run_single<F>(map: &Path, output: &Path, run: F) -> Result<()>
where
    F: FnOnce(Result<&Grid, StatusCode>, &mut Stopwatch) -> SearchResult,
{
    let loaded = load_grid(map).inspect_err(|err| warn!("{}: {}", map.display(), err));
    let mut meter = Stopwatch::with_heap_sampler(allocated_bytes);
    let result = run(loaded.as_ref().map_err(LoadError::status), &mut meter);
    report(&map.display().to_string(), &result);
    save_result(output, &result).with_context(|| format!("writing {}", output.display()))?;
    info!("Wrote {}", output.display());
    Ok(())
}
