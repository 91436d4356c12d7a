//! Runs every planner over a set of maps and files one JSON document per run.
//!
//! Results are labelled by the map's path relative to the directory that was searched, with
//! separators and the extension dropped: `maps/a/x.csv` becomes `a_x`, written as
//! `a_x_wavefront.json` and so on. Two maps whose labels collide abort the comparison before any
//! planner runs.

use grid_planning::{Algorithm, SearchResult, StatusCode, Stopwatch};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::{load_grid, save_result, LoadError, WriteError};

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("could not search for maps: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("maps {first:?} and {second:?} share the result label {label:?}")]
    LabelClash {
        label: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("could not create {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

/// A map file and the label its results are written under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapSource {
    pub path: PathBuf,
    pub label: String,
}

/// One planner run on one map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub label: String,
    pub algorithm: Algorithm,
    pub status: StatusCode,
    pub output: PathBuf,
}

fn label_for(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// `maps` itself if it is a file, otherwise every `*.csv` file below it, in file name order.
/// Fails if two maps end up with the same label.
pub fn collect_maps(maps: &Path) -> Result<Vec<MapSource>, CompareError> {
    let sources = if maps.is_file() {
        let label = maps
            .file_stem()
            .map_or_else(|| "map".to_owned(), |stem| stem.to_string_lossy().into_owned());
        vec![MapSource {
            path: maps.to_path_buf(),
            label,
        }]
    } else {
        let mut sources = Vec::new();
        for entry in WalkDir::new(maps).sort_by_file_name() {
            let entry = entry?;
            let is_csv = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if entry.file_type().is_file() && is_csv {
                let label = label_for(maps, entry.path());
                sources.push(MapSource {
                    path: entry.into_path(),
                    label,
                });
            }
        }
        sources
    };

    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for source in &sources {
        if let Some(first) = seen.insert(source.label.as_str(), source.path.as_path()) {
            return Err(CompareError::LabelClash {
                label: source.label.clone(),
                first: first.to_path_buf(),
                second: source.path.clone(),
            });
        }
    }
    Ok(sources)
}

/// `<output_dir>/<label>_<algorithm>.json`
pub fn output_path(output_dir: &Path, label: &str, algorithm: Algorithm) -> PathBuf {
    output_dir.join(format!("{}_{}.json", label, algorithm.name()))
}

/// Logs one line per run: the figures on success, the status otherwise.
pub fn report(label: &str, result: &SearchResult) {
    if result.status() == StatusCode::Success {
        info!(
            "{}: status {}, path length {}, {:.6} s, {:.3} MB",
            label,
            result.status().code(),
            result.path_length(),
            result.metrics().elapsed_secs(),
            result.metrics().memory_mb()
        );
    } else {
        warn!("{}: status {}", label, result.status());
    }
}

/// Runs [Algorithm::ALL] on every map under `maps` and writes each result below `output_dir`.
/// Maps that fail to load still get one document per algorithm carrying the loader status.
pub fn run_comparison(
    maps: &Path,
    output_dir: &Path,
    heap_sampler: Option<fn() -> usize>,
) -> Result<Vec<RunSummary>, CompareError> {
    let sources = collect_maps(maps)?;
    info!("Comparing planners on {} maps", sources.len());
    fs::create_dir_all(output_dir).map_err(|source| CompareError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut summaries = Vec::with_capacity(sources.len() * Algorithm::ALL.len());
    for MapSource { path, label } in &sources {
        let loaded = load_grid(path).inspect_err(|err| warn!("{}: {}", path.display(), err));
        if let Ok(grid) = &loaded {
            let reachable = grid.reachable(&grid.start(), &grid.goal());
            info!(
                "{}: goal {} from start",
                label,
                if reachable { "reachable" } else { "unreachable" }
            );
        }
        for algorithm in Algorithm::ALL {
            let mut meter = heap_sampler.map_or_else(Stopwatch::new, Stopwatch::with_heap_sampler);
            let result = algorithm.run(loaded.as_ref().map_err(LoadError::status), &mut meter);
            report(&format!("{} {}", label, algorithm.name()), &result);
            let output = output_path(output_dir, label, algorithm);
            save_result(&output, &result).map_err(|source| CompareError::Write {
                path: output.clone(),
                source,
            })?;
            summaries.push(RunSummary {
                label: label.clone(),
                algorithm,
                status: result.status(),
                output,
            });
        }
    }
    Ok(summaries)
}
