use grid_planning::{Algorithm, StatusCode};
use grid_planning_io::{collect_maps, run_comparison, CompareError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const SOLVABLE: &str = "2,0,1\n0,0,1\n1,0,3\n";
const WALLED_OFF: &str = "2,1,0\n1,1,0\n0,0,3\n";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "grid_planning_compare_{}_{}",
        name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_map(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn status_in(path: &Path) -> u64 {
    let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value["status_code"].as_u64().unwrap()
}

#[test]
fn same_file_name_in_two_folders_keeps_both_results() {
    let dir = scratch_dir("same_name");
    let maps = dir.join("maps");
    write_map(&maps, "a/x.csv", SOLVABLE);
    write_map(&maps, "b/x.csv", WALLED_OFF);
    write_map(&maps, "b/deep/y.CSV", SOLVABLE);
    write_map(&maps, "b/notes.txt", "not a map");
    let out = dir.join("out");

    let labels: Vec<String> = collect_maps(&maps)
        .unwrap()
        .into_iter()
        .map(|source| source.label)
        .collect();
    assert_eq!(labels, vec!["a_x", "b_deep_y", "b_x"]);

    let runs = run_comparison(&maps, &out, None).unwrap();
    assert_eq!(runs.len(), 3 * Algorithm::ALL.len());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 3 * Algorithm::ALL.len());

    assert_eq!(status_in(&out.join("a_x_wavefront.json")), 200);
    assert_eq!(status_in(&out.join("b_x_wavefront.json")), 404);
    assert_eq!(status_in(&out.join("b_x_astar-manhattan.json")), 404);
    assert_eq!(status_in(&out.join("b_deep_y_astar-airplane.json")), 200);
    assert_eq!(status_in(&out.join("b_x_brushfire.json")), 200);

    let walled: Vec<StatusCode> = runs
        .iter()
        .filter(|run| run.label == "b_x" && run.algorithm != Algorithm::Brushfire)
        .map(|run| run.status)
        .collect();
    assert_eq!(walled, vec![StatusCode::NoPath; 3]);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn clashing_labels_abort_before_writing() {
    let dir = scratch_dir("clash");
    let maps = dir.join("maps");
    write_map(&maps, "a_b/x.csv", SOLVABLE);
    write_map(&maps, "a/b_x.csv", WALLED_OFF);
    let out = dir.join("out");

    match run_comparison(&maps, &out, None) {
        Err(CompareError::LabelClash { label, .. }) => assert_eq!(label, "a_b_x"),
        other => panic!("expected a label clash, got {other:?}"),
    }
    assert!(!out.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn single_map_is_labelled_by_its_stem() {
    let dir = scratch_dir("single");
    write_map(&dir, "office.csv", SOLVABLE);
    let out = dir.join("out");

    let runs = run_comparison(&dir.join("office.csv"), &out, None).unwrap();
    assert_eq!(runs.len(), Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let path = out.join(format!("office_{}.json", algorithm.name()));
        assert_eq!(status_in(&path), 200);
    }
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unreadable_map_is_still_reported() {
    let dir = scratch_dir("unreadable");
    let maps = dir.join("maps");
    write_map(&maps, "broken.csv", "2,0\n0,x\n");
    let out = dir.join("out");

    let runs = run_comparison(&maps, &out, None).unwrap();
    assert!(runs.iter().all(|run| run.status == StatusCode::MalformedCell));
    assert_eq!(status_in(&out.join("broken_wavefront.json")), 500);
    fs::remove_dir_all(&dir).unwrap();
}
