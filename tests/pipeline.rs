// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use successgraph::export::write_curves;
use successgraph::loader::{load_grouped, load_single};
use successgraph::pipeline::{prepare, run, Kind, Outcome};
use successgraph::{Config, CdfError, LoadError, PipelineError};

use std::fs;
use std::path::Path;

use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config(args: &[&str]) -> Config {
    let mut all = vec!["successgraph"];
    all.extend_from_slice(args);
    Config::from_args(all).unwrap()
}

#[test]
fn single_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "singleAttackStats.csv", "2\n2\n5\n-1\n");

    let series = load_single(&path).unwrap();
    assert_eq!(series.total(), 4);
    assert_eq!(series.readings(), &[2, 2, 5]);

    let curves = prepare(Kind::Single, &path).unwrap();
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].label(), "Simulation");

    let cdf = curves[0].cdf();
    assert_eq!(cdf.domain(), 1600);
    assert_eq!(cdf.probability(0), Some(0.0));
    assert_eq!(cdf.probability(2), Some(0.0));
    assert_eq!(cdf.probability(3), Some(0.5));
    assert_eq!(cdf.probability(5), Some(0.5));
    assert_eq!(cdf.probability(6), Some(0.75));
    assert_eq!(cdf.probability(1599), Some(0.75));
}

#[test]
fn grouped_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "parallelAttackStats.csv", "1,0\n1,-1\n2,3\n");

    let grouped = load_grouped(&path).unwrap();
    assert_eq!(grouped.len(), 2);

    let curves = prepare(Kind::Grouped, &path).unwrap();
    let labels: Vec<&str> = curves.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["1", "2"]);

    let one = curves[0].cdf();
    assert_eq!(one.domain(), 400);
    assert_eq!(one.probability(0), Some(0.0));
    assert_eq!(one.probability(1), Some(0.5));
    assert_eq!(one.probability(399), Some(0.5));

    let two = curves[1].cdf();
    assert_eq!(two.probability(3), Some(0.0));
    assert_eq!(two.probability(4), Some(1.0));
    assert_eq!(two.probability(399), Some(1.0));
}

#[test]
fn missing_file_is_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("singleAttackStats.csv");

    match load_single(&path) {
        Err(e @ LoadError::Open { .. }) => {
            assert!(e.is_recoverable());
            assert!(e.to_string().starts_with(&path.display().to_string()));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let e = prepare(Kind::Grouped, &path).unwrap_err();
    assert!(e.is_recoverable());
}

#[test]
fn malformed_content_is_not_recoverable() {
    let dir = tempfile::tempdir().unwrap();

    let path = write(&dir, "single.csv", "1\nfive\n");
    let e = prepare(Kind::Single, &path).unwrap_err();
    assert!(!e.is_recoverable());

    let path = write(&dir, "parallel.csv", "1,2\n3\n");
    let e = prepare(Kind::Grouped, &path).unwrap_err();
    assert!(!e.is_recoverable());
}

#[test]
fn undecodable_content_is_not_recoverable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.csv");
    fs::write(&path, b"1\n\xff\xfe\n2\n").unwrap();

    match prepare(Kind::Single, &path) {
        Err(e @ PipelineError::Load(LoadError::Encoding { line: 2 })) => {
            assert!(!e.is_recoverable());
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let path = dir.path().join("parallel.csv");
    fs::write(&path, b"1,0\n1,\xff\n").unwrap();
    assert!(!prepare(Kind::Grouped, &path).unwrap_err().is_recoverable());
}

#[test]
fn empty_files() {
    let dir = tempfile::tempdir().unwrap();

    // nothing to divide by
    let path = write(&dir, "single.csv", "");
    match prepare(Kind::Single, &path) {
        Err(PipelineError::Cdf(CdfError::NoTrials)) => {}
        other => panic!("unexpected result: {:?}", other),
    }

    // no groups, so no curves
    let path = write(&dir, "parallel.csv", "");
    assert!(prepare(Kind::Grouped, &path).unwrap().is_empty());
}

#[test]
fn export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "parallel.csv", "4,1\n4,-1\n8,0\n");
    let curves = prepare(Kind::Grouped, &input).unwrap();

    let path = dir.path().join("curves").join("parallel.json");
    write_curves(&path, &curves).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let groups = value.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["label"], "4");
    assert_eq!(groups[0]["trials"], 2);
    assert_eq!(groups[0]["successes"], 1);
    assert_eq!(groups[0]["samples"].as_array().unwrap().len(), 400);
    assert_eq!(groups[0]["samples"][2]["probability"], 0.5);
    assert_eq!(groups[1]["label"], "8");
    assert_eq!(groups[1]["samples"][1]["probability"], 1.0);
}

#[test]
fn unreadable_input_skips_the_chart() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");
    let output = dir.path().join("chart.png");

    let config = config(&[
        "--single",
        missing.to_str().unwrap(),
        "--single-output",
        output.to_str().unwrap(),
    ]);

    assert_eq!(run(Kind::Single, &config), Outcome::Unreadable);
    assert!(!Path::new(&output).exists());
}

#[test]
fn disabled_pipeline() {
    let config = config(&["--skip-parallel"]);
    assert_eq!(run(Kind::Grouped, &config), Outcome::Disabled);
}

#[test]
fn renders_charts() {
    let dir = tempfile::tempdir().unwrap();
    let single = write(&dir, "single.csv", "2\n2\n5\n-1\n");
    let parallel = write(&dir, "parallel.csv", "1,0\n1,-1\n2,3\n");
    let single_output = dir.path().join("s.png");
    let parallel_output = dir.path().join("p.png");

    let config = config(&[
        "--single",
        single.to_str().unwrap(),
        "--single-output",
        single_output.to_str().unwrap(),
        "--parallel",
        parallel.to_str().unwrap(),
        "--parallel-output",
        parallel_output.to_str().unwrap(),
        "--width",
        "320",
        "--height",
        "240",
    ]);

    assert_eq!(
        run(Kind::Single, &config),
        Outcome::Rendered(single_output.clone())
    );
    assert!(fs::metadata(&single_output).unwrap().len() > 0);

    assert_eq!(
        run(Kind::Grouped, &config),
        Outcome::Rendered(parallel_output.clone())
    );
    assert!(fs::metadata(&parallel_output).unwrap().len() > 0);
}
