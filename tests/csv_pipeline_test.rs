//! CSV table -> engine -> summary -> report, without the CLI.

mod common;

use common::{assert_close, write_fixture, STATIONS_MG_PER_L};
use pretty_assertions::assert_eq;
use serde_json::Value;
use wqindex::config::parse_and_validate_config;
use wqindex::io::{read_samples_from_path, OutputFormat};
use wqindex::{create_writer, AssessmentReport, IndexEngine, IndexKind, Unit};

#[test]
fn test_pipeline_produces_expected_indices() {
    let (_dir, path) = write_fixture("stations.csv", STATIONS_MG_PER_L);
    let samples = read_samples_from_path(&path, Unit::MgPerL).unwrap();
    let stations: Vec<&str> = samples.iter().map(|s| s.station.as_str()).collect();
    assert_eq!(stations, vec!["Clean Well", "Mine Drain", "Station 3"]);

    let registry = wqindex::StandardsRegistry::builtin();
    let engine = IndexEngine::new(&registry).unwrap();
    let assessments = engine.evaluate_batch(&samples);

    let clean = &assessments[0];
    assert_close(clean.result(IndexKind::Mi).unwrap().value, 0.2, 1e-12);
    assert_eq!(clean.result(IndexKind::Hpi).unwrap().classification.label, "Excellent");

    let drain = &assessments[1];
    assert_close(drain.result(IndexKind::Mi).unwrap().value, 10.4, 1e-9);
    assert_close(drain.result(IndexKind::Hpi).unwrap().value, 625.0, 1e-9);
    assert_eq!(drain.result(IndexKind::Hpi).unwrap().classification.label, "Unsuitable");
    assert_close(drain.result(IndexKind::Hei).unwrap().value, 10.4, 1e-9);
    assert_close(drain.result(IndexKind::Cdeg).unwrap().value, 8.4, 1e-9);

    let third = &assessments[2];
    assert_close(third.result(IndexKind::Hpi).unwrap().value, 26.307, 1e-3);
    assert_eq!(third.result(IndexKind::Hpi).unwrap().classification.label, "Good");
    assert_eq!(third.metadata.serial.as_deref(), Some("3"));
}

#[test]
fn test_summary_over_pipeline() {
    let (_dir, path) = write_fixture("stations.csv", STATIONS_MG_PER_L);
    let samples = read_samples_from_path(&path, Unit::MgPerL).unwrap();
    let registry = wqindex::StandardsRegistry::builtin();
    let engine = IndexEngine::new(&registry).unwrap();

    let report = AssessmentReport::new(Unit::MgPerL, engine.evaluate_batch(&samples));
    let mi = report.summary.get(IndexKind::Mi).unwrap();
    assert_eq!(mi.count, 3);
    assert_eq!(mi.worst_station.as_deref(), Some("Mine Drain"));
    assert_close(mi.max.unwrap(), 10.4, 1e-9);
}

#[test]
fn test_custom_scale_flows_into_json_report() {
    let config = parse_and_validate_config(
        r#"
[[classification.mi]]
max = 1.0
label = "Acceptable"
severity = 1

[[classification.mi]]
min = 1.0
label = "Unacceptable"
severity = 5
"#,
    )
    .unwrap();
    let registry = config.build_registry().unwrap();
    let engine = IndexEngine::new(&registry)
        .unwrap()
        .with_scales(config.classification_scales().unwrap());

    let (_dir, path) = write_fixture("stations.csv", STATIONS_MG_PER_L);
    let samples = read_samples_from_path(&path, Unit::MgPerL).unwrap();
    let report = AssessmentReport::new(Unit::MgPerL, engine.evaluate_batch(&samples))
        .with_details(engine.detail_batch(&samples));

    let mut buffer = Vec::new();
    create_writer(OutputFormat::Json, &mut buffer)
        .write_report(&report)
        .unwrap();
    let json: Value = serde_json::from_slice(&buffer).unwrap();

    let labels: Vec<&str> = json["assessments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|station| {
            station["indices"]
                .as_array()
                .unwrap()
                .iter()
                .find(|outcome| outcome["index"] == "mi")
                .and_then(|outcome| outcome["classification"]["label"].as_str())
                .unwrap()
        })
        .collect();
    assert_eq!(labels, vec!["Acceptable", "Unacceptable", "Unacceptable"]);
    assert_eq!(json["details"].as_array().unwrap().len(), 3);
}
