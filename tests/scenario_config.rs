//! Scenario configuration round-trips
//!
//! TOML files on disk through parsing and validation, including the error
//! paths a CLI user would hit.

use std::io::Write;
use variate::config::toml::parse_toml_file;
use variate::config::validator::validate_scenario;
use variate::config::{DistributionSpec, ScenarioError};

fn write_scenario(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn parse_and_validate_full_scenario() {
    let file = write_scenario(
        r#"
        [[jobs]]
        label = "latencies"
        distribution = "weibull"
        lambda = 2.0
        k = 1.5
        count = 5000
        seed = 7

        [[jobs]]
        distribution = "bounded_pareto"
        xmin = 1.0
        xmax = 100.0
        alpha = 1.3

        [[jobs]]
        distribution = "custom"
        weights = [5.0, 3.0, 2.0]
        count = 10000
        "#,
    );

    let scenario = parse_toml_file(file.path()).unwrap();
    assert_eq!(scenario.jobs.len(), 3);
    assert_eq!(scenario.jobs[0].label.as_deref(), Some("latencies"));
    assert_eq!(scenario.jobs[1].count, 1000); // default
    assert!(matches!(
        scenario.jobs[2].distribution,
        DistributionSpec::Custom { .. }
    ));

    validate_scenario(&scenario).unwrap();
}

#[test]
fn missing_file_is_contextual_error() {
    let err = parse_toml_file(std::path::Path::new("/nonexistent/scenario.toml")).unwrap_err();
    assert!(err.to_string().contains("scenario.toml"));
}

#[test]
fn invalid_parameters_fail_validation() {
    let file = write_scenario(
        r#"
        [[jobs]]
        distribution = "gamma"
        alpha = -1.0
        beta = 2.0
        "#,
    );

    let scenario = parse_toml_file(file.path()).unwrap();
    let err = validate_scenario(&scenario).unwrap_err();

    match err {
        ScenarioError::InvalidJob { index, name, .. } => {
            assert_eq!(index, 0);
            assert_eq!(name, "gamma");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn empty_scenario_fails_validation() {
    let file = write_scenario("");
    let scenario = parse_toml_file(file.path()).unwrap();
    assert!(matches!(
        validate_scenario(&scenario),
        Err(ScenarioError::Empty)
    ));
}

#[test]
fn serialized_scenario_reparses() {
    let file = write_scenario(
        r#"
        [[jobs]]
        distribution = "normal"
        mu = 1.0
        sigma = 0.5
        seed = 99
        "#,
    );

    let scenario = parse_toml_file(file.path()).unwrap();
    let rendered = toml::to_string(&scenario).unwrap();
    let reparsed = variate::config::toml::parse_toml_string(&rendered).unwrap();

    assert_eq!(reparsed.jobs.len(), 1);
    assert_eq!(reparsed.jobs[0].seed, Some(99));
    assert!(matches!(
        reparsed.jobs[0].distribution,
        DistributionSpec::Normal { mu, sigma } if mu == 1.0 && sigma == 0.5
    ));
}
