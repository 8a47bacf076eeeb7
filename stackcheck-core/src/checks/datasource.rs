//! Grafana datasource provisioning rubric.

use crate::domain::ArtifactId;
use crate::predicate::{contains_literal, directive_is_live};
use crate::rubric::{Rubric, Rule, Verdict};

/// Datasource list key.
pub const DATASOURCES: &str = "datasources:";
/// Datasource type directive.
pub const PROMETHEUS_TYPE: &str = "type: prometheus";
/// Accepted forms of the Prometheus URL.
pub const PROMETHEUS_URLS: [&str; 2] = [
    "url: http://prometheus:9090",
    "url: \"http://prometheus:9090\"",
];
/// Default datasource flag.
pub const IS_DEFAULT: &str = "isDefault: true";

/// Rubric for the datasource provisioning file.
pub fn rubric() -> Rubric<str> {
    Rubric::new(
        ArtifactId::GrafanaDatasource,
        vec![
            Rule::new("Datasources defined", 3, |text: &str| {
                Verdict::from_bool(
                    directive_is_live(text, DATASOURCES),
                    "",
                    "Missing or commented",
                )
            }),
            Rule::new("Prometheus type", 4, |text: &str| {
                Verdict::from_bool(
                    directive_is_live(text, PROMETHEUS_TYPE),
                    "",
                    "Missing or commented",
                )
            }),
            Rule::new("Prometheus URL", 4, |text: &str| {
                let matched = PROMETHEUS_URLS
                    .iter()
                    .any(|url| contains_literal(text, url));
                Verdict::from_bool(matched, "", "Missing or wrong")
            }),
            Rule::new("Is default", 4, |text: &str| {
                Verdict::from_bool(contains_literal(text, IS_DEFAULT), "", "Missing")
            }),
        ],
    )
}
