//! Checker registry and the per-artifact rubrics.

pub mod alert_rules;
pub mod alertmanager;
pub mod dashboard;
pub mod datasource;
pub mod instrumentation;
pub mod prometheus;

use serde_json::Value;

use crate::domain::{ArtifactContent, ArtifactId, ArtifactReport};
use crate::error::Result;
use crate::predicate::parse_json;
use crate::rubric::Rubric;
use crate::Checker;

/// Build the checker that owns `id`.
pub fn build_checker(id: ArtifactId) -> Box<dyn Checker + Send + Sync> {
    match id {
        ArtifactId::PrometheusConfig => Box::new(TextChecker::new(prometheus::rubric())),
        ArtifactId::AlertmanagerConfig => Box::new(TextChecker::new(alertmanager::rubric())),
        ArtifactId::GrafanaDatasource => Box::new(TextChecker::new(datasource::rubric())),
        ArtifactId::GrafanaDashboard => Box::new(JsonChecker::new(dashboard::rubric())),
        ArtifactId::AlertRules => Box::new(TextChecker::new(alert_rules::rubric())),
        ArtifactId::AppInstrumentation => Box::new(TextChecker::new(instrumentation::rubric())),
    }
}

/// Build checkers for a list of artifacts, preserving the given order.
pub fn build_checkers(ids: &[ArtifactId]) -> Vec<Box<dyn Checker + Send + Sync>> {
    ids.iter().copied().map(build_checker).collect()
}

/// Checker whose rubric runs over raw text.
pub struct TextChecker {
    rubric: Rubric<str>,
}

impl TextChecker {
    /// Wrap a text rubric.
    pub fn new(rubric: Rubric<str>) -> Self {
        Self { rubric }
    }
}

impl Checker for TextChecker {
    fn artifact(&self) -> ArtifactId {
        self.rubric.artifact()
    }

    fn check(&self, content: &ArtifactContent) -> Result<ArtifactReport> {
        match content {
            ArtifactContent::Missing => Ok(ArtifactReport::missing(self.artifact())),
            ArtifactContent::Text(text) => self.rubric.evaluate(text.as_str()),
        }
    }
}

/// Checker whose rubric runs over parsed JSON.
///
/// Unparseable content short-circuits to a single failing "Valid JSON" outcome.
pub struct JsonChecker {
    rubric: Rubric<Value>,
}

impl JsonChecker {
    /// Wrap a JSON rubric.
    pub fn new(rubric: Rubric<Value>) -> Self {
        Self { rubric }
    }
}

impl Checker for JsonChecker {
    fn artifact(&self) -> ArtifactId {
        self.rubric.artifact()
    }

    fn check(&self, content: &ArtifactContent) -> Result<ArtifactReport> {
        let text = match content {
            ArtifactContent::Missing => return Ok(ArtifactReport::missing(self.artifact())),
            ArtifactContent::Text(text) => text,
        };
        match parse_json(text) {
            Ok(value) => self.rubric.evaluate(&value),
            Err(err) => {
                log::debug!("{}: invalid JSON: {err}", self.artifact());
                Ok(ArtifactReport::invalid_json(
                    self.artifact(),
                    format!("Invalid JSON ({err})"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rubric_matches_its_fixed_budget() {
        for id in ArtifactId::ALL {
            let checker = build_checker(id);
            assert_eq!(checker.artifact(), id);
            let text = match id {
                ArtifactId::GrafanaDashboard => "{}",
                _ => "",
            };
            let report = checker
                .check(&ArtifactContent::Text(text.to_string()))
                .expect("rubric validates");
            assert_eq!(report.points_max(), id.max_points());
            assert!(report.points_earned() <= report.points_max());
        }
    }

    #[test]
    fn missing_content_yields_single_zero_outcome() {
        for checker in build_checkers(&ArtifactId::ALL) {
            let report = checker.check(&ArtifactContent::Missing).expect("check");
            assert_eq!(report.points_earned(), 0);
            assert_eq!(report.checks().len(), 1);
            assert!(report.checks()[0].name.ends_with(" exists"));
        }
    }

    #[test]
    fn build_checkers_preserves_order() {
        let ids = [ArtifactId::AlertRules, ArtifactId::PrometheusConfig];
        let artifacts: Vec<ArtifactId> = build_checkers(&ids)
            .iter()
            .map(|checker| checker.artifact())
            .collect();
        assert_eq!(artifacts, ids.to_vec());
    }

    #[test]
    fn json_checker_short_circuits_on_parse_failure() {
        let checker = build_checker(ArtifactId::GrafanaDashboard);
        let report = checker
            .check(&ArtifactContent::Text("{ \"panels\": ".to_string()))
            .expect("check");
        assert_eq!(report.points_earned(), 0);
        assert_eq!(report.checks().len(), 1);
        assert_eq!(report.checks()[0].name, "Valid JSON");
        assert!(report.checks()[0].detail.starts_with("Invalid JSON"));
    }
}
