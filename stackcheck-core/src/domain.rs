//! Domain entities for StackCheck.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StackCheckError};

/// One of the configuration files graded by StackCheck.
///
/// Variant order is the fixed report order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactId {
    /// Prometheus scrape configuration.
    PrometheusConfig,
    /// Alertmanager routing configuration.
    AlertmanagerConfig,
    /// Grafana datasource provisioning.
    GrafanaDatasource,
    /// Grafana dashboard definition.
    GrafanaDashboard,
    /// Prometheus alerting rules.
    AlertRules,
    /// Metrics instrumentation in the demo service source.
    AppInstrumentation,
}

impl ArtifactId {
    /// The five artifacts every grading run covers, in report order.
    pub const CONFIGS: [ArtifactId; 5] = [
        ArtifactId::PrometheusConfig,
        ArtifactId::AlertmanagerConfig,
        ArtifactId::GrafanaDatasource,
        ArtifactId::GrafanaDashboard,
        ArtifactId::AlertRules,
    ];

    /// Every known artifact, including the optional instrumentation check.
    pub const ALL: [ArtifactId; 6] = [
        ArtifactId::PrometheusConfig,
        ArtifactId::AlertmanagerConfig,
        ArtifactId::GrafanaDatasource,
        ArtifactId::GrafanaDashboard,
        ArtifactId::AlertRules,
        ArtifactId::AppInstrumentation,
    ];

    /// Stable identifier used in reports and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrometheusConfig => "prometheus-config",
            Self::AlertmanagerConfig => "alertmanager-config",
            Self::GrafanaDatasource => "grafana-datasource",
            Self::GrafanaDashboard => "grafana-dashboard",
            Self::AlertRules => "alert-rules",
            Self::AppInstrumentation => "app-instrumentation",
        }
    }

    /// Human label.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PrometheusConfig => "Prometheus Config",
            Self::AlertmanagerConfig => "Alertmanager",
            Self::GrafanaDatasource => "Grafana Datasource",
            Self::GrafanaDashboard => "Grafana Dashboard",
            Self::AlertRules => "Alert Rules",
            Self::AppInstrumentation => "App Instrumentation",
        }
    }

    /// File name used in the "exists" outcome of a missing artifact.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PrometheusConfig => "prometheus.yml",
            Self::AlertmanagerConfig => "alertmanager.yml",
            Self::GrafanaDatasource => "datasource config",
            Self::GrafanaDashboard => "dashboard.json",
            Self::AlertRules => "alerts.yml",
            Self::AppInstrumentation => "app.py",
        }
    }

    /// Default location relative to the project root.
    pub const fn default_path(self) -> &'static str {
        match self {
            Self::PrometheusConfig => "prometheus/prometheus.yml",
            Self::AlertmanagerConfig => "alertmanager/alertmanager.yml",
            Self::GrafanaDatasource => "grafana/provisioning/datasources/prometheus.yml",
            Self::GrafanaDashboard => "grafana/dashboards/app-dashboard.json",
            Self::AlertRules => "prometheus/rules/alerts.yml",
            Self::AppInstrumentation => "app/app.py",
        }
    }

    /// Fixed point budget of the artifact's rubric.
    pub const fn max_points(self) -> u32 {
        match self {
            Self::PrometheusConfig => 20,
            Self::AlertmanagerConfig => 20,
            Self::GrafanaDatasource => 15,
            Self::GrafanaDashboard => 25,
            Self::AlertRules => 20,
            Self::AppInstrumentation => 20,
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactId {
    type Err = StackCheckError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| StackCheckError::Other(format!("unknown artifact: {value}")))
    }
}

/// Raw content handed to the checkers for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactContent {
    /// The file was not found or could not be loaded.
    Missing,
    /// Whole-file text.
    Text(String),
}

/// Content for every artifact of a grading run, iterated in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactContents {
    entries: BTreeMap<ArtifactId, ArtifactContent>,
}

impl ArtifactContents {
    /// Create an empty content set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content for an artifact, replacing any previous value.
    pub fn insert(&mut self, id: ArtifactId, content: ArtifactContent) {
        self.entries.insert(id, content);
    }

    /// Builder-style variant of [`ArtifactContents::insert`].
    pub fn with(mut self, id: ArtifactId, content: ArtifactContent) -> Self {
        self.insert(id, content);
        self
    }

    /// Content for a single artifact.
    pub fn get(&self, id: ArtifactId) -> Option<&ArtifactContent> {
        self.entries.get(&id)
    }

    /// Iterate in fixed artifact order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactId, &ArtifactContent)> {
        self.entries.iter().map(|(id, content)| (*id, content))
    }

    /// Number of artifacts supplied.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no artifacts were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a single rubric item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// What was checked; unique within its artifact.
    pub name: String,
    /// Whether the item earned full credit.
    pub passed: bool,
    /// Explanation, possibly empty.
    pub detail: String,
    /// Points contributed by this item.
    pub points_awarded: u32,
}

/// Result of grading one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactReport {
    artifact_id: ArtifactId,
    display_name: String,
    checks: Vec<CheckOutcome>,
    points_earned: u32,
    points_max: u32,
}

impl ArtifactReport {
    /// Report for an artifact whose content could not be loaded.
    pub fn missing(id: ArtifactId) -> Self {
        Self::single_failure(id, format!("{} exists", id.file_name()), "File not found")
    }

    /// Report for structured content that failed to parse.
    pub fn invalid_json(id: ArtifactId, detail: impl Into<String>) -> Self {
        Self::single_failure(id, "Valid JSON".to_string(), detail)
    }

    pub(crate) fn from_outcomes(id: ArtifactId, checks: Vec<CheckOutcome>) -> Result<Self> {
        let points_earned: u32 = checks.iter().map(|check| check.points_awarded).sum();
        let points_max = id.max_points();
        if points_earned > points_max {
            return Err(StackCheckError::Rubric(format!(
                "{id} earned {points_earned} of {points_max} points"
            )));
        }
        Ok(Self {
            artifact_id: id,
            display_name: id.display_name().to_string(),
            checks,
            points_earned,
            points_max,
        })
    }

    fn single_failure(id: ArtifactId, name: String, detail: impl Into<String>) -> Self {
        Self {
            artifact_id: id,
            display_name: id.display_name().to_string(),
            checks: vec![CheckOutcome {
                name,
                passed: false,
                detail: detail.into(),
                points_awarded: 0,
            }],
            points_earned: 0,
            points_max: id.max_points(),
        }
    }

    /// Which artifact was graded.
    pub fn artifact_id(&self) -> ArtifactId {
        self.artifact_id
    }

    /// Human label of the artifact.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Outcomes in rubric order.
    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    /// Points earned.
    pub fn points_earned(&self) -> u32 {
        self.points_earned
    }

    /// Fixed point budget.
    pub fn points_max(&self) -> u32 {
        self.points_max
    }

    /// Whether every point was earned.
    pub fn is_full(&self) -> bool {
        self.points_earned == self.points_max
    }
}

/// Aggregate result of a grading run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallReport {
    artifacts: Vec<ArtifactReport>,
    total_earned: u32,
    total_max: u32,
    percentage: u32,
    complete: bool,
}

impl OverallReport {
    pub(crate) fn new(
        artifacts: Vec<ArtifactReport>,
        total_earned: u32,
        total_max: u32,
        percentage: u32,
    ) -> Self {
        Self {
            artifacts,
            total_earned,
            total_max,
            percentage,
            complete: percentage == 100,
        }
    }

    /// Per-artifact reports in fixed artifact order.
    pub fn artifacts(&self) -> &[ArtifactReport] {
        &self.artifacts
    }

    /// Sum of earned points.
    pub fn total_earned(&self) -> u32 {
        self.total_earned
    }

    /// Sum of point budgets.
    pub fn total_max(&self) -> u32 {
        self.total_max
    }

    /// Completion percentage, 0-100.
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    /// Whether the rubric is fully satisfied.
    pub fn complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_ids_round_trip_through_strings() {
        for id in ArtifactId::ALL {
            let parsed: ArtifactId = id.as_str().parse().expect("parse id");
            assert_eq!(parsed, id);
        }
        assert!("grafana".parse::<ArtifactId>().is_err());
        assert_eq!(
            " Alert-Rules ".parse::<ArtifactId>().expect("parse"),
            ArtifactId::AlertRules
        );
    }

    #[test]
    fn config_budgets_are_fixed() {
        let budgets: Vec<u32> = ArtifactId::CONFIGS
            .iter()
            .map(|id| id.max_points())
            .collect();
        assert_eq!(budgets, vec![20, 20, 15, 25, 20]);
    }

    #[test]
    fn contents_iterate_in_fixed_order() {
        let contents = ArtifactContents::new()
            .with(ArtifactId::AlertRules, ArtifactContent::Missing)
            .with(ArtifactId::PrometheusConfig, ArtifactContent::Missing)
            .with(
                ArtifactId::GrafanaDashboard,
                ArtifactContent::Text("{}".to_string()),
            );
        let order: Vec<ArtifactId> = contents.iter().map(|(id, _)| id).collect();
        assert_eq!(
            order,
            vec![
                ArtifactId::PrometheusConfig,
                ArtifactId::GrafanaDashboard,
                ArtifactId::AlertRules
            ]
        );
    }

    #[test]
    fn missing_report_has_single_failed_outcome() {
        let report = ArtifactReport::missing(ArtifactId::GrafanaDashboard);
        assert_eq!(report.points_earned(), 0);
        assert_eq!(report.points_max(), 25);
        assert_eq!(report.checks().len(), 1);
        assert_eq!(report.checks()[0].name, "dashboard.json exists");
        assert_eq!(report.checks()[0].detail, "File not found");
        assert!(!report.checks()[0].passed);
    }

    #[test]
    fn from_outcomes_rejects_overflowing_totals() {
        let checks = vec![CheckOutcome {
            name: "too generous".to_string(),
            passed: true,
            detail: String::new(),
            points_awarded: 16,
        }];
        let result = ArtifactReport::from_outcomes(ArtifactId::GrafanaDatasource, checks);
        assert!(matches!(result, Err(StackCheckError::Rubric(_))));
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = ArtifactReport::missing(ArtifactId::AlertRules);
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["artifactId"], "alert-rules");
        assert_eq!(value["pointsMax"], 20);
        assert_eq!(value["checks"][0]["pointsAwarded"], 0);
    }
}
