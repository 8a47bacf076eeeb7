//! Prometheus alerting rules rubric.

use crate::domain::ArtifactId;
use crate::predicate::{contains_literal, directive_is_live};
use crate::rubric::{Rubric, Rule, Verdict};

/// Alerts that must be defined.
pub const REQUIRED_ALERTS: [&str; 4] = ["HighErrorRate", "HighLatency", "ServiceDown", "HighCPUUsage"];

/// Rubric for `alerts.yml`.
pub fn rubric() -> Rubric<str> {
    let rules = REQUIRED_ALERTS
        .into_iter()
        .map(|alert| {
            let directive = format!("alert: {alert}");
            Rule::new(format!("Alert: {alert}"), 5, move |text: &str| {
                if !contains_literal(text, &directive) {
                    Verdict::fail("Missing")
                } else if directive_is_live(text, &directive) {
                    Verdict::pass("Configured")
                } else {
                    Verdict::fail("Commented out")
                }
            })
        })
        .collect();
    Rubric::new(ArtifactId::AlertRules, rules)
}
