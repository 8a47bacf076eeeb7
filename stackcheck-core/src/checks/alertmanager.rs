//! Alertmanager routing configuration rubric.
//!
//! Routing files keep these keys at the top level, so plain substring
//! presence is enough here.

use crate::domain::ArtifactId;
use crate::predicate::contains_literal;
use crate::rubric::{Rubric, Rule, Verdict};

/// Structural keys and the rule name reported for each.
pub const REQUIRED_KEYS: [(&str, &str); 4] = [
    ("Route configured", "route:"),
    ("Receivers defined", "receivers:"),
    ("Group by configured", "group_by:"),
    ("Inhibit rules", "inhibit_rules:"),
];

/// Rubric for `alertmanager.yml`.
pub fn rubric() -> Rubric<str> {
    let rules = REQUIRED_KEYS
        .into_iter()
        .map(|(name, key)| {
            Rule::new(name, 5, move |text: &str| {
                Verdict::from_bool(contains_literal(text, key), "", "Missing")
            })
        })
        .collect();
    Rubric::new(ArtifactId::AlertmanagerConfig, rules)
}

#[cfg(test)]
mod tests {
    use super::rubric;

    #[test]
    fn all_keys_present_earns_full_marks() {
        let text = "route:\n  group_by: ['alertname']\n  receiver: default\nreceivers:\n  - name: default\ninhibit_rules:\n  - source_match:\n      severity: critical\n";
        let report = rubric().evaluate(text).expect("evaluate");
        assert_eq!(report.points_earned(), 20);
        assert!(report.checks().iter().all(|check| check.detail.is_empty()));
    }

    #[test]
    fn each_key_is_scored_independently() {
        let report = rubric().evaluate("receivers:\n  - name: x\n").expect("evaluate");
        assert_eq!(report.points_earned(), 5);
        let missing: Vec<&str> = report
            .checks()
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.name.as_str())
            .collect();
        assert_eq!(
            missing,
            vec!["Route configured", "Group by configured", "Inhibit rules"]
        );
    }
}
