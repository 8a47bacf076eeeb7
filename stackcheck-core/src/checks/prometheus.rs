//! Prometheus scrape configuration rubric.

use crate::domain::ArtifactId;
use crate::predicate::{any_directive_is_live, contains_literal, directive_is_live};
use crate::rubric::{Rubric, Rule, Verdict};

/// Required scrape interval directive, value included.
pub const SCRAPE_INTERVAL: &str = "scrape_interval: 15s";
/// Scrape interval key without a value.
pub const SCRAPE_INTERVAL_KEY: &str = "scrape_interval:";
/// Alertmanager section of the `alerting` block.
pub const ALERTMANAGERS: &str = "alertmanagers:";
/// Scrape jobs that must be configured.
pub const REQUIRED_JOBS: [&str; 3] = ["prometheus", "app", "node"];

/// Rubric for `prometheus.yml`.
pub fn rubric() -> Rubric<str> {
    let mut rules = vec![
        Rule::new("Scrape interval 15s", 4, |text: &str| {
            if contains_literal(text, SCRAPE_INTERVAL) {
                Verdict::pass("Configured")
            } else if contains_literal(text, SCRAPE_INTERVAL_KEY) {
                Verdict::partial("Wrong value")
            } else {
                Verdict::fail("Missing")
            }
        })
        .with_partial(2),
        Rule::new("Alertmanager config", 4, |text: &str| {
            Verdict::from_bool(
                directive_is_live(text, ALERTMANAGERS),
                "Configured",
                "Missing or commented",
            )
        }),
    ];

    rules.extend(REQUIRED_JOBS.into_iter().map(|job| {
        let forms = [format!("job_name: '{job}'"), format!("job_name: \"{job}\"")];
        Rule::new(format!("Job: {job}"), 4, move |text: &str| {
            let forms: Vec<&str> = forms.iter().map(String::as_str).collect();
            Verdict::from_bool(
                any_directive_is_live(text, &forms),
                "Configured",
                "Missing or commented",
            )
        })
    }));

    Rubric::new(ArtifactId::PrometheusConfig, rules)
}

#[cfg(test)]
mod tests {
    use super::rubric;

    const COMPLETE: &str = r#"global:
  scrape_interval: 15s
  evaluation_interval: 15s

alerting:
  alertmanagers:
    - static_configs:
        - targets: ['alertmanager:9093']

scrape_configs:
  - job_name: 'prometheus'
    static_configs:
      - targets: ['localhost:9090']
  - job_name: "app"
    static_configs:
      - targets: ['app:5000']
  - job_name: 'node'
    static_configs:
      - targets: ['node-exporter:9100']
"#;

    #[test]
    fn complete_config_earns_full_marks() {
        let report = rubric().evaluate(COMPLETE).expect("evaluate");
        assert_eq!(report.points_earned(), 20);
        assert!(report.checks().iter().all(|check| check.passed));
    }

    #[test]
    fn wrong_interval_earns_partial_credit() {
        let report = rubric().evaluate("scrape_interval: 30s").expect("evaluate");
        assert_eq!(report.points_earned(), 2);
        assert_eq!(report.checks()[0].detail, "Wrong value");
        assert!(report.checks().iter().all(|check| !check.passed));
    }

    #[test]
    fn commented_alerting_and_jobs_are_rejected() {
        let text = "global:\n  scrape_interval: 15s\n# alerting:\n#   alertmanagers:\nscrape_configs:\n  - job_name: 'prometheus'\n  # - job_name: 'app'\n  #- job_name: \"node\"\n";
        let report = rubric().evaluate(text).expect("evaluate");
        let passed: Vec<(&str, bool)> = report
            .checks()
            .iter()
            .map(|check| (check.name.as_str(), check.passed))
            .collect();
        assert_eq!(
            passed,
            vec![
                ("Scrape interval 15s", true),
                ("Alertmanager config", false),
                ("Job: prometheus", true),
                ("Job: app", false),
                ("Job: node", false),
            ]
        );
        assert_eq!(report.points_earned(), 8);
    }

    #[test]
    fn commented_job_does_not_mask_live_duplicate() {
        let text = "# - job_name: 'node'\n  - job_name:   'x'\n  - job_name: 'node'\n";
        let report = rubric().evaluate(text).expect("evaluate");
        let node = report
            .checks()
            .iter()
            .find(|check| check.name == "Job: node")
            .expect("node check");
        assert!(node.passed);
    }
}
