//! Metrics instrumentation rubric for the demo service source.

use crate::domain::ArtifactId;
use crate::predicate::directive_is_live;
use crate::rubric::{Rubric, Rule, Verdict};

/// Instrumentation snippets and the rule name reported for each.
pub const REQUIRED_SNIPPETS: [(&str, &str); 5] = [
    ("Prometheus client import", "from prometheus_client import"),
    ("Request counter", "Counter("),
    ("Request histogram", "Histogram("),
    ("Metrics endpoint", "@app.route(\"/metrics\")"),
    ("Generate latest", "generate_latest()"),
];

/// Rubric for the service's `app.py`.
pub fn rubric() -> Rubric<str> {
    let rules = REQUIRED_SNIPPETS
        .into_iter()
        .map(|(name, snippet)| {
            Rule::new(name, 4, move |text: &str| {
                Verdict::from_bool(
                    directive_is_live(text, snippet),
                    "",
                    "Missing or commented",
                )
            })
        })
        .collect();
    Rubric::new(ArtifactId::AppInstrumentation, rules)
}

#[cfg(test)]
mod tests {
    use super::rubric;

    const INSTRUMENTED: &str = r#"from flask import Flask, Response
from prometheus_client import Counter, Histogram, generate_latest, CONTENT_TYPE_LATEST

app = Flask(__name__)

REQUEST_COUNT = Counter("app_requests_total", "Total requests", ["method", "endpoint", "status"])
REQUEST_LATENCY = Histogram("app_request_latency_seconds", "Request latency", ["endpoint"])

@app.route("/metrics")
def metrics():
    return Response(generate_latest(), mimetype=CONTENT_TYPE_LATEST)
"#;

    #[test]
    fn instrumented_service_earns_full_marks() {
        let report = rubric().evaluate(INSTRUMENTED).expect("evaluate");
        assert_eq!(report.points_earned(), 20);
    }

    #[test]
    fn commented_starter_code_earns_nothing() {
        let starter: String = INSTRUMENTED
            .lines()
            .filter(|line| !line.starts_with("from flask") && !line.starts_with("app ="))
            .map(|line| format!("# {line}\n"))
            .collect();
        let report = rubric().evaluate(&starter).expect("evaluate");
        assert_eq!(report.points_earned(), 0);
        assert!(
            report
                .checks()
                .iter()
                .all(|check| check.detail == "Missing or commented")
        );
    }
}
