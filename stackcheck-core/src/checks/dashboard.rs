//! Grafana dashboard definition rubric.

use serde_json::Value;

use crate::domain::ArtifactId;
use crate::predicate::{PathSegment, array_at, str_at};
use crate::rubric::{Rubric, Rule, Verdict};

/// Marker left in template queries that still need editing.
pub const PLACEHOLDER_MARKER: &str = "REPLACE_WITH";
/// Title shipped with the dashboard template.
pub const DEFAULT_TITLE: &str = "App Dashboard";
/// Minimum number of panels.
pub const MIN_PANELS: usize = 4;

const PANELS: [PathSegment<'static>; 1] = [PathSegment::Key("panels")];
const TARGETS: [PathSegment<'static>; 1] = [PathSegment::Key("targets")];
const EXPR: [PathSegment<'static>; 1] = [PathSegment::Key("expr")];
const TITLE: [PathSegment<'static>; 1] = [PathSegment::Key("title")];

/// Query expressions across every panel target.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QueryCensus {
    /// Non-empty expressions without the placeholder marker.
    pub real: usize,
    /// Expressions still carrying the placeholder marker.
    pub placeholders: usize,
}

impl QueryCensus {
    /// Count the query expressions of a parsed dashboard.
    pub fn of(dashboard: &Value) -> Self {
        let mut census = Self::default();
        let exprs = array_at(dashboard, &PANELS)
            .iter()
            .flat_map(|panel| array_at(panel, &TARGETS))
            .filter_map(|target| str_at(target, &EXPR));
        for expr in exprs {
            if expr.contains(PLACEHOLDER_MARKER) {
                census.placeholders += 1;
            } else {
                census.real += 1;
            }
        }
        census
    }
}

/// Rubric for the dashboard JSON. Only reached once the content parsed.
pub fn rubric() -> Rubric<Value> {
    Rubric::new(
        ArtifactId::GrafanaDashboard,
        vec![
            Rule::new("Valid JSON", 5, |_: &Value| Verdict::pass("")),
            Rule::new(format!("{MIN_PANELS}+ panels"), 5, |dashboard: &Value| {
                let count = array_at(dashboard, &PANELS).len();
                if count >= MIN_PANELS {
                    Verdict::pass(format!("{count} panels"))
                } else {
                    Verdict::fail(format!("Only {count} panels"))
                }
            }),
            Rule::new("Real PromQL queries", 10, |dashboard: &Value| {
                let census = QueryCensus::of(dashboard);
                match (census.real, census.placeholders) {
                    (0, _) => Verdict::fail("No real queries"),
                    (_, 0) => Verdict::pass("All panels have queries"),
                    (_, remaining) => Verdict::partial(format!("{remaining} placeholders remaining")),
                }
            })
            .with_partial(5),
            // Default or missing titles keep the 2-point participation credit.
            Rule::new("Custom title", 5, |dashboard: &Value| {
                match str_at(dashboard, &TITLE) {
                    Some(title) if title != DEFAULT_TITLE => Verdict::pass(title),
                    _ => Verdict::partial("Using default title"),
                }
            })
            .with_partial(2),
        ],
    )
}
