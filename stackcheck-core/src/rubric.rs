//! Declarative rubrics: weighted rules folded over one artifact's content.

use crate::domain::{ArtifactId, ArtifactReport, CheckOutcome};
use crate::error::{Result, StackCheckError};

/// How a rule judged its subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Full credit.
    Pass(String),
    /// The rule's declared partial credit.
    Partial(String),
    /// No credit.
    Fail(String),
}

impl Verdict {
    /// Full credit with a detail message.
    pub fn pass(detail: impl Into<String>) -> Self {
        Self::Pass(detail.into())
    }

    /// Partial credit with a detail message.
    pub fn partial(detail: impl Into<String>) -> Self {
        Self::Partial(detail.into())
    }

    /// No credit with a detail message.
    pub fn fail(detail: impl Into<String>) -> Self {
        Self::Fail(detail.into())
    }

    /// Pass or fail depending on `condition`.
    pub fn from_bool(
        condition: bool,
        pass_detail: impl Into<String>,
        fail_detail: impl Into<String>,
    ) -> Self {
        if condition {
            Self::pass(pass_detail)
        } else {
            Self::fail(fail_detail)
        }
    }
}

/// A single weighted rubric item.
pub struct Rule<S: ?Sized> {
    name: String,
    points: u32,
    partial_points: u32,
    judge: Box<dyn Fn(&S) -> Verdict + Send + Sync>,
}

impl<S: ?Sized> Rule<S> {
    /// Rule worth `points` on a pass and nothing otherwise.
    pub fn new(
        name: impl Into<String>,
        points: u32,
        judge: impl Fn(&S) -> Verdict + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            points,
            partial_points: 0,
            judge: Box::new(judge),
        }
    }

    /// Award `points` when the rule returns [`Verdict::Partial`].
    pub fn with_partial(mut self, points: u32) -> Self {
        self.partial_points = points;
        self
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full credit.
    pub fn points(&self) -> u32 {
        self.points
    }

    fn evaluate(&self, subject: &S) -> CheckOutcome {
        let (passed, points_awarded, detail) = match (self.judge)(subject) {
            Verdict::Pass(detail) => (true, self.points, detail),
            Verdict::Partial(detail) => (false, self.partial_points, detail),
            Verdict::Fail(detail) => (false, 0, detail),
        };
        log::debug!(
            "rule '{}': {} ({points_awarded}/{})",
            self.name,
            if passed { "pass" } else { "fail" },
            self.points
        );
        CheckOutcome {
            name: self.name.clone(),
            passed,
            detail,
            points_awarded,
        }
    }
}

/// Ordered rule list for one artifact.
pub struct Rubric<S: ?Sized> {
    artifact: ArtifactId,
    rules: Vec<Rule<S>>,
}

impl<S: ?Sized> Rubric<S> {
    /// Create a rubric for `artifact`.
    pub fn new(artifact: ArtifactId, rules: Vec<Rule<S>>) -> Self {
        Self { artifact, rules }
    }

    /// Artifact the rubric grades.
    pub fn artifact(&self) -> ArtifactId {
        self.artifact
    }

    /// Sum of full-credit weights.
    pub fn budget(&self) -> u32 {
        self.rules.iter().map(Rule::points).sum()
    }

    /// Check the rubric's weights against the artifact's fixed budget.
    pub fn validate(&self) -> Result<()> {
        let expected = self.artifact.max_points();
        let budget = self.budget();
        if budget != expected {
            return Err(StackCheckError::Rubric(format!(
                "{} weights sum to {budget}, expected {expected}",
                self.artifact
            )));
        }

        let mut names: Vec<&str> = self.rules.iter().map(Rule::name).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(StackCheckError::Rubric(format!(
                "{} has duplicate rule '{}'",
                self.artifact, pair[0]
            )));
        }

        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.partial_points > rule.points)
        {
            return Err(StackCheckError::Rubric(format!(
                "{} rule '{}' awards {} partial points out of {}",
                self.artifact, rule.name, rule.partial_points, rule.points
            )));
        }
        Ok(())
    }

    /// Evaluate every rule against `subject` and collect the report.
    pub fn evaluate(&self, subject: &S) -> Result<ArtifactReport> {
        self.validate()?;
        let checks: Vec<CheckOutcome> = self
            .rules
            .iter()
            .map(|rule| rule.evaluate(subject))
            .collect();
        let report = ArtifactReport::from_outcomes(self.artifact, checks)?;
        log::debug!(
            "{}: {}/{} points",
            self.artifact,
            report.points_earned(),
            report.points_max()
        );
        Ok(report)
    }
}
