#![deny(missing_docs)]
//! StackCheck core library.
//!
//! Grades monitoring-stack configuration files (Prometheus, Alertmanager,
//! Grafana, alerting rules) against a fixed rubric and reports per-file and
//! overall completion. Grading is a pure function of the supplied content.

pub mod aggregate;
pub mod checker;
pub mod checks;
pub mod domain;
pub mod error;
pub mod fs;
pub mod predicate;
pub mod rubric;
pub mod source;

pub use aggregate::{aggregate, completion_percentage, grade};
pub use checker::Checker;
pub use checks::{build_checker, build_checkers};
pub use domain::{
    ArtifactContent, ArtifactContents, ArtifactId, ArtifactReport, CheckOutcome, OverallReport,
};
pub use error::{Result, StackCheckError};
pub use fs::{FileSystem, StdFileSystem};
pub use rubric::{Rubric, Rule, Verdict};
pub use source::{ArtifactLayout, load_contents};
