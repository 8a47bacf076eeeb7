//! Checker trait definitions.

use crate::domain::{ArtifactContent, ArtifactId, ArtifactReport};
use crate::error::Result;

/// Grades the content of one artifact against its rubric.
pub trait Checker {
    /// Artifact this checker owns.
    fn artifact(&self) -> ArtifactId;
    /// Grade `content`, yielding a zero-score report when it is missing.
    fn check(&self, content: &ArtifactContent) -> Result<ArtifactReport>;
}
