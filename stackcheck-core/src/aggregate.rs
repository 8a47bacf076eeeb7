//! Score aggregation across artifacts.

use crate::checks::build_checkers;
use crate::domain::{ArtifactContents, ArtifactId, ArtifactReport, OverallReport};
use crate::error::Result;

/// Grade every supplied artifact in fixed artifact order and aggregate.
///
/// Missing or malformed artifacts are scored as zero; only a rubric defect
/// aborts the run.
pub fn grade(contents: &ArtifactContents) -> Result<OverallReport> {
    if contents.is_empty() {
        log::warn!("no artifacts to grade");
    }
    log::debug!("grading {} artifacts", contents.len());
    let ids: Vec<ArtifactId> = contents.iter().map(|(id, _)| id).collect();
    let reports = build_checkers(&ids)
        .iter()
        .zip(contents.iter())
        .map(|(checker, (_, content))| checker.check(content))
        .collect::<Result<Vec<_>>>()?;
    Ok(aggregate(reports))
}

/// Combine per-artifact reports into an overall report.
///
/// Artifact order is preserved as given.
pub fn aggregate(artifacts: Vec<ArtifactReport>) -> OverallReport {
    let total_earned: u32 = artifacts.iter().map(ArtifactReport::points_earned).sum();
    let total_max: u32 = artifacts.iter().map(ArtifactReport::points_max).sum();
    let percentage = completion_percentage(total_earned, total_max);
    log::debug!("total: {total_earned}/{total_max} points ({percentage}%)");
    OverallReport::new(artifacts, total_earned, total_max, percentage)
}

/// Rounded completion percentage.
///
/// Zero when nothing is graded, and never 100 while points are outstanding.
pub fn completion_percentage(earned: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let earned = u64::from(earned.min(max));
    let max = u64::from(max);
    let rounded = (earned * 100 + max / 2) / max;
    let rounded = u32::try_from(rounded).unwrap_or(100);
    if earned < max { rounded.min(99) } else { rounded }
}
