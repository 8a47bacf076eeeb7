//! Artifact discovery and loading.
//!
//! This is the content source that feeds the checkers; grading itself never
//! touches the filesystem.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{ArtifactContent, ArtifactContents, ArtifactId};
use crate::error::StackCheckError;
use crate::fs::FileSystem;

/// Where each artifact lives under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    root: PathBuf,
    overrides: BTreeMap<ArtifactId, PathBuf>,
}

impl ArtifactLayout {
    /// Layout using the default relative paths under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Replace the relative path of a single artifact.
    pub fn with_override(mut self, id: ArtifactId, path: impl Into<PathBuf>) -> Self {
        self.overrides.insert(id, path.into());
        self
    }

    /// Project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolved location of an artifact.
    pub fn path_for(&self, id: ArtifactId) -> PathBuf {
        match self.overrides.get(&id) {
            Some(path) => self.root.join(path),
            None => self.root.join(id.default_path()),
        }
    }
}

/// Load the given artifacts; unreadable files become [`ArtifactContent::Missing`].
pub fn load_contents<F: FileSystem>(
    fs: &F,
    layout: &ArtifactLayout,
    ids: &[ArtifactId],
) -> ArtifactContents {
    log::debug!(
        "loading {} artifacts under {}",
        ids.len(),
        layout.root().display()
    );
    let mut contents = ArtifactContents::new();
    for &id in ids {
        contents.insert(id, load_artifact(fs, &layout.path_for(id)));
    }
    contents
}

fn load_artifact<F: FileSystem>(fs: &F, path: &Path) -> ArtifactContent {
    match fs.read_to_string(path) {
        Ok(text) => ArtifactContent::Text(text),
        Err(StackCheckError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found", path.display());
            ArtifactContent::Missing
        }
        Err(err) => {
            log::warn!("could not read {}: {err}", path.display());
            ArtifactContent::Missing
        }
    }
}
