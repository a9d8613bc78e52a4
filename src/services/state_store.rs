//! Persistence of the last successful render per surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::StateStoreError;
use crate::models::{BlockAssignment, BlockPos, SurfaceIdentity};

/// Storage for rendered surfaces, keyed by identity
pub trait SurfaceStateStore: Send + Sync {
    /// Last saved assignment, or `None` if the surface was never rendered
    fn load(&self, identity: &SurfaceIdentity) -> Result<Option<BlockAssignment>, StateStoreError>;

    /// Replace the saved assignment
    fn save(&self, identity: &SurfaceIdentity, blocks: &BlockAssignment)
        -> Result<(), StateStoreError>;

    /// Forget a surface. Deleting an absent entry succeeds.
    fn delete(&self, identity: &SurfaceIdentity) -> Result<(), StateStoreError>;
}

/// Process-local state, lost on exit
#[derive(Default)]
pub struct InMemoryStateStore {
    surfaces: RwLock<HashMap<SurfaceIdentity, BlockAssignment>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces currently stored
    pub fn len(&self) -> usize {
        self.surfaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SurfaceStateStore for InMemoryStateStore {
    fn load(&self, identity: &SurfaceIdentity) -> Result<Option<BlockAssignment>, StateStoreError> {
        let surfaces = self.surfaces.read().unwrap_or_else(PoisonError::into_inner);
        Ok(surfaces.get(identity).cloned())
    }

    fn save(
        &self,
        identity: &SurfaceIdentity,
        blocks: &BlockAssignment,
    ) -> Result<(), StateStoreError> {
        let mut surfaces = self.surfaces.write().unwrap_or_else(PoisonError::into_inner);
        surfaces.insert(*identity, blocks.clone());
        Ok(())
    }

    fn delete(&self, identity: &SurfaceIdentity) -> Result<(), StateStoreError> {
        let mut surfaces = self.surfaces.write().unwrap_or_else(PoisonError::into_inner);
        surfaces.remove(identity);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredBlock {
    #[serde(flatten)]
    pos: BlockPos,
    block: String,
}

/// On-disk document for one surface
#[derive(Debug, Serialize, Deserialize)]
struct StoredSurface {
    identity: SurfaceIdentity,
    rendered_at: DateTime<Utc>,
    blocks: Vec<StoredBlock>,
}

/// One JSON document per surface inside a directory.
///
/// File names are the hex SHA-256 of the identity's JSON form, so any
/// identity maps to a stable, filesystem-safe name.
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Use `dir` for state files. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `identity`
    pub fn path_for(&self, identity: &SurfaceIdentity) -> Result<PathBuf, StateStoreError> {
        let canonical = serde_json::to_vec(identity)?;
        let digest = Sha256::digest(&canonical);
        Ok(self.dir.join(format!("{}.json", hex::encode(digest))))
    }
}

impl SurfaceStateStore for FileStateStore {
    fn load(&self, identity: &SurfaceIdentity) -> Result<Option<BlockAssignment>, StateStoreError> {
        let path = self.path_for(identity)?;
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored: StoredSurface = serde_json::from_slice(&content)?;
        if stored.identity != *identity {
            return Err(StateStoreError::IdentityMismatch);
        }

        tracing::debug!(
            path = %path.display(),
            blocks = stored.blocks.len(),
            rendered_at = %stored.rendered_at,
            "Loaded surface state"
        );

        Ok(Some(
            stored
                .blocks
                .into_iter()
                .map(|b| (b.pos, b.block))
                .collect(),
        ))
    }

    fn save(
        &self,
        identity: &SurfaceIdentity,
        blocks: &BlockAssignment,
    ) -> Result<(), StateStoreError> {
        fs::create_dir_all(&self.dir)?;

        let mut stored_blocks: Vec<StoredBlock> = blocks
            .iter()
            .map(|(pos, block)| StoredBlock {
                pos: *pos,
                block: block.clone(),
            })
            .collect();
        stored_blocks.sort_by_key(|b| b.pos);

        let stored = StoredSurface {
            identity: *identity,
            rendered_at: Utc::now(),
            blocks: stored_blocks,
        };

        let path = self.path_for(identity)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&stored)?)?;
        fs::rename(&tmp, &path)?;

        tracing::debug!(path = %path.display(), blocks = blocks.len(), "Saved surface state");
        Ok(())
    }

    fn delete(&self, identity: &SurfaceIdentity) -> Result<(), StateStoreError> {
        let path = self.path_for(identity)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
