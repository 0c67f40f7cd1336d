//! TOML-backed policy store
//!
//! A modes file lists the modes and their policies, plus a `[people]` table
//! with the contacts data shown in option summaries:
//!
//! ```toml
//! [[modes]]
//! id = "bedtime"
//! name = "Bedtime"
//!
//! [modes.policy]
//! calls = "starred"
//! messages = "contacts"
//! conversations = "important"
//! repeat_callers = true
//!
//! [people]
//! contacts_count = 42
//! all_conversations = 5
//! important_conversations = 2
//! ```

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zenmodes_core::prelude::*;
use zenmodes_core::ZenPolicy;

use crate::people::StaticPeopleDirectory;
use crate::store::{PolicyStore, ZenMode};

/// Contents of a modes file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModesFile {
    #[serde(default)]
    pub modes: Vec<ZenMode>,

    #[serde(default)]
    pub people: StaticPeopleDirectory,
}

impl ModesFile {
    pub fn find(&self, mode_id: &str) -> Option<&ZenMode> {
        self.modes.iter().find(|mode| mode.id == mode_id)
    }

    fn find_mut(&mut self, mode_id: &str) -> Option<&mut ZenMode> {
        self.modes.iter_mut().find(|mode| mode.id == mode_id)
    }
}

/// Policy store persisted to a modes file.
///
/// Writes hold an exclusive lock on a sidecar `.<name>.lock` file and
/// rewrite the whole modes file. `set_policy` re-reads the file under that
/// lock and only applies the fields this store changed, so writers working
/// on different fields never overwrite each other.
#[derive(Debug)]
pub struct FileModesStore {
    path: PathBuf,
    file: ModesFile,
    update_lock: Option<File>,
}

impl FileModesStore {
    /// Load the modes file at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = read_modes_file(&path)?;
        Ok(Self {
            path,
            file,
            update_lock: None,
        })
    }

    /// Create a store at `path` with `file` as its initial content
    pub fn create(path: impl Into<PathBuf>, file: ModesFile) -> Result<Self> {
        let store = Self {
            path: path.into(),
            file,
            update_lock: None,
        };
        let _lock = store.acquire_lock()?;
        write_modes_file(&store.path, &store.file)?;
        Ok(store)
    }

    /// Lock the modes file for a read-modify-write and reload it.
    ///
    /// Blocks while another process holds the lock. The lock is held until
    /// the store is dropped.
    pub fn lock_for_update(&mut self) -> Result<()> {
        if self.update_lock.is_none() {
            self.update_lock = Some(self.acquire_lock()?);
        }
        self.file = read_modes_file(&self.path)?;
        Ok(())
    }

    pub fn is_locked(&self) -> bool {
        self.update_lock.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn modes(&self) -> &[ZenMode] {
        &self.file.modes
    }

    pub fn mode(&self, mode_id: &str) -> Option<&ZenMode> {
        self.file.find(mode_id)
    }

    pub fn people(&self) -> &StaticPeopleDirectory {
        &self.file.people
    }

    fn acquire_lock(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let lock_path = sidecar_path(&self.path, "lock");
        let lock = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .context(format!("Failed to open {}", lock_path.display()))?;
        lock.lock_exclusive()
            .map_err(|e| Error::store(format!("Failed to lock {}: {}", self.path.display(), e)))?;
        Ok(lock)
    }
}

fn read_modes_file(path: &Path) -> Result<ModesFile> {
    if !path.exists() {
        debug!("No modes file at {:?}, starting empty", path);
        return Ok(ModesFile::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: ModesFile =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded {} modes from {:?}", file.modes.len(), path);
    Ok(file)
}

/// Write `file` via a temp file and rename. The caller holds the lock.
fn write_modes_file(path: &Path, file: &ModesFile) -> Result<()> {
    let content = toml::to_string_pretty(file)?;
    let temp_path = sidecar_path(path, "tmp");

    let mut temp = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.sync_all()?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        Error::store(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    info!("Saved modes to {:?}", path);
    Ok(())
}

/// `.<name>.<extension>` next to `path`
fn sidecar_path(path: &Path, extension: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "modes.toml".to_string());
    path.with_file_name(format!(".{}.{}", name, extension))
}

/// Apply the fields that changed from `before` to `after` on top of `latest`
fn merge_policy(latest: ZenPolicy, before: ZenPolicy, after: ZenPolicy) -> ZenPolicy {
    fn pick<T: PartialEq>(latest: T, before: T, after: T) -> T {
        if after != before {
            after
        } else {
            latest
        }
    }

    ZenPolicy {
        calls: pick(latest.calls, before.calls, after.calls),
        messages: pick(latest.messages, before.messages, after.messages),
        conversations: pick(latest.conversations, before.conversations, after.conversations),
        repeat_callers: pick(latest.repeat_callers, before.repeat_callers, after.repeat_callers),
    }
}

impl PolicyStore for FileModesStore {
    fn mode_ids(&self) -> Result<Vec<String>> {
        Ok(self.file.modes.iter().map(|mode| mode.id.clone()).collect())
    }

    fn policy(&self, mode_id: &str) -> Result<ZenPolicy> {
        self.file
            .find(mode_id)
            .map(|mode| mode.policy)
            .ok_or_else(|| Error::mode_not_found(mode_id))
    }

    fn set_policy(&mut self, mode_id: &str, policy: ZenPolicy) -> Result<()> {
        let before = self.policy(mode_id)?;

        let _lock = if self.update_lock.is_some() {
            None
        } else {
            Some(self.acquire_lock()?)
        };

        let mut latest = read_modes_file(&self.path)?;
        let mode = latest
            .find_mut(mode_id)
            .ok_or_else(|| Error::mode_not_found(mode_id))?;
        let merged = merge_policy(mode.policy, before, policy);
        if merged != policy {
            debug!("Kept concurrent changes to {} from {:?}", mode_id, self.path);
        }
        mode.policy = merged;

        write_modes_file(&self.path, &latest)?;
        self.file = latest;
        Ok(())
    }
}
