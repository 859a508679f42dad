use super::error::SaveError;
use super::format::{deserialize_save, serialize_save, RosterSave};

use once_cell::sync::Lazy;
use std::fs::{remove_file, rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The fixed blob name storage keys the roster under.
pub const SAVE_FILE_NAME: &str = "name_lists.json";

// Last save handed to or loaded from storage this process.
static CURRENT_ROSTER_SAVE: Lazy<Mutex<Option<RosterSave>>> = Lazy::new(|| Mutex::new(None));

pub struct SaveManager;

impl SaveManager {
    /// Get the cached current save (thread-safe).
    pub fn get_current_state() -> Option<RosterSave> {
        CURRENT_ROSTER_SAVE.lock().unwrap().clone()
    }

    /// Update the cached current save.
    pub fn update_current_state(state: RosterSave) {
        *CURRENT_ROSTER_SAVE.lock().unwrap() = Some(state);
    }

    /// Clear the cached current save.
    pub fn clear_current_state() {
        *CURRENT_ROSTER_SAVE.lock().unwrap() = None;
    }

    /// Persist the roster blob under its fixed name.
    pub fn save(save: &RosterSave) -> Result<(), SaveError> {
        let path = Self::get_save_path();
        Self::save_to_path(&path, save)?;
        Self::update_current_state(save.clone());
        log::info!("Roster saved to {:?}", path);
        Ok(())
    }

    /// Load the roster blob from its fixed name.
    pub fn load() -> Result<RosterSave, SaveError> {
        let path = Self::get_save_path();
        let save = Self::load_from_path(&path)?;
        Self::update_current_state(save.clone());
        log::info!("Roster loaded from {:?}", path);
        Ok(save)
    }

    pub fn save_exists() -> bool {
        Self::get_save_path().exists()
    }

    /// Delete the persisted blob, if any.
    pub fn delete() -> Result<(), SaveError> {
        let path = Self::get_save_path();
        if path.exists() {
            remove_file(&path)?;
            log::info!("Deleted roster save at {:?}", path);
        }
        Ok(())
    }

    // Private helper methods

    fn get_save_path() -> PathBuf {
        Self::get_save_dir().join(SAVE_FILE_NAME)
    }

    fn get_save_dir() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("saves")
    }

    fn save_to_path(path: &Path, save: &RosterSave) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let blob = serialize_save(save)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(blob.as_bytes())?;
            file.flush()?;

            // sync_all ensures data is written to disk (portable fsync)
            file.sync_all()?;
        }

        rename(&temp_path, path)?;

        log::debug!("Saved {} bytes to {:?}", blob.len(), path);
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<RosterSave, SaveError> {
        if !path.exists() {
            return Err(SaveError::FileNotFound { path: path.display().to_string() });
        }

        let mut file = File::open(path)?;
        let mut blob = String::new();
        file.read_to_string(&mut blob)?;

        let save = deserialize_save(&blob)?;

        log::debug!("Loaded {} bytes from {:?}", blob.len(), path);
        Ok(save)
    }
}
