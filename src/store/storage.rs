use super::types::TipCollection;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default tips file path (~/.config/tippspiel/tipps.json)
pub fn get_tips_path() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("tippspiel").join("tipps.json")
}

/// Load all stored tips from a JSON file
///
/// If the file doesn't exist, returns a new empty collection. Malformed
/// content is an error; there is no repair or backup fallback.
pub fn load_tips(path: &Path) -> Result<TipCollection> {
    if !path.exists() {
        return Ok(TipCollection::new());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open tips file at {}", path.display()))?;

    let tips: TipCollection = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse tips file at {}", path.display()))?;

    Ok(tips)
}

/// Save the full collection to a JSON file atomically
///
/// Always writes the entire collection; the previous file content is fully
/// replaced and no backup is kept. Creates the parent directory if it doesn't
/// exist.
pub fn save_tips(path: &Path, tips: &TipCollection) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, tips).context("Failed to serialize tips")?;

    file.commit().context("Failed to save tips")?;

    Ok(())
}
