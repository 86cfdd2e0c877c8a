//! Session journal persistence for `--record`.
//!
//! The journal is rewritten whole after every frame that applied input. Each
//! write goes to a sibling `.tmp` file that is then renamed over the target,
//! so a crash never leaves a half-written journal behind.

use std::fs;
use std::io;
use std::path::Path;

use tactics_core::InputJournal;

pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
