//! Output writing for rendered documentation pages.
//!
//! Pages are written through a temp file and renamed into place so partially
//! written pages never land under the output root.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write one rendered page under `out_root` and return its final path.
pub fn write_page(out_root: &Path, rel_path: &str, html: &str) -> Result<PathBuf> {
    let dest = out_root.join(rel_path);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("page");
    let tmp_path = dest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, html).with_context(|| format!("write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, &dest).with_context(|| format!("publish {}", dest.display()))?;
    Ok(dest)
}

/// File name for a type's documentation page.
pub fn page_file_name(type_name: &str) -> String {
    format!("{type_name}.html")
}
