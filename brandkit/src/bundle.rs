//! Writing a generated set to disk in the layout the script expects.

use anyhow::{Context, Result};
use brandkit_core::files;
use brandkit_script::README;
use std::path::{Path, PathBuf};

use crate::generate::GeneratedAssetSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleEntry<'a> {
    pub name: &'static str,
    pub contents: &'a [u8],
}

impl GeneratedAssetSet {
    /// Bundle files in order: images, logo (when supplied), script, README.
    pub fn entries(&self) -> Vec<BundleEntry<'_>> {
        let mut entries: Vec<BundleEntry<'_>> = self
            .images
            .iter()
            .map(|generated| BundleEntry {
                name: generated.file_name,
                contents: &generated.image.bytes,
            })
            .collect();

        if let Some(logo) = &self.square_logo {
            entries.push(BundleEntry {
                name: files::SQUARE_LOGO,
                contents: logo,
            });
        }
        entries.push(BundleEntry {
            name: files::SCRIPT,
            contents: self.script.as_bytes(),
        });
        entries.push(BundleEntry {
            name: files::README,
            contents: README.as_bytes(),
        });
        entries
    }
}

/// Writes every entry into `dir`, creating it if needed. Existing files with
/// the same names are replaced.
pub async fn write_bundle(set: &GeneratedAssetSet, dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    for entry in set.entries() {
        let path = dir.join(entry.name);
        tokio::fs::write(&path, entry.contents)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {} ({} bytes)", path.display(), entry.contents.len());
        written.push(path);
    }
    Ok(written)
}
