use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use walkdir::WalkDir;

use crate::dataset::DatasetRegistry;
use crate::loader::LABEL_WIDTH;
use crate::security::ResourcePath;

/// A label file found under a resource root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Path relative to the resource root, forward slashes
    pub path: String,
    pub size_bytes: u64,
    /// Label count implied by the file size, if it is a whole number
    pub implied_points: Option<usize>,
    /// Dataset whose label resource is this file
    pub referenced_by: Option<String>,
    /// Dataset whose point count equals `implied_points`
    pub size_matches: Option<String>,
}

/// Find `.bin` files under `root` and relate them to registered datasets
pub fn scan_resources(root: &Path, registry: &DatasetRegistry) -> Result<Vec<ResourceEntry>> {
    let referenced: Vec<(String, String)> = registry
        .identities()
        .into_iter()
        .filter_map(|identity| {
            ResourcePath::sanitize(&identity.label_resource_path)
                .ok()
                .map(|path| (path, identity.name.clone()))
        })
        .collect();

    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("bin") {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let size_bytes = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", entry.path().display()))?
            .len();

        let implied_points = (size_bytes % LABEL_WIDTH as u64 == 0)
            .then(|| (size_bytes / LABEL_WIDTH as u64) as usize);

        let referenced_by = referenced
            .iter()
            .find(|(path, _)| *path == relative)
            .map(|(_, name)| name.clone());

        let size_matches = implied_points
            .and_then(|count| registry.resolve(count).ok())
            .map(|identity| identity.name.clone());

        entries.push(ResourceEntry {
            path: relative,
            size_bytes,
            implied_points,
            referenced_by,
            size_matches,
        });
    }

    Ok(entries)
}
