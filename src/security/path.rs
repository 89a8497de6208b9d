use std::path::{Component, Path};
use thiserror::Error;

/// Prefix the host resource system puts in front of bundled files
pub const RESOURCE_PREFIX: char = ':';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourcePathError {
    #[error("Empty resource path")]
    Empty,

    #[error("Absolute path not allowed: {0}")]
    Absolute(String),

    #[error("Parent directory traversal not allowed: {0}")]
    ParentTraversal(String),

    #[error("Invalid UTF-8 in resource path: {0}")]
    InvalidUtf8(String),

    #[error("No valid components: {0}")]
    NoComponents(String),
}

pub struct ResourcePath;

impl ResourcePath {
    /// Normalize a label resource path so it can be joined onto a resource
    /// root without escaping it.
    ///
    /// A leading `:` (as in `:data/mnist_60000_labels.bin`) is dropped,
    /// `.` components are skipped, and absolute paths or `..` are rejected.
    /// Returns the path with forward slashes.
    pub fn sanitize(raw_path: &str) -> Result<String, ResourcePathError> {
        let stripped = raw_path.strip_prefix(RESOURCE_PREFIX).unwrap_or(raw_path);
        if stripped.is_empty() {
            return Err(ResourcePathError::Empty);
        }

        let mut components = Vec::new();
        for component in Path::new(stripped).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(ResourcePathError::Absolute(raw_path.to_string()));
                }
                Component::ParentDir => {
                    return Err(ResourcePathError::ParentTraversal(raw_path.to_string()));
                }
                Component::CurDir => continue,
                Component::Normal(part) => {
                    let part = part
                        .to_str()
                        .ok_or_else(|| ResourcePathError::InvalidUtf8(format!("{:?}", part)))?;
                    components.push(part);
                }
            }
        }

        if components.is_empty() {
            return Err(ResourcePathError::NoComponents(raw_path.to_string()));
        }

        Ok(components.join("/"))
    }
}
