//! Mapping a request target onto a file below the document root.
//!
//! The lookup is done once per connection; the header writer and the renderer
//! both consume the same result, so they can never disagree on existence.

use std::path::{Component, Path, PathBuf};

use tokio::fs::File;

use crate::http::request::RequestTarget;

#[derive(Debug)]
pub enum ResourceLookup {
    Found {
        path: PathBuf,
        file: File,
        /// Size in bytes when the file was opened
        len: u64,
    },
    NotFound,
}

impl ResourceLookup {
    /// Open the file a target addresses.
    ///
    /// Anything that is not an openable regular file is `NotFound`, as is any
    /// target that tries to climb out of `root` with `..`.
    pub async fn resolve(root: &Path, target: &RequestTarget) -> Self {
        let Some(path) = local_path(root, target) else {
            tracing::warn!(request_target = %target, "Rejected target outside document root");
            return ResourceLookup::NotFound;
        };

        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Resource not found");
                return ResourceLookup::NotFound;
            }
        };

        match file.metadata().await {
            Ok(meta) if meta.is_file() => ResourceLookup::Found {
                path,
                file,
                len: meta.len(),
            },
            _ => ResourceLookup::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ResourceLookup::Found { .. })
    }
}

/// `None` when the target contains a parent-directory component.
pub fn local_path(root: &Path, target: &RequestTarget) -> Option<PathBuf> {
    let relative = Path::new(target.as_str().trim_start_matches('/'));

    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    Some(root.join(relative))
}
