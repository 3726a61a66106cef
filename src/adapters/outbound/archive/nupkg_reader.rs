use crate::ports::outbound::{ManifestEntry, PackageReader};
use crate::shared::error::GraphError;
use crate::shared::security::{validate_entry_size, validate_regular_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// File extension of the manifest inside a `.nupkg`
pub const MANIFEST_EXTENSION: &str = ".nuspec";

/// NupkgArchiveReader adapter for reading manifests out of zip-based packages
///
/// Entries are scanned in archive order and the first one whose name ends in
/// `.nuspec` wins.
pub struct NupkgArchiveReader;

impl NupkgArchiveReader {
    pub fn new() -> Self {
        Self
    }

    fn validate_package_path(&self, package_path: &Path) -> Result<()> {
        validate_regular_file(package_path, "package").map_err(|e| {
            GraphError::InvalidPackagePath {
                path: package_path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn archive_error(package_path: &Path, details: impl ToString) -> anyhow::Error {
        GraphError::ArchiveReadError {
            path: package_path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for NupkgArchiveReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageReader for NupkgArchiveReader {
    fn read_manifest(&self, package_path: &Path) -> Result<ManifestEntry> {
        self.validate_package_path(package_path)?;

        let file = File::open(package_path).map_err(|e| Self::archive_error(package_path, e))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| Self::archive_error(package_path, e))?;

        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|e| Self::archive_error(package_path, e))?;
            if entry.is_dir() || !entry.name().ends_with(MANIFEST_EXTENSION) {
                continue;
            }

            let name = entry.name().to_string();
            validate_entry_size(entry.size(), &name, MAX_MANIFEST_SIZE)?;

            let mut content = String::new();
            entry
                .read_to_string(&mut content)
                .map_err(|e| Self::archive_error(package_path, format!("{}: {}", name, e)))?;

            return Ok(ManifestEntry { name, content });
        }

        Err(GraphError::ManifestNotFound {
            path: package_path.to_path_buf(),
        }
        .into())
    }
}
