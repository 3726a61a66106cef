use crate::shared::Result;
use std::path::Path;

/// Raw manifest pulled out of a package archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Entry name inside the archive (e.g. `Serilog.nuspec`)
    pub name: String,
    /// Entry content decoded as UTF-8
    pub content: String,
}

/// PackageReader port for reading the manifest out of a package
///
/// This port abstracts the archive format so the use case only sees
/// the manifest text.
pub trait PackageReader {
    /// Reads the first `.nuspec` entry of the package at `package_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package file does not exist or is not a regular file
    /// - The file is not a readable zip archive
    /// - No `.nuspec` entry exists (`GraphError::ManifestNotFound`)
    fn read_manifest(&self, package_path: &Path) -> Result<ManifestEntry>;
}
