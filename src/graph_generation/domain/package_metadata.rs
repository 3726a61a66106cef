use super::DependencyMap;

/// Package identity declared in the manifest's `<metadata>` block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub id: Option<String>,
    pub version: Option<String>,
}

impl PackageMetadata {
    pub fn new(id: Option<String>, version: Option<String>) -> Self {
        Self { id, version }
    }

    /// NuGet package ids are case-insensitive. Returns `true` when no id was declared.
    pub fn matches_package_name(&self, package_name: &str) -> bool {
        match &self.id {
            Some(id) => id.eq_ignore_ascii_case(package_name),
            None => true,
        }
    }
}

/// Everything extracted from one `.nuspec` manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDocument {
    pub metadata: PackageMetadata,
    pub dependencies: DependencyMap,
}
