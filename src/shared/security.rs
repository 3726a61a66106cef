use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum uncompressed manifest size (100 MB)
pub const MAX_MANIFEST_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "package", "config file")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that an output path can be written without following a symlink.
///
/// The parent directory must exist. An existing file at `path` is fine as long
/// as it is not a symbolic link.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed."
            );
        }
    }

    Ok(())
}

/// Validates that a size read from an archive header is within limits
///
/// # Errors
/// Returns an error if the size exceeds the maximum
pub fn validate_entry_size(size: u64, entry: &str, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            entry,
            size,
            max_size
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("Foo.1.0.0.nupkg");
        fs::write(&file_path, "test").unwrap();

        let result = validate_regular_file(&file_path, "package");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "package");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_regular_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/Foo.nupkg");
        let result = validate_regular_file(&path, "package");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read package metadata"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.nupkg");
        let link = temp_dir.path().join("link.nupkg");
        fs::write(&target, "test").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_regular_file(&link, "package");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_output_path_missing_parent() {
        let path = PathBuf::from("/nonexistent/directory/graph.png");
        let result = validate_output_path(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Parent directory does not exist"));
    }

    #[test]
    fn test_validate_output_path_bare_file_name() {
        assert!(validate_output_path(Path::new("graph.png")).is_ok());
    }

    #[test]
    fn test_validate_output_path_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.png");
        fs::write(&path, "old image").unwrap();
        assert!(validate_output_path(&path).is_ok());
    }

    #[test]
    fn test_validate_entry_size_within_limit() {
        let result = validate_entry_size(1000, "Foo.nuspec", MAX_MANIFEST_SIZE);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_entry_size_exceeds_limit() {
        let result = validate_entry_size(MAX_MANIFEST_SIZE + 1, "Foo.nuspec", MAX_MANIFEST_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }
}
