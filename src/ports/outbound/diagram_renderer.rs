use crate::shared::Result;
use std::path::Path;

/// DiagramRenderer port for turning graph text into an image
pub trait DiagramRenderer {
    /// Renders `graph` (Mermaid source) into an image at `output_path`
    ///
    /// Implementations must not leave intermediate files behind, whether
    /// rendering succeeds or fails.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The output location is not writable
    /// - The renderer cannot be launched
    /// - The renderer exits with a non-zero status
    fn render(&self, graph: &str, output_path: &Path) -> Result<()>;
}
