use crate::graph_generation::domain::{DependencyMap, PackageMetadata};
use std::path::PathBuf;

/// VisualizeResponse - Internal response DTO from the visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeResponse {
    /// Identity declared by the manifest
    pub metadata: PackageMetadata,
    /// Dependencies grouped by target framework
    pub dependencies: DependencyMap,
    /// Mermaid source handed to the renderer
    pub graph: String,
    /// Image written by the renderer
    pub output_path: PathBuf,
}

impl VisualizeResponse {
    pub fn new(
        metadata: PackageMetadata,
        dependencies: DependencyMap,
        graph: String,
        output_path: PathBuf,
    ) -> Self {
        Self {
            metadata,
            dependencies,
            graph,
            output_path,
        }
    }
}
