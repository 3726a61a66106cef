use crate::graph_generation::domain::GraphStyle;
use std::path::PathBuf;

/// VisualizeRequest - Internal request DTO for the visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeRequest {
    /// Path to the `.nupkg` archive
    pub package_path: PathBuf,
    /// Where the renderer writes the image
    pub output_path: PathBuf,
    /// Package name the user expects the archive to contain
    pub package_name: String,
    /// Layout of the generated graph
    pub graph_style: GraphStyle,
}

impl VisualizeRequest {
    pub fn new(
        package_path: PathBuf,
        output_path: PathBuf,
        package_name: String,
        graph_style: GraphStyle,
    ) -> Self {
        Self {
            package_path,
            output_path,
            package_name,
            graph_style,
        }
    }
}
