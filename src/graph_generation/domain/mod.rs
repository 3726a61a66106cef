pub mod dependency_map;
pub mod graph_style;
pub mod node_id;
pub mod package_metadata;

pub use dependency_map::{format_descriptor, DependencyMap, UNKNOWN_FRAMEWORK};
pub use graph_style::GraphStyle;
pub use node_id::NodeId;
pub use package_metadata::{ManifestDocument, PackageMetadata};
