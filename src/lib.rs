//! nuspec-graph - render the dependency graph of a NuGet package
//!
//! Reads the `.nuspec` manifest out of a `.nupkg` archive, groups its declared
//! dependencies by target framework, writes the result as a Mermaid flowchart
//! and hands it to an external renderer (such as `mmdc`) to produce an image.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_generation`): Manifest parsing and graph text generation
//! - **Application Layer** (`application`): The visualization use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Zip archive reader, renderer process, console reporter
//! - **Shared** (`shared`): Error types and path checks
//!
//! # Example
//!
//! ```no_run
//! use nuspec_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = VisualizeDependenciesUseCase::new(
//!     NupkgArchiveReader::new(),
//!     MermaidCliRenderer::new(PathBuf::from("mmdc")),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = VisualizeRequest::new(
//!     PathBuf::from("Newtonsoft.Json.13.0.3.nupkg"),
//!     PathBuf::from("graph.png"),
//!     "Newtonsoft.Json".to_string(),
//!     GraphStyle::Grouped,
//! );
//! let response = use_case.execute(request)?;
//! println!("{}", response.graph);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::NupkgArchiveReader;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::process::MermaidCliRenderer;
    pub use crate::application::dto::{VisualizeRequest, VisualizeResponse};
    pub use crate::application::use_cases::VisualizeDependenciesUseCase;
    pub use crate::graph_generation::domain::{
        DependencyMap, GraphStyle, ManifestDocument, NodeId, PackageMetadata,
    };
    pub use crate::graph_generation::services::{ManifestParser, MermaidRenderer};
    pub use crate::ports::outbound::{
        DiagramRenderer, ManifestEntry, PackageReader, ProgressReporter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
