pub mod manifest_parser;
pub mod mermaid_renderer;

pub use manifest_parser::{ManifestParser, ParsedManifest, NUSPEC_NAMESPACE};
pub use mermaid_renderer::{MermaidRenderer, GRAPH_HEADER};
