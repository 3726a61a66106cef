/// Adapters that delegate to external executables
mod mermaid_cli_renderer;

pub use mermaid_cli_renderer::{MermaidCliRenderer, RENDER_HEIGHT, RENDER_WIDTH};
