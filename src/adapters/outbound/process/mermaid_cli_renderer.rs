use crate::ports::outbound::DiagramRenderer;
use crate::shared::error::GraphError;
use crate::shared::security::validate_output_path;
use crate::shared::Result;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Image width passed to the renderer
pub const RENDER_WIDTH: u32 = 2000;
/// Image height passed to the renderer
pub const RENDER_HEIGHT: u32 = 1500;

/// MermaidCliRenderer adapter invoking an external Mermaid CLI (e.g. `mmdc`)
///
/// Runs `<program> -i <graph-file> -o <output> --width 2000 --height 1500`.
/// The graph file is a `NamedTempFile`, so it is removed when this call
/// returns, whatever the outcome.
pub struct MermaidCliRenderer {
    program: PathBuf,
}

impl MermaidCliRenderer {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn write_graph_file(&self, graph: &str) -> Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("dependency-graph-")
            .suffix(".mmd")
            .tempfile()
            .context("Failed to create temporary graph file")?;
        let path = file.path().to_path_buf();
        file.write_all(graph.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write graph file: {}", path.display()))?;
        Ok(file)
    }

    fn command(&self, graph_file: &Path, output_path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(graph_file)
            .arg("-o")
            .arg(output_path)
            .arg("--width")
            .arg(RENDER_WIDTH.to_string())
            .arg("--height")
            .arg(RENDER_HEIGHT.to_string());
        command
    }
}

impl DiagramRenderer for MermaidCliRenderer {
    fn render(&self, graph: &str, output_path: &Path) -> Result<()> {
        validate_output_path(output_path).map_err(|e| GraphError::FileWriteError {
            path: output_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let graph_file = self.write_graph_file(graph)?;

        let status = self
            .command(graph_file.path(), output_path)
            .status()
            .map_err(|e| GraphError::RendererLaunchFailed {
                program: self.program.clone(),
                details: e.to_string(),
            })?;

        if !status.success() {
            return Err(GraphError::RendererInvocationFailed {
                program: self.program.clone(),
                status,
            }
            .into());
        }

        Ok(())
    }
}
