use nuspec_graph::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DiagramRenderer that records every graph it is asked to render
#[derive(Default, Clone)]
pub struct MockDiagramRenderer {
    pub calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
    pub should_fail: bool,
}

impl MockDiagramRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_graph(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|(graph, _)| graph.clone())
    }
}

impl DiagramRenderer for MockDiagramRenderer {
    fn render(&self, graph: &str, output_path: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((graph.to_string(), output_path.to_path_buf()));
        if self.should_fail {
            anyhow::bail!("Mock renderer failure");
        }
        Ok(())
    }
}
