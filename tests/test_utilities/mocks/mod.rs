/// Mock implementations for testing
mod mock_diagram_renderer;
mod mock_progress_reporter;

pub use mock_diagram_renderer::MockDiagramRenderer;
pub use mock_progress_reporter::MockProgressReporter;
