/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package archives, the renderer process, the console).
pub mod diagram_renderer;
pub mod package_reader;
pub mod progress_reporter;

pub use diagram_renderer::DiagramRenderer;
pub use package_reader::{ManifestEntry, PackageReader};
pub use progress_reporter::ProgressReporter;
