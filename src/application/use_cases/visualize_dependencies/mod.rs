use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::graph_generation::domain::ManifestDocument;
use crate::graph_generation::services::{ManifestParser, MermaidRenderer};
use crate::ports::outbound::{DiagramRenderer, PackageReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// VisualizeDependenciesUseCase - Core use case for rendering a package's dependency graph
///
/// Runs the pipeline extract → render graph text → invoke renderer once per
/// request. Holds no state between calls.
///
/// # Type Parameters
/// * `PR` - PackageReader implementation
/// * `DR` - DiagramRenderer implementation
/// * `REP` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<PR, DR, REP> {
    package_reader: PR,
    diagram_renderer: DR,
    progress_reporter: REP,
}

impl<PR, DR, REP> VisualizeDependenciesUseCase<PR, DR, REP>
where
    PR: PackageReader,
    DR: DiagramRenderer,
    REP: ProgressReporter,
{
    /// Creates a new VisualizeDependenciesUseCase with injected dependencies
    pub fn new(package_reader: PR, diagram_renderer: DR, progress_reporter: REP) -> Self {
        Self {
            package_reader,
            diagram_renderer,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Returns
    /// VisualizeResponse with the extracted map, the generated graph text and the image path
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read or parsed, or if rendering fails.
    /// Nothing is rendered when extraction fails.
    pub fn execute(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        // Step 1: Extract the dependency map from the package
        let document = self.extract(&request.package_path)?;
        self.warn_on_package_name_mismatch(&document, &request.package_name);

        // Step 2: Generate graph text
        let graph = MermaidRenderer::render(&document.dependencies, request.graph_style);

        // Step 3: Render the image
        self.render(&graph, &request.output_path)?;

        self.progress_reporter.report_completion(&format!(
            "✅ Graph saved to {}",
            request.output_path.display()
        ));

        Ok(VisualizeResponse::new(
            document.metadata,
            document.dependencies,
            graph,
            request.output_path,
        ))
    }

    /// Reads and parses the package manifest, reporting what was found
    pub fn extract(&self, package_path: &Path) -> Result<ManifestDocument> {
        self.progress_reporter.report(&format!(
            "📦 Extracting dependencies from {}",
            package_path.display()
        ));

        let entry = self.package_reader.read_manifest(package_path)?;
        self.progress_reporter
            .report(&format!("📄 Found manifest: {}", entry.name));

        let parsed = ManifestParser::parse(&entry.name, &entry.content)?;
        for warning in &parsed.warnings {
            self.progress_reporter.report_error(warning);
        }

        if !parsed.has_dependencies_node {
            self.progress_reporter
                .report("ℹ️  No <dependencies> element found; the graph will be empty");
        }

        let dependencies = &parsed.document.dependencies;
        for (framework, deps) in dependencies.iter() {
            self.progress_reporter
                .report(&format!("   - {}: {} dependencies", framework, deps.len()));
        }
        self.progress_reporter.report(&format!(
            "✅ Detected {} dependencies across {} target framework(s)",
            dependencies.dependency_count(),
            dependencies.framework_count()
        ));
        self.progress_reporter.report(&format!(
            "   Dependencies: {}",
            serde_json::to_string(dependencies)?
        ));

        Ok(parsed.document)
    }

    fn warn_on_package_name_mismatch(&self, document: &ManifestDocument, package_name: &str) {
        if document.metadata.matches_package_name(package_name) {
            return;
        }
        if let Some(id) = &document.metadata.id {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Configured PackageName '{}' does not match manifest id '{}'",
                package_name, id
            ));
        }
    }

    fn render(&self, graph: &str, output_path: &Path) -> Result<()> {
        self.progress_reporter
            .start_activity("🎨 Rendering dependency graph...");
        let result = self.diagram_renderer.render(graph, output_path);
        self.progress_reporter.finish_activity();
        result
    }
}
