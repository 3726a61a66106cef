mod cli;

use cli::Args;
use nuspec_graph::config;
use nuspec_graph::prelude::*;
use nuspec_graph::shared::error::ExitCode;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    eprintln!(
        "🔧 Config: {}, Package: {}",
        args.config_path.display(),
        args.package_path.display()
    );

    // Load and validate configuration before touching the package
    let config = config::load_config_from_path(&args.config_path)?;

    // Create adapters (Dependency Injection)
    let package_reader = NupkgArchiveReader::new();
    let diagram_renderer = MermaidCliRenderer::new(config.visualizer_path.clone());
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        VisualizeDependenciesUseCase::new(package_reader, diagram_renderer, progress_reporter);

    let request = VisualizeRequest::new(
        args.package_path,
        config.output_path,
        config.package_name,
        config.graph_style,
    );

    use_case.execute(request)?;

    Ok(())
}
