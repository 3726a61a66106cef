use clap::Parser;
use std::path::PathBuf;

/// Render the dependency graph of a NuGet package as a Mermaid diagram
#[derive(Parser, Debug)]
#[command(name = "nuspec-graph")]
#[command(version)]
#[command(about = "Render the dependency graph of a NuGet package as a Mermaid diagram", long_about = None)]
pub struct Args {
    /// Path to the INI config file ([main] PackageName, OutputPath, VisualizerPath)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Path to the package to analyze (.nupkg)
    #[arg(value_name = "PACKAGE_PATH")]
    pub package_path: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
