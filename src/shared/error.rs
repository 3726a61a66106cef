use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The diagram was rendered
    Success = 0,
    /// Application error (archive, manifest, config, renderer, file I/O)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency graph visualization.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("No .nuspec manifest found in package: {path}\n\n💡 Hint: Please verify that the file is a NuGet package (.nupkg)")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to read package archive: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid zip archive")]
    ArchiveReadError { path: PathBuf, details: String },

    #[error("Failed to parse manifest: {entry}\nDetails: {details}\n\n💡 Hint: Please verify that the .nuspec file is well-formed XML")]
    ManifestParseError { entry: String, details: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is a valid INI file")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Missing config key '{key}' in section [{section}]: {path}\n\n💡 Hint: The [main] section must define PackageName, OutputPath and VisualizerPath")]
    MissingConfigKey {
        path: PathBuf,
        section: String,
        key: String,
    },

    #[error("Invalid value for config key '{key}': \"{value}\"\nReason: {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Invalid package path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing .nupkg file")]
    InvalidPackagePath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to launch renderer: {program}\nDetails: {details}\n\n💡 Hint: Check VisualizerPath in the config file (e.g. the path to mmdc)")]
    RendererLaunchFailed { program: PathBuf, details: String },

    #[error("Renderer exited unsuccessfully: {program} ({status})\n\n💡 Hint: Run the renderer by hand on the graph to see its diagnostics")]
    RendererInvocationFailed { program: PathBuf, status: ExitStatus },
}
