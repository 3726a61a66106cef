/// Use cases - application business logic
mod visualize_dependencies;

pub use visualize_dependencies::VisualizeDependenciesUseCase;
