/// Graph generation domain layer
///
/// Pure business logic for turning a `.nuspec` manifest into a Mermaid graph.
/// Nothing in this layer touches the file system or spawns processes.
pub mod domain;
pub mod services;
