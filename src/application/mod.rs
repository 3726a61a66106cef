/// Application layer - use cases and DTOs
///
/// Orchestrates the domain services through the outbound ports.
pub mod dto;
pub mod use_cases;
