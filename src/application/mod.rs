/// Application layer - Use cases and DTOs
///
/// Orchestrates the dependency resolution services and reaches
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
