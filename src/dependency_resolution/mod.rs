/// Dependency resolution core - identities, caches and reports
///
/// Pure in-memory logic with no I/O; the application layer feeds it
/// resolved artifacts and hands the reports to output adapters.
pub mod domain;
pub mod policies;
pub mod services;
