/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world (manifest files,
/// console, output files) through these traits.
pub mod outbound;
