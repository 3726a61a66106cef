/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to archives, processes and the console
/// through the outbound ports declared here.
pub mod outbound;
