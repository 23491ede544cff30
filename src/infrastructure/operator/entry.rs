//! Operator entry point installed by the binary.

/// Infrastructure-backed implementation of every operator port.
///
/// Stateless: each call parses the configuration it is given and builds
/// what it needs through [`bootstrap`](crate::infrastructure::bootstrap).
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;
