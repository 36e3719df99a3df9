//! Backend-agnostic draw plans and the backends that execute them.

/// Backend trait and plan execution.
pub mod backend;
/// CPU raster backend.
pub mod cpu;
/// Draw operations and plans.
pub mod plan;
/// Operation-recording backend.
pub mod recording;
