//! Shared infrastructure for the deposit CLI binary.

pub mod logging;
