//! Core geometry for the spinning globe sample
//!
//! Procedural UV sphere mesh generation with no GPU dependencies. The
//! generator runs once at startup; the rendering crates consume its output
//! as-is.

pub mod constants;
pub mod sphere;

pub use sphere::{SphereMesh, SphereParams, SphereParamsError};
