//! Global constants for globe-core

/// Default sphere radius
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Default number of longitude slices for sphere mesh generation
pub const DEFAULT_SLICES: u32 = 64;

/// Default number of latitude stacks for sphere mesh generation
pub const DEFAULT_STACKS: u32 = 32;

/// Minimum longitude slices that still close the surface
pub const MIN_SLICES: u32 = 3;

/// Minimum latitude stacks that still close the surface
pub const MIN_STACKS: u32 = 2;
