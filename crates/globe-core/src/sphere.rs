//! UV sphere mesh generation

use std::f32::consts::{PI, TAU};

use crate::constants::{DEFAULT_RADIUS, DEFAULT_SLICES, DEFAULT_STACKS, MIN_SLICES, MIN_STACKS};

/// Sphere parameter validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SphereParamsError {
    /// Radius was zero, negative, or not finite
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    /// Fewer longitude slices than the surface needs
    #[error("slices must be at least {min}, got {0}", min = MIN_SLICES)]
    TooFewSlices(u32),
    /// Fewer latitude stacks than the surface needs
    #[error("stacks must be at least {min}, got {0}", min = MIN_STACKS)]
    TooFewStacks(u32),
}

/// Subdivision parameters for [`SphereMesh::generate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    /// Sphere radius
    pub radius: f32,
    /// Number of longitude slices around the equator
    pub slices: u32,
    /// Number of latitude stacks from pole to pole
    pub stacks: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            slices: DEFAULT_SLICES,
            stacks: DEFAULT_STACKS,
        }
    }
}

impl SphereParams {
    /// Create validated parameters
    ///
    /// # Arguments
    /// * `radius` - Sphere radius, must be positive and finite
    /// * `slices` - Longitude subdivisions, at least [`MIN_SLICES`]
    /// * `stacks` - Latitude subdivisions, at least [`MIN_STACKS`]
    pub fn new(radius: f32, slices: u32, stacks: u32) -> Result<Self, SphereParamsError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SphereParamsError::InvalidRadius(radius));
        }
        if slices < MIN_SLICES {
            return Err(SphereParamsError::TooFewSlices(slices));
        }
        if stacks < MIN_STACKS {
            return Err(SphereParamsError::TooFewStacks(stacks));
        }
        Ok(Self {
            radius,
            slices,
            stacks,
        })
    }

    /// Number of vertices the latitude/longitude grid produces
    pub fn vertex_count(&self) -> usize {
        (self.slices as usize + 1) * (self.stacks as usize + 1)
    }

    /// Number of triangles the grid produces (two per cell)
    pub fn triangle_count(&self) -> usize {
        self.slices as usize * self.stacks as usize * 2
    }
}

/// A UV sphere mesh as parallel attribute arrays
///
/// `positions`, `normals` and `texcoords` hold one entry per grid vertex in
/// row-major order, latitude row by latitude row starting at the +y pole.
/// `triangles` holds index triples, two per grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereMesh {
    /// Vertex positions scaled by the radius
    pub positions: Vec<[f32; 3]>,
    /// Unit vertex normals
    pub normals: Vec<[f32; 3]>,
    /// Equirectangular texture coordinates in [0, 1]
    pub texcoords: Vec<[f32; 2]>,
    /// Triangle vertex indices into the attribute arrays
    pub triangles: Vec<[u32; 3]>,
}

impl SphereMesh {
    /// Generate a UV sphere mesh
    ///
    /// The grid has `stacks + 1` latitude rows of `slices + 1` vertices each.
    /// Rows 0 and `stacks` collapse to the poles, and the last column repeats
    /// the first at the seam; both duplications exist so every vertex carries
    /// its own texture coordinate. Azimuth is traversed with a negative step,
    /// which makes triangle fronts counter-clockwise seen from outside.
    ///
    /// Parameters below the [`SphereParams::new`] minimums violate the
    /// precondition; the generator itself does not validate.
    pub fn generate(params: &SphereParams) -> Self {
        let SphereParams {
            radius,
            slices,
            stacks,
        } = *params;

        let mut positions = Vec::with_capacity(params.vertex_count());
        let mut normals = Vec::with_capacity(params.vertex_count());
        let mut texcoords = Vec::with_capacity(params.vertex_count());

        for j in 0..=stacks {
            let t = j as f32 / stacks as f32;
            let ph = PI * t;
            let y = ph.cos();
            let ring = ph.sin();

            for i in 0..=slices {
                let s = i as f32 / slices as f32;
                let th = -TAU * s;
                let x = ring * th.cos();
                let z = ring * th.sin();

                positions.push([x * radius, y * radius, z * radius]);
                normals.push([x, y, z]);
                texcoords.push([s, t]);
            }
        }

        let mut triangles = Vec::with_capacity(params.triangle_count());
        for j in 0..stacks {
            for i in 0..slices {
                let base = (slices + 1) * j + i;

                // Upper-right and lower-left triangle of the cell
                triangles.push([base, base + slices + 2, base + 1]);
                triangles.push([base, base + slices + 1, base + slices + 2]);
            }
        }

        Self {
            positions,
            normals,
            texcoords,
            triangles,
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of indices for an indexed draw over the full triangle list
    pub fn index_count(&self) -> u32 {
        (self.triangles.len() * 3) as u32
    }
}
