//! Sphere surface texture

use std::path::Path;

use wgpu::util::DeviceExt;

/// Texture loading errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TextureError {
    /// Reading the image file failed
    #[error("IO error: {0}")]
    Io(String),
    /// The file contents could not be decoded as an image
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Side length of the built-in checkerboard texture in pixels
const CHECKER_SIZE: u32 = 256;
/// Checker cell size in pixels
const CHECKER_CELL: u32 = 32;
/// Even cell color (light gray)
const CHECKER_LIGHT: [u8; 4] = [221, 221, 221, 255];
/// Odd cell color (ocean blue)
const CHECKER_DARK: [u8; 4] = [48, 99, 158, 255];

/// GPU texture with view and sampler for the sphere surface
pub struct SphereTexture {
    /// The texture resource
    pub texture: wgpu::Texture,
    /// View over the whole texture
    pub view: wgpu::TextureView,
    /// Linear clamp-to-edge sampler
    pub sampler: wgpu::Sampler,
}

impl SphereTexture {
    /// Load a texture from an image file (PNG or JPEG)
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(io) => TextureError::Io(io.to_string()),
            other => TextureError::Decode(other.to_string()),
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!("Loaded texture {}: {}x{}", path.display(), width, height);

        Ok(Self::from_rgba8(device, queue, width, height, rgba.as_raw()))
    }

    /// Create the built-in checkerboard used when no image file is given
    pub fn checkerboard(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let pixels = checkerboard_pixels(CHECKER_SIZE, CHECKER_SIZE);
        Self::from_rgba8(device, queue, CHECKER_SIZE, CHECKER_SIZE, &pixels)
    }

    /// Upload raw RGBA8 pixels as an sRGB texture
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("Sphere Color Texture"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            pixels,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Sphere Color Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Generate RGBA8 checkerboard pixels, row-major from the top-left
fn checkerboard_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let even = ((x / CHECKER_CELL) + (y / CHECKER_CELL)) % 2 == 0;
            let color = if even { CHECKER_LIGHT } else { CHECKER_DARK };
            pixels.extend_from_slice(&color);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * width + x) * 4) as usize;
        [
            pixels[offset],
            pixels[offset + 1],
            pixels[offset + 2],
            pixels[offset + 3],
        ]
    }

    #[test]
    fn test_checkerboard_pixel_count() {
        let pixels = checkerboard_pixels(CHECKER_SIZE, CHECKER_SIZE);
        assert_eq!(pixels.len(), (CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    }

    #[test]
    fn test_checkerboard_alternates_per_cell() {
        let pixels = checkerboard_pixels(CHECKER_SIZE, CHECKER_SIZE);
        assert_eq!(pixel(&pixels, CHECKER_SIZE, 0, 0), CHECKER_LIGHT);
        assert_eq!(pixel(&pixels, CHECKER_SIZE, CHECKER_CELL, 0), CHECKER_DARK);
        assert_eq!(pixel(&pixels, CHECKER_SIZE, 0, CHECKER_CELL), CHECKER_DARK);
        assert_eq!(
            pixel(&pixels, CHECKER_SIZE, CHECKER_CELL, CHECKER_CELL),
            CHECKER_LIGHT
        );
    }

    #[test]
    fn test_checkerboard_is_uniform_within_a_cell() {
        let pixels = checkerboard_pixels(CHECKER_SIZE, CHECKER_SIZE);
        let first = pixel(&pixels, CHECKER_SIZE, 0, 0);
        for y in 0..CHECKER_CELL {
            for x in 0..CHECKER_CELL {
                assert_eq!(pixel(&pixels, CHECKER_SIZE, x, y), first);
            }
        }
    }

    #[test]
    fn test_every_pixel_is_opaque() {
        let pixels = checkerboard_pixels(64, 64);
        for alpha in pixels.chunks(4).map(|p| p[3]) {
            assert_eq!(alpha, 255);
        }
    }
}
