//! Texture upload helpers.
//!
//! Scene textures come from three places: image files on disk (the tiling
//! ground textures), RGBA payloads decoded out of glTF documents, and 1x1
//! solid-color fallbacks for untextured materials or missing files.

use crate::error::DownpourError;
use crate::gpu::render_context::RenderContext;

/// Depth buffer format shared by every pipeline in the crate.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A sampled color texture with its view and sampler.
pub struct Texture {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    /// Sampler with repeat addressing (ground textures tile).
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Decode an image file and upload it as an sRGB texture.
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError::AssetLoad`] when the file cannot be read
    /// or decoded.
    pub fn from_file(
        context: &RenderContext,
        path: &str,
    ) -> Result<Self, DownpourError> {
        let bytes = std::fs::read(path)
            .map_err(|e| DownpourError::AssetLoad(format!("{path}: {e}")))?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| DownpourError::AssetLoad(format!("{path}: {e}")))?;
        let rgba = img.to_rgba8();
        Ok(Self::from_rgba(
            context,
            &rgba,
            rgba.width(),
            rgba.height(),
            path,
        ))
    }

    /// Upload raw RGBA8 pixels as an sRGB texture.
    #[must_use]
    pub fn from_rgba(
        context: &RenderContext,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        context.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
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

    /// 1x1 opaque white texture — the neutral base for materials that only
    /// carry a color factor.
    #[must_use]
    pub fn white(context: &RenderContext) -> Self {
        Self::from_rgba(context, &[255, 255, 255, 255], 1, 1, "White Texture")
    }
}

/// Convert a glTF image payload to tightly-packed RGBA8.
///
/// glTF buffers commonly ship RGB; everything else falls back to opaque
/// white so a bad payload degrades visibly rather than failing the load.
#[must_use]
pub fn gltf_pixels_to_rgba(data: &gltf::image::Data) -> Vec<u8> {
    match data.format {
        gltf::image::Format::R8G8B8 => {
            let mut rgba = Vec::with_capacity(data.pixels.len() / 3 * 4);
            for chunk in data.pixels.chunks(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(255);
            }
            rgba
        }
        gltf::image::Format::R8G8B8A8 => data.pixels.clone(),
        _ => vec![255; (data.width * data.height * 4) as usize],
    }
}

/// Depth attachment sized to the current surface.
pub struct DepthTexture {
    /// A default full-texture view for the depth attachment.
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    /// Create a depth texture matching the surface configuration.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let texture = context.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: context.config.width.max(1),
                height: context.config.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { view }
    }
}
