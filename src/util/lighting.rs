use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;
use crate::util::color::srgb_to_linear;

/// Lighting and fog configuration shared by the scene shaders.
/// NOTE: Must match the WGSL struct layout exactly (160 bytes)
///
/// WGSL layout (auto-padded):
///   ambient_color: vec3<f32>   (offset 0,   align 16)
///   ambient_intensity: f32     (offset 12)
///   sun_dir: vec3<f32>         (offset 16,  align 16)
///   sun_intensity: f32         (offset 28)
///   sun_color: vec3<f32>       (offset 32,  align 16)
///   _pad0: f32                 (offset 44)
///   moon_pos: vec3<f32>        (offset 48,  align 16)
///   moon_intensity: f32        (offset 60)
///   moon_color: vec3<f32>      (offset 64,  align 16)
///   moon_range: f32            (offset 76)
///   spot_pos: vec3<f32>        (offset 80,  align 16)
///   spot_intensity: f32        (offset 92)
///   spot_dir: vec3<f32>        (offset 96,  align 16)
///   spot_range: f32            (offset 108)
///   spot_color: vec3<f32>      (offset 112, align 16)
///   spot_cos_inner: f32        (offset 124)
///   fog_color: vec3<f32>       (offset 128, align 16)
///   fog_density: f32           (offset 140)
///   spot_cos_outer: f32        (offset 144)
///   spot_decay: f32            (offset 148)
///   _pad1: f32                 (offset 152)
///   _pad2: f32                 (offset 156)
///   Total: 160 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Ambient light color (linear).
    pub ambient_color: [f32; 3],
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Key light direction (normalized, pointing from light toward scene).
    pub sun_dir: [f32; 3],
    /// Key light intensity.
    pub sun_intensity: f32,
    /// Key light color (linear).
    pub sun_color: [f32; 3],
    pub(crate) _pad0: f32,
    /// Moon point-light position.
    pub moon_pos: [f32; 3],
    /// Moon light intensity.
    pub moon_intensity: f32,
    /// Moon light color (linear).
    pub moon_color: [f32; 3],
    /// Moon light range (zero intensity beyond it).
    pub moon_range: f32,
    /// Spot light position.
    pub spot_pos: [f32; 3],
    /// Spot light intensity.
    pub spot_intensity: f32,
    /// Spot light direction (normalized).
    pub spot_dir: [f32; 3],
    /// Spot light range.
    pub spot_range: f32,
    /// Spot light color (linear).
    pub spot_color: [f32; 3],
    /// Cosine of the inner (full-brightness) cone angle.
    pub spot_cos_inner: f32,
    /// Fog color (linear, also the clear color).
    pub fog_color: [f32; 3],
    /// Exponential-squared fog density.
    pub fog_density: f32,
    /// Cosine of the outer (zero-brightness) cone angle.
    pub spot_cos_outer: f32,
    /// Distance falloff exponent for the spot light.
    pub spot_decay: f32,
    pub(crate) _pad1: f32,
    pub(crate) _pad2: f32,
}

impl LightingUniform {
    /// Pack the night rig options into the GPU layout, linearizing colors
    /// and deriving directions from the authored positions/targets.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let sun_dir = -Vec3::from_array(options.sun_position).normalize();
        let spot_dir = (Vec3::from_array(options.spot_target)
            - Vec3::from_array(options.spot_position))
        .normalize();
        // Penumbra softens the cone from the edge inward
        let cos_outer = options.spot_angle.cos();
        let cos_inner = (options.spot_angle * (1.0 - options.spot_penumbra)).cos();

        Self {
            ambient_color: srgb_to_linear(options.ambient_color),
            ambient_intensity: options.ambient_intensity,
            sun_dir: sun_dir.to_array(),
            sun_intensity: options.sun_intensity,
            sun_color: srgb_to_linear(options.sun_color),
            _pad0: 0.0,
            moon_pos: options.moon_position,
            moon_intensity: options.moon_intensity,
            moon_color: srgb_to_linear(options.moon_color),
            moon_range: options.moon_range,
            spot_pos: options.spot_position,
            spot_intensity: options.spot_intensity,
            spot_dir: spot_dir.to_array(),
            spot_range: options.spot_range,
            spot_color: srgb_to_linear(options.spot_color),
            spot_cos_inner: cos_inner,
            fog_color: srgb_to_linear(options.fog_color),
            fog_density: options.fog_density,
            spot_cos_outer: cos_outer,
            spot_decay: options.spot_decay,
            _pad1: 0.0,
            _pad2: 0.0,
        }
    }
}

/// GPU-side lighting resources: uniform buffer, layout, and bind group.
pub struct Lighting {
    /// CPU copy of the uniform contents.
    pub uniform: LightingUniform,
    /// Uniform buffer holding [`LightingUniform`].
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the mesh pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group over [`buffer`](Self::buffer).
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Allocate the uniform buffer and bind group from the given options.
    #[must_use]
    pub fn new(context: &RenderContext, options: &LightingOptions) -> Self {
        let uniform = LightingUniform::from_options(options);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Lighting Bind Group"),
            });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Re-upload the uniform after an options change.
    pub fn update_gpu(&self, queue: &wgpu::Queue) {
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_matches_wgsl_size() {
        assert_eq!(size_of::<LightingUniform>(), 160);
    }

    #[test]
    fn directions_are_normalized() {
        let u = LightingUniform::from_options(&LightingOptions::default());
        let sun = Vec3::from_array(u.sun_dir);
        let spot = Vec3::from_array(u.spot_dir);
        assert!((sun.length() - 1.0).abs() < 1e-5);
        assert!((spot.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sun_shines_toward_origin() {
        let u = LightingUniform::from_options(&LightingOptions::default());
        // Light sits high at +y, so its direction points down
        assert!(u.sun_dir[1] < 0.0);
    }

    #[test]
    fn spot_cone_edges_are_ordered() {
        let u = LightingUniform::from_options(&LightingOptions::default());
        // Inner cone is tighter, so its cosine is larger
        assert!(u.spot_cos_inner > u.spot_cos_outer);
    }
}
