//! Forward pass for the static scene: one draw per staged mesh with a
//! per-mesh uniform (model matrix, base color, unlit flag) and base color
//! texture. Lambert lighting and exponential fog happen in
//! `scene_mesh.wgsl`.

use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{Texture, DEPTH_FORMAT};
use crate::scene::{Scene, StagedMesh, TextureSource};
use wgpu::util::DeviceExt;

/// Vertex for scene meshes.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshVertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

/// Per-mesh shader data.
/// NOTE: Must match the WGSL struct layout exactly (96 bytes)
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshUniform {
    /// Model (object-to-world) matrix.
    model: [[f32; 4]; 4],
    /// RGBA base color factor.
    base_color: [f32; 4],
    /// 1.0 skips the lighting rig (fog still applies).
    unlit: f32,
    _pad: [f32; 3],
}

/// One uploaded mesh with its bind group.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    bind_group: wgpu::BindGroup,
    // Kept alive alongside the bind group that samples it
    _texture: Option<Texture>,
}

/// Renderer over every staged scene mesh. Static after construction —
/// only the camera and lighting uniforms change per frame.
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    mesh_layout: wgpu::BindGroupLayout,
    fallback: Texture,
    meshes: Vec<GpuMesh>,
}

impl MeshRenderer {
    /// Upload the assembled scene and build the forward pipeline.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        scene: &Scene,
    ) -> Self {
        let mesh_layout = Self::create_mesh_layout(context);
        let pipeline =
            Self::create_pipeline(context, camera_layout, lighting_layout, &mesh_layout);
        let fallback = Texture::white(context);

        let mut renderer = Self {
            pipeline,
            mesh_layout,
            fallback,
            meshes: Vec::with_capacity(scene.meshes.len()),
        };
        for staged in &scene.meshes {
            renderer.upload_mesh(context, staged);
        }
        renderer
    }

    /// Interleave, upload, and bind one staged mesh.
    fn upload_mesh(&mut self, context: &RenderContext, staged: &StagedMesh) {
        let vertices: Vec<MeshVertex> = staged
            .mesh
            .positions
            .iter()
            .zip(&staged.mesh.normals)
            .zip(&staged.mesh.uvs)
            .map(|((position, normal), uv)| MeshVertex {
                position: *position,
                normal: *normal,
                uv: *uv,
            })
            .collect();

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertex Buffer", staged.name)),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Index Buffer", staged.name)),
                contents: bytemuck::cast_slice(&staged.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let uniform = MeshUniform {
            model: staged.transform.to_cols_array_2d(),
            base_color: staged.material.base_color,
            unlit: if staged.material.unlit { 1.0 } else { 0.0 },
            _pad: [0.0; 3],
        };
        let uniform_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Uniform Buffer", staged.name)),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        // Resolve the material texture; a missing file degrades to the
        // white fallback so the mesh still draws with its color factor.
        let texture = match &staged.material.texture {
            Some(TextureSource::File(path)) => match Texture::from_file(context, path) {
                Ok(t) => Some(t),
                Err(e) => {
                    log::error!("{}: {e}; using flat color", staged.name);
                    None
                }
            },
            Some(TextureSource::Rgba {
                pixels,
                width,
                height,
            }) => Some(Texture::from_rgba(
                context,
                pixels,
                *width,
                *height,
                &staged.name,
            )),
            None => None,
        };

        let (view, sampler) = texture.as_ref().map_or(
            (&self.fallback.view, &self.fallback.sampler),
            |t| (&t.view, &t.sampler),
        );

        let bind_group = context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &self.mesh_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
                label: Some(&format!("{} Bind Group", staged.name)),
            });

        self.meshes.push(GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: staged.mesh.indices.len() as u32,
            bind_group,
            _texture: texture,
        });
    }

    fn create_mesh_layout(context: &RenderContext) -> wgpu::BindGroupLayout {
        context
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Mesh Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX
                            | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float {
                                filterable: true,
                            },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(
                            wgpu::SamplerBindingType::Filtering,
                        ),
                        count: None,
                    },
                ],
            })
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
        mesh_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context
            .device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/scene_mesh.wgsl"));

        let pipeline_layout =
            context
                .device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("Mesh Pipeline Layout"),
                    bind_group_layouts: &[camera_layout, lighting_layout, mesh_layout],
                    push_constant_ranges: &[],
                });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0, // position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1, // normal
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 24,
                    shader_location: 2, // uv
                },
            ],
        };

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Mesh Render Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_layout],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Number of meshes that made it onto the GPU.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Record one draw per mesh into the given pass.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
        lighting_bind_group: &'a wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, lighting_bind_group, &[]);
        for mesh in &self.meshes {
            render_pass.set_bind_group(2, &mesh.bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass
                .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
