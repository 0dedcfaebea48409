//! The rendering engine: owns the GPU context, the orbit camera, the
//! lighting rig, the staged scene, and the rain animator.

mod input;

use glam::Vec3;

use crate::camera::binding::CameraBinding;
use crate::camera::controller::OrbitController;
use crate::error::DownpourError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::options::Options;
use crate::rain::RainParticles;
use crate::renderer::mesh::MeshRenderer;
use crate::renderer::rain::RainRenderer;
use crate::scene::manifest::SceneManifest;
use crate::scene::Scene;
use crate::util::color::clear_color;
use crate::util::frame_timing::FrameTiming;
use crate::util::lighting::Lighting;

/// Target FPS limit. The rain velocity is authored per frame, so capping
/// the frame rate also pins the fall speed on high-refresh displays.
const TARGET_FPS: u32 = 60;

/// The core rendering engine for the night scene.
///
/// # Construction
///
/// Use [`SceneRenderEngine::new`] for the stock tableau or
/// [`SceneRenderEngine::new_with_scene`] to supply a manifest and options.
///
/// # Frame loop
///
/// Each frame, call [`render`](Self::render) to advance the rain one step,
/// draw, and present. Call [`resize`](Self::resize) when the window size
/// changes. Input is forwarded via [`handle_input`](Self::handle_input).
pub struct SceneRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Orbit camera state machine.
    pub camera: OrbitController,
    camera_binding: CameraBinding,
    /// GPU lighting uniform and bind group.
    pub lighting: Lighting,

    rain: RainParticles,
    rain_renderer: RainRenderer,
    mesh_renderer: MeshRenderer,
    depth: DepthTexture,

    options: Options,
    frame_timing: FrameTiming,
    background: wgpu::Color,
    last_cursor_x: f32,
}

impl SceneRenderEngine {
    /// Engine with the stock tableau and default options.
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError`] if GPU initialization fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, DownpourError> {
        Self::new_with_scene(window, size, &SceneManifest::default(), Options::default())
            .await
    }

    /// Engine with a specific manifest and options.
    ///
    /// Prop load failures are logged and skipped inside scene assembly;
    /// only GPU initialization can fail here.
    ///
    /// # Errors
    ///
    /// Returns [`DownpourError`] if GPU initialization fails.
    pub async fn new_with_scene(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        manifest: &SceneManifest,
        options: Options,
    ) -> Result<Self, DownpourError> {
        let context = RenderContext::new(window, size).await?;
        Ok(Self::init_with_context(context, manifest, options))
    }

    /// Shared construction once a GPU context exists.
    fn init_with_context(
        context: RenderContext,
        manifest: &SceneManifest,
        options: Options,
    ) -> Self {
        let aspect = context.config.width as f32 / context.config.height as f32;
        let camera = OrbitController::new(&options.camera, aspect);
        let camera_binding = CameraBinding::new(&context, &camera.camera);
        let lighting = Lighting::new(&context, &options.lighting);

        let scene = Scene::assemble(manifest);
        let mesh_renderer = MeshRenderer::new(
            &context,
            &camera_binding.layout,
            &lighting.layout,
            &scene,
        );
        log::debug!("uploaded {} scene meshes", mesh_renderer.mesh_count());

        let rain = RainParticles::new(&options.rain);
        let rain_renderer = RainRenderer::new(
            &context,
            &camera_binding.layout,
            &options.rain,
            rain.positions(),
        );

        let depth = DepthTexture::new(&context);
        let background = clear_color(options.lighting.fog_color);

        Self {
            context,
            camera,
            camera_binding,
            lighting,
            rain,
            rain_renderer,
            mesh_renderer,
            depth,
            options,
            frame_timing: FrameTiming::new(TARGET_FPS),
            background,
            last_cursor_x: 0.0,
        }
    }

    /// One frame tick: advance the rain buffer a step and re-upload the
    /// changed instance data. Called by [`render`](Self::render) once per
    /// presented frame.
    pub fn update(&mut self) {
        self.rain.step();
        self.rain_renderer
            .upload(&self.context.queue, self.rain.positions());
    }

    /// Execute one frame: animation tick, uniform upload, forward pass,
    /// rain pass, present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Check if we should render based on FPS limit
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        self.update();
        self.camera_binding
            .update_gpu(&self.context.queue, &self.camera.camera);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut rp = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.background),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: &self.depth.view,
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                ..Default::default()
            });

            self.mesh_renderer.draw(
                &mut rp,
                &self.camera_binding.bind_group,
                &self.lighting.bind_group,
            );
            self.rain_renderer
                .draw(&mut rp, &self.camera_binding.bind_group);
        }
        self.context.submit(encoder);

        frame.present();
        self.frame_timing.end_frame();

        Ok(())
    }

    /// Resize the surface, depth buffer, and camera projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera.resize(width, height);
            self.depth = DepthTexture::new(&self.context);
        }
    }

    /// Current camera eye position (the renderer-boundary accessor).
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera.position()
    }

    /// Read-only view of the rain particle buffer.
    #[must_use]
    pub fn rain_positions(&self) -> &[Vec3] {
        self.rain.positions()
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}
