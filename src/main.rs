//! Wavecrest - Gerstner wave water surface animation
//!
//! A stationary camera looks across a lattice of animated water. Every tick
//! rebuilds heights and normals on the CPU and streams them to the GPU as
//! triangle strips.

mod camera;
mod cli;
mod error;
mod params;
mod profile;
mod rendering;
mod surface;

use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera::Camera;
use cli::Args;
use params::{RecordingConfig, RenderConfig, WaveBank};
use rendering::{RenderSystem, Uniforms};
use surface::SurfaceSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    water: SurfaceSystem,
    camera: Camera,

    // Configuration
    render_config: RenderConfig,
    recording_config: Option<RecordingConfig>,

    // Frames rendered so far (drives recording shutdown)
    frame_num: usize,
}

impl App {
    fn new(water: SurfaceSystem, recording_config: Option<RecordingConfig>) -> Self {
        Self {
            window: None,
            render_system: None,
            water,
            camera: Camera::default(),
            render_config: RenderConfig::default(),
            recording_config,
            frame_num: 0,
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Wavecrest")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .expect("Failed to create window"),
        );

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.water.strips,
            self.recording_config.clone(),
        ))
        .expect("Failed to initialize rendering");

        // The camera never moves, so its uniforms upload once
        let (view_proj, eye) = self.camera.create_view_proj_matrix(&self.render_config);
        render_system.update_uniforms(&Uniforms::new(view_proj, eye));

        println!("\nWavecrest is running!");
        println!("Press ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }
}

impl App {
    /// Advance the simulation one tick and render the frame
    fn render_frame(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        self.water.advance();
        render_system.update_surface_buffers(&self.water.strips);

        // Only successfully presented frames count toward the recording
        if let Err(e) = render_system.render(self.frame_num) {
            eprintln!("Render error: {:?}", e);
            return;
        }

        if self.frame_rendered() {
            if let Some(ref config) = self.recording_config {
                println!(
                    "Recorded {} frames ({:.2}s of simulation) to {}",
                    self.frame_num,
                    self.water.time(),
                    config.frames_dir()
                );
            }
            event_loop.exit();
        }
    }

    /// Count one rendered frame. Returns true once the recording quota is
    /// met; an interactive session never completes.
    fn frame_rendered(&mut self) -> bool {
        self.frame_num += 1;
        match &self.recording_config {
            Some(config) => self.frame_num >= config.total_frames(),
            None => false,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Wavecrest - Gerstner wave water surface animation");

    let recording_config = args.create_recording_config();
    let water = match SurfaceSystem::new(args.surface_params(), WaveBank::default()) {
        Ok(water) => water,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "lattice {}x{} ({} strips of {} vertices), {} waves",
        water.params.strip_count,
        water.params.strip_length,
        water.strips.strip_count(),
        water.strips.strip_len(),
        water.bank.waves.len()
    );

    let mut app = App::new(water, recording_config);
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let _ = event_loop.run_app(&mut app);
}
