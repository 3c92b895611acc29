#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's an example
#![allow(unsafe_code)]
#![allow(clippy::undocumented_unsafe_blocks)]

//! Draws a textured quad whose red channel pulses every frame.
//!
//! Run with `cargo run --example 01_quad [path/to/texture.png]`. Without a
//! path a checkerboard is uploaded instead.

use eframe::{egui, egui_glow, glow};

use egui::mutex::Mutex;
use glow::HasContext;
use quad_glow::color_pulse::ColorPulse;
use quad_glow::index_buffer::IndexBuffer;
use quad_glow::renderer::Renderer;
use quad_glow::texture::{self, Texture};
use quad_glow::vertex_array::VertexArray;
use quad_glow::vertex_buffer::VertexBuffer;
use quad_glow::vertex_buffer_layout::VertexBufferLayout;
use quad_glow::Shader;
use std::sync::Arc;

const SHADER_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/res/shaders/basic.shader");

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let texture_path = std::env::args().nth(1);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 480.0]),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };
    eframe::run_native(
        "LETSGOSKI",
        options,
        Box::new(move |cc| Ok(Box::new(MyApp::new(cc, texture_path.as_deref())?))),
    )
}

/// Every GL object the quad needs.
struct Quad {
    va: VertexArray,
    vb: VertexBuffer,
    ib: IndexBuffer,
    shader: Shader,
    texture: Texture,
    renderer: Renderer,
}

impl Quad {
    fn new(gl: &glow::Context, texture_path: Option<&str>) -> Result<Self, BoxError> {
        // x, y, u, v
        #[rustfmt::skip]
        let vtx2xyuv: [f32; 16] = [
            -0.5, -0.5, 0.0, 0.0,
             0.5, -0.5, 1.0, 0.0,
             0.5,  0.5, 1.0, 1.0,
            -0.5,  0.5, 0.0, 1.0,
        ];
        let tri2vtx: [u32; 6] = [0, 1, 2, 2, 3, 0];

        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }

        let va = VertexArray::new(gl)?;
        let vb = VertexBuffer::new(gl, &vtx2xyuv)?;
        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(2).push::<f32>(2);
        va.add_buffer(gl, &vb, &layout);
        let ib = IndexBuffer::new(gl, &tri2vtx)?;
        log::debug!(
            "quad: {} vertex bytes, {} indices",
            vb.size_in_bytes(),
            ib.count()
        );

        let mut shader = Shader::from_file(gl, SHADER_PATH)?;
        if let Some(path) = shader.path() {
            log::debug!("shader loaded from {}", path.display());
        }
        shader.bind(gl);
        shader.set_uniform_4f(gl, "u_Color", [0.8, 0.3, 0.8, 1.0]);

        let texture = match texture_path {
            Some(path) => Texture::from_path(gl, path)?,
            None => {
                let img = texture::checkerboard(256, 32, [255, 255, 255, 255], [40, 40, 40, 255]);
                Texture::from_image(gl, &img)?
            }
        };
        log::debug!(
            "texture {}x{} from {}",
            texture.width(),
            texture.height(),
            texture
                .path()
                .map_or("<checkerboard>".into(), |p| p.display().to_string())
        );
        texture.bind(gl, 0);
        shader.set_uniform_1i(gl, "u_Texture", 0);

        va.unbind(gl);
        shader.unbind(gl);
        vb.unbind(gl);
        ib.unbind(gl);

        Ok(Quad {
            va,
            vb,
            ib,
            shader,
            texture,
            renderer: Renderer::new(),
        })
    }

    fn paint(&mut self, gl: &glow::Context, red: f32) {
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }
        self.renderer.clear(gl);
        self.texture.bind(gl, 0);
        self.shader.bind(gl);
        self.shader
            .set_uniform_4f(gl, "u_Color", [red, 0.3, 0.8, 1.0]);
        self.renderer.draw(gl, &self.va, &self.ib, &self.shader);
    }

    fn destroy(&self, gl: &glow::Context) {
        self.texture.destroy(gl);
        self.shader.destroy(gl);
        self.ib.destroy(gl);
        self.vb.destroy(gl);
        self.va.destroy(gl);
    }
}

struct MyApp {
    /// Behind an `Arc<Mutex<…>>` so we can pass it to [`egui::PaintCallback`] and paint later.
    /// `None` once the GL objects have been released.
    quad: Arc<Mutex<Option<Quad>>>,
    pulse: ColorPulse,
}

impl MyApp {
    fn new(cc: &eframe::CreationContext<'_>, texture_path: Option<&str>) -> Result<Self, BoxError> {
        let gl = cc
            .gl
            .as_ref()
            .ok_or("eframe must run with the glow backend")?;
        log::info!("OpenGL version: {}", unsafe {
            gl.get_parameter_string(glow::VERSION)
        });
        let quad = Quad::new(gl, texture_path).inspect_err(|e| log::error!("{e}"))?;
        Ok(Self {
            quad: Arc::new(Mutex::new(Some(quad))),
            pulse: ColorPulse::default(),
        })
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                self.custom_painting(ui);
            });
        ctx.request_repaint();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let (Some(gl), Some(quad)) = (gl, self.quad.lock().take()) {
            quad.destroy(gl);
        }
    }
}

impl MyApp {
    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let red = self.pulse.value;
        self.pulse.advance();
        // Clone locals so we can move them into the paint callback:
        let quad = self.quad.clone();
        let callback = egui::PaintCallback {
            rect,
            callback: std::sync::Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                if let Some(quad) = quad.lock().as_mut() {
                    quad.paint(painter.gl(), red);
                }
            })),
        };
        ui.painter().add(callback);
    }
}
