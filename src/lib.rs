//! Thin wrappers around [glow] for drawing a textured, colored quad.
//!
//! Every wrapper stores only GL handles. The context is passed to each call
//! and each wrapper is released with an explicit `destroy` while that
//! context is still current.
//!
//! [glow]: https://docs.rs/glow

pub mod color_pulse;
pub mod draw_api;
pub mod error;
#[cfg(test)]
mod fake_gl;
pub mod index_buffer;
pub mod renderer;
pub mod shader;
pub mod shader_api;
pub mod shader_source;
pub mod texture;
pub mod uniform_cache;
pub mod vertex_array;
pub mod vertex_buffer;
pub mod vertex_buffer_layout;

pub use draw_api::DrawApi;
pub use error::{BufferError, ShaderError, TextureError};
pub use shader::Shader;
pub use shader_api::{ShaderApi, ShaderStage};
pub use shader_source::ShaderSource;
