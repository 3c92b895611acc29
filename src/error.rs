use std::path::PathBuf;

use crate::shader_api::ShaderStage;

#[derive(thiserror::Error, Debug)]
pub enum ShaderError {
    #[error("could not open shader file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader file {} has no `#shader vertex` or `#shader fragment` section", .path.display())]
    EmptySource { path: PathBuf },
    #[error("failed to create GL object: {0}")]
    Create(String),
    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program:\n{log}")]
    Link { log: String },
}

#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("could not load texture {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture is too large to upload: {0}x{1}")]
    Size(u32, u32),
    #[error("failed to create GL texture: {0}")]
    Create(String),
}

/// Failure to allocate a buffer or vertex array object.
#[derive(thiserror::Error, Debug)]
#[error("failed to create GL {kind}: {message}")]
pub struct BufferError {
    pub kind: &'static str,
    pub message: String,
}
