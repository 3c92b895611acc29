//! Splits a single shader file into its vertex and fragment stages.
//!
//! A line containing `#shader` switches the active stage to `vertex` or
//! `fragment` (substring match, `vertex` checked first). Every other line
//! is copied with a trailing newline into the active stage. Lines before
//! the first directive belong to no stage and are dropped.
//!
//! ```text
//! #shader vertex
//! #version 330 core
//! void main() { ... }
//!
//! #shader fragment
//! #version 330 core
//! void main() { ... }
//! ```

use std::path::Path;

use crate::error::ShaderError;
use crate::shader_api::ShaderStage;

const DIRECTIVE: &str = "#shader";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn parse(text: &str) -> Self {
        let mut source = ShaderSource::default();
        let mut stage: Option<ShaderStage> = None;
        for line in text.split_terminator('\n') {
            if line.contains(DIRECTIVE) {
                if line.contains("vertex") {
                    stage = Some(ShaderStage::Vertex);
                } else if line.contains("fragment") {
                    stage = Some(ShaderStage::Fragment);
                }
                continue;
            }
            let dst = match stage {
                Some(ShaderStage::Vertex) => &mut source.vertex,
                Some(ShaderStage::Fragment) => &mut source.fragment,
                None => continue,
            };
            dst.push_str(line);
            dst.push('\n');
        }
        source
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// True when neither stage received any line.
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }
}
