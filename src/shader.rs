//! Shader program built from a `#shader`-sectioned source file.

use std::path::{Path, PathBuf};

use crate::error::ShaderError;
use crate::shader_api::{ShaderApi, ShaderStage};
use crate::shader_source::ShaderSource;
use crate::uniform_cache::UniformCache;

/// Attribute bound to index 0 before linking.
pub const POSITION_ATTRIB: &str = "position";

fn compile_stage<G>(gl: &G, stage: ShaderStage, source: &str) -> Result<G::Shader, ShaderError>
where
    G: ShaderApi + ?Sized,
{
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(ShaderError::Create)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            log::error!("Failed to compile {stage} shader:\n{log}");
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }
        Ok(shader)
    }
}

/// Compile both stages and link them into a program.
///
/// The intermediate shader objects are deleted before returning, whether
/// the build succeeds or not. Only the returned program needs releasing.
/// A linked program that fails `glValidateProgram` is still returned.
pub fn build_program<G>(
    gl: &G,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<G::Program, ShaderError>
where
    G: ShaderApi + ?Sized,
{
    let vs = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
    let fs = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
        Ok(fs) => fs,
        Err(e) => {
            unsafe { gl.delete_shader(vs) };
            return Err(e);
        }
    };
    unsafe {
        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vs);
                gl.delete_shader(fs);
                return Err(ShaderError::Create(e));
            }
        };
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.bind_attrib_location(program, 0, POSITION_ATTRIB);
        gl.link_program(program);
        let linked = gl.get_program_link_status(program);
        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);
        gl.delete_shader(vs);
        gl.delete_shader(fs);
        if !linked {
            let log = gl.get_program_info_log(program);
            log::error!("Failed to link shader program:\n{log}");
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }
        // result depends on the GL state at build time, so only warn
        gl.validate_program(program);
        if !gl.get_program_validate_status(program) {
            let log = gl.get_program_info_log(program);
            log::warn!("Shader program {program:?} failed validation:\n{log}");
        }
        Ok(program)
    }
}

pub struct Shader<G: ShaderApi + ?Sized = glow::Context> {
    path: Option<PathBuf>,
    program: G::Program,
    uniforms: UniformCache<G::UniformLocation>,
}

impl<G: ShaderApi + ?Sized> Shader<G> {
    pub fn from_file(gl: &G, path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let source = ShaderSource::from_file(path)?;
        if source.is_empty() {
            return Err(ShaderError::EmptySource {
                path: path.to_path_buf(),
            });
        }
        let mut shader = Self::from_source(gl, &source)?;
        shader.path = Some(path.to_path_buf());
        log::info!("shader program {:?} built from {}", shader.program, path.display());
        Ok(shader)
    }

    pub fn from_source(gl: &G, source: &ShaderSource) -> Result<Self, ShaderError> {
        let program = build_program(gl, &source.vertex, &source.fragment)?;
        Ok(Shader {
            path: None,
            program,
            uniforms: UniformCache::new(),
        })
    }

    pub fn program(&self) -> G::Program {
        self.program
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn bind(&self, gl: &G) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    pub fn unbind(&self, gl: &G) {
        unsafe { gl.use_program(None) };
    }

    /// Location of `name`, querying the driver only on the first lookup.
    pub fn uniform_location(&mut self, gl: &G, name: &str) -> Option<G::UniformLocation> {
        let program = self.program;
        self.uniforms
            .get_or_query(name, |name| unsafe { gl.get_uniform_location(program, name) })
    }

    // the setters act on the currently bound program
    pub fn set_uniform_1i(&mut self, gl: &G, name: &str, value: i32) {
        let loc = self.uniform_location(gl, name);
        unsafe { gl.uniform_1_i32(loc.as_ref(), value) };
    }

    pub fn set_uniform_1f(&mut self, gl: &G, name: &str, value: f32) {
        let loc = self.uniform_location(gl, name);
        unsafe { gl.uniform_1_f32(loc.as_ref(), value) };
    }

    pub fn set_uniform_4f(&mut self, gl: &G, name: &str, v: [f32; 4]) {
        let loc = self.uniform_location(gl, name);
        unsafe { gl.uniform_4_f32(loc.as_ref(), v[0], v[1], v[2], v[3]) };
    }

    pub fn destroy(&self, gl: &G) {
        unsafe { gl.delete_program(self.program) };
    }
}
