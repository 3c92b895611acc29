//! The subset of the GL API used to build programs and set uniforms.
//!
//! Method names and signatures follow [`glow::HasContext`] so that the
//! implementation for [`glow::Context`] is plain forwarding.

use glow::HasContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum passed to `glCreateShader`.
    pub fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// GL entry points needed by [`crate::shader`].
///
/// # Safety
///
/// Every method issues a raw GL call and requires a current context on the
/// calling thread.
pub trait ShaderApi {
    type Shader: Copy + std::fmt::Debug;
    type Program: Copy + std::fmt::Debug;
    type UniformLocation: Clone;

    unsafe fn create_shader(&self, kind: u32) -> Result<Self::Shader, String>;
    unsafe fn shader_source(&self, shader: Self::Shader, source: &str);
    unsafe fn compile_shader(&self, shader: Self::Shader);
    unsafe fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    unsafe fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    unsafe fn delete_shader(&self, shader: Self::Shader);

    unsafe fn create_program(&self) -> Result<Self::Program, String>;
    unsafe fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    unsafe fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    unsafe fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str);
    unsafe fn link_program(&self, program: Self::Program);
    unsafe fn get_program_link_status(&self, program: Self::Program) -> bool;
    unsafe fn get_program_info_log(&self, program: Self::Program) -> String;
    unsafe fn validate_program(&self, program: Self::Program);
    unsafe fn get_program_validate_status(&self, program: Self::Program) -> bool;
    unsafe fn delete_program(&self, program: Self::Program);
    unsafe fn use_program(&self, program: Option<Self::Program>);

    unsafe fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    unsafe fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32);
    unsafe fn uniform_1_f32(&self, location: Option<&Self::UniformLocation>, x: f32);
    unsafe fn uniform_4_f32(
        &self,
        location: Option<&Self::UniformLocation>,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    );
}

impl ShaderApi for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    unsafe fn create_shader(&self, kind: u32) -> Result<Self::Shader, String> {
        HasContext::create_shader(self, kind)
    }

    unsafe fn shader_source(&self, shader: Self::Shader, source: &str) {
        HasContext::shader_source(self, shader, source)
    }

    unsafe fn compile_shader(&self, shader: Self::Shader) {
        HasContext::compile_shader(self, shader)
    }

    unsafe fn get_shader_compile_status(&self, shader: Self::Shader) -> bool {
        HasContext::get_shader_compile_status(self, shader)
    }

    unsafe fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        HasContext::get_shader_info_log(self, shader)
    }

    unsafe fn delete_shader(&self, shader: Self::Shader) {
        HasContext::delete_shader(self, shader)
    }

    unsafe fn create_program(&self) -> Result<Self::Program, String> {
        HasContext::create_program(self)
    }

    unsafe fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        HasContext::attach_shader(self, program, shader)
    }

    unsafe fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        HasContext::detach_shader(self, program, shader)
    }

    unsafe fn bind_attrib_location(&self, program: Self::Program, index: u32, name: &str) {
        HasContext::bind_attrib_location(self, program, index, name)
    }

    unsafe fn link_program(&self, program: Self::Program) {
        HasContext::link_program(self, program)
    }

    unsafe fn get_program_link_status(&self, program: Self::Program) -> bool {
        HasContext::get_program_link_status(self, program)
    }

    unsafe fn get_program_info_log(&self, program: Self::Program) -> String {
        HasContext::get_program_info_log(self, program)
    }

    unsafe fn validate_program(&self, program: Self::Program) {
        HasContext::validate_program(self, program)
    }

    unsafe fn get_program_validate_status(&self, program: Self::Program) -> bool {
        HasContext::get_program_validate_status(self, program)
    }

    unsafe fn delete_program(&self, program: Self::Program) {
        HasContext::delete_program(self, program)
    }

    unsafe fn use_program(&self, program: Option<Self::Program>) {
        HasContext::use_program(self, program)
    }

    unsafe fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        HasContext::get_uniform_location(self, program, name)
    }

    unsafe fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32) {
        HasContext::uniform_1_i32(self, location, x)
    }

    unsafe fn uniform_1_f32(&self, location: Option<&Self::UniformLocation>, x: f32) {
        HasContext::uniform_1_f32(self, location, x)
    }

    unsafe fn uniform_4_f32(
        &self,
        location: Option<&Self::UniformLocation>,
        x: f32,
        y: f32,
        z: f32,
        w: f32,
    ) {
        HasContext::uniform_4_f32(self, location, x, y, z, w)
    }
}
