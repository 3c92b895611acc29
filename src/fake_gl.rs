//! A recording stand-in for a GL context, used by the unit tests.

use std::cell::RefCell;

use crate::draw_api::DrawApi;
use crate::shader_api::ShaderApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    Attach(u32, u32),
    Detach(u32, u32),
    BindAttrib(u32, u32, String),
    Link(u32),
    Validate(u32),
    DeleteProgram(u32),
    UseProgram(Option<u32>),
    UniformLocation(u32, String),
    Uniform1i(Option<i32>, i32),
    Uniform1f(Option<i32>, f32),
    Uniform4f(Option<i32>, [f32; 4]),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData(u32, Vec<u8>),
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    EnableAttrib(u32),
    AttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    ClearColor([f32; 4]),
    Clear(u32),
    DrawElements {
        mode: u32,
        count: i32,
        element_type: u32,
        offset: i32,
    },
}

/// Compiles any source containing `void main`; knows the uniforms in
/// `uniforms` (location = index).
#[derive(Default)]
pub struct FakeGl {
    pub calls: RefCell<Vec<Call>>,
    pub uniforms: Vec<&'static str>,
    pub fail_link: bool,
    pub fail_validate: bool,
    next_id: RefCell<u32>,
    sources: RefCell<Vec<(u32, String)>>,
}

impl FakeGl {
    pub fn with_uniforms(uniforms: &[&'static str]) -> Self {
        FakeGl {
            uniforms: uniforms.to_vec(),
            ..Default::default()
        }
    }

    pub fn failing_link() -> Self {
        FakeGl {
            fail_link: true,
            ..Default::default()
        }
    }

    pub fn failing_validate() -> Self {
        FakeGl {
            fail_validate: true,
            ..Default::default()
        }
    }

    fn next(&self) -> u32 {
        let mut id = self.next_id.borrow_mut();
        *id += 1;
        *id
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl ShaderApi for FakeGl {
    type Shader = u32;
    type Program = u32;
    type UniformLocation = i32;

    unsafe fn create_shader(&self, kind: u32) -> Result<u32, String> {
        self.record(Call::CreateShader(kind));
        Ok(self.next())
    }

    unsafe fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().push((shader, source.to_string()));
    }

    unsafe fn compile_shader(&self, _shader: u32) {}

    unsafe fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .iter()
            .any(|(id, src)| *id == shader && src.contains("void main"))
    }

    unsafe fn get_shader_info_log(&self, shader: u32) -> String {
        format!("0:1: shader {shader}: syntax error")
    }

    unsafe fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    unsafe fn create_program(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    unsafe fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::Attach(program, shader));
    }

    unsafe fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::Detach(program, shader));
    }

    unsafe fn bind_attrib_location(&self, program: u32, index: u32, name: &str) {
        self.record(Call::BindAttrib(program, index, name.to_string()));
    }

    unsafe fn link_program(&self, program: u32) {
        self.record(Call::Link(program));
    }

    unsafe fn get_program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    unsafe fn get_program_info_log(&self, _program: u32) -> String {
        "link error: varying mismatch".to_string()
    }

    unsafe fn validate_program(&self, program: u32) {
        self.record(Call::Validate(program));
    }

    unsafe fn get_program_validate_status(&self, _program: u32) -> bool {
        !self.fail_validate
    }

    unsafe fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    unsafe fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    unsafe fn get_uniform_location(&self, program: u32, name: &str) -> Option<i32> {
        self.record(Call::UniformLocation(program, name.to_string()));
        self.uniforms
            .iter()
            .position(|u| *u == name)
            .map(|i| i as i32)
    }

    unsafe fn uniform_1_i32(&self, location: Option<&i32>, x: i32) {
        self.record(Call::Uniform1i(location.copied(), x));
    }

    unsafe fn uniform_1_f32(&self, location: Option<&i32>, x: f32) {
        self.record(Call::Uniform1f(location.copied(), x));
    }

    unsafe fn uniform_4_f32(&self, location: Option<&i32>, x: f32, y: f32, z: f32, w: f32) {
        self.record(Call::Uniform4f(location.copied(), [x, y, z, w]));
    }
}

impl DrawApi for FakeGl {
    type Buffer = u32;
    type VertexArray = u32;

    unsafe fn create_buffer(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    unsafe fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], _usage: u32) {
        self.record(Call::BufferData(target, data.to_vec()));
    }

    unsafe fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    unsafe fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.next();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    unsafe fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    unsafe fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableAttrib(index));
    }

    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(Call::AttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor([red, green, blue, alpha]));
    }

    unsafe fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    unsafe fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}
