//! The subset of the GL API used by the buffer and vertex array wrappers
//! and by [`crate::renderer::Renderer`].
//!
//! Like [`crate::shader_api::ShaderApi`], names and signatures follow
//! [`glow::HasContext`].

use glow::HasContext;

/// GL entry points for buffers, vertex arrays, and draw calls.
///
/// # Safety
///
/// Every method issues a raw GL call and requires a current context on the
/// calling thread.
pub trait DrawApi {
    type Buffer: Copy + std::fmt::Debug;
    type VertexArray: Copy + std::fmt::Debug;

    unsafe fn create_buffer(&self) -> Result<Self::Buffer, String>;
    unsafe fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    unsafe fn delete_buffer(&self, buffer: Self::Buffer);

    unsafe fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    unsafe fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    unsafe fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    unsafe fn enable_vertex_attrib_array(&self, index: u32);
    unsafe fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}

impl DrawApi for glow::Context {
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;

    unsafe fn create_buffer(&self) -> Result<Self::Buffer, String> {
        HasContext::create_buffer(self)
    }

    unsafe fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        HasContext::bind_buffer(self, target, buffer)
    }

    unsafe fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        HasContext::buffer_data_u8_slice(self, target, data, usage)
    }

    unsafe fn delete_buffer(&self, buffer: Self::Buffer) {
        HasContext::delete_buffer(self, buffer)
    }

    unsafe fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        HasContext::create_vertex_array(self)
    }

    unsafe fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        HasContext::bind_vertex_array(self, vertex_array)
    }

    unsafe fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        HasContext::delete_vertex_array(self, vertex_array)
    }

    unsafe fn enable_vertex_attrib_array(&self, index: u32) {
        HasContext::enable_vertex_attrib_array(self, index)
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
        HasContext::vertex_attrib_pointer_f32(self, index, size, data_type, normalized, stride, offset)
    }

    unsafe fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        HasContext::clear_color(self, red, green, blue, alpha)
    }

    unsafe fn clear(&self, mask: u32) {
        HasContext::clear(self, mask)
    }

    unsafe fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        HasContext::draw_elements(self, mode, count, element_type, offset)
    }
}
