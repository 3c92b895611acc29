use crate::draw_api::DrawApi;
use crate::error::BufferError;
use crate::vertex_buffer::VertexBuffer;
use crate::vertex_buffer_layout::VertexBufferLayout;

pub struct VertexArray<G: DrawApi + ?Sized = glow::Context> {
    vao: G::VertexArray,
}

impl<G: DrawApi + ?Sized> VertexArray<G> {
    pub fn new(gl: &G) -> Result<Self, BufferError> {
        let vao = unsafe { gl.create_vertex_array() }.map_err(|message| BufferError {
            kind: "vertex array",
            message,
        })?;
        Ok(VertexArray { vao })
    }

    /// Attribute `i` reads element `i` of `layout` out of `vb`.
    pub fn add_buffer(&self, gl: &G, vb: &VertexBuffer<G>, layout: &VertexBufferLayout) {
        self.bind(gl);
        vb.bind(gl);
        for (index, (elem, offset)) in (0u32..).zip(layout.offsets()) {
            unsafe {
                gl.enable_vertex_attrib_array(index);
                gl.vertex_attrib_pointer_f32(
                    index,
                    elem.count(),
                    elem.kind(),
                    elem.normalized(),
                    layout.stride(),
                    offset,
                );
            }
        }
    }

    pub fn bind(&self, gl: &G) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }

    pub fn unbind(&self, gl: &G) {
        unsafe { gl.bind_vertex_array(None) };
    }

    pub fn destroy(&self, gl: &G) {
        unsafe { gl.delete_vertex_array(self.vao) };
    }
}
