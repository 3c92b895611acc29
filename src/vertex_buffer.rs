use crate::draw_api::DrawApi;
use crate::error::BufferError;

/// An `ARRAY_BUFFER` filled once with `STATIC_DRAW` data.
pub struct VertexBuffer<G: DrawApi + ?Sized = glow::Context> {
    vbo: G::Buffer,
    size_in_bytes: usize,
}

impl<G: DrawApi + ?Sized> VertexBuffer<G> {
    pub fn new<T: bytemuck::Pod>(gl: &G, data: &[T]) -> Result<Self, BufferError> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        unsafe {
            let vbo = gl.create_buffer().map_err(|message| BufferError {
                kind: "vertex buffer",
                message,
            })?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            Ok(VertexBuffer {
                vbo,
                size_in_bytes: bytes.len(),
            })
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.size_in_bytes
    }

    pub fn bind(&self, gl: &G) {
        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo)) };
    }

    pub fn unbind(&self, gl: &G) {
        unsafe { gl.bind_buffer(glow::ARRAY_BUFFER, None) };
    }

    pub fn destroy(&self, gl: &G) {
        unsafe { gl.delete_buffer(self.vbo) };
    }
}
