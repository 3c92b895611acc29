use crate::draw_api::DrawApi;
use crate::error::BufferError;

/// An `ELEMENT_ARRAY_BUFFER` of `u32` indices.
pub struct IndexBuffer<G: DrawApi + ?Sized = glow::Context> {
    ebo: G::Buffer,
    count: i32,
}

impl<G: DrawApi + ?Sized> IndexBuffer<G> {
    /// Upload `elem2vtx`, widening each index to `u32`.
    pub fn new<T>(gl: &G, elem2vtx: &[T]) -> Result<Self, BufferError>
    where
        T: 'static + Copy + num_traits::AsPrimitive<u32>,
    {
        let elem2vtx0: Vec<u32> = elem2vtx.iter().map(|i| (*i).as_()).collect();
        let count = i32::try_from(elem2vtx0.len()).map_err(|_| BufferError {
            kind: "index buffer",
            message: format!("{} indices exceed i32::MAX", elem2vtx0.len()),
        })?;
        unsafe {
            let ebo = gl.create_buffer().map_err(|message| BufferError {
                kind: "index buffer",
                message,
            })?;
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&elem2vtx0),
                glow::STATIC_DRAW,
            );
            Ok(IndexBuffer { ebo, count })
        }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn index_type(&self) -> u32 {
        glow::UNSIGNED_INT
    }

    pub fn bind(&self, gl: &G) {
        unsafe { gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.ebo)) };
    }

    pub fn unbind(&self, gl: &G) {
        unsafe { gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None) };
    }

    pub fn destroy(&self, gl: &G) {
        unsafe { gl.delete_buffer(self.ebo) };
    }
}
