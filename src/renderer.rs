use crate::draw_api::DrawApi;
use crate::index_buffer::IndexBuffer;
use crate::shader::Shader;
use crate::shader_api::ShaderApi;
use crate::vertex_array::VertexArray;

pub struct Renderer {
    pub clear_color: [f32; 4],
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            clear_color: [0.125, 0.125, 0.125, 1.0],
        }
    }

    pub fn clear<G: DrawApi + ?Sized>(&self, gl: &G) {
        let [r, g, b, a] = self.clear_color;
        unsafe {
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Bind `shader`, `va`, `ib` (in that order) and draw `ib` as triangles.
    /// Everything is re-bound on every call.
    pub fn draw<G>(&self, gl: &G, va: &VertexArray<G>, ib: &IndexBuffer<G>, shader: &Shader<G>)
    where
        G: DrawApi + ShaderApi + ?Sized,
    {
        shader.bind(gl);
        va.bind(gl);
        ib.bind(gl);
        unsafe {
            gl.draw_elements(glow::TRIANGLES, ib.count(), ib.index_type(), 0);
        }
    }
}
