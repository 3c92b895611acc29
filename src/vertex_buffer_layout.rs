//! Describes how interleaved vertex data is split into attributes.

/// One attribute: `count` components of GL type `kind`.
///
/// Only [`VertexBufferLayout::push`] builds these, so `kind` is always one
/// of the types implementing [`VertexAttribType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexBufferElement {
    kind: u32,
    count: i32,
    normalized: bool,
    type_size: i32,
}

impl VertexBufferElement {
    fn of<T: VertexAttribType>(count: i32) -> Self {
        VertexBufferElement {
            kind: T::KIND,
            count,
            normalized: T::NORMALIZED,
            type_size: T::SIZE,
        }
    }

    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn normalized(&self) -> bool {
        self.normalized
    }

    pub fn size_in_bytes(&self) -> i32 {
        self.type_size * self.count
    }
}

/// Component types that may appear in a vertex attribute.
pub trait VertexAttribType {
    const KIND: u32;
    const NORMALIZED: bool;
    const SIZE: i32;
}

impl VertexAttribType for f32 {
    const KIND: u32 = glow::FLOAT;
    const NORMALIZED: bool = false;
    const SIZE: i32 = 4;
}

impl VertexAttribType for u32 {
    const KIND: u32 = glow::UNSIGNED_INT;
    const NORMALIZED: bool = false;
    const SIZE: i32 = 4;
}

impl VertexAttribType for u8 {
    const KIND: u32 = glow::UNSIGNED_BYTE;
    const NORMALIZED: bool = true;
    const SIZE: i32 = 1;
}

#[derive(Debug, Clone, Default)]
pub struct VertexBufferLayout {
    elements: Vec<VertexBufferElement>,
    stride: i32,
}

impl VertexBufferLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute made of `count` components of type `T`.
    pub fn push<T: VertexAttribType>(&mut self, count: i32) -> &mut Self {
        let elem = VertexBufferElement::of::<T>(count);
        self.stride += elem.size_in_bytes();
        self.elements.push(elem);
        self
    }

    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// `(element, byte offset)` for each attribute in order.
    pub fn offsets(&self) -> impl Iterator<Item = (&VertexBufferElement, i32)> + '_ {
        self.elements.iter().scan(0, |offset, elem| {
            let start = *offset;
            *offset += elem.size_in_bytes();
            Some((elem, start))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_and_uv() {
        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(2).push::<f32>(2);
        assert_eq!(layout.stride(), 16);
        let offsets: Vec<i32> = layout.offsets().map(|(_, o)| o).collect();
        assert_eq!(offsets, vec![0, 8]);
    }

    #[test]
    fn bytes_are_normalized() {
        let mut layout = VertexBufferLayout::new();
        layout.push::<f32>(3).push::<u8>(4).push::<u32>(1);
        assert_eq!(layout.stride(), 12 + 4 + 4);
        let elems = layout.elements();
        assert_eq!(elems[1].kind(), glow::UNSIGNED_BYTE);
        assert_eq!(elems[1].count(), 4);
        assert!(elems[1].normalized());
        assert!(!elems[0].normalized());
        assert!(!elems[2].normalized());
        let offsets: Vec<i32> = layout.offsets().map(|(_, o)| o).collect();
        assert_eq!(offsets, vec![0, 12, 16]);
    }

    #[test]
    fn element_sizes_follow_component_type() {
        let mut layout = VertexBufferLayout::new();
        layout.push::<u8>(3).push::<u32>(2).push::<f32>(1);
        let sizes: Vec<i32> = layout.elements().iter().map(|e| e.size_in_bytes()).collect();
        assert_eq!(sizes, vec![3, 8, 4]);
        assert_eq!(layout.stride(), sizes.iter().sum::<i32>());
    }

    #[test]
    fn empty_layout() {
        let layout = VertexBufferLayout::new();
        assert_eq!(layout.stride(), 0);
        assert_eq!(layout.offsets().count(), 0);
    }
}
