use crate::io::{LeRecord, f32_from_le};

/// Follows a skin type tag when the skin is a group of images.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SkinGroupHeader {
    pub count: u32,
    pub interval: f32,
}

/// Texel coordinate of one vertex on the skin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct TexCoord {
    pub on_seam: u32,
    pub s: u32,
    pub t: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Triangle {
    pub front: u32,
    /// Indices into both the frame vertices and the texture coordinates
    pub vertices: [u32; 3],
}

/// Quantized vertex position, each component in `0..=255`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct FrameVertex {
    pub position: [u8; 3],
    /// Index into the precomputed normal table (not used for export)
    pub normal_index: u8,
}

/// Body of a simple frame that follows its type tag, up to the vertices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct SimpleFrameHeader {
    pub min: FrameVertex,
    pub max: FrameVertex,
    pub name: [u8; crate::FRAME_NAME_LEN],
}

const _: () = assert!(std::mem::size_of::<SkinGroupHeader>() == 8);
const _: () = assert!(std::mem::size_of::<TexCoord>() == 12);
const _: () = assert!(std::mem::size_of::<Triangle>() == 16);
const _: () = assert!(std::mem::size_of::<FrameVertex>() == 4);
const _: () = assert!(std::mem::size_of::<SimpleFrameHeader>() == 24);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinKind {
    Single,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Simple,
    /// Several poses sharing one frame slot. Not supported.
    Group,
}

impl From<u32> for SkinKind {
    fn from(tag: u32) -> Self {
        match tag {
            0 => Self::Single,
            _ => Self::Group,
        }
    }
}

impl From<u32> for FrameKind {
    fn from(tag: u32) -> Self {
        match tag {
            0 => Self::Simple,
            _ => Self::Group,
        }
    }
}

impl TexCoord {
    pub fn is_on_seam(&self) -> bool {
        self.on_seam != 0
    }
}

impl Triangle {
    pub fn is_front_facing(&self) -> bool {
        self.front != 0
    }
}

impl LeRecord for SkinGroupHeader {
    fn from_le(self) -> Self {
        Self {
            count: u32::from_le(self.count),
            interval: f32_from_le(self.interval),
        }
    }
}

impl LeRecord for TexCoord {
    fn from_le(self) -> Self {
        Self {
            on_seam: u32::from_le(self.on_seam),
            s: u32::from_le(self.s),
            t: u32::from_le(self.t),
        }
    }
}

impl LeRecord for Triangle {
    fn from_le(self) -> Self {
        Self {
            front: u32::from_le(self.front),
            vertices: self.vertices.map(u32::from_le),
        }
    }
}

impl LeRecord for FrameVertex {
    fn from_le(self) -> Self {
        self
    }
}

impl LeRecord for SimpleFrameHeader {
    fn from_le(self) -> Self {
        self
    }
}
