use crate::io::{LeRecord, f32_from_le};
use crate::records::FrameVertex;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Fixed 84-byte header at the start of every MDL file.
///
/// The counts stored here size every array that follows it in the file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct MdlHeader {
    pub magic: u32,
    pub version: u32,
    pub scale: Vec3,
    pub origin: Vec3,
    pub radius: f32,
    pub offsets: Vec3,
    pub num_skins: u32,
    pub skin_width: u32,
    pub skin_height: u32,
    pub num_verts: u32,
    pub num_triangles: u32,
    pub num_frames: u32,
    pub sync_type: u32,
    pub flags: u32,
    pub size: f32,
}

const _: () = assert!(MdlHeader::encoded_len() == 84);

impl MdlHeader {
    pub const fn encoded_len() -> usize {
        std::mem::size_of::<Self>()
    }

    /// Number of pixel bytes in one skin image.
    pub fn skin_image_len(&self) -> u64 {
        self.skin_width as u64 * self.skin_height as u64
    }

    /// Reconstruct a world-space position from a quantized frame vertex.
    pub fn dequantize(&self, vertex: &FrameVertex) -> [f32; 3] {
        let [x, y, z] = vertex.position;
        [
            self.scale.x * x as f32 + self.origin.x,
            self.scale.y * y as f32 + self.origin.y,
            self.scale.z * z as f32 + self.origin.z,
        ]
    }
}

impl LeRecord for Vec3 {
    fn from_le(self) -> Self {
        Self {
            x: f32_from_le(self.x),
            y: f32_from_le(self.y),
            z: f32_from_le(self.z),
        }
    }
}

impl LeRecord for MdlHeader {
    fn from_le(self) -> Self {
        Self {
            magic: u32::from_le(self.magic),
            version: u32::from_le(self.version),
            scale: self.scale.from_le(),
            origin: self.origin.from_le(),
            radius: f32_from_le(self.radius),
            offsets: self.offsets.from_le(),
            num_skins: u32::from_le(self.num_skins),
            skin_width: u32::from_le(self.skin_width),
            skin_height: u32::from_le(self.skin_height),
            num_verts: u32::from_le(self.num_verts),
            num_triangles: u32::from_le(self.num_triangles),
            num_frames: u32::from_le(self.num_frames),
            sync_type: u32::from_le(self.sync_type),
            flags: u32::from_le(self.flags),
            size: f32_from_le(self.size),
        }
    }
}
