use std::io::Read;

use crate::header::MdlHeader;
use crate::read::{MdlReader, ReadError};
use crate::records::{FrameVertex, TexCoord, Triangle};

/// A fully decoded MDL model, with every animation frame held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub header: MdlHeader,
    pub tex_coords: Vec<TexCoord>,
    pub triangles: Vec<Triangle>,
    /// Never empty when produced by [`MdlReader`]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub min: FrameVertex,
    pub max: FrameVertex,
    pub vertices: Vec<FrameVertex>,
}

impl Model {
    /// Decode a whole model from the start of `read`.
    pub fn read_from<R: Read>(read: R) -> Result<Self, ReadError> {
        MdlReader::init(read)?.read_model()
    }

    pub fn n_vertices(&self) -> usize {
        self.tex_coords.len()
    }

    pub fn has_seam(&self) -> bool {
        self.tex_coords.iter().any(TexCoord::is_on_seam)
    }

    pub fn has_morph_targets(&self) -> bool {
        self.frames.len() > 1
    }

    pub fn base_frame(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Dequantized positions of one frame, flattened as `x, y, z, x, y, z, ...`
    pub fn frame_positions(&self, frame: &Frame) -> Vec<f32> {
        frame
            .vertices
            .iter()
            .flat_map(|v| self.header.dequantize(v))
            .collect()
    }
}

/// Name shown for a frame: the stored name up to its first NUL,
/// or `Frame {index}` if that is empty.
pub fn frame_display_name(index: usize, raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let name = String::from_utf8_lossy(&raw[..end]);
    if name.is_empty() {
        format!("Frame {index}")
    } else {
        name.into_owned()
    }
}
