use std::io::Read;

use tracing::debug;

use crate::header::MdlHeader;
use crate::io::RecordReader;
use crate::model::{Frame, Model, frame_display_name};
use crate::records::*;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("MDL magic {0:#010x} is not \"IDPO\"")]
    BadMagic(u32),
    #[error("Incompatible MDL version {0} (expected {expected})", expected = crate::FORMAT_VERSION)]
    BadVersion(u32),
    #[error("Model has no frames")]
    NoFrames,
    #[error("Invalid skin size {width}x{height}")]
    ZeroSkinSize { width: u32, height: u32 },
    #[error("Data ends too early while reading {what} (at byte {offset})")]
    NotEnoughData { what: &'static str, offset: u64 },
    #[error("Frame {0} is a frame group, which is not supported")]
    UnsupportedFrameGroup(usize),
    #[error("Triangle {triangle} uses vertex {vertex}, but the model has {n_vertices} vertices")]
    VertexIndexOutOfRange {
        triangle: usize,
        vertex: u32,
        n_vertices: u32,
    },
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Decodes an MDL file front to back.
///
/// [`MdlReader::init`] only consumes and validates the header, so callers can
/// reject a file before committing to decoding the rest of it.
pub struct MdlReader<R> {
    records: RecordReader<R>,
    header: MdlHeader,
}

impl<R: Read> MdlReader<R> {
    pub fn init(read: R) -> Result<Self, ReadError> {
        let mut records = RecordReader::new(read);
        let header: MdlHeader = records.read_record("header")?;
        if header.magic != crate::MAGIC {
            return Err(ReadError::BadMagic(header.magic));
        }
        if header.version != crate::FORMAT_VERSION {
            return Err(ReadError::BadVersion(header.version));
        }
        if header.num_frames == 0 {
            return Err(ReadError::NoFrames);
        }
        if header.skin_width == 0 || header.skin_height == 0 {
            return Err(ReadError::ZeroSkinSize {
                width: header.skin_width,
                height: header.skin_height,
            });
        }
        debug!(
            skins = header.num_skins,
            skin_width = header.skin_width,
            skin_height = header.skin_height,
            vertices = header.num_verts,
            triangles = header.num_triangles,
            frames = header.num_frames,
            "MDL header OK"
        );
        Ok(Self { records, header })
    }

    pub fn header(&self) -> &MdlHeader {
        &self.header
    }

    /// Decode everything after the header.
    pub fn read_model(mut self) -> Result<Model, ReadError> {
        self.skip_skins()?;
        let tex_coords = self
            .records
            .read_array::<TexCoord>(self.header.num_verts, "texture coordinates")?;
        let triangles = self
            .records
            .read_array::<Triangle>(self.header.num_triangles, "triangles")?;
        check_triangles(&triangles, self.header.num_verts)?;
        let n_frames = self.header.num_frames as usize;
        let mut frames = Vec::with_capacity(n_frames.min(1024));
        for index in 0..n_frames {
            frames.push(self.read_frame(index)?);
        }
        debug!(end = self.records.position(), "MDL model decoded");
        Ok(Model {
            header: self.header,
            tex_coords,
            triangles,
            frames,
        })
    }

    fn skip_skins(&mut self) -> Result<(), ReadError> {
        let image_len = self.header.skin_image_len();
        for index in 0..self.header.num_skins {
            let kind = SkinKind::from(self.records.read_record::<u32>("skin type")?);
            let n_images = match kind {
                SkinKind::Single => 1,
                SkinKind::Group => {
                    let group: SkinGroupHeader =
                        self.records.read_record("skin group header")?;
                    group.count as u64
                }
            };
            debug!(index, ?kind, n_images, "skipping skin pixels");
            self.records.skip(n_images * image_len, "skin pixels")?;
        }
        Ok(())
    }

    fn read_frame(&mut self, index: usize) -> Result<Frame, ReadError> {
        let kind = FrameKind::from(self.records.read_record::<u32>("frame type")?);
        match kind {
            FrameKind::Simple => {}
            FrameKind::Group => return Err(ReadError::UnsupportedFrameGroup(index)),
        }
        let info: SimpleFrameHeader = self.records.read_record("frame header")?;
        let vertices = self
            .records
            .read_array::<FrameVertex>(self.header.num_verts, "frame vertices")?;
        let name = frame_display_name(index, &info.name);
        debug!(index, name = %name, "decoded frame");
        Ok(Frame {
            name,
            min: info.min,
            max: info.max,
            vertices,
        })
    }
}

fn check_triangles(triangles: &[Triangle], n_vertices: u32) -> Result<(), ReadError> {
    for (i, tri) in triangles.iter().enumerate() {
        if let Some(&vertex) = tri.vertices.iter().find(|&&v| v >= n_vertices) {
            return Err(ReadError::VertexIndexOutOfRange {
                triangle: i,
                vertex,
                n_vertices,
            });
        }
    }
    Ok(())
}
