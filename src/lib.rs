pub mod header;
pub mod records;

pub mod read;
pub mod write;

pub mod io;

pub mod model;
pub mod scene;

/// "IDPO" as a little-endian `u32`.
pub const MAGIC: u32 = u32::from_le_bytes(*b"IDPO");
pub const FORMAT_VERSION: u32 = 6;
/// Size of the fixed name buffer stored with every frame.
pub const FRAME_NAME_LEN: usize = 16;
