use std::io::{ErrorKind, Read};

use crate::read::ReadError;

/// Avoid trusting counts from the file header with huge up-front allocations.
const MAX_PREALLOC: usize = 1 << 16;

/// A fixed-size wire record stored little-endian.
///
/// Implementors must have no padding (enforced by `Pod`), so the in-memory
/// bytes are exactly the bytes on disk.
pub trait LeRecord: bytemuck::Pod {
    /// Convert a record read verbatim from the file into native byte order.
    fn from_le(self) -> Self;
}

impl LeRecord for u32 {
    fn from_le(self) -> Self {
        u32::from_le(self)
    }
}

#[inline(always)]
pub fn f32_from_le(v: f32) -> f32 {
    f32::from_bits(u32::from_le(v.to_bits()))
}

/// Sequential, forward-only decoder of MDL records.
pub struct RecordReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn read_record<T: LeRecord>(
        &mut self,
        what: &'static str,
    ) -> Result<T, ReadError> {
        let mut record = <T as bytemuck::Zeroable>::zeroed();
        self.fill(bytemuck::bytes_of_mut(&mut record), what)?;
        Ok(record.from_le())
    }

    pub fn read_array<T: LeRecord>(
        &mut self,
        count: u32,
        what: &'static str,
    ) -> Result<Vec<T>, ReadError> {
        let mut records = Vec::with_capacity((count as usize).min(MAX_PREALLOC));
        for _ in 0..count {
            records.push(self.read_record(what)?);
        }
        Ok(records)
    }

    /// Advance past `len` bytes without interpreting them.
    pub fn skip(
        &mut self,
        len: u64,
        what: &'static str,
    ) -> Result<(), ReadError> {
        let skipped = std::io::copy(
            &mut (&mut self.inner).take(len),
            &mut std::io::sink(),
        )?;
        self.position += skipped;
        if skipped < len {
            return Err(ReadError::NotEnoughData {
                what,
                offset: self.position,
            });
        }
        Ok(())
    }

    fn fill(
        &mut self,
        buf: &mut [u8],
        what: &'static str,
    ) -> Result<(), ReadError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                Err(ReadError::NotEnoughData {
                    what,
                    offset: self.position,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{TexCoord, Triangle};

    #[test]
    fn reads_little_endian_fields_in_order() {
        let mut bytes = vec![];
        for v in [1u32, 0x0102_0304, 300] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut r = RecordReader::new(bytes.as_slice());
        let tc: TexCoord = r.read_record("texcoord").unwrap();
        assert_eq!(tc, TexCoord { on_seam: 1, s: 0x0102_0304, t: 300 });
        assert_eq!(r.position(), 12);
    }

    #[test]
    fn read_array_reads_contiguous_records() {
        let mut bytes = vec![];
        for v in [0u32, 1, 2, 3, 1, 4, 5, 6] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let mut r = RecordReader::new(bytes.as_slice());
        let tris: Vec<Triangle> = r.read_array(2, "triangles").unwrap();
        assert_eq!(tris[0], Triangle { front: 0, vertices: [1, 2, 3] });
        assert_eq!(tris[1], Triangle { front: 1, vertices: [4, 5, 6] });
    }

    #[test]
    fn short_record_is_not_enough_data() {
        let bytes = [0u8; 10];
        let mut r = RecordReader::new(&bytes[..]);
        let err = r.read_record::<TexCoord>("texcoord").unwrap_err();
        assert!(matches!(
            err,
            ReadError::NotEnoughData { what: "texcoord", offset: 0 }
        ));
    }

    #[test]
    fn skip_advances_and_detects_end_of_stream() {
        let mut bytes = vec![0xAAu8; 6];
        bytes.extend_from_slice(&7u32.to_le_bytes());
        let mut r = RecordReader::new(bytes.as_slice());
        r.skip(6, "pixels").unwrap();
        assert_eq!(r.read_record::<u32>("tag").unwrap(), 7);

        let mut r = RecordReader::new(&bytes[..4]);
        let err = r.skip(6, "pixels").unwrap_err();
        assert!(matches!(
            err,
            ReadError::NotEnoughData { what: "pixels", offset: 4 }
        ));
    }

    #[test]
    fn zero_count_array_reads_nothing() {
        let mut r = RecordReader::new(&[0u8; 0][..]);
        let v: Vec<TexCoord> = r.read_array(0, "texcoords").unwrap();
        assert!(v.is_empty());
        assert_eq!(r.position(), 0);
    }
}
