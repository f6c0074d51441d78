#![allow(dead_code)]

use idpo_mdl::{FORMAT_VERSION, FRAME_NAME_LEN, MAGIC};

pub enum TestSkin {
    Single,
    Group(u32),
}

pub struct TestFrame {
    pub kind: u32,
    pub name: Vec<u8>,
    pub vertices: Vec<[u8; 3]>,
}

/// Builds MDL files byte by byte, independent of the library's decoder.
pub struct MdlBuilder {
    pub magic: u32,
    pub version: u32,
    pub scale: [f32; 3],
    pub origin: [f32; 3],
    pub skin_width: u32,
    pub skin_height: u32,
    pub skins: Vec<TestSkin>,
    /// `on_seam, s, t`
    pub tex_coords: Vec<[u32; 3]>,
    /// `front, v0, v1, v2`
    pub triangles: Vec<[u32; 4]>,
    pub frames: Vec<TestFrame>,
}

impl TestFrame {
    pub fn new(name: &str, vertices: Vec<[u8; 3]>) -> Self {
        Self {
            kind: 0,
            name: name.as_bytes().to_vec(),
            vertices,
        }
    }
}

impl MdlBuilder {
    pub fn new() -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            scale: [1.0; 3],
            origin: [0.0; 3],
            skin_width: 100,
            skin_height: 100,
            skins: vec![TestSkin::Single],
            tex_coords: vec![],
            triangles: vec![],
            frames: vec![],
        }
    }

    /// 4 vertices, 2 triangles, 1 frame, 100x100 skin, no seam vertices.
    pub fn quad() -> Self {
        let mut b = Self::new();
        b.tex_coords = vec![[0, 0, 0], [0, 50, 0], [0, 0, 50], [0, 50, 100]];
        b.triangles = vec![[1, 0, 1, 2], [0, 2, 1, 3]];
        b.frames = vec![TestFrame::new(
            "base",
            vec![[0, 0, 0], [1, 0, 0], [0, 1, 0], [1, 1, 0]],
        )];
        b
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![];
        u32s(&mut out, &[self.magic, self.version]);
        f32s(&mut out, &self.scale);
        f32s(&mut out, &self.origin);
        // radius, offsets
        f32s(&mut out, &[10.0, 0.0, 0.0, 0.0]);
        u32s(
            &mut out,
            &[
                self.skins.len() as u32,
                self.skin_width,
                self.skin_height,
                self.tex_coords.len() as u32,
                self.triangles.len() as u32,
                self.frames.len() as u32,
                0,
                0,
            ],
        );
        f32s(&mut out, &[1.0]);
        assert_eq!(out.len(), 84);

        let image_len = (self.skin_width * self.skin_height) as usize;
        for skin in &self.skins {
            match skin {
                TestSkin::Single => {
                    u32s(&mut out, &[0]);
                    out.resize(out.len() + image_len, 0xAB);
                }
                TestSkin::Group(count) => {
                    u32s(&mut out, &[1, *count]);
                    f32s(&mut out, &[0.1]);
                    out.resize(out.len() + image_len * *count as usize, 0xCD);
                }
            }
        }
        for tc in &self.tex_coords {
            u32s(&mut out, tc);
        }
        for tri in &self.triangles {
            u32s(&mut out, tri);
        }
        for frame in &self.frames {
            u32s(&mut out, &[frame.kind]);
            // min, max
            out.extend_from_slice(&[0, 0, 0, 0, 255, 255, 255, 0]);
            let mut name = [0u8; FRAME_NAME_LEN];
            name[..frame.name.len()].copy_from_slice(&frame.name);
            out.extend_from_slice(&name);
            for v in &frame.vertices {
                out.extend_from_slice(v);
                out.push(0);
            }
        }
        out
    }
}

fn u32s(out: &mut Vec<u8>, vs: &[u32]) {
    vs.iter().for_each(|v| out.extend_from_slice(&v.to_le_bytes()));
}

fn f32s(out: &mut Vec<u8>, vs: &[f32]) {
    vs.iter().for_each(|v| out.extend_from_slice(&v.to_le_bytes()));
}

pub fn floats(value: &serde_json::Value) -> Vec<f32> {
    value
        .as_array()
        .expect("not an array")
        .iter()
        .map(|v| v.as_f64().expect("not a number") as f32)
        .collect()
}

pub fn ints(value: &serde_json::Value) -> Vec<u64> {
    value
        .as_array()
        .expect("not an array")
        .iter()
        .map(|v| v.as_u64().expect("not an integer"))
        .collect()
}
