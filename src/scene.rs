//! JSON scene document built from a decoded model.
//!
//! The layout follows the JSON model format consumed by the renderer: a flat
//! position array, optional morph targets, a single UV layer, and a flat face
//! array.

use serde::Serialize;

use crate::header::MdlHeader;
use crate::model::Model;
use crate::records::{TexCoord, Triangle};

/// Face type bit: the face record carries a material index.
pub const FACE_HAS_MATERIAL: u32 = 1 << 1;
/// Face type bit: the face record carries one UV index per corner.
pub const FACE_HAS_VERTEX_UVS: u32 = 1 << 3;
/// Type tag of every face we emit: a triangle with a material and per-vertex UVs.
pub const TRIANGLE_FACE: u32 = FACE_HAS_MATERIAL | FACE_HAS_VERTEX_UVS;
/// Values per face record: tag, 3 positions, material, 3 UVs.
pub const FACE_RECORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub materials: Vec<SceneMaterial>,
    pub vertices: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph_targets: Option<Vec<MorphTarget>>,
    /// UV layers; always exactly one, since faces carry one UV index per corner
    pub uvs: Vec<Vec<f32>>,
    pub faces: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMaterial {
    pub map_diffuse: String,
    pub map_diffuse_wrap: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphTarget {
    pub name: String,
    pub vertices: Vec<f32>,
}

impl Scene {
    /// Build the document for `model`, using `material` as its only material.
    ///
    /// Returns `None` if the model has no frames.
    pub fn from_model(model: &Model, material: SceneMaterial) -> Option<Self> {
        let base = model.base_frame()?;
        let morph_targets = model.has_morph_targets().then(|| {
            model
                .frames
                .iter()
                .map(|frame| MorphTarget {
                    name: frame.name.clone(),
                    vertices: model.frame_positions(frame),
                })
                .collect::<Vec<_>>()
        });
        let mut uvs = base_uvs(&model.header, &model.tex_coords);
        if let Some(seam) = seam_uvs(&model.header, &model.tex_coords) {
            uvs.extend(seam);
        }
        Some(Self {
            materials: vec![material],
            vertices: model.frame_positions(base),
            morph_targets,
            uvs: vec![uvs],
            faces: faces(&model.triangles, &model.tex_coords),
        })
    }
}

/// One `u, v` pair per texture coordinate, with V flipped to a bottom-left origin.
pub fn base_uvs(header: &MdlHeader, tex_coords: &[TexCoord]) -> Vec<f32> {
    tex_coords
        .iter()
        .flat_map(|tc| uv(tc.s as f64, tc.t, header))
        .collect()
}

/// UV pairs for back faces touching the skin seam, appended after the base
/// pairs in the same layer.
///
/// `None` unless at least one vertex is on the seam. Off-seam entries are
/// `0, 0` placeholders, on-seam entries are shifted by half the skin width
/// (rounded down).
pub fn seam_uvs(header: &MdlHeader, tex_coords: &[TexCoord]) -> Option<Vec<f32>> {
    if !tex_coords.iter().any(TexCoord::is_on_seam) {
        return None;
    }
    let half_width = (header.skin_width / 2) as f64;
    let block = tex_coords
        .iter()
        .flat_map(|tc| {
            if tc.is_on_seam() {
                uv(tc.s as f64 + half_width, tc.t, header)
            } else {
                [0.0, 0.0]
            }
        })
        .collect();
    Some(block)
}

fn uv(s: f64, t: u32, header: &MdlHeader) -> [f32; 2] {
    [
        (s / header.skin_width as f64) as f32,
        (1.0 - t as f64 / header.skin_height as f64) as f32,
    ]
}

/// Face records for all triangles, with the winding reversed.
///
/// A back-facing corner on the seam points at its shifted pair, which sits
/// `tex_coords.len()` pairs after the base pairs in the UV layer.
pub fn faces(triangles: &[Triangle], tex_coords: &[TexCoord]) -> Vec<u32> {
    let n_vertices = tex_coords.len() as u32;
    let mut out = Vec::with_capacity(triangles.len() * FACE_RECORD_LEN);
    for tri in triangles {
        let [p0, p1, p2] = tri.vertices;
        let [t0, t1, t2] = tri.vertices.map(|v| {
            let on_seam = tex_coords
                .get(v as usize)
                .is_some_and(TexCoord::is_on_seam);
            if !tri.is_front_facing() && on_seam {
                v + n_vertices
            } else {
                v
            }
        });
        out.extend_from_slice(&[TRIANGLE_FACE, p0, p2, p1, 0, t0, t2, t1]);
    }
    out
}
