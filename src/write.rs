use std::io::Write;

use tracing::debug;

use crate::model::Model;
use crate::scene::{Scene, SceneMaterial};

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Model has no frames")]
    NoFrames,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneWriterSettings {
    /// Directory of the diffuse texture, relative to the scene file.
    ///
    /// An empty string puts the texture next to the scene file.
    pub texture_dir: String,
    /// File extension of the diffuse texture, without the dot.
    pub texture_extension: String,
    /// Texture wrap mode along U and V.
    pub wrap: [String; 2],
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for SceneWriterSettings {
    fn default() -> Self {
        Self {
            texture_dir: "textures".to_owned(),
            texture_extension: "jpg".to_owned(),
            wrap: ["repeat".to_owned(), "repeat".to_owned()],
            pretty: true,
        }
    }
}

/// Encodes decoded models as JSON scene documents.
pub struct SceneWriter<'s> {
    model_name: &'s str,
    settings: SceneWriterSettings,
}

impl<'s> SceneWriter<'s> {
    /// `model_name` names the diffuse texture of the scene's material.
    pub fn new(model_name: &'s str) -> Self {
        Self::new_with_settings(Default::default(), model_name)
    }

    pub fn new_with_settings(
        settings: SceneWriterSettings,
        model_name: &'s str,
    ) -> Self {
        Self {
            model_name,
            settings,
        }
    }

    pub fn material(&self) -> SceneMaterial {
        let file = format!("{}.{}", self.model_name, self.settings.texture_extension);
        let map_diffuse = if self.settings.texture_dir.is_empty() {
            file
        } else {
            format!("{}/{}", self.settings.texture_dir, file)
        };
        SceneMaterial {
            map_diffuse,
            map_diffuse_wrap: self.settings.wrap.clone(),
        }
    }

    pub fn build(&self, model: &Model) -> Result<Scene, WriteError> {
        let scene = Scene::from_model(model, self.material()).ok_or(WriteError::NoFrames)?;
        debug!(
            vertices = model.n_vertices(),
            frames = model.frames.len(),
            uv_pairs = scene.uvs.iter().map(|layer| layer.len() / 2).sum::<usize>(),
            faces = model.triangles.len(),
            "built scene"
        );
        Ok(scene)
    }

    pub fn write_to(
        &self,
        model: &Model,
        write: &mut dyn Write,
    ) -> Result<(), WriteError> {
        let scene = self.build(model)?;
        if self.settings.pretty {
            serde_json::to_writer_pretty(&mut *write, &scene)?;
        } else {
            serde_json::to_writer(&mut *write, &scene)?;
        }
        write.write_all(b"\n")?;
        Ok(())
    }

    /// Encode the whole document in memory.
    pub fn write_to_vec(&self, model: &Model) -> Result<Vec<u8>, WriteError> {
        let mut out = vec![];
        self.write_to(model, &mut out)?;
        Ok(out)
    }
}
