use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    config::model::{AnimatorConfig, HueAnimatorConfig},
    foundation::error::{ColoranimError, ColoranimResult},
    scene::graph::SceneGraph,
    scene::host::{ObjectId, SceneHost},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// JSON input of one build pass: the avatar scene and every animator configuration in it.
pub struct BuildManifest {
    /// Avatar root; binding paths are relative to it.
    pub root: ObjectId,
    /// Scene snapshot.
    pub scene: SceneGraph,
    /// HSV animator instances.
    #[serde(default)]
    pub animators: Vec<AnimatorConfig>,
    /// Hue-cycle animator instances.
    #[serde(default)]
    pub hue_animators: Vec<HueAnimatorConfig>,
}

impl BuildManifest {
    /// Parse a manifest from a JSON reader, validate its structure and migrate legacy fields.
    pub fn from_reader<R: std::io::Read>(r: R) -> ColoranimResult<Self> {
        let manifest: Self = serde_json::from_reader(r)
            .map_err(|e| ColoranimError::serde(format!("parse manifest JSON: {e}")))?;
        manifest.prepare()
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json_str(s: &str) -> ColoranimResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a manifest from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ColoranimResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ColoranimError::validation(format!("open manifest JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    fn prepare(mut self) -> ColoranimResult<Self> {
        self.validate()?;
        self.animators = self
            .animators
            .into_iter()
            .map(AnimatorConfig::migrated)
            .collect();
        Ok(self)
    }

    /// Check that the scene is well formed and that the root exists.
    ///
    /// Owners and renderers are not checked here; a missing owner or renderer is a
    /// per-instance configuration problem reported by the build pass.
    pub fn validate(&self) -> ColoranimResult<()> {
        self.scene.validate()?;
        if !self.scene.contains(self.root) {
            return Err(ColoranimError::validation(format!(
                "root object {} is not in the scene",
                self.root.0
            )));
        }
        Ok(())
    }

    /// Name of `object`, or an empty string for unknown ids.
    pub fn object_name(&self, object: ObjectId) -> &str {
        self.scene.object_name(object).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/manifest.rs"]
mod tests;
