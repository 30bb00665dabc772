use std::collections::BTreeMap;

use crate::foundation::core::{Rgb, Vec4};

/// Identifier of an object in the host scene graph.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Index of this object in a flat object table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shader-declared type of a material property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShaderPropertyType {
    /// RGBA color property.
    Color,
    /// Four-component vector property.
    Vector,
    /// Scalar float property.
    Float,
    /// Scalar float property with a slider range.
    Range,
    /// Texture property.
    Texture,
    /// Integer property.
    Int,
}

impl std::fmt::Display for ShaderPropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Color => "Color",
            Self::Vector => "Vector",
            Self::Float => "Float",
            Self::Range => "Range",
            Self::Texture => "Texture",
            Self::Int => "Int",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Shader property declarations visible through a material.
pub struct Shader {
    /// Shader name, for diagnostics.
    pub name: String,
    /// Declared properties keyed by property name.
    #[serde(default)]
    pub properties: BTreeMap<String, ShaderPropertyType>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Snapshot of a material's shader and its color/vector property values.
pub struct Material {
    /// Material name.
    pub name: String,
    /// Bound shader; `None` models a material whose shader failed to load.
    #[serde(default)]
    pub shader: Option<Shader>,
    /// Color property values as RGBA.
    #[serde(default)]
    pub colors: BTreeMap<String, [f32; 4]>,
    /// Vector property values.
    #[serde(default)]
    pub vectors: BTreeMap<String, [f32; 4]>,
}

impl Material {
    /// Whether the shader declares `name`.
    pub fn has_property(&self, name: &str) -> bool {
        self.property_type(name).is_some()
    }

    /// Shader-declared type of `name`, if declared.
    pub fn property_type(&self, name: &str) -> Option<ShaderPropertyType> {
        self.shader.as_ref()?.properties.get(name).copied()
    }

    /// Color value of `name`; unset colors read as white.
    pub fn color(&self, name: &str) -> Rgb {
        self.colors
            .get(name)
            .map_or(Rgb::white(), |c| Rgb::new(c[0], c[1], c[2]))
    }

    /// Vector value of `name`; unset vectors read as the neutral HSVG value `(0, 1, 1, 1)`.
    pub fn vector(&self, name: &str) -> Vec4 {
        self.vectors
            .get(name)
            .map_or(Vec4::new(0.0, 1.0, 1.0, 1.0), |v| Vec4::from(*v))
    }
}

/// Read-only view of the host scene consumed by the generator.
///
/// Implementations must be side-effect free; the generator snapshots every value it reads.
pub trait SceneHost {
    /// Name of `object`, if it exists.
    fn object_name(&self, object: ObjectId) -> Option<&str>;

    /// Parent of `object`, or `None` for scene roots and unknown ids.
    fn parent(&self, object: ObjectId) -> Option<ObjectId>;

    /// Shared material slots of the renderer on `object`. `None` when the object has no renderer.
    fn shared_materials(&self, object: ObjectId) -> Option<&[Option<Material>]>;

    /// Path from `root` to `target`: ancestor names joined by `/`, empty for the root itself.
    fn relative_path(&self, root: ObjectId, target: ObjectId) -> String {
        if root == target {
            return String::new();
        }

        let mut names = vec![self.object_name(target).unwrap_or_default()];
        let mut current = self.parent(target);
        while let Some(id) = current {
            if id == root {
                break;
            }
            names.push(self.object_name(id).unwrap_or_default());
            current = self.parent(id);
        }
        names.reverse();
        names.join("/")
    }
}
