use crate::{
    foundation::error::{ColoranimError, ColoranimResult},
    scene::host::{Material, ObjectId, SceneHost},
};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Flat, serde-backed scene graph. Object ids are indices into [`SceneGraph::objects`].
pub struct SceneGraph {
    /// Objects in id order.
    pub objects: Vec<SceneObject>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One object of the scene hierarchy.
pub struct SceneObject {
    /// Object name (one path segment).
    pub name: String,
    /// Parent object, `None` for top-level objects.
    #[serde(default)]
    pub parent: Option<ObjectId>,
    /// Renderer material slots; `None` when the object carries no renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Option<Material>>>,
}

impl SceneGraph {
    /// Append an object and return its id.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        parent: Option<ObjectId>,
        materials: Option<Vec<Option<Material>>>,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SceneObject {
            name: name.into(),
            parent,
            materials,
        });
        id
    }

    /// Look up an object by exact name; the first match wins.
    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(|i| ObjectId(i as u32))
    }

    /// Whether `id` refers to an object of this graph.
    pub fn contains(&self, id: ObjectId) -> bool {
        id.index() < self.objects.len()
    }

    /// Reject dangling parent links and parent cycles.
    pub fn validate(&self) -> ColoranimResult<()> {
        for obj in &self.objects {
            if let Some(p) = obj.parent
                && !self.contains(p)
            {
                return Err(ColoranimError::validation(format!(
                    "object '{}' references missing parent {}",
                    obj.name, p.0
                )));
            }
        }

        for (i, obj) in self.objects.iter().enumerate() {
            let mut steps = 0usize;
            let mut current = obj.parent;
            while let Some(p) = current {
                steps += 1;
                if steps > self.objects.len() {
                    return Err(ColoranimError::validation(format!(
                        "object '{}' (id {i}) is part of a parent cycle",
                        obj.name
                    )));
                }
                current = self.objects[p.index()].parent;
            }
        }
        Ok(())
    }
}

impl SceneHost for SceneGraph {
    fn object_name(&self, object: ObjectId) -> Option<&str> {
        self.objects.get(object.index()).map(|o| o.name.as_str())
    }

    fn parent(&self, object: ObjectId) -> Option<ObjectId> {
        self.objects.get(object.index())?.parent
    }

    fn shared_materials(&self, object: ObjectId) -> Option<&[Option<Material>]> {
        self.objects.get(object.index())?.materials.as_deref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graph.rs"]
mod tests;
