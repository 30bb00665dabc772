use crate::{
    animation::curve::{Channel, CurveBinding},
    config::{
        model::{ColorTarget, TargetMode},
        validate::check_target,
    },
    foundation::core::{Hsv, Vec4},
    foundation::error::{ColoranimError, ColoranimResult},
    scene::host::{ObjectId, SceneHost},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Color-mode target with its base color snapshotted as HSV.
pub struct ResolvedColorTarget {
    /// Renderer path relative to the avatar root.
    pub path: String,
    /// Material slot.
    pub material_index: usize,
    /// Color property name.
    pub property: String,
    /// Base color at resolution time.
    pub base: Hsv,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Vector-mode target with its base HSVG vector snapshotted verbatim.
pub struct ResolvedVectorTarget {
    /// Renderer path relative to the avatar root.
    pub path: String,
    /// Material slot.
    pub material_index: usize,
    /// Vector property name.
    pub property: String,
    /// Base vector at resolution time.
    pub base: Vec4,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Targets of one build pass split by mode, input order preserved within each list.
pub struct ResolvedTargets {
    /// Color-mode targets.
    pub color: Vec<ResolvedColorTarget>,
    /// Vector-mode targets.
    pub vector: Vec<ResolvedVectorTarget>,
}

impl ResolvedColorTarget {
    /// Binding of one channel of this target's property.
    pub fn binding(&self, channel: Channel) -> CurveBinding {
        CurveBinding::material(&self.path, self.material_index, &self.property, channel)
    }
}

impl ResolvedVectorTarget {
    /// Binding of one component of this target's property.
    pub fn binding(&self, channel: Channel) -> CurveBinding {
        CurveBinding::material(&self.path, self.material_index, &self.property, channel)
    }
}

impl ResolvedTargets {
    /// Whether no target was resolved.
    pub fn is_empty(&self) -> bool {
        self.color.is_empty() && self.vector.is_empty()
    }
}

/// Resolve every target against `host`, reading base values once.
///
/// Fails on the first target whose renderer, slot, material or property cannot be used.
pub fn resolve_targets<H: SceneHost + ?Sized>(
    host: &H,
    root: ObjectId,
    targets: &[ColorTarget],
) -> ColoranimResult<ResolvedTargets> {
    let mut out = ResolvedTargets::default();

    for (i, target) in targets.iter().enumerate() {
        let material = check_target(host, target)
            .map_err(|issue| ColoranimError::validation(format!("Target [{i}]: {issue}")))?;
        let (Some(renderer), Ok(material_index)) =
            (target.renderer, usize::try_from(target.material_index))
        else {
            return Err(ColoranimError::validation(format!(
                "Target [{i}]: unresolved renderer slot"
            )));
        };
        let path = host.relative_path(root, renderer);

        match target.mode() {
            TargetMode::Color => out.color.push(ResolvedColorTarget {
                path,
                material_index,
                property: target.property.clone(),
                base: material.color(&target.property).to_hsv(),
            }),
            TargetMode::Vector => out.vector.push(ResolvedVectorTarget {
                path,
                material_index,
                property: target.property.clone(),
                base: material.vector(&target.property),
            }),
        }
    }

    tracing::debug!(
        color = out.color.len(),
        vector = out.vector.len(),
        "resolved targets"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/resolver.rs"]
mod tests;
