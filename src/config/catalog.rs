use crate::config::model::TargetMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// A well-known animatable property of the lilToon shader family.
pub struct KnownProperty {
    /// Shader property name.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl KnownProperty {
    /// Animation mode implied by the name.
    pub fn mode(&self) -> TargetMode {
        TargetMode::of_property(self.name)
    }
}

const fn known(name: &'static str, label: &'static str) -> KnownProperty {
    KnownProperty { name, label }
}

/// Properties offered by the authoring UI, in display order.
pub const KNOWN_PROPERTIES: &[KnownProperty] = &[
    known("_Color", "Main color"),
    known("_Color2nd", "Main color 2nd"),
    known("_Color3rd", "Main color 3rd"),
    known("_EmissionColor", "Emission"),
    known("_Emission2ndColor", "Emission 2nd"),
    known("_MatCapColor", "MatCap"),
    known("_MatCap2ndColor", "MatCap 2nd"),
    known("_RimColor", "Rim light"),
    known("_RimIndirColor", "Rim light (indirect)"),
    known("_RimShadeColor", "Rim shade"),
    known("_BacklightColor", "Backlight"),
    known("_ShadowColor", "Shadow 1st"),
    known("_Shadow2ndColor", "Shadow 2nd"),
    known("_Shadow3rdColor", "Shadow 3rd"),
    known("_OutlineColor", "Outline"),
    known("_OutlineLitColor", "Outline (lit)"),
    known("_GlitterColor", "Glitter"),
    known("_ReflectionColor", "Reflection"),
    known("_MainTexHSVG", "Main texture HSVG"),
    known("_OutlineTexHSVG", "Outline texture HSVG"),
];

/// Look up a catalog entry by property name.
pub fn known_property(name: &str) -> Option<&'static KnownProperty> {
    KNOWN_PROPERTIES.iter().find(|p| p.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/config/catalog.rs"]
mod tests;
