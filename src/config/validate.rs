use crate::{
    config::model::{AnimatorConfig, ColorTarget, HueAnimatorConfig, TargetMode},
    scene::host::{Material, SceneHost, ShaderPropertyType},
};

/// Why a single [`ColorTarget`] cannot be animated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetIssue {
    /// No renderer object configured, or the object carries no renderer.
    #[error("Renderer is not set.")]
    MissingRenderer,
    /// Material slot outside the renderer's slot list.
    #[error("Material Index {index} is out of range (0-{}).", last_slot(.len))]
    SlotOutOfRange {
        /// Configured slot.
        index: i32,
        /// Number of slots on the renderer.
        len: usize,
    },
    /// The slot exists but holds no material.
    #[error("Material at index {index} is null.")]
    NullMaterial {
        /// Configured slot.
        index: i32,
    },
    /// The material has no shader.
    #[error("Material's shader is null.")]
    NullShader,
    /// The shader does not declare the property.
    #[error("Material does not have property '{property}'.")]
    MissingProperty {
        /// Configured property name.
        property: String,
    },
    /// The declared type disagrees with the mode implied by the property name.
    #[error("Property '{property}' is not a {expected} type (found: {found}).")]
    TypeMismatch {
        /// Configured property name.
        property: String,
        /// Type required by the target mode.
        expected: ShaderPropertyType,
        /// Type declared by the shader.
        found: ShaderPropertyType,
    },
}

fn last_slot(len: &usize) -> i64 {
    *len as i64 - 1
}

/// Resolve the material behind `target`, checking every precondition of the resolver.
pub fn check_target<'h, H: SceneHost + ?Sized>(
    host: &'h H,
    target: &ColorTarget,
) -> Result<&'h Material, TargetIssue> {
    check_target_as(host, target, target.mode())
}

fn check_target_as<'h, H: SceneHost + ?Sized>(
    host: &'h H,
    target: &ColorTarget,
    mode: TargetMode,
) -> Result<&'h Material, TargetIssue> {
    let slots = target
        .renderer
        .and_then(|r| host.shared_materials(r))
        .ok_or(TargetIssue::MissingRenderer)?;

    let index = usize::try_from(target.material_index)
        .ok()
        .filter(|i| *i < slots.len())
        .ok_or(TargetIssue::SlotOutOfRange {
            index: target.material_index,
            len: slots.len(),
        })?;

    let material = slots[index].as_ref().ok_or(TargetIssue::NullMaterial {
        index: target.material_index,
    })?;

    if material.shader.is_none() {
        return Err(TargetIssue::NullShader);
    }

    let found = material
        .property_type(&target.property)
        .ok_or_else(|| TargetIssue::MissingProperty {
            property: target.property.clone(),
        })?;

    let expected = match mode {
        TargetMode::Color => ShaderPropertyType::Color,
        TargetMode::Vector => ShaderPropertyType::Vector,
    };
    if found != expected {
        return Err(TargetIssue::TypeMismatch {
            property: target.property.clone(),
            expected,
            found,
        });
    }

    Ok(material)
}

/// Whether `config` may enter generation.
pub fn validate<H: SceneHost + ?Sized>(config: &AnimatorConfig, host: &H) -> bool {
    diagnostic(config, host).is_none()
}

/// First validation failure of `config`, or `None` when it is valid.
pub fn diagnostic<H: SceneHost + ?Sized>(config: &AnimatorConfig, host: &H) -> Option<String> {
    if config.targets.is_empty() {
        return Some("No material targets are configured.".to_string());
    }

    for (i, target) in config.targets.iter().enumerate() {
        if let Err(issue) = check_target(host, target) {
            return Some(format!("Target [{i}]: {issue}"));
        }
    }

    if config.enabled_axes().is_empty() {
        return Some("At least one axis (Hue, Saturation, or Value) must be enabled.".to_string());
    }

    None
}

/// One-line description of what a valid `config` generates.
pub fn summary(config: &AnimatorConfig) -> String {
    let targets = config.targets.len();
    let axes = config.enabled_axes().len();
    let menu = if axes == 1 {
        "generates 1 radial puppet".to_string()
    } else {
        format!("generates a sub-menu with {axes} radial puppets")
    };
    format!("{targets} material target(s); {menu}.")
}

/// First validation failure of a hue-cycle animator, or `None` when it is valid.
pub fn hue_animator_diagnostic<H: SceneHost + ?Sized>(
    config: &HueAnimatorConfig,
    host: &H,
) -> Option<String> {
    match check_target_as(host, &config.as_target(), TargetMode::Color) {
        Ok(_) => None,
        Err(TargetIssue::MissingRenderer) => Some("Target Renderer is not set.".to_string()),
        Err(issue) => Some(issue.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;
