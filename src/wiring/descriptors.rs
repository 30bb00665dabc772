use crate::{
    compose::plan::AxisPlan,
    config::model::{AnimatorConfig, HueAnimatorConfig},
    controller::assembler::ValueType,
};

/// Neutral sync default of every HSV axis parameter.
pub const NEUTRAL_DEFAULT: f32 = 0.5;

/// Sync default of the hue-cycle parameter (start of the cycle).
pub const HUE_CYCLE_DEFAULT: f32 = 0.0;

/// Playable layer the controller is merged into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    /// Effects layer.
    Fx,
}

/// How binding paths are interpreted when merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Paths are relative to the avatar root.
    Absolute,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Request to merge a generated controller into the avatar.
pub struct MergeAnimator {
    /// Controller name.
    pub controller: String,
    /// Destination layer.
    pub layer_type: LayerType,
    /// Path interpretation.
    pub path_mode: PathMode,
    /// Follow the avatar's write-defaults setting.
    pub match_write_defaults: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One synced (or local) avatar parameter.
pub struct ParameterConfig {
    /// Parameter name.
    pub name: String,
    /// Sync type.
    pub value_type: ValueType,
    /// Value before the user touches the control.
    pub default_value: f32,
    /// Persist across sessions.
    pub saved: bool,
    /// Skip network sync.
    pub local_only: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Expression menu control.
pub enum MenuControl {
    /// Radial dial bound to one float parameter.
    RadialPuppet {
        /// Label.
        name: String,
        /// Driven parameter.
        parameter: String,
        /// Optional icon reference.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    /// Sub-menu grouping several controls.
    SubMenu {
        /// Label.
        name: String,
        /// Optional icon reference.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        /// Child controls.
        controls: Vec<MenuControl>,
    },
}

impl MenuControl {
    /// Number of radial puppets in this control tree.
    pub fn radial_count(&self) -> usize {
        match self {
            Self::RadialPuppet { .. } => 1,
            Self::SubMenu { controls, .. } => controls.iter().map(Self::radial_count).sum(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Everything attached to the owner object for one generated controller.
pub struct Wiring {
    /// Merge request.
    pub merge: MergeAnimator,
    /// Parameter declarations, unique by name.
    pub parameters: Vec<ParameterConfig>,
    /// Menu entry.
    pub menu: MenuControl,
}

fn merge(controller: &str) -> MergeAnimator {
    MergeAnimator {
        controller: controller.to_string(),
        layer_type: LayerType::Fx,
        path_mode: PathMode::Absolute,
        match_write_defaults: true,
    }
}

/// Descriptors for an HSV animator whose controller is `controller`.
///
/// One parameter entry per distinct enabled parameter. A single enabled axis becomes one
/// radial named after the owner; several become a sub-menu with one radial per axis.
pub fn wire(config: &AnimatorConfig, plan: &AxisPlan, controller: &str) -> Wiring {
    let mut parameters: Vec<ParameterConfig> = Vec::new();
    let mut radials = Vec::new();

    for axis in plan.enabled_axes() {
        let Some(name) = plan.parameter(axis) else {
            continue;
        };
        let axis_cfg = config.axis(axis);
        if !parameters.iter().any(|p| p.name == name) {
            parameters.push(ParameterConfig {
                name: name.to_string(),
                value_type: ValueType::Float,
                default_value: NEUTRAL_DEFAULT,
                saved: axis_cfg.saved,
                local_only: !axis_cfg.synced,
            });
        }
        radials.push((axis, name.to_string(), axis_cfg.icon.clone()));
    }

    let menu = if radials.len() == 1 {
        let (_, parameter, icon) = radials.remove(0);
        MenuControl::RadialPuppet {
            name: plan.owner.clone(),
            parameter,
            icon: icon.or_else(|| config.menu_icon.clone()),
        }
    } else {
        MenuControl::SubMenu {
            name: plan.owner.clone(),
            icon: config.menu_icon.clone(),
            controls: radials
                .into_iter()
                .map(|(axis, parameter, icon)| MenuControl::RadialPuppet {
                    name: axis.name().to_string(),
                    parameter,
                    icon: icon.or_else(|| config.menu_icon.clone()),
                })
                .collect(),
        }
    };

    tracing::debug!(
        controller,
        parameters = parameters.len(),
        radials = menu.radial_count(),
        "wired animator"
    );
    Wiring {
        merge: merge(controller),
        parameters,
        menu,
    }
}

/// Descriptors for a hue-cycle animator: one parameter (default 0) and one radial.
pub fn wire_hue_animator(config: &HueAnimatorConfig, owner: &str, controller: &str) -> Wiring {
    Wiring {
        merge: merge(controller),
        parameters: vec![ParameterConfig {
            name: config.parameter.clone(),
            value_type: ValueType::Float,
            default_value: HUE_CYCLE_DEFAULT,
            saved: config.saved,
            local_only: !config.synced,
        }],
        menu: MenuControl::RadialPuppet {
            name: owner.to_string(),
            parameter: config.parameter.clone(),
            icon: config.menu_icon.clone(),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wiring/descriptors.rs"]
mod tests;
