use crate::scene::host::ObjectId;

/// Hue sample count bounds accepted by the hue blend node.
pub const HUE_STEPS_MIN: u32 = 8;
/// Upper bound of the hue sample count.
pub const HUE_STEPS_MAX: u32 = 72;
/// Hue sample count used when none is configured.
pub const DEFAULT_HUE_STEPS: u32 = 36;

/// Property animated when a target does not name one.
pub const DEFAULT_PROPERTY: &str = "_EmissionColor";

/// Suffix that marks a property as a four-component HSVG vector.
pub const HSVG_SUFFIX: &str = "HSVG";

/// How a target's property is animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TargetMode {
    /// RGB color property, driven by the nested HSV tree.
    Color,
    /// HSVG vector property, driven by independent per-axis layers.
    Vector,
}

impl TargetMode {
    /// Derive the mode from a property name: `...HSVG` names are vectors.
    pub fn of_property(name: &str) -> Self {
        if name.ends_with(HSVG_SUFFIX) {
            Self::Vector
        } else {
            Self::Color
        }
    }
}

/// One of the three controllable color axes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Axis {
    /// Hue rotation.
    Hue,
    /// Saturation.
    Saturation,
    /// Value (brightness).
    Value,
}

impl Axis {
    /// All axes in nesting order (innermost first).
    pub const ALL: [Axis; 3] = [Axis::Hue, Axis::Saturation, Axis::Value];

    /// Display name used in generated names and menu labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hue => "Hue",
            Self::Saturation => "Saturation",
            Self::Value => "Value",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A controllable material color property on one renderer slot.
pub struct ColorTarget {
    /// Object carrying the renderer.
    #[serde(default)]
    pub renderer: Option<ObjectId>,
    /// Material slot on the renderer. Negative values never validate.
    #[serde(default)]
    pub material_index: i32,
    /// Shader property name, e.g. `_EmissionColor` or `_MainTexHSVG`.
    #[serde(default = "default_property")]
    pub property: String,
}

fn default_property() -> String {
    DEFAULT_PROPERTY.to_string()
}

impl ColorTarget {
    /// Target on `renderer` slot `material_index`.
    pub fn new(renderer: ObjectId, material_index: i32, property: impl Into<String>) -> Self {
        Self {
            renderer: Some(renderer),
            material_index,
            property: property.into(),
        }
    }

    /// Animation mode derived from the property name.
    pub fn mode(&self) -> TargetMode {
        TargetMode::of_property(&self.property)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-axis control settings.
pub struct AxisConfig {
    /// Whether the axis gets a parameter and blend structure.
    pub enabled: bool,
    /// Parameter name; blank derives `<owner>_<Axis>`.
    #[serde(default)]
    pub parameter: String,
    /// Hue sample count, clamped to `[8, 72]`. Ignored by the other axes.
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Persist the parameter value across sessions.
    #[serde(default = "default_true")]
    pub saved: bool,
    /// Sync the parameter over the network.
    #[serde(default = "default_true")]
    pub synced: bool,
    /// Optional icon reference for this axis' radial control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_steps() -> u32 {
    DEFAULT_HUE_STEPS
}

fn default_true() -> bool {
    true
}

impl AxisConfig {
    /// Enabled axis with the given parameter name and default flags.
    pub fn enabled(parameter: impl Into<String>) -> Self {
        Self {
            enabled: true,
            parameter: parameter.into(),
            ..Self::disabled(String::new())
        }
    }

    /// Disabled axis with the given parameter name and default flags.
    pub fn disabled(parameter: impl Into<String>) -> Self {
        Self {
            enabled: false,
            parameter: parameter.into(),
            steps: DEFAULT_HUE_STEPS,
            saved: true,
            synced: true,
            icon: None,
        }
    }

    /// Parameter name after blank-name derivation.
    pub fn effective_parameter(&self, owner: &str, axis: Axis) -> String {
        let name = self.parameter.trim();
        if name.is_empty() {
            format!("{owner}_{axis}")
        } else {
            name.to_string()
        }
    }

    /// Hue sample count clamped into the supported range.
    pub fn hue_steps(&self) -> u32 {
        self.steps.clamp(HUE_STEPS_MIN, HUE_STEPS_MAX)
    }
}

fn default_hue_axis() -> AxisConfig {
    AxisConfig::enabled("HueRotation")
}

fn default_saturation_axis() -> AxisConfig {
    AxisConfig::disabled("SaturationControl")
}

fn default_value_axis() -> AxisConfig {
    AxisConfig::disabled("ValueControl")
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Single-target fields written by older versions of the animator, kept for migration.
pub struct LegacyTargetFields {
    /// Renderer of the single legacy target.
    #[serde(default)]
    pub renderer: Option<ObjectId>,
    /// Material slot of the legacy target.
    #[serde(default)]
    pub material_index: i32,
    /// Property of the legacy target.
    #[serde(default = "default_property")]
    pub property: String,
    /// Set once the fields have been folded into the target list.
    #[serde(default)]
    pub migrated: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Configuration of one HSV animator instance, attached to its owner object.
pub struct AnimatorConfig {
    /// Object owning the configuration; its name seeds generated names.
    pub owner: ObjectId,
    /// Material properties driven by this instance.
    #[serde(default)]
    pub targets: Vec<ColorTarget>,
    /// Hue axis.
    #[serde(default = "default_hue_axis")]
    pub hue: AxisConfig,
    /// Saturation axis.
    #[serde(default = "default_saturation_axis")]
    pub saturation: AxisConfig,
    /// Value axis.
    #[serde(default = "default_value_axis")]
    pub value: AxisConfig,
    /// Icon for the sub-menu (or the sole radial when its axis has none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
    /// Pre-list single-target fields, folded in by [`crate::migrate`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyTargetFields>,
}

impl AnimatorConfig {
    /// New instance with default axes (hue only) and no targets.
    pub fn new(owner: ObjectId) -> Self {
        Self {
            owner,
            targets: Vec::new(),
            hue: default_hue_axis(),
            saturation: default_saturation_axis(),
            value: default_value_axis(),
            menu_icon: None,
            legacy: None,
        }
    }

    /// Configuration of `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Hue => &self.hue,
            Axis::Saturation => &self.saturation,
            Axis::Value => &self.value,
        }
    }

    /// Mutable configuration of `axis`.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConfig {
        match axis {
            Axis::Hue => &mut self.hue,
            Axis::Saturation => &mut self.saturation,
            Axis::Value => &mut self.value,
        }
    }

    /// Enabled axes in nesting order.
    pub fn enabled_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|a| self.axis(*a).enabled)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Configuration of the single-target hue-cycle animator (the predecessor of
/// [`AnimatorConfig`]). Its parameter drives the clip's normalized time.
pub struct HueAnimatorConfig {
    /// Object owning the configuration.
    pub owner: ObjectId,
    /// Object carrying the renderer.
    #[serde(default)]
    pub renderer: Option<ObjectId>,
    /// Material slot on the renderer.
    #[serde(default)]
    pub material_index: i32,
    /// Color property name.
    #[serde(default = "default_property")]
    pub property: String,
    /// Number of hue samples over one full turn, clamped to `[8, 72]`.
    #[serde(default = "default_steps")]
    pub steps: u32,
    /// Parameter name.
    #[serde(default = "default_hue_cycle_parameter")]
    pub parameter: String,
    /// Persist the parameter value.
    #[serde(default = "default_true")]
    pub saved: bool,
    /// Sync the parameter over the network.
    #[serde(default = "default_true")]
    pub synced: bool,
    /// Optional radial control icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
}

fn default_hue_cycle_parameter() -> String {
    "HueRotation".to_string()
}

impl HueAnimatorConfig {
    /// Hue sample count clamped into the supported range.
    pub fn hue_steps(&self) -> u32 {
        self.steps.clamp(HUE_STEPS_MIN, HUE_STEPS_MAX)
    }

    /// The renderer/slot/property triple as a list target.
    pub fn as_target(&self) -> ColorTarget {
        ColorTarget {
            renderer: self.renderer,
            material_index: self.material_index,
            property: self.property.clone(),
        }
    }
}
