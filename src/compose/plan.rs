use crate::config::model::{AnimatorConfig, Axis};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Effective axis settings of one animator: owner name, per-axis parameter names and the
/// clamped hue sample count. Disabled axes have no parameter.
pub struct AxisPlan {
    /// Owner object name; prefix of every generated asset name.
    pub owner: String,
    /// Hue parameter.
    pub hue: Option<String>,
    /// Saturation parameter.
    pub saturation: Option<String>,
    /// Value parameter.
    pub value: Option<String>,
    /// Hue samples over one full turn.
    pub hue_steps: u32,
}

impl AxisPlan {
    /// Derive the plan from `config` for an owner named `owner`.
    pub fn from_config(config: &AnimatorConfig, owner: &str) -> Self {
        let param = |axis: Axis| {
            let cfg = config.axis(axis);
            cfg.enabled.then(|| cfg.effective_parameter(owner, axis))
        };
        Self {
            owner: owner.to_string(),
            hue: param(Axis::Hue),
            saturation: param(Axis::Saturation),
            value: param(Axis::Value),
            hue_steps: config.hue.hue_steps(),
        }
    }

    /// Parameter of `axis`, `None` when disabled.
    pub fn parameter(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::Hue => self.hue.as_deref(),
            Axis::Saturation => self.saturation.as_deref(),
            Axis::Value => self.value.as_deref(),
        }
    }

    /// Whether `axis` is enabled.
    pub fn is_enabled(&self, axis: Axis) -> bool {
        self.parameter(axis).is_some()
    }

    /// Enabled axes in nesting order.
    pub fn enabled_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|a| self.is_enabled(*a))
            .collect()
    }

    /// Enabled parameter names, deduplicated, in axis order.
    pub fn parameters(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for axis in Axis::ALL {
            if let Some(p) = self.parameter(axis)
                && !out.iter().any(|q| q == p)
            {
                out.push(p.to_string());
            }
        }
        out
    }
}

/// Hue blend thresholds `i / steps` for `i` in `0..=steps`, plus `0.5` when `steps` is odd.
pub fn hue_thresholds(steps: u32) -> Vec<f32> {
    let n = steps.max(1);
    let mut out: Vec<f32> = (0..=n).map(|i| i as f32 / n as f32).collect();
    if n % 2 == 1 {
        let at = out.partition_point(|t| *t < 0.5);
        out.insert(at, 0.5);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/plan.rs"]
mod tests;
