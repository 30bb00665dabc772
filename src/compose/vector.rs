use crate::{
    animation::{
        curve::Channel,
        motion::{BlendNode, CENTERED_THRESHOLDS},
        pose::build_vector_pose,
    },
    compose::plan::AxisPlan,
    config::model::{Axis, HSVG_SUFFIX},
    controller::assembler::LayerSpec,
    foundation::core::Vec4,
    foundation::error::{ColoranimError, ColoranimResult},
    resolve::resolver::{ResolvedTargets, ResolvedVectorTarget},
};

/// Saturation and value multipliers at parameter 1.
pub const VECTOR_AXIS_MAX: f32 = 2.0;

/// Layer (and blend node) name of one HSVG axis.
pub fn vector_layer_name(owner: &str, axis: Axis) -> String {
    format!("{owner}_{HSVG_SUFFIX}_{axis}")
}

fn channel(axis: Axis) -> Channel {
    match axis {
        Axis::Hue => Channel::X,
        Axis::Saturation => Channel::Y,
        Axis::Value => Channel::Z,
    }
}

/// Component of `base` driven by `axis` at one of the centered thresholds.
fn axis_value(axis: Axis, base: Vec4, threshold: f32) -> f32 {
    match axis {
        Axis::Hue => base.x + (threshold - 0.5),
        Axis::Saturation => scale_level(base.y, threshold),
        Axis::Value => scale_level(base.z, threshold),
    }
}

/// `0` below the center, `base` at it, [`VECTOR_AXIS_MAX`] above.
fn scale_level(base: f32, threshold: f32) -> f32 {
    if threshold == 0.5 {
        base
    } else if threshold < 0.5 {
        0.0
    } else {
        VECTOR_AXIS_MAX
    }
}

fn with_component(mut v: Vec4, ch: Channel, value: f32) -> Vec4 {
    match ch {
        Channel::X => v.x = value,
        Channel::Y => v.y = value,
        Channel::Z => v.z = value,
        _ => {}
    }
    v
}

/// Build one independent layer per enabled axis over every vector-mode target.
///
/// Each pose writes its axis component, pins the components of disabled axes to their base
/// value and forces the fourth component to `1.0`.
pub fn compose_vector_layers(
    targets: &ResolvedTargets,
    plan: &AxisPlan,
) -> ColoranimResult<Vec<LayerSpec>> {
    if targets.vector.is_empty() {
        return Err(ColoranimError::generation(format!(
            "'{}' has no HSVG targets",
            plan.owner
        )));
    }

    let pinned: Vec<Channel> = Axis::ALL
        .into_iter()
        .filter(|a| !plan.is_enabled(*a))
        .map(channel)
        .collect();

    let mut layers = Vec::new();
    for axis in plan.enabled_axes() {
        let Some(parameter) = plan.parameter(axis) else {
            continue;
        };
        let ch = channel(axis);
        let mut written = vec![ch];
        written.extend(pinned.iter().copied());

        let name = vector_layer_name(&plan.owner, axis);
        let pose = |tag: &str, t: f32| {
            build_vector_pose(
                &targets.vector,
                &format!("{name}_{tag}"),
                &written,
                |target: &ResolvedVectorTarget| {
                    with_component(target.base, ch, axis_value(axis, target.base, t))
                },
            )
        };
        let [t_low, t_neutral, t_high] = CENTERED_THRESHOLDS;
        let low = pose("Min", t_low);
        let neutral = pose("Base", t_neutral);
        let high = pose("Max", t_high);

        let node = BlendNode::centered(
            name.clone(),
            parameter,
            low.into(),
            neutral.into(),
            high.into(),
        );
        node.validate()?;
        layers.push(LayerSpec::new(name, node));
    }

    if layers.is_empty() {
        return Err(ColoranimError::generation(format!(
            "'{}' has no enabled axis",
            plan.owner
        )));
    }
    Ok(layers)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/vector.rs"]
mod tests;
