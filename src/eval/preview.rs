use std::collections::BTreeMap;

use crate::{
    animation::{
        curve::CurveBinding,
        motion::{ChildMotion, Motion},
    },
    controller::assembler::ControllerAsset,
    foundation::error::{ColoranimError, ColoranimResult},
};

/// Parameter values keyed by name.
pub type ParameterValues = BTreeMap<String, f32>;

/// Property values keyed by binding.
pub type PropertyValues = BTreeMap<CurveBinding, f32>;

/// Evaluate `motion` at normalized time 0.
pub fn sample_motion(motion: &Motion, params: &ParameterValues) -> ColoranimResult<PropertyValues> {
    sample_motion_at(motion, params, 0.0)
}

/// Evaluate `motion` with clips sampled at `normalized_time` of their length.
///
/// Blend nodes interpolate linearly between the two children whose thresholds bracket the
/// parameter, clamped to the end thresholds. A binding missing from one of the two children
/// takes the other child's value.
pub fn sample_motion_at(
    motion: &Motion,
    params: &ParameterValues,
    normalized_time: f32,
) -> ColoranimResult<PropertyValues> {
    match motion {
        Motion::Clip(clip) => Ok(clip.sample(normalized_time * clip.duration())),
        Motion::Blend(node) => {
            let value = *params.get(&node.parameter).ok_or_else(|| {
                ColoranimError::evaluation(format!(
                    "blend node '{}' needs parameter '{}'",
                    node.name, node.parameter
                ))
            })?;
            let value = finite(&node.parameter, value)?;
            let Some((a, b, alpha)) = bracket(&node.children, value) else {
                return Err(ColoranimError::evaluation(format!(
                    "blend node '{}' has no children",
                    node.name
                )));
            };

            let lo = sample_motion_at(&a.motion, params, normalized_time)?;
            let Some(b) = b else {
                return Ok(lo);
            };
            let hi = sample_motion_at(&b.motion, params, normalized_time)?;
            Ok(mix(lo, hi, alpha))
        }
    }
}

fn finite(parameter: &str, value: f32) -> ColoranimResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColoranimError::evaluation(format!(
            "parameter '{parameter}' is not a finite number ({value})"
        )))
    }
}

/// Children bracketing `value` and the weight of the upper one. An exact threshold hit
/// returns that child alone.
fn bracket(
    children: &[ChildMotion],
    value: f32,
) -> Option<(&ChildMotion, Option<&ChildMotion>, f32)> {
    let first = children.first()?;
    let last = children.last()?;
    if value <= first.threshold {
        return Some((first, None, 0.0));
    }
    if value >= last.threshold {
        return Some((last, None, 0.0));
    }

    let idx = children.partition_point(|c| c.threshold <= value);
    let a = &children[idx - 1];
    if a.threshold == value {
        return Some((a, None, 0.0));
    }
    let b = &children[idx];
    let alpha = (value - a.threshold) / (b.threshold - a.threshold);
    Some((a, Some(b), alpha))
}

fn mix(lo: PropertyValues, mut hi: PropertyValues, alpha: f32) -> PropertyValues {
    let mut out = PropertyValues::new();
    for (binding, a) in lo {
        let v = match hi.remove(&binding) {
            Some(b) => a + (b - a) * alpha,
            None => a,
        };
        out.insert(binding, v);
    }
    out.extend(hi);
    out
}

/// Evaluate every layer of `controller` in order; later layers override earlier ones.
///
/// States driven by a time parameter sample their motion at that parameter's value as
/// normalized time.
pub fn sample_controller(
    controller: &ControllerAsset,
    params: &ParameterValues,
) -> ColoranimResult<PropertyValues> {
    let mut out = PropertyValues::new();
    for layer in &controller.layers {
        let Some(state) = layer.state_machine.default_state() else {
            continue;
        };
        let time = match &state.time_parameter {
            Some(p) => {
                let value = *params.get(p).ok_or_else(|| {
                    ColoranimError::evaluation(format!(
                        "state '{}' needs time parameter '{p}'",
                        state.name
                    ))
                })?;
                finite(p, value)?
            }
            None => 0.0,
        };
        let values = sample_motion_at(&state.motion, params, time.clamp(0.0, 1.0))?;
        for (binding, v) in values {
            let blended = match out.get(&binding) {
                Some(prev) if layer.weight < 1.0 => prev + (v - prev) * layer.weight,
                _ => v,
            };
            out.insert(binding, blended);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/preview.rs"]
mod tests;
