use crate::{
    animation::{
        clip::AnimationClip,
        curve::{Channel, Curve, Keyframe, set_linear_tangents},
    },
    controller::assembler::LayerSpec,
    foundation::error::ColoranimResult,
    resolve::resolver::ResolvedColorTarget,
};

/// State name of the hue-cycle layer.
pub const HUE_CYCLE_STATE: &str = "HueRotation";

/// Name of the hue-cycle clip.
pub fn hue_cycle_clip_name(owner: &str) -> String {
    format!("{owner}_HueRotation")
}

/// Name of the hue-cycle controller and of its single layer.
pub fn hue_cycle_controller_name(parameter: &str) -> String {
    format!("HueShift_{parameter}")
}

/// One-second clip turning the hue of `target` through a full cycle in `steps` linear segments.
///
/// Key `i` sits at time `i / steps` and holds the base color with its hue advanced by
/// `i / steps`, so the first and last keys are equal.
pub fn build_hue_cycle_clip(
    target: &ResolvedColorTarget,
    owner: &str,
    steps: u32,
) -> ColoranimResult<AnimationClip> {
    let n = steps.max(1);
    let colors: Vec<(f32, [f32; 3])> = (0..=n)
        .map(|i| {
            let t = i as f32 / n as f32;
            (t, target.base.shift_hue(t).to_rgb().to_array())
        })
        .collect();

    let mut clip = AnimationClip::new(hue_cycle_clip_name(owner));
    for (c, channel) in Channel::RGB.into_iter().enumerate() {
        let mut keys: Vec<Keyframe> = colors
            .iter()
            .map(|(t, rgb)| Keyframe::new(*t, rgb[c]))
            .collect();
        set_linear_tangents(&mut keys);
        clip.set_curve(target.binding(channel), Curve { keys });
    }
    clip.validate()?;
    Ok(clip)
}

/// The hue-cycle layer: one state playing the clip with `parameter` as its normalized time.
pub fn hue_cycle_layer(clip: AnimationClip, parameter: &str) -> LayerSpec {
    LayerSpec::new(hue_cycle_controller_name(parameter), clip)
        .with_state(HUE_CYCLE_STATE)
        .with_time_parameter(parameter)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/hue_cycle.rs"]
mod tests;
