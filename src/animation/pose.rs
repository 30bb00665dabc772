use crate::{
    animation::{
        clip::AnimationClip,
        curve::{Channel, Curve},
    },
    foundation::core::{FRAME_RATE, Rgb, Vec4},
    resolve::resolver::{ResolvedColorTarget, ResolvedVectorTarget},
};

/// Second-key time of every pose curve: one frame.
pub const POSE_DURATION: f32 = 1.0 / FRAME_RATE;

/// Constant two-key curve holding `value` over one frame.
pub fn pose_curve(value: f32) -> Curve {
    Curve::constant(value, POSE_DURATION)
}

/// Build a pose clip writing R, G and B of every color target.
pub fn build_color_pose<F>(
    targets: &[ResolvedColorTarget],
    name: &str,
    value_fn: F,
) -> AnimationClip
where
    F: Fn(&ResolvedColorTarget) -> Rgb,
{
    let mut clip = AnimationClip::new(name);
    for target in targets {
        let rgb = value_fn(target).to_array();
        for (channel, value) in Channel::RGB.into_iter().zip(rgb) {
            clip.set_curve(target.binding(channel), pose_curve(value));
        }
    }
    clip
}

/// Build a pose clip writing the `channels` subset of x/y/z of every vector target.
///
/// `w` is always written as `1.0`, whatever `value_fn` returns, so the host never resets it.
pub fn build_vector_pose<F>(
    targets: &[ResolvedVectorTarget],
    name: &str,
    channels: &[Channel],
    value_fn: F,
) -> AnimationClip
where
    F: Fn(&ResolvedVectorTarget) -> Vec4,
{
    let mut clip = AnimationClip::new(name);
    for target in targets {
        let v = value_fn(target);
        for channel in channels {
            let value = match channel {
                Channel::X => v.x,
                Channel::Y => v.y,
                Channel::Z => v.z,
                _ => continue,
            };
            clip.set_curve(target.binding(*channel), pose_curve(value));
        }
        clip.set_curve(target.binding(Channel::W), pose_curve(1.0));
    }
    clip
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
