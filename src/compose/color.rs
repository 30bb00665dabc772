//! Nested HSV blend tree for color-mode targets.
//!
//! The tree is built inside out: a hue node (or a single base pose) at the leaves, wrapped
//! by a centered saturation node, wrapped by a centered value node. Because
//! `HSVtoRGB(h, s, v) == v * lerp(white, HSVtoRGB(h, 1, 1), s)` is bilinear in `(s, v)`, the
//! inner motions are rebuilt for every `(s, v)` branch they appear under, so the nested 1-D
//! nodes reproduce the bilinear surface exactly at the 3x3 grid and linearly in between.

use crate::{
    animation::{
        motion::{BlendNode, ChildMotion, Motion},
        pose::build_color_pose,
    },
    compose::plan::{AxisPlan, hue_thresholds},
    config::model::Axis,
    foundation::core::{Hsv, Rgb, wrap_unit},
    foundation::error::{ColoranimError, ColoranimResult},
    resolve::resolver::{ResolvedColorTarget, ResolvedTargets},
};

/// Layer name of the nested color tree.
pub fn color_layer_name(owner: &str) -> String {
    format!("{owner}_HSV")
}

/// Which saturation/value a branch is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    /// The target's own saturation/value.
    Base,
    /// Saturation/value 1.
    Max,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Max => "Max",
        }
    }

    fn apply(self, base: f32) -> f32 {
        match self {
            Self::Base => base,
            Self::Max => 1.0,
        }
    }
}

/// Saturation and value levels of one branch; `None` when the axis is disabled.
#[derive(Clone, Copy, Debug)]
struct Branch {
    s: Option<Level>,
    v: Option<Level>,
}

impl Branch {
    fn suffix(self) -> String {
        let mut out = String::new();
        if let Some(s) = self.s {
            out.push_str("_S");
            out.push_str(s.tag());
        }
        if let Some(v) = self.v {
            out.push_str("_V");
            out.push_str(v.tag());
        }
        out
    }

    fn saturation(self, base: Hsv) -> f32 {
        self.s.map_or(base.s, |l| l.apply(base.s))
    }

    fn value(self, base: Hsv) -> f32 {
        self.v.map_or(base.v, |l| l.apply(base.v))
    }
}

struct ColorComposer<'a> {
    targets: &'a [ResolvedColorTarget],
    plan: &'a AxisPlan,
}

impl ColorComposer<'_> {
    fn owner(&self) -> &str {
        &self.plan.owner
    }

    /// Hue node over the branch's `(s, v)`, or the single base pose when hue is disabled.
    fn inner(&self, branch: Branch) -> Motion {
        let suffix = branch.suffix();
        let Some(parameter) = self.plan.parameter(Axis::Hue) else {
            let name = format!("{}_Base{suffix}", self.owner());
            return build_color_pose(self.targets, &name, |t| {
                Hsv::new(t.base.h, branch.saturation(t.base), branch.value(t.base)).to_rgb()
            })
            .into();
        };

        let node_name = format!("{}_Hue{suffix}", self.owner());
        let children = hue_thresholds(self.plan.hue_steps)
            .into_iter()
            .enumerate()
            .map(|(i, threshold)| {
                let shift = threshold - 0.5;
                let clip = build_color_pose(self.targets, &format!("{node_name}_{i}"), |t| {
                    Hsv::new(
                        wrap_unit(t.base.h + shift),
                        branch.saturation(t.base),
                        branch.value(t.base),
                    )
                    .to_rgb()
                });
                ChildMotion {
                    threshold,
                    motion: clip.into(),
                }
            })
            .collect();
        BlendNode::new(node_name, parameter, children).into()
    }

    /// Saturation node for a fixed value level, or the inner motion when saturation is disabled.
    fn saturation(&self, v: Option<Level>) -> Motion {
        let Some(parameter) = self.plan.parameter(Axis::Saturation) else {
            return self.inner(Branch { s: None, v });
        };

        let suffix = Branch { s: None, v }.suffix();
        let gray_name = format!("{}_Gray{suffix}", self.owner());
        let gray = build_color_pose(self.targets, &gray_name, |t| {
            let value = v.map_or(t.base.v, |l| l.apply(t.base.v));
            Rgb::new(value, value, value)
        });
        BlendNode::centered(
            format!("{}_Saturation{suffix}", self.owner()),
            parameter,
            gray.into(),
            self.inner(Branch {
                s: Some(Level::Base),
                v,
            }),
            self.inner(Branch {
                s: Some(Level::Max),
                v,
            }),
        )
        .into()
    }

    /// Whole tree: value node over the saturation layer, or the saturation layer alone.
    fn compose(&self) -> Motion {
        let Some(parameter) = self.plan.parameter(Axis::Value) else {
            return self.saturation(None);
        };

        let black = build_color_pose(
            self.targets,
            &format!("{}_Black", self.owner()),
            |_| Rgb::black(),
        );
        BlendNode::centered(
            format!("{}_Value", self.owner()),
            parameter,
            black.into(),
            self.saturation(Some(Level::Base)),
            self.saturation(Some(Level::Max)),
        )
        .into()
    }
}

/// Compose the nested HSV tree over every color-mode target.
///
/// Evaluating the tree with every enabled parameter at `0.5` reproduces each target's base
/// color exactly.
pub fn compose_color_tree(targets: &ResolvedTargets, plan: &AxisPlan) -> ColoranimResult<Motion> {
    if targets.color.is_empty() {
        return Err(ColoranimError::generation(format!(
            "'{}' has no color targets",
            plan.owner
        )));
    }
    if plan.enabled_axes().is_empty() {
        return Err(ColoranimError::generation(format!(
            "'{}' has no enabled axis",
            plan.owner
        )));
    }

    let motion = ColorComposer {
        targets: &targets.color,
        plan,
    }
    .compose();
    motion.validate()?;
    Ok(motion)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/color.rs"]
mod tests;
