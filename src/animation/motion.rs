use crate::{
    animation::clip::AnimationClip,
    foundation::error::{ColoranimError, ColoranimResult},
};

/// Thresholds of a centered three-child node.
pub const CENTERED_THRESHOLDS: [f32; 3] = [0.0, 0.5, 1.0];

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A motion a state or blend child can play: a clip or a nested 1-D blend node.
pub enum Motion {
    /// Leaf pose clip.
    Clip(AnimationClip),
    /// 1-D blend over child motions.
    Blend(BlendNode),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Named 1-D blend node driven by one float parameter.
pub struct BlendNode {
    /// Asset name.
    pub name: String,
    /// Controlling parameter.
    pub parameter: String,
    /// Children by strictly increasing threshold.
    pub children: Vec<ChildMotion>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One child of a [`BlendNode`].
pub struct ChildMotion {
    /// Parameter value at which this child has full weight.
    pub threshold: f32,
    /// Child motion.
    pub motion: Motion,
}

impl Motion {
    /// Asset name of the clip or node.
    pub fn name(&self) -> &str {
        match self {
            Self::Clip(clip) => &clip.name,
            Self::Blend(node) => &node.name,
        }
    }

    /// Visit every motion of the tree, children before their parent.
    pub fn visit_post_order<'a>(&'a self, f: &mut impl FnMut(&'a Motion)) {
        if let Self::Blend(node) = self {
            for child in &node.children {
                child.motion.visit_post_order(f);
            }
        }
        f(self);
    }

    /// Parameters referenced anywhere in the tree, in first-use order.
    pub fn parameters(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        self.visit_post_order(&mut |m| {
            if let Motion::Blend(node) = m
                && !out.contains(&node.parameter)
            {
                out.push(node.parameter.clone());
            }
        });
        out
    }

    /// Every clip of the tree in post order.
    pub fn clips(&self) -> Vec<&AnimationClip> {
        let mut out = Vec::new();
        self.visit_post_order(&mut |m| {
            if let Motion::Clip(clip) = m {
                out.push(clip);
            }
        });
        out
    }

    /// Check every clip and node of the tree.
    pub fn validate(&self) -> ColoranimResult<()> {
        match self {
            Self::Clip(clip) => clip.validate(),
            Self::Blend(node) => node.validate(),
        }
    }
}

impl BlendNode {
    /// Node over `children`, which must already be sorted by threshold.
    pub fn new(
        name: impl Into<String>,
        parameter: impl Into<String>,
        children: Vec<ChildMotion>,
    ) -> Self {
        Self {
            name: name.into(),
            parameter: parameter.into(),
            children,
        }
    }

    /// Centered node: `low` at 0, `neutral` at 0.5, `high` at 1.
    pub fn centered(
        name: impl Into<String>,
        parameter: impl Into<String>,
        low: Motion,
        neutral: Motion,
        high: Motion,
    ) -> Self {
        let children = CENTERED_THRESHOLDS
            .into_iter()
            .zip([low, neutral, high])
            .map(|(threshold, motion)| ChildMotion { threshold, motion })
            .collect();
        Self::new(name, parameter, children)
    }

    /// Child thresholds in order.
    pub fn thresholds(&self) -> Vec<f32> {
        self.children.iter().map(|c| c.threshold).collect()
    }

    /// Require a parameter, at least one child, strictly increasing thresholds in `[0, 1]`
    /// and valid children.
    pub fn validate(&self) -> ColoranimResult<()> {
        if self.parameter.trim().is_empty() {
            return Err(ColoranimError::generation(format!(
                "blend node '{}' has no parameter",
                self.name
            )));
        }
        if self.children.is_empty() {
            return Err(ColoranimError::generation(format!(
                "blend node '{}' has no children",
                self.name
            )));
        }
        if self
            .children
            .iter()
            .any(|c| !(0.0..=1.0).contains(&c.threshold))
        {
            return Err(ColoranimError::generation(format!(
                "blend node '{}' has a threshold outside [0, 1]",
                self.name
            )));
        }
        if !self
            .children
            .windows(2)
            .all(|w| w[0].threshold < w[1].threshold)
        {
            return Err(ColoranimError::generation(format!(
                "blend node '{}' thresholds are not strictly increasing",
                self.name
            )));
        }
        for child in &self.children {
            child.motion.validate()?;
        }
        Ok(())
    }
}

impl From<AnimationClip> for Motion {
    fn from(clip: AnimationClip) -> Self {
        Self::Clip(clip)
    }
}

impl From<BlendNode> for Motion {
    fn from(node: BlendNode) -> Self {
        Self::Blend(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
