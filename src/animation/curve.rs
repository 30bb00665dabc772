use crate::foundation::error::{ColoranimError, ColoranimResult};

/// Component type a curve binding addresses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum BindingTarget {
    /// A material property reached through the object's renderer.
    Renderer,
}

/// One scalar channel of a color or vector property.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Channel {
    /// Color red.
    R,
    /// Color green.
    G,
    /// Color blue.
    B,
    /// Vector x.
    X,
    /// Vector y.
    Y,
    /// Vector z.
    Z,
    /// Vector w.
    W,
}

impl Channel {
    /// Color channels in write order.
    pub const RGB: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Suffix used in property paths.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
        }
    }
}

/// Property path of one material channel: `material.<prop>.<ch>` for slot 0,
/// `material[<slot>].<prop>.<ch>` otherwise.
pub fn material_property_path(slot: usize, property: &str, channel: Channel) -> String {
    let ch = channel.suffix();
    if slot == 0 {
        format!("material.{property}.{ch}")
    } else {
        format!("material[{slot}].{property}.{ch}")
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Address of an animated scalar: object path, component type and property path.
pub struct CurveBinding {
    /// Object path relative to the avatar root.
    pub path: String,
    /// Component type tag.
    pub target: BindingTarget,
    /// Property path, see [`material_property_path`].
    pub property: String,
}

impl CurveBinding {
    /// Binding of a material channel on the renderer at `path`.
    pub fn material(path: &str, slot: usize, property: &str, channel: Channel) -> Self {
        Self {
            path: path.to_string(),
            target: BindingTarget::Renderer,
            property: material_property_path(slot, property, channel),
        }
    }
}

impl std::fmt::Display for CurveBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.property)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Hermite keyframe.
pub struct Keyframe {
    /// Time in seconds.
    pub time: f32,
    /// Value at `time`.
    pub value: f32,
    /// Incoming slope.
    pub in_tangent: f32,
    /// Outgoing slope.
    pub out_tangent: f32,
}

impl Keyframe {
    /// Keyframe with flat tangents.
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }
}

/// Set every tangent to the secant slope toward its neighbour; open ends stay flat.
pub fn set_linear_tangents(keys: &mut [Keyframe]) {
    let secant = |a: &Keyframe, b: &Keyframe| {
        let dt = b.time - a.time;
        if dt == 0.0 { 0.0 } else { (b.value - a.value) / dt }
    };

    for i in 0..keys.len() {
        let in_tangent = if i > 0 {
            secant(&keys[i - 1], &keys[i])
        } else {
            0.0
        };
        let out_tangent = if i + 1 < keys.len() {
            secant(&keys[i], &keys[i + 1])
        } else {
            0.0
        };
        keys[i].in_tangent = in_tangent;
        keys[i].out_tangent = out_tangent;
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Keyframed scalar curve.
pub struct Curve {
    /// Keys sorted by strictly increasing time.
    pub keys: Vec<Keyframe>,
}

impl Curve {
    /// Curve through `points` with linear tangents.
    pub fn linear(points: &[(f32, f32)]) -> Self {
        let mut keys: Vec<Keyframe> = points.iter().map(|(t, v)| Keyframe::new(*t, *v)).collect();
        set_linear_tangents(&mut keys);
        Self { keys }
    }

    /// Two-key constant curve spanning `[0, duration]`.
    pub fn constant(value: f32, duration: f32) -> Self {
        Self::linear(&[(0.0, value), (duration, value)])
    }

    /// Time of the last key.
    pub fn duration(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    /// Require at least one key and strictly increasing times.
    pub fn validate(&self) -> ColoranimResult<()> {
        if self.keys.is_empty() {
            return Err(ColoranimError::generation("curve has no keys"));
        }
        if !self.keys.windows(2).all(|w| w[0].time < w[1].time) {
            return Err(ColoranimError::generation(
                "curve keys must have strictly increasing times",
            ));
        }
        Ok(())
    }

    /// Evaluate with cubic Hermite interpolation, clamping outside the key range.
    pub fn sample(&self, time: f32) -> f32 {
        let Some(first) = self.keys.first() else {
            return 0.0;
        };
        let idx = self.keys.partition_point(|k| k.time <= time);
        if idx == 0 {
            return first.value;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value;
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let dt = b.time - a.time;
        let t = (time - a.time) / dt;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * a.value + h10 * dt * a.out_tangent + h01 * b.value + h11 * dt * b.in_tangent
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
