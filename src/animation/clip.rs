use std::collections::BTreeMap;

use crate::{
    animation::curve::{Curve, CurveBinding},
    foundation::core::FRAME_RATE,
    foundation::error::{ColoranimError, ColoranimResult},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Named bundle of keyframed curves, one per bound scalar.
pub struct AnimationClip {
    /// Asset name.
    pub name: String,
    /// Sample rate in frames per second.
    pub frame_rate: f32,
    /// Curves keyed by binding. Ordered so serialized output is stable.
    #[serde(with = "curve_map")]
    pub curves: BTreeMap<CurveBinding, Curve>,
}

impl AnimationClip {
    /// Empty clip at [`FRAME_RATE`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_rate: FRAME_RATE,
            curves: BTreeMap::new(),
        }
    }

    /// Insert or replace the curve for `binding`.
    pub fn set_curve(&mut self, binding: CurveBinding, curve: Curve) {
        self.curves.insert(binding, curve);
    }

    /// Curve bound to `binding`, if any.
    pub fn curve(&self, binding: &CurveBinding) -> Option<&Curve> {
        self.curves.get(binding)
    }

    /// Length of the longest curve in seconds.
    pub fn duration(&self) -> f32 {
        self.curves.values().map(Curve::duration).fold(0.0, f32::max)
    }

    /// Value of every curve at `time`.
    pub fn sample(&self, time: f32) -> BTreeMap<CurveBinding, f32> {
        self.curves
            .iter()
            .map(|(b, c)| (b.clone(), c.sample(time)))
            .collect()
    }

    /// Require a non-empty clip of positive duration with well-formed curves.
    pub fn validate(&self) -> ColoranimResult<()> {
        if self.curves.is_empty() {
            return Err(ColoranimError::generation(format!(
                "clip '{}' has no curves",
                self.name
            )));
        }
        for (binding, curve) in &self.curves {
            curve.validate().map_err(|e| {
                ColoranimError::generation(format!("clip '{}', {binding}: {e}", self.name))
            })?;
        }
        if self.duration() <= 0.0 {
            return Err(ColoranimError::generation(format!(
                "clip '{}' has zero duration",
                self.name
            )));
        }
        Ok(())
    }
}

// JSON object keys must be strings, so curves serialize as a list of pairs.
mod curve_map {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::animation::curve::{Curve, CurveBinding};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        binding: CurveBinding,
        curve: Curve,
    }

    pub(super) fn serialize<S: Serializer>(
        map: &BTreeMap<CurveBinding, Curve>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<Entry> = map
            .iter()
            .map(|(binding, curve)| Entry {
                binding: binding.clone(),
                curve: curve.clone(),
            })
            .collect();
        entries.serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<BTreeMap<CurveBinding, Curve>, D::Error> {
        let entries = Vec::<Entry>::deserialize(d)?;
        Ok(entries.into_iter().map(|e| (e.binding, e.curve)).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clip.rs"]
mod tests;
