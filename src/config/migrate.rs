use crate::config::model::{AnimatorConfig, ColorTarget, LegacyTargetFields};

/// Fold legacy single-target fields into a target list.
///
/// Returns `targets` unchanged when the fields were already migrated, carry no renderer, or
/// the list already has entries.
pub fn migrate(legacy: &LegacyTargetFields, targets: &[ColorTarget]) -> Vec<ColorTarget> {
    let mut out = targets.to_vec();
    if legacy.migrated {
        return out;
    }
    let Some(renderer) = legacy.renderer else {
        return out;
    };
    if out.is_empty() {
        out.push(ColorTarget::new(
            renderer,
            legacy.material_index,
            legacy.property.clone(),
        ));
    }
    out
}

impl AnimatorConfig {
    /// Apply [`migrate`] and mark the legacy fields as consumed.
    pub fn migrated(mut self) -> Self {
        if let Some(legacy) = self.legacy.take() {
            self.targets = migrate(&legacy, &self.targets);
            self.legacy = Some(LegacyTargetFields {
                renderer: None,
                migrated: true,
                ..legacy
            });
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/migrate.rs"]
mod tests;
