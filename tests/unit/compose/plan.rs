use super::*;
use crate::{config::model::AxisConfig, scene::host::ObjectId};

#[test]
fn blank_parameters_derive_from_owner_name() {
    let mut config = AnimatorConfig::new(ObjectId(0));
    config.hue = AxisConfig::enabled("");
    config.value = AxisConfig::enabled("  ");
    let plan = AxisPlan::from_config(&config, "Gem");

    assert_eq!(plan.hue.as_deref(), Some("Gem_Hue"));
    assert_eq!(plan.saturation, None);
    assert_eq!(plan.value.as_deref(), Some("Gem_Value"));
    assert_eq!(plan.enabled_axes(), [Axis::Hue, Axis::Value]);
}

#[test]
fn shared_names_collapse_to_one_parameter() {
    let mut config = AnimatorConfig::new(ObjectId(0));
    config.hue = AxisConfig::enabled("Color");
    config.saturation = AxisConfig::enabled("Color");
    config.value = AxisConfig::enabled("Bright");
    let plan = AxisPlan::from_config(&config, "Gem");
    assert_eq!(plan.parameters(), ["Color", "Bright"]);
}

#[test]
fn hue_steps_are_clamped() {
    let mut config = AnimatorConfig::new(ObjectId(0));
    config.hue.steps = 2;
    assert_eq!(AxisPlan::from_config(&config, "Gem").hue_steps, 8);
    config.hue.steps = 500;
    assert_eq!(AxisPlan::from_config(&config, "Gem").hue_steps, 72);
}

#[test]
fn even_steps_hit_the_center_exactly() {
    let t = hue_thresholds(4);
    assert_eq!(t, [0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(hue_thresholds(36)[18], 0.5);
}

#[test]
fn odd_steps_gain_a_center_threshold() {
    let t = hue_thresholds(9);
    assert_eq!(t.len(), 11);
    assert_eq!(t[5], 0.5);
    assert!(t.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(t[0], 0.0);
    assert_eq!(t[10], 1.0);
}
