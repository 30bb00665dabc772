use super::*;
use crate::{
    controller::assembler::assemble_controller,
    eval::preview::{ParameterValues, sample_controller},
    fixtures::assert_close,
    foundation::core::{Hsv, Rgb, wrap_unit},
};

fn target() -> ResolvedColorTarget {
    ResolvedColorTarget {
        path: "Body".to_string(),
        material_index: 3,
        property: "_EmissionColor".to_string(),
        base: Hsv::new(0.2, 0.5, 0.8),
    }
}

#[test]
fn keys_walk_one_full_turn() {
    let target = target();
    let clip = build_hue_cycle_clip(&target, "Gem", 8).unwrap();
    assert_eq!(clip.name, "Gem_HueRotation");
    assert_eq!(clip.curves.len(), 3);
    assert_eq!(clip.duration(), 1.0);

    let red = clip.curve(&target.binding(Channel::R)).unwrap();
    assert_eq!(red.keys.len(), 9);
    for (i, key) in red.keys.iter().enumerate() {
        let t = i as f32 / 8.0;
        assert_eq!(key.time, t);
        let want = Hsv::new(wrap_unit(0.2 + t), 0.5, 0.8).to_rgb();
        assert_close(key.value, want.r);
    }
    assert_close(red.keys[0].value, red.keys[8].value);
}

#[test]
fn uses_slot_qualified_property_names() {
    let target = target();
    let clip = build_hue_cycle_clip(&target, "Gem", 8).unwrap();
    let names: Vec<&str> = clip.curves.keys().map(|b| b.property.as_str()).collect();
    assert_eq!(
        names,
        [
            "material[3]._EmissionColor.b",
            "material[3]._EmissionColor.g",
            "material[3]._EmissionColor.r",
        ]
    );
}

#[test]
fn tangents_are_linear_secants() {
    let target = target();
    let clip = build_hue_cycle_clip(&target, "Gem", 8).unwrap();
    let green = clip.curve(&target.binding(Channel::G)).unwrap();
    let k = &green.keys;
    assert_close(k[1].in_tangent, (k[1].value - k[0].value) * 8.0);
    assert_eq!(k[0].in_tangent, 0.0);
    assert_eq!(k[8].out_tangent, 0.0);
}

#[test]
fn parameter_drives_normalized_time() {
    let target = target();
    let clip = build_hue_cycle_clip(&target, "Gem", 36).unwrap();
    let layer = hue_cycle_layer(clip, "HueRotation");
    assert_eq!(layer.name, "HueShift_HueRotation");
    assert_eq!(layer.state, "HueRotation");

    let controller =
        assemble_controller(&layer.name.clone(), &["HueRotation".to_string()], vec![layer])
            .unwrap();
    let mut params = ParameterValues::new();
    params.insert("HueRotation".to_string(), 0.0);
    let values = sample_controller(&controller, &params).unwrap();
    let rgb = Rgb::new(
        values[&target.binding(Channel::R)],
        values[&target.binding(Channel::G)],
        values[&target.binding(Channel::B)],
    );
    assert!(rgb.max_abs_diff(target.base.to_rgb()) < 1e-5);
}
