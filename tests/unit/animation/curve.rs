use super::*;

#[test]
fn property_path_qualifies_nonzero_slots() {
    assert_eq!(
        material_property_path(0, "_EmissionColor", Channel::R),
        "material._EmissionColor.r"
    );
    assert_eq!(
        material_property_path(2, "_MainTexHSVG", Channel::W),
        "material[2]._MainTexHSVG.w"
    );
}

#[test]
fn binding_uses_renderer_target() {
    let b = CurveBinding::material("Armature/Hair", 0, "_Color", Channel::G);
    assert_eq!(b.target, BindingTarget::Renderer);
    assert_eq!(b.to_string(), "Armature/Hair:material._Color.g");
}

#[test]
fn linear_tangents_are_secants_with_flat_ends() {
    let curve = Curve::linear(&[(0.0, 0.0), (1.0, 2.0), (2.0, 1.0)]);
    let k = &curve.keys;
    assert_eq!((k[0].in_tangent, k[0].out_tangent), (0.0, 2.0));
    assert_eq!((k[1].in_tangent, k[1].out_tangent), (2.0, -1.0));
    assert_eq!((k[2].in_tangent, k[2].out_tangent), (-1.0, 0.0));
}

#[test]
fn secant_tangents_sample_linearly() {
    let curve = Curve::linear(&[(0.0, 1.0), (0.5, 3.0), (1.0, 0.0)]);
    assert!((curve.sample(0.25) - 2.0).abs() < 1e-5);
    assert!((curve.sample(0.75) - 1.5).abs() < 1e-5);
    assert_eq!(curve.sample(-1.0), 1.0);
    assert_eq!(curve.sample(9.0), 0.0);
}

#[test]
fn constant_curve_has_two_equal_keys() {
    let curve = Curve::constant(0.7, 1.0 / 60.0);
    assert_eq!(curve.keys.len(), 2);
    assert_eq!(curve.keys[0].value, curve.keys[1].value);
    assert!(curve.duration() > 0.0);
    curve.validate().unwrap();
}

#[test]
fn validate_rejects_unsorted_keys() {
    let curve = Curve {
        keys: vec![Keyframe::new(0.5, 0.0), Keyframe::new(0.5, 1.0)],
    };
    assert!(curve.validate().is_err());
    assert!(Curve { keys: vec![] }.validate().is_err());
}
