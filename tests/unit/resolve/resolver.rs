use super::*;
use crate::{
    fixtures::{self, assert_close},
    foundation::core::Rgb,
};

#[test]
fn splits_targets_by_mode_preserving_order() {
    let (scene, ids) = fixtures::scene();
    let targets = vec![
        ColorTarget::new(ids.hair, 0, "_Color"),
        ColorTarget::new(ids.body, 0, "_MainTexHSVG"),
        ColorTarget::new(ids.body, 0, "_EmissionColor"),
    ];
    let resolved = resolve_targets(&scene, ids.root, &targets).unwrap();

    assert_eq!(resolved.color.len(), 2);
    assert_eq!(resolved.vector.len(), 1);
    assert_eq!(resolved.color[0].path, "Armature/Hair");
    assert_eq!(resolved.color[0].property, "_Color");
    assert_eq!(resolved.color[1].path, "Body");
    assert_eq!(resolved.color[1].property, "_EmissionColor");
    assert_eq!(resolved.vector[0].base, Vec4::new(0.1, 0.8, 1.2, 1.0));
}

#[test]
fn color_base_is_hsv_decomposition() {
    let (scene, ids) = fixtures::scene();
    let resolved =
        resolve_targets(&scene, ids.root, &[ColorTarget::new(ids.body, 0, "_EmissionColor")])
            .unwrap();
    let base = resolved.color[0].base;
    assert_close(base.h, 0.0);
    assert_close(base.s, 1.0);
    assert_close(base.v, 1.0);

    let hair =
        resolve_targets(&scene, ids.root, &[ColorTarget::new(ids.hair, 0, "_Color")]).unwrap();
    let back = hair.color[0].base.to_rgb();
    assert!(back.max_abs_diff(Rgb::new(0.9, 0.1, 0.4)) < 1e-5);
}

#[test]
fn first_bad_target_fails_with_index() {
    let (scene, ids) = fixtures::scene();
    let err = resolve_targets(
        &scene,
        ids.root,
        &[
            ColorTarget::new(ids.body, 0, "_Color"),
            ColorTarget::new(ids.body, 1, "_Color"),
        ],
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation error: Target [1]: Material at index 1 is null."
    );
}

#[test]
fn empty_input_resolves_to_nothing() {
    let (scene, ids) = fixtures::scene();
    assert!(resolve_targets(&scene, ids.root, &[]).unwrap().is_empty());
}
