use super::*;
use crate::{
    config::model::{Axis, HueAnimatorConfig},
    fixtures,
    scene::host::ObjectId,
};

#[test]
fn valid_color_and_vector_targets_pass() {
    let (scene, ids) = fixtures::scene();
    let config = fixtures::animator(
        &ids,
        vec![
            ColorTarget::new(ids.body, 0, "_EmissionColor"),
            ColorTarget::new(ids.body, 0, "_MainTexHSVG"),
        ],
        &[Axis::Hue],
    );
    assert!(validate(&config, &scene));
    assert_eq!(diagnostic(&config, &scene), None);
}

#[test]
fn empty_target_list_fails() {
    let (scene, ids) = fixtures::scene();
    let config = fixtures::animator(&ids, vec![], &[Axis::Hue]);
    assert!(!validate(&config, &scene));
    assert_eq!(
        diagnostic(&config, &scene).as_deref(),
        Some("No material targets are configured.")
    );
}

#[test]
fn zero_axes_fails() {
    let (scene, ids) = fixtures::scene();
    let config = fixtures::animator(&ids, vec![ColorTarget::new(ids.body, 0, "_Color")], &[]);
    assert!(!validate(&config, &scene));
    assert!(diagnostic(&config, &scene).unwrap().contains("At least one axis"));
}

#[test]
fn diagnostic_names_first_failing_target() {
    let (scene, ids) = fixtures::scene();
    let config = fixtures::animator(
        &ids,
        vec![
            ColorTarget::new(ids.body, 0, "_Color"),
            ColorTarget::new(ids.body, 0, "_NoSuchColor"),
            ColorTarget::new(ids.body, 7, "_Color"),
        ],
        &[Axis::Hue],
    );
    assert_eq!(
        diagnostic(&config, &scene).as_deref(),
        Some("Target [1]: Material does not have property '_NoSuchColor'.")
    );
}

#[test]
fn target_issues_cover_every_precondition() {
    let (scene, ids) = fixtures::scene();
    let check = |t: ColorTarget| check_target(&scene, &t).err();

    assert_eq!(
        check(ColorTarget {
            renderer: None,
            material_index: 0,
            property: "_Color".to_string()
        }),
        Some(TargetIssue::MissingRenderer)
    );
    // The owner object exists but has no renderer.
    assert_eq!(
        check(ColorTarget::new(ids.owner, 0, "_Color")),
        Some(TargetIssue::MissingRenderer)
    );
    assert_eq!(
        check(ColorTarget::new(ids.body, -1, "_Color")),
        Some(TargetIssue::SlotOutOfRange { index: -1, len: 3 })
    );
    assert_eq!(
        check(ColorTarget::new(ids.body, 1, "_Color")),
        Some(TargetIssue::NullMaterial { index: 1 })
    );
    assert_eq!(
        check(ColorTarget::new(ids.body, 2, "_Color")),
        Some(TargetIssue::NullShader)
    );
    assert_eq!(
        check(ColorTarget::new(ids.body, 0, "_MainTex")),
        Some(TargetIssue::TypeMismatch {
            property: "_MainTex".to_string(),
            expected: ShaderPropertyType::Color,
            found: ShaderPropertyType::Texture,
        })
    );
    assert_eq!(
        check(ColorTarget::new(ids.body, 0, "_OddHSVG")),
        Some(TargetIssue::TypeMismatch {
            property: "_OddHSVG".to_string(),
            expected: ShaderPropertyType::Vector,
            found: ShaderPropertyType::Color,
        })
    );
}

#[test]
fn issue_messages_are_human_readable() {
    assert_eq!(
        TargetIssue::SlotOutOfRange { index: 4, len: 2 }.to_string(),
        "Material Index 4 is out of range (0-1)."
    );
    assert_eq!(
        TargetIssue::TypeMismatch {
            property: "_MainTex".to_string(),
            expected: ShaderPropertyType::Color,
            found: ShaderPropertyType::Texture,
        }
        .to_string(),
        "Property '_MainTex' is not a Color type (found: Texture)."
    );
}

#[test]
fn summary_describes_menu_shape() {
    let (_, ids) = fixtures::scene();
    let one = fixtures::animator(&ids, vec![ColorTarget::new(ids.body, 0, "_Color")], &[Axis::Hue]);
    assert_eq!(summary(&one), "1 material target(s); generates 1 radial puppet.");

    let three = fixtures::animator(
        &ids,
        vec![ColorTarget::new(ids.body, 0, "_Color")],
        &[Axis::Hue, Axis::Saturation, Axis::Value],
    );
    assert!(summary(&three).ends_with("sub-menu with 3 radial puppets."));
}

#[test]
fn hue_animator_requires_color_type() {
    let (scene, ids) = fixtures::scene();
    let mut config = HueAnimatorConfig {
        owner: ids.owner,
        renderer: Some(ids.body),
        material_index: 0,
        property: "_EmissionColor".to_string(),
        steps: 36,
        parameter: "HueRotation".to_string(),
        saved: true,
        synced: true,
        menu_icon: None,
    };
    assert_eq!(hue_animator_diagnostic(&config, &scene), None);

    config.property = "_MainTexHSVG".to_string();
    assert!(
        hue_animator_diagnostic(&config, &scene)
            .unwrap()
            .contains("is not a Color type")
    );

    config.renderer = Some(ObjectId(999));
    assert_eq!(
        hue_animator_diagnostic(&config, &scene).as_deref(),
        Some("Target Renderer is not set.")
    );
}
