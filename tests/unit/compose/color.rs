use super::*;
use crate::{
    animation::curve::Channel,
    eval::preview::{ParameterValues, sample_motion},
};

const BASES: [Hsv; 5] = [
    Hsv::new(0.0, 1.0, 1.0),
    Hsv::new(0.3, 0.6, 0.7),
    Hsv::new(0.97, 0.25, 0.9),
    Hsv::new(0.55, 0.0, 0.4),
    Hsv::new(0.62, 0.8, 2.5),
];

fn targets(base: Hsv) -> ResolvedTargets {
    ResolvedTargets {
        color: vec![
            ResolvedColorTarget {
                path: "Body".to_string(),
                material_index: 0,
                property: "_EmissionColor".to_string(),
                base,
            },
            ResolvedColorTarget {
                path: "Armature/Hair".to_string(),
                material_index: 1,
                property: "_Color".to_string(),
                base: base.shift_hue(0.25),
            },
        ],
        vector: vec![],
    }
}

fn plan(axes: &[Axis], hue_steps: u32) -> AxisPlan {
    let param = |axis: Axis| axes.contains(&axis).then(|| format!("Gem_{axis}"));
    AxisPlan {
        owner: "Gem".to_string(),
        hue: param(Axis::Hue),
        saturation: param(Axis::Saturation),
        value: param(Axis::Value),
        hue_steps,
    }
}

fn params(plan: &AxisPlan, hue: f32, sat: f32, val: f32) -> ParameterValues {
    let mut out = ParameterValues::new();
    for (axis, v) in [(Axis::Hue, hue), (Axis::Saturation, sat), (Axis::Value, val)] {
        if let Some(p) = plan.parameter(axis) {
            out.insert(p.to_string(), v);
        }
    }
    out
}

fn color_of(motion: &Motion, target: &ResolvedColorTarget, params: &ParameterValues) -> Rgb {
    let values = sample_motion(motion, params).unwrap();
    let [r, g, b] = Channel::RGB.map(|ch| values[&target.binding(ch)]);
    Rgb::new(r, g, b)
}

fn all_axis_subsets() -> Vec<Vec<Axis>> {
    (1..8u8)
        .map(|mask| {
            Axis::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, a)| a)
                .collect()
        })
        .collect()
}

#[test]
fn neutral_parameters_reproduce_every_base_color() {
    for axes in all_axis_subsets() {
        for steps in [8, 9, 36] {
            let plan = plan(&axes, steps);
            for base in BASES {
                let targets = targets(base);
                let tree = compose_color_tree(&targets, &plan).unwrap();
                let neutral = params(&plan, 0.5, 0.5, 0.5);
                for target in &targets.color {
                    let got = color_of(&tree, target, &neutral);
                    let want = target.base.to_rgb();
                    assert!(
                        got.max_abs_diff(want) < 1e-5,
                        "{axes:?} steps={steps} base={base:?}: {got:?} != {want:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn red_with_four_hue_steps_builds_five_samples() {
    let targets = ResolvedTargets {
        color: vec![ResolvedColorTarget {
            path: "Body".to_string(),
            material_index: 0,
            property: "_EmissionColor".to_string(),
            base: Rgb::new(1.0, 0.0, 0.0).to_hsv(),
        }],
        vector: vec![],
    };
    let tree = compose_color_tree(&targets, &plan(&[Axis::Hue], 4)).unwrap();
    let Motion::Blend(node) = &tree else {
        panic!("expected hue node");
    };
    assert_eq!(node.name, "Gem_Hue");
    assert_eq!(node.parameter, "Gem_Hue");
    assert_eq!(node.thresholds(), [0.0, 0.25, 0.5, 0.75, 1.0]);

    let target = &targets.color[0];
    for child in &node.children {
        let Motion::Clip(clip) = &child.motion else {
            panic!("expected pose clip");
        };
        let got = Channel::RGB.map(|ch| clip.curve(&target.binding(ch)).unwrap().keys[0].value);
        let want = Hsv::new(wrap_unit(child.threshold - 0.5), 1.0, 1.0).to_rgb();
        assert!(Rgb::new(got[0], got[1], got[2]).max_abs_diff(want) < 1e-5);
    }

    let Motion::Clip(center) = &node.children[2].motion else {
        panic!("expected pose clip");
    };
    let red = center.curve(&target.binding(Channel::R)).unwrap();
    let green = center.curve(&target.binding(Channel::G)).unwrap();
    assert_eq!(red.keys[0].value, 1.0);
    assert_eq!(green.keys[0].value, 0.0);
}

#[test]
fn hue_extremes_are_half_turns_and_coincide() {
    let base = Hsv::new(0.3, 0.6, 0.7);
    let targets = targets(base);
    let plan = plan(&[Axis::Hue], 36);
    let tree = compose_color_tree(&targets, &plan).unwrap();
    let target = &targets.color[0];

    let low = color_of(&tree, target, &params(&plan, 0.0, 0.5, 0.5));
    let high = color_of(&tree, target, &params(&plan, 1.0, 0.5, 0.5));
    assert!(low.max_abs_diff(high) < 1e-5);

    let shifted = low.to_hsv();
    let diff = wrap_unit(shifted.h - base.h);
    assert!((diff - 0.5).abs() < 1e-5, "hue moved by {diff}");
}

#[test]
fn saturation_and_value_follow_the_bilinear_surface() {
    for hue in [false, true] {
        let axes: Vec<Axis> = if hue {
            Axis::ALL.to_vec()
        } else {
            vec![Axis::Saturation, Axis::Value]
        };
        let plan = plan(&axes, 12);
        let base = Hsv::new(0.3, 0.6, 0.7);
        let targets = targets(base);
        let tree = compose_color_tree(&targets, &plan).unwrap();
        let target = &targets.color[0];
        let pure = Hsv::new(base.h, 1.0, 1.0).to_rgb();
        let surface = |s: f32, v: f32| Rgb::white().lerp(pure, s).scale(v);

        // Parameter 0 / 0.5 / 1 maps to 0 / base / 1 on each axis.
        let level = |p: f32, b: f32| {
            if p == 0.0 {
                0.0
            } else if p == 0.5 {
                b
            } else {
                1.0
            }
        };
        for ps in [0.0, 0.5, 1.0] {
            for pv in [0.0, 0.5, 1.0] {
                let got = color_of(&tree, target, &params(&plan, 0.5, ps, pv));
                let want = surface(level(ps, base.s), level(pv, base.v));
                assert!(got.max_abs_diff(want) < 1e-5, "s={ps} v={pv}");
            }
        }

        // Cell centers interpolate the surface exactly.
        let got = color_of(&tree, target, &params(&plan, 0.5, 0.75, 0.75));
        let want = surface((base.s + 1.0) / 2.0, (base.v + 1.0) / 2.0);
        assert!(got.max_abs_diff(want) < 1e-5);
    }
}

#[test]
fn full_tree_rebuilds_hue_node_per_branch() {
    let tree = compose_color_tree(&targets(BASES[1]), &plan(&Axis::ALL, 8)).unwrap();
    assert_eq!(tree.name(), "Gem_Value");

    let mut nodes = Vec::new();
    tree.visit_post_order(&mut |m| {
        if let Motion::Blend(node) = m {
            nodes.push(node.name.clone());
        }
    });
    assert_eq!(
        nodes,
        [
            "Gem_Hue_SBase_VBase",
            "Gem_Hue_SMax_VBase",
            "Gem_Saturation_VBase",
            "Gem_Hue_SBase_VMax",
            "Gem_Hue_SMax_VMax",
            "Gem_Saturation_VMax",
            "Gem_Value",
        ]
    );
    assert_eq!(tree.parameters(), ["Gem_Hue", "Gem_Saturation", "Gem_Value"]);
    // black + 2 grays + 4 hue nodes of 9 samples.
    assert_eq!(tree.clips().len(), 1 + 2 + 4 * 9);
}

#[test]
fn value_only_tree_has_black_and_two_base_poses() {
    let tree = compose_color_tree(&targets(BASES[1]), &plan(&[Axis::Value], 8)).unwrap();
    let Motion::Blend(node) = &tree else {
        panic!("expected value node");
    };
    let names: Vec<&str> = node.children.iter().map(|c| c.motion.name()).collect();
    assert_eq!(names, ["Gem_Black", "Gem_Base_VBase", "Gem_Base_VMax"]);
}

#[test]
fn requires_color_targets_and_an_axis() {
    let empty = ResolvedTargets::default();
    assert!(compose_color_tree(&empty, &plan(&[Axis::Hue], 8)).is_err());
    assert!(compose_color_tree(&targets(BASES[0]), &plan(&[], 8)).is_err());
}
