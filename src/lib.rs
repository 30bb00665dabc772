//! Coloranim generates HSV color animation assets for avatar material properties.
//!
//! An animator configuration names a set of material color properties and the color axes
//! (hue, saturation, value) a user may drive at runtime. A build pass turns each
//! configuration into:
//!
//! - Single-frame pose clips and a nested blend tree (or per-axis layers for HSVG vectors)
//! - An animator controller wrapping them, persisted through an [`AssetSink`]
//! - Merge, parameter and menu descriptors ([`Wiring`]) for the host avatar tooling
//!
//! The entry point is [`run_build_pass`] over a [`BuildManifest`]; [`sample_controller`]
//! previews the generated controller offline.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compose;
mod config;
mod controller;
mod eval;
mod foundation;
mod pipeline;
mod resolve;
mod scene;
mod wiring;

pub use crate::foundation::core::{EPSILON, FRAME_RATE, Hsv, Rgb, Vec4, wrap_unit};
pub use crate::foundation::error::{ColoranimError, ColoranimResult};

pub use crate::scene::graph::{SceneGraph, SceneObject};
pub use crate::scene::host::{Material, ObjectId, SceneHost, Shader, ShaderPropertyType};

pub use crate::config::catalog::{KNOWN_PROPERTIES, KnownProperty, known_property};
pub use crate::config::migrate::migrate;
pub use crate::config::model::{
    AnimatorConfig, Axis, AxisConfig, ColorTarget, DEFAULT_HUE_STEPS, DEFAULT_PROPERTY,
    HSVG_SUFFIX, HUE_STEPS_MAX, HUE_STEPS_MIN, HueAnimatorConfig, LegacyTargetFields, TargetMode,
};
pub use crate::config::validate::{
    TargetIssue, check_target, diagnostic, hue_animator_diagnostic, summary, validate,
};

pub use crate::animation::clip::AnimationClip;
pub use crate::animation::curve::{
    BindingTarget, Channel, Curve, CurveBinding, Keyframe, material_property_path,
    set_linear_tangents,
};
pub use crate::animation::motion::{BlendNode, CENTERED_THRESHOLDS, ChildMotion, Motion};
pub use crate::animation::pose::{POSE_DURATION, build_color_pose, build_vector_pose, pose_curve};

pub use crate::resolve::resolver::{
    ResolvedColorTarget, ResolvedTargets, ResolvedVectorTarget, resolve_targets,
};

pub use crate::compose::color::{color_layer_name, compose_color_tree};
pub use crate::compose::compose_layers;
pub use crate::compose::hue_cycle::{
    HUE_CYCLE_STATE, build_hue_cycle_clip, hue_cycle_clip_name, hue_cycle_controller_name,
    hue_cycle_layer,
};
pub use crate::compose::plan::{AxisPlan, hue_thresholds};
pub use crate::compose::vector::{VECTOR_AXIS_MAX, compose_vector_layers, vector_layer_name};

pub use crate::controller::assembler::{
    AnimatorState, ControllerAsset, ControllerLayer, ControllerParameter, LayerSpec,
    StateMachine, ValueType, assemble_controller,
};
pub use crate::controller::persist::{
    AssetKind, AssetRef, AssetSink, InMemorySink, persist, persistence_order,
};

pub use crate::eval::preview::{
    ParameterValues, PropertyValues, sample_controller, sample_motion, sample_motion_at,
};

pub use crate::wiring::descriptors::{
    HUE_CYCLE_DEFAULT, LayerType, MenuControl, MergeAnimator, NEUTRAL_DEFAULT, ParameterConfig,
    PathMode, Wiring, wire, wire_hue_animator,
};

pub use crate::pipeline::build::{
    BUILD_ORDERING, BuildOrdering, BuildOutcome, BuildPhase, BuildReport, GeneratedAnimator,
    InstanceKind, SkipReason, SkippedInstance, controller_name, generate_animator,
    generate_hue_animator, run_build_pass,
};
pub use crate::pipeline::manifest::BuildManifest;

#[cfg(test)]
#[path = "../tests/unit/fixtures.rs"]
pub(crate) mod fixtures;
