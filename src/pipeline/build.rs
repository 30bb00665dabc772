use crate::{
    compose::{
        compose_layers,
        hue_cycle::{build_hue_cycle_clip, hue_cycle_controller_name, hue_cycle_layer},
        plan::AxisPlan,
    },
    config::{
        model::{AnimatorConfig, HueAnimatorConfig},
        validate::{diagnostic, hue_animator_diagnostic},
    },
    controller::{
        assembler::{ControllerAsset, assemble_controller},
        persist::{AssetRef, AssetSink, persist, persistence_order},
    },
    foundation::error::{ColoranimError, ColoranimResult},
    pipeline::manifest::BuildManifest,
    resolve::resolver::resolve_targets,
    scene::host::{ObjectId, SceneHost},
    wiring::descriptors::{Wiring, wire, wire_hue_animator},
};

/// Host build phase the pass runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum BuildPhase {
    /// Avatar-transforming phase.
    Transforming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Where the pass sits in the host pipeline. Declared to the host, not enforced here.
pub struct BuildOrdering {
    /// Phase.
    pub phase: BuildPhase,
    /// Passes that must run first.
    pub after: &'static [&'static str],
    /// Passes that must run later.
    pub before: &'static [&'static str],
}

/// Ordering of the generation pass: after texture transforms, before avatar merging.
pub const BUILD_ORDERING: BuildOrdering = BuildOrdering {
    phase: BuildPhase::Transforming,
    after: &["net.rs64.tex-trans-tool"],
    before: &["nadena.dev.modular-avatar"],
};

/// Why an instance produced no assets.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum SkipReason {
    /// Validation failed; the configuration stays in place.
    InvalidConfiguration(String),
    /// Building a clip, tree or controller failed; the configuration stays in place.
    GenerationFailed(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::GenerationFailed(msg) => write!(f, "generation failed: {msg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Controller and descriptors generated for one instance.
pub struct GeneratedAnimator {
    /// Owner object; its configuration is removed by the caller.
    pub owner: ObjectId,
    /// Owner name.
    pub owner_name: String,
    /// Generated controller.
    pub controller: ControllerAsset,
    /// Descriptors to attach to the owner.
    pub wiring: Wiring,
}

/// Result of generating one instance.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildOutcome {
    /// Assets were generated.
    Generated(Box<GeneratedAnimator>),
    /// Nothing was generated.
    Skipped(SkipReason),
}

impl BuildOutcome {
    /// The generated animator, if any.
    pub fn generated(&self) -> Option<&GeneratedAnimator> {
        match self {
            Self::Generated(g) => Some(g),
            Self::Skipped(_) => None,
        }
    }

    /// The skip reason, if any.
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Generated(_) => None,
            Self::Skipped(r) => Some(r),
        }
    }
}

/// Controller name of an HSV animator.
pub fn controller_name(owner: &str) -> String {
    format!("{owner}_HSV_Controller")
}

fn invalid(owner: &str, msg: String) -> BuildOutcome {
    tracing::warn!(owner, "skipping animator: {msg}");
    BuildOutcome::Skipped(SkipReason::InvalidConfiguration(msg))
}

fn failed(owner: &str, err: ColoranimError) -> BuildOutcome {
    tracing::error!(owner, "animator generation failed: {err}");
    BuildOutcome::Skipped(SkipReason::GenerationFailed(err.to_string()))
}

/// Validate, resolve, compose, assemble and wire one HSV animator.
#[tracing::instrument(skip(host, config), fields(owner = config.owner.0))]
pub fn generate_animator<H: SceneHost + ?Sized>(
    host: &H,
    root: ObjectId,
    config: &AnimatorConfig,
) -> BuildOutcome {
    let Some(owner) = host.object_name(config.owner) else {
        return invalid("?", format!("owner object {} does not exist", config.owner.0));
    };
    if let Some(msg) = diagnostic(config, host) {
        return invalid(owner, msg);
    }

    let plan = AxisPlan::from_config(config, owner);
    let targets = match resolve_targets(host, root, &config.targets) {
        Ok(t) => t,
        Err(ColoranimError::Validation(msg)) => return invalid(owner, msg),
        Err(err) => return failed(owner, err),
    };

    let name = controller_name(owner);
    let controller = match compose_layers(&targets, &plan)
        .and_then(|layers| assemble_controller(&name, &plan.parameters(), layers))
    {
        Ok(c) => c,
        Err(err) => return failed(owner, err),
    };
    let wiring = wire(config, &plan, &controller.name);

    tracing::info!(
        owner,
        layers = controller.layers.len(),
        parameters = controller.parameters.len(),
        "generated HSV animator"
    );
    BuildOutcome::Generated(Box::new(GeneratedAnimator {
        owner: config.owner,
        owner_name: owner.to_string(),
        controller,
        wiring,
    }))
}

/// Validate, resolve and build one hue-cycle animator.
#[tracing::instrument(skip(host, config), fields(owner = config.owner.0))]
pub fn generate_hue_animator<H: SceneHost + ?Sized>(
    host: &H,
    root: ObjectId,
    config: &HueAnimatorConfig,
) -> BuildOutcome {
    let Some(owner) = host.object_name(config.owner) else {
        return invalid("?", format!("owner object {} does not exist", config.owner.0));
    };
    if let Some(msg) = hue_animator_diagnostic(config, host) {
        return invalid(owner, msg);
    }

    let build = || -> ColoranimResult<ControllerAsset> {
        let targets = resolve_targets(host, root, &[config.as_target()])?;
        let target = targets
            .color
            .first()
            .ok_or_else(|| ColoranimError::generation("hue animator target is not a color"))?;
        let clip = build_hue_cycle_clip(target, owner, config.hue_steps())?;
        assemble_controller(
            &hue_cycle_controller_name(&config.parameter),
            std::slice::from_ref(&config.parameter),
            vec![hue_cycle_layer(clip, &config.parameter)],
        )
    };
    let controller = match build() {
        Ok(c) => c,
        Err(err) => return failed(owner, err),
    };
    let wiring = wire_hue_animator(config, owner, &controller.name);

    tracing::info!(owner, parameter = %config.parameter, "generated hue animator");
    BuildOutcome::Generated(Box::new(GeneratedAnimator {
        owner: config.owner,
        owner_name: owner.to_string(),
        controller,
        wiring,
    }))
}

/// Instance kind in a [`BuildReport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceKind {
    /// HSV animator.
    Hsv,
    /// Hue-cycle animator.
    HueCycle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A skipped instance.
pub struct SkippedInstance {
    /// Owner object.
    pub owner: ObjectId,
    /// Owner name.
    pub owner_name: String,
    /// Instance kind.
    pub kind: InstanceKind,
    /// Why nothing was generated.
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Result of one build pass.
pub struct BuildReport {
    /// Generated instances in manifest order (HSV animators first).
    pub generated: Vec<GeneratedAnimator>,
    /// Skipped instances.
    pub skipped: Vec<SkippedInstance>,
    /// Saved assets in save order.
    pub persisted: Vec<AssetRef>,
    /// Owners whose configuration the caller must remove.
    pub removed_configs: Vec<ObjectId>,
}

/// Run every instance of `manifest` independently, persisting each generated controller into
/// `sink` once it is complete.
#[tracing::instrument(
    skip_all,
    fields(
        animators = manifest.animators.len(),
        hue_animators = manifest.hue_animators.len()
    )
)]
pub fn run_build_pass(manifest: &BuildManifest, sink: &mut dyn AssetSink) -> BuildReport {
    let outcomes = manifest
        .animators
        .iter()
        .map(|a| {
            (
                a.owner,
                InstanceKind::Hsv,
                generate_animator(&manifest.scene, manifest.root, a),
            )
        })
        .chain(manifest.hue_animators.iter().map(|a| {
            (
                a.owner,
                InstanceKind::HueCycle,
                generate_hue_animator(&manifest.scene, manifest.root, a),
            )
        }));

    let mut report = BuildReport::default();
    for (owner, kind, outcome) in outcomes {
        let owner_name = manifest.object_name(owner).to_string();
        let reason = match outcome {
            BuildOutcome::Generated(generated) => match persist(&generated.controller, sink) {
                Ok(_) => {
                    report
                        .persisted
                        .extend(persistence_order(&generated.controller));
                    report.removed_configs.push(owner);
                    report.generated.push(*generated);
                    continue;
                }
                Err(err) => {
                    tracing::error!(owner = %owner_name, "saving generated assets failed: {err}");
                    SkipReason::GenerationFailed(err.to_string())
                }
            },
            BuildOutcome::Skipped(reason) => reason,
        };
        report.skipped.push(SkippedInstance {
            owner,
            owner_name,
            kind,
            reason,
        });
    }

    tracing::info!(
        generated = report.generated.len(),
        skipped = report.skipped.len(),
        "build pass finished"
    );
    report
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/build.rs"]
mod tests;
