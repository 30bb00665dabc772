pub(crate) mod color;
pub(crate) mod hue_cycle;
pub(crate) mod plan;
pub(crate) mod vector;

use crate::{
    compose::{
        color::{color_layer_name, compose_color_tree},
        plan::AxisPlan,
        vector::compose_vector_layers,
    },
    controller::assembler::LayerSpec,
    foundation::error::{ColoranimError, ColoranimResult},
    resolve::resolver::ResolvedTargets,
};

/// All layers of one animator: the nested color tree first (when any color target exists),
/// then one layer per enabled axis for HSVG targets.
pub fn compose_layers(
    targets: &ResolvedTargets,
    plan: &AxisPlan,
) -> ColoranimResult<Vec<LayerSpec>> {
    if targets.is_empty() {
        return Err(ColoranimError::generation(format!(
            "'{}' has no resolved targets",
            plan.owner
        )));
    }

    let mut layers = Vec::new();
    if !targets.color.is_empty() {
        let tree = compose_color_tree(targets, plan)?;
        layers.push(LayerSpec::new(color_layer_name(&plan.owner), tree));
    }
    if !targets.vector.is_empty() {
        layers.extend(compose_vector_layers(targets, plan)?);
    }
    Ok(layers)
}
