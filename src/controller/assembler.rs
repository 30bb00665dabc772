use crate::{
    animation::motion::Motion,
    foundation::error::{ColoranimError, ColoranimResult},
};

/// Value type of a controller or sync parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// 32-bit float.
    Float,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Float parameter declared on a controller. The host assigns its default.
pub struct ControllerParameter {
    /// Parameter name.
    pub name: String,
    /// Value type.
    pub value_type: ValueType,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// State playing one motion.
pub struct AnimatorState {
    /// State name.
    pub name: String,
    /// Motion played by the state.
    pub motion: Motion,
    /// Whether the host resets unanimated properties while in this state. Always `false`.
    pub write_default_values: bool,
    /// Parameter driving the normalized motion time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_parameter: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Single-state machine.
pub struct StateMachine {
    /// Asset name.
    pub name: String,
    /// States; index 0 is the default state.
    pub states: Vec<AnimatorState>,
}

impl StateMachine {
    /// The state entered on start.
    pub fn default_state(&self) -> Option<&AnimatorState> {
        self.states.first()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Controller layer wrapping one state machine.
pub struct ControllerLayer {
    /// Layer name.
    pub name: String,
    /// Blend weight; generated layers use full weight.
    pub weight: f32,
    /// The layer's state machine.
    pub state_machine: StateMachine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Generated controller: declared parameters plus layers applied in order.
pub struct ControllerAsset {
    /// Asset name.
    pub name: String,
    /// Declared parameters, unique by name.
    pub parameters: Vec<ControllerParameter>,
    /// Layers in evaluation order.
    pub layers: Vec<ControllerLayer>,
}

impl ControllerAsset {
    /// Declared parameter called `name`.
    pub fn parameter(&self, name: &str) -> Option<&ControllerParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Layer called `name`.
    pub fn layer(&self, name: &str) -> Option<&ControllerLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Input of [`assemble_controller`]: one layer and the motion its single state plays.
pub struct LayerSpec {
    /// Layer name.
    pub name: String,
    /// State name; defaults to the layer name.
    pub state: String,
    /// Root motion.
    pub motion: Motion,
    /// Parameter driving the state's normalized time.
    pub time_parameter: Option<String>,
}

impl LayerSpec {
    /// Layer whose single state shares its name.
    pub fn new(name: impl Into<String>, motion: impl Into<Motion>) -> Self {
        let name = name.into();
        Self {
            state: name.clone(),
            name,
            motion: motion.into(),
            time_parameter: None,
        }
    }

    /// Rename the layer's state.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Drive the state's normalized time from `parameter`.
    pub fn with_time_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.time_parameter = Some(parameter.into());
        self
    }
}

/// Wrap `layers` into a controller declaring `parameters`.
///
/// Parameters are deduplicated. Every parameter a layer's motion tree or time binding
/// references must be declared, and every motion must validate.
pub fn assemble_controller(
    name: &str,
    parameters: &[String],
    layers: Vec<LayerSpec>,
) -> ColoranimResult<ControllerAsset> {
    if layers.is_empty() {
        return Err(ColoranimError::generation(format!(
            "controller '{name}' has no layers"
        )));
    }

    let mut declared: Vec<ControllerParameter> = Vec::new();
    for p in parameters {
        if !declared.iter().any(|d| &d.name == p) {
            declared.push(ControllerParameter {
                name: p.clone(),
                value_type: ValueType::Float,
            });
        }
    }

    let mut out_layers = Vec::with_capacity(layers.len());
    for layer_spec in layers {
        layer_spec.motion.validate()?;

        let referenced = layer_spec
            .motion
            .parameters()
            .into_iter()
            .chain(layer_spec.time_parameter.clone());
        for p in referenced {
            if !declared.iter().any(|d| d.name == p) {
                return Err(ColoranimError::generation(format!(
                    "layer '{}' references undeclared parameter '{p}'",
                    layer_spec.name
                )));
            }
        }

        tracing::debug!(
            layer = %layer_spec.name,
            motion = layer_spec.motion.name(),
            "assembled layer"
        );
        out_layers.push(ControllerLayer {
            state_machine: StateMachine {
                name: format!("{}_StateMachine", layer_spec.name),
                states: vec![AnimatorState {
                    name: layer_spec.state,
                    motion: layer_spec.motion,
                    write_default_values: false,
                    time_parameter: layer_spec.time_parameter,
                }],
            },
            name: layer_spec.name,
            weight: 1.0,
        });
    }

    Ok(ControllerAsset {
        name: name.to_string(),
        parameters: declared,
        layers: out_layers,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/controller/assembler.rs"]
mod tests;
