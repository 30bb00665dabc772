use crate::{
    animation::motion::Motion,
    controller::assembler::ControllerAsset,
    foundation::error::{ColoranimError, ColoranimResult},
};

/// Kind of a persisted asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Pose or hue-cycle clip.
    Clip,
    /// Blend node.
    BlendTree,
    /// State.
    State,
    /// State machine.
    StateMachine,
    /// Controller.
    Controller,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Reference to one asset of a generated controller.
pub struct AssetRef {
    /// Asset kind.
    pub kind: AssetKind,
    /// Asset name.
    pub name: String,
}

impl AssetRef {
    fn new(kind: AssetKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// Assets of `controller` in save order: every motion after its children, each state after
/// its motion, each state machine after its state, the controller last.
///
/// An asset reached twice is listed once, at its first position.
pub fn persistence_order(controller: &ControllerAsset) -> Vec<AssetRef> {
    let mut out: Vec<AssetRef> = Vec::new();
    let mut push = |asset: AssetRef| {
        if !out.contains(&asset) {
            out.push(asset);
        }
    };

    for layer in &controller.layers {
        for state in &layer.state_machine.states {
            state.motion.visit_post_order(&mut |m| {
                let kind = match m {
                    Motion::Clip(_) => AssetKind::Clip,
                    Motion::Blend(_) => AssetKind::BlendTree,
                };
                push(AssetRef::new(kind, m.name()));
            });
            push(AssetRef::new(AssetKind::State, &state.name));
        }
        push(AssetRef::new(
            AssetKind::StateMachine,
            &layer.state_machine.name,
        ));
    }
    push(AssetRef::new(AssetKind::Controller, &controller.name));
    out
}

/// Sink contract for the host's asset database.
///
/// Ordering contract: `save` is called in [`persistence_order`], so an asset is always saved
/// after everything it references.
pub trait AssetSink {
    /// Called once before the first asset of a controller.
    fn begin(&mut self, controller: &str) -> ColoranimResult<()>;
    /// Save one asset.
    fn save(&mut self, asset: &AssetRef) -> ColoranimResult<()>;
    /// Called once after the controller itself is saved.
    fn end(&mut self) -> ColoranimResult<()>;
}

/// Save every asset of `controller` into `sink`. Returns the number of assets saved.
#[tracing::instrument(skip(controller, sink), fields(controller = %controller.name))]
pub fn persist(controller: &ControllerAsset, sink: &mut dyn AssetSink) -> ColoranimResult<usize> {
    let order = persistence_order(controller);
    sink.begin(&controller.name)?;
    for asset in &order {
        sink.save(asset)?;
    }
    sink.end()?;
    tracing::debug!(assets = order.len(), "persisted controller");
    Ok(order.len())
}

/// In-memory sink for tests and reports.
#[derive(Debug, Default)]
pub struct InMemorySink {
    /// Saved assets in save order.
    pub(crate) saved: Vec<AssetRef>,
    open: Option<String>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the saved assets.
    pub fn saved(&self) -> &[AssetRef] {
        &self.saved
    }

    /// Take the saved assets, leaving the sink empty.
    pub fn take(&mut self) -> Vec<AssetRef> {
        std::mem::take(&mut self.saved)
    }
}

impl AssetSink for InMemorySink {
    fn begin(&mut self, controller: &str) -> ColoranimResult<()> {
        self.open = Some(controller.to_string());
        Ok(())
    }

    fn save(&mut self, asset: &AssetRef) -> ColoranimResult<()> {
        if self.open.is_none() {
            return Err(ColoranimError::generation(format!(
                "asset '{}' saved outside begin/end",
                asset.name
            )));
        }
        self.saved.push(asset.clone());
        Ok(())
    }

    fn end(&mut self) -> ColoranimResult<()> {
        self.open = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/persist.rs"]
mod tests;
