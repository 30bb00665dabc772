pub(crate) mod clip;
pub(crate) mod curve;
pub(crate) mod motion;
pub(crate) mod pose;
