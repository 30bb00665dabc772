pub(crate) mod catalog;
pub(crate) mod migrate;
pub(crate) mod model;
pub(crate) mod validate;
