pub(crate) mod assembler;
pub(crate) mod persist;
