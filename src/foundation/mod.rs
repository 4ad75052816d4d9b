pub(crate) mod alloc;
pub(crate) mod core;
pub(crate) mod error;
