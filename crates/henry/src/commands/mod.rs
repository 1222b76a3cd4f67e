//! CLI command implementations.

pub(crate) mod list;

pub(crate) use list::ListArgs;
