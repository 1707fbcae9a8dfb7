//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod resolve;
pub(crate) mod styles;

pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use styles::StylesArgs;
