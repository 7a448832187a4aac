//! Instruction behaviors, grouped by category.

pub(crate) mod arithmetic;
pub(crate) mod concurrency;
pub(crate) mod flow;
pub(crate) mod io;
pub(crate) mod semantics;
pub(crate) mod space;
pub(crate) mod stack;
pub(crate) mod system;
