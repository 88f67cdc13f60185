mod ops;
mod visitor;

pub use ops::*;
pub use visitor::*;
