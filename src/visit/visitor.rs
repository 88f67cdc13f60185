use crate::record::{Developer, Director};

pub trait Visitable {
    /// Accept a visitor to inspect this record. Must call the visit method
    /// on the visitor matching the concrete variant of this record.
    fn accept<R>(&self, visitor: &mut dyn Visitor<R>) -> R;
}

/// An operation applied to records through double dispatch. There is one
/// method per employee variant, so adding a variant means adding a method
/// here and implementing it for every operation.
pub trait Visitor<R> {
    fn visit_developer(&mut self, record: &Developer) -> R;
    fn visit_director(&mut self, record: &Director) -> R;
}
