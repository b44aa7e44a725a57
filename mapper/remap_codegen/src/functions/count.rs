//! Count of the traversed elements.

use remap_ir::TypeRef;

use crate::functions::AggregateFunction;

/// Basic-capability count: the accumulator is an `int` regardless of the
/// element type, and the combine rule ignores the item.
pub struct CountFunction;

impl AggregateFunction for CountFunction {
    fn seed(&self, _element: &TypeRef) -> String {
        "0".to_string()
    }

    fn combine(&self, accumulator: &str, _item: &str) -> String {
        format!("{accumulator} = {accumulator} + 1")
    }

    fn accumulator_type(&self, _element: &TypeRef) -> TypeRef {
        TypeRef::named("int")
    }
}
