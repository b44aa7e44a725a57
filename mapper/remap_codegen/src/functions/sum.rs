//! Sum of the traversed elements.

use remap_ir::TypeRef;

use crate::functions::AggregateFunction;

/// Basic-capability sum: `acc = acc + item`, starting from zero.
pub struct SumFunction;

impl AggregateFunction for SumFunction {
    fn seed(&self, _element: &TypeRef) -> String {
        "0".to_string()
    }

    fn combine(&self, accumulator: &str, item: &str) -> String {
        format!("{accumulator} = {accumulator} + {item}")
    }
}
