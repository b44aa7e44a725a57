//! Minimum and maximum of the traversed elements.
//!
//! Both seed from the element type's opposite extreme, so the first
//! combined element always wins.

use remap_ir::TypeRef;

use crate::functions::AggregateFunction;

/// Basic-capability minimum.
pub struct MinFunction;

impl AggregateFunction for MinFunction {
    fn seed(&self, element: &TypeRef) -> String {
        format!("{element}.MaxValue")
    }

    fn combine(&self, accumulator: &str, item: &str) -> String {
        format!("{accumulator} = {item} < {accumulator} ? {item} : {accumulator}")
    }
}

/// Basic-capability maximum.
pub struct MaxFunction;

impl AggregateFunction for MaxFunction {
    fn seed(&self, element: &TypeRef) -> String {
        format!("{element}.MinValue")
    }

    fn combine(&self, accumulator: &str, item: &str) -> String {
        format!("{accumulator} = {item} > {accumulator} ? {item} : {accumulator}")
    }
}
