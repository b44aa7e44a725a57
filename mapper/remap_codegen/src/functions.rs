//! Aggregate-function implementations and their generation strategies.
//!
//! Two capabilities exist, and they are declared at registration time:
//!
//! - [`AggregateFunction`]: the basic capability. The implementation only
//!   states its identity value and its combine rule; the
//!   [`DefaultAggregateCodeGenerator`] supplies the surrounding
//!   initialize/iterate/assign pattern.
//! - [`AggregateCodeGenerator`]: the full capability. The implementation
//!   produces its own initialization, iteration, and assignment
//!   statements (e.g. `avg`, which needs two accumulators).
//!
//! This is a closed two-tier scheme, not an open plugin chain.

mod avg;
mod count;
mod default;
mod min_max;
mod sum;

#[cfg(test)]
mod tests;

pub use avg::AvgFunction;
pub use count::CountFunction;
pub use default::DefaultAggregateCodeGenerator;
pub use min_max::{MaxFunction, MinFunction};
pub use sum::SumFunction;

use remap_ir::{Statement, TypeRef};

use crate::context::AggregateFunctionContext;
use crate::path::PathItem;

/// Basic aggregate capability: combine one element into the running
/// accumulator.
///
/// Implementations are parametric over the element type bound by the
/// registry; the bound type is passed back in where it matters.
pub trait AggregateFunction: Send + Sync {
    /// The identity value the accumulator is initialized with.
    fn seed(&self, element: &TypeRef) -> String;

    /// The update expression combining the current item into the
    /// accumulator. Returned without a terminator; the builder
    /// normalizes termination.
    fn combine(&self, accumulator: &str, item: &str) -> String;

    /// The accumulator's declared type. Defaults to the element type.
    fn accumulator_type(&self, element: &TypeRef) -> TypeRef {
        element.clone()
    }
}

/// Full code-generation capability: the implementation owns all three
/// statement phases for its member.
pub trait AggregateCodeGenerator: Send + Sync {
    /// Statements declaring and initializing the member's accumulator(s).
    fn initialization_statements(&self, context: &AggregateFunctionContext) -> Vec<Statement>;

    /// Per-iteration update expressions, evaluated inside the innermost
    /// loop of the traversal. May carry or omit terminators; the builder
    /// normalizes to exactly one.
    fn iteration_statements(
        &self,
        context: &AggregateFunctionContext,
        path_items: &[PathItem],
    ) -> Vec<String>;

    /// The final accumulator-to-destination-member assignment.
    fn assignment_statement(&self, context: &AggregateFunctionContext) -> Statement;
}
