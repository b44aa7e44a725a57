//! Default strategy for basic-capability functions.

use remap_ir::{Statement, TypeRef};

use std::sync::Arc;

use crate::context::AggregateFunctionContext;
use crate::functions::{AggregateCodeGenerator, AggregateFunction};
use crate::path::{self, PathItem, DEST_ALIAS};

/// Wraps a basic [`AggregateFunction`] in the generic
/// initialize/iterate/assign pattern:
///
/// - declare the accumulator seeded with the function's identity value
/// - apply the function's combine rule to the accumulator and the
///   current item at each iteration step
/// - assign the accumulator into the destination member
pub struct DefaultAggregateCodeGenerator {
    function: Arc<dyn AggregateFunction>,
}

impl DefaultAggregateCodeGenerator {
    pub fn new(function: Arc<dyn AggregateFunction>) -> Self {
        DefaultAggregateCodeGenerator { function }
    }
}

impl AggregateCodeGenerator for DefaultAggregateCodeGenerator {
    fn initialization_statements(&self, context: &AggregateFunctionContext) -> Vec<Statement> {
        let element: &TypeRef = context.source_item_type();
        vec![Statement::declare_init(
            self.function.accumulator_type(element),
            context.object_name.clone(),
            self.function.seed(element),
        )]
    }

    fn iteration_statements(
        &self,
        context: &AggregateFunctionContext,
        path_items: &[PathItem],
    ) -> Vec<String> {
        let item = path::item_expression(path_items);
        vec![self.function.combine(&context.object_name, &item)]
    }

    fn assignment_statement(&self, context: &AggregateFunctionContext) -> Statement {
        Statement::assign(
            format!("{DEST_ALIAS}.{}", context.member.name),
            context.object_name.clone(),
        )
    }
}
