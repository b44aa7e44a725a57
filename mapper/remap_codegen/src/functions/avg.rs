//! Average of the traversed elements.

use remap_ir::{Statement, TypeRef};

use crate::context::AggregateFunctionContext;
use crate::functions::AggregateCodeGenerator;
use crate::path::{self, PathItem, DEST_ALIAS};

/// Full-capability average.
///
/// Needs a running sum and a running count, so the single-accumulator
/// default pattern does not fit; this implementation owns all three
/// statement phases itself.
pub struct AvgFunction;

impl AvgFunction {
    fn sum_name(context: &AggregateFunctionContext) -> String {
        format!("{}Sum", context.object_name)
    }

    fn count_name(context: &AggregateFunctionContext) -> String {
        format!("{}Count", context.object_name)
    }
}

impl AggregateCodeGenerator for AvgFunction {
    fn initialization_statements(&self, context: &AggregateFunctionContext) -> Vec<Statement> {
        vec![
            Statement::declare_init(
                context.source_item_type().clone(),
                Self::sum_name(context),
                "0",
            ),
            Statement::declare_init(TypeRef::named("int"), Self::count_name(context), "0"),
        ]
    }

    fn iteration_statements(
        &self,
        context: &AggregateFunctionContext,
        path_items: &[PathItem],
    ) -> Vec<String> {
        let sum = Self::sum_name(context);
        let count = Self::count_name(context);
        let item = path::item_expression(path_items);
        vec![
            format!("{sum} = {sum} + {item}"),
            format!("{count} = {count} + 1"),
        ]
    }

    fn assignment_statement(&self, context: &AggregateFunctionContext) -> Statement {
        let sum = Self::sum_name(context);
        let count = Self::count_name(context);
        Statement::assign(
            format!("{DEST_ALIAS}.{}", context.member.name),
            format!("{count} == 0 ? 0 : {sum} / {count}"),
        )
    }
}
