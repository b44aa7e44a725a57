//! Aggregate expression builder.
//!
//! Orchestrates one generation pass for a destination class: all
//! accumulator initializations first, then the guarded traversal of the
//! shared collection path carrying every member's per-iteration updates,
//! then the final accumulator-to-member assignments. N members sharing a
//! traversal cost exactly one loop nest, not N.
//!
//! Members whose collection-path prefixes diverge are grouped: each
//! distinct prefix gets its own independent guarded nest, in first-seen
//! member order.

use rustc_hash::FxHashMap;

use remap_diagnostic::ConfigResult;
use remap_ir::Statement;

use crate::context::AggregateFunctionContext;
use crate::descriptors::{ClassMappingDescriptor, MemberMappingDescriptor};
use crate::path::PathItem;
use crate::registry::FunctionRegistry;

/// Generates the statement sequence populating the aggregated members of
/// one destination class.
///
/// Construction is fail-fast: every member's function binding, strategy
/// resolution, and path resolution happens in [`new`](Self::new), so a
/// builder that exists can always generate. The generated sequence is
/// cached; repeated retrieval does not regenerate.
pub struct AggregateExpressionBuilder {
    contexts: Vec<AggregateFunctionContext>,
    statements: Option<Vec<Statement>>,
}

impl AggregateExpressionBuilder {
    /// Build one context per destination member, in member order.
    ///
    /// # Errors
    ///
    /// Fails on the first member whose function is unknown, whose
    /// registration has no usable capability, or whose path resolves to
    /// nothing. No statements are produced for the class in that case.
    pub fn new(
        class: &ClassMappingDescriptor,
        members: &[MemberMappingDescriptor],
        registry: &FunctionRegistry,
    ) -> ConfigResult<Self> {
        let mut contexts = Vec::with_capacity(members.len());
        for member in members {
            contexts.push(AggregateFunctionContext::create(class, member, registry)?);
        }
        Ok(AggregateExpressionBuilder {
            contexts,
            statements: None,
        })
    }

    /// The generated statement sequence for the class.
    ///
    /// Generated on first call and cached on the builder afterwards.
    pub fn statements(&mut self) -> &[Statement] {
        if self.statements.is_none() {
            self.statements = Some(self.generate());
        }
        self.statements.as_deref().unwrap_or(&[])
    }

    fn generate(&self) -> Vec<Statement> {
        let mut statements = Vec::new();
        if self.contexts.is_empty() {
            return statements;
        }

        tracing::debug!(
            class = %self.contexts[0].class.name,
            members = self.contexts.len(),
            "generating aggregate statements"
        );

        for context in &self.contexts {
            statements.extend(context.generator.initialization_statements(context));
        }

        statements.extend(traversal_statements(&self.contexts));

        for context in &self.contexts {
            statements.push(context.generator.assignment_statement(context));
        }

        statements
    }
}

/// One guarded loop nest per distinct collection-path prefix, in
/// first-seen member order.
fn traversal_statements(contexts: &[AggregateFunctionContext]) -> Vec<Statement> {
    let mut groups: Vec<Vec<&AggregateFunctionContext>> = Vec::new();
    let mut group_index: FxHashMap<Vec<(String, String)>, usize> = FxHashMap::default();

    for context in contexts {
        let key = prefix_key(&context.path_items);
        match group_index.get(&key) {
            Some(&index) => groups[index].push(context),
            None => {
                group_index.insert(key, groups.len());
                groups.push(vec![context]);
            }
        }
    }

    groups
        .iter()
        .filter_map(|group| group_traversal(group))
        .collect()
}

/// The traversal structure a context's path produces: the guard root plus
/// the chain of collection hops. Contexts with equal keys share one nest.
fn prefix_key(path_items: &[PathItem]) -> Vec<(String, String)> {
    let mut key = Vec::new();
    if let Some(first) = path_items.first() {
        key.push((first.target.clone(), first.expression.clone()));
    }
    key.extend(
        path_items
            .iter()
            .filter(|item| item.is_collection)
            .map(|item| (item.target.clone(), item.expression.clone())),
    );
    key
}

/// The guarded loop nest for one prefix group.
///
/// The loop and guard structure comes from the group's first context;
/// every context in the group contributes its per-iteration updates to
/// the innermost body, terminator-normalized.
fn group_traversal(group: &[&AggregateFunctionContext]) -> Option<Statement> {
    let leader = group.first()?;

    let mut body: Vec<Statement> = Vec::new();
    for context in group {
        for update in context
            .generator
            .iteration_statements(context, &context.path_items)
        {
            body.push(Statement::expr(update));
        }
    }

    for item in leader
        .path_items
        .iter()
        .rev()
        .filter(|item| item.is_collection)
    {
        body = vec![Statement::nested_loop(
            item.element.clone(),
            item.object.clone(),
            format!("{}.{}", item.target, item.expression),
            body,
        )];
    }

    let first = leader.path_items.first()?;
    Some(Statement::guard(
        format!("{}.{} != null", first.target, first.expression),
        body,
    ))
}
