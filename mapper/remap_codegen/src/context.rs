//! Per-member generation context.

use std::sync::Arc;

use remap_diagnostic::{invalid_aggregate_path, ConfigResult};
use remap_ir::TypeRef;

use crate::descriptors::{ClassMappingDescriptor, MemberMappingDescriptor};
use crate::functions::AggregateCodeGenerator;
use crate::path::{self, build_aggregate_path_items, PathItem};
use crate::registry::{resolve_generator, FunctionRegistry, ImplementationRef};

/// Everything one destination member needs during a single generation
/// pass: its descriptors, the bound implementation, the synthesized
/// accumulator-object name, the chosen strategy, and the resolved path.
///
/// Created once per member, consumed once, then discarded.
pub struct AggregateFunctionContext {
    pub member: MemberMappingDescriptor,
    pub class: ClassMappingDescriptor,
    pub implementation: ImplementationRef,
    pub object_name: String,
    pub generator: Arc<dyn AggregateCodeGenerator>,
    pub path_items: Vec<PathItem>,
    source_item: TypeRef,
}

impl AggregateFunctionContext {
    /// Build the context for one destination member.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction` (propagated from the registry lookup)
    /// - `UnsupportedImplementation` from generator resolution
    /// - `InvalidAggregatePath` when path resolution yields no items
    pub fn create(
        class: &ClassMappingDescriptor,
        member: &MemberMappingDescriptor,
        registry: &FunctionRegistry,
    ) -> ConfigResult<Self> {
        let (implementation, registration) = registry.resolve(member)?;
        let generator = resolve_generator(&registration, member)?;
        let path_items = build_aggregate_path_items(class, member)?;

        // Path resolution already rejects empty paths, but the source item
        // lookup must not assume that.
        let source_item = match path_items.last() {
            Some(item) => item.element.clone(),
            None => return Err(invalid_aggregate_path(&member.name)),
        };

        let object_name = format!(
            "_{}_to_{}_Fn_",
            member.aggregate.function_object, member.name
        );

        Ok(AggregateFunctionContext {
            member: member.clone(),
            class: class.clone(),
            implementation,
            object_name,
            generator,
            path_items,
            source_item,
        })
    }

    /// The element type consumed by the aggregate function: the final
    /// path item's element type.
    pub fn source_item_type(&self) -> &TypeRef {
        &self.source_item
    }

    /// The expression yielding the aggregated value inside the innermost
    /// loop.
    pub fn item_expression(&self) -> String {
        path::item_expression(&self.path_items)
    }
}
