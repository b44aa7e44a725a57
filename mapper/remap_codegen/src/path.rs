//! Aggregate-path resolution.
//!
//! Turns a member's loader-produced path segments into aliased path items:
//! each hop knows the alias it navigates from (`target`), the sub-expression
//! it accesses, and, for collection hops, the iteration-variable alias it
//! introduces for the hops after it.

use remap_diagnostic::{invalid_aggregate_path, ConfigResult};
use remap_ir::TypeRef;

use crate::descriptors::{ClassMappingDescriptor, MemberMappingDescriptor};

/// Alias of the source object inside a generated mapping function.
pub const SOURCE_ALIAS: &str = "src";

/// Alias of the destination object inside a generated mapping function.
pub const DEST_ALIAS: &str = "dest";

/// One aliased hop of a source-expression path.
///
/// The final item's `element` is the type consumed by the aggregate
/// function.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PathItem {
    /// Element type of this hop.
    pub element: TypeRef,
    /// Iteration-variable alias introduced by this hop (used only when
    /// `is_collection` is set).
    pub object: String,
    /// Alias of the object being navigated from.
    pub target: String,
    /// The sub-expression accessed on `target`.
    pub expression: String,
    /// Whether this hop iterates a collection.
    pub is_collection: bool,
}

/// Resolve a member's source path into aliased path items.
///
/// The first hop navigates from [`SOURCE_ALIAS`]. Each collection hop
/// introduces an iteration variable that becomes the navigation target of
/// the hops after it; scalar hops extend the target expression in place.
///
/// # Errors
///
/// `InvalidAggregatePath` when the member's source path has no segments —
/// an aggregated member with nothing to walk is a configuration defect,
/// never a silently skipped member.
pub fn build_aggregate_path_items(
    class: &ClassMappingDescriptor,
    member: &MemberMappingDescriptor,
) -> ConfigResult<Vec<PathItem>> {
    if member.source_path.is_empty() {
        return Err(invalid_aggregate_path(&member.name));
    }

    tracing::trace!(
        class = %class.name,
        member = %member.name,
        segments = member.source_path.len(),
        "resolving aggregate path"
    );

    let mut items = Vec::with_capacity(member.source_path.len());
    let mut target = SOURCE_ALIAS.to_string();

    for (index, segment) in member.source_path.iter().enumerate() {
        let object = format!("item{}", index + 1);
        items.push(PathItem {
            element: segment.element.clone(),
            object: object.clone(),
            target: target.clone(),
            expression: segment.name.clone(),
            is_collection: segment.is_collection,
        });
        target = if segment.is_collection {
            object
        } else {
            format!("{target}.{}", segment.name)
        };
    }

    Ok(items)
}

/// The expression yielding the aggregated value at the innermost loop
/// position: the iteration variable itself when the final hop is a
/// collection, otherwise the final property access.
pub fn item_expression(items: &[PathItem]) -> String {
    match items.last() {
        Some(item) if item.is_collection => item.object.clone(),
        Some(item) => format!("{}.{}", item.target, item.expression),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{AggregateMappingDescription, MemberShape, PathSegment};
    use pretty_assertions::assert_eq;
    use remap_diagnostic::ConfigErrorKind;

    fn test_class() -> ClassMappingDescriptor {
        ClassMappingDescriptor::new("CustomerSummary", TypeRef::named("Customer"))
    }

    fn test_member(segments: Vec<PathSegment>) -> MemberMappingDescriptor {
        MemberMappingDescriptor::new(
            "TotalPrice",
            MemberShape::Scalar,
            AggregateMappingDescription::new("sum", "sum", TypeRef::named("decimal")),
            segments,
        )
    }

    #[test]
    fn collection_hops_chain_iteration_variables() {
        let member = test_member(vec![
            PathSegment::collection("Orders", TypeRef::named("Order")),
            PathSegment::collection("Lines", TypeRef::named("OrderLine")),
            PathSegment::scalar("Price", TypeRef::named("decimal")),
        ]);

        let items = match build_aggregate_path_items(&test_class(), &member) {
            Ok(items) => items,
            Err(err) => panic!("path resolution failed: {err}"),
        };

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].target, "src");
        assert_eq!(items[0].expression, "Orders");
        assert_eq!(items[0].object, "item1");
        assert_eq!(items[1].target, "item1");
        assert_eq!(items[1].expression, "Lines");
        assert_eq!(items[2].target, "item2");
        assert_eq!(items[2].expression, "Price");
        assert!(!items[2].is_collection);
    }

    #[test]
    fn scalar_hops_extend_the_target_in_place() {
        let member = test_member(vec![
            PathSegment::scalar("Account", TypeRef::named("Account")),
            PathSegment::collection("Orders", TypeRef::named("Order")),
        ]);

        let items = match build_aggregate_path_items(&test_class(), &member) {
            Ok(items) => items,
            Err(err) => panic!("path resolution failed: {err}"),
        };

        assert_eq!(items[1].target, "src.Account");
        assert_eq!(items[1].expression, "Orders");
    }

    #[test]
    fn empty_path_is_a_configuration_error() {
        let member = test_member(Vec::new());
        let err = match build_aggregate_path_items(&test_class(), &member) {
            Ok(_) => panic!("expected InvalidAggregatePath"),
            Err(err) => err,
        };
        assert!(matches!(
            err.kind(),
            ConfigErrorKind::InvalidAggregatePath { member } if member == "TotalPrice"
        ));
    }

    #[test]
    fn item_expression_uses_iteration_variable_for_collection_tail() {
        let member = test_member(vec![
            PathSegment::collection("Orders", TypeRef::named("Order")),
            PathSegment::collection("Lines", TypeRef::named("OrderLine")),
        ]);
        let items = match build_aggregate_path_items(&test_class(), &member) {
            Ok(items) => items,
            Err(err) => panic!("path resolution failed: {err}"),
        };
        assert_eq!(item_expression(&items), "item2");
    }

    #[test]
    fn item_expression_uses_property_access_for_scalar_tail() {
        let member = test_member(vec![
            PathSegment::collection("Orders", TypeRef::named("Order")),
            PathSegment::scalar("Total", TypeRef::named("decimal")),
        ]);
        let items = match build_aggregate_path_items(&test_class(), &member) {
            Ok(items) => items,
            Err(err) => panic!("path resolution failed: {err}"),
        };
        assert_eq!(item_expression(&items), "item1.Total");
    }
}
