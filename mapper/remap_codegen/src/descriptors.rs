//! Mapping descriptors.
//!
//! Read-only input produced by the configuration loader. The loader has
//! already resolved real types into `TypeRef` handles and decomposed each
//! aggregated member's source expression into raw path segments; this
//! crate never parses configuration text itself.

use remap_ir::TypeRef;

/// Describes one destination class being generated and the source type it
/// maps from. Immutable once constructed.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassMappingDescriptor {
    pub name: String,
    pub source: TypeRef,
}

impl ClassMappingDescriptor {
    pub fn new(name: impl Into<String>, source: TypeRef) -> Self {
        ClassMappingDescriptor {
            name: name.into(),
            source,
        }
    }
}

/// Shape of a destination member's target type.
///
/// Drives generic binding: array and list members bind the aggregate
/// function to their element type, scalar members to the type itself.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemberShape {
    Scalar,
    Array,
    List,
}

/// The aggregate sub-record of a member mapping: which function populates
/// the member, the symbolic function-object name from the configuration,
/// and the resolved target element type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AggregateMappingDescription {
    pub function_name: String,
    pub function_object: String,
    pub target_type: TypeRef,
}

impl AggregateMappingDescription {
    pub fn new(
        function_name: impl Into<String>,
        function_object: impl Into<String>,
        target_type: TypeRef,
    ) -> Self {
        AggregateMappingDescription {
            function_name: function_name.into(),
            function_object: function_object.into(),
            target_type,
        }
    }
}

/// One raw hop of a member's source expression, as decomposed by the
/// configuration loader: the accessed property name, its element type,
/// and whether the hop iterates a collection.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PathSegment {
    pub name: String,
    pub element: TypeRef,
    pub is_collection: bool,
}

impl PathSegment {
    /// A collection-valued hop.
    pub fn collection(name: impl Into<String>, element: TypeRef) -> Self {
        PathSegment {
            name: name.into(),
            element,
            is_collection: true,
        }
    }

    /// A scalar hop.
    pub fn scalar(name: impl Into<String>, element: TypeRef) -> Self {
        PathSegment {
            name: name.into(),
            element,
            is_collection: false,
        }
    }
}

/// Describes one aggregated destination member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MemberMappingDescriptor {
    pub name: String,
    pub shape: MemberShape,
    pub aggregate: AggregateMappingDescription,
    pub source_path: Vec<PathSegment>,
}

impl MemberMappingDescriptor {
    pub fn new(
        name: impl Into<String>,
        shape: MemberShape,
        aggregate: AggregateMappingDescription,
        source_path: Vec<PathSegment>,
    ) -> Self {
        MemberMappingDescriptor {
            name: name.into(),
            shape,
            aggregate,
            source_path,
        }
    }
}
