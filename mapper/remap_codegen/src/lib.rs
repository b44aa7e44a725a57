//! Remap Codegen - aggregate-expression code generation.
//!
//! This crate generates the statement sequence that populates aggregated
//! destination members (sum, count, average, ...) when a mapping walks a
//! source path crossing one or more collection-valued members.
//!
//! # Pipeline Position
//!
//! ```text
//! Config Load → Descriptors → **Aggregate Codegen** → Render → Compile
//! ```
//!
//! # What Happens During Generation
//!
//! 1. **Context construction** (`context`): per destination member, the
//!    aggregate function is resolved and bound to its element type, a
//!    generation strategy is chosen, and the source path is resolved into
//!    aliased path items.
//!
//! 2. **Statement emission** (`builder`): accumulator initializations for
//!    every member, one guarded loop nest per distinct collection-path
//!    prefix carrying every member's per-iteration updates, then the final
//!    accumulator-to-member assignments.
//!
//! Generation is synchronous and runs once per destination class at
//! configuration-build time; the emitted statements are what execute per
//! mapped record.

mod builder;
mod context;
mod descriptors;
pub mod functions;
mod path;
mod registry;

pub use builder::AggregateExpressionBuilder;
pub use context::AggregateFunctionContext;
pub use descriptors::{
    AggregateMappingDescription, ClassMappingDescriptor, MemberMappingDescriptor, MemberShape,
    PathSegment,
};
pub use functions::{AggregateCodeGenerator, AggregateFunction};
pub use path::{build_aggregate_path_items, PathItem, DEST_ALIAS, SOURCE_ALIAS};
pub use registry::{resolve_generator, FunctionRegistry, ImplementationRef, Registration};
