//! Remap IR - Statement representation for generated mapping code.
//!
//! This crate contains the intermediate representation shared between the
//! aggregate code generator and the renderer:
//! - `TypeRef`: target-language type handles with type-name formatting
//! - `Statement`: imperative statement nodes (declarations, guards, loops,
//!   opaque updates, assignments)
//! - `render`: total rendering of a statement sequence into source text
//!
//! # Design Philosophy
//!
//! Statements are built as an explicit tree, never as concatenated text.
//! The renderer owns all layout concerns (indentation, braces, terminators),
//! so a well-formed `Statement` sequence always renders to well-formed
//! target source.

mod render;
mod stmt;
mod type_ref;

pub use render::render;
pub use stmt::Statement;
pub use type_ref::TypeRef;
