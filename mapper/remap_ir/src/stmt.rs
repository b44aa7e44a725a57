//! Statement nodes.
//!
//! The generator emits these nodes; the renderer turns them into source
//! text. Expressions stay opaque strings — the generator composes them
//! from descriptor data and strategy templates, and nothing downstream
//! needs to look inside them.

use crate::TypeRef;

/// One imperative statement in a generated mapping function body.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
    /// Declare a local variable and initialize it: `ty name = init;`
    DeclareInit {
        ty: TypeRef,
        name: String,
        init: String,
    },

    /// Single-branch conditional: the body runs only when `condition`
    /// holds. There is no else branch.
    Guard {
        condition: String,
        body: Vec<Statement>,
    },

    /// Iteration over a collection expression:
    /// `foreach (element var in collection) { body }`
    Loop {
        element: TypeRef,
        var: String,
        collection: String,
        body: Vec<Statement>,
    },

    /// An opaque expression statement, e.g. an accumulator update. The
    /// expression carries no terminator; the renderer appends it.
    Expr(String),

    /// Assignment: `target = value;`
    Assign { target: String, value: String },
}

impl Statement {
    /// Declare-and-initialize statement.
    pub fn declare_init(ty: TypeRef, name: impl Into<String>, init: impl Into<String>) -> Self {
        Statement::DeclareInit {
            ty,
            name: name.into(),
            init: init.into(),
        }
    }

    /// Single-branch guard around `body`.
    pub fn guard(condition: impl Into<String>, body: Vec<Statement>) -> Self {
        Statement::Guard {
            condition: condition.into(),
            body,
        }
    }

    /// Loop iterating `var` of type `element` over `collection`.
    pub fn nested_loop(
        element: TypeRef,
        var: impl Into<String>,
        collection: impl Into<String>,
        body: Vec<Statement>,
    ) -> Self {
        Statement::Loop {
            element,
            var: var.into(),
            collection: collection.into(),
            body,
        }
    }

    /// Opaque expression statement. Any trailing terminators are stripped;
    /// the renderer emits exactly one.
    pub fn expr(expression: impl Into<String>) -> Self {
        let expression = expression.into();
        let trimmed = expression.trim_end().trim_end_matches(';').trim_end();
        Statement::Expr(trimmed.to_string())
    }

    /// Assignment statement.
    pub fn assign(target: impl Into<String>, value: impl Into<String>) -> Self {
        Statement::Assign {
            target: target.into(),
            value: value.into(),
        }
    }
}
