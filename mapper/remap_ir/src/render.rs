//! Statement rendering.
//!
//! Turns a statement sequence into target-language source text. Rendering
//! is total: every statement form has exactly one layout, terminators and
//! indentation are produced by construction, and the output always ends
//! with a single newline.

use crate::Statement;

/// String-based output emitter.
///
/// Builds the rendered text incrementally with 4-space indentation.
#[derive(Default)]
struct Emitter {
    buffer: String,
}

impl Emitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * 4 {
            self.buffer.push(' ');
        }
    }

    /// Enforce the trailing-newline rule on the finished buffer.
    fn finish(mut self) -> String {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer
    }
}

/// Render a statement sequence to source text.
///
/// An empty sequence renders to an empty string.
pub fn render(statements: &[Statement]) -> String {
    let mut emitter = Emitter::default();
    for statement in statements {
        render_statement(&mut emitter, statement, 0);
    }
    emitter.finish()
}

fn render_statement(emitter: &mut Emitter, statement: &Statement, level: usize) {
    emitter.emit_indent(level);
    match statement {
        Statement::DeclareInit { ty, name, init } => {
            emitter.emit(&format!("{ty} {name} = {init};"));
            emitter.emit_newline();
        }
        Statement::Guard { condition, body } => {
            emitter.emit(&format!("if ({condition})"));
            emitter.emit_newline();
            render_block(emitter, body, level);
        }
        Statement::Loop {
            element,
            var,
            collection,
            body,
        } => {
            emitter.emit(&format!("foreach ({element} {var} in {collection})"));
            emitter.emit_newline();
            render_block(emitter, body, level);
        }
        Statement::Expr(expression) => {
            emitter.emit(&format!("{expression};"));
            emitter.emit_newline();
        }
        Statement::Assign { target, value } => {
            emitter.emit(&format!("{target} = {value};"));
            emitter.emit_newline();
        }
    }
}

fn render_block(emitter: &mut Emitter, body: &[Statement], level: usize) {
    emitter.emit_indent(level);
    emitter.emit("{");
    emitter.emit_newline();
    for statement in body {
        render_statement(emitter, statement, level + 1);
    }
    emitter.emit_indent(level);
    emitter.emit("}");
    emitter.emit_newline();
}
