//! Reference renderer producing Swift-style source for an implementation.
//!
//! Hosts normally render [`SynthesizedImplementation`] with their own syntax
//! tooling. This renderer gives a readable, deterministic form for hosts that
//! only need text and for reviewing generated members.

pub mod escape;
mod syntax;

use std::fmt::Display;

use crate::config::SynthesisOptions;
use crate::expr::Body;
use crate::member::{Initializer, Member, MethodMember, PropertyMember};
use crate::synthesize::SynthesizedImplementation;

use self::syntax::{EffectList, GenericParameters, ParameterList, WhereClause};

/// Line-oriented buffer tracking indentation depth.
struct SourceWriter {
    buffer: String,
    indent_unit: String,
    depth: usize,
}

impl SourceWriter {
    fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: " ".repeat(indent_width),
            depth: 0,
        }
    }

    fn line(&mut self, text: impl Display) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent_unit);
        }
        self.buffer.push_str(&text.to_string());
        self.buffer.push('\n');
    }

    /// Writes `header {`, the block contents one level deeper, then `}`.
    fn block(&mut self, header: impl Display, contents: impl FnOnce(&mut Self)) {
        self.line(format_args!("{header} {{"));
        self.depth += 1;
        contents(self);
        self.depth -= 1;
        self.line("}");
    }

    fn body(&mut self, body: &Body) {
        for statement in body.statements() {
            self.line(statement);
        }
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Renders `implementation` as a final class declaration.
///
/// # Examples
///
/// ```
/// use noop_synth::config::SynthesisOptions;
/// use noop_synth::model::{Declaration, InterfaceDeclaration};
/// use noop_synth::overrides::OverrideArgument;
/// use noop_synth::render::render_implementation;
/// use noop_synth::synthesize;
///
/// let declaration = Declaration::from(InterfaceDeclaration::new("Marker"));
/// let synthesis = synthesize(&declaration, &OverrideArgument::Absent);
/// let implementation = synthesis.implementation.expect("interface synthesizes");
/// let source = render_implementation(&implementation, &SynthesisOptions::default());
/// assert_eq!(
///     source,
///     "internal final class NoopMarker: Marker {\n    internal init() {\n    }\n}\n"
/// );
/// ```
#[must_use]
pub fn render_implementation(
    implementation: &SynthesizedImplementation,
    options: &SynthesisOptions,
) -> String {
    let mut writer = SourceWriter::new(options.indent_width);
    let header = format!(
        "{} final class {}: {}",
        implementation.visibility, implementation.name, implementation.conforms_to
    );
    writer.block(header, |w| {
        for member in &implementation.members {
            render_member(w, member);
        }
    });
    writer.finish()
}

/// Renders a single member at top level, mainly for focused inspection.
#[must_use]
pub fn render_member_source(member: &Member, options: &SynthesisOptions) -> String {
    let mut writer = SourceWriter::new(options.indent_width);
    render_member(&mut writer, member);
    writer.finish()
}

fn render_member(writer: &mut SourceWriter, member: &Member) {
    match member {
        Member::Property(property) => render_property(writer, property),
        Member::Method(method) => render_method(writer, method),
        Member::Initializer(initializer) => render_initializer(writer, *initializer),
    }
}

fn render_property(writer: &mut SourceWriter, property: &PropertyMember) {
    let header = format!(
        "{} var {}: {}",
        property.visibility, property.name, property.ty
    );
    writer.block(header, |w| {
        w.block("get", |w| w.body(&property.getter));
    });
}

fn render_method(writer: &mut SourceWriter, method: &MethodMember) {
    let generics = method.generics.as_ref();
    let return_clause = method
        .return_type
        .as_ref()
        .map(|ty| format!(" -> {ty}"))
        .unwrap_or_default();
    let header = format!(
        "{} func {}{}{}{}{}{}",
        method.visibility,
        method.name,
        GenericParameters(generics),
        ParameterList(&method.parameters),
        EffectList(method.effects),
        return_clause,
        WhereClause(generics),
    );
    writer.block(header, |w| w.body(&method.body));
}

fn render_initializer(writer: &mut SourceWriter, initializer: Initializer) {
    writer.block(format_args!("{} init()", initializer.visibility), |_| {});
}
