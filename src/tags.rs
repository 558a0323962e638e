//! Tag definitions and attachment — what each promise tag does when the
//! host encounters it.

use crate::host::{ErrorReporter, TagError, TagOccurrence};
use crate::model::{Argument, Doclet, PromiseTagKind};
use crate::parser;
use tracing::trace;

/// Callback invoked by the host once per tag occurrence.
pub type OnTagged = Box<dyn Fn(&mut Doclet, &TagOccurrence, &mut dyn ErrorReporter)>;

/// Host-facing configuration for one tag, consumed by the tag dictionary.
pub struct TagDefinition {
    /// The host rejects bare usages (`@resolvedwith` with no value).
    pub must_have_value: bool,
    /// The value may carry a name token.
    pub can_have_name: bool,
    /// The value may carry a bracketed type token.
    pub can_have_type: bool,
    pub on_tagged: OnTagged,
}

/// Build the tag definition for one promise tag kind.
pub fn promise_tag_definition(kind: PromiseTagKind) -> TagDefinition {
    TagDefinition {
        must_have_value: true,
        can_have_name: true,
        can_have_type: true,
        on_tagged: Box::new(move |doclet, tag, reporter| {
            attach_promise_tag(kind, doclet, tag, reporter);
        }),
    }
}

/// Attachment logic for one occurrence: validate placement, parse the
/// payload, fan the argument out to the doclet's `@returns` entries.
pub fn attach_promise_tag(
    kind: PromiseTagKind,
    doclet: &mut Doclet,
    tag: &TagOccurrence,
    reporter: &mut dyn ErrorReporter,
) {
    // No @returns block? Complain, but keep the run alive.
    if doclet.returns.is_empty() {
        reporter.handle(TagError::MissingReturns {
            tag: kind.as_str().to_string(),
        });
        return;
    }

    let Some(text) = tag.text.as_deref() else {
        return;
    };
    let Some(parsed) = parser::parse_argument(text) else {
        // Payload without the `{type} name` shape is skipped, not reported
        trace!(tag = %kind, "tag payload does not parse, skipping");
        return;
    };

    let argument = Argument::new(parsed.type_text, parsed.name, parsed.description);

    // TODO: when a method has multiple @returns, decorate only the entry
    // that returns the promise instead of all of them.
    for entry in &mut doclet.returns {
        entry
            .promise_mut()
            .arguments_mut(kind)
            .push(argument.clone());
    }
}
