//! Host seams — the traits the documentation generator implements and
//! the types that cross them.

use crate::tags::TagDefinition;
use std::collections::HashMap;
use thiserror::Error;

/// One occurrence of a tag in a doc comment, as handed over by the
/// host's comment parser.
#[derive(Debug, Default, Clone)]
pub struct TagOccurrence {
    /// Raw tag value: everything after `@tagname `. Absent when the host
    /// parsed a bare tag.
    pub text: Option<String>,
}

impl TagOccurrence {
    pub fn new(text: impl Into<String>) -> TagOccurrence {
        TagOccurrence {
            text: Some(text.into()),
        }
    }
}

/// Errors surfaced through the host's error channel.
///
/// Non-fatal by design: a malformed comment should not abort the
/// documentation run, so the host logs or collects these and keeps going.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    /// Promise tags only make sense in a block that documents a return value.
    #[error("@{tag} must come after a @returns")]
    MissingReturns { tag: String },
}

/// The host's error channel.
pub trait ErrorReporter {
    fn handle(&mut self, error: TagError);
}

/// Reporter that collects errors in order. Useful for hosts that batch
/// diagnostics, and for tests.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub errors: Vec<TagError>,
}

impl ErrorReporter for CollectingReporter {
    fn handle(&mut self, error: TagError) {
        self.errors.push(error);
    }
}

/// The host's tag registry. Re-registration and unregistration semantics
/// are the host's business.
pub trait TagDictionary {
    fn define_tag(&mut self, name: &str, definition: TagDefinition);
}

/// HashMap-backed dictionary for hosts without their own registry.
#[derive(Default)]
pub struct Dictionary {
    tags: HashMap<String, TagDefinition>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    pub fn get(&self, name: &str) -> Option<&TagDefinition> {
        self.tags.get(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl TagDictionary for Dictionary {
    fn define_tag(&mut self, name: &str, definition: TagDefinition) {
        self.tags.insert(name.to_string(), definition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_returns_message_names_the_tag() {
        let err = TagError::MissingReturns {
            tag: "rejectedwith".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "@rejectedwith must come after a @returns"
        );
    }

    #[test]
    fn collecting_reporter_preserves_order() {
        let mut reporter = CollectingReporter::default();
        reporter.handle(TagError::MissingReturns { tag: "a".into() });
        reporter.handle(TagError::MissingReturns { tag: "b".into() });
        assert_eq!(reporter.errors.len(), 2);
        assert_eq!(
            reporter.errors[0],
            TagError::MissingReturns { tag: "a".into() }
        );
    }
}
