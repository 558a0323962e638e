//! Data model for promise documentation — what gets attached to doclets.

use serde::Serialize;

/// The three promise documentation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromiseTagKind {
    ResolvedWith,
    RejectedWith,
    NotifiedWith,
}

impl PromiseTagKind {
    /// All supported kinds, in registration order.
    pub const ALL: [PromiseTagKind; 3] = [
        PromiseTagKind::ResolvedWith,
        PromiseTagKind::RejectedWith,
        PromiseTagKind::NotifiedWith,
    ];

    /// The tag name as written in doc comments (without the leading `@`).
    pub fn as_str(self) -> &'static str {
        match self {
            PromiseTagKind::ResolvedWith => "resolvedwith",
            PromiseTagKind::RejectedWith => "rejectedwith",
            PromiseTagKind::NotifiedWith => "notifiedwith",
        }
    }

    /// Look up a kind by its tag name.
    pub fn from_name(name: &str) -> Option<PromiseTagKind> {
        match name {
            "resolvedwith" => Some(PromiseTagKind::ResolvedWith),
            "rejectedwith" => Some(PromiseTagKind::RejectedWith),
            "notifiedwith" => Some(PromiseTagKind::NotifiedWith),
            _ => None,
        }
    }
}

impl std::fmt::Display for PromiseTagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented code entity, as produced by the host's comment parser.
///
/// The host owns the full doclet; only the parts this crate reads or
/// mutates are modeled here.
#[derive(Debug, Default, Serialize)]
pub struct Doclet {
    /// `@returns` entries, populated by the host before tag callbacks run.
    pub returns: Vec<ReturnEntry>,
}

/// One `@returns` entry on a doclet.
#[derive(Debug, Default, Serialize)]
pub struct ReturnEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Promise metadata, attached lazily on the first promise tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promise: Option<PromiseBucket>,
}

impl ReturnEntry {
    /// The promise bucket for this entry, created empty if absent.
    pub fn promise_mut(&mut self) -> &mut PromiseBucket {
        self.promise.get_or_insert_with(PromiseBucket::default)
    }
}

/// Per-return promise metadata: one argument list per tag kind.
#[derive(Debug, Default, Serialize)]
pub struct PromiseBucket {
    pub resolvedwith: Vec<Argument>,
    pub rejectedwith: Vec<Argument>,
    pub notifiedwith: Vec<Argument>,
}

impl PromiseBucket {
    /// The argument list for one tag kind.
    pub fn arguments(&self, kind: PromiseTagKind) -> &[Argument] {
        match kind {
            PromiseTagKind::ResolvedWith => &self.resolvedwith,
            PromiseTagKind::RejectedWith => &self.rejectedwith,
            PromiseTagKind::NotifiedWith => &self.notifiedwith,
        }
    }

    pub fn arguments_mut(&mut self, kind: PromiseTagKind) -> &mut Vec<Argument> {
        match kind {
            PromiseTagKind::ResolvedWith => &mut self.resolvedwith,
            PromiseTagKind::RejectedWith => &mut self.rejectedwith,
            PromiseTagKind::NotifiedWith => &mut self.notifiedwith,
        }
    }
}

/// One parsed occurrence of a promise tag.
///
/// Shaped like a method param so hosts can reuse their params template
/// for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Argument {
    /// Build an argument from raw parse output.
    ///
    /// A `None` type leaves `type.names` empty; otherwise the type text is
    /// split on `|` so union types render as separate names. Pieces are
    /// used verbatim — no trimming, no de-duplication.
    pub fn new(
        type_text: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Argument {
        let names = match type_text {
            Some(text) => text.split('|').map(str::to_string).collect(),
            None => Vec::new(),
        };
        Argument {
            type_ref: TypeRef { names },
            name,
            description,
        }
    }
}

/// A type reference, decomposed into alternative names.
///
/// `names` is always a sequence, never a bare string, so single and union
/// types render uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeRef {
    pub names: Vec<String>,
}
