//! promise-tags — documentation tags for methods that return promises.
//!
//! Adds three tags to a documentation generator:
//!
//! ```text
//! @resolvedwith {type} name description
//! @rejectedwith {type} name description
//! @notifiedwith {type} name description
//! ```
//!
//! The name token also lets authors document an object and its properties:
//!
//! ```text
//! @resolvedwith {object} obj       Some object.
//! @resolvedwith {object} obj.prop  Some property of some object.
//! ```
//!
//! The tags must appear in a block that also carries a `@returns` tag;
//! whether they come before or after it does not matter, but it has to be
//! there. Parsed arguments land on each return entry's
//! [`model::PromiseBucket`], shaped like method params so hosts can reuse
//! their params template for display.
//!
//! The host supplies the comment parsing, the tag registry (see
//! [`host::TagDictionary`]) and the error channel (see
//! [`host::ErrorReporter`]); this crate supplies the tag definitions and
//! the attachment logic.

pub mod host;
pub mod model;
pub mod parser;
pub mod tags;

use host::TagDictionary;
use model::PromiseTagKind;

/// Register the three promise tags with the host's dictionary.
///
/// Called once at plugin load time.
pub fn define_tags(dictionary: &mut dyn TagDictionary) {
    for kind in PromiseTagKind::ALL {
        dictionary.define_tag(kind.as_str(), tags::promise_tag_definition(kind));
    }
}
