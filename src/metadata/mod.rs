//! Metadata extraction from HTML meta tags.
//!
//! Every `<meta>` element in `<head>` is tested against every rule of
//! [`META_RULES`] in catalog order. A match with non-empty `content`
//! overwrites whatever the field held before, so the last matching rule in
//! catalog order decides the value. Among elements matching the same rule,
//! the later element in the document wins.

mod rules;

use std::collections::BTreeMap;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};

pub use rules::{MetaRule, META_RULES};

/// Resolve the meta fields of a document.
///
/// Fails with [`Error::MissingElement`] when the document has no `<head>`.
pub fn resolve_metas(doc: &Document) -> Result<BTreeMap<String, String>> {
    let head = dom::find_first(doc, "head").ok_or(Error::MissingElement("head"))?;
    Ok(resolve_metas_in(&head))
}

/// Resolve meta fields from the `<meta>` elements under `head`.
#[must_use]
pub fn resolve_metas_in(head: &Selection) -> BTreeMap<String, String> {
    let elements = dom::find_all(head, "meta");
    let mut metas = BTreeMap::new();

    for rule in &META_RULES {
        for element in elements.iter().filter(|element| matches_rule(element, rule)) {
            match dom::get_attribute(element, "content") {
                Some(content) if !content.is_empty() => {
                    metas.insert(rule.field.to_string(), content);
                }
                _ => {}
            }
        }
    }

    metas
}

fn matches_rule(element: &Selection, rule: &MetaRule) -> bool {
    dom::has_attribute(element, rule.key)
        && dom::get_attribute(element, rule.key).is_some_and(|value| value.to_lowercase() == rule.tag)
}
