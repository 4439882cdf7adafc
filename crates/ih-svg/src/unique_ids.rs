//! Identifier deduplication for documents inlined side by side.
//!
//! Two copies of one icon placed in the same page would otherwise share ids,
//! and `url(#grad)` in the copy would resolve to the gradient of the
//! original. Every id in a subtree gets a fresh random suffix and the
//! references inside the same subtree are rewritten to match.

use tracing::debug;
use uuid::Uuid;

use crate::node::DocumentNode;

/// Attributes that may hold a functional `url(#id)` reference.
const URL_ATTRIBUTES: [&str; 10] = [
    "fill",
    "stroke",
    "href",
    "style",
    "clip-path",
    "mask",
    "filter",
    "marker-start",
    "marker-mid",
    "marker-end",
];

/// Attributes that may hold a bare `#id` fragment reference, with whether
/// the value must itself start with `#`. Plain `href` also carries external
/// links such as `page.html#top`, which never point into the subtree.
const HASH_ATTRIBUTES: [(&str, bool); 2] = [("xlink:href", false), ("href", true)];

/// Original id to random token, in the order ids were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdRewriteMap {
    entries: Vec<(String, String)>,
}

impl IdRewriteMap {
    /// Token assigned to `original`.
    #[must_use]
    pub fn token(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == original)
            .map(|(_, token)| token.as_str())
    }

    /// The id that replaced `original`.
    #[must_use]
    pub fn fresh_id(&self, original: &str) -> Option<String> {
        self.token(original).map(|token| format!("{original}-{token}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, token)| (key.as_str(), token.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn token_for(&mut self, original: &str) -> String {
        if let Some(token) = self.token(original) {
            return token.to_string();
        }
        let token = Uuid::new_v4().to_string();
        self.entries.push((original.to_string(), token.clone()));
        token
    }
}

/// Give every id under `root` a unique suffix and rewrite the references
/// that point at them.
///
/// A repeated id maps to the same fresh id every time it occurs. References
/// to ids outside the subtree are left alone.
pub fn make_ids_unique<N: DocumentNode>(root: &mut N) -> IdRewriteMap {
    let mut map = IdRewriteMap::default();
    assign_ids(root, &mut map);
    if !map.is_empty() {
        rewrite_references(root, &map);
    }
    debug!(ids = map.len(), root = %root.tag_name(), "made ids unique");
    map
}

fn assign_ids<N: DocumentNode>(node: &mut N, map: &mut IdRewriteMap) {
    if let Some(original) = node.id().filter(|id| !id.is_empty()) {
        let token = map.token_for(&original);
        node.set_id(&format!("{original}-{token}"));
    }
    node.for_each_child(&mut |child| assign_ids(child, map));
}

fn rewrite_references<N: DocumentNode>(node: &mut N, map: &IdRewriteMap) {
    for name in URL_ATTRIBUTES {
        if let Some(updated) = node
            .attribute(name)
            .and_then(|value| rewrite_url_reference(&value, map))
        {
            node.set_attribute(name, &updated);
        }
    }
    for (name, local_only) in HASH_ATTRIBUTES {
        if let Some(updated) = node
            .attribute(name)
            .filter(|value| !local_only || value.starts_with('#'))
            .and_then(|value| rewrite_fragment_reference(&value, map))
        {
            node.set_attribute(name, &updated);
        }
    }
    node.for_each_child(&mut |child| rewrite_references(child, map));
}

/// Rewrite `url(#key)` for the first key that occurs in `value`.
fn rewrite_url_reference(value: &str, map: &IdRewriteMap) -> Option<String> {
    map.iter().find_map(|(key, token)| {
        let needle = format!("url(#{key})");
        value
            .contains(&needle)
            .then(|| value.replace(&needle, &format!("url(#{key}-{token})")))
    })
}

/// Rewrite `#key` for the first key that occurs as a whole fragment.
fn rewrite_fragment_reference(value: &str, map: &IdRewriteMap) -> Option<String> {
    map.iter()
        .find_map(|(key, token)| replace_fragment(value, key, &format!("#{key}-{token}")))
}

fn replace_fragment(value: &str, key: &str, replacement: &str) -> Option<String> {
    let needle = format!("#{key}");
    let mut out = String::with_capacity(value.len() + replacement.len());
    let mut last = 0;
    let mut replaced = false;
    for (start, _) in value.match_indices(&needle) {
        let end = start + needle.len();
        if value[end..].chars().next().is_some_and(is_id_char) {
            continue;
        }
        out.push_str(&value[last..start]);
        out.push_str(replacement);
        last = end;
        replaced = true;
    }
    if !replaced {
        return None;
    }
    out.push_str(&value[last..]);
    Some(out)
}

fn is_id_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.' | ':')
}
