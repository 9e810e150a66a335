// Child traversal and tag dispatch
//
// Shared by the math renderer and the properties builder: walk the OMML
// children of an element, hand each to the implementor's handler for its
// tag, fall back to the implementor's unknown-tag handler, and collect what
// comes back in document order.

use super::fragment::{Fragment, TaggedFragment};
use super::properties::PropKey;
use crate::error::Result;
use crate::node::SourceNode;
use log::trace;
use smallvec::SmallVec;

/// Tag-driven rendering of an element's children
pub trait Dispatcher {
    /// Render `elem` as `tag`. `Ok(None)` means the tag has no handler.
    fn handle_tag<N: SourceNode>(&mut self, elem: &N, tag: &str) -> Result<Option<Fragment>>;

    /// Fallback for tags without a handler. Dropping the child is the default.
    fn handle_unknown<N: SourceNode>(&mut self, _elem: &N, _tag: &str) -> Result<Option<Fragment>> {
        Ok(None)
    }

    /// Render `elem` under an explicit tag, or under its own local name
    fn dispatch<N: SourceNode>(&mut self, elem: &N, tag: Option<&str>) -> Result<Option<Fragment>> {
        self.handle_tag(elem, tag.unwrap_or_else(|| elem.local_name()))
    }

    /// Render the OMML children of `elem` in document order
    ///
    /// Children outside the OMML namespace are skipped, as are tags not in
    /// `include` when a filter is given. A child neither handler renders is
    /// dropped.
    fn render_children_list<'n, N: SourceNode>(
        &mut self,
        elem: &'n N,
        include: Option<&[&str]>,
    ) -> Result<Vec<TaggedFragment<'n>>> {
        let mut rendered = Vec::new();

        for child in elem.children() {
            if !child.is_omml() {
                continue;
            }

            let tag = child.local_name();
            if include.is_some_and(|include| !include.contains(&tag)) {
                continue;
            }

            let fragment = match self.dispatch(child, Some(tag))? {
                Some(fragment) => fragment,
                None => match self.handle_unknown(child, tag)? {
                    Some(fragment) => fragment,
                    None => {
                        trace!("dropping unhandled <{}>", tag);
                        continue;
                    },
                },
            };

            rendered.push(TaggedFragment { tag, fragment });
        }

        Ok(rendered)
    }

    /// Render the OMML children of `elem` keyed by tag; a repeated tag keeps its last fragment
    fn render_children_map<'n, N: SourceNode>(
        &mut self,
        elem: &'n N,
        include: Option<&[&str]>,
    ) -> Result<ChildMap<'n>> {
        let mut map = ChildMap::default();
        for TaggedFragment { tag, fragment } in self.render_children_list(elem, include)? {
            map.insert(tag, fragment);
        }
        Ok(map)
    }

    /// Concatenate the rendered OMML children of `elem`
    fn render_children_text<N: SourceNode>(
        &mut self,
        elem: &N,
        include: Option<&[&str]>,
    ) -> Result<String> {
        Ok(join_fragments(&self.render_children_list(elem, include)?, ""))
    }
}

/// Join the rendered text of fragments with a separator
pub fn join_fragments(fragments: &[TaggedFragment<'_>], separator: &str) -> String {
    let mut text = String::new();
    for (i, child) in fragments.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(child.fragment.as_str());
    }
    text
}

/// Rendered children keyed by tag
///
/// Structural elements have a handful of distinct children, so a linear
/// scan over a small inline vector beats hashing.
#[derive(Debug, Default)]
pub struct ChildMap<'n> {
    entries: SmallVec<[(&'n str, Fragment); 4]>,
}

impl<'n> ChildMap<'n> {
    /// Insert a fragment, replacing an earlier one with the same tag
    pub fn insert(&mut self, tag: &'n str, fragment: Fragment) {
        match self.entries.iter_mut().find(|(t, _)| *t == tag) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((tag, fragment)),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&Fragment> {
        self.entries.iter().find(|(t, _)| *t == tag).map(|(_, f)| f)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Rendered text of a child, empty if the child is missing
    pub fn text(&self, tag: &str) -> &str {
        self.get(tag).map_or("", Fragment::as_str)
    }

    /// Property value read from a properties child; a missing child reads as absent
    pub fn property(&self, tag: &str, key: PropKey) -> Result<Option<&str>> {
        match self.get(tag) {
            Some(fragment) => fragment.value(key),
            None => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
