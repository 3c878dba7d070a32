//! Detection of promotional paragraphs.
//!
//! Promotional blocks on article pages are not marked on the paragraph
//! itself. They sit somewhere below a wrapper element carrying a known class,
//! so a paragraph is promotional when any of its ancestors carries one of
//! those classes.
//!
//! The ancestor walk goes through the [`DomNode`] trait so the check works on
//! any tree, not only on `scraper`'s.

use scraper::ElementRef;
use std::collections::BTreeSet;

/// The two tree operations the promo check needs.
pub trait DomNode: Sized {
    /// Parent, grandparent, ... up to the root. Only element nodes are yielded.
    fn ancestors(&self) -> impl Iterator<Item = Self>;

    /// Class names on this node. Empty when it has no `class` attribute.
    fn classes(&self) -> Vec<&str>;
}

impl<'a> DomNode for ElementRef<'a> {
    fn ancestors(&self) -> impl Iterator<Item = Self> {
        // `ElementRef` derefs to the underlying tree node.
        (**self).ancestors().filter_map(ElementRef::wrap)
    }

    fn classes(&self) -> Vec<&str> {
        self.value().classes().collect()
    }
}

/// Every class name found on any ancestor of `node`.
pub fn ancestor_classes<N: DomNode>(node: &N) -> BTreeSet<String> {
    node.ancestors()
        .flat_map(|ancestor| {
            ancestor
                .classes()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Whether `node` is nested, at any depth, under an element carrying one of
/// `promo_classes`.
pub fn is_promo<N: DomNode>(node: &N, promo_classes: &[String]) -> bool {
    let classes = ancestor_classes(node);
    promo_classes
        .iter()
        .any(|promo| classes.contains(promo.as_str()))
}
