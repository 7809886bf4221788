use super::node::Node;
use crate::Value;

/// Head-to-tail walk over node values.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> From<Option<&'a Node>> for Iter<'a> {
    fn from(next: Option<&'a Node>) -> Self {
        Self { next }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Value;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            node.data()
        })
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
