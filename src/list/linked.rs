use super::iter::Iter;
use super::node::Link;
use super::node::Node;
use crate::Value;

/// Singly linked list of integers.
///
/// Invariants:
/// - `size` equals the number of nodes reachable from `head`
/// - the chain is acyclic, which `Box` ownership guarantees
/// - `size == 0` exactly when `head` is `None`
///
/// There is no tail pointer, so appending walks the whole chain.
/// Duplicates are allowed; `delete` and `search` stop at the first match.
#[derive(Debug, Default)]
pub struct LinkedList {
    head: Link,
    size: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self { head: None, size: 0 }
    }

    pub fn size(&self) -> usize {
        self.size
    }
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }
    pub fn iter(&self) -> Iter<'_> {
        Iter::from(self.head())
    }

    /// Append `value` after the current tail. Always succeeds.
    pub fn insert(&mut self, value: Value) -> bool {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(value)));
        self.size += 1;
        log::trace!("inserted {} (size {})", value, self.size);
        true
    }

    /// Unlink the first node holding `value`.
    /// Returns false, leaving the list untouched, if there is no such node.
    pub fn delete(&mut self, value: Value) -> bool {
        if let Some(head) = self.head.take_if(|head| head.data == value) {
            self.head = head.next;
            self.size -= 1;
            return true;
        }
        let mut current = match self.head {
            Some(ref mut head) => head,
            None => return false,
        };
        while current.next.as_ref().is_some_and(|next| next.data != value) {
            match current.next {
                Some(ref mut next) => current = next,
                None => break,
            }
        }
        match current.next.take() {
            Some(removed) => {
                current.next = removed.next;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    pub fn search(&self, value: Value) -> bool {
        self.iter().any(|data| data == value)
    }

    /// Reverse the chain in place with one pass and three rolling links:
    /// the reversed prefix, the node being flipped, and the rest.
    pub fn reverse(&mut self) -> bool {
        let mut prev: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
        true
    }

    pub fn to_array(&self) -> Vec<Value> {
        self.iter().collect()
    }

    /// Release every node. Unlinks one node at a time so that long chains
    /// never recurse through `Box` destructors.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
        self.size = 0;
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}
impl Eq for LinkedList {}

impl FromIterator<Value> for LinkedList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Value> for LinkedList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        for value in iter {
            let node = link.insert(Box::new(Node::new(value)));
            link = &mut node.next;
            self.size += 1;
        }
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = Value;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Display for LinkedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "null")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reachable(list: &LinkedList) -> usize {
        std::iter::successors(list.head(), |node| node.next()).count()
    }

    #[test]
    fn empty_list() {
        let list = LinkedList::new();
        assert!(list.is_empty());
        assert!(list.head().is_none());
        assert_eq!(list.size(), 0);
        assert_eq!(list.to_array(), Vec::<Value>::new());
    }

    #[test]
    fn insert_appends_in_order() {
        let mut list = LinkedList::new();
        for value in [3, 1, 4, 1, 5, 9] {
            assert!(list.insert(value));
        }
        assert_eq!(list.to_array(), vec![3, 1, 4, 1, 5, 9]);
        assert_eq!(list.size(), 6);
        assert_eq!(reachable(&list), list.size());
    }

    #[test]
    fn delete_head() {
        let mut list = LinkedList::from_iter([1, 2, 3]);
        assert!(list.delete(1));
        assert_eq!(list.to_array(), vec![2, 3]);
        assert_eq!(list.size(), 2);
    }

    #[test]
    fn delete_middle_and_tail() {
        let mut list = LinkedList::from_iter([1, 2, 3, 4]);
        assert!(list.delete(3));
        assert_eq!(list.to_array(), vec![1, 2, 4]);
        assert!(list.delete(4));
        assert_eq!(list.to_array(), vec![1, 2]);
        assert_eq!(list.size(), 2);
        assert!(list.head().and_then(Node::next).is_some_and(Node::is_tail));
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut list = LinkedList::from_iter([1, 2, 3]);
        assert!(!list.delete(7));
        assert_eq!(list.to_array(), vec![1, 2, 3]);
        assert_eq!(list.size(), 3);
        let mut empty = LinkedList::new();
        assert!(!empty.delete(7));
        assert!(empty.is_empty());
    }

    #[test]
    fn delete_first_duplicate_only() {
        let mut list = LinkedList::from_iter([2, 8, 2, 8]);
        assert!(list.delete(8));
        assert_eq!(list.to_array(), vec![2, 2, 8]);
        assert!(list.delete(2));
        assert_eq!(list.to_array(), vec![2, 8]);
    }

    #[test]
    fn delete_last_node_empties() {
        let mut list = LinkedList::from_iter([5]);
        assert!(list.delete(5));
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
    }

    #[test]
    fn search_matches_contents() {
        let list = LinkedList::from_iter([10, 20, 30]);
        for value in 0..40 {
            assert_eq!(list.search(value), list.to_array().contains(&value));
        }
        assert!(!LinkedList::new().search(0));
    }

    #[test]
    fn reverse_is_involution() {
        let mut list = LinkedList::from_iter([1, 2, 3, 4, 5]);
        list.reverse();
        assert_eq!(list.to_array(), vec![5, 4, 3, 2, 1]);
        list.reverse();
        assert_eq!(list.to_array(), vec![1, 2, 3, 4, 5]);
        assert_eq!(reachable(&list), 5);
    }

    #[test]
    fn reverse_trivial_lists() {
        let mut empty = LinkedList::new();
        assert!(empty.reverse());
        assert!(empty.is_empty());
        let mut single = LinkedList::from_iter([9]);
        assert!(single.reverse());
        assert_eq!(single.to_array(), vec![9]);
    }

    #[test]
    fn clear_releases_everything() {
        let mut list = LinkedList::from_iter(0..100);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        list.insert(1);
        assert_eq!(list.to_array(), vec![1]);
    }

    #[test]
    fn long_chain_drops_without_recursion() {
        let list = LinkedList::from_iter(0..200_000);
        assert_eq!(list.size(), 200_000);
        drop(list);
    }

    #[test]
    fn walkthrough() {
        let mut list = LinkedList::new();
        list.insert(5);
        list.insert(10);
        list.insert(15);
        assert_eq!(list.to_array(), vec![5, 10, 15]);
        assert_eq!(list.size(), 3);
        assert!(list.delete(10));
        assert_eq!(list.to_array(), vec![5, 15]);
        assert_eq!(list.size(), 2);
        list.reverse();
        assert_eq!(list.to_array(), vec![15, 5]);
        assert!(list.search(5));
        assert!(!list.search(99));
    }

    #[test]
    fn display_chain() {
        assert_eq!(LinkedList::from_iter([1, 2]).to_string(), "1 -> 2 -> null");
        assert_eq!(LinkedList::new().to_string(), "null");
    }

    #[test]
    fn extend_keeps_existing_prefix() {
        let mut list = LinkedList::from_iter([1]);
        list.extend([2, 3]);
        assert_eq!(list.to_array(), vec![1, 2, 3]);
        assert_eq!(list.size(), 3);
        assert_eq!(list.clone(), list);
    }
}
