//! Recency List Module
//!
//! Doubly-linked list of keys tracking access recency for LRU eviction.
//!
//! Nodes live in a `Vec` arena and link to each other by index, so
//! push-front, move-to-front, and removal are O(1) without any unsafe
//! pointer juggling. Front = most recently used, back = least recently
//! used.

// == Node Handle ==
/// Opaque handle to a node in the recency list.
///
/// Held by the owning cache entry so the list position can be updated in
/// O(1) on every access. Never exposed outside the cache internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeRef(usize);

// == List Node ==
/// Arena slot. `key` is `None` while the slot sits on the free list.
#[derive(Debug)]
struct Node<K> {
    key: Option<K>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Recency-ordered key sequence backing LRU eviction.
#[derive(Debug)]
pub(crate) struct RecencyList<K> {
    nodes: Vec<Node<K>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<K> RecencyList<K> {
    // == Constructor ==
    /// Creates an empty recency list.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of linked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no keys are linked.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Front ==
    /// Links a new key at the front (most recently used) and returns its
    /// handle.
    pub fn push_front(&mut self, key: K) -> NodeRef {
        let idx = self.alloc(key);
        self.link_front(idx);
        self.len += 1;
        NodeRef(idx)
    }

    // == Move To Front ==
    /// Relinks an existing node at the front.
    pub fn move_to_front(&mut self, node: NodeRef) {
        if self.head == Some(node.0) {
            return;
        }
        self.unlink(node.0);
        self.link_front(node.0);
    }

    // == Back ==
    /// Returns the least recently used key, if any.
    pub fn back(&self) -> Option<&K> {
        self.tail.and_then(|idx| self.nodes[idx].key.as_ref())
    }

    // == Remove ==
    /// Unlinks a node and recycles its slot.
    pub fn remove(&mut self, node: NodeRef) {
        self.unlink(node.0);
        self.nodes[node.0].key = None;
        self.free.push(node.0);
        self.len -= 1;
    }

    // == Clear ==
    /// Drops every node and resets the arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Internal Helpers ==
    /// Grabs a free slot (or grows the arena) for `key`, unlinked.
    fn alloc(&mut self, key: K) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Node {
                    key: Some(key),
                    prev: None,
                    next: None,
                };
                idx
            }
            None => {
                self.nodes.push(Node {
                    key: Some(key),
                    prev: None,
                    next: None,
                });
                self.nodes.len() - 1
            }
        }
    }

    /// Detaches a node from its neighbors, fixing head/tail as needed.
    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Attaches an unlinked node at the head.
    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;

        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(idx);
        }
        self.head = Some(idx);

        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    /// Drains the list back-to-front for order assertions.
    fn drain_oldest_first(list: &mut RecencyList<&'static str>) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Some(&key) = list.back() {
            let node = find_node(list, key);
            list.remove(node);
            out.push(key);
        }
        out
    }

    fn find_node(list: &RecencyList<&'static str>, key: &'static str) -> NodeRef {
        let idx = list
            .nodes
            .iter()
            .position(|n| n.key == Some(key))
            .expect("key not linked");
        NodeRef(idx)
    }

    #[test]
    fn test_new_list_is_empty() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.back().is_none());
    }

    #[test]
    fn test_push_front_orders_by_recency() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        assert_eq!(list.len(), 3);
        // "a" was pushed first, so it is the least recently used
        assert_eq!(list.back(), Some(&"a"));
    }

    #[test]
    fn test_move_to_front_changes_eviction_candidate() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.push_front("b");
        list.push_front("c");

        list.move_to_front(a);

        assert_eq!(list.back(), Some(&"b"));
        assert_eq!(drain_oldest_first(&mut list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_to_front_of_head_is_noop() {
        let mut list = RecencyList::new();
        list.push_front("a");
        let b = list.push_front("b");

        list.move_to_front(b);

        assert_eq!(list.len(), 2);
        assert_eq!(drain_oldest_first(&mut list), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_middle_node() {
        let mut list = RecencyList::new();
        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");

        list.remove(b);

        assert_eq!(list.len(), 2);
        assert_eq!(drain_oldest_first(&mut list), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_only_node_resets_head_and_tail() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");

        list.remove(a);

        assert!(list.is_empty());
        assert!(list.back().is_none());
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut list = RecencyList::new();
        let a = list.push_front("a");
        list.remove(a);

        let b = list.push_front("b");

        // The freed slot is reused instead of growing the arena
        assert_eq!(a, b);
        assert_eq!(list.len(), 1);
        assert_eq!(list.back(), Some(&"b"));
    }

    #[test]
    fn test_clear() {
        let mut list = RecencyList::new();
        list.push_front("a");
        list.push_front("b");

        list.clear();

        assert!(list.is_empty());
        assert!(list.back().is_none());

        // Usable again after clearing
        list.push_front("c");
        assert_eq!(list.back(), Some(&"c"));
    }
}
