use std::cmp::Ordering;

use crate::domain::account::AccountNumber;

/// Unbalanced binary search tree over account numbers, used to list
/// accounts in ascending order.
///
/// Nodes live in an arena and link to each other by index. A node only
/// stores the account number; the account itself stays in the
/// [`AccountDirectory`](crate::domain::directory::AccountDirectory) and is
/// resolved through it on traversal. Nodes are never removed or rotated, so
/// a sorted insertion order degrades the tree to a list.
#[derive(Debug, Default)]
pub struct AccountIndexTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

#[derive(Debug)]
struct Node {
    key: AccountNumber,
    left: Option<usize>,
    right: Option<usize>,
}

impl AccountIndexTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Returns `false` and leaves the tree unchanged if `key` is already
    /// present.
    pub fn insert(&mut self, key: AccountNumber) -> bool {
        let new_index = self.nodes.len();
        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(key));
            self.root = Some(new_index);
            return true;
        };

        loop {
            let node = &mut self.nodes[current];
            let next = match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
            match *next {
                Some(child) => current = child,
                None => {
                    *next = Some(new_index);
                    self.nodes.push(Node::leaf(key));
                    return true;
                }
            }
        }
    }

    #[cfg(test)]
    fn contains(&self, key: AccountNumber) -> bool {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            current = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Ascending key order. Lazy; each call starts a fresh traversal.
    pub fn inorder(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[cfg(test)]
    fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[index];
            pending.extend(node.left.map(|c| (c, depth + 1)));
            pending.extend(node.right.map(|c| (c, depth + 1)));
        }
        deepest
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Node {
    fn leaf(key: AccountNumber) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

/// In-order walk driven by an explicit stack.
pub struct InOrder<'a> {
    tree: &'a AccountIndexTree,
    stack: Vec<usize>,
}

impl InOrder<'_> {
    fn push_left_spine(&mut self, mut current: Option<usize>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree.nodes[index].left;
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = AccountNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];
        self.push_left_spine(node.right);
        Some(node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(keys: &[AccountNumber]) -> AccountIndexTree {
        let mut tree = AccountIndexTree::new();
        for &k in keys {
            assert!(tree.insert(k), "key {k} should be new");
        }
        tree
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let tree = AccountIndexTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.inorder().count(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn inorder_is_ascending_for_mixed_insertions() {
        let tree = tree_of(&[100, 50, 200, 75, 25, 150, 300]);
        let keys: Vec<_> = tree.inorder().collect();
        assert_eq!(keys, vec![25, 50, 75, 100, 150, 200, 300]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut tree = tree_of(&[10, 5]);
        assert!(!tree.insert(10));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![5, 10]);
    }

    #[test]
    fn sorted_insertion_degrades_to_a_list() {
        let keys: Vec<AccountNumber> = (1..=10_000).collect();
        let tree = tree_of(&keys);

        assert_eq!(tree.height(), keys.len());
        assert!(tree.inorder().eq(keys.iter().copied()));
    }

    #[test]
    fn contains_follows_the_search_path() {
        let tree = tree_of(&[8, 3, 10, 1, 6, 14]);
        for k in [8, 3, 10, 1, 6, 14] {
            assert!(tree.contains(k));
        }
        assert!(!tree.contains(7));
        assert!(!tree.contains(0));
    }

    #[test]
    fn traversal_is_restartable() {
        let tree = tree_of(&[2, 1, 3]);
        let mut first = tree.inorder();
        assert_eq!(first.next(), Some(1));
        assert_eq!(tree.inorder().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.collect::<Vec<_>>(), vec![2, 3]);
    }
}
