//! End-to-end scenarios over the public tree API.

use garnet_rbtree::{Color, RbTree, TreeError};

fn keys_inorder(tree: &RbTree<i32>) -> Vec<i32> {
    tree.inorder().map(|n| *n.key()).collect()
}

#[test]
fn small_tree_shape() {
    // Inserting 20, 10, 30 yields a Black root with two Red children.
    let tree = RbTree::try_from_iter([20, 10, 30]).unwrap();

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 20);
    assert_eq!(root.color(), Color::Black);

    let left = root.left().unwrap();
    assert_eq!(*left.key(), 10);
    assert_eq!(left.color(), Color::Red);

    let right = root.right().unwrap();
    assert_eq!(*right.key(), 30);
    assert_eq!(right.color(), Color::Red);

    assert_eq!(keys_inorder(&tree), vec![10, 20, 30]);
    tree.assert_invariants();
}

#[test]
fn full_lifecycle_stays_valid() {
    let inserts = [40, 15, 20, 85, 45, 60, 10, 30, 35, 75, 70, 90, 25, 50, 55];
    let deletes = [55, 40, 15, 20, 45, 35, 60, 50, 30, 25, 75, 70, 85, 10, 90];

    let mut tree = RbTree::new();
    for (i, key) in inserts.into_iter().enumerate() {
        tree.insert(key).unwrap();
        tree.assert_invariants();
        assert_eq!(tree.len(), i + 1);
    }

    let mut sorted: Vec<i32> = inserts.to_vec();
    sorted.sort_unstable();
    assert_eq!(keys_inorder(&tree), sorted);

    for (i, key) in deletes.into_iter().enumerate() {
        tree.delete(&key).unwrap();
        tree.assert_invariants();
        assert_eq!(tree.len(), inserts.len() - i - 1);
        assert!(!tree.find(&key));
    }
    assert!(tree.is_empty());
}

#[test]
fn insert_then_find_round_trip() {
    let mut tree = RbTree::new();
    tree.insert(11).unwrap();
    assert!(tree.find(&11));
    tree.delete(&11).unwrap();
    assert!(!tree.find(&11));
}

#[test]
fn duplicate_insert_leaves_tree_unchanged() {
    let mut tree = RbTree::try_from_iter([5, 3, 8, 1]).unwrap();
    let before = keys_inorder(&tree);
    assert_eq!(tree.insert(3), Err(TreeError::DuplicateKey));
    assert_eq!(keys_inorder(&tree), before);
    assert_eq!(tree.len(), 4);
    tree.assert_invariants();
}

#[test]
fn duplicate_in_bulk_construction_fails() {
    assert_eq!(
        RbTree::try_from_iter([1, 2, 2]).err(),
        Some(TreeError::DuplicateKey)
    );
}

#[test]
fn missing_key_delete_leaves_tree_unchanged() {
    let mut tree: RbTree<i32> = RbTree::new();
    assert_eq!(tree.delete(&7), Err(TreeError::EmptyTree));

    tree.insert(1).unwrap();
    tree.insert(2).unwrap();
    let before = keys_inorder(&tree);
    assert_eq!(tree.delete(&7), Err(TreeError::KeyNotFound));
    assert_eq!(keys_inorder(&tree), before);
    tree.assert_invariants();
}

#[test]
fn height_stays_logarithmic() {
    for n in [1usize, 2, 3, 7, 15, 16, 100, 255] {
        let tree = RbTree::try_from_iter(0..n as i32).unwrap();
        tree.assert_invariants();
        let bound = 2.0 * ((n + 1) as f64).log2();
        assert!(
            (tree.height() as f64) <= bound,
            "height {} exceeds bound {bound} for n = {n}",
            tree.height()
        );
    }
}

#[test]
fn traversal_orders() {
    // Shape: 20B with children 10B and 30B, 35R right of 30.
    let tree = RbTree::try_from_iter([20, 10, 30, 35]).unwrap();

    let preorder: Vec<i32> = tree.preorder().map(|n| *n.key()).collect();
    assert_eq!(preorder, vec![20, 10, 30, 35]);

    let inorder: Vec<i32> = tree.inorder().map(|n| *n.key()).collect();
    assert_eq!(inorder, vec![10, 20, 30, 35]);

    let postorder: Vec<i32> = tree.postorder().map(|n| *n.key()).collect();
    assert_eq!(postorder, vec![10, 35, 30, 20]);

    let breadth: Vec<i32> = tree.breadth_first().map(|n| *n.key()).collect();
    assert_eq!(breadth, vec![20, 10, 30, 35]);
}

#[test]
fn traversals_are_restartable() {
    let tree = RbTree::try_from_iter([2, 1, 3]).unwrap();
    let first: Vec<i32> = tree.inorder().map(|n| *n.key()).collect();
    let second: Vec<i32> = tree.inorder().map(|n| *n.key()).collect();
    assert_eq!(first, second);

    let empty: RbTree<i32> = RbTree::new();
    assert_eq!(empty.preorder().count(), 0);
    assert_eq!(empty.inorder().count(), 0);
    assert_eq!(empty.postorder().count(), 0);
    assert_eq!(empty.breadth_first().count(), 0);
}

#[test]
fn display_renders_sideways_tree() {
    let tree = RbTree::try_from_iter([20, 10, 30]).unwrap();
    let rendered = tree.to_string();
    assert!(rendered.contains("20 (B)"), "got:\n{rendered}");
    assert!(rendered.contains("/----- 30 (R)"), "got:\n{rendered}");
    assert!(rendered.contains("\\----- 10 (R)"), "got:\n{rendered}");

    let empty: RbTree<i32> = RbTree::new();
    assert_eq!(empty.to_string(), "");
}

#[cfg(feature = "dot")]
#[test]
fn dot_export_lists_every_node() {
    let tree = RbTree::try_from_iter([2, 1, 3]).unwrap();
    let dot = tree.dot().to_string();
    assert!(dot.starts_with("digraph {"));
    for key in ["\"1\"", "\"2\"", "\"3\""] {
        assert!(dot.contains(key), "got:\n{dot}");
    }
    assert!(dot.contains("fillcolor=black"));
    assert!(dot.contains("fillcolor=red"));
}
