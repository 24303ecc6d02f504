//! Category Tree Utilities
//!
//! Helper functions for tree rendering.

use crate::models::Category;
use crate::routes::AppRoute;

/// Nesting stops below this many levels
pub const MAX_TREE_DEPTH: usize = 32;

/// Render-ready category node
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBranch {
    pub id: i64,
    pub name: String,
    pub href: String,
    pub children: Vec<CategoryBranch>,
}

/// Copy the backend tree into render-ready branches using recursive DFS.
///
/// A node whose id already appears on its own ancestor path is dropped, and
/// nothing deeper than `MAX_TREE_DEPTH` is kept, so malformed input cannot
/// recurse without bound. Well-formed trees come through unchanged.
pub fn prune_category_tree(roots: &[Category]) -> Vec<CategoryBranch> {
    // Recursive helper
    fn collect(nodes: &[Category], depth: usize, ancestors: &mut Vec<i64>) -> Vec<CategoryBranch> {
        if depth > MAX_TREE_DEPTH {
            log::warn!("[TREE] category tree deeper than {} levels, truncating", MAX_TREE_DEPTH);
            return Vec::new();
        }
        let mut result = Vec::with_capacity(nodes.len());
        for node in nodes {
            if ancestors.contains(&node.id) {
                log::warn!("[TREE] category {} repeats an ancestor, skipping", node.id);
                continue;
            }
            ancestors.push(node.id);
            let children = collect(&node.children, depth + 1, ancestors);
            ancestors.pop();
            result.push(CategoryBranch {
                id: node.id,
                name: node.name.clone(),
                href: AppRoute::CategoryDetail(node.id.to_string()).href(),
                children,
            });
        }
        result
    }

    collect(roots, 1, &mut Vec::new())
}

/// Number of nested levels; an empty forest has depth 0
pub fn tree_depth(branches: &[CategoryBranch]) -> usize {
    branches
        .iter()
        .map(|b| 1 + tree_depth(&b.children))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_category(id: i64, children: Vec<Category>) -> Category {
        Category {
            id,
            name: format!("Category {}", id),
            description: None,
            children,
        }
    }

    fn chain(depth: usize) -> Category {
        let mut node = make_category(depth as i64, Vec::new());
        for id in (1..depth as i64).rev() {
            node = make_category(id, vec![node]);
        }
        node
    }

    #[test]
    fn test_prune_keeps_well_formed_tree() {
        let roots = vec![
            make_category(1, vec![make_category(3, vec![make_category(5, vec![])]), make_category(4, vec![])]),
            make_category(2, vec![]),
        ];

        let tree = prune_category_tree(&roots);

        // Should be: 1 { 3 { 5 }, 4 }, 2
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].id, 1);
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].children[0].id, 5);
        assert_eq!(tree[1].id, 2);
        assert_eq!(tree[0].href, "/categories/1");
        assert_eq!(tree_depth(&tree), 3);
    }

    #[test]
    fn test_depth_is_preserved() {
        for depth in 1..=6 {
            let tree = prune_category_tree(&[chain(depth)]);
            assert_eq!(tree_depth(&tree), depth);
        }
    }

    #[test]
    fn test_leaf_has_no_nested_children() {
        let tree = prune_category_tree(&[make_category(7, vec![])]);
        assert!(tree[0].children.is_empty());
        assert_eq!(tree_depth(&tree), 1);
    }

    #[test]
    fn test_repeated_ancestor_is_cut() {
        // 1 -> 2 -> 1 -> 2 ... as the backend would send a cyclic parent chain
        let looped = make_category(1, vec![make_category(2, vec![make_category(1, vec![make_category(2, vec![])])])]);

        let tree = prune_category_tree(&[looped]);
        assert_eq!(tree_depth(&tree), 2);
        assert!(tree[0].children[0].children.is_empty());
    }

    #[test]
    fn test_same_id_in_sibling_branches_is_kept() {
        let roots = vec![make_category(1, vec![make_category(9, vec![])]), make_category(2, vec![make_category(9, vec![])])];
        let tree = prune_category_tree(&roots);
        assert_eq!(tree[0].children[0].id, 9);
        assert_eq!(tree[1].children[0].id, 9);
    }

    #[test]
    fn test_depth_is_capped() {
        let tree = prune_category_tree(&[chain(MAX_TREE_DEPTH + 10)]);
        assert_eq!(tree_depth(&tree), MAX_TREE_DEPTH);
    }

    #[test]
    fn test_empty_forest() {
        assert!(prune_category_tree(&[]).is_empty());
        assert_eq!(tree_depth(&[]), 0);
    }
}
