use std::collections::{HashMap, HashSet};

use crate::api::{Comment, CommentId};

/// A comment plus the replies nested under it, in arrival order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

/// The forest of top-level comments for one job, in arrival order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Thread {
    roots: Vec<CommentNode>,
}

impl Thread {
    pub fn build(comments: Vec<Comment>) -> Thread {
        // First pass: all ids present in this fetch. Parents are resolved
        // against this set, so a child may arrive before its parent.
        let ids = comments.iter().map(|c| c.id).collect::<HashSet<_>>();

        // Second pass: route each record to its parent's pending child list,
        // or to the top level. A comment claiming itself as parent, or one
        // whose parent is not in the fetched set, goes top-level.
        let mut pending: HashMap<CommentId, Vec<Comment>> = HashMap::new();
        let mut roots = Vec::new();
        for c in comments {
            match c.parent_id {
                Some(p) if p != c.id && ids.contains(&p) => {
                    pending.entry(p).or_insert_with(Vec::new).push(c)
                }
                _ => roots.push(c),
            }
        }

        // Assemble depth-first, moving each pending list into its parent node.
        let roots = roots
            .into_iter()
            .map(|c| attach(c, &mut pending))
            .collect();
        if !pending.is_empty() {
            // parent chains that loop back on themselves never reach a root
            let num_dropped: usize = pending.values().map(|v| v.len()).sum();
            tracing::warn!(
                num_dropped,
                "comments not reachable from any top-level comment"
            );
        }
        Thread { roots }
    }

    pub fn roots(&self) -> &[CommentNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Number of comments actually in the forest
    pub fn len(&self) -> usize {
        fn count(n: &CommentNode) -> usize {
            1 + n.children.iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }

    /// Pre-order walk over the forest
    pub fn flatten(&self) -> Vec<&Comment> {
        fn walk<'a>(n: &'a CommentNode, into: &mut Vec<&'a Comment>) {
            into.push(&n.comment);
            for c in &n.children {
                walk(c, into);
            }
        }
        let mut res = Vec::new();
        for r in &self.roots {
            walk(r, &mut res);
        }
        res
    }
}

fn attach(comment: Comment, pending: &mut HashMap<CommentId, Vec<Comment>>) -> CommentNode {
    let children = pending.remove(&comment.id).unwrap_or_default();
    CommentNode {
        children: children.into_iter().map(|c| attach(c, pending)).collect(),
        comment,
    }
}
