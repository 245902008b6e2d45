//! Static k-d tree over Lab coordinates
//!
//! Answers nearest-neighbour queries with the same result as a front-to-back
//! linear scan using strict `<`: among entries at the minimal distance, the
//! lowest palette index wins. Candidates are ranked by `(distance, index)`,
//! and a subtree is skipped only when its splitting plane lies strictly
//! beyond the current best distance.

use crate::color::{delta_e, LabColor};

/// Relative slack on the pruning bound to absorb rounding in `sqrt`
const PRUNE_SLACK: f64 = 1e-9;

#[derive(Debug, Clone)]
struct Node {
    lab: LabColor,
    index: usize,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Read-only spatial index over a fixed list of Lab points
#[derive(Debug, Clone, Default)]
pub struct LabTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl LabTree {
    /// Build a balanced tree; `points[i]` is reported back as index `i`
    pub fn build(points: &[LabColor]) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut tree = Self {
            nodes: Vec::with_capacity(points.len()),
            root: None,
        };
        tree.root = tree.build_node(points, &mut order, 0);
        tree
    }

    fn build_node(&mut self, points: &[LabColor], order: &mut [usize], depth: usize) -> Option<usize> {
        if order.is_empty() {
            return None;
        }

        let axis = depth % 3;
        order.sort_by(|&i, &j| {
            points[i].to_array()[axis]
                .total_cmp(&points[j].to_array()[axis])
                .then(i.cmp(&j))
        });

        let median = order.len() / 2;
        let index = order[median];
        let slot = self.nodes.len();
        self.nodes.push(Node {
            lab: points[index],
            index,
            axis,
            left: None,
            right: None,
        });

        let (below, rest) = order.split_at_mut(median);
        let left = self.build_node(points, below, depth + 1);
        let right = self.build_node(points, &mut rest[1..], depth + 1);
        self.nodes[slot].left = left;
        self.nodes[slot].right = right;
        Some(slot)
    }

    /// Number of indexed points
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no points
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index and distance of the nearest point, lowest index on ties
    pub fn nearest(&self, query: &LabColor) -> Option<(usize, f64)> {
        let mut best = None;
        if let Some(root) = self.root {
            self.search(root, query, &mut best);
        }
        best
    }

    fn search(&self, slot: usize, query: &LabColor, best: &mut Option<(usize, f64)>) {
        let node = &self.nodes[slot];
        let distance = delta_e(query, &node.lab);
        let better = match *best {
            None => true,
            Some((index, d)) => distance < d || (distance == d && node.index < index),
        };
        if better {
            *best = Some((node.index, distance));
        }

        let diff = query.to_array()[node.axis] - node.lab.to_array()[node.axis];
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, best);
        }
        if let Some(far) = far {
            let reach = best.map_or(f64::INFINITY, |(_, d)| d * (1.0 + PRUNE_SLACK) + PRUNE_SLACK);
            if diff.abs() <= reach {
                self.search(far, query, best);
            }
        }
    }
}
