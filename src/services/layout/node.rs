// Layout node graph
// Arena of placed cells with parent/child links between adjacent columns

use crate::models::grid_index::GridIndex;
use crate::models::interval::Interval;

pub(super) type NodeId = usize;

/// The stretch of grid a cell occupies for overlap bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Span {
    pub start: GridIndex,
    pub end: GridIndex,
}

impl Span {
    pub fn of(cell: &Interval) -> Self {
        Self {
            start: cell.start,
            end: cell.end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Half-open overlap. Two zero-length cells (creations the pointer has
    /// not stretched yet) collide when they sit on the same instant, so a
    /// pile of them still needs one column each.
    pub fn overlaps(&self, other: &Span) -> bool {
        if self.is_empty() && other.is_empty() {
            return self.start == other.start;
        }
        !(self.end <= other.start || self.start >= other.end)
    }
}

#[derive(Debug, Clone)]
pub(super) struct LayoutNode {
    /// Index of the source cell
    pub cell: usize,
    pub span: Span,
    /// Overlapping nodes one column to the left
    pub parents: Vec<NodeId>,
    /// Overlapping nodes one column to the right
    pub children: Vec<NodeId>,
    pub column_count: usize,
    pub start_column: usize,
    pub end_column: usize,
}

/// Nodes live in a flat arena and refer to each other by index.
#[derive(Debug, Default)]
pub(super) struct LayoutGraph {
    nodes: Vec<LayoutNode>,
    by_column: Vec<Vec<NodeId>>,
}

impl LayoutGraph {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            by_column: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    fn in_column(&self, start_column: usize) -> &[NodeId] {
        self.by_column
            .get(start_column)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_overlap_in_column(&self, start_column: usize, span: &Span) -> bool {
        self.in_column(start_column)
            .iter()
            .any(|&id| self.nodes[id].span.overlaps(span))
    }

    pub fn overlapping_in_column(&self, start_column: usize, span: &Span) -> Vec<NodeId> {
        self.in_column(start_column)
            .iter()
            .copied()
            .filter(|&id| self.nodes[id].span.overlaps(span))
            .collect()
    }

    /// Place a cell in the 1-based `column` under the given parents.
    pub fn insert(&mut self, cell: usize, span: Span, column: usize, parents: Vec<NodeId>) -> NodeId {
        let id = self.nodes.len();
        let start_column = column - 1;

        for &parent in &parents {
            self.nodes[parent].children.push(id);
        }
        self.nodes.push(LayoutNode {
            cell,
            span,
            parents,
            children: Vec::new(),
            column_count: column,
            start_column,
            end_column: column,
        });

        if self.by_column.len() <= start_column {
            self.by_column.resize_with(start_column + 1, Vec::new);
        }
        self.by_column[start_column].push(id);
        id
    }

    /// Raise the column count of every node reachable from `from` to at
    /// least `column_count`, refreshing each visited node's width.
    ///
    /// Nodes with children narrow to a single column; childless nodes
    /// stretch to the right edge. A node is expanded further only when its
    /// count actually rose, and counts only ever rise to `column_count`, so
    /// each node is expanded at most once per call.
    pub fn set_max_column(&mut self, from: NodeId, column_count: usize) {
        let mut pending = vec![from];

        while let Some(id) = pending.pop() {
            let node = &mut self.nodes[id];
            node.end_column = if node.children.is_empty() {
                column_count.max(node.start_column + 1)
            } else {
                node.start_column + 1
            };

            if node.column_count >= column_count {
                continue;
            }
            node.column_count = column_count;
            pending.extend(node.parents.iter().chain(node.children.iter()).copied());
        }
    }

    /// Raise every node to the widest column count among the cells it is
    /// connected to by overlaps in time.
    ///
    /// Parent/child links only join adjacent columns, so two cells that
    /// overlap can land in separate chains with different counts and would
    /// be drawn at different widths on top of each other.
    pub fn unify_overlapping_counts(&mut self) {
        let count = self.nodes.len();
        let mut seen = vec![false; count];

        for seed in 0..count {
            if seen[seed] {
                continue;
            }
            seen[seed] = true;
            let mut members = vec![seed];
            let mut next = 0;
            while next < members.len() {
                let span = self.nodes[members[next]].span;
                next += 1;
                for other in 0..count {
                    if !seen[other] && self.nodes[other].span.overlaps(&span) {
                        seen[other] = true;
                        members.push(other);
                    }
                }
            }

            let widest = members
                .iter()
                .map(|&id| self.nodes[id].column_count)
                .max()
                .unwrap_or(1);
            for &id in &members {
                if self.nodes[id].column_count < widest {
                    self.set_max_column(id, widest);
                }
            }
        }
    }

    /// Pull each stretched node back so it stops short of the first column
    /// to its right that holds a cell it overlaps in time.
    ///
    /// A leaf only learns about nodes in the adjacent column, so a cell that
    /// was pushed two or more columns further right can sit under its
    /// stretch.
    pub fn clip_stretched_nodes(&mut self) {
        for id in 0..self.nodes.len() {
            let node = &self.nodes[id];
            let span = node.span;
            let blocked = (node.start_column + 1..node.end_column)
                .find(|&column| self.has_overlap_in_column(column, &span));
            if let Some(column) = blocked {
                log::trace!("Clipping node {} to end at column {}", id, column);
                self.nodes[id].end_column = column;
            }
        }
    }
}
