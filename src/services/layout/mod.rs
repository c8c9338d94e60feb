//! Interval layout engine.
//!
//! Assigns every day-local cell a horizontal slot so that cells which
//! overlap in time never share a column. Cells are packed greedily one
//! column at a time, longest first, and each overlap cluster reports the
//! widest column count reached anywhere inside it. That count is the
//! number of columns the greedy pass used, which can exceed the peak number
//! of cells live at one instant.
//!
//! The engine is rebuilt on every call; nothing is cached between calls.

mod node;

use std::cmp::Ordering;

use crate::models::error::GridError;
use crate::models::grid_index::GridBounds;
use crate::models::interval::Interval;
use crate::models::layout::{ColumnPosition, LayoutAttributes};
use crate::models::settings::DEFAULT_LAYOUT_SAFETY;

use node::{LayoutGraph, Span};

/// Packs the cells of one day into columns.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    bounds: GridBounds,
    safety: usize,
}

impl LayoutEngine {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            safety: DEFAULT_LAYOUT_SAFETY,
        }
    }

    /// Override the column cap. Packing fails once it would need column
    /// `safety` or beyond.
    pub fn with_safety(mut self, safety: usize) -> Self {
        self.safety = safety;
        self
    }

    pub fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    /// Lay out `cells`, returning one record per cell in input order.
    ///
    /// Fails with [`GridError::MalformedInterval`] for an inverted cell and
    /// with [`GridError::LayoutOverflow`] when the column cap is reached;
    /// no partial result is returned in either case.
    pub fn layout(&self, cells: &[Interval]) -> Result<Vec<LayoutAttributes>, GridError> {
        for cell in cells {
            cell.validate()?;
        }

        let mut pending = self.sorted_for_layout(cells);
        let mut graph = LayoutGraph::with_capacity(cells.len());
        let mut column = 1;

        while !pending.is_empty() {
            if column >= self.safety {
                log::warn!(
                    "Layout overflow: {} of {} cells placed before column {}",
                    graph.len(),
                    cells.len(),
                    column
                );
                return Err(GridError::LayoutOverflow {
                    limit: self.safety,
                    placed: graph.len(),
                    total: cells.len(),
                });
            }

            pending.retain(|&cell| {
                let span = Span::of(&cells[cell]);
                if graph.has_overlap_in_column(column - 1, &span) {
                    return true;
                }

                let parents = if column >= 2 {
                    graph.overlapping_in_column(column - 2, &span)
                } else {
                    Vec::new()
                };
                graph.insert(cell, span, column, parents.clone());
                for parent in parents {
                    graph.set_max_column(parent, column);
                }
                false
            });

            column += 1;
        }
        graph.unify_overlapping_counts();
        graph.clip_stretched_nodes();

        log::debug!("Laid out {} cells across {} columns", cells.len(), column - 1);

        let mut attributes: Vec<LayoutAttributes> = graph
            .nodes()
            .iter()
            .map(|node| {
                let cell = &cells[node.cell];
                LayoutAttributes {
                    id: cell.id.clone(),
                    index: node.cell,
                    position: ColumnPosition {
                        column: node.column_count,
                        start: node.start_column,
                        end: node.end_column,
                    },
                    start: cell.start,
                    end: cell.end,
                }
            })
            .collect();
        attributes.sort_by_key(|attributes| attributes.index);

        Ok(attributes)
    }

    /// Cell indices ordered longest first, then earliest start, then input
    /// order.
    fn sorted_for_layout(&self, cells: &[Interval]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..cells.len()).collect();
        order.sort_by(|&l, &r| {
            let (left, right) = (&cells[l], &cells[r]);
            match right.duration(&self.bounds).cmp(&left.duration(&self.bounds)) {
                Ordering::Equal => left.start.cmp(&right.start),
                longer_first => longer_first,
            }
        });
        order
    }
}

/// Lay out one day's cells under `bounds` with the default column cap.
pub fn layout(cells: &[Interval], bounds: &GridBounds) -> Result<Vec<LayoutAttributes>, GridError> {
    LayoutEngine::new(*bounds).layout(cells)
}
