//! Open lists for the A* loop.
//!
//! Both implementations pop the cell with the lowest f-cost and break ties in favour of the cell
//! that was inserted first. Lowering the f-cost of a cell that is already open keeps its original
//! insertion position, so both lists agree with a linear first-minimum scan over an
//! append-only list.
use fxhash::{FxBuildHasher, FxHashMap};
use grid_util::point::Point;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

pub trait OpenList: Default {
    /// Inserts `point` with the given f-cost, or updates the f-cost if it is already open.
    fn push(&mut self, point: Point, f_cost: i32);
    /// Removes and returns the open cell with the lowest f-cost.
    fn pop_lowest(&mut self) -> Option<Point>;
    fn contains(&self, point: &Point) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug)]
struct SmallestCostHolder {
    f_cost: i32,
    sequence: u64,
    point: Point,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.sequence == other.sequence
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest f-cost, then the earliest insertion, is greatest.
        match other.f_cost.cmp(&self.f_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// Priority queue open list with lazy deletion. Every push of a lowered f-cost adds a heap entry;
/// entries that no longer match the live f-cost of their cell are skipped on pop.
#[derive(Clone, Debug, Default)]
pub struct HeapOpenList {
    heap: BinaryHeap<SmallestCostHolder>,
    /// Live cells with their insertion sequence and current f-cost.
    members: FxHashMap<Point, (u64, i32)>,
    next_sequence: u64,
}

impl OpenList for HeapOpenList {
    fn push(&mut self, point: Point, f_cost: i32) {
        let sequence = match self.members.get_mut(&point) {
            Some(member) => {
                member.1 = f_cost;
                member.0
            }
            None => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.members.insert(point, (sequence, f_cost));
                sequence
            }
        };
        self.heap.push(SmallestCostHolder {
            f_cost,
            sequence,
            point,
        });
    }

    fn pop_lowest(&mut self) -> Option<Point> {
        while let Some(SmallestCostHolder {
            f_cost,
            sequence,
            point,
        }) = self.heap.pop()
        {
            if self.members.get(&point) == Some(&(sequence, f_cost)) {
                self.members.remove(&point);
                return Some(point);
            }
        }
        None
    }

    fn contains(&self, point: &Point) -> bool {
        self.members.contains_key(point)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

/// Open list that scans every open cell for the minimum, keeping cells in insertion order.
/// Quadratic in the worst case; useful on small grids and as a reference for [HeapOpenList].
#[derive(Clone, Debug, Default)]
pub struct ScanOpenList {
    cells: FxIndexMap<Point, i32>,
}

impl OpenList for ScanOpenList {
    fn push(&mut self, point: Point, f_cost: i32) {
        self.cells
            .entry(point)
            .and_modify(|f| *f = f_cost)
            .or_insert(f_cost);
    }

    fn pop_lowest(&mut self) -> Option<Point> {
        let mut lowest: Option<(usize, i32)> = None;
        for (ix, (_, &f_cost)) in self.cells.iter().enumerate() {
            match lowest {
                Some((_, best)) if f_cost >= best => {}
                _ => lowest = Some((ix, f_cost)),
            }
        }
        lowest
            .and_then(|(ix, _)| self.cells.shift_remove_index(ix))
            .map(|(point, _)| point)
    }

    fn contains(&self, point: &Point) -> bool {
        self.cells.contains_key(point)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
