//! Exhaustive search for the cheapest split layout.
//!
//! Every way of cutting the ordered item list into a prefix and a suffix is
//! tried, along both axes, recursively. A leaf costs the squared log of how far
//! its rectangle's aspect ratio is from the item's target, and a layout costs
//! the sum of its leaves. The cheapest layout wins; the first one enumerated
//! wins ties.
//!
//! The search is exponential in the number of items. It is meant for a handful
//! of panels. [`solve_memoized`] caches sub-results and returns exactly what
//! [`solve`] does.

use std::collections::HashMap;
use std::ops::Range;

use crate::content::{AspectRatio, ContentItem};
use crate::geometry::{Orientation, Size};

use super::node::LayoutNode;

/// A layout together with its cost. Lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub cost: f64,
    pub tree: LayoutNode,
}

impl Solution {
    fn empty() -> Self {
        Self {
            cost: 0.0,
            tree: LayoutNode::Empty,
        }
    }
}

/// Find the cheapest layout of `items` in a `width` x `height` rectangle.
///
/// `forced` restricts the top-level split to one orientation. Inside the
/// search, the first half of every split is forced to the orthogonal
/// orientation while the second half is left free.
pub fn solve(
    width: f64,
    height: f64,
    gap: f64,
    items: &[ContentItem],
    forced: Option<Orientation>,
) -> Solution {
    run(Search::new(items, gap, false), Size::new(width, height), forced)
}

/// Same result as [`solve`], caching sub-layouts by rectangle, item range and
/// forced orientation.
pub fn solve_memoized(
    width: f64,
    height: f64,
    gap: f64,
    items: &[ContentItem],
    forced: Option<Orientation>,
) -> Solution {
    run(Search::new(items, gap, true), Size::new(width, height), forced)
}

fn run(mut search: Search<'_>, size: Size, forced: Option<Orientation>) -> Solution {
    let _span = tracing::debug_span!(
        "solve",
        items = search.items.len(),
        width = size.width,
        height = size.height,
        memoized = search.memo.is_some(),
    )
    .entered();
    let solution = search.best(size, 0..search.items.len(), forced);
    tracing::debug!(cost = solution.cost, splits = solution.tree.split_count(), "layout solved");
    solution
}

/// Squared log error between a rectangle's aspect ratio and the item's target.
///
/// An item without a target is a perfect fit anywhere.
pub fn leaf_cost(size: Size, item: &ContentItem) -> f64 {
    let aspect = size.aspect();
    let target = item.target_aspect.map_or(aspect, AspectRatio::value);
    (aspect / target).ln().abs().powi(2)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    width: u64,
    height: u64,
    start: usize,
    end: usize,
    forced: Option<Orientation>,
}

struct Search<'a> {
    items: &'a [ContentItem],
    gap: f64,
    memo: Option<HashMap<MemoKey, Solution>>,
}

impl<'a> Search<'a> {
    fn new(items: &'a [ContentItem], gap: f64, memoize: bool) -> Self {
        Self {
            items,
            gap,
            memo: memoize.then(HashMap::new),
        }
    }

    fn best(&mut self, size: Size, range: Range<usize>, forced: Option<Orientation>) -> Solution {
        let key = MemoKey {
            width: size.width.to_bits(),
            height: size.height.to_bits(),
            start: range.start,
            end: range.end,
            forced,
        };
        if let Some(hit) = self.memo.as_ref().and_then(|memo| memo.get(&key)) {
            return hit.clone();
        }
        let solution = self.search(size, range, forced);
        if let Some(memo) = self.memo.as_mut() {
            memo.insert(key, solution.clone());
        }
        solution
    }

    fn search(&mut self, size: Size, range: Range<usize>, forced: Option<Orientation>) -> Solution {
        let all = self.items;
        let items = &all[range.clone()];
        match items {
            [] => Solution::empty(),
            [item] => Solution {
                cost: leaf_cost(size, item),
                tree: LayoutNode::Leaf(*item),
            },
            _ => {
                let prefix: Vec<f64> = items
                    .iter()
                    .scan(0.0, |sum, item| {
                        *sum += item.effective_weight();
                        Some(*sum)
                    })
                    .collect();
                let total = prefix[prefix.len() - 1];

                let mut best: Option<Solution> = None;
                for i in 1..items.len() {
                    let weight1 = prefix[i - 1];
                    let weight2 = total - weight1;
                    let mid = range.start + i;

                    for orientation in Orientation::ALL {
                        if forced.is_some_and(|f| f != orientation) {
                            continue;
                        }
                        let available = size.span(orientation) - self.gap;
                        let share1 = available / total * weight1;
                        let share2 = available / total * weight2;

                        let first = self.best(
                            size.with_span(orientation, share1),
                            range.start..mid,
                            Some(orientation.orthogonal()),
                        );
                        let second =
                            self.best(size.with_span(orientation, share2), mid..range.end, None);

                        let cost = first.cost + second.cost;
                        if best.as_ref().map_or(true, |b| cost < b.cost) {
                            best = Some(Solution {
                                cost,
                                tree: LayoutNode::split(
                                    orientation,
                                    self.gap,
                                    (share1, share2),
                                    first.tree,
                                    second.tree,
                                ),
                            });
                        }
                    }
                }
                // At least one orientation is always allowed, so two or more
                // items always produce a candidate.
                best.unwrap_or_else(Solution::empty)
            }
        }
    }
}
