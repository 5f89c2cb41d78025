//! Property tests for the solver and reconciler.

use proptest::prelude::*;

use tessellate::dom::{Dom, NodeData};
use tessellate::{
    reconcile, solve, solve_memoized, AspectRatio, ContentItem, LayoutNode, Orientation, Size,
};

/// `(weight, aspect)` hints for one item.
fn hint() -> impl Strategy<Value = (Option<f64>, Option<(f64, f64)>)> {
    (
        prop::option::of(0.25f64..8.0),
        prop::option::of((1.0f64..32.0, 1.0f64..32.0)),
    )
}

fn items_in(dom: &mut Dom, hints: &[(Option<f64>, Option<(f64, f64)>)]) -> Vec<ContentItem> {
    let list = dom.insert(NodeData::new("List"));
    hints
        .iter()
        .map(|(weight, aspect)| {
            let mut item = ContentItem::new(dom.insert_child(list, NodeData::new("Panel")));
            if let Some(w) = weight {
                item = item.with_weight(*w);
            }
            if let Some((w, h)) = aspect {
                item = item.with_aspect(AspectRatio::new(*w, *h).unwrap());
            }
            item
        })
        .collect()
}

fn check_spans(layout: &LayoutNode, size: Size) -> Result<(), TestCaseError> {
    if let LayoutNode::Split(split) = layout {
        let expected = size.span(split.orientation);
        prop_assert!((split.span() - expected).abs() <= 1e-6 * expected.abs().max(1.0));
        check_spans(&split.left, size.with_span(split.orientation, split.share1))?;
        check_spans(&split.right, size.with_span(split.orientation, split.share2))?;
    }
    Ok(())
}

proptest! {
    #[test]
    fn solution_keeps_every_item_once_in_order(
        hints in prop::collection::vec(hint(), 1..6),
        width in 100.0f64..2000.0,
        height in 100.0f64..2000.0,
        gap in 0.0f64..20.0,
    ) {
        let mut dom = Dom::new();
        let items = items_in(&mut dom, &hints);
        let solution = solve(width, height, gap, &items, None);

        let leaves: Vec<_> = solution.tree.leaves().into_iter().map(|i| i.node).collect();
        let expected: Vec<_> = items.iter().map(|i| i.node).collect();
        prop_assert_eq!(leaves, expected);
        prop_assert_eq!(solution.tree.split_count(), items.len() - 1);
        // Costs are squared logs; a pane squeezed below the gap yields NaN, never a negative.
        prop_assert!(!(solution.cost < 0.0));
        check_spans(&solution.tree, Size::new(width, height))?;
    }

    #[test]
    fn memoized_search_agrees_with_plain_search(
        hints in prop::collection::vec(hint(), 1..6),
        width in 100.0f64..2000.0,
        height in 100.0f64..2000.0,
    ) {
        let mut dom = Dom::new();
        let items = items_in(&mut dom, &hints);
        let plain = solve(width, height, 10.0, &items, None);
        let memo = solve_memoized(width, height, 10.0, &items, None);
        prop_assert_eq!(plain.cost.to_bits(), memo.cost.to_bits());
        prop_assert_eq!(plain.tree, memo.tree);
    }

    #[test]
    fn forced_root_orientation_is_honored(
        hints in prop::collection::vec(hint(), 2..5),
        vertical in any::<bool>(),
    ) {
        let mut dom = Dom::new();
        let items = items_in(&mut dom, &hints);
        let forced = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let solution = solve(800.0, 600.0, 10.0, &items, Some(forced));
        let LayoutNode::Split(split) = &solution.tree else {
            return Err(TestCaseError::fail("expected a split"));
        };
        prop_assert_eq!(split.orientation, forced);
    }

    #[test]
    fn reconcile_settles_after_one_pass(
        hints in prop::collection::vec(hint(), 1..6),
        first in (100.0f64..1500.0, 100.0f64..1500.0),
        second in (100.0f64..1500.0, 100.0f64..1500.0),
    ) {
        let mut dom = Dom::new();
        let app = dom.insert(NodeData::new("App"));
        let items = items_in(&mut dom, &hints);

        let a = solve(first.0, first.1, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &a);
        let b = solve(second.0, second.1, 10.0, &items, None).tree;
        reconcile(&mut dom, app, &b);

        let before = dom.mutations();
        reconcile(&mut dom, app, &b);
        prop_assert_eq!(dom.mutations(), before);
        for item in &items {
            prop_assert!(dom.ancestors(item.node).contains(&app));
        }
    }
}
