use std::collections::HashSet;

use packlab_core::{CATALOG, Cell, GridShape, Item, Layout, LayoutError, place};

fn occupied_cells(layout: &Layout) -> Vec<Cell> {
    layout
        .slots()
        .iter()
        .flat_map(|slot| slot.placement.cells())
        .collect()
}

fn assert_well_formed(layout: &Layout, grid: GridShape) {
    let cells = occupied_cells(layout);
    let unique: HashSet<Cell> = cells.iter().copied().collect();
    assert_eq!(unique.len(), cells.len(), "placements overlap: {cells:?}");
    for (col, row) in cells {
        assert!(col < grid.cols && row < grid.rows, "cell ({col},{row}) out of bounds");
    }
}

fn permutations(items: &[Item]) -> Vec<Vec<Item>> {
    fn heap(items: &mut Vec<Item>, k: usize, out: &mut Vec<Vec<Item>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k {
            heap(items, k - 1, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
    }

    let mut scratch = items.to_vec();
    let mut out = Vec::new();
    let len = scratch.len();
    heap(&mut scratch, len, &mut out);
    out
}

#[test]
fn authored_catalog_lands_on_pinned_coordinates() {
    // Hand-run of the row-major scan over the authored order; these
    // literals are the contract for the first-fit policy.
    let layout = place(CATALOG, GridShape::STANDARD).unwrap();
    let anchors: Vec<(&str, u8, u8)> = layout
        .slots()
        .iter()
        .map(|slot| (slot.item.id, slot.placement.col, slot.placement.row))
        .collect();
    assert_eq!(
        anchors,
        vec![
            ("sword", 0, 0),
            ("potion", 1, 0),
            ("scroll", 2, 0),
            ("junk", 1, 2),
            ("chip", 1, 1),
            ("relic", 3, 2),
        ]
    );

    // Junk's 2x2 block could not anchor under the sword column or beside
    // the scroll, so it spans cols 1-2, rows 2-3.
    let junk = layout.placement_of("junk").unwrap();
    let junk_cells: Vec<Cell> = junk.cells().into_vec();
    assert_eq!(junk_cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);

    let sword = layout.placement_of("sword").unwrap();
    assert_eq!(sword.cells().into_vec(), vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn placements_are_disjoint_and_in_bounds() {
    let layout = place(CATALOG, GridShape::STANDARD).unwrap();
    assert_eq!(layout.len(), CATALOG.len());
    assert_well_formed(&layout, GridShape::STANDARD);
}

#[test]
fn placement_is_deterministic_across_calls() {
    let first = place(CATALOG, GridShape::STANDARD).unwrap();
    let second = place(CATALOG, GridShape::STANDARD).unwrap();
    assert_eq!(first, second);
}

#[test]
fn every_catalog_order_packs_without_overlap() {
    // 6! orderings of the authored catalog; the layout may move but must
    // never overlap or leave the grid.
    for ordering in permutations(CATALOG) {
        match place(&ordering, GridShape::STANDARD) {
            Ok(layout) => {
                assert_eq!(layout.len(), ordering.len());
                assert_well_formed(&layout, GridShape::STANDARD);
            }
            Err(LayoutError::Overflow { placed, .. }) => {
                // First-fit is not optimal, so some orderings of a
                // feasible catalog may still overflow; the prefix must
                // stay well formed regardless.
                assert_well_formed(&placed, GridShape::STANDARD);
            }
        }
    }
}

#[test]
fn reordering_can_move_items_but_stays_legal() {
    // Swap the potion and the chip: the chip claims (1,0) and the potion
    // has to settle for the next free cell.
    let mut swapped: Vec<Item> = CATALOG.to_vec();
    swapped.swap(1, 4);
    let layout = place(&swapped, GridShape::STANDARD).unwrap();
    assert_well_formed(&layout, GridShape::STANDARD);

    let baseline = place(CATALOG, GridShape::STANDARD).unwrap();
    assert_eq!(layout.placement_of("chip"), baseline.placement_of("potion"));
    assert_ne!(
        layout.placement_of("potion"),
        baseline.placement_of("potion"),
        "swapping catalog order should move the potion anchor"
    );
}

#[test]
fn reversed_catalog_overflows_on_the_sword() {
    // With both 2x2 blocks placed first the sword has no three-row column
    // left; the feasible prefix is everything before it.
    let mut reversed: Vec<Item> = CATALOG.to_vec();
    reversed.reverse();
    let err = place(&reversed, GridShape::STANDARD).unwrap_err();
    let LayoutError::Overflow {
        item_id, placed, ..
    } = err;
    assert_eq!(item_id, "sword");
    assert_eq!(placed.len(), CATALOG.len() - 1);
    assert_well_formed(&placed, GridShape::STANDARD);
}
