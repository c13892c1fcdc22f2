use std::rc::Rc;

use profgrid_ui_grid::{
    Column, GridViewOptions, HeadlessHost, HierarchicalGridView, Rect,
    SharedHost, UpdateOutcome,
};
use profgrid_ui_tree::{
    EntryId, LayoutDigest, SampleEntry, Snapshot, count_entries,
    flatten_samples, layout_digest,
};

type View = HierarchicalGridView<SharedHost, SharedHost>;

fn open(host: &SharedHost, name: &str, slot: u32) -> View {
    HierarchicalGridView::new(
        host.clone(),
        host.clone(),
        name,
        slot,
        GridViewOptions::default(),
    )
    .expect("window")
}

/// Builds a tree `width` wide and `depth` deep with ids assigned in
/// pre-order, starting at `first_id`.
fn generated_tree(width: usize, depth: usize, first_id: u64) -> Vec<SampleEntry> {
    fn level(width: usize, depth: usize, next: &mut u64) -> Vec<SampleEntry> {
        if depth == 0 {
            return Vec::new();
        }
        (0..width)
            .map(|index| {
                let id = *next;
                *next += 1;
                SampleEntry::new(id, format!("sample_{id}"))
                    .with_timing(id as f64, index as f64)
                    .with_calls(index as u32 + 1, 0)
                    .with_children(level(width, depth - 1, next))
            })
            .collect()
    }

    let mut next = first_id;
    level(width, depth, &mut next)
}

#[test]
fn foo_bar_example_patches_only_changed_row_timings() {
    let host = HeadlessHost::shared();
    let mut view = open(&host, "Samples", 0);
    let digest = LayoutDigest::from("d1");

    let a: Snapshot = Rc::from(vec![SampleEntry::new(1, "foo").with_children(
        vec![SampleEntry::new(2, "bar").with_timing(4.0, 1.0)],
    )]);
    assert_eq!(
        view.update_entries(2, &digest, &a),
        UpdateOutcome::Rebuilt { rows: 2 }
    );

    let rows = host.borrow().visible_rows(view.window());
    assert_eq!(rows[0][Column::Name.index()], "foo");
    assert_eq!(
        rows[1][Column::Name.index()],
        "\u{a0}\u{a0}\u{a0}\u{a0}\u{a0}bar"
    );

    let b: Snapshot = Rc::from(vec![SampleEntry::new(1, "foo").with_children(
        vec![SampleEntry::new(2, "bar").with_timing(4.0, 3.0)],
    )]);
    view.update_entries(2, &digest, &b);

    let after = host.borrow().visible_rows(view.window());
    assert_eq!(after[0], rows[0]);
    assert_eq!(after[1][Column::SelfTime.index()], "3");
    assert_eq!(after[1][Column::Name.index()], rows[1][Column::Name.index()]);
}

#[test]
fn structural_update_matches_pre_order_of_nested_tree() {
    let host = HeadlessHost::shared();
    let mut view = open(&host, "Samples", 0);
    let tree = generated_tree(3, 3, 100);
    let total = count_entries(&tree);
    let expected: Vec<EntryId> =
        flatten_samples(&tree).iter().map(|row| row.node.id).collect();
    let snapshot: Snapshot = Rc::from(tree);

    let outcome =
        view.update_entries(total, &layout_digest(&snapshot), &snapshot);

    assert_eq!(total, 3 + 9 + 27);
    assert_eq!(outcome, UpdateOutcome::Rebuilt { rows: total });
    assert_eq!(view.visible_row_count(), total);
    let ids: Vec<EntryId> =
        view.rows().iter().filter_map(|row| row.id()).collect();
    assert_eq!(ids, expected);
    for (slot, id) in expected.iter().enumerate() {
        assert_eq!(view.row_for(*id).map(|row| row.slot()), Some(slot));
    }
}

#[test]
fn alternating_layouts_keep_allocation_and_hide_leftovers() {
    let host = HeadlessHost::shared();
    let mut view = open(&host, "Samples", 0);
    let mut peak = 0;

    for (width, depth) in [(2, 3), (4, 2), (1, 1), (3, 3), (0, 0), (2, 2)] {
        let tree = generated_tree(width, depth, 1);
        let total = count_entries(&tree);
        let snapshot: Snapshot = Rc::from(tree);
        view.update_entries(total, &layout_digest(&snapshot), &snapshot);

        peak = peak.max(total);
        assert_eq!(view.allocated_rows(), peak);
        assert_eq!(view.visible_row_count(), total);
        assert_eq!(host.borrow().visible_rows(view.window()).len(), total);
    }
}

#[test]
fn repeated_frames_with_stable_layout_never_touch_visibility() {
    let host = HeadlessHost::shared();
    let mut view = open(&host, "Samples", 0);
    let tree = generated_tree(2, 4, 1);
    let total = count_entries(&tree);
    let digest = layout_digest(&tree);
    view.update_entries(total, &digest, &Rc::from(tree));
    host.borrow_mut().reset_stats();

    for frame in 0..5 {
        let mut tree = generated_tree(2, 4, 1);
        tree[0].ms_self = f64::from(frame);
        let snapshot: Snapshot = Rc::from(tree);
        let outcome = view.update_entries(total, &digest, &snapshot);
        assert_eq!(
            outcome,
            UpdateOutcome::Patched {
                rows: total,
                missed: 0
            }
        );
    }

    let stats = host.borrow().stats();
    assert_eq!(stats.visibility_writes, 0);
    assert_eq!(stats.colour_writes, 0);
    assert_eq!(stats.text_writes, 5 * total * 4);
}

#[test]
fn views_sharing_a_host_keep_separate_rows() {
    let host = HeadlessHost::shared();
    let mut main = open(&host, "Main", 0);
    let mut worker = open(&host, "Worker", 1);
    let top = Rect::new(0.0, 0.0, 1200.0, 30.0);
    let bottom = Rect::new(0.0, 700.0, 1200.0, 100.0);
    main.window_resized(&top, &bottom);
    worker.window_resized(&top, &bottom);

    let main_tree: Snapshot = Rc::from(vec![SampleEntry::new(1, "main")]);
    let worker_tree: Snapshot = Rc::from(vec![
        SampleEntry::new(1, "job_a"),
        SampleEntry::new(2, "job_b"),
    ]);
    main.update_entries(1, &LayoutDigest::from("m"), &main_tree);
    worker.update_entries(2, &LayoutDigest::from("w"), &worker_tree);

    let host = host.borrow();
    assert_eq!(host.visible_rows(main.window()).len(), 1);
    assert_eq!(host.visible_rows(worker.window()).len(), 2);
    let main_x = host.window(main.window()).expect("main").bounds.x;
    let worker_x = host.window(worker.window()).expect("worker").bounds.x;
    assert_eq!(worker_x - main_x, 410.0);
}
