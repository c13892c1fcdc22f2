use std::rc::Rc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use profgrid_ui_grid::{GridViewOptions, HeadlessHost, HierarchicalGridView};
use profgrid_ui_tree::{SampleEntry, Snapshot, count_entries, layout_digest};

fn frame_tree(frame: u32) -> Vec<SampleEntry> {
    (0..32u64)
        .map(|parent| {
            let children = (0..8u64)
                .map(|child| {
                    SampleEntry::new(1000 + parent * 8 + child, "child")
                        .with_timing(0.1, f64::from(frame % 7) * 0.01)
                })
                .collect();
            SampleEntry::new(parent, "parent")
                .with_timing(1.0, 0.2)
                .with_children(children)
        })
        .collect()
}

fn bench_update_entries(c: &mut Criterion) {
    let host = HeadlessHost::shared();
    let mut view = HierarchicalGridView::new(
        host.clone(),
        host.clone(),
        "Bench",
        0,
        GridViewOptions::default(),
    )
    .expect("window");

    let tree = frame_tree(0);
    let total = count_entries(&tree);
    let digest = layout_digest(&tree);
    let first: Snapshot = Rc::from(tree);
    view.update_entries(total, &digest, &first);

    let mut frame = 0;
    c.bench_function("update_entries_patch", |b| {
        b.iter(|| {
            frame += 1;
            let snapshot: Snapshot = Rc::from(frame_tree(frame));
            black_box(view.update_entries(total, &digest, &snapshot));
        });
    });

    c.bench_function("update_entries_rebuild", |b| {
        b.iter(|| {
            frame += 1;
            let snapshot: Snapshot = Rc::from(frame_tree(frame));
            let digest = format!("frame-{frame}").into();
            black_box(view.update_entries(total, &digest, &snapshot));
        });
    });
}

criterion_group!(grid, bench_update_entries);
criterion_main!(grid);
