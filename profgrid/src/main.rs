mod frames;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use profgrid_ui_grid::{
    GridViewOptions, HeadlessHost, HierarchicalGridView, Rect, SharedHost,
    UpdateOutcome,
};

/// Bounds of the toolbar window the grids hang below.
const TOP_WINDOW: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1280.0,
    height: 40.0,
};

/// Bounds of the timeline window the grids stop above.
const BOTTOM_WINDOW: Rect = Rect {
    x: 0.0,
    y: 680.0,
    width: 1280.0,
    height: 120.0,
};

/// Simulated time between two recorded frames, in seconds.
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "profgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the recorded sample frames
    frames: PathBuf,

    /// Number of grid windows fed with every frame
    #[arg(long, default_value_t = 1)]
    views: u32,

    /// Slide the last grid one slot to the right while replaying
    #[arg(long)]
    slide: bool,
}

#[derive(Debug, Default)]
struct Tally {
    unchanged: usize,
    rebuilt: usize,
    patched: usize,
    missed: usize,
}

impl Tally {
    fn record(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Hidden => {},
            UpdateOutcome::Unchanged => self.unchanged += 1,
            UpdateOutcome::Rebuilt { .. } => self.rebuilt += 1,
            UpdateOutcome::Patched { missed, .. } => {
                self.patched += 1;
                self.missed += missed;
            },
        }
    }
}

type View = HierarchicalGridView<SharedHost, SharedHost>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let frames = frames::load(&cli.frames)?;
    info!("loaded {} frames from {}", frames.len(), cli.frames.display());

    let host = HeadlessHost::shared();
    let mut views = open_views(&host, cli.views.max(1))?;
    if cli.slide {
        if let Some(last) = views.last_mut() {
            let slot = cli.views.max(1);
            last.set_x_pos(slot, TOP_WINDOW, BOTTOM_WINDOW);
        }
    }

    let mut tally = Tally::default();
    for (index, frame) in frames.iter().enumerate() {
        for view in &mut views {
            view.animate(FRAME_DT);
            let outcome = view.update_entries(
                frame.entry_count,
                &frame.digest,
                &frame.entries,
            );
            debug!("frame {index}: {outcome:?}");
            tally.record(outcome);
        }
    }

    let stats = host.borrow().stats();
    info!(
        "replay done: {} rebuilt, {} patched, {} unchanged, {} index misses",
        tally.rebuilt, tally.patched, tally.unchanged, tally.missed
    );
    info!(
        "render writes: {} text, {} colour, {} visibility",
        stats.text_writes, stats.colour_writes, stats.visibility_writes
    );

    let host = host.borrow();
    for view in &views {
        let window = view.window();
        let name = host.window(window).map_or("", |state| state.name.as_str());
        println!(
            "== {name} (x = {}, {} of {} rows visible)",
            view.x_pos(),
            view.visible_row_count(),
            view.allocated_rows()
        );
        let rows = host.visible_rows(window);
        print!("{}", report::render_table(&host.header_texts(window), &rows));
    }

    Ok(())
}

fn open_views(host: &SharedHost, count: u32) -> Result<Vec<View>> {
    let mut views = Vec::with_capacity(count as usize);
    for slot in 0..count {
        let name = if slot == 0 {
            String::from("Samples")
        } else {
            format!("Samples {}", slot + 1)
        };
        let mut view = HierarchicalGridView::new(
            host.clone(),
            host.clone(),
            &name,
            slot,
            GridViewOptions::default(),
        )?;
        view.window_resized(&TOP_WINDOW, &BOTTOM_WINDOW);
        views.push(view);
    }
    Ok(views)
}
