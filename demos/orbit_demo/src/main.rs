// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated host loop that drives the standard light rig.
//!
//! Runs 60 synthetic frames at irregular intervals. The anchor mesh "finishes
//! loading" partway through, so the first frames hold the markers still and
//! the rest move them. Events go to both a
//! [`PrettyPrintSink`](orrery_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](orrery_debug::recorder::RecorderSink), then the recording
//! is exported as Chrome trace JSON.

use std::fs::File;
use std::io::BufWriter;
use std::sync::atomic::{AtomicU64, Ordering};

use orrery_core::anchor::{AnchorSource, SceneAnchor, SpinAnimation};
use orrery_core::backend::Presenter;
use orrery_core::clock::{ClockSource, ElapsedClock};
use orrery_core::gpu::LightBlock;
use orrery_core::marker::OrbitingMarker;
use orrery_core::material::MaterialTuning;
use orrery_core::point::Point3;
use orrery_core::rig::OrbitConfig;
use orrery_core::time::{HostTime, Timebase};
use orrery_core::trace::{
    AnchorPendingEvent, FrameSummary, FrameSummaryBuilder, MarkerMovedEvent, PhaseBeginEvent,
    PhaseEndEvent, PhaseKind, TickEvent, TraceSink, Tracer,
};
use orrery_core::updater::{FrameUpdater, SceneState};
use orrery_core::viewport::Viewport;

use orrery_debug::pretty::PrettyPrintSink;
use orrery_debug::recorder::RecorderSink;

const FRAME_COUNT: u64 = 60;
/// Frame on which the anchor mesh becomes available.
const ANCHOR_READY_FRAME: u64 = 12;
/// Frame intervals in microseconds, cycled. Mixes 60 Hz, 120 Hz, and stalls.
const INTERVALS_US: [u64; 7] = [16_667, 16_667, 8_333, 33_333, 16_667, 50_000, 11_111];
/// Simulated cost of the update phase.
const UPDATE_COST_US: u64 = 40;
/// Simulated cost of drawing.
const PRESENT_COST_US: u64 = 2_500;

/// Simulated host clock, in microseconds.
static HOST_NOW_US: AtomicU64 = AtomicU64::new(1_000_000);

fn host_now() -> HostTime {
    HostTime(HOST_NOW_US.load(Ordering::Relaxed))
}

fn advance_host(us: u64) {
    HOST_NOW_US.fetch_add(us, Ordering::Relaxed);
}

/// Forwards every event to two sinks.
struct Tee<'a, A, B> {
    a: &'a mut A,
    b: &'a mut B,
}

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<'_, A, B> {
    fn on_tick(&mut self, e: &TickEvent) {
        self.a.on_tick(e);
        self.b.on_tick(e);
    }

    fn on_anchor_pending(&mut self, e: &AnchorPendingEvent) {
        self.a.on_anchor_pending(e);
        self.b.on_anchor_pending(e);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.a.on_phase_begin(e);
        self.b.on_phase_begin(e);
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.a.on_phase_end(e);
        self.b.on_phase_end(e);
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.a.on_frame_summary(s);
        self.b.on_frame_summary(s);
    }

    fn on_marker_moved(&mut self, e: &MarkerMovedEvent) {
        self.a.on_marker_moved(e);
        self.b.on_marker_moved(e);
    }
}

/// Stands in for a GPU renderer: packs the light uniform each frame.
struct UniformPresenter {
    anchor: Option<Point3>,
    block: LightBlock,
    uploads: u64,
}

impl Presenter for UniformPresenter {
    fn apply(&mut self, markers: &[OrbitingMarker]) {
        self.block = LightBlock::pack(markers, self.anchor);
        self.uploads += 1;
    }
}

fn main() -> std::io::Result<()> {
    let timebase = Timebase::MICROS;

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let mut recorder = RecorderSink::new();

    // -- scene -------------------------------------------------------------
    let clock = ElapsedClock::new(host_now, timebase);
    let mut anchor = SceneAnchor::new(SpinAnimation::STANDARD);
    let mut updater = FrameUpdater::standard(&OrbitConfig::STANDARD);
    let mut presenter = UniformPresenter {
        anchor: None,
        block: LightBlock::default(),
        uploads: 0,
    };
    let mut viewport = Viewport::new(1280, 720, 2.0);
    let mut material = MaterialTuning::default();

    // -- simulated loop ----------------------------------------------------
    for (frame_index, &interval) in (0..FRAME_COUNT).zip(INTERVALS_US.iter().cycle()) {
        advance_host(interval);

        if frame_index == ANCHOR_READY_FRAME {
            anchor.attach(Point3::new(0.0, 0.5, 0.0));
        }
        if frame_index == FRAME_COUNT / 2 {
            viewport.resize(900, 900);
            if let Err(err) = material.set_color_hex("#8fb3ff") {
                eprintln!("material color rejected: {err}");
            }
        }
        if let Some(color) = material.take_changed() {
            println!(
                "[material] frame={frame_index} color=({:.2}, {:.2}, {:.2})",
                color.r, color.g, color.b
            );
        }
        anchor.animate(clock.elapsed_seconds());

        let mut tee = Tee {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // 1. Update
        let update_start = host_now();
        tracer.phase_begin(&PhaseBeginEvent {
            frame_index,
            phase: PhaseKind::Update,
            timestamp: update_start,
        });
        updater.tick_traced(
            &SceneState {
                clock: &clock,
                anchor: &anchor,
            },
            &mut tracer,
        );
        advance_host(UPDATE_COST_US);
        let update_end = host_now();
        tracer.phase_end(&PhaseEndEvent {
            frame_index,
            phase: PhaseKind::Update,
            timestamp: update_end,
        });

        // 2. Present
        let present_start = update_end;
        tracer.phase_begin(&PhaseBeginEvent {
            frame_index,
            phase: PhaseKind::Present,
            timestamp: present_start,
        });
        presenter.anchor = anchor.anchor_position();
        presenter.apply(updater.markers());
        advance_host(PRESENT_COST_US);
        let present_end = host_now();
        tracer.phase_end(&PhaseEndEvent {
            frame_index,
            phase: PhaseKind::Present,
            timestamp: present_end,
        });

        // 3. Summary
        let Some(record) = updater.last_frame() else {
            continue;
        };
        let marker_count = u32::try_from(updater.markers().len()).unwrap_or(u32::MAX);
        let mut builder = FrameSummaryBuilder::new(&TickEvent::from(&record), marker_count);
        builder.phase_begin(PhaseKind::Update, update_start);
        builder.phase_end(PhaseKind::Update, update_end);
        builder.phase_begin(PhaseKind::Present, present_start);
        builder.phase_end(PhaseKind::Present, present_end);
        tracer.frame_summary(&builder.finish());
    }

    let (buf_w, buf_h) = viewport.drawing_buffer_size();
    println!(
        "Uploaded {} light blocks ({} lights each), final buffer {buf_w}x{buf_h} aspect {:.3}",
        presenter.uploads,
        presenter.block.count,
        viewport.aspect(),
    );

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    orrery_debug::chrome::export(recorder.as_bytes(), timebase, &mut writer)?;

    println!("Wrote {path} ({FRAME_COUNT} frames)");
    Ok(())
}
