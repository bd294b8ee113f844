// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Phase
//! timestamps are converted to microseconds using a [`Timebase`].

use std::io::Write;

use orrery_core::point::Point3;
use orrery_core::time::{HostTime, Timebase};
use orrery_core::trace::{
    AnchorPendingEvent, FrameSummary, MarkerMovedEvent, PhaseBeginEvent, PhaseEndEvent,
    PhaseKind, TickEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    timebase: Timebase,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("timebase", &self.timebase)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr(timebase: Timebase) -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            timebase,
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W, timebase: Timebase) -> Self {
        Self { writer, timebase }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn ticks_to_us(&self, ticks: u64) -> f64 {
        self.timebase.ticks_to_nanos(ticks) as f64 / 1000.0
    }

    fn host_us(&self, t: HostTime) -> f64 {
        self.ticks_to_us(t.ticks())
    }
}

fn phase_name(phase: PhaseKind) -> &'static str {
    match phase {
        PhaseKind::Update => "update",
        PhaseKind::Present => "present",
    }
}

struct Pos(Point3);

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0.x, self.0.y, self.0.z)
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tick(&mut self, e: &TickEvent) {
        let _ = match e.anchor {
            Some(anchor) => writeln!(
                self.writer,
                "[tick] frame={} t={:.4}s anchor={}",
                e.frame_index,
                e.elapsed,
                Pos(anchor),
            ),
            None => writeln!(
                self.writer,
                "[tick] frame={} t={:.4}s anchor=none",
                e.frame_index, e.elapsed,
            ),
        };
    }

    fn on_anchor_pending(&mut self, e: &AnchorPendingEvent) {
        let _ = writeln!(
            self.writer,
            "[pending] frame={} t={:.4}s markers held",
            e.frame_index, e.elapsed,
        );
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:begin] frame={} {} at {:.1}µs",
            e.frame_index,
            phase_name(e.phase),
            self.host_us(e.timestamp),
        );
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        let _ = writeln!(
            self.writer,
            "[phase:end] frame={} {} at {:.1}µs",
            e.frame_index,
            phase_name(e.phase),
            self.host_us(e.timestamp),
        );
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        let anchor = if s.anchor_ready { "ready" } else { "pending" };
        let _ = writeln!(
            self.writer,
            "[summary] frame={} t={:.4}s anchor={anchor} markers={} \
             update={:.1}µs present={:.1}µs",
            s.frame_index,
            s.elapsed,
            s.markers_updated,
            self.ticks_to_us(s.update_ticks),
            self.ticks_to_us(s.present_ticks),
        );
    }

    fn on_marker_moved(&mut self, e: &MarkerMovedEvent) {
        let _ = writeln!(
            self.writer,
            "[marker] frame={} id={} at {}",
            e.frame_index,
            e.marker.get(),
            Pos(e.position),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::marker::MarkerId;

    fn output_of(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new(), Timebase::NANOS);
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_tick() {
        let output = output_of(|sink| {
            sink.on_tick(&TickEvent {
                frame_index: 1,
                elapsed: 0.5,
                anchor: Some(Point3::new(1.0, 2.0, 3.0)),
            });
        });
        assert!(output.contains("[tick]"), "got: {output}");
        assert!(output.contains("frame=1"), "got: {output}");
        assert!(output.contains("(1.000, 2.000, 3.000)"), "got: {output}");
    }

    #[test]
    fn pretty_print_pending_and_summary() {
        let output = output_of(|sink| {
            sink.on_tick(&TickEvent {
                frame_index: 0,
                elapsed: 0.0,
                anchor: None,
            });
            sink.on_anchor_pending(&AnchorPendingEvent {
                frame_index: 0,
                elapsed: 0.0,
            });
            sink.on_frame_summary(&FrameSummary {
                frame_index: 0,
                elapsed: 0.0,
                anchor_ready: false,
                markers_updated: 0,
                update_ticks: 2_000,
                present_ticks: 0,
            });
        });
        assert!(output.contains("anchor=none"), "got: {output}");
        assert!(output.contains("[pending] frame=0"), "got: {output}");
        assert!(output.contains("anchor=pending"), "got: {output}");
        assert!(output.contains("update=2.0µs"), "got: {output}");
    }

    #[test]
    fn pretty_print_marker() {
        let output = output_of(|sink| {
            sink.on_marker_moved(&MarkerMovedEvent {
                frame_index: 9,
                marker: MarkerId(4),
                position: Point3::new(0.0, -1.5, 3.0),
            });
        });
        assert_eq!(output, "[marker] frame=9 id=4 at (0.000, -1.500, 3.000)\n");
    }
}
