// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Events land on two timelines. Phase begin/end pairs are stamped with host
//! time and appear under process [`HOST_PID`]. Ticks, pending frames, marker
//! moves, and summaries are stamped with the scene clock's elapsed time and
//! appear under process [`SCENE_PID`].
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use orrery_core::time::Timebase;

use crate::recorder::{RecordedEvent, decode};

/// Process id for host-time phase slices.
pub const HOST_PID: u32 = 0;
/// Process id for scene-clock events.
pub const SCENE_PID: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Host timestamps are converted to microseconds using the provided
/// [`Timebase`].
///
/// # Errors
///
/// Returns any I/O or serialization error from writing to `writer`.
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    // Marker events carry no time of their own; they share the timestamp of
    // the tick that produced them.
    let mut last_tick_us = 0.0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Tick(e) => {
                last_tick_us = secs_to_us(e.elapsed);
                let anchor = e.anchor.map(|p| json!([p.x, p.y, p.z]));
                events.push(json!({
                    "ph": "i",
                    "name": "Tick",
                    "cat": "Scene",
                    "ts": last_tick_us,
                    "pid": SCENE_PID,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "frame_index": e.frame_index,
                        "anchor": anchor,
                    }
                }));
            }
            RecordedEvent::AnchorPending(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "AnchorPending",
                    "cat": "Scene",
                    "ts": secs_to_us(e.elapsed),
                    "pid": SCENE_PID,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::PhaseBegin(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": format!("{:?}", e.phase),
                    "cat": "Frame",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": HOST_PID,
                    "tid": 0,
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::PhaseEnd(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": format!("{:?}", e.phase),
                    "cat": "Frame",
                    "ts": ticks_to_us(e.timestamp.ticks(), timebase),
                    "pid": HOST_PID,
                    "tid": 0,
                    "args": {
                        "frame_index": e.frame_index,
                    }
                }));
            }
            RecordedEvent::FrameSummary(s) => {
                events.push(json!({
                    "ph": "i",
                    "name": "FrameSummary",
                    "cat": "Summary",
                    "ts": secs_to_us(s.elapsed),
                    "pid": SCENE_PID,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "frame_index": s.frame_index,
                        "anchor_ready": s.anchor_ready,
                        "markers_updated": s.markers_updated,
                        "update_us": ticks_to_us(s.update_ticks, timebase),
                        "present_us": ticks_to_us(s.present_ticks, timebase),
                    }
                }));
            }
            RecordedEvent::MarkerMoved(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": format!("marker {}", e.marker.get()),
                    "cat": "Rich",
                    "ts": last_tick_us,
                    "pid": SCENE_PID,
                    "tid": 0,
                    "args": {
                        "x": e.position.x,
                        "y": e.position.y,
                        "z": e.position.z,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}

fn secs_to_us(secs: f64) -> f64 {
    secs * 1_000_000.0
}
