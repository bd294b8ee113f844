// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`]. Floating-point fields are stored as
//! their IEEE 754 bit patterns, so decoding is exact.

use orrery_core::marker::MarkerId;
use orrery_core::point::Point3;
use orrery_core::time::HostTime;
use orrery_core::trace::{
    AnchorPendingEvent, FrameSummary, MarkerMovedEvent, PhaseBeginEvent, PhaseEndEvent,
    PhaseKind, TickEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TICK: u8 = 1;
const TAG_ANCHOR_PENDING: u8 = 2;
const TAG_PHASE_BEGIN: u8 = 3;
const TAG_PHASE_END: u8 = 4;
const TAG_FRAME_SUMMARY: u8 = 5;
const TAG_MARKER_MOVED: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_point(&mut self, p: Point3) {
        self.write_f64(p.x);
        self.write_f64(p.y);
        self.write_f64(p.z);
    }

    fn write_option_point(&mut self, v: Option<Point3>) {
        match v {
            Some(p) => {
                self.write_u8(1);
                self.write_point(p);
            }
            None => {
                self.write_u8(0);
                self.write_point(Point3::ORIGIN);
            }
        }
    }

    fn write_phase(&mut self, p: PhaseKind) {
        self.write_u8(match p {
            PhaseKind::Update => 0,
            PhaseKind::Present => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_tick(&mut self, e: &TickEvent) {
        self.write_u8(TAG_TICK);
        self.write_u64(e.frame_index);
        self.write_f64(e.elapsed);
        self.write_option_point(e.anchor);
    }

    fn on_anchor_pending(&mut self, e: &AnchorPendingEvent) {
        self.write_u8(TAG_ANCHOR_PENDING);
        self.write_u64(e.frame_index);
        self.write_f64(e.elapsed);
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.write_u8(TAG_PHASE_BEGIN);
        self.write_u64(e.frame_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.write_u8(TAG_PHASE_END);
        self.write_u64(e.frame_index);
        self.write_phase(e.phase);
        self.write_u64(e.timestamp.ticks());
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.write_u8(TAG_FRAME_SUMMARY);
        self.write_u64(s.frame_index);
        self.write_f64(s.elapsed);
        self.write_u8(u8::from(s.anchor_ready));
        self.write_u32(s.markers_updated);
        self.write_u64(s.update_ticks);
        self.write_u64(s.present_ticks);
    }

    fn on_marker_moved(&mut self, e: &MarkerMovedEvent) {
        self.write_u8(TAG_MARKER_MOVED);
        self.write_u64(e.frame_index);
        self.write_u32(e.marker.get());
        self.write_point(e.position);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`TickEvent`].
    Tick(TickEvent),
    /// An [`AnchorPendingEvent`].
    AnchorPending(AnchorPendingEvent),
    /// A [`PhaseBeginEvent`].
    PhaseBegin(PhaseBeginEvent),
    /// A [`PhaseEndEvent`].
    PhaseEnd(PhaseEndEvent),
    /// A [`FrameSummary`].
    FrameSummary(FrameSummary),
    /// A [`MarkerMovedEvent`].
    MarkerMoved(MarkerMovedEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn read_u8(&mut self) -> Option<u8> {
        if self.remaining() < 1 {
            return None;
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Some(v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        if self.remaining() < 4 {
            return None;
        }
        let v = u32::from_le_bytes(self.data[self.pos..self.pos + 4].try_into().ok()?);
        self.pos += 4;
        Some(v)
    }

    fn read_u64(&mut self) -> Option<u64> {
        if self.remaining() < 8 {
            return None;
        }
        let v = u64::from_le_bytes(self.data[self.pos..self.pos + 8].try_into().ok()?);
        self.pos += 8;
        Some(v)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.read_u64().map(f64::from_bits)
    }

    fn read_point(&mut self) -> Option<Point3> {
        Some(Point3::new(self.read_f64()?, self.read_f64()?, self.read_f64()?))
    }

    fn read_option_point(&mut self) -> Option<Option<Point3>> {
        let present = self.read_u8()?;
        let p = self.read_point()?;
        Some((present != 0).then_some(p))
    }

    fn read_phase(&mut self) -> Option<PhaseKind> {
        Some(match self.read_u8()? {
            0 => PhaseKind::Update,
            _ => PhaseKind::Present,
        })
    }

    fn decode_tick(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Tick(TickEvent {
            frame_index: self.read_u64()?,
            elapsed: self.read_f64()?,
            anchor: self.read_option_point()?,
        }))
    }

    fn decode_anchor_pending(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::AnchorPending(AnchorPendingEvent {
            frame_index: self.read_u64()?,
            elapsed: self.read_f64()?,
        }))
    }

    fn decode_phase_begin(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseBegin(PhaseBeginEvent {
            frame_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_phase_end(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::PhaseEnd(PhaseEndEvent {
            frame_index: self.read_u64()?,
            phase: self.read_phase()?,
            timestamp: HostTime(self.read_u64()?),
        }))
    }

    fn decode_frame_summary(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::FrameSummary(FrameSummary {
            frame_index: self.read_u64()?,
            elapsed: self.read_f64()?,
            anchor_ready: self.read_u8()? != 0,
            markers_updated: self.read_u32()?,
            update_ticks: self.read_u64()?,
            present_ticks: self.read_u64()?,
        }))
    }

    fn decode_marker_moved(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::MarkerMoved(MarkerMovedEvent {
            frame_index: self.read_u64()?,
            marker: MarkerId(self.read_u32()?),
            position: self.read_point()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TICK => self.decode_tick(),
            TAG_ANCHOR_PENDING => self.decode_anchor_pending(),
            TAG_PHASE_BEGIN => self.decode_phase_begin(),
            TAG_PHASE_END => self.decode_phase_end(),
            TAG_FRAME_SUMMARY => self.decode_frame_summary(),
            TAG_MARKER_MOVED => self.decode_marker_moved(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
