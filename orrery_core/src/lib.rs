// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for frame-driven orbiting light markers.
//!
//! `orrery_core` keeps a small set of light markers circling a loaded scene
//! object (the *anchor*). It is `no_std` compatible (with `alloc`) and owns
//! no platform code: the host supplies time, the anchor, and a renderer.
//!
//! # Architecture
//!
//! ```text
//!   Host frame callback
//!       │
//!       ▼
//!   ClockSource ─┐
//!                ├─► SceneState ──► FrameUpdater::tick() ──► markers
//!   AnchorSource ┘                                             │
//!                                      ┌──────────────────────┘
//!                                      ▼
//!                    Presenter::apply() / LightBlock::pack()
//! ```
//!
//! **[`updater`]**: [`FrameUpdater`](updater::FrameUpdater) reads the clock
//! and anchor once per frame and recomputes every marker, or none of them
//! when the anchor has not loaded yet.
//!
//! **[`marker`]**: Marker identity, light appearance, and the circular
//! [`MotionRule`](marker::MotionRule) each marker follows.
//!
//! **[`rig`]**: The standard six-light configuration.
//!
//! **[`clock`]**: Elapsed-time sources, built on the tick/timebase types in
//! [`time`].
//!
//! **[`anchor`]**: The anchor mesh state and its slow spin.
//!
//! **[`backend`]**: The [`Presenter`](backend::Presenter) trait that
//! renderers implement.
//!
//! **[`gpu`]**: `bytemuck` uniform layout for uploading lights.
//!
//! **[`viewport`]**, **[`material`]**, **[`color`]**: Host-side render
//! state: resize handling and the tunable mesh color.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-marker
//!   movement events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod anchor;
pub mod backend;
pub mod clock;
pub mod color;
pub mod gpu;
pub mod marker;
pub mod material;
pub mod point;
pub mod rig;
pub mod time;
pub mod trace;
pub mod transform;
pub mod updater;
pub mod viewport;
