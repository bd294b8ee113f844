// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GPU-ready light uniforms.
//!
//! [`LightBlock`] is a plain-old-data uniform buffer layout a renderer can
//! upload with `bytemuck::bytes_of`. Each [`LightUniform`] packs either a
//! point light position (`w = 1`) or a directional light direction
//! (`w = 0`), matching the usual homogeneous-coordinate convention in
//! shaders.

use bytemuck::{Pod, Zeroable};

use crate::marker::{MarkerKind, OrbitingMarker};
use crate::point::Point3;

/// Maximum number of lights in a [`LightBlock`].
pub const MAX_LIGHTS: usize = 8;

/// Direction used when a directional marker sits exactly on its target.
const FALLBACK_DIRECTION: [f32; 4] = [0.0, -1.0, 0.0, 0.0];

/// One light in the uniform block.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    /// `xyz` position with `w = 1`, or `xyz` direction with `w = 0`.
    pub position_or_direction: [f32; 4],
    /// Linear `rgb` color premultiplied by intensity; `a` holds the raw
    /// intensity.
    pub color: [f32; 4],
}

/// Uniform block holding up to [`MAX_LIGHTS`] lights.
#[repr(C, align(16))]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LightBlock {
    /// Light entries; only the first `count` are meaningful.
    pub lights: [LightUniform; MAX_LIGHTS],
    /// Number of valid entries.
    pub count: u32,
    _pad: [u32; 3],
}

impl Default for LightBlock {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl LightBlock {
    /// Packs `markers` into a uniform block.
    ///
    /// Directional lights point from the marker toward `anchor`, or toward
    /// the origin while the anchor is missing. Markers beyond
    /// [`MAX_LIGHTS`] are dropped.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "GPU uniforms are f32 and the light count is at most MAX_LIGHTS"
    )]
    pub fn pack(markers: &[OrbitingMarker], anchor: Option<Point3>) -> Self {
        let target = anchor.unwrap_or(Point3::ORIGIN);
        let mut block = Self::default();

        for (slot, marker) in block.lights.iter_mut().zip(markers) {
            let position_or_direction = match marker.kind() {
                MarkerKind::Point => {
                    let p = marker.position();
                    [p.x as f32, p.y as f32, p.z as f32, 1.0]
                }
                MarkerKind::Directional => match marker.direction_to(target) {
                    Some(d) => [d.x as f32, d.y as f32, d.z as f32, 0.0],
                    None => FALLBACK_DIRECTION,
                },
            };
            let light = marker.light();
            let i = light.intensity;
            *slot = LightUniform {
                position_or_direction,
                color: [light.color.r * i, light.color.g * i, light.color.b * i, i],
            };
        }
        block.count = markers.len().min(MAX_LIGHTS) as u32;
        block
    }

    /// The valid entries.
    #[must_use]
    pub fn active(&self) -> &[LightUniform] {
        &self.lights[..(self.count as usize).min(MAX_LIGHTS)]
    }
}
