// Copyright 2026 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM marker elements.
//!
//! Places one absolutely positioned `<div>` per marker inside a container,
//! moving it each frame with a CSS `matrix3d()` transform. Useful as a
//! debugging overlay or where no GPU renderer is available.

use alloc::format;
use alloc::vec::Vec;

use orrery_core::backend::Presenter;
use orrery_core::color::Color;
use orrery_core::marker::{MarkerKind, OrbitingMarker};
use orrery_core::point::Point3;
use orrery_core::transform::Transform3d;
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

/// Default CSS pixels per world unit.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 40.0;

/// Mirrors markers as DOM elements inside a container.
///
/// World `+y` maps to screen up. Elements are created on the first
/// [`apply`](Presenter::apply) that sees a marker and reused afterwards.
pub struct DomMarkerPresenter {
    container: HtmlElement,
    elements: Vec<HtmlElement>,
    pixels_per_unit: f64,
}

impl core::fmt::Debug for DomMarkerPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomMarkerPresenter")
            .field("container", &"HtmlElement")
            .field("elements_len", &self.elements.len())
            .field("pixels_per_unit", &self.pixels_per_unit)
            .finish()
    }
}

impl DomMarkerPresenter {
    /// Creates a presenter that manages child elements of `container`.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self::with_scale(container, DEFAULT_PIXELS_PER_UNIT)
    }

    /// Creates a presenter with a custom world-to-pixel scale.
    #[must_use]
    pub fn with_scale(container: HtmlElement, pixels_per_unit: f64) -> Self {
        Self {
            container,
            elements: Vec::new(),
            pixels_per_unit,
        }
    }

    /// Returns a reference to the container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// Returns the element for the marker at `idx`, if it has been created.
    #[must_use]
    pub fn get_element(&self, idx: usize) -> Option<&HtmlElement> {
        self.elements.get(idx)
    }

    fn create_element(&self, marker: &OrbitingMarker) -> Option<HtmlElement> {
        let doc = self.container.owner_document()?;
        let el: HtmlElement = doc.create_element("div").ok()?.unchecked_into();
        let size = match marker.kind() {
            MarkerKind::Point => "8px",
            MarkerKind::Directional => "12px",
        };
        let s = el.style();
        let _ = s.set_property("position", "absolute");
        let _ = s.set_property("left", "50%");
        let _ = s.set_property("top", "50%");
        let _ = s.set_property("width", size);
        let _ = s.set_property("height", size);
        let _ = s.set_property("border-radius", "50%");
        let _ = s.set_property("transform-origin", "0 0");
        let _ = s.set_property("background", &css_color(marker.light().color));
        el.set_title(marker.name());
        let _ = self.container.append_child(&el);
        Some(el)
    }

    fn screen_transform(&self, p: Point3) -> Transform3d {
        let s = self.pixels_per_unit;
        Transform3d::from_translation(Point3::new(p.x * s, -p.y * s, p.z * s))
    }
}

impl Presenter for DomMarkerPresenter {
    fn apply(&mut self, markers: &[OrbitingMarker]) {
        while self.elements.len() < markers.len() {
            let Some(el) = self.create_element(&markers[self.elements.len()]) else {
                return;
            };
            self.elements.push(el);
        }

        for (el, marker) in self.elements.iter().zip(markers) {
            apply_css_transform(el, &self.screen_transform(marker.position()));
        }
    }
}

/// Applies a transform as a CSS `matrix3d()` value.
fn apply_css_transform(el: &HtmlElement, xf: &Transform3d) {
    let c0 = xf.col(0);
    let c1 = xf.col(1);
    let c2 = xf.col(2);
    let c3 = xf.col(3);

    let css = format!(
        "matrix3d({},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{})",
        c0[0],
        c0[1],
        c0[2],
        c0[3],
        c1[0],
        c1[1],
        c1[2],
        c1[3],
        c2[0],
        c2[1],
        c2[2],
        c2[3],
        c3[0],
        c3[1],
        c3[2],
        c3[3],
    );

    let _ = el.style().set_property("transform", &css);
}

fn css_color(c: Color) -> alloc::string::String {
    format!(
        "rgb({:.1}%, {:.1}%, {:.1}%)",
        c.r * 100.0,
        c.g * 100.0,
        c.b * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_uses_percentages() {
        assert_eq!(css_color(Color::WHITE), "rgb(100.0%, 100.0%, 100.0%)");
        assert_eq!(
            css_color(Color::from_u32(0xff_0000)),
            "rgb(100.0%, 0.0%, 0.0%)"
        );
    }
}
