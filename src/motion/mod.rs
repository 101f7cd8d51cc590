//! Scroll-linked motion: the scroll position publisher, the pure parallax
//! math that turns a scroll offset into per-layer transforms, and the
//! frame-driven float oscillator. Sections own their constants; everything
//! here is shared.

pub mod float;
pub mod parallax;
pub mod scroll;
