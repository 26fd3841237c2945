//! # Introduction
//!
//! shapecalc computes the area and perimeter of circles, rectangles, squares
//! and triangles, and shows the shape as a spring-animated drawing in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Keys → Form (text → Dimensions) → Shape → Measurements → Results pane
//!                  └──────────────→ Animation → Visualization pane
//! ```
//!
//! 1. [`geometry`]: the shape variants and the [`geometry::Measure`] trait.
//!    Pure and infallible; missing input propagates as NaN.
//! 2. [`form`]: one interactive session's selected kind, entered text and
//!    last result.
//! 3. [`animation`]: clamped display sizes and spring motion, fed from the raw
//!    dimensions rather than the results.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 5. [`config`], [`logging`], [`error`]: command line, tracing setup and the
//!    process-level error type.

pub mod animation;
pub mod config;
pub mod error;
pub mod form;
pub mod geometry;
pub mod logging;
pub mod ui;
