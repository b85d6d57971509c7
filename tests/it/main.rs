//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead to one binary.
//!
//! Structure:
//! - helpers: Viewport builders, input shorthands and an event recorder
//! - integration: Full gesture workflows through `DragZoom::dispatch`
//! - unit: Single-component tests against the public API

mod helpers;
mod unit;
