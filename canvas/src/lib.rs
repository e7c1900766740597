//! Canvas interaction and transform-handle geometry engine for dotd.
//!
//! This crate owns everything that happens on the infinite canvas: the
//! pan/zoom camera, the collection of widgets, selection, corner-handle
//! resizing with minimum-size clamping, the delete affordance, and the
//! dispatch of raw gestures to the right target. The host layer is
//! responsible only for feeding gestures in and acting on the returned
//! [`engine::Action`]s (redraws, persistence, opening editors).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The canvas controller: selection, gestures, drop, snapshot/restore |
//! | [`doc`] | Ordered widget collection and the persisted canvas model |
//! | [`widget`] | Widget entity, content variants and edit state |
//! | [`blueprint`] | Palette blueprints and the widget factory |
//! | [`handle`] | Corner transform handles and the resize algorithm |
//! | [`delete`] | Delete affordance placement and activation |
//! | [`camera`] | Pan/zoom transform and coordinate conversions |
//! | [`geometry`] | Points, rectangles and corners |
//! | [`hit`] | Resolving a canvas point to a gesture target |
//! | [`input`] | Gesture events and the per-gesture state machine |
//! | [`render`] | Screen-space display list for the host renderer |
//! | [`config`] | Engine limits and styling |
//! | [`consts`] | Default numeric constants |

pub mod blueprint;
pub mod camera;
pub mod config;
pub mod consts;
pub mod delete;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod handle;
pub mod hit;
pub mod input;
pub mod render;
pub mod widget;
