//! Interactive viewport controller for browser graphics demos.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to a
//! WebGL2 or WebGPU render loop. It owns the two pieces of canvas plumbing the
//! demos share: keeping the canvas backing store in exact 1:1 correspondence
//! with device pixels, and turning click-and-drag gestures into incremental
//! pan deltas. The render loop itself (shaders, buffers, render passes) stays
//! in the host and only reads the projection and backing size from here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Point and size types in logical and backing pixels |
//! | [`sizer`] | Device-pixel-aware backing-store sizing |
//! | [`drag`] | Pointer drag state machine and the host-agnostic tracker |
//! | [`camera`] | Accumulated pan/zoom and the orthographic projection |
//! | [`controller`] | Context struct tying sizer, camera and config together |
//! | [`config`] | Host-supplied configuration parsed from JSON |
//! | [`error`] | Setup failures surfaced to the host |
//! | [`web`] | `web-sys` implementations of the surface, observer and pointer contracts |
//! | [`consts`] | Shared numeric defaults |

pub mod camera;
pub mod config;
pub mod consts;
pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod sizer;
pub mod web;
