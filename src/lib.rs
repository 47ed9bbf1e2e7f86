//! LED Scroller
//!
//! Edit screen for a scrolling LED marquee: text, colors, speed and font
//! with a live animated preview. Settings are mirrored to a persistent
//! key-value store and restored from it on launch.

pub mod config;
pub mod controller;
pub mod error;
pub mod measure;
pub mod mirror;
pub mod options;
pub mod picker;
pub mod platform;
pub mod preview;
pub mod settings;
pub mod store;
pub mod ui;

pub use error::{Error, Result};
