//! UI layer
//!
//! Contains views, widgets, shared components, symbols, and theme
//! definitions.

pub mod components;
pub mod palette;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;
