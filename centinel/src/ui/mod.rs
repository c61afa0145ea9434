//! UI module for the CENTINEL TUI.

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
