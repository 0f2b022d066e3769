//! Drawing layer: everything that touches egui.
//!
//! Views hand over plain chart artifacts; this layer only lays them out.

pub mod page;
pub mod plot;
