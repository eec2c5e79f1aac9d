// Domain layer: tray/item/shopping models and ports. No dependencies beyond
// std, serde and chrono.

pub mod item;
pub mod ports;
pub mod shopping;
pub mod tray;
