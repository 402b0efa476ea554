pub mod market;
pub mod navigation;
pub mod ui;
