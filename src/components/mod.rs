pub mod footer;
pub mod header;
pub mod logo_panel;
pub mod modals;
pub mod picker;
pub mod quote_panel;
