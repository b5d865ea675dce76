mod central_panel;
mod menu_bar;

pub use central_panel::{central_panel, status_bar};
pub use menu_bar::{MenuChoice, menu_bar};
