mod reveal_view;
mod status_bar;

pub use reveal_view::RevealViewWidget;
pub use status_bar::StatusBarWidget;
