pub mod app;
pub mod event;
pub mod indicator;
pub mod input;
pub mod list;
pub mod pager;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
