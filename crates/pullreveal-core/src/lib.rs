pub mod config;
pub mod error;
pub mod paging;
pub mod reveal;

pub use config::{AppConfig, EasingType, PagingConfig, RevealConfig, RevealKind, UiConfig};
pub use error::{Error, Result};
pub use paging::PageWindow;
pub use reveal::{
    Direction, ListScrollState, LoadGestureController, LoadIndicator, Phase, PointerEvent,
    RevealEvent, ScrollSource, ScrollTarget,
};
