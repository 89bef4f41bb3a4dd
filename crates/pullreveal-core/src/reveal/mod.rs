//! Pull-to-reveal coordination between an inner list and two end regions
//!
//! Dragging or flinging past either end of the list reveals the matching
//! region, holds it fully open while the consumer loads, and collapses it
//! again when the consumer calls `stop_loading`.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `types` - Direction, intent, pointer and list vocabularies
//! - `position` - Combined offset with top bound, rest and bottom bound
//! - `easing` - Pure easing functions
//! - `timing` - Progress, interpolation and duration scaling
//!
//! ## L3 Molecular Layer
//! - `gesture` - Sticky direction intent per touch sequence
//! - `arbiter` - Per-delta consume or pass-through decision
//! - `animator` - Cancellable tick-driven transitions
//!
//! ## L2 Organism Layer
//! - `controller` - The state machine and consumer API
//!
//! # Usage
//!
//! ```ignore
//! use pullreveal_core::{Direction, LoadGestureController, RevealConfig};
//!
//! let mut controller = LoadGestureController::new(&RevealConfig::default());
//! controller.on_layout(top_region_height, bottom_region_height);
//! controller.add_on_load_listener(move |event| { let _ = tx.send(event); });
//!
//! // Host loop: forward pointer events and nested scroll deltas, then
//! controller.tick(frame_dt);
//!
//! // Once the data arrived:
//! controller.stop_loading(true);
//! ```

// L4 Atomic Layer
pub mod easing;
pub mod position;
pub mod timing;
pub mod types;

// L3 Molecular Layer
pub mod animator;
pub mod arbiter;
pub mod gesture;

// L2 Organism Layer
pub mod controller;

pub use animator::{Tick, TransitionAnimator};
pub use arbiter::{NestedScrollArbiter, VisibilityGates};
pub use controller::{ListenerId, LoadGestureController, Phase, TriggerPolicy};
pub use easing::EasingTypeExt;
pub use gesture::GestureClassifier;
pub use position::ScrollPositionModel;
pub use types::{
    Direction, Intent, ListScrollState, LoadIndicator, PointerEvent, RevealEvent, ScrollSource,
    ScrollTarget,
};
