pub mod navigation;
pub mod ui;

pub use navigation::{Paginator, SlotRole};
pub use ui::{Screen, UIState};
