//! Profile presentation: view model and surface binding

pub mod ports;
pub mod service;
pub mod view;

pub use ports::{ChartRegion, DisplaySurface, ListSlot, Slot, TooltipBinding, View};
pub use service::Renderer;
pub use view::ProfileView;
