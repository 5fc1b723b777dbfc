//! Embassy task modules

pub mod settings_rx;
pub mod tick;

pub use settings_rx::settings_rx_task;
pub use tick::tick_task;
