#![forbid(unsafe_code)]

//! Unified event bus for kithara components.

mod bus;
mod event;
mod text;

pub use bus::EventBus;
pub use event::Event;
pub use text::TextEvent;
