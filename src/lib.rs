//! Wire-level vocabulary of the sound menu, shared between the service
//! that emits sink-state signals and the client that renders the menu.
//!
//! Both sides link this crate so the strings cannot drift apart. Every
//! value here is matched across a process boundary by exact string
//! equality; once published it must never change.

pub mod menu;
pub mod signals;

pub use menu::MenuItemType;
pub use signals::SinkSignal;
