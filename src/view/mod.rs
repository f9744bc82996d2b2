//! Log list view: cards, their container, user notifications and the
//! controller wiring them to the log API.

pub mod card;
pub mod container;
pub mod controller;
pub mod notifier;
pub mod timestamp;
