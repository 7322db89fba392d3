//! Rooms pairing two boards, and the store that owns them

mod room;
mod session;
mod store;

pub use room::{BoardSide, Room};
pub use session::Session;
pub use store::{RoomHandle, RoomStore};
