pub mod room_flow;
pub mod rooms;

pub use room_flow::{Joined, RoomFlowService};
pub use rooms::{RoomRegistry, RoomSummary};
