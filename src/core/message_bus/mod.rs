//=========================================================================
// Message Bus Module
//=========================================================================

mod message_bus;
mod message_queue;

pub use message_bus::{Message, MessageBus};
