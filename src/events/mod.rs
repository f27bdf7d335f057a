pub mod key;
pub mod message;

pub use key::Key;
pub use message::{Message, MessageResponse};
