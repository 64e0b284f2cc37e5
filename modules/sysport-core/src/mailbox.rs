mod buffer;
mod element;
mod queue;

pub use buffer::{MailboxBuffer, DEFAULT_CAPACITY};
pub use element::Element;
pub use queue::{Fetched, Mailbox};
