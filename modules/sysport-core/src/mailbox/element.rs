/// Marker bound for messages a mailbox can carry.
///
/// The mailbox moves messages between tasks without inspecting them, so the
/// only demand is that a message can cross a task boundary and outlive its
/// producer. Ownership follows the handoff: the producer owns the message
/// until `post` succeeds, the consumer owns it from the moment `fetch`
/// returns it. The mailbox is never responsible for what the message points
/// at.
pub trait Element: Send + 'static {}

impl<T> Element for T where T: Send + 'static {}
