use async_trait::async_trait;

use spop_core::{Action, Message};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// User code that turns one SPOP message into zero or more variable actions.
///
/// A handler that returns `Err` only fails the message that raised it: the
/// connection stays open, the actions already gathered from earlier messages
/// in the same NOTIFY are kept, and the ACK is sent without the failed
/// message's contribution.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn process(&self, message: &Message) -> Result<Vec<Action>, HandlerError>;
}
