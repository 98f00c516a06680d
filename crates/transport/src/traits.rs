//! Transport traits

use async_trait::async_trait;

use crate::{InboundEvent, Outbound};

/// Turns one inbound event into the replies to send
///
/// Implementations never fail: every error is mapped to a user-facing reply
/// (or to no reply) before it reaches the transport.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: InboundEvent) -> Vec<Outbound>;
}
