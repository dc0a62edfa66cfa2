//! Handler chain result type.

use super::reply::OutboundReply;

/// Handler result for the chain. `Reply` carries the outbound reply so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply is sent.
    Stop,
    /// Stop the chain and send this reply.
    Reply(OutboundReply),
}
