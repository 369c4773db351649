//! Queue pipeline
//!
//! Add-to-queue intents pass a leading-edge throttle, then a two-stage
//! status gate against the remote API. Only intents that clear both gates
//! come out on the confirmed channel.
//!
//! - `throttle`: fixed-window load shedding
//! - `pipeline`: intake task and per-intent confirmation chain

mod pipeline;
mod throttle;

pub use pipeline::{QueueIntent, QueuePipeline, confirm_intent};
pub use throttle::Throttle;
