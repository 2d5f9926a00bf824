//! Domain events module.
//!
//! Change notifications emitted after every state change: the input
//! controller reports recomputed conversion results, the FX service reports
//! applied rate refreshes. Hosts implement [`DomainEventSink`] to redraw or
//! persist in response.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
