//! Rate provider abstractions and implementations.
//!
//! - The `RateProvider` trait every rate source implements
//! - `StaticRateProvider`, an in-memory source for tests and offline use
//!
//! Providers always return rates relative to the base code they were asked
//! for. The engine asks for its pivot currency and nothing else.

mod static_provider;
mod traits;

pub use static_provider::StaticRateProvider;
pub use traits::RateProvider;
