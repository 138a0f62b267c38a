pub mod emitter;
pub mod errors;
pub mod interval;
pub mod signal;

pub use emitter::Emitter;
pub use emitter::SignalSink;
pub use errors::IntervalError;
pub use errors::SinkError;
pub use interval::IntervalStore;
pub use signal::ASSETS;
pub use signal::Direction;
pub use signal::Signal;

/// Default emission period in seconds when none is configured.
pub const DEFAULT_INTERVAL_SECS: i64 = 300;
