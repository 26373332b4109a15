//! Time subsystem.
//!
//! `TickTimer` is a fixed-interval gate for simulation steps, polled by the
//! app with the frame timestamp. It takes explicit instants so it can be
//! tested without sleeping.

mod tick;

pub use tick::TickTimer;
