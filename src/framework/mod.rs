//! Stage runtime of the autozoning pipeline.
//!
//! Stages are composed into a [`Pipeline`] and exchange typed values through a
//! [`Bus`], over a read-only [`AutozoneContext`].

pub mod bus;
pub mod context;
pub mod pipeline;
pub mod stage;

pub use bus::Bus;
pub use context::AutozoneContext;
pub use pipeline::Pipeline;
pub use stage::Stage;
