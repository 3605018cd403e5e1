//! Push-based transform adapter
//!
//! The seam between the exposure operations and a host pipeline that
//! pushes one object at a time. The adapter is deliberately thin: options
//! are captured at construction, each incoming value is transformed to
//! completion before the next is accepted, and no other state is held.

use crate::expose::Exposed;
use crate::inspect::inspect;
use crate::options::Options;
use crate::ExposeResult;
use protolens_core::Value;

/// A single-item-in, single-item-out synchronous transform step.
///
/// Hosts drive it strictly sequentially: `transform` runs to completion
/// for each pushed item before the next one is offered.
pub trait Transform {
    /// Incoming item type
    type Input;
    /// Outgoing item type
    type Output;

    /// Transform one item
    fn transform(&mut self, input: Self::Input) -> ExposeResult<Self::Output>;
}

/// Transform step that applies the configured exposure method to each
/// incoming value and forwards the result downstream.
#[derive(Debug, Clone)]
pub struct ExposeStream {
    options: Options,
}

impl ExposeStream {
    /// Create an adapter with its options fixed for its lifetime
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options this adapter was built with
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Transform for ExposeStream {
    type Input = Value;
    type Output = Exposed;

    fn transform(&mut self, input: Value) -> ExposeResult<Exposed> {
        let exposed = self.options.method.apply(&input, &self.options)?;
        if self.options.verbose {
            log::info!("{}", inspect(&exposed, self.options.custom_inspect));
        }
        Ok(exposed)
    }
}

/// Build a stream adapter — `expose::stream(options)` spelling
pub fn stream(options: Options) -> ExposeStream {
    ExposeStream::new(options)
}
