#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Client shim for the CapSense module of a TI-style network processor.
//!
//! The capacitive-touch sensor runs on a network processor (NP) reached over
//! an NPI inter-processor transport. This crate is the host side of the
//! CapSense RPC surface, with helpers for:
//!
//! - Packing the fixed-layout asynchronous request frames that control the
//!   sensor: stats reporting, touch thresholds, stuck-key detection
//! - Decoding the indication frames the sensor pushes back — button presses
//!   and per-key diagnostic counters — into strongly typed events
//! - Routing decoded indications to application callbacks via [`Handler`]
//!
//! The transport itself stays opaque behind the [`Transport`] trait, so the
//! same client works over a UART bridge, a socket to an NPI server daemon,
//! or an in-process queue. Connection management, retries, and timeouts
//! belong to that layer, not here.
//!
//! ```no_run
//! use npi_capsense::{CapSense, Error, Transport};
//!
//! async fn example<T: Transport>(ipc: T) -> Result<(), Error<T::Error>> {
//!   let mut capsense = CapSense::new(ipc);
//!   capsense.set_touch_thresholds(&[40, 40, 48, 48]).await?;
//!   capsense.set_stats_reporting(true).await?;
//!   Ok(())
//! }
//! ```
//!
//! Inbound, feed every frame the transport delivers through
//! [`dispatch`] (or [`Indication::from_frame`]); frames addressed to other
//! subsystems fall through untouched.

mod control;
mod defs;
mod event;
mod frame;
mod transport;

pub use defs::{MsgType, SubSystem, MAX_PAYLOAD};
pub use event::{dispatch, ButtonMap, DecodeError, Handler, Indication, KeyStats, KeyStats32};
pub use frame::{Frame, PayloadOverflow};
pub use transport::Transport;

/// Errors that can occur while issuing CapSense commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// The underlying IPC transport rejected the frame.
  Transport(E),
  /// A command payload larger than one frame can carry.
  PayloadOverflow,
}

impl<E> From<PayloadOverflow> for Error<E> {
  fn from(_: PayloadOverflow) -> Self {
    Self::PayloadOverflow
  }
}

/// Client handle for the CapSense module behind an NPI transport.
///
/// The client owns the transport and offers one method per CapSense command.
/// Create it with [`CapSense::new`]; nothing is sent until a command method
/// is called.
pub struct CapSense<T> {
  transport: T,
}

impl<T> CapSense<T> {
  /// Create a new client on top of the given transport.
  pub fn new(transport: T) -> Self {
    Self { transport }
  }

  /// Consume the client and return the underlying transport.
  pub fn into_inner(self) -> T {
    self.transport
  }
}
