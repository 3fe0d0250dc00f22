use crate::Frame;

/// Send seam of the underlying NPI IPC client.
///
/// The crate never opens or manages a connection; whatever can move a
/// [`Frame`] to the network processor — a UART bridge, a socket to an NPI
/// server daemon, an in-process queue — implements this trait and is handed
/// to [`CapSense::new`](crate::CapSense::new).
#[allow(async_fn_in_trait)]
pub trait Transport {
  /// Error surfaced by the underlying IPC client.
  type Error;

  /// Queue one asynchronous request for delivery to the network processor.
  ///
  /// Resolves once the frame is handed off to the transport, not when the
  /// peripheral has acted on it; an AREQ has no response to wait for.
  async fn send_areq(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}
