use crate::defs::{sub_cmd, CMD_CAPSENSE};
use crate::{Frame, SubSystem};

mod button;
mod stats;

pub use button::*;
pub use stats::*;

/// Failure decoding a CapSense indication frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
  /// The frame matched a known indication but its payload is shorter than
  /// that indication's fixed layout.
  Truncated,
}

/// Asynchronous notification pushed by the CapSense module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indication {
  /// One or more buttons changed to pressed.
  ButtonPressed(ButtonMap),
  /// Diagnostic counters for one key, 16-bit range.
  KeyStats(KeyStats),
  /// Diagnostic counters for one key, 32-bit range.
  KeyStats32(KeyStats32),
}

impl Indication {
  /// Decode a frame received from the network processor.
  ///
  /// Frames addressed to another subsystem or command id yield `Ok(None)`,
  /// as do CapSense frames with a sub-command this client does not know.
  /// Message-type bits are ignored on receive; only the subsystem id is
  /// matched.
  pub fn from_frame(frame: &Frame) -> Result<Option<Self>, DecodeError> {
    if frame.sub_system() != SubSystem::Peripherals || frame.cmd_id() != CMD_CAPSENSE {
      return Ok(None);
    }
    let payload = frame.payload();
    let Some(&sub) = payload.first() else {
      return Err(DecodeError::Truncated);
    };
    match sub {
      sub_cmd::BUTTON_IND => Ok(Some(Self::ButtonPressed(ButtonMap::from_payload(payload)?))),
      sub_cmd::BUTTON_STATS => Ok(Some(Self::KeyStats(KeyStats::from_payload(payload)?))),
      sub_cmd::BUTTON_STATS_32 => Ok(Some(Self::KeyStats32(KeyStats32::from_payload(payload)?))),
      other => {
        log::debug!("ignoring capsense sub-command {:#04x}", other);
        Ok(None)
      }
    }
  }
}

/// Application callbacks for CapSense indications.
///
/// Every method has a no-op default, so a handler only implements the
/// notifications it cares about.
pub trait Handler {
  fn button_pressed(&mut self, buttons: ButtonMap) {
    let _ = buttons;
  }

  fn key_stats(&mut self, stats: KeyStats) {
    let _ = stats;
  }

  fn key_stats32(&mut self, stats: KeyStats32) {
    let _ = stats;
  }
}

/// Route one received frame to the matching [`Handler`] callback.
///
/// Returns `Ok(true)` when the frame carried a CapSense indication and a
/// callback ran, `Ok(false)` when the frame was not for this client.
pub fn dispatch<H: Handler>(frame: &Frame, handler: &mut H) -> Result<bool, DecodeError> {
  match Indication::from_frame(frame)? {
    Some(Indication::ButtonPressed(buttons)) => handler.button_pressed(buttons),
    Some(Indication::KeyStats(stats)) => handler.key_stats(stats),
    Some(Indication::KeyStats32(stats)) => handler.key_stats32(stats),
    None => return Ok(false),
  }
  Ok(true)
}
