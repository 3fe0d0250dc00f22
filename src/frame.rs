use crate::defs::{MAX_PAYLOAD, MSG_TYPE_MASK, SUBSYSTEM_MASK};
use crate::{MsgType, SubSystem};

/// A payload too large for the fixed data area of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PayloadOverflow;

/// Fixed-layout message exchanged with the network processor.
///
/// This is the common struct every NPI subsystem speaks: a payload length,
/// a combined message-type/subsystem byte, a command id, and the payload
/// bytes themselves. `len` counts payload bytes only. Multi-byte integers
/// inside the payload are little-endian at fixed offsets.
#[derive(Clone, Copy)]
pub struct Frame {
  pub(crate) len: u8,
  pub(crate) sub_sys: u8,
  pub(crate) cmd_id: u8,
  pub(crate) data: [u8; MAX_PAYLOAD],
}

impl Frame {
  /// Build a frame with an explicit message type.
  pub fn new(msg_type: MsgType, sub_system: SubSystem, cmd_id: u8, payload: &[u8]) -> Result<Self, PayloadOverflow> {
    Self::from_wire(msg_type.bits() | sub_system.id(), cmd_id, payload)
  }

  /// Reassemble a frame from raw wire fields, the way an IPC receive path
  /// does after de-framing.
  pub fn from_wire(sub_sys: u8, cmd_id: u8, payload: &[u8]) -> Result<Self, PayloadOverflow> {
    if payload.len() > MAX_PAYLOAD {
      return Err(PayloadOverflow);
    }
    let mut data = [0u8; MAX_PAYLOAD];
    data[..payload.len()].copy_from_slice(payload);
    Ok(Self { len: payload.len() as u8, sub_sys, cmd_id, data })
  }

  /// Build an asynchronous request. AREQs are fire-and-forget: the NP never
  /// answers them on this channel.
  pub fn areq(sub_system: SubSystem, cmd_id: u8, payload: &[u8]) -> Result<Self, PayloadOverflow> {
    Self::new(MsgType::Areq, sub_system, cmd_id, payload)
  }

  pub const fn len(&self) -> u8 {
    self.len
  }

  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// The payload bytes, `len` of them.
  pub fn payload(&self) -> &[u8] {
    &self.data[..self.len as usize]
  }

  pub const fn cmd_id(&self) -> u8 {
    self.cmd_id
  }

  /// The raw combined message-type/subsystem byte as it travels on the wire.
  pub const fn sub_sys_byte(&self) -> u8 {
    self.sub_sys
  }

  pub const fn msg_type(&self) -> MsgType {
    MsgType::from_sub_sys(self.sub_sys & MSG_TYPE_MASK)
  }

  pub const fn sub_system(&self) -> SubSystem {
    SubSystem::from_sub_sys(self.sub_sys & SUBSYSTEM_MASK)
  }
}

impl PartialEq for Frame {
  fn eq(&self, other: &Self) -> bool {
    self.sub_sys == other.sub_sys && self.cmd_id == other.cmd_id && self.payload() == other.payload()
  }
}

impl Eq for Frame {}

impl core::fmt::Debug for Frame {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Frame")
      .field("msg_type", &self.msg_type())
      .field("sub_system", &self.sub_system())
      .field("cmd_id", &self.cmd_id)
      .field("payload", &self.payload())
      .finish()
  }
}
