use super::DecodeError;

/// Diagnostic counters for one key, pushed while stats reporting is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStats {
  /// Index of the key the counters describe.
  pub key: u8,
  /// Latest measured count for the key.
  pub count: u16,
  /// Long-term average the measurement is compared against.
  pub baseline: u16,
  /// Detection threshold currently applied to the key.
  pub threshold: u16,
}

impl KeyStats {
  /// Measured count relative to the baseline.
  pub const fn delta(&self) -> i32 {
    self.count as i32 - self.baseline as i32
  }

  // Payload layout: [sub_cmd, key, count u16, baseline u16, threshold u16]
  pub(crate) fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
    if payload.len() < 8 {
      return Err(DecodeError::Truncated);
    }
    Ok(Self {
      key: payload[1],
      count: u16::from_le_bytes([payload[2], payload[3]]),
      baseline: u16::from_le_bytes([payload[4], payload[5]]),
      threshold: u16::from_le_bytes([payload[6], payload[7]]),
    })
  }
}

/// Like [`KeyStats`], with the counters widened to 32 bits for sensors that
/// accumulate past the 16-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStats32 {
  pub key: u8,
  pub count: i32,
  pub baseline: i32,
  pub threshold: i32,
}

impl KeyStats32 {
  /// Measured count relative to the baseline.
  pub const fn delta(&self) -> i64 {
    self.count as i64 - self.baseline as i64
  }

  // Payload layout: [sub_cmd, key, count i32, baseline i32, threshold i32]
  pub(crate) fn from_payload(payload: &[u8]) -> Result<Self, DecodeError> {
    if payload.len() < 14 {
      return Err(DecodeError::Truncated);
    }
    Ok(Self {
      key: payload[1],
      count: i32::from_le_bytes([payload[2], payload[3], payload[4], payload[5]]),
      baseline: i32::from_le_bytes([payload[6], payload[7], payload[8], payload[9]]),
      threshold: i32::from_le_bytes([payload[10], payload[11], payload[12], payload[13]]),
    })
  }
}
