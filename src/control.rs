use crate::defs::{sub_cmd, CMD_CAPSENSE, MAX_PAYLOAD};
use crate::{CapSense, Error, Frame, SubSystem, Transport};

impl<T: Transport> CapSense<T> {
  /// Turn periodic per-key statistics reporting on or off.
  ///
  /// While enabled the sensor pushes [`KeyStats`](crate::KeyStats) (or the
  /// 32-bit variant) indications alongside button events.
  pub async fn set_stats_reporting(&mut self, on: bool) -> Result<(), Error<T::Error>> {
    let frame = Frame::areq(SubSystem::Peripherals, CMD_CAPSENSE, &[sub_cmd::STATS_CONTROL, on as u8])?;
    self.send(frame).await
  }

  /// Replace the per-key touch detection thresholds.
  ///
  /// One byte per key, in key order. The table travels length-prefixed in a
  /// single frame, so it is capped at `MAX_PAYLOAD - 2` entries.
  pub async fn set_touch_thresholds(&mut self, thresholds: &[u8]) -> Result<(), Error<T::Error>> {
    self.send_table(sub_cmd::SET_THRESHOLDS, thresholds).await
  }

  /// Replace the per-key stuck-key detection thresholds.
  ///
  /// For each key, the number of consecutive samples to count above the
  /// stats threshold before the key is suspected stuck.
  pub async fn set_stuck_key_thresholds(&mut self, thresholds: &[u8]) -> Result<(), Error<T::Error>> {
    self.send_table(sub_cmd::SET_STUCK_KEY_DETECTION, thresholds).await
  }

  async fn send_table(&mut self, sub_cmd: u8, table: &[u8]) -> Result<(), Error<T::Error>> {
    let n = table.len();
    if n + 2 > MAX_PAYLOAD {
      return Err(Error::PayloadOverflow);
    }
    let mut payload = [0u8; MAX_PAYLOAD];
    payload[0] = sub_cmd;
    payload[1] = n as u8;
    payload[2..2 + n].copy_from_slice(table);
    let frame = Frame::areq(SubSystem::Peripherals, CMD_CAPSENSE, &payload[..2 + n])?;
    self.send(frame).await
  }

  async fn send(&mut self, frame: Frame) -> Result<(), Error<T::Error>> {
    log::trace!("capsense areq: {:?}", frame);
    self.transport.send_areq(&frame).await.map_err(Error::Transport)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::defs::SYS_PERIPHERALS;
  use embassy_futures::block_on;

  struct Recorder {
    sent: Option<Frame>,
    calls: usize,
  }

  impl Recorder {
    fn new() -> Self {
      Self { sent: None, calls: 0 }
    }
  }

  impl Transport for Recorder {
    type Error = core::convert::Infallible;

    async fn send_areq(&mut self, frame: &Frame) -> Result<(), Self::Error> {
      self.sent = Some(*frame);
      self.calls += 1;
      Ok(())
    }
  }

  struct Refusing;

  impl Transport for Refusing {
    type Error = ();

    async fn send_areq(&mut self, _frame: &Frame) -> Result<(), Self::Error> {
      Err(())
    }
  }

  #[test]
  fn stats_control_frame_layout() {
    let mut capsense = CapSense::new(Recorder::new());
    block_on(capsense.set_stats_reporting(true)).expect("send");

    let recorder = capsense.into_inner();
    let frame = recorder.sent.expect("one frame sent");
    assert_eq!(frame.sub_sys_byte(), 0x40 | SYS_PERIPHERALS);
    assert_eq!(frame.cmd_id(), CMD_CAPSENSE);
    assert_eq!(frame.payload(), &[sub_cmd::STATS_CONTROL, 0x01]);
  }

  #[test]
  fn stats_control_off_sends_zero() {
    let mut capsense = CapSense::new(Recorder::new());
    block_on(capsense.set_stats_reporting(false)).expect("send");
    let frame = capsense.into_inner().sent.unwrap();
    assert_eq!(frame.payload(), &[sub_cmd::STATS_CONTROL, 0x00]);
  }

  #[test]
  fn threshold_table_is_length_prefixed() {
    let mut capsense = CapSense::new(Recorder::new());
    block_on(capsense.set_touch_thresholds(&[40, 41, 42])).expect("send");

    let frame = capsense.into_inner().sent.unwrap();
    assert_eq!(frame.cmd_id(), CMD_CAPSENSE);
    assert_eq!(frame.payload(), &[sub_cmd::SET_THRESHOLDS, 3, 40, 41, 42]);
  }

  #[test]
  fn stuck_key_table_uses_its_own_sub_command() {
    let mut capsense = CapSense::new(Recorder::new());
    block_on(capsense.set_stuck_key_thresholds(&[5, 5])).expect("send");

    let frame = capsense.into_inner().sent.unwrap();
    assert_eq!(frame.payload(), &[sub_cmd::SET_STUCK_KEY_DETECTION, 2, 5, 5]);
  }

  #[test]
  fn empty_table_still_goes_out() {
    let mut capsense = CapSense::new(Recorder::new());
    block_on(capsense.set_touch_thresholds(&[])).expect("send");

    let recorder = capsense.into_inner();
    assert_eq!(recorder.calls, 1);
    assert_eq!(recorder.sent.unwrap().payload(), &[sub_cmd::SET_THRESHOLDS, 0]);
  }

  #[test]
  fn oversized_table_is_rejected_before_sending() {
    let mut capsense = CapSense::new(Recorder::new());
    let table = [1u8; MAX_PAYLOAD - 1];
    let err = block_on(capsense.set_touch_thresholds(&table)).unwrap_err();
    assert_eq!(err, Error::PayloadOverflow);
    assert_eq!(capsense.into_inner().calls, 0);
  }

  #[test]
  fn largest_table_that_fits_goes_out() {
    let mut capsense = CapSense::new(Recorder::new());
    let table = [7u8; MAX_PAYLOAD - 2];
    block_on(capsense.set_touch_thresholds(&table)).expect("send");

    let frame = capsense.into_inner().sent.unwrap();
    assert_eq!(frame.len() as usize, MAX_PAYLOAD);
    assert_eq!(frame.payload()[1], (MAX_PAYLOAD - 2) as u8);
  }

  #[test]
  fn transport_errors_are_surfaced() {
    let mut capsense = CapSense::new(Refusing);
    let err = block_on(capsense.set_stats_reporting(true)).unwrap_err();
    assert_eq!(err, Error::Transport(()));
  }
}
