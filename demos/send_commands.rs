//! Outbound example: configure the sensor through a stand-in transport that
//! prints every frame instead of crossing to a network processor.
use embassy_futures::block_on;
use npi_capsense::{CapSense, Frame, Transport};

struct HexDump;

impl Transport for HexDump {
  type Error = core::convert::Infallible;

  async fn send_areq(&mut self, frame: &Frame) -> Result<(), Self::Error> {
    print!("areq sub_sys={:#04x} cmd={:#04x} |", frame.sub_sys_byte(), frame.cmd_id());
    for byte in frame.payload() {
      print!(" {:02x}", byte);
    }
    println!();
    Ok(())
  }
}

fn main() {
  let mut capsense = CapSense::new(HexDump);

  block_on(async {
    capsense.set_stats_reporting(true).await?;
    capsense.set_touch_thresholds(&[40, 40, 48, 48, 44, 44]).await?;
    capsense.set_stuck_key_thresholds(&[5, 5, 5, 5, 5, 5]).await?;
    capsense.set_stats_reporting(false).await
  })
  .expect("transport cannot fail");
}
