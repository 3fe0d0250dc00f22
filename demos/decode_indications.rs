//! Inbound example: decode indication frames the way an NPI receive callback
//! would, routing them to a [`Handler`].
use npi_capsense::{dispatch, ButtonMap, Frame, Handler, KeyStats, MsgType, SubSystem};

struct Printer;

impl Handler for Printer {
  fn button_pressed(&mut self, buttons: ButtonMap) {
    println!("buttons pressed: {:?}", buttons);
  }

  fn key_stats(&mut self, stats: KeyStats) {
    println!(
      "key {} count={} baseline={} threshold={} (delta {})",
      stats.key,
      stats.count,
      stats.baseline,
      stats.threshold,
      stats.delta()
    );
  }
}

fn main() {
  let mut handler = Printer;

  // What the NP would push: two buttons down, then stats for key 2.
  let frames = [
    Frame::areq(SubSystem::Peripherals, 0x04, &[0x01, 0x09, 0x00]).unwrap(),
    Frame::areq(SubSystem::Peripherals, 0x04, &[0x02, 2, 0x10, 0x27, 0xE8, 0x26, 0x32, 0x00]).unwrap(),
    // A frame for some other subsystem; dispatch leaves it alone.
    Frame::new(MsgType::Areq, SubSystem::Other(0x09), 0x00, &[0xFF]).unwrap(),
  ];

  for frame in &frames {
    match dispatch(frame, &mut handler) {
      Ok(true) => {}
      Ok(false) => println!("not a capsense frame: {:?}", frame),
      Err(err) => println!("malformed capsense frame: {:?}", err),
    }
  }
}
