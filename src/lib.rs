//! Read the original recording date from camcorder MPEG transport streams.
//! Does not and will not support demuxing or any kind of video de/encoding.
//!
//! Supported:
//! - AVCHD (`.m2ts`, `.mts`): date, time, UTC offset and DST flag from the
//!   MDPM block in H.264 SEI user data (192 byte BDAV packets).
//! - HDV (`.m2t`): local date and time from the `private_stream_2` PES packets
//!   on PID 2065 (188 byte TS packets).
//!
//! ```rs
//! use m2tsdate::Parser;
//! use std::path::Path;
//!
//! fn main() -> std::io::Result<()> {
//!     let path = Path::new("00001.MTS");
//!     let parser = Parser::from_path(path)?;
//!
//!     match parser.read_file(path)? {
//!         Some(date) => println!("Found date time: {date}"),
//!         None => println!("No date could be found"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod avchd;
pub mod consts;
pub mod errors;
pub mod hdv;
pub mod packet;
pub mod parser;
pub mod reader;
pub mod support;
pub mod timestamp;

pub use avchd::{Avchd, MdpmDateTime};
pub use errors::TsError;
pub use hdv::{Hdv, HdvDateTime};
pub use packet::{Packet, PacketLayout};
pub use parser::{read_date, DateParser, Parser};
pub use reader::{PacketReader, ScanStep};
pub use timestamp::RecordingTime;
