//! Téléinformation (TIC) frame decoder.
//!
//! Decodes the ASCII "Téléinformation client" stream emitted by French
//! electricity meters into typed frames and readings. The crate covers
//! dialect-aware line decoding only: serial I/O, byte-level tokenization and
//! any publishing integration live in the surrounding application, which
//! reads the dialect's [`TicMode::baud_rate`] hint to configure its
//! transport.
//!
//! Pipeline: tokenized line → [`TicMode`] (value extraction + validation) →
//! [`FrameAssembler`] (boundary detection + accumulation) → [`TicFrame`] →
//! [`ReadingNormalizer`] → [`TicReading`]s.
//!
//! ```
//! use tic_decoder::{mode_for_name, FrameAssembler};
//!
//! let mode = mode_for_name("standard")?;
//! let mut assembler = FrameAssembler::new(mode);
//! assert!(assembler.push_line(&["ADSC", "812345678901", "K"]).is_none());
//! assert!(assembler.push_line(&["SINSTS", "01230", ">"]).is_none());
//! // The second occurrence of the frame-id label closes the frame.
//! let frame = assembler
//!     .push_line(&["ADSC", "812345678901", "K"])
//!     .expect("frame closed");
//! assert_eq!(frame.get("SINSTS").unwrap().raw, "01230");
//! # Ok::<(), tic_decoder::TicError>(())
//! ```

mod assembler;
mod error;
mod registry;
mod sensor;
mod types;

pub mod mode;

pub use assembler::{AssemblerState, FrameAssembler};
pub use error::TicError;
pub use mode::{mode_for_name, HistoricalTicMode, StandardTicMode, TicMode};
pub use registry::{FieldRegistry, FieldRule, LengthRule, ValueSpan};
pub use sensor::{ReadingNormalizer, TicReading};
pub use types::{DeviceClass, FieldValue, StateClass, TicFrame, Unit};
