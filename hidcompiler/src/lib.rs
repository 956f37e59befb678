//! HID Report Descriptor Compiler
//!
//! This crate compiles a human readable description of a USB HID report descriptor into the
//! bit-exact short item byte stream defined by the USB Device Class Definition for Human
//! Interface Devices (HID) Version 1.11, sections 5.8 and 6.2.2
//! <https://www.usb.org/sites/default/files/hid1_11.pdf>.
//!
//! The source language carries named usage pages, named usage ids, named item arguments, unit
//! descriptions, numeric and hex literals and `{name}` parameter references, with `#` or `;`
//! line comments. The compiler is a single forward pass with stack resident state only: it
//! performs no heap allocation and is usable from firmware and other `no_std` environments.
//!
//! ## Example
//! ```
//! # use hidcompiler::{compile, compiled_size, BufferWriter};
//! static BOOT_MOUSE_SOURCE: &str = "
//!   UsagePage(GenericDesktop)
//!   Usage(Mouse)
//!   Collection(Application)
//!     Usage(Pointer)
//!     Collection(Physical)
//!       UsagePage(Button)
//!       UsageMinimum(Button1)
//!       UsageMaximum(Button3)
//!       LogicalMinimum(0)
//!       LogicalMaximum(1)
//!       ReportCount(3)
//!       ReportSize(1)
//!       Input(Data, Var, Abs)   # button states
//!       ReportCount(1)
//!       ReportSize(5)
//!       Input(Cnst)             # padding
//!       UsagePage(GenericDesktop)
//!       Usage(X)
//!       Usage(Y)
//!       LogicalMinimum(-127)
//!       LogicalMaximum(127)
//!       ReportSize(8)
//!       ReportCount(2)
//!       Input(Data, Var, Rel)
//!     EndCollection
//!   EndCollection
//! ";
//!
//! let mut buffer = [0u8; 64];
//! let mut out = BufferWriter::new(&mut buffer);
//! compile(BOOT_MOUSE_SOURCE, &mut out).unwrap();
//!
//! assert_eq!(compiled_size(BOOT_MOUSE_SOURCE), 50);
//! assert_eq!(
//!   out.written(),
//!   &[
//!     0x05, 0x01, // USAGE_PAGE (Generic Desktop)
//!     0x09, 0x02, // USAGE (Mouse)
//!     0xA1, 0x01, // COLLECTION (Application)
//!     0x09, 0x01, //   USAGE (Pointer)
//!     0xA1, 0x00, //   COLLECTION (Physical)
//!     0x05, 0x09, //     USAGE_PAGE (Button)
//!     0x19, 0x01, //     USAGE_MINIMUM (Button 1)
//!     0x29, 0x03, //     USAGE_MAXIMUM (Button 3)
//!     0x15, 0x00, //     LOGICAL_MINIMUM (0)
//!     0x25, 0x01, //     LOGICAL_MAXIMUM (1)
//!     0x95, 0x03, //     REPORT_COUNT (3)
//!     0x75, 0x01, //     REPORT_SIZE (1)
//!     0x81, 0x02, //     INPUT (Data,Var,Abs)
//!     0x95, 0x01, //     REPORT_COUNT (1)
//!     0x75, 0x05, //     REPORT_SIZE (5)
//!     0x81, 0x01, //     INPUT (Cnst)
//!     0x05, 0x01, //     USAGE_PAGE (Generic Desktop)
//!     0x09, 0x30, //     USAGE (X)
//!     0x09, 0x31, //     USAGE (Y)
//!     0x15, 0x81, //     LOGICAL_MINIMUM (-127)
//!     0x25, 0x7F, //     LOGICAL_MAXIMUM (127)
//!     0x75, 0x08, //     REPORT_SIZE (8)
//!     0x95, 0x02, //     REPORT_COUNT (2)
//!     0x81, 0x06, //     INPUT (Data,Var,Rel)
//!     0xC0, //   END_COLLECTION
//!     0xC0, // END_COLLECTION
//!   ]
//! );
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

#![no_std]
mod descriptor_compiler;
mod encoding_tables;
pub mod error;
pub mod source;
mod utils;
pub mod writer;

use descriptor_compiler::DescriptorCompiler;
pub use error::{CompileError, ErrorKind};
pub use source::{Param, ParamSource, Source};
pub use writer::{BufferWriter, ByteWriter, CallbackWriter, NullWriter, SizeWriter};

/// Compiles the given descriptor source, writing the descriptor bytes to the given sink.
///
/// Bytes are written in strict descriptor order and the sink observes a prefix of the full
/// output on any error path. All errors are terminal; the returned [`CompileError`] carries the
/// UTF-8 aware character offset, line and column of the failure.
pub fn compile<S, W>(source: &S, out: &mut W) -> Result<(), CompileError>
where
  S: Source + ?Sized,
  W: ByteWriter + ?Sized,
{
  DescriptorCompiler::compile(source, out)
}

/// Returns the byte size of the compiled descriptor, or 0 if the source does not compile.
///
/// This runs the same state machine as [`compile`] against a size counting sink; any source
/// that compiles successfully produces exactly this many bytes.
pub fn compiled_size<S: Source + ?Sized>(source: &S) -> usize {
  let mut out = SizeWriter::new();
  match compile(source, &mut out) {
    Ok(()) => out.position(),
    Err(_) => 0,
  }
}

/// Compiles the given descriptor source without producing output and returns the final error
/// state, with kind [`ErrorKind::None`] on success.
pub fn compile_error<S: Source + ?Sized>(source: &S) -> CompileError {
  let mut out = NullWriter::new();
  match compile(source, &mut out) {
    Ok(()) => CompileError::default(),
    Err(error) => error,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::{compile, compile_error, compiled_size, BufferWriter, ErrorKind, Param, ParamSource};
  use crate::writer::ByteWriter;

  // Joystick example based on HID 1.11 appendix D.1, extended with top level literals and a
  // parameter reference.
  static JOYSTICK_SOURCE: &str = "0xFF
254 819 189 481 0x1242 {arg1}
UsagePage(GenericDesktop)
Usage(Joystick)
Collection(Application)
\tUsagePage(GenericDesktop)
\tUsage(Pointer)
\tCollection(Physical)
\t\tLogicalMinimum(-127)
\t\tLogicalMaximum(127)
\t\tReportSize(8)
\t\tReportCount(2)
\t\tPush
\t\tUsage(X)
\t\tUsage(Y)
\t\tInput(Data, Var, Abs)
\t\tUsage(HatSwitch)
\t\tLogicalMinimum(0)
\t\tLogicalMaximum(3)
\t\tPhysicalMinimum(0)
\t\tPhysicalMaximum(270)
\t\tUnit(EngRot(Length)) # Degrees
\t\tReportCount(1)
\t\tReportSize(4)
\t\tInput(Data, Var, Abs, Null)
\t\tLogicalMinimum(0)
\t\tLogicalMaximum(1)
\t\tReportCount(2)
\t\tReportSize(1)
\t\tUsagePage(Button)
\t\tUsageMinimum(Button1)
\t\tUsageMaximum(Button2)
\t\tUnit(None())
\t\tInput(Data, Var, Abs)
\tEndCollection
\tUsageMinimum(Button3)
\tUsageMinimum(Button4)
\tInput(Data, Var, Abs)
\t# use LogicalMinimum/LogicalMaximum from before Push
\tPop
\tUsagePage(SimulationControls)
\tUsage(Throttle)
\tReportCount({arg1})
\tReportSize(1)
\tInput(Data, Var, Abs)
EndCollection
0xFF
";

  static JOYSTICK_BYTES: &[u8] = &[
    0xFF, 0xFE, 0x33, 0x03, 0xBD, 0xE1, 0x01, 0x42, 0x12, 0x01, 0x05, 0x01, 0x09, 0x04, 0xA1,
    0x01, 0x05, 0x01, 0x09, 0x01, 0xA1, 0x00, 0x15, 0x81, 0x25, 0x7F, 0x75, 0x08, 0x95, 0x02,
    0xA4, 0x09, 0x30, 0x09, 0x31, 0x81, 0x02, 0x09, 0x39, 0x15, 0x00, 0x25, 0x03, 0x35, 0x00,
    0x46, 0x0E, 0x01, 0x65, 0x14, 0x95, 0x01, 0x75, 0x04, 0x81, 0x42, 0x15, 0x00, 0x25, 0x01,
    0x95, 0x02, 0x75, 0x01, 0x05, 0x09, 0x19, 0x01, 0x29, 0x02, 0x65, 0x00, 0x81, 0x02, 0xC0,
    0x19, 0x03, 0x19, 0x04, 0x81, 0x02, 0xB4, 0x05, 0x02, 0x09, 0xBB, 0x95, 0x01, 0x75, 0x01,
    0x81, 0x02, 0xC0, 0xFF,
  ];

  fn joystick_source() -> ParamSource<'static> {
    static PARAMS: &[Param] = &[Param::new("arg1", 1)];
    ParamSource::new(JOYSTICK_SOURCE, PARAMS)
  }

  #[test]
  fn joystick_descriptor_should_match_the_reference_stream() {
    let source = joystick_source();
    let mut buffer = [0u8; 256];
    let mut out = BufferWriter::new(&mut buffer);
    compile(&source, &mut out).unwrap();
    assert_eq!(out.written(), JOYSTICK_BYTES);
  }

  #[test]
  fn the_three_operations_should_agree() {
    let source = joystick_source();
    let mut buffer = [0u8; 256];
    let mut out = BufferWriter::new(&mut buffer);
    compile(&source, &mut out).unwrap();

    assert_eq!(compiled_size(&source), out.position());
    assert_eq!(compile_error(&source).kind, ErrorKind::None);

    assert_eq!(compiled_size("Usage(Pointer)"), 0);
    let error = compile_error("Usage(Pointer)");
    assert_eq!(error.kind, ErrorKind::MissingUsagePage);
    assert_eq!(error.character, 13);
  }

  #[test]
  fn a_bounded_sink_should_observe_an_exact_prefix() {
    let source = joystick_source();
    let size = compiled_size(&source);
    let mut full = [0u8; 256];
    let mut out = BufferWriter::new(&mut full);
    compile(&source, &mut out).unwrap();
    let full: Vec<u8> = out.written().to_vec();

    // a sink large enough for only half the output still sees identical leading bytes
    let mut half = std::vec![0u8; size / 2];
    let mut out = BufferWriter::new(&mut half);
    compile(&source, &mut out).unwrap();
    assert_eq!(out.position(), size / 2);
    assert_eq!(out.written(), &full[..size / 2]);
  }

  #[test]
  fn parameters_should_substitute_into_usage_ranges() {
    let params = [Param::new("maxLedId", 5)];
    let source = ParamSource::new("UsagePage(Led)\nUsageMinimum(1)\nUsageMaximum({maxLedId})", &params);
    let mut buffer = [0u8; 8];
    let mut out = BufferWriter::new(&mut buffer);
    compile(&source, &mut out).unwrap();
    assert_eq!(out.written(), [0x05, 0x08, 0x19, 0x01, 0x29, 0x05]);
  }

  #[test]
  fn error_positions_should_mark_the_first_failing_code_point() {
    // recompiling the prefix up to the reported character succeeds
    let source = "UsagePage(GenericDesktop) Usage(Mouse) $";
    let error = compile_error(source);
    assert_eq!(error.kind, ErrorKind::UnexpectedToken);
    assert_eq!(error.character, 39);
    assert_eq!(compile_error(&source[..39]).kind, ErrorKind::None);
  }

  #[test]
  fn callback_sinks_should_receive_the_stream() {
    let mut seen = Vec::new();
    let mut out = super::CallbackWriter::new(|byte| seen.push(byte));
    compile("UsagePage(GenericDesktop) Usage(Mouse)", &mut out).unwrap();
    assert_eq!(out.position(), 4);
    drop(out);
    assert_eq!(seen, [0x05, 0x01, 0x09, 0x02]);
  }
}
