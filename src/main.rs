//! HID Report Descriptor Compiler Utility
//!
//! Simple command line utility that compiles descriptor source files and prints or stores the
//! resulting byte stream.
//!
//! Demonstrates the usage of the [`hidcompiler`] crate.
//!
//! # Usage
//!
//! `hidcompile --path .\samples\boot_mouse.hid`
//!
//! or
//!
//! `cargo run -- --path .\samples\boot_mouse.hid --format json --param reportId=3`
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use std::{fs, io::Write, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use hidcompiler::{compile, BufferWriter, ByteWriter, CompileError, Param, ParamSource, SizeWriter};
use serde::Serialize;

#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
  /// Space separated hex bytes.
  Hex,
  /// C array initializer.
  CArray,
  /// Raw descriptor bytes.
  Binary,
  /// JSON object with size and bytes.
  Json,
}

/// Arguments
#[derive(Parser, Debug)]
struct Arguments {
  /// The path of the descriptor source file.
  #[arg(short, long)]
  path: PathBuf,

  /// Output format.
  #[arg(short, long, value_enum, default_value_t = Format::Hex)]
  format: Format,

  /// Write the output to this file instead of standard output.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Source parameter as name=value; may be repeated, the last definition wins.
  #[arg(long = "param")]
  params: Vec<String>,
}

#[derive(Serialize, Debug)]
struct CompiledDescriptor {
  size: usize,
  bytes: Vec<u8>,
}

#[derive(Serialize, Debug)]
struct Diagnostic {
  character: usize,
  line: usize,
  column: usize,
  message: &'static str,
}

impl From<CompileError> for Diagnostic {
  fn from(error: CompileError) -> Self {
    Diagnostic {
      character: error.character,
      line: error.line,
      column: error.column,
      message: error.kind.message(),
    }
  }
}

// Splits a name=value pair; values accept decimal and 0x hex with an optional sign.
fn parse_param(definition: &str) -> Result<(&str, i64), String> {
  let Some((name, value)) = definition.split_once('=') else {
    return Err(format!("parameter {definition:?} is missing '='"));
  };
  let (digits, negative) = match value.strip_prefix('-') {
    Some(rest) => (rest, true),
    None => (value, false),
  };
  let parsed = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
    Some(hex) => i64::from_str_radix(hex, 16),
    None => digits.parse::<i64>(),
  };
  match parsed {
    Ok(parsed) => Ok((name, if negative { -parsed } else { parsed })),
    Err(error) => Err(format!("parameter {definition:?} has an invalid value: {error}")),
  }
}

fn write_output(output: &Option<PathBuf>, data: &[u8]) {
  match output {
    Some(path) => fs::write(path, data).expect("Failed to write output file"),
    None => std::io::stdout().write_all(data).expect("Failed to write output"),
  }
}

fn main() -> ExitCode {
  let args = Arguments::parse();

  let source_text = fs::read_to_string(&args.path).expect("Failed to read descriptor source");

  let mut definitions = Vec::new();
  for definition in &args.params {
    match parse_param(definition) {
      Ok(definition) => definitions.push(definition),
      Err(message) => {
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
      }
    }
  }
  let params: Vec<Param> =
    definitions.iter().map(|&(name, value)| Param::new(name, value)).collect();
  let source = ParamSource::new(&source_text, &params);

  let mut size = SizeWriter::new();
  if let Err(error) = compile(&source, &mut size) {
    if args.format == Format::Json {
      let diagnostic = Diagnostic::from(error);
      println!("{}", serde_json::to_string_pretty(&diagnostic).expect("Failed to encode error"));
    } else {
      eprintln!("{}: {error}", args.path.display());
    }
    return ExitCode::FAILURE;
  }

  let mut bytes = vec![0u8; size.position()];
  let mut out = BufferWriter::new(&mut bytes);
  compile(&source, &mut out).expect("Compile differed between size and buffer pass");

  match args.format {
    Format::Hex => {
      let hex: Vec<String> = bytes.iter().map(|byte| format!("{byte:02X}")).collect();
      let mut text = String::new();
      for line in hex.chunks(16) {
        text.push_str(&line.join(" "));
        text.push('\n');
      }
      write_output(&args.output, text.as_bytes());
    }
    Format::CArray => {
      let mut text = String::from("{\n");
      for line in bytes.chunks(12) {
        let row: Vec<String> = line.iter().map(|byte| format!("0x{byte:02X}")).collect();
        text.push_str("  ");
        text.push_str(&row.join(", "));
        text.push_str(",\n");
      }
      text.push_str("}\n");
      write_output(&args.output, text.as_bytes());
    }
    Format::Binary => {
      write_output(&args.output, &bytes);
    }
    Format::Json => {
      let compiled = CompiledDescriptor { size: bytes.len(), bytes };
      let mut text = serde_json::to_string_pretty(&compiled).expect("Failed to encode descriptor");
      text.push('\n');
      write_output(&args.output, text.as_bytes());
    }
  }
  ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
  use super::parse_param;

  #[test]
  fn parse_param_should_accept_decimal_and_hex() {
    assert_eq!(parse_param("maxLedId=5"), Ok(("maxLedId", 5)));
    assert_eq!(parse_param("offset=-12"), Ok(("offset", -12)));
    assert_eq!(parse_param("mask=0xFF"), Ok(("mask", 255)));
    assert_eq!(parse_param("mask=-0x10"), Ok(("mask", -16)));
    assert!(parse_param("novalue").is_err());
    assert!(parse_param("bad=12z").is_err());
  }
}
