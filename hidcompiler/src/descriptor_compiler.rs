//! Descriptor Compiler Core
//!
//! This module implements the single pass compiler that turns descriptor source text into the
//! short item byte stream described in HID spec 1.11 sections 5.8 and 6.2.2. A hand written
//! tokenizer feeds a mode driven state machine; the semantic layer validates the structural
//! rules (collection and delimiter balance, usage page coupling, report size/count pairing) and
//! emits every payload with its minimum byte width.
//!
//! No output byte is written until the item and its arguments have been fully parsed and
//! validated, so a sink always observes a valid descriptor prefix.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use bitflags::bitflags;

use crate::{
  encoding_tables::{ArgMap, Encoding, ITEMS, REPORT_COUNT_PREFIX, REPORT_SIZE_PREFIX},
  error::{CompileError, ErrorKind},
  source::Source,
  utils::{
    hex_digit_value, is_alpha, is_arg_char, is_comment, is_digit, is_hex_digit, is_item_char,
    is_whitespace,
  },
  writer::ByteWriter,
};

bitflags! {
  // Parser modes. Unit parsing nests inside argument list parsing, so the modes compose as a
  // bitset; the empty set is the top level state between constructs.
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  struct Mode: u32 {
    const COMMENT   = 0x001;
    const ITEM      = 0x002;
    const ARG_LIST  = 0x004;
    const ARG       = 0x008;
    const PARAM     = 0x010;
    const HEX_LIT   = 0x020;
    const NUM_LIT   = 0x040;
    const UNIT_SYS  = 0x080;
    const UNIT_DESC = 0x100;
    const UNIT      = 0x200;
    const UNIT_EXP  = 0x400;
  }
}

/// Borrowed view into the source, bounded by the compile call.
#[derive(Debug, Default, Clone, Copy)]
struct Token {
  start: usize,
  length: usize,
}

impl Token {
  fn at(start: usize, length: usize) -> Self {
    Token { start, length }
  }

  fn bytes<'a>(&self, source: &'a [u8]) -> &'a [u8] {
    &source[self.start..self.start + self.length]
  }
}

/// Returns the number of bytes needed at least to encode the given unsigned value.
pub(crate) fn encoded_size_unsigned(value: u32) -> usize {
  if value > 0xFFFF {
    4
  } else if value > 0xFF {
    2
  } else {
    1
  }
}

/// Returns the number of bytes needed at least to encode the given signed value.
pub(crate) fn encoded_size_signed(value: i32) -> usize {
  // !value equals -value - 1 without overflowing at i32::MIN
  let magnitude = if value < 0 { !value } else { value };
  if magnitude > 0x7FFF {
    4
  } else if magnitude > 0x7F {
    2
  } else {
    1
  }
}

/// Maps an encoded byte size to the size bits of the item prefix (HID 1.11 ch. 6.2.2.2).
fn size_prefix_bits(size: usize) -> u32 {
  match size {
    4 => 3,
    2 => 2,
    1 => 1,
    _ => 0,
  }
}

// Searches the given table for an entry matching the token, case-insensitively. Names ending in
// `#` accept a decimal index suffix without leading zeros; such names span two consecutive
// entries carrying the first and last legal index and are only recognized within the first
// three entries of a table.
fn find_encoding(
  source: &[u8],
  token: Token,
  table: &'static [Encoding],
  not_found: ErrorKind,
) -> Result<Encoding, ErrorKind> {
  if token.length == 0 {
    return Err(not_found);
  }
  let name = token.bytes(source);
  for (index, entry) in table.iter().enumerate() {
    if entry.name.as_bytes().eq_ignore_ascii_case(name) {
      return Ok(*entry);
    }
    if index >= 3 {
      continue;
    }
    let Some(hash) = entry.name.as_bytes().iter().position(|&byte| byte == b'#') else {
      continue;
    };
    let last = match table.get(index + 1) {
      Some(last) if hash + 1 == entry.name.len() && last.name == entry.name => last,
      _ => return Err(ErrorKind::Internal), // malformed index pair
    };
    if name.len() <= hash || !entry.name.as_bytes()[..hash].eq_ignore_ascii_case(&name[..hash]) {
      return Err(ErrorKind::InvalidArgumentName);
    }
    let mut value: u32 = 0;
    for &digit in &name[hash..] {
      if !is_digit(digit) {
        return Err(ErrorKind::UnexpectedArgumentNameChar);
      }
      let previous = value;
      value = value.wrapping_mul(10).wrapping_add((digit - b'0') as u32);
      if previous > value {
        return Err(ErrorKind::ArgumentIndexOutOfRange);
      }
    }
    if value < entry.value || value > last.value {
      return Err(ErrorKind::ArgumentIndexOutOfRange);
    }
    if value != 0 && name[hash] == b'0' {
      return Err(ErrorKind::InvalidArgumentName);
    }
    return Ok(Encoding { name: entry.name, value, usage_types: entry.usage_types, args: ArgMap::None });
  }
  Err(not_found)
}

/// Compiles descriptor source into a byte sink. All state is stack resident and per call; the
/// encoding tables are shared and immutable.
pub(crate) struct DescriptorCompiler<'a, S: Source + ?Sized, W: ByteWriter + ?Sized> {
  source: &'a S,
  bytes: &'a [u8],
  out: &'a mut W,
  mode: Mode,
  col_level: i32,
  delim_level: i32,
  // collection depth at which the last Usage item appeared, -1 before the first one
  usage_at_level: i32,
  report_sizes: usize,
  report_counts: usize,
  item_token: Token,
  arg_token: Token,
  has_usage_page: bool,
  has_arg: bool,
  multi_arg: bool,
  neg_lit: bool,
  refused: bool,
  // current item entry; replaced by the resolved unit system or usage page while their
  // arguments are parsed
  enc_map: Option<Encoding>,
  // active usage page, used for all subsequent Usage items regardless of the hierarchy
  usage_page: Option<Encoding>,
  enc_unit: Option<Encoding>,
  item: u32,
  arg: u32,
  lit: u32,
  n: usize,
}

impl<'a, S: Source + ?Sized, W: ByteWriter + ?Sized> DescriptorCompiler<'a, S, W> {
  pub(crate) fn compile(source: &'a S, out: &'a mut W) -> Result<(), CompileError> {
    DescriptorCompiler {
      bytes: source.data(),
      source,
      out,
      mode: Mode::empty(),
      col_level: 0,
      delim_level: 0,
      usage_at_level: -1,
      report_sizes: 0,
      report_counts: 0,
      item_token: Token::default(),
      arg_token: Token::default(),
      has_usage_page: false,
      has_arg: false,
      multi_arg: false,
      neg_lit: false,
      refused: false,
      enc_map: None,
      usage_page: None,
      enc_unit: None,
      item: 0,
      arg: 0,
      lit: 0,
      n: 0,
    }
    .run()
  }

  fn fail(&self, position: usize, kind: ErrorKind) -> CompileError {
    CompileError::at(self.bytes, position, kind)
  }

  // The entry whose arguments are being parsed. Absent only if the state machine itself is
  // broken, which is reported as an internal error instead of panicking.
  fn enc_map(&self) -> Result<Encoding, CompileError> {
    self.enc_map.ok_or_else(|| self.fail(self.n, ErrorKind::Internal))
  }

  fn enc_unit(&self) -> Result<Encoding, CompileError> {
    self.enc_unit.ok_or_else(|| self.fail(self.n, ErrorKind::Internal))
  }

  fn emit(&mut self, value: u8) {
    // a refused write is fatal for emission, parsing continues unaffected
    if !self.refused && !self.out.write(value) {
      self.refused = true;
    }
  }

  // Writes the given value in little-endian order with the given byte length (HID 1.11 ch. 5.8).
  fn encode_value(&mut self, value: u32, length: usize) {
    self.emit((value & 0xFF) as u8);
    if length > 1 {
      self.emit(((value >> 8) & 0xFF) as u8);
      if length > 2 {
        self.emit(((value >> 16) & 0xFF) as u8);
        self.emit(((value >> 24) & 0xFF) as u8);
      }
    }
  }

  fn encode_unsigned(&mut self, value: u32) {
    self.encode_value(value, encoded_size_unsigned(value));
  }

  fn encode_signed(&mut self, value: i32) {
    match encoded_size_signed(value) {
      4 => self.encode_value(value as u32, 4),
      2 => self.encode_value(value as i16 as u16 as u32, 2),
      _ => self.encode_value(value as i8 as u8 as u32, 1),
    }
  }

  // Consumes a whitespace run and stops on a directly following opening parenthesis, so that
  // `Collection (Application)` parses like `Collection(Application)`.
  fn skip_whitespace_run(&mut self) {
    while self.n + 1 < self.bytes.len() && is_whitespace(self.bytes[self.n + 1]) {
      self.n += 1;
    }
    if self.n + 1 < self.bytes.len() && self.bytes[self.n + 1] == b'(' {
      self.n += 1;
    }
  }

  // Resolves the accumulated item token and applies the structural checks tied to item
  // recognition: a Collection requires a preceding Usage at its depth, an EndCollection
  // requires balanced depth and paired ReportSize/ReportCount items.
  fn resolve_item(&mut self, track_usage: bool) -> Result<Encoding, CompileError> {
    let entry = match find_encoding(self.bytes, self.item_token, ITEMS, ErrorKind::InvalidItemName) {
      Ok(entry) => entry,
      Err(kind) => return Err(self.fail(self.n, kind)),
    };
    match entry.args {
      ArgMap::Collection(_) => {
        if self.usage_at_level != self.col_level {
          return Err(self.fail(self.n, ErrorKind::MissingUsageForCollection));
        }
        self.col_level += 1;
      }
      ArgMap::EndCollection => {
        if self.col_level <= 0 {
          return Err(self.fail(self.n, ErrorKind::UnexpectedEndCollection));
        }
        if self.report_sizes < self.report_counts {
          return Err(self.fail(self.n, ErrorKind::MissingReportSize));
        }
        if self.report_counts < self.report_sizes {
          return Err(self.fail(self.n, ErrorKind::MissingReportCount));
        }
        self.col_level -= 1;
        self.usage_at_level -= 1;
      }
      _ => {
        if track_usage && self.item_token.bytes(self.bytes).eq_ignore_ascii_case(b"Usage") {
          self.usage_at_level = self.col_level;
        }
      }
    }
    Ok(entry)
  }

  // Closes the argument list: validates the accumulated argument against the item semantics,
  // then writes the item prefix and payload with minimum width.
  fn emit_item(&mut self) -> Result<(), CompileError> {
    let enc_map = self.enc_map()?;
    match enc_map.args {
      ArgMap::Signed => {
        let value = self.arg as i32;
        let prefix = self.item | size_prefix_bits(encoded_size_signed(value));
        self.encode_unsigned(prefix);
        self.encode_signed(value);
      }
      ArgMap::Exponent(_) => {
        let value = self.arg as i32;
        if !(-8..=7).contains(&value) {
          return Err(self.fail(self.n, ErrorKind::ArgumentValueOutOfRange));
        }
        self.encode_unsigned(self.item | 1); // one data byte
        self.encode_unsigned((value & 0xF) as u32);
      }
      args => {
        match args {
          ArgMap::Delimiter(_) => match self.arg {
            0 => {
              if self.delim_level <= 0 {
                return Err(self.fail(self.n, ErrorKind::UnexpectedDelimiterClose));
              }
              self.delim_level -= 1;
            }
            1 => self.delim_level += 1,
            _ => return Err(self.fail(self.n, ErrorKind::UnexpectedDelimiterValue)),
          },
          ArgMap::UsagePage(_) | ArgMap::Usage => {
            if self.arg > 0xFFFF {
              return Err(self.fail(self.n, ErrorKind::ArgumentValueOutOfRange));
            }
            if matches!(args, ArgMap::UsagePage(_)) {
              self.has_usage_page = true;
            }
          }
          _ => {
            if enc_map.value == REPORT_SIZE_PREFIX {
              self.report_sizes += 1;
            } else if enc_map.value == REPORT_COUNT_PREFIX {
              self.report_counts += 1;
            }
          }
        }
        let prefix = self.item | size_prefix_bits(encoded_size_unsigned(self.arg));
        self.encode_unsigned(prefix);
        self.encode_unsigned(self.arg);
      }
    }
    Ok(())
  }

  fn run(mut self) -> Result<(), CompileError> {
    let len = self.bytes.len();
    'scan: while self.n < len {
      let c = self.bytes[self.n];
      if c == 0 {
        // a NUL byte ends the source like the physical end
        break;
      }
      if self.mode.is_empty() {
        if is_item_char(c) {
          self.mode = Mode::ITEM;
          self.item_token = Token::at(self.n, 1);
        } else if c == b'{' {
          self.mode = Mode::PARAM;
          self.arg_token = Token::at(self.n + 1, 0);
        } else if c == b'0' && self.n + 1 < len && self.bytes[self.n + 1] == b'x' {
          self.mode = Mode::HEX_LIT;
          if self.n + 2 >= len {
            return Err(self.fail(self.n + 2, ErrorKind::UnexpectedEndOfSource));
          }
          if !is_hex_digit(self.bytes[self.n + 2]) {
            return Err(self.fail(self.n + 2, ErrorKind::InvalidHexValue));
          }
          self.lit = 0;
          self.n += 1;
        } else if is_digit(c) {
          // negative literals are only allowed as argument
          self.mode = Mode::NUM_LIT;
          self.lit = 0;
          continue 'scan;
        } else if c == b'-' {
          return Err(self.fail(self.n, ErrorKind::NegativeNotAllowed));
        } else if is_comment(c) {
          self.mode = Mode::COMMENT;
        } else if !is_whitespace(c) {
          return Err(self.fail(self.n, ErrorKind::UnexpectedToken));
        }
      } else if self.mode.contains(Mode::COMMENT) {
        if c == b'\r' || c == b'\n' {
          self.mode = Mode::empty();
        }
      } else if self.mode.contains(Mode::PARAM) {
        if c == b'}' {
          self.mode.remove(Mode::PARAM);
          let Some(value) = self.source.find(self.arg_token.bytes(self.bytes)) else {
            return Err(self.fail(self.n, ErrorKind::ExpectedValidParameterName));
          };
          if self.mode.contains(Mode::ARG_LIST) {
            if matches!(self.enc_map()?.args, ArgMap::Signed) {
              if !(-0x8000_0000..=0x7FFF_FFFF).contains(&value) {
                return Err(self.fail(self.n, ErrorKind::ParameterOutOfRange));
              }
            } else if !(0..=0xFFFF_FFFF).contains(&value) {
              return Err(self.fail(self.n, ErrorKind::ParameterOutOfRange));
            }
            // merge multiple arguments via OR
            self.arg |= value as u32;
            self.has_arg = true;
          } else {
            if value < 0 {
              return Err(self.fail(self.n, ErrorKind::NegativeNotAllowed));
            }
            if value > 0xFFFF_FFFF {
              return Err(self.fail(self.n, ErrorKind::ParameterOutOfRange));
            }
            self.encode_unsigned(value as u32);
          }
        } else {
          self.arg_token.length += 1;
        }
      } else if self.mode.contains(Mode::ITEM) {
        if is_item_char(c) {
          self.item_token.length += 1;
        } else if is_whitespace(c) || c == b'(' {
          if is_whitespace(c) {
            self.skip_whitespace_run();
          }
          self.mode.remove(Mode::ITEM);
          let entry = self.resolve_item(true)?;
          self.enc_map = Some(entry);
          if self.bytes[self.n] == b'(' {
            self.mode.insert(Mode::ARG_LIST);
            if matches!(entry.args, ArgMap::None) {
              return Err(self.fail(self.n, ErrorKind::ThisItemHasNoArguments));
            }
            if matches!(entry.args, ArgMap::UnitSystem(_)) {
              self.mode.insert(Mode::UNIT_SYS);
            }
            self.item = entry.value;
            self.arg = 0;
            self.has_arg = false;
            self.multi_arg = matches!(entry.args, ArgMap::Flags(_));
          } else {
            // end of item without argument list
            if entry.args.requires_argument() {
              return Err(self.fail(self.n, ErrorKind::MissingArgument));
            }
            self.encode_unsigned(entry.value);
          }
        } else {
          return Err(self.fail(self.n, ErrorKind::UnexpectedItemNameChar));
        }
      } else if self.mode.contains(Mode::ARG) {
        if self.mode.contains(Mode::UNIT_DESC) {
          if self.mode.contains(Mode::UNIT) {
            if is_alpha(c) {
              self.arg_token.length += 1;
            } else if is_whitespace(c) || c == b')' || c == b'^' {
              // end of unit name
              self.mode.remove(Mode::UNIT);
              let table = self.enc_map()?.args.table().unwrap_or(&[]);
              let unit =
                match find_encoding(self.bytes, self.arg_token, table, ErrorKind::InvalidUnitName) {
                  Ok(unit) => unit,
                  Err(kind) => return Err(self.fail(self.n, kind)),
                };
              self.enc_unit = Some(unit);
              if c == b'^' {
                self.mode.insert(Mode::UNIT_EXP);
                self.arg_token = Token::at(self.n + 1, 0);
              } else {
                // a missing exponent counts as exponent 1
                let offset = 4 * unit.value;
                self.arg &= !(0xF << offset);
                self.arg |= 1 << offset;
                continue 'scan; // re-parse as unit description
              }
            } else {
              return Err(self.fail(self.n, ErrorKind::UnexpectedUnitNameChar));
            }
          } else if self.mode.contains(Mode::UNIT_EXP) {
            if c == b'-' {
              // sign is only allowed at the beginning of the exponent
              if self.arg_token.length > 0 {
                return Err(self.fail(self.n, ErrorKind::InvalidUnitExponent));
              }
              self.arg_token.length += 1;
            } else if is_digit(c) {
              self.arg_token.length += 1;
            } else {
              // end of unit exponent
              self.mode.remove(Mode::UNIT_EXP);
              let unit = self.enc_unit()?;
              let table = unit.args.table().unwrap_or(&[]);
              let exponent = match find_encoding(
                self.bytes,
                self.arg_token,
                table,
                ErrorKind::InvalidUnitExponent,
              ) {
                Ok(exponent) => exponent,
                Err(kind) => return Err(self.fail(self.n, kind)),
              };
              // each base unit writes its exponent to a fixed nibble
              let offset = 4 * unit.value;
              self.arg &= !(0xF << offset);
              self.arg |= exponent.value << offset;
              continue 'scan; // re-parse as unit description
            }
          } else if is_alpha(c) {
            // start of unit name
            self.mode.insert(Mode::UNIT);
            self.arg_token = Token::at(self.n, 1);
          } else if c == b')' {
            // end of unit description
            self.mode.remove(Mode::ARG | Mode::UNIT_SYS | Mode::UNIT_DESC);
          } else if !is_whitespace(c) {
            return Err(self.fail(self.n, ErrorKind::UnexpectedUnitNameChar));
          }
        } else if is_arg_char(c) {
          self.arg_token.length += 1;
        } else if self.mode.contains(Mode::UNIT_SYS) {
          if self.has_arg {
            return Err(self.fail(self.n, ErrorKind::Internal));
          }
          if is_whitespace(c) || c == b'(' {
            if is_whitespace(c) {
              self.skip_whitespace_run();
            }
            // start of the unit description for the given unit system
            let table = self.enc_map()?.args.table().unwrap_or(&[]);
            let system = match find_encoding(
              self.bytes,
              self.arg_token,
              table,
              ErrorKind::InvalidUnitSystemName,
            ) {
              Ok(system) => system,
              Err(kind) => return Err(self.fail(self.n, kind)),
            };
            self.mode.insert(Mode::UNIT_DESC);
            self.arg = system.value;
            self.enc_map = Some(system);
            self.has_arg = true;
          } else if c == b')' {
            // end of unit system without description
            self.mode.remove(Mode::UNIT_SYS);
            continue 'scan; // re-parse as argument
          } else {
            return Err(self.fail(self.n, ErrorKind::UnexpectedArgumentNameChar));
          }
        } else if is_whitespace(c) || c == b')' || (self.multi_arg && c == b',') {
          // end of argument
          self.mode.remove(Mode::ARG);
          let mut enc_map = self.enc_map()?;
          if matches!(enc_map.args, ArgMap::Usage) {
            // named Usage/UsageMinimum/UsageMaximum resolve against the active usage page
            match self.usage_page {
              Some(page) if page.args.table().is_some() => {
                enc_map = page;
                self.enc_map = Some(page);
              }
              _ => {
                let kind = if self.has_usage_page {
                  ErrorKind::MissingNamedUsagePage
                } else {
                  ErrorKind::MissingUsagePage
                };
                return Err(self.fail(self.n, kind));
              }
            }
          }
          let table = enc_map.args.table().unwrap_or(&[]);
          let entry =
            match find_encoding(self.bytes, self.arg_token, table, ErrorKind::InvalidArgumentName) {
              Ok(entry) => entry,
              Err(kind) => return Err(self.fail(self.n, kind)),
            };
          if matches!(enc_map.args, ArgMap::UsagePage(_)) {
            // the named page becomes the table for subsequent Usage items
            self.usage_page = Some(entry);
          }
          if matches!(entry.args, ArgMap::Clear) {
            self.arg &= !entry.value;
          } else {
            // merge multiple arguments via OR
            self.arg |= entry.value;
          }
          self.has_arg = !self.multi_arg || c != b',';
          if c == b')' {
            continue 'scan; // re-parse as argument list
          }
        } else {
          return Err(self.fail(self.n, ErrorKind::UnexpectedArgumentNameChar));
        }
      } else if self.mode.contains(Mode::HEX_LIT) {
        if is_hex_digit(c) {
          let previous = self.lit;
          self.lit = self.lit.wrapping_shl(4);
          if self.lit < previous {
            return Err(self.fail(self.n, ErrorKind::NumberOverflow));
          }
          self.lit |= hex_digit_value(c);
        } else if self.mode.contains(Mode::ARG_LIST) {
          if is_whitespace(c) || c == b')' || (self.multi_arg && c == b',') {
            // end of hex literal
            self.mode.remove(Mode::HEX_LIT);
            if matches!(self.enc_map()?.args, ArgMap::Signed) && self.lit > 0x7FFF_FFFF {
              return Err(self.fail(self.n, ErrorKind::NumberOverflow));
            }
            self.arg |= self.lit;
            self.has_arg = !self.multi_arg || c != b',';
            if c == b')' {
              continue 'scan; // re-parse as argument list
            }
          } else {
            return Err(self.fail(self.n, ErrorKind::InvalidHexValue));
          }
        } else if is_whitespace(c) {
          // end of top level hex literal
          self.mode.remove(Mode::HEX_LIT);
          self.encode_unsigned(self.lit);
        } else {
          return Err(self.fail(self.n, ErrorKind::InvalidHexValue));
        }
      } else if self.mode.contains(Mode::NUM_LIT) {
        if is_digit(c) {
          let previous = self.lit;
          self.lit = self.lit.wrapping_mul(10);
          if self.lit < previous {
            return Err(self.fail(self.n, ErrorKind::NumberOverflow));
          }
          self.lit = self.lit.wrapping_add((c - b'0') as u32);
          if self.lit < previous {
            return Err(self.fail(self.n, ErrorKind::NumberOverflow));
          }
        } else if self.mode.contains(Mode::ARG_LIST) {
          if is_whitespace(c) || c == b')' || (self.multi_arg && c == b',') {
            // end of number literal
            self.mode.remove(Mode::NUM_LIT);
            if self.neg_lit {
              if self.lit > 0x8000_0000 {
                return Err(self.fail(self.n, ErrorKind::NumberOverflow));
              }
              self.arg |= self.lit.wrapping_neg();
              self.neg_lit = false;
            } else {
              if matches!(self.enc_map()?.args, ArgMap::Signed) && self.lit > 0x7FFF_FFFF {
                return Err(self.fail(self.n, ErrorKind::NumberOverflow));
              }
              self.arg |= self.lit;
            }
            self.has_arg = !self.multi_arg || c != b',';
            if c == b')' {
              continue 'scan; // re-parse as argument list
            }
          } else {
            return Err(self.fail(self.n, ErrorKind::InvalidNumericValue));
          }
        } else if is_whitespace(c) {
          // end of top level number literal
          self.mode.remove(Mode::NUM_LIT);
          self.encode_unsigned(self.lit);
        } else {
          return Err(self.fail(self.n, ErrorKind::InvalidNumericValue));
        }
      } else if self.mode.contains(Mode::ARG_LIST) {
        if self.has_arg {
          if c == b')' {
            // end of argument list
            self.mode.remove(Mode::ARG_LIST | Mode::UNIT_SYS);
            self.emit_item()?;
            // commas are only allowed within argument lists
            self.multi_arg = false;
          } else if self.multi_arg && c == b',' {
            self.has_arg = false;
          } else if !is_whitespace(c) {
            return Err(self.fail(self.n, ErrorKind::UnexpectedToken));
          }
        } else if is_item_char(c) {
          // start of argument
          self.mode.insert(Mode::ARG);
          self.arg_token = Token::at(self.n, 1);
        } else if c == b'0' && self.n + 1 < len && self.bytes[self.n + 1] == b'x' {
          // start of hex literal
          self.mode.insert(Mode::HEX_LIT);
          if self.n + 2 >= len {
            return Err(self.fail(self.n + 2, ErrorKind::UnexpectedEndOfSource));
          }
          if !is_hex_digit(self.bytes[self.n + 2]) {
            return Err(self.fail(self.n + 2, ErrorKind::InvalidHexValue));
          }
          self.lit = 0;
          self.n += 1;
        } else if c == b'-' {
          // a sign is only allowed for signed numeric and unit exponent arguments
          if !matches!(self.enc_map()?.args, ArgMap::Signed | ArgMap::Exponent(_)) {
            return Err(self.fail(self.n, ErrorKind::NegativeNotAllowed));
          }
          self.mode.insert(Mode::NUM_LIT);
          self.lit = 0;
          self.neg_lit = true;
        } else if is_digit(c) {
          // start of number literal
          self.mode.insert(Mode::NUM_LIT);
          self.lit = 0;
          continue 'scan;
        } else if c == b'{' {
          // start of user parameter
          self.mode.insert(Mode::PARAM);
          self.arg_token = Token::at(self.n + 1, 0);
        } else if c == b')' {
          return Err(self.fail(self.n, ErrorKind::MissingArgument));
        } else if !is_whitespace(c) {
          return Err(self.fail(self.n, ErrorKind::UnexpectedArgumentNameChar));
        }
      }
      self.n += 1;
    }
    self.finish()
  }

  // Handles the end of the source: closes a trailing literal or item and verifies that every
  // collection and delimiter has been closed and that no construct is left open.
  fn finish(mut self) -> Result<(), CompileError> {
    if self.mode.intersects(Mode::HEX_LIT | Mode::NUM_LIT) {
      self.mode.remove(Mode::HEX_LIT | Mode::NUM_LIT);
      if self.mode.is_empty() {
        self.encode_unsigned(self.lit);
      }
    }
    if self.mode.contains(Mode::ITEM) {
      self.mode.remove(Mode::ITEM);
      let entry = self.resolve_item(false)?;
      if entry.args.requires_argument() {
        return Err(self.fail(self.n, ErrorKind::MissingArgument));
      }
      if self.mode.is_empty() {
        self.encode_unsigned(entry.value);
      }
    }
    if self.col_level > 0 {
      return Err(self.fail(self.n, ErrorKind::MissingEndCollection));
    }
    if self.delim_level > 0 {
      return Err(self.fail(self.n, ErrorKind::MissingDelimiterClose));
    }
    if !self.mode.is_empty() && self.mode != Mode::COMMENT {
      return Err(self.fail(self.n, ErrorKind::UnexpectedEndOfSource));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::{encoded_size_signed, encoded_size_unsigned, DescriptorCompiler};
  use crate::{
    error::{CompileError, ErrorKind},
    source::{Param, ParamSource},
    writer::BufferWriter,
  };

  // Parameter environment shared by the reference vectors below. The padded name and the
  // out-of-range value are intentional, they exercise the byte-exact name matching and the
  // parameter range checks.
  const PARAMS: &[Param] = &[
    Param::new("arg1", 1),
    Param::new("arg2", 256),
    Param::new("arg3", -1),
    Param::new("arg4", 4294967295),
    Param::new(" arg5 ", 4294967296),
  ];

  fn run(source: &str) -> (Vec<u8>, CompileError) {
    let source = ParamSource::new(source, PARAMS);
    let mut buffer = [0u8; 256];
    let mut out = BufferWriter::new(&mut buffer);
    let error = match DescriptorCompiler::compile(&source, &mut out) {
      Ok(()) => CompileError::default(),
      Err(error) => error,
    };
    (out.written().to_vec(), error)
  }

  #[track_caller]
  fn expect_bytes(source: &str, bytes: &[u8]) {
    let (out, error) = run(source);
    assert_eq!(error.kind, ErrorKind::None, "unexpected error for {source:?}: {error}");
    assert_eq!(out, bytes, "wrong output for {source:?}");
  }

  #[track_caller]
  fn expect_error(source: &str, kind: ErrorKind, character: usize) {
    let (_, error) = run(source);
    assert_eq!(error.kind, kind, "wrong error kind for {source:?}");
    assert_eq!(error.character, character, "wrong error position for {source:?}");
  }

  #[test]
  fn minimum_width_selection_should_match_the_encoding_rules() {
    assert_eq!(encoded_size_unsigned(0), 1);
    assert_eq!(encoded_size_unsigned(0xFF), 1);
    assert_eq!(encoded_size_unsigned(0x100), 2);
    assert_eq!(encoded_size_unsigned(0xFFFF), 2);
    assert_eq!(encoded_size_unsigned(0x10000), 4);
    assert_eq!(encoded_size_signed(0), 1);
    assert_eq!(encoded_size_signed(127), 1);
    assert_eq!(encoded_size_signed(-128), 1);
    assert_eq!(encoded_size_signed(128), 2);
    assert_eq!(encoded_size_signed(-129), 2);
    assert_eq!(encoded_size_signed(32767), 2);
    assert_eq!(encoded_size_signed(-32768), 2);
    assert_eq!(encoded_size_signed(32768), 4);
    assert_eq!(encoded_size_signed(-32769), 4);
    assert_eq!(encoded_size_signed(i32::MIN), 4);
  }

  #[test]
  fn comments_should_run_to_the_end_of_the_line() {
    expect_bytes("#", &[]);
    expect_bytes("#\n", &[]);
    expect_bytes("#\r", &[]);
    expect_bytes("#\n0", &[0]);
    expect_bytes("#\r0", &[0]);
    expect_bytes("# text", &[]);
    expect_bytes("# text\n0", &[0]);
    expect_bytes(";", &[]);
    expect_bytes("; text\r0", &[0]);
    expect_bytes("", &[]);
  }

  #[test]
  fn top_level_number_literals_should_emit_raw_payloads() {
    expect_bytes("0", &[0]);
    expect_bytes("0\n", &[0]);
    expect_bytes("0\r", &[0]);
    expect_bytes("0 ", &[0]);
    expect_bytes("1", &[1]);
    expect_bytes("256", &[0, 1]); // little endian
    expect_bytes("4294967295", &[255, 255, 255, 255]);
    expect_error("4294967296", ErrorKind::NumberOverflow, 9);
    expect_error("42949672950", ErrorKind::NumberOverflow, 10);
    expect_error("-1", ErrorKind::NegativeNotAllowed, 0);
    expect_error("1a", ErrorKind::InvalidNumericValue, 1);
    expect_error("1#", ErrorKind::InvalidNumericValue, 1);
    expect_error("1;", ErrorKind::InvalidNumericValue, 1);
    expect_error("$", ErrorKind::UnexpectedToken, 0);
  }

  #[test]
  fn top_level_hex_literals_should_emit_raw_payloads() {
    expect_bytes("0x0", &[0x00]);
    expect_bytes("0x0\n", &[0x00]);
    expect_bytes("0x0 ", &[0x00]);
    expect_bytes("0x1", &[0x01]);
    expect_bytes("0x100", &[0x00, 0x01]); // little endian
    expect_bytes("0xFFFFFFFF", &[0xFF, 0xFF, 0xFF, 0xFF]);
    expect_bytes("0xffffffff", &[0xFF, 0xFF, 0xFF, 0xFF]);
    expect_error("0x100000000", ErrorKind::NumberOverflow, 10);
    expect_error("0X0", ErrorKind::InvalidNumericValue, 1);
    expect_error("0x0z", ErrorKind::InvalidHexValue, 3);
    expect_error("0x0#", ErrorKind::InvalidHexValue, 3);
    expect_error("0x0;", ErrorKind::InvalidHexValue, 3);
    expect_error("0x", ErrorKind::UnexpectedEndOfSource, 2);
    expect_error("0xZ", ErrorKind::InvalidHexValue, 2);
  }

  #[test]
  fn top_level_parameters_should_emit_raw_payloads() {
    expect_bytes("{arg1}", &[1]);
    expect_bytes("{arg1}\n", &[1]);
    expect_bytes("{arg1} ", &[1]);
    expect_bytes("{arg1}{arg1}", &[1, 1]);
    expect_bytes("{arg2}", &[0, 1]); // little endian
    expect_bytes("{arg4}", &[255, 255, 255, 255]);
    expect_error("{arg3}", ErrorKind::NegativeNotAllowed, 5);
    expect_error("{ arg5 }", ErrorKind::ParameterOutOfRange, 7);
    expect_error("{arg6}", ErrorKind::ExpectedValidParameterName, 5);
    expect_error("{ arg1}", ErrorKind::ExpectedValidParameterName, 6);
    expect_error("{arg1 }", ErrorKind::ExpectedValidParameterName, 6);
    expect_error("{ arg1 }", ErrorKind::ExpectedValidParameterName, 7);
    expect_error("{arg1", ErrorKind::UnexpectedEndOfSource, 5);
  }

  #[test]
  fn item_names_should_resolve_case_insensitively() {
    expect_bytes("Push", &[0xA4]);
    expect_bytes("PUSH", &[0xA4]);
    expect_bytes("push", &[0xA4]);
    expect_bytes("Pop", &[0xB4]);
    expect_error("pushx", ErrorKind::InvalidItemName, 5);
    expect_error("pushx ", ErrorKind::InvalidItemName, 5);
    expect_error("push$", ErrorKind::UnexpectedItemNameChar, 4);
    expect_error("Push(10)", ErrorKind::ThisItemHasNoArguments, 4);
    expect_error("Pushx(10)", ErrorKind::InvalidItemName, 5);
    expect_bytes("UsagePage(GenericDesktop)", &[0x05, 0x01]);
    expect_bytes("USAGEPAGE(GENERICDESKTOP)", &[0x05, 0x01]);
    expect_bytes("  UsagePage  (  GenericDesktop  )  ", &[0x05, 0x01]);
    expect_bytes("\nUsagePage\n(\nGenericDesktop\n)\n", &[0x05, 0x01]);
    expect_bytes("\rUsagePage\r(\nGenericDesktop\r)\r", &[0x05, 0x01]);
    expect_bytes("\tUsagePage\t(\nGenericDesktop\t)\t", &[0x05, 0x01]);
  }

  #[test]
  fn argument_values_should_accept_every_literal_form() {
    expect_bytes("UsagePage(1)", &[0x05, 0x01]);
    expect_bytes("UsagePage(0x1)", &[0x05, 0x01]);
    expect_error("UsagePage(-1)", ErrorKind::NegativeNotAllowed, 10);
    expect_error("UsagePage(1", ErrorKind::UnexpectedEndOfSource, 11);
    expect_error("UsagePage(0x", ErrorKind::UnexpectedEndOfSource, 12);
    expect_error("UsagePage(0x1", ErrorKind::UnexpectedEndOfSource, 13);
    expect_error("UsagePage(0xZ)", ErrorKind::InvalidHexValue, 12);
    expect_error("UsagePage(0xAZ)", ErrorKind::InvalidHexValue, 13);
    expect_error("UsagePage(a$)", ErrorKind::UnexpectedArgumentNameChar, 11);
    expect_error("UsagePage(0x10000)", ErrorKind::ArgumentValueOutOfRange, 17);
    expect_error("UsagePage({arg4})", ErrorKind::ArgumentValueOutOfRange, 16);
    expect_error("UsagePage({ arg5 })", ErrorKind::ParameterOutOfRange, 17);
    expect_error("UsagePage(Generic Desktop)", ErrorKind::InvalidArgumentName, 17);
    expect_error("UsagePage(Generic\nDesktop)", ErrorKind::InvalidArgumentName, 17);
  }

  #[test]
  fn delimiters_should_balance() {
    expect_bytes("Delimiter(Open)Delimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
    expect_bytes("Delimiter(Open) Delimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
    expect_bytes("Delimiter(Open)\nDelimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
    expect_bytes("Delimiter(Open)\tDelimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
    expect_bytes("Delimiter(Open)\rDelimiter(Close)", &[0xA9, 0x01, 0xA9, 0x00]);
    expect_error("Delimiter(Open Open)\rDelimiter(Close)", ErrorKind::UnexpectedToken, 15);
    expect_error("Delimiter(2)", ErrorKind::UnexpectedDelimiterValue, 11);
    expect_error("Delimiter(0)", ErrorKind::UnexpectedDelimiterClose, 11);
    expect_error("Delimiter(Close)", ErrorKind::UnexpectedDelimiterClose, 15);
    expect_error("Delimiter(Open)", ErrorKind::MissingDelimiterClose, 15);
    expect_error("Delimiter(Open) ", ErrorKind::MissingDelimiterClose, 16);
  }

  #[test]
  fn signed_arguments_should_use_minimum_width() {
    expect_bytes("LogicalMaximum(1)", &[0x25, 0x01]);
    expect_bytes("LogicalMaximum(-1)", &[0x25, 0xFF]);
    expect_bytes("LogicalMaximum(127)", &[0x25, 0x7F]);
    expect_bytes("LogicalMaximum(-128)", &[0x25, 0x80]);
    expect_bytes("LogicalMaximum(128)", &[0x26, 0x80, 0x00]);
    expect_bytes("LogicalMaximum(-129)", &[0x26, 0x7F, 0xFF]);
    expect_bytes("LogicalMaximum(32767)", &[0x26, 0xFF, 0x7F]);
    expect_bytes("LogicalMaximum(-32768)", &[0x26, 0x00, 0x80]);
    expect_bytes("LogicalMaximum(32768)", &[0x27, 0x00, 0x80, 0x00, 0x00]);
    expect_bytes("LogicalMaximum(-32769)", &[0x27, 0xFF, 0x7F, 0xFF, 0xFF]);
    expect_bytes("LogicalMaximum(2147483647)", &[0x27, 0xFF, 0xFF, 0xFF, 0x7F]);
    expect_bytes("LogicalMaximum(0x7FFFFFFF)", &[0x27, 0xFF, 0xFF, 0xFF, 0x7F]);
    expect_bytes("LogicalMaximum(0x7fffffff)", &[0x27, 0xFF, 0xFF, 0xFF, 0x7F]);
    expect_bytes("LogicalMaximum(-2147483648)", &[0x27, 0x00, 0x00, 0x00, 0x80]);
    expect_error("LogicalMaximum(2147483648)", ErrorKind::NumberOverflow, 25);
    expect_error("LogicalMaximum(0x80000000)", ErrorKind::NumberOverflow, 25);
    expect_error("LogicalMaximum(-2147483649)", ErrorKind::NumberOverflow, 26);
    expect_error("LogicalMaximum({arg4})", ErrorKind::ParameterOutOfRange, 20);
  }

  #[test]
  fn unsigned_arguments_should_use_minimum_width() {
    expect_bytes("ReportId(1)", &[0x85, 0x01]);
    expect_bytes("ReportId({arg4})", &[0x87, 0xFF, 0xFF, 0xFF, 0xFF]);
    expect_error("ReportId({arg4", ErrorKind::UnexpectedEndOfSource, 14);
    expect_error("ReportId(-1)", ErrorKind::NegativeNotAllowed, 9);
    expect_error("StringMaximum(4294967296)", ErrorKind::NumberOverflow, 23);
    expect_error("StringMaximum(42949672950)", ErrorKind::NumberOverflow, 24);
    expect_error("StringMaximum(0x100000000)", ErrorKind::NumberOverflow, 24);
    expect_error("StringMaximum(10z)", ErrorKind::InvalidNumericValue, 16);
  }

  #[test]
  fn usage_arguments_should_require_a_named_page() {
    expect_error("UsagePage(GenericDesktop)\nUsage(0x10000)", ErrorKind::ArgumentValueOutOfRange, 39);
    expect_error("UsagePage(GenericDesktop)\nUsage({arg4})", ErrorKind::ArgumentValueOutOfRange, 38);
    expect_error("UsagePage(GenericDesktop)\nUsageMinimum(0x10000)", ErrorKind::ArgumentValueOutOfRange, 46);
    expect_error("UsagePage(GenericDesktop)\nUsageMinimum({arg4})", ErrorKind::ArgumentValueOutOfRange, 45);
    expect_error("UsagePage(GenericDesktop)\nUsageMaximum(0x10000)", ErrorKind::ArgumentValueOutOfRange, 46);
    expect_error("UsagePage(GenericDesktop)\nUsageMaximum({arg4})", ErrorKind::ArgumentValueOutOfRange, 45);
    // numeric pages are valid but do not provide usage names
    expect_bytes("UsagePage(1)\nUsage(1)", &[0x05, 0x01, 0x09, 0x01]);
    expect_bytes("UsagePage(0x1)\nUsage(0x1)", &[0x05, 0x01, 0x09, 0x01]);
    expect_bytes("UsagePage({arg1})\nUsage({arg1})", &[0x05, 0x01, 0x09, 0x01]);
    expect_error("UsagePage(1)\nUsage(Pointer)", ErrorKind::MissingNamedUsagePage, 26);
    expect_error("UsagePage(0x1)\nUsage(Pointer)", ErrorKind::MissingNamedUsagePage, 28);
    expect_error("UsagePage({arg1})\nUsage(Pointer)", ErrorKind::MissingNamedUsagePage, 31);
    expect_error("Usage(Pointer)", ErrorKind::MissingUsagePage, 13);
  }

  #[test]
  fn indexed_argument_names_should_range_check_their_suffix() {
    expect_bytes("UsagePage(Button)\nUsage(NoButtonPressed)", &[0x05, 0x09, 0x09, 0x00]);
    expect_bytes("UsagePage(Button)\nUsage(Button1)", &[0x05, 0x09, 0x09, 0x01]);
    expect_bytes("UsagePage(Button)\nUsage(Button65535)", &[0x05, 0x09, 0x0A, 0xFF, 0xFF]);
    expect_bytes("UsagePage(MonitorEnumeratedValues)\nUsage(Enum0)", &[0x05, 0x81, 0x09, 0x00]);
    expect_error("UsagePage(Button)\nUsage(Button65536)", ErrorKind::ArgumentIndexOutOfRange, 35);
    expect_error("UsagePage(Button)\nUsage(Button01)", ErrorKind::InvalidArgumentName, 32);
    expect_error("UsagePage(Button)\nUsage(Button1x)", ErrorKind::UnexpectedArgumentNameChar, 32);
    expect_error("UsagePage(Button)\nUsage(Butto1)", ErrorKind::InvalidArgumentName, 30);
    expect_error("UsagePage(Button)\nUsage(Button4294967295)", ErrorKind::ArgumentIndexOutOfRange, 40);
    expect_error("UsagePage(Button)\nUsage(Button4294967296)", ErrorKind::ArgumentIndexOutOfRange, 40);
  }

  #[test]
  fn multi_flag_items_should_merge_and_clear_flags() {
    expect_bytes("Input(0)", &[0x81, 0x00]);
    expect_bytes("Input(Cnst)", &[0x81, 0x01]);
    expect_bytes("Input(cnst)", &[0x81, 0x01]);
    expect_bytes("Input(CNST)", &[0x81, 0x01]);
    expect_bytes("Input(Cnst, Data)", &[0x81, 0x00]);
    expect_bytes("Input(Data, Cnst)", &[0x81, 0x01]);
    expect_bytes("Input(0,1)", &[0x81, 0x01]);
    expect_bytes("Input(2, 1, 256)", &[0x82, 0x03, 0x01]);
    expect_bytes("Input(2, {arg1}, 0x100, Rel)", &[0x82, 0x07, 0x01]);
    expect_bytes("Input(2, {arg1}, 0x100, Data)", &[0x82, 0x02, 0x01]);
    expect_bytes("Input(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Buf)", &[0x82, 0x7F, 0x01]);
    expect_bytes("Output(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Vol, Buf)", &[0x92, 0xFF, 0x01]);
    expect_bytes("Feature(Cnst, Var, Rel, Warp, NLin, NPrf, Null, Vol, Buf)", &[0xB2, 0xFF, 0x01]);
    expect_error("Input(0 1)", ErrorKind::UnexpectedToken, 8);
    expect_error("Input(NVol)", ErrorKind::InvalidArgumentName, 10);
    expect_error("Input(Null", ErrorKind::UnexpectedEndOfSource, 10);
    // commas are exclusive to the multi flag items
    expect_error("UsagePage(1,2)", ErrorKind::InvalidNumericValue, 11);
    expect_error("Delimiter(Open,Close)", ErrorKind::UnexpectedArgumentNameChar, 14);
  }

  #[test]
  fn unit_exponent_arguments_should_encode_signed_nibbles() {
    expect_bytes("UnitExponent(0)", &[0x55, 0x00]);
    expect_bytes("UnitExponent(1)", &[0x55, 0x01]);
    expect_bytes("UnitExponent(7)", &[0x55, 0x07]);
    expect_error("UnitExponent(8)", ErrorKind::ArgumentValueOutOfRange, 14);
    expect_bytes("UnitExponent(-1)", &[0x55, 0x0F]);
    expect_bytes("UnitExponent(-8)", &[0x55, 0x08]);
    expect_error("UnitExponent(-9)", ErrorKind::ArgumentValueOutOfRange, 15);
    expect_error("UnitExponent(x1)", ErrorKind::InvalidArgumentName, 15);
  }

  #[test]
  fn unit_descriptions_should_fill_the_nibble_vector() {
    expect_bytes("Unit(1)", &[0x65, 0x01]);
    expect_bytes("Unit(0x1)", &[0x65, 0x01]);
    expect_bytes("Unit({arg1})", &[0x65, 0x01]);
    expect_bytes("Unit(None)", &[0x65, 0x00]);
    expect_bytes("Unit(SiLin)", &[0x65, 0x01]);
    expect_bytes("Unit(None())", &[0x65, 0x00]);
    expect_bytes("Unit(SiLin())", &[0x65, 0x01]);
    expect_bytes("Unit(SiRot())", &[0x65, 0x02]);
    expect_bytes("Unit(ENGLIN())", &[0x65, 0x03]);
    expect_bytes("Unit(engrot())", &[0x65, 0x04]);
    expect_bytes("Unit(None(Length))", &[0x65, 0x10]);
    expect_bytes("Unit(SiLin(Length))", &[0x65, 0x11]);
    expect_bytes("Unit  (  SiLin  (  Length  )  )  ", &[0x65, 0x11]);
    expect_bytes("Unit(SiLin(Length Mass))", &[0x66, 0x11, 0x01]);
    expect_bytes("Unit(SiLin(Length^1Mass^1))", &[0x66, 0x11, 0x01]);
    expect_bytes("Unit(SiLin(Length Mass^1))", &[0x66, 0x11, 0x01]);
    expect_bytes("Unit(SiLin(Length^1 Mass))", &[0x66, 0x11, 0x01]);
    expect_bytes("Unit(SiLin(Length^0 Mass))", &[0x66, 0x01, 0x01]);
    expect_bytes("Unit(SiLin(Length Mass^0))", &[0x65, 0x11]);
    expect_bytes("Unit(SiLin(Length^-8Mass^7))", &[0x66, 0x81, 0x07]);
    expect_bytes("Unit(SiLin(Length^7Mass^-1))", &[0x66, 0x71, 0x0F]);
    expect_bytes("Unit(SiLin(Temp^3))", &[0x67, 0x01, 0x00, 0x03, 0x00]);
    expect_bytes("Unit(SiLin(Length^2Mass^3Time^4temp^5CURRENT^6luminouS^7))", &[0x67, 0x21, 0x43, 0x65, 0x07]);
    expect_bytes("Unit(SiLin(luminouS^7CURRENT^6temp^5Time^4Mass^3Length^2))", &[0x67, 0x21, 0x43, 0x65, 0x07]);
    expect_error("Unit(())", ErrorKind::UnexpectedArgumentNameChar, 5);
    expect_error("Unit()", ErrorKind::MissingArgument, 5);
    expect_error("Unit(Unknown())", ErrorKind::InvalidUnitSystemName, 12);
    expect_error("Unit(None(Length$))", ErrorKind::UnexpectedUnitNameChar, 16);
    expect_error("Unit(None(LengthX))", ErrorKind::InvalidUnitName, 17);
    expect_error("Unit(None(^1))", ErrorKind::UnexpectedUnitNameChar, 10);
    expect_error("Unit(None(1))", ErrorKind::UnexpectedUnitNameChar, 10);
    expect_error("Unit(None(-1))", ErrorKind::UnexpectedUnitNameChar, 10);
    expect_error("Unit(None(Length^1-))", ErrorKind::InvalidUnitExponent, 18);
    expect_error("Unit(None(Length^x))", ErrorKind::InvalidUnitExponent, 17);
    expect_error("Unit(None(Length^8))", ErrorKind::InvalidUnitExponent, 18);
    expect_error("Unit(None(Length^-9))", ErrorKind::InvalidUnitExponent, 19);
    expect_error("Unit(None(Length^-0))", ErrorKind::InvalidUnitExponent, 19);
    expect_error("Unit(None$())", ErrorKind::UnexpectedArgumentNameChar, 9);
    expect_error("Unit(None None)", ErrorKind::InvalidUnitName, 14);
    expect_error("Unit(None() None)", ErrorKind::UnexpectedToken, 12);
    expect_error("Unit(", ErrorKind::UnexpectedEndOfSource, 5);
    expect_error("Unit(None(", ErrorKind::UnexpectedEndOfSource, 10);
    expect_error("Unit(None()", ErrorKind::UnexpectedEndOfSource, 11);
  }

  #[test]
  fn structural_rules_should_be_enforced() {
    expect_error("UsagePage", ErrorKind::MissingArgument, 9);
    expect_error("UsagePage ", ErrorKind::MissingArgument, 9);
    expect_error("UsagePage(GenericDesktop)\nUsage", ErrorKind::MissingArgument, 31);
    expect_error("UsagePage(GenericDesktop)\nUsage ", ErrorKind::MissingArgument, 31);
    expect_error("Usage", ErrorKind::MissingArgument, 5);
    expect_error("Usage ", ErrorKind::MissingArgument, 5);
    expect_error("Collection", ErrorKind::MissingUsageForCollection, 10);
    expect_error("Collection(Application)", ErrorKind::MissingUsageForCollection, 10);
    expect_error("EndCollection", ErrorKind::UnexpectedEndCollection, 13);
    expect_error("EndCollection ", ErrorKind::UnexpectedEndCollection, 13);
    expect_error("UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection", ErrorKind::MissingArgument, 51);
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)",
      ErrorKind::MissingEndCollection,
      64,
    );
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application) ",
      ErrorKind::MissingEndCollection,
      65,
    );
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nEndCollection",
      ErrorKind::MissingReportCount,
      92,
    );
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nEndCollection ",
      ErrorKind::MissingReportCount,
      92,
    );
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportCount(1)\nEndCollection",
      ErrorKind::MissingReportSize,
      93,
    );
    expect_error(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportCount(1)\nEndCollection ",
      ErrorKind::MissingReportSize,
      93,
    );
    expect_bytes(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nReportCount(1)\nEndCollection",
      &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x75, 0x01, 0x95, 0x01, 0xC0],
    );
    expect_bytes(
      "UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)\nReportSize(1)\nReportCount(1)\nEndCollection ",
      &[0x05, 0x01, 0x09, 0x01, 0xA1, 0x01, 0x75, 0x01, 0x95, 0x01, 0xC0],
    );
  }

  #[test]
  fn partial_output_should_survive_an_error() {
    let (bytes, error) = run("Delimiter(Open)\nDelimiter(Unknown)");
    assert_eq!(error.kind, ErrorKind::InvalidArgumentName);
    assert_eq!(error.character, 33);
    assert_eq!(bytes, [0xA9, 0x01]);

    let (bytes, error) = run("UsagePage(GenericDesktop)\nUsage(Pointer)\nCollection(Application)");
    assert_eq!(error.kind, ErrorKind::MissingEndCollection);
    assert_eq!(bytes, [0x05, 0x01, 0x09, 0x01, 0xA1, 0x01]);
  }

  #[test]
  fn error_positions_should_count_code_points() {
    // the two byte o-umlaut shifts byte offsets but not character offsets
    let (_, error) = run("# m\u{00f6}use\nEndCollection");
    assert_eq!(error.kind, ErrorKind::UnexpectedEndCollection);
    assert_eq!(error.character, 21);
    assert_eq!(error.line, 2);
    assert_eq!(error.column, 14);
  }

  #[test]
  fn nul_bytes_should_end_the_source() {
    let source = ParamSource::new("Push\0Pop", PARAMS);
    let mut buffer = [0u8; 8];
    let mut out = BufferWriter::new(&mut buffer);
    DescriptorCompiler::compile(&source, &mut out).unwrap();
    assert_eq!(out.written(), [0xA4]);
  }

  #[test]
  fn sanity_descriptor_should_compile_to_the_reference_bytes() {
    let params = [Param::new("arg1", 1), Param::new("arg2", 2), Param::new("arg3", 3)];
    let source = ParamSource::new(
      "\nUsagePage(Button)\nUsage(Button20)\nCollection(Application)\nUnit(SiLin(Length Mass^2))\nInput(3, Rel, {arg2})\n0x13\n{arg1}\nEndCollection\n",
      &params,
    );
    let mut buffer = [0u8; 32];
    let mut out = BufferWriter::new(&mut buffer);
    DescriptorCompiler::compile(&source, &mut out).unwrap();
    assert_eq!(
      out.written(),
      [0x05, 0x09, 0x09, 0x14, 0xA1, 0x01, 0x66, 0x11, 0x02, 0x81, 0x07, 0x13, 0x01, 0xC0]
    );
  }
}
