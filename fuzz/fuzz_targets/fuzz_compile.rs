//! Fuzzes the descriptor compiler with arbitrary source bytes.
//!
//! Covers: the tokenizer, the mode driven state machine, the table lookups including indexed
//! names, the unit description parser and the error position accounting. Must never panic on
//! arbitrary input, and the size counting sink must agree with the buffer sink byte for byte.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_compile
#![no_main]
use hidcompiler::{compile, compile_error, compiled_size, BufferWriter, ErrorKind, Param, ParamSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    static PARAMS: &[Param] = &[Param::new("arg1", 1), Param::new("neg", -3)];

    // Compile the raw bytes directly; invalid UTF-8 only affects position accounting.
    let mut buffer = [0u8; 4096];
    let mut out = BufferWriter::new(&mut buffer);
    let buffered = compile(data, &mut out);

    // The three operations must agree in everything except the sink.
    let size = compiled_size(data);
    let error = compile_error(data);
    match buffered {
        Ok(()) => {
            assert_eq!(error.kind, ErrorKind::None);
            // the bounded sink truncates outputs larger than its buffer
            assert_eq!(out.position(), size.min(4096));
        }
        Err(failure) => {
            assert_eq!(error, failure);
            assert_eq!(size, 0);
            assert!(failure.line >= 1 && failure.column >= 1);
        }
    }

    // Same input as source text with a parameter environment attached.
    if let Ok(text) = core::str::from_utf8(data) {
        let source = ParamSource::new(text, PARAMS);
        let mut out = BufferWriter::new(&mut buffer);
        let result = compile(&source, &mut out);
        assert_eq!(result.is_ok(), compile_error(&source).kind == ErrorKind::None);
    }
});
