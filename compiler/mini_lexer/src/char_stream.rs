//! Byte reader with one byte of putback.
//!
//! The scanner never needs more than one byte past the token it keeps, so
//! a single pending slot is the whole buffering contract.

use std::io::{self, BufReader, ErrorKind, Read};

/// A byte stream that can un-read exactly one byte.
#[derive(Debug)]
pub struct CharStream<R> {
    reader: R,
    /// Byte handed back by [`putback`](Self::putback), returned by the next read.
    pending: Option<u8>,
}

impl<R: Read> CharStream<R> {
    /// Wrap a reader. Reads are issued one byte at a time, so unbuffered
    /// sources (files, stdin) should go through [`buffered`](Self::buffered).
    pub fn new(reader: R) -> Self {
        CharStream {
            reader,
            pending: None,
        }
    }

    /// Read the next byte.
    ///
    /// Returns `Ok(None)` at end of input. `Interrupted` reads are retried;
    /// any other I/O failure is returned to the caller.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Push `byte` back so the next read returns it.
    ///
    /// Only one byte may be pending at a time.
    pub fn putback(&mut self, byte: u8) {
        debug_assert!(
            self.pending.is_none(),
            "only one byte of putback is supported"
        );
        self.pending = Some(byte);
    }
}

impl<R: Read> CharStream<BufReader<R>> {
    /// Wrap an unbuffered reader in a `BufReader`.
    pub fn buffered(reader: R) -> Self {
        CharStream::new(BufReader::new(reader))
    }
}

impl<'a> CharStream<&'a [u8]> {
    /// Stream over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        CharStream::new(source.as_bytes())
    }
}
