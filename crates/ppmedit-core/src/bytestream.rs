/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple cursor over an in-memory buffer
//!
//! Used by the PPM decoder and the BDF parser, both of which
//! mostly deal in single bytes and whitespace delimited tokens.
use core::fmt::{Debug, Display, Formatter};

pub enum ZByteIoError {
    // requested, remaining
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ZByteIoError {}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// A cursor over a borrowed byte slice
///
/// Reads past the end never panic, `get_u8` returns zero and
/// leaves the position untouched.
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    pub const fn new(stream: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream,
            position: 0
        }
    }

    /// Read a single byte, returning zero at the end of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Look at the next byte without consuming it
    #[inline(always)]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return a reference to the next `num` bytes and advance past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let remaining = self.remaining();

        if num > remaining {
            return Err(ZByteIoError::NotEnoughBytes(num, remaining));
        }
        let bytes = &self.stream[self.position..self.position + num];
        self.position += num;

        Ok(bytes)
    }

    /// Skip bytes while `func` returns true
    pub fn skip_until_false<F: Fn(u8) -> bool>(&mut self, func: F) {
        while let Some(byte) = self.peek_u8() {
            if !(func)(byte) {
                break;
            }
            self.position += 1;
        }
    }

    /// Move forward `num` bytes, stopping at the end of the stream
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Move back `num` bytes, stopping at the start of the stream
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    #[inline(always)]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Whether at least `num` more bytes can be read
    #[inline(always)]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    #[inline(always)]
    pub const fn get_position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_stop_at_the_end() {
        let mut reader = ZByteReader::new(b"ab");

        assert_eq!(reader.get_u8(), b'a');
        assert_eq!(reader.get_u8(), b'b');
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.get_position(), 2);
        assert!(reader.get_u8_err().is_err());
    }

    #[test]
    fn skip_and_rewind_saturate() {
        let mut reader = ZByteReader::new(b"hello");
        reader.skip(100);
        assert!(reader.eof());
        reader.rewind(100);
        assert_eq!(reader.get_position(), 0);
        reader.skip_until_false(|x| x != b'l');
        assert_eq!(reader.get_position(), 2);
        assert_eq!(reader.remaining(), 3);
    }

    #[test]
    fn get_as_ref_checks_length() {
        let mut reader = ZByteReader::new(b"abc");
        assert!(reader.get_as_ref(4).is_err());
        assert_eq!(reader.get_as_ref(2).unwrap(), b"ab");
        assert!(reader.has(1));
        assert!(!reader.has(2));
    }
}
