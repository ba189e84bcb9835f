/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Whitespace delimited tokens on top of the byte reader
use core::str::FromStr;

use ppmedit_core::bytestream::ZByteReader;

use crate::errors::BdfErrors;

/// Skip whitespace and return the next run of non whitespace bytes
pub(crate) fn next_token<'a>(reader: &mut ZByteReader<'a>) -> Option<&'a [u8]> {
    reader.skip_until_false(|x| x.is_ascii_whitespace());

    if reader.eof() {
        return None;
    }
    let start = reader.get_position();
    reader.skip_until_false(|x| !x.is_ascii_whitespace());
    let end = reader.get_position();

    reader.rewind(end - start);
    reader.get_as_ref(end - start).ok()
}

/// Read the remainder of the current line, without surrounding whitespace
pub(crate) fn rest_of_line(reader: &mut ZByteReader) -> String {
    reader.skip_until_false(|x| x == b' ' || x == b'\t');

    let start = reader.get_position();
    reader.skip_until_false(|x| x != b'\n');
    let end = reader.get_position();

    reader.rewind(end - start);
    let line = reader.get_as_ref(end - start).unwrap_or_default();

    String::from_utf8_lossy(line).trim().to_string()
}

/// Read the next token and parse it as a number
pub(crate) fn next_number<T: FromStr>(reader: &mut ZByteReader) -> Result<T, BdfErrors> {
    let token = next_token(reader).ok_or(BdfErrors::InvalidNumber(String::new()))?;
    let text = String::from_utf8_lossy(token);

    text.parse::<T>()
        .map_err(|_| BdfErrors::InvalidNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use ppmedit_core::bytestream::ZByteReader;

    use crate::tokens::{next_number, next_token, rest_of_line};

    #[test]
    fn splits_on_whitespace() {
        let mut reader = ZByteReader::new(b"  BBX 8 -2\n\tFONT my font \nEND");

        assert_eq!(next_token(&mut reader), Some(&b"BBX"[..]));
        assert_eq!(next_number::<usize>(&mut reader).unwrap(), 8);
        assert_eq!(next_number::<i32>(&mut reader).unwrap(), -2);
        assert_eq!(next_token(&mut reader), Some(&b"FONT"[..]));
        assert_eq!(rest_of_line(&mut reader), "my font");
        assert_eq!(next_token(&mut reader), Some(&b"END"[..]));
        assert_eq!(next_token(&mut reader), None);
        assert!(next_number::<i32>(&mut reader).is_err());
    }
}
