/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of base41.
 *
 * base41 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base41 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base41. If not, see <https://www.gnu.org/licenses/>.
 */

#![cfg(feature = "alloc")]

use base41::decode::{decode_str_with, DecodeConfig};
use base41::{decode_bytes, decode_str, decode_to_vec, DecodeError};
use base41::{encode_to_string, encode_to_vec};

const PAIR_BOUNDARIES: [([u8; 2], &str); 9] = [
    ([0, 0], "000"),
    ([0, 40], "X00"),
    ([0, 41], "010"),
    ([6, 104], "0X0"),
    ([6, 144], "XX0"),
    ([6, 145], "001"),
    ([249, 134], "00V"),
    ([255, 238], "0XV"),
    ([255, 255], "AXV"),
];

const GIF: &[u8] = b"GIF89a\x01\x00\x01\x00\x80\x00\x00\x05\x04\x04\x00\x00\x00,\
    \x00\x00\x00\x00\x01\x00\x01\x00\x00\x02\x02D\x01\x00;";

const GIF_BASE41: &str =
    "4SjBLjkN8j60j609DC5003I0000310000000j60j602006n0j60B1";

fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    decode_to_vec(decode_str(s))
}

#[test]
fn pair_boundaries() {
    for (bytes, encoded) in PAIR_BOUNDARIES.iter() {
        assert_eq!(encode_to_string(bytes.iter().copied()), *encoded);
        assert_eq!(decode(encoded).as_deref(), Ok(&bytes[..]));
    }
}

#[test]
fn pair_boundaries_with_punctuation() {
    let noisy = [
        "0-00", "X*00", "01+0", "0//X0", "XX0__", "0^0^1", "0-0-V", "0[XV]",
        "[AX[[[V",
    ];
    for ((bytes, _), encoded) in PAIR_BOUNDARIES.iter().zip(noisy.iter()) {
        assert_eq!(decode(encoded).as_deref(), Ok(&bytes[..]));
    }
}

#[test]
fn text_round_trip() {
    let text = b"Now is the winter of our discontent";
    let encoded = encode_to_vec(text.iter().copied());
    let decoded = decode_to_vec(decode_bytes(encoded));
    assert_eq!(decoded.as_deref(), Ok(&text[..]));
}

#[test]
fn binary_round_trip() {
    assert_eq!(encode_to_string(GIF.iter().copied()), GIF_BASE41);
    assert_eq!(decode(GIF_BASE41).as_deref(), Ok(GIF));
}

#[test]
fn uuid() {
    let uuid = [
        0xa9, 0x8b, 0xd6, 0x14, 0xb0, 0x23, 0x45, 0xc2, 0x99, 0xb1, 0x05, 0x7a,
        0x3e, 0xde, 0xff, 0x92,
    ];
    let encoded = encode_to_string(uuid.iter().copied());
    assert_eq!(encoded, "IQILHPPQJGIjJpG8R0FG9OUV");
    assert_eq!(decode(&encoded), Ok(uuid.to_vec()));
}

#[test]
fn every_byte_value() {
    let bytes: Vec<u8> = (0..=255).collect();
    let encoded = encode_to_string(bytes.iter().copied());
    assert!(encoded.bytes().all(base41::alphabet::is_symbol));
    assert_eq!(decode(&encoded), Ok(bytes));
}

#[test]
fn strict_decoding_of_clean_input() {
    let mut config = DecodeConfig::new();
    config.strict = true;
    let decoded = decode_to_vec(decode_str_with(GIF_BASE41, config));
    assert_eq!(decoded.as_deref(), Ok(GIF));

    let decoded = decode_to_vec(decode_str_with("4SjB Ljk", config));
    assert_eq!(decoded, Err(DecodeError::BadByte(b' ')));
}

#[cfg(feature = "std")]
#[test]
fn errors_are_std_errors() {
    fn boxed(e: DecodeError) -> Box<dyn std::error::Error> {
        Box::new(e)
    }
    let err = boxed(decode("X0").unwrap_err());
    assert_eq!(
        err.to_string(),
        "decoding two bytes gave a value (40) less than 41",
    );
}
