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

//! The base-41 alphabet.
//!
//! Each symbol `s` in [`ALPHABET`] satisfies `s % 48 == value`. The lenient
//! decoding filter relies on the same rule, which means a handful of
//! printable bytes outside the alphabet (for example `(`, `#`, and lowercase
//! `q`–`z`) also decode to a value. See [`value`].

use super::Digit;

/// The 41 symbols, indexed by value.
pub const ALPHABET: &[u8; 41] = b"0123456789jklmnopABCDEFGHIJKLMNOPQRSTUVWX";

const MODULUS: u8 = 48;

/// Returns the symbol for `value`, or [`None`] if `value` is not less than
/// 41.
pub fn symbol(value: u8) -> Option<u8> {
    ALPHABET.get(usize::from(value)).copied()
}

/// Returns the value of `byte` as the lenient decoder sees it.
///
/// Any printable, non-space ASCII byte whose remainder modulo 48 is less
/// than 41 is accepted with that remainder as its value. Every other byte is
/// noise and yields [`None`].
pub fn value(byte: u8) -> Option<u8> {
    unmap_byte(byte).map(u8::from)
}

/// Returns whether `byte` is one of the 41 symbols in [`ALPHABET`].
pub fn is_symbol(byte: u8) -> bool {
    unmap_symbol(byte).is_some()
}

pub(crate) fn map_digit(d: Digit) -> u8 {
    ALPHABET[usize::from(u8::from(d))]
}

pub(crate) fn unmap_byte(byte: u8) -> Option<Digit> {
    if (33..127).contains(&byte) {
        Digit::new(byte % MODULUS)
    } else {
        None
    }
}

pub(crate) fn unmap_symbol(byte: u8) -> Option<Digit> {
    unmap_byte(byte).filter(|d| map_digit(*d) == byte)
}
