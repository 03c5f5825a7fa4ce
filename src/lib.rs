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

//! Base41 encodes pairs of bytes as three ASCII characters drawn from an
//! alphabet of only letters and digits:
//!
//! ```text
//! 0123456789jklmnopABCDEFGHIJKLMNOPQRSTUVWX
//! ```
//!
//! Every character is safe in filenames, paths, and URIs, so there is no need
//! for the alternate alphabets and padding that base64 requires. A single
//! trailing byte is encoded as one character if its value is below 41, or two
//! characters otherwise.
//!
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! // a98bd614-b023-45c2-99b1-057a3edeff92
//! let uuid = [
//!     0xa9, 0x8b, 0xd6, 0x14, 0xb0, 0x23, 0x45, 0xc2,
//!     0x99, 0xb1, 0x05, 0x7a, 0x3e, 0xde, 0xff, 0x92,
//! ];
//! let encoded = base41::encode_to_string(uuid.iter().copied());
//! assert_eq!(encoded, "IQILHPPQJGIjJpG8R0FG9OUV");
//!
//! let decoded = base41::decode_to_vec(base41::decode_str(&encoded));
//! assert_eq!(decoded.unwrap(), uuid);
//! # }
//! ```
//!
//! When decoding, bytes outside the alphabet (such as whitespace, `-`, or
//! `/`) are skipped by default, so encoded data may be broken up with
//! separators. See [`decode::DecodeConfig`] for a strict mode.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

pub mod alphabet;
pub mod decode;
mod digit;
pub mod encode;
mod iter;

#[cfg(feature = "alloc")]
extern crate alloc;

const BASE: u16 = 41;

const BYTES_PER_CHUNK: usize = 2;
const DIGITS_PER_CHUNK: usize = 3;

use digit::Digit;

pub use decode::decode_bytes;
pub use decode::decode_str;
#[cfg(feature = "alloc")]
pub use decode::decode_to_vec;
pub use decode::decode_u16;
pub use decode::{DecodeError, DecodeResult};

pub use encode::encode_to_bytes;
#[cfg(feature = "alloc")]
pub use encode::encode_to_string;
#[cfg(feature = "alloc")]
pub use encode::encode_to_vec;
pub use encode::encode_u16;
#[cfg(feature = "alloc")]
pub use encode::encode_u16_to_vec;
