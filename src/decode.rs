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

//! Functions and types for decoding base-41 data.

use super::alphabet;
use super::iter::{BaseIterator, Flatten, InspectBaseIterator};
use super::Digit;
use super::{BASE, BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

use core::array;
use core::convert::TryFrom;
use core::fmt::{self, Formatter};
use core::iter::{Fuse, FusedIterator, Take};
use core::str::Bytes;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// An error encountered while decoding base-41 data.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Three symbols decoded to a value greater than 65535.
    TripletOverflow(u32),
    /// Two trailing symbols decoded to a value greater than 255.
    DoubleOverflow(u16),
    /// Two trailing symbols decoded to a value less than 41, which should
    /// have been encoded as a single symbol.
    DoubleUnderflow(u16),
    /// When decoding 16-bit values, the number of symbols was not a multiple
    /// of three.
    BadLength,
    /// Encountered a byte outside the alphabet while
    /// [`DecodeConfig::strict`] was true.
    BadByte(u8),
}

use DecodeError as Error;

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    /// Whether the decoded value was too large.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::TripletOverflow(_) | Self::DoubleOverflow(_))
    }

    /// Whether the decoded value was too small.
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::DoubleUnderflow(_))
    }

    /// The out-of-range value, for overflow and underflow errors.
    pub fn value(&self) -> Option<u32> {
        match *self {
            Self::TripletOverflow(n) => Some(n),
            Self::DoubleOverflow(n) | Self::DoubleUnderflow(n) => {
                Some(n.into())
            }
            _ => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Self::TripletOverflow(n) => write!(
                f,
                "decoding three bytes gave a value ({}) greater than {}",
                n,
                u16::MAX,
            ),
            Self::DoubleOverflow(n) => write!(
                f,
                "decoding two bytes gave a value ({}) greater than {}",
                n,
                u8::MAX,
            ),
            Self::DoubleUnderflow(n) => write!(
                f,
                "decoding two bytes gave a value ({}) less than {}",
                n, BASE,
            ),
            Self::BadLength => write!(
                f,
                "bad input length: trailing symbols after last triplet",
            ),
            Self::BadByte(b) => write!(f, "bad byte: {:#04x}", b),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

fn decode_triplet(digits: [Digit; DIGITS_PER_CHUNK]) -> DecodeResult<u16> {
    let n = Digit::join_triplet(digits);
    u16::try_from(n).map_err(|_| Error::TripletOverflow(n))
}

fn decode_double(lo: Digit, hi: Digit) -> DecodeResult<u8> {
    let n = Digit::join_double(lo, hi);
    if n < BASE {
        return Err(Error::DoubleUnderflow(n));
    }
    u8::try_from(n).map_err(|_| Error::DoubleOverflow(n))
}

/// Used by the `decode_*_with` functions to configure the decoding process.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct DecodeConfig {
    /// If true, any byte that is not one of the 41 symbols in
    /// [`alphabet::ALPHABET`] causes [`DecodeError::BadByte`]. Otherwise,
    /// bytes that [`alphabet::value`] rejects are skipped, which allows
    /// whitespace and punctuation to appear in the input. [default: false]
    pub strict: bool,
}

impl DecodeConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            strict: false,
        }
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct BytesToDigits<I> {
    iter: I,
    config: DecodeConfig,
}

impl<I> BytesToDigits<I> {
    pub fn new(iter: I, config: DecodeConfig) -> Self {
        Self {
            iter,
            config,
        }
    }
}

impl<I: InspectBaseIterator> InspectBaseIterator for BytesToDigits<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.iter.base_iterator()
    }
}

impl<I> Iterator for BytesToDigits<I>
where
    I: Iterator<Item = u8>,
{
    type Item = DecodeResult<Digit>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.config.strict {
            let b = self.iter.next()?;
            Some(alphabet::unmap_symbol(b).ok_or(Error::BadByte(b)))
        } else {
            self.iter.find_map(alphabet::unmap_byte).map(Ok)
        }
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for BytesToDigits<I> {}

/// Pulls up to three digits from `iter`, stopping at the first error.
fn next_digits<I>(
    iter: &mut I,
) -> DecodeResult<([Digit; DIGITS_PER_CHUNK], usize)>
where
    I: Iterator<Item = DecodeResult<Digit>>,
{
    let mut digits = [Digit::ZERO; DIGITS_PER_CHUNK];
    let mut len = 0;
    iter.take(DIGITS_PER_CHUNK).try_for_each(|d| {
        d.map(|d| {
            digits[len] = d;
            len += 1;
        })
    })?;
    Ok((digits, len))
}

struct DigitsToUnflatBytes<I> {
    iter: I,
    failed: bool,
}

impl<I> DigitsToUnflatBytes<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            failed: false,
        }
    }
}

impl<I: InspectBaseIterator> InspectBaseIterator for DigitsToUnflatBytes<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.iter.base_iterator()
    }
}

type DigitsToUnflatBytesItem =
    Take<array::IntoIter<DecodeResult<u8>, BYTES_PER_CHUNK>>;

impl<I> Iterator for DigitsToUnflatBytes<I>
where
    I: FusedIterator<Item = DecodeResult<Digit>>,
{
    type Item = DigitsToUnflatBytesItem;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = next_digits(&mut self.iter).and_then(|(d, len)| {
            Ok(match len {
                0 => None,
                // Only a full triplet yields two bytes.
                1 => Some(([u8::from(d[0]), 0], 1)),
                2 => Some(([decode_double(d[0], d[1])?, 0], 1)),
                _ => Some((decode_triplet(d)?.to_be_bytes(), 2)),
            })
        });
        match result {
            Ok(None) => None,
            Ok(Some((bytes, len))) => {
                Some(IntoIterator::into_iter(bytes.map(Ok)).take(len))
            }
            Err(e) => {
                self.failed = true;
                Some(IntoIterator::into_iter([Err(e), Ok(0)]).take(1))
            }
        }
    }
}

impl<I: FusedIterator<Item = DecodeResult<Digit>>> FusedIterator
    for DigitsToUnflatBytes<I>
{
}

/// Iterator returned by [`decode_bytes`] and [`decode_str`].
#[allow(clippy::type_complexity)]
pub struct Decoder<I>(
    Flatten<
        DigitsToUnflatBytes<BytesToDigits<BaseIterator<Fuse<I>>>>,
        DigitsToUnflatBytesItem,
    >,
);

impl<I: Iterator> Decoder<I> {
    pub(crate) fn new(iter: I, config: DecodeConfig) -> Self {
        Self(Flatten::new(DigitsToUnflatBytes::new(BytesToDigits::new(
            BaseIterator(iter.fuse()),
            config,
        ))))
    }
}

impl<I> Iterator for Decoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = DecodeResult<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, f)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every input byte could be skipped, so there is no useful lower
        // bound.
        let (_, pending) = self.0.pending_hint();
        let (_, upper) = self.0.base_iterator().size_hint();
        (
            0,
            upper
                .map(|n| {
                    n / DIGITS_PER_CHUNK * BYTES_PER_CHUNK
                        + (n % DIGITS_PER_CHUNK != 0) as usize
                })
                .and_then(|n| n.checked_add(pending?)),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Decoder<I> {}

/// Iterator returned by [`decode_u16`].
pub struct U16Decoder<I> {
    iter: BytesToDigits<BaseIterator<Fuse<I>>>,
    failed: bool,
}

impl<I: Iterator> U16Decoder<I> {
    pub(crate) fn new(iter: I, config: DecodeConfig) -> Self {
        Self {
            iter: BytesToDigits::new(BaseIterator(iter.fuse()), config),
            failed: false,
        }
    }
}

impl<I> Iterator for U16Decoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = DecodeResult<u16>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = next_digits(&mut self.iter).and_then(|(d, len)| {
            match len {
                0 => Ok(None),
                DIGITS_PER_CHUNK => decode_triplet(d).map(Some),
                _ => Err(Error::BadLength),
            }
        });
        if result.is_err() {
            self.failed = true;
        }
        result.transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let (_, upper) = self.iter.base_iterator().size_hint();
        (
            0,
            upper.map(|n| {
                n / DIGITS_PER_CHUNK + (n % DIGITS_PER_CHUNK != 0) as usize
            }),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for U16Decoder<I> {}

/// Decodes base-41 data.
///
/// Bytes that are not part of the alphabet are skipped. Decoding stops after
/// the first error.
pub fn decode_bytes<I>(bytes: I) -> Decoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    decode_bytes_with(bytes, DecodeConfig::new())
}

/// Decodes a base-41 `str`.
pub fn decode_str(s: &str) -> Decoder<Bytes<'_>> {
    decode_str_with(s, DecodeConfig::new())
}

/// Decodes base-41 data as a sequence of 16-bit values.
///
/// Every three symbols become one value. If the symbol count is not a
/// multiple of three, the last item is [`DecodeError::BadLength`].
pub fn decode_u16<I>(bytes: I) -> U16Decoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    decode_u16_with(bytes, DecodeConfig::new())
}

/// Decodes base-41 data with the given config.
///
/// This function is like [`decode_bytes`], but takes a configuration object.
pub fn decode_bytes_with<I>(
    bytes: I,
    config: DecodeConfig,
) -> Decoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Decoder::new(bytes.into_iter(), config)
}

/// Decodes a base-41 `str` with the given config.
///
/// This function is like [`decode_str`], but takes a configuration object.
pub fn decode_str_with(s: &str, config: DecodeConfig) -> Decoder<Bytes<'_>> {
    Decoder::new(s.bytes(), config)
}

/// Decodes 16-bit values with the given config.
///
/// This function is like [`decode_u16`], but takes a configuration object.
pub fn decode_u16_with<I>(
    bytes: I,
    config: DecodeConfig,
) -> U16Decoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    U16Decoder::new(bytes.into_iter(), config)
}

/// Takes a decoder and stores the contents in a [`Vec`].
///
/// This is equivalent to calling [`decoder.collect()`](Iterator::collect).
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec<D, T, E>(decoder: D) -> Result<Vec<T>, E>
where
    D: Iterator<Item = Result<T, E>>,
{
    decoder.collect()
}
