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

//! Functions and types for encoding data as base-41.

use super::alphabet;
use super::iter::{BaseIterator, Flatten, InspectBaseIterator};
use super::Digit;
use super::{BYTES_PER_CHUNK, DIGITS_PER_CHUNK};

use core::array;
use core::iter::{Fuse, FusedIterator, Take};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

struct BytesToUnflatDigits<I>(I);

impl<I: InspectBaseIterator> InspectBaseIterator for BytesToUnflatDigits<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.0.base_iterator()
    }
}

type BytesToUnflatDigitsItem = Take<array::IntoIter<Digit, DIGITS_PER_CHUNK>>;

impl<I> Iterator for BytesToUnflatDigits<I>
where
    I: FusedIterator<Item = u8>,
{
    type Item = BytesToUnflatDigitsItem;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.0.next()?;
        let (digits, len) = match self.0.next() {
            Some(second) => (
                Digit::split_u16(u16::from_be_bytes([first, second])),
                DIGITS_PER_CHUNK,
            ),
            None => {
                // A lone byte is below 41 * 41, so its high digit is always
                // zero and the middle digit is `first / 41`.
                let digits = Digit::split_u16(first.into());
                (digits, 1 + (digits[1] != Digit::ZERO) as usize)
            }
        };
        Some(IntoIterator::into_iter(digits).take(len))
    }
}

impl<I: FusedIterator<Item = u8>> FusedIterator for BytesToUnflatDigits<I> {}

struct U16sToUnflatDigits<I>(I);

impl<I: InspectBaseIterator> InspectBaseIterator for U16sToUnflatDigits<I> {
    type Iter = I::Iter;

    fn base_iterator(&self) -> &Self::Iter {
        self.0.base_iterator()
    }
}

type U16sToUnflatDigitsItem = array::IntoIter<Digit, DIGITS_PER_CHUNK>;

impl<I> Iterator for U16sToUnflatDigits<I>
where
    I: Iterator<Item = u16>,
{
    type Item = U16sToUnflatDigitsItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Digit::split_u16).map(IntoIterator::into_iter)
    }
}

impl<I: FusedIterator<Item = u16>> FusedIterator for U16sToUnflatDigits<I> {}

struct DigitsToSymbols<I>(I);

impl<I> DigitsToSymbols<I> {
    fn inner(&self) -> &I {
        &self.0
    }
}

impl<I> Iterator for DigitsToSymbols<I>
where
    I: Iterator<Item = Digit>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(alphabet::map_digit)
    }

    fn fold<B, F>(self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.0.fold(init, |b, d| f(b, alphabet::map_digit(d)))
    }
}

impl<I: FusedIterator<Item = Digit>> FusedIterator for DigitsToSymbols<I> {}

/// Fewest and most symbols that `n` input bytes can encode to.
fn encoded_len(n: usize) -> (Option<usize>, Option<usize>) {
    let pairs = (n / BYTES_PER_CHUNK).checked_mul(DIGITS_PER_CHUNK);
    let odd = n % BYTES_PER_CHUNK;
    (
        pairs.and_then(|len| len.checked_add(odd)),
        pairs.and_then(|len| len.checked_add(odd * 2)),
    )
}

/// Iterator returned by [`encode_to_bytes`].
pub struct Encoder<I>(
    DigitsToSymbols<
        Flatten<
            BytesToUnflatDigits<BaseIterator<Fuse<I>>>,
            BytesToUnflatDigitsItem,
        >,
    >,
);

impl<I: Iterator> Encoder<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self(DigitsToSymbols(Flatten::new(BytesToUnflatDigits(
            BaseIterator(iter.fuse()),
        ))))
    }
}

impl<I> Iterator for Encoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = u8;

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
        let flat = self.0.inner();
        let (pending, _) = flat.pending_hint();
        let (lower, upper) = flat.base_iterator().size_hint();
        (
            encoded_len(lower)
                .0
                .map_or(usize::MAX, |n| n.saturating_add(pending)),
            upper
                .and_then(|n| encoded_len(n).1)
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I: Iterator<Item = u8>> FusedIterator for Encoder<I> {}

/// Iterator returned by [`encode_u16`].
pub struct U16Encoder<I>(
    DigitsToSymbols<
        Flatten<
            U16sToUnflatDigits<BaseIterator<Fuse<I>>>,
            U16sToUnflatDigitsItem,
        >,
    >,
);

impl<I: Iterator> U16Encoder<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self(DigitsToSymbols(Flatten::new(U16sToUnflatDigits(BaseIterator(
            iter.fuse(),
        )))))
    }
}

impl<I> Iterator for U16Encoder<I>
where
    I: Iterator<Item = u16>,
{
    type Item = u8;

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
        let flat = self.0.inner();
        let (pending, _) = flat.pending_hint();
        let (lower, upper) = flat.base_iterator().size_hint();
        (
            lower.saturating_mul(DIGITS_PER_CHUNK).saturating_add(pending),
            upper
                .and_then(|n| n.checked_mul(DIGITS_PER_CHUNK))
                .and_then(|n| n.checked_add(pending)),
        )
    }
}

impl<I: Iterator<Item = u16>> FusedIterator for U16Encoder<I> {}

/// Encodes a sequence of bytes as base-41 symbols.
///
/// Each pair of bytes becomes three symbols. If there is an odd byte at the
/// end, it becomes one symbol if its value is below 41, or two otherwise.
pub fn encode_to_bytes<I>(bytes: I) -> Encoder<I::IntoIter>
where
    I: IntoIterator<Item = u8>,
{
    Encoder::new(bytes.into_iter())
}

/// Encodes a sequence of 16-bit values, three symbols per value.
pub fn encode_u16<I>(values: I) -> U16Encoder<I::IntoIter>
where
    I: IntoIterator<Item = u16>,
{
    U16Encoder::new(values.into_iter())
}

/// Encodes a sequence of bytes and stores the symbols in a [`Vec`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_vec<I>(bytes: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    encode_to_bytes(bytes).collect()
}

/// Encodes a sequence of bytes as a [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string<I>(bytes: I) -> String
where
    I: IntoIterator<Item = u8>,
{
    // Every symbol is ASCII.
    encode_to_bytes(bytes).map(char::from).collect()
}

/// Encodes a sequence of 16-bit values and stores the symbols in a [`Vec`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_u16_to_vec<I>(values: I) -> Vec<u8>
where
    I: IntoIterator<Item = u16>,
{
    encode_u16(values).collect()
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn sanity() {
        assert_eq!(encode_to_vec(*b"John"), b"Omk2Uo");
        assert_eq!(encode_to_string(*b"John"), "Omk2Uo");
    }

    #[test]
    fn low_trailing_byte() {
        assert_eq!(encode_to_vec(*b"John!"), b"Omk2UoQ");
    }

    #[test]
    fn high_trailing_byte() {
        assert_eq!(encode_to_vec(*b"John)"), b"Omk2Uo01");
    }

    #[test]
    fn empty() {
        assert_eq!(encode_to_bytes(None).next(), None);
        assert_eq!(encode_to_string(vec![]), "");
    }

    #[test]
    fn nulls() {
        assert_eq!(encode_to_vec(vec![0; 200]), b"000".repeat(100));
        assert_eq!(encode_to_vec([0; 3]), b"0000");
    }

    #[test]
    fn maximum() {
        assert_eq!(encode_to_vec(vec![0xff; 200]), b"AXV".repeat(100));
        assert_eq!(encode_to_vec([0xff; 3]), b"AXV96");
    }

    #[test]
    fn singles() {
        for (v, s) in alphabet::ALPHABET.iter().copied().enumerate() {
            assert_eq!(encode_to_vec([v as u8]), [s]);
        }
        assert_eq!(encode_to_vec([41]), b"01");
        assert_eq!(encode_to_vec([255]), b"96");
    }

    #[test]
    fn size_hint_bounds_output() {
        for len in 0..8 {
            let input = vec![0xab; len];
            let mut encoder = encode_to_bytes(input.clone());
            let expected = encode_to_vec(input).len();
            let (lower, upper) = encoder.size_hint();
            assert!(lower <= expected && upper.map_or(false, |n| n >= expected));
            if encoder.next().is_some() {
                let (lower, upper) = encoder.size_hint();
                assert!(lower < expected);
                assert!(upper.map_or(false, |n| n >= expected - 1));
            }
        }
    }

    #[test]
    fn fold_after_next() {
        let mut encoder = encode_to_bytes(*b"John");
        assert_eq!(encoder.next(), Some(b'O'));
        let rest = encoder.fold(Vec::new(), |mut v, b| {
            v.push(b);
            v
        });
        assert_eq!(rest, b"mk2Uo");
    }

    #[test]
    fn u16_values() {
        assert_eq!(encode_u16_to_vec([0x4a6f, 0x686e]), b"Omk2Uo");
        assert_eq!(encode_u16_to_vec([0, 40, 41, u16::MAX]), b"000X00010AXV");
        assert_eq!(encode_u16(vec![7; 5]).size_hint(), (15, Some(15)));
    }

    #[test]
    fn utf16() {
        let text = "\u{4e2d}\u{534e}\u{4eba}\u{6c11}\u{5171}\u{548c}\u{56fd}";
        assert_eq!(
            encode_u16_to_vec(text.encode_utf16()),
            b"5Uk6LlGXkOBpEplUSl6jm",
        );
    }
}
