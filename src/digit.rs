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

use super::{BASE, DIGITS_PER_CHUNK};

/// A base-41 digit: always less than 41.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    pub fn new(x: u8) -> Option<Self> {
        (u16::from(x) < BASE).then(|| Self(x))
    }

    /// Splits `n` into its quotient and lowest base-41 digit.
    pub fn divmod(n: u16) -> (u16, Self) {
        // `n % BASE` is always less than 41, so it fits in a `u8`.
        (n / BASE, Self((n % BASE) as u8))
    }

    /// Splits `n` into three digits, lowest first.
    pub fn split_u16(n: u16) -> [Self; DIGITS_PER_CHUNK] {
        let (himid, lo) = Self::divmod(n);
        let (hi, mid) = Self::divmod(himid);
        // `hi` is at most 65535 / 1681 = 38.
        [lo, mid, Self(hi as u8)]
    }

    /// Combines three digits, lowest first. The result can exceed
    /// [`u16::MAX`] (up to 68920), so callers must range-check it.
    pub fn join_triplet(digits: [Self; DIGITS_PER_CHUNK]) -> u32 {
        let [lo, mid, hi] = digits.map(u32::from);
        let base = u32::from(BASE);
        lo + base * (mid + base * hi)
    }

    /// Combines two digits, lowest first.
    pub fn join_double(lo: Self, hi: Self) -> u16 {
        u16::from(lo) + BASE * u16::from(hi)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for u16 {
    fn from(d: Digit) -> u16 {
        d.0.into()
    }
}

impl From<Digit> for u32 {
    fn from(d: Digit) -> u32 {
        d.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Digit::new(40).map(u8::from), Some(40));
        assert!(Digit::new(41).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn split_extremes() {
        assert_eq!(Digit::split_u16(0), [Digit::ZERO; 3]);
        assert_eq!(Digit::split_u16(u16::MAX).map(u8::from), [17, 40, 38]);
        assert_eq!(Digit::split_u16(1681).map(u8::from), [0, 0, 1]);
    }

    #[test]
    fn join_inverts_split() {
        for n in (0..=u16::MAX).step_by(97).chain([u16::MAX]) {
            let joined = Digit::join_triplet(Digit::split_u16(n));
            assert_eq!(joined, u32::from(n));
        }
    }

    #[test]
    fn join_max_exceeds_u16() {
        let max = Digit::new(40).unwrap();
        assert_eq!(Digit::join_triplet([max; 3]), 68920);
        assert_eq!(Digit::join_double(max, max), 1680);
    }
}
