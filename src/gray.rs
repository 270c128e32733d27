//! Reflected binary Gray code over N-bit vectors
//!
//! This is the order in which a Hilbert curve visits the 2^N sub-cells of a
//! cell before any reorientation is applied, and thus the starting point of
//! every other table computed by this crate.

use crate::{bits::BitVector, NumBits};

/// Gray code table: 2^N bit vectors of length N, in curve order
pub type GrayCode = Box<[BitVector]>;

/// Build the reflected binary Gray code of a certain dimension
///
/// The N-dimensional code is made of the (N-1)-dimensional code with a 0 bit
/// prepended, followed by the (N-1)-dimensional code traversed backwards with
/// a 1 bit prepended:
///
/// ```text
/// N=1: 0 1
/// N=2: 00 01 | 11 10
/// N=3: 000 001 011 010 | 110 111 101 100
/// ```
///
pub fn build(dimension: NumBits) -> GrayCode {
    assert!(dimension >= 1, "Gray codes need at least one dimension");
    if dimension == 1 {
        return vec![BitVector::zeros(1), BitVector::unit(1, 0)].into_boxed_slice();
    }

    let lower = build(dimension - 1);
    let mut codes = Vec::with_capacity(2 * lower.len());
    codes.extend(lower.iter().map(|code| code.prepend(false)));
    codes.extend(lower.iter().rev().map(|code| code.prepend(true)));
    codes.into_boxed_slice()
}

/// Build the inverse permutation of a Gray code
///
/// The output is indexed by packed Gray code value, and tells at which
/// position of the input sequence that value appears. Since a Gray code of
/// length 2^N enumerates every N-bit vector exactly once, every slot gets
/// filled.
///
pub fn inverse(codes: &[BitVector]) -> Box<[usize]> {
    let mut positions = vec![0; codes.len()];
    for (idx, code) in codes.iter().enumerate() {
        positions[code.pack::<usize>()] = idx;
    }
    positions.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::test_utils::*;
    use quickcheck::{quickcheck, TestResult};

    fn packed(dimension: NumBits) -> Vec<usize> {
        build(dimension).iter().map(|code| code.pack()).collect()
    }

    #[test]
    fn low_dimensions() {
        assert_eq!(&*build(1), &[bv("0"), bv("1")]);
        assert_eq!(&*build(2), &[bv("00"), bv("01"), bv("11"), bv("10")]);
        assert_eq!(packed(3), [0, 1, 3, 2, 6, 7, 5, 4]);
        assert_eq!(
            packed(4),
            [0, 1, 3, 2, 6, 7, 5, 4, 12, 13, 15, 14, 10, 11, 9, 8]
        );
    }

    #[test]
    fn permutation() {
        for dimension in 1..=12 {
            let codes = build(dimension);
            assert_eq!(codes.len(), 1 << dimension);
            assert!(codes.iter().all(|code| code.len() == dimension));
            let mut values = packed(dimension);
            values.sort_unstable();
            assert!(
                values.iter().copied().eq(0..(1 << dimension)),
                "Gray code of dimension {dimension} is not a permutation"
            );
        }
    }

    #[test]
    fn single_bit_steps() {
        for dimension in 1..=12 {
            let codes = build(dimension);
            for (idx, code) in codes.iter().enumerate() {
                let next = &codes[(idx + 1) % codes.len()];
                assert_eq!(
                    (code ^ next).count_ones(),
                    1,
                    "Codes {idx} ({code}) and its successor ({next}) should differ by one bit"
                );
            }
        }
    }

    #[test]
    fn inverse() {
        assert_eq!(&*super::inverse(&build(1)), &[0, 1]);
        assert_eq!(&*super::inverse(&build(2)), &[0, 1, 3, 2]);
        assert_eq!(&*super::inverse(&build(3)), &[0, 1, 3, 2, 7, 6, 4, 5]);
        for dimension in 1..=10 {
            let codes = build(dimension);
            let positions = super::inverse(&codes);
            for (idx, code) in codes.iter().enumerate() {
                assert_eq!(positions[code.pack::<usize>()], idx);
            }
        }
    }

    // The recursive construction must agree with the closed form i ^ (i >> 1)
    quickcheck! {
        fn closed_form(dimension: u8, idx: u16) -> TestResult {
            let dimension = NumBits::from(dimension % 12 + 1);
            let idx = usize::from(idx) % (1 << dimension);
            TestResult::from_bool(build(dimension)[idx].pack::<usize>() == idx ^ (idx >> 1))
        }
    }
}
