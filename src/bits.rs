//! Bit vector utilities used for Hilbert table computations

use crate::NumBits;
use core::{
    fmt,
    ops::{BitAnd, BitXor},
};
use num_traits::{PrimInt, Unsigned};

/// Count the number of bits of an integer
#[inline(always)]
pub const fn num_bits<T>() -> NumBits {
    (core::mem::size_of::<T>() * 8) as _
}

/// Shift a bit into the low-order end of an integer
///
/// Pushing bits [ b1 b2 ... bN ] in order into a zero-initialized integer
/// produces the integer whose binary digits, most significant first, are
/// [ b1 b2 ... bN ].
///
#[inline(always)]
pub fn push_bit<I: PrimInt + Unsigned>(target: &mut I, bit: bool) {
    let bit = if bit { I::one() } else { I::zero() };
    *target = (*target << 1) | bit
}

/// Ordered sequence of bits, one per coordinate axis
///
/// Axis 0 comes first, and becomes the most significant bit once the vector is
/// packed into an integer with [`BitVector::pack()`]. All vectors that take
/// part in the same table computation have the same length, namely the
/// dimension of the space being covered by the Hilbert curve.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitVector(Box<[bool]>);
//
impl BitVector {
    /// Vector of `len` cleared bits
    pub fn zeros(len: NumBits) -> Self {
        Self(vec![false; len as usize].into_boxed_slice())
    }

    /// Vector of `len` bits where only the bit of axis `axis` is set
    pub fn unit(len: NumBits, axis: NumBits) -> Self {
        assert!(axis < len, "Axis {axis} is out of range for length {len}");
        let mut bits = vec![false; len as usize];
        bits[axis as usize] = true;
        Self(bits.into_boxed_slice())
    }

    /// Vector made of `bit` followed by the bits of `self`
    pub fn prepend(&self, bit: bool) -> Self {
        core::iter::once(bit).chain(self.0.iter().copied()).collect()
    }

    /// Number of bits, i.e. number of coordinate axes
    pub fn len(&self) -> NumBits {
        self.0.len() as _
    }

    /// Truth that this vector has no bits at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bits of this vector, axis 0 first
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    /// Number of set bits
    pub fn count_ones(&self) -> NumBits {
        self.0.iter().filter(|&&bit| bit).count() as _
    }

    /// Pack the bits into an integer, most significant bit first
    ///
    /// The caller must pick an integer type that has at least `self.len()`
    /// bits, otherwise the leading bits are shifted out.
    ///
    pub fn pack<I: PrimInt + Unsigned>(&self) -> I {
        debug_assert!(self.0.len() <= core::mem::size_of::<I>() * 8);
        let mut packed = I::zero();
        for &bit in self.0.iter() {
            push_bit(&mut packed, bit);
        }
        packed
    }

    // Apply a binary operation to every pair of same-axis bits
    fn zip_with(&self, other: &Self, op: impl Fn(bool, bool) -> bool) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "Bit vectors of different lengths cannot be combined"
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(&a, &b)| op(a, b))
            .collect()
    }
}
//
impl FromIterator<bool> for BitVector {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
//
impl BitXor for &BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: Self) -> BitVector {
        self.zip_with(rhs, |a, b| a ^ b)
    }
}
//
impl BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: Self) -> BitVector {
        self.zip_with(rhs, |a, b| a & b)
    }
}
//
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.0.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::{test_utils::*, *};
    use quickcheck::quickcheck;

    #[test]
    fn num_bits() {
        assert_eq!(super::num_bits::<u8>(), 8);
        assert_eq!(super::num_bits::<u16>(), 16);
        assert_eq!(super::num_bits::<u32>(), 32);
        assert_eq!(super::num_bits::<u64>(), 64);
        assert_eq!(super::num_bits::<u128>(), 128);
    }

    #[test]
    fn push_bit() {
        let mut target = 0u8;
        for bit in [true, false, true, true] {
            super::push_bit(&mut target, bit);
        }
        assert_eq!(target, 0b1011);
    }

    #[test]
    fn constructors() {
        assert_eq!(BitVector::zeros(3), bv("000"));
        assert_eq!(BitVector::unit(3, 0), bv("100"));
        assert_eq!(BitVector::unit(3, 2), bv("001"));
        assert_eq!(bv("01").prepend(true), bv("101"));
        assert_eq!(bv("").prepend(false), bv("0"));
        assert!(BitVector::default().is_empty());
    }

    #[test]
    #[should_panic]
    fn unit_out_of_range() {
        BitVector::unit(2, 2);
    }

    #[test]
    fn pack() {
        assert_eq!(bv("0").pack::<u32>(), 0);
        assert_eq!(bv("1").pack::<u32>(), 1);
        assert_eq!(bv("110").pack::<u32>(), 6);
        assert_eq!(bv("0011").pack::<u8>(), 3);
        assert_eq!(BitVector::unit(32, 0).pack::<u32>(), 1 << 31);
    }

    #[test]
    fn display() {
        assert_eq!(bv("0110").to_string(), "0110");
        assert_eq!(BitVector::default().to_string(), "");
    }

    #[test]
    #[should_panic]
    fn mismatched_lengths() {
        let _ = &bv("01") ^ &bv("011");
    }

    // Element-wise operators must agree with the same operators applied to the
    // packed integer representation.
    quickcheck! {
        fn elementwise_ops(a: u16, b: u16) -> bool {
            let (va, vb) = (unpack(a as u64, 16), unpack(b as u64, 16));
            (&va ^ &vb).pack::<u16>() == a ^ b
                && (&va & &vb).pack::<u16>() == a & b
                && va.count_ones() == a.count_ones()
        }

        fn pack_unpack(value: u32) -> bool {
            unpack(value as u64, 32).pack::<u32>() == value
        }
    }
}
