use bitvec::prelude::*;

/// growing sequence of code-path bits, in original-text order
pub type Bits = BitVec<u8, Msb0>;

/// Pack a bit sequence into bytes, eight bits per byte, most-significant-bit
/// first. A trailing group of fewer than eight bits is shifted up so the
/// remaining low-order bits are zero padding. Nothing records how much
/// padding was added.
pub fn pack(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            let mut byte = 0u8;
            for bit in chunk.iter().by_vals() {
                byte = (byte << 1) | bit as u8;
            }
            byte << (8 - chunk.len())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// read bytes back most-significant-bit first, stopping at `bit_count`
    fn unpack(bytes: &[u8], bit_count: usize) -> Bits {
        (0..bit_count)
            .map(|i| (bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
            .collect()
    }

    #[test]
    fn empty_sequence_packs_to_no_bytes() {
        assert!(pack(&Bits::new()).is_empty());
    }

    #[test]
    fn full_byte_packs_msb_first() {
        let bits = bitvec![u8, Msb0; 1, 0, 1, 1, 0, 0, 1, 0];
        assert_eq!(pack(&bits), vec![0b1011_0010]);
    }

    #[test]
    fn partial_byte_is_zero_padded_low() {
        let bits = bitvec![u8, Msb0; 0, 0, 0, 1];
        assert_eq!(pack(&bits), vec![0b0001_0000]);
    }

    #[test]
    fn trailing_chunk_lands_in_high_bits() {
        let bits = bitvec![u8, Msb0; 1, 1, 1, 1, 1, 1, 1, 1, 0, 1];
        assert_eq!(pack(&bits), vec![0b1111_1111, 0b0100_0000]);
    }

    #[test]
    fn unpacking_with_known_length_round_trips() {
        let bits = bitvec![u8, Msb0; 1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0];
        let bytes = pack(&bits);
        assert_eq!(unpack(&bytes, bits.len()), bits);
    }

    #[test]
    fn padding_bits_are_zero() {
        let bits = bitvec![u8, Msb0; 1, 1, 1];
        let bytes = pack(&bits);
        assert_eq!(bytes.len(), 1);
        assert_eq!(bytes[0] & 0b0001_1111, 0);
    }
}
