//! The 5-symbol nucleotide alphabet shared by the index and the embedding.
//!
//! `A`/`a` and `N`/`n` map to 0, `C`/`c` to 1, `G`/`g` to 2, `T`/`t` to 3;
//! every other byte maps to the wildcard code 4. The wildcard cannot be
//! represented losslessly in the 2-bit k-mer packing, where it aliases with
//! code 0; the matcher's distance check filters out the spurious seeds this
//! produces.

/// Number of symbol codes, wildcard included.
pub const N_CODES: usize = 5;

/// Code for bases outside `ACGTN`, and the padding symbol emitted when an
/// embedding walk runs past the end of its source.
pub const WILDCARD: u8 = 4;

/// 256-entry byte-to-code table.
pub static CODE_LUT: [u8; 256] = {
    let mut t = [WILDCARD; 256];
    t[b'A' as usize] = 0;
    t[b'a' as usize] = 0;
    t[b'N' as usize] = 0;
    t[b'n' as usize] = 0;
    t[b'C' as usize] = 1;
    t[b'c' as usize] = 1;
    t[b'G' as usize] = 2;
    t[b'g' as usize] = 2;
    t[b'T' as usize] = 3;
    t[b't' as usize] = 3;
    t
};

/// Map one byte to its alphabet code.
#[inline]
pub fn code(b: u8) -> u8 {
    CODE_LUT[b as usize]
}

/// Encode a sequence into alphabet codes.
pub fn encode(seq: &str) -> Vec<u8> {
    seq.bytes().map(code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bases_map_case_insensitively() {
        assert_eq!(encode("ACGT"), vec![0, 1, 2, 3]);
        assert_eq!(encode("acgt"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn n_maps_to_a_and_unknowns_to_wildcard() {
        assert_eq!(code(b'N'), 0);
        assert_eq!(code(b'n'), 0);
        assert_eq!(code(b'X'), WILDCARD);
        assert_eq!(code(b'-'), WILDCARD);
        assert_eq!(code(b'U'), WILDCARD);
    }
}
