//! Utility functions for cipher modes

/// XOR `src` into the front of `dst`, stopping at the shorter of the two.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
