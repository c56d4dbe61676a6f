//! The input-mixing / reduction hash function that consumes the [`ByteMap`].
//!
//! `hash` is a pure, stateless function: no I/O, no hidden state, safe to
//! call concurrently from many threads against the same `&ByteMap`.

use {
    crate::{
        arith::{shl, shr},
        bytemap::ByteMap,
    },
    docext::docext,
};

/// Computes the LXRHash digest of `src` against `map`, producing
/// `digest_len` bytes.
///
/// `seed_int` must be the same seed the owning [`Lxr`](crate::Lxr) was
/// constructed with; it seeds the `a` register exactly as it seeds the
/// ByteMap's shuffle phase.
///
/// The digest is produced in three phases over a shared lookup $B(x) =
/// \mathrm{map}[x \bmod M]$ ($M$ the ByteMap size): a fast spin that
/// perturbs `a` and `s1` per input byte without touching `map`, a main
/// mixing loop that folds each input byte through [`mix`] into a running
/// `h[0..D)`, and a reduction pass that runs [`mix`] once more per digest
/// word, walking `i` from `D - 1` down to `0`, to fold `a`, `s1`, `s2`, `s3`
/// and `h` down to `D` output bytes.
#[docext]
pub(crate) fn hash(map: &ByteMap, seed_int: u64, digest_len: usize, src: &[u8]) -> Vec<u8> {
    let mut h = vec![0u64; digest_len];
    let mut a = seed_int;
    let mut s1 = 0u64;
    let mut s2 = 0u64;
    let mut s3 = 0u64;

    // Phase A: fast spin, to perturb the initial state before any ByteMap
    // lookups happen. Deliberately ignores the input byte value and the
    // ByteMap.
    let mut index = 0usize;
    for _ in src {
        if index >= digest_len {
            index = 0;
        }
        a = shl(index as u64, 1) ^ shl(a, 7) ^ shr(a, 5);
        s1 = shl(s1, 9) ^ shr(s1, 3) ^ a;
        h[index] = s1 ^ a;
        (a, s1, s2, s3) = (s3, a, s1, s2);
        index += 1;
    }

    // Phase B: main mixing loop, continuing from Phase A's state with index
    // reset to zero.
    let mut index = 0usize;
    for &byte in src {
        let bit = byte as u64;
        mix(map, bit, &mut a, &mut s1, &mut s2, &mut s3, &mut h[index]);
        index += 1;
        if index == digest_len {
            index = 0;
        }
    }

    // Phase C: reduction, applying exactly the same mixing block with
    // `bit := h[i]`, walking `i` from D-1 down to 0.
    let mut out = vec![0u8; digest_len];
    for i in (0..digest_len).rev() {
        let bit = h[i];
        mix(map, bit, &mut a, &mut s1, &mut s2, &mut s3, &mut h[i]);
        out[i] = (map.get(a) ^ map.get(h[i])) as u8;
    }
    out
}

/// The 28-statement mixing block shared by Phase B (per input byte) and
/// Phase C (per digest word, reusing `h[i]` in place of the input byte).
///
/// `slot` is `h[index]` in Phase B and `h[i]` in Phase C; the block both
/// reads and overwrites it, then rotates `(s1, s2, s3)`.
#[inline]
fn mix(map: &ByteMap, bit: u64, a: &mut u64, s1: &mut u64, s2: &mut u64, s3: &mut u64, slot: &mut u64) {
    let b = |x: u64| map.get(x);

    *s1 = shl(*s1, 9) ^ shr(*s1, 1) ^ *a ^ shl(b(shr(*a, 5) ^ bit), 3);
    *s1 = shl(*s1, 5) ^ shr(*s1, 3) ^ shl(b(*s1 ^ bit), 7);
    *s1 = shl(*s1, 7) ^ shr(*s1, 7) ^ shl(b(*a ^ shr(*s1, 7)), 5);
    *s1 = shl(*s1, 11) ^ shr(*s1, 5) ^ shl(b(bit ^ shr(*a, 11) ^ *s1), 27);

    *slot = *s1 ^ *a ^ shl(*slot, 7) ^ shr(*slot, 13);

    *a = shl(*a, 17) ^ shr(*a, 5) ^ *s1 ^ shl(b(*a ^ shr(*s1, 27) ^ bit), 3);
    *a = shl(*a, 13) ^ shr(*a, 3) ^ shl(b(*a ^ *s1), 7);
    *a = shl(*a, 15) ^ shr(*a, 7) ^ shl(b(shr(*a, 7) ^ *s1), 11);
    *a = shl(*a, 9) ^ shr(*a, 11) ^ shl(b(bit ^ *a ^ *s1), 3);

    *s1 = shl(*s1, 7) ^ shr(*s1, 27) ^ *a ^ shl(b(shr(*a, 3)), 13);
    *s1 = shl(*s1, 3) ^ shr(*s1, 13) ^ shl(b(*s1 ^ bit), 11);
    *s1 = shl(*s1, 8) ^ shr(*s1, 11) ^ shl(b(*a ^ shr(*s1, 11)), 9);
    *s1 = shl(*s1, 6) ^ shr(*s1, 9) ^ shl(b(bit ^ *a ^ *s1), 3);

    *a = shl(*a, 23) ^ shr(*a, 3) ^ *s1 ^ shl(b(*a ^ bit ^ shr(*s1, 3)), 7);
    *a = shl(*a, 17) ^ shr(*a, 7) ^ shl(b(*a ^ shr(*s1, 3)), 5);
    *a = shl(*a, 13) ^ shr(*a, 5) ^ shl(b(shr(*a, 5) ^ *s1), 1);
    *a = shl(*a, 11) ^ shr(*a, 1) ^ shl(b(bit ^ *a ^ *s1), 7);

    *s1 = shl(*s1, 5) ^ shr(*s1, 3) ^ *a ^ shl(b(shr(*a, 7) ^ shr(*s1, 3)), 6);
    *s1 = shl(*s1, 8) ^ shr(*s1, 6) ^ shl(b(*s1 ^ bit), 11);
    *s1 = shl(*s1, 11) ^ shr(*s1, 11) ^ shl(b(*a ^ shr(*s1, 11)), 5);
    *s1 = shl(*s1, 7) ^ shr(*s1, 5) ^ shl(b(bit ^ shr(*a, 7) ^ *a ^ *s1), 17);

    *s2 = shl(*s2, 3) ^ shr(*s2, 17) ^ *s1 ^ shl(b(*a ^ shr(*s2, 5) ^ bit), 13);
    *s2 = shl(*s2, 6) ^ shr(*s2, 13) ^ shl(b(*s2), 11);
    *s2 = shl(*s2, 11) ^ shr(*s2, 11) ^ shl(b(*a ^ *s1 ^ shr(*s2, 11)), 23);
    *s2 = shl(*s2, 4) ^ shr(*s2, 23) ^ shl(b(bit ^ shr(*a, 8) ^ *a ^ shr(*s2, 10)), 1);

    *s1 = shl(*s2, 3) ^ shr(*s2, 1) ^ *slot ^ bit;
    *a = shl(*a, 9) ^ shr(*a, 7) ^ shr(*s1, 1) ^ shl(b(shr(*s2, 1) ^ *slot), 5);

    (*s1, *s2, *s3) = (*s3, *s1, *s2);
}
