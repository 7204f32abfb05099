//! Hash Tests
//!
//! Tests verify:
//! - Known outputs for every tail length
//! - Determinism across calls
//! - Sensitivity to length and byte position

use kvcore::hash;
use kvcore::hash::SEED;

// =============================================================================
// Known Value Tests
// =============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(hash(b""), SEED);
}

#[test]
fn test_known_values() {
    assert_eq!(hash(b"a"), 0x286e_9db0);
    assert_eq!(hash(b"ab"), 0x39ac_a330);
    assert_eq!(hash(b"abc"), 0x855d_012f);
    assert_eq!(hash(b"abcd"), 0xb9c8_3353);
    assert_eq!(hash(b"alpha"), 0xe415_5f8a);
    assert_eq!(hash(b"hello world"), 0x008d_fddb);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[test]
fn test_same_input_same_output() {
    let key = b"user:000042:profile";
    let first = hash(key);
    for _ in 0..100 {
        assert_eq!(hash(key), first);
    }
    assert_eq!(hash(&key.to_vec()), first);
}

#[test]
fn test_length_is_mixed_in() {
    // Trailing zero bytes still change the digest
    assert_ne!(hash(b"\x00"), hash(b""));
    assert_ne!(hash(b"\x00\x00\x00\x00"), hash(b"\x00\x00\x00"));
}

#[test]
fn test_byte_order_matters() {
    assert_ne!(hash(b"ab"), hash(b"ba"));
    assert_ne!(hash(b"abcdefgh"), hash(b"efghabcd"));
}
