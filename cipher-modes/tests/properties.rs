//! Public API properties: round trips, output lengths, IV freshness, framing.

use std::collections::HashSet;

use cryptocore::{
    frame, mode_decrypt, mode_encrypt, open, padding, seal, unframe, CipherModeError,
    FramingConvention, Iv, Key, Mode,
};

const LENGTHS: [usize; 6] = [0, 1, 15, 16, 17, 1000];

fn key() -> Key {
    Key::from_hex("--000102030405060708090a0b0c0d0e0f").unwrap()
}

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

#[test]
fn round_trip_every_mode_and_length() {
    let iv = Iv::from_hex("a0a1a2a3a4a5a6a7a8a9aaabacadaeaf").unwrap();
    for mode in Mode::ALL {
        for len in LENGTHS {
            let plaintext = message(len);
            let encrypted = mode_encrypt(mode, &plaintext, &key(), Some(&iv)).unwrap();
            let decrypted = mode_decrypt(mode, &encrypted.ciphertext, &key(), encrypted.iv.as_ref()).unwrap();
            assert_eq!(decrypted, plaintext, "{} / {} bytes", mode, len);
        }
    }
}

#[test]
fn ciphertext_lengths() {
    for mode in Mode::ALL {
        for len in LENGTHS {
            let encrypted = mode_encrypt(mode, &message(len), &key(), None).unwrap();
            let expected = if mode.is_padded() { 16 * ((len + 1 + 15) / 16) } else { len };
            assert_eq!(encrypted.ciphertext.len(), expected, "{} / {} bytes", mode, len);
        }
    }
}

#[test]
fn generated_ivs_never_repeat() {
    for mode in [Mode::Cbc, Mode::Cfb, Mode::Ofb, Mode::Ctr] {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let encrypted = mode_encrypt(mode, b"x", &key(), None).unwrap();
            assert!(encrypted.iv_generated);
            assert!(seen.insert(*encrypted.iv.unwrap().as_bytes()), "{} repeated an IV", mode);
        }
    }
}

#[test]
fn padding_rejections() {
    let mut zero_tail = [0x41u8; 16];
    zero_tail[15] = 0;
    let mut too_long = [0x41u8; 16];
    too_long[15] = 17;
    let mut mismatch = [0x03u8; 16];
    mismatch[13] = 0x02;

    for bad in [&zero_tail[..], &too_long[..], &mismatch[..], &[][..]] {
        assert_eq!(padding::unpad(bad, 16), Err(CipherModeError::InvalidPadding));
    }
}

#[test]
fn ctr_counter_matches_independent_keystream() {
    let zero_key = Key::new([0u8; 16]);
    let zero_iv = Iv::new([0u8; 16]);
    let encrypted = mode_encrypt(Mode::Ctr, &[0x41u8; 32], &zero_key, Some(&zero_iv)).unwrap();

    // E(k, 0) and E(k, 1) via ECB on the two counter blocks
    let mut counters = [0u8; 32];
    counters[31] = 1;
    let ecb = mode_encrypt(Mode::Ecb, &counters, &zero_key, None).unwrap().ciphertext;

    for i in 0..32 {
        assert_eq!(encrypted.ciphertext[i] ^ 0x41, ecb[i]);
    }
}

#[test]
fn cbc_tamper_changes_output() {
    let iv = Iv::new([9u8; 16]);
    let plaintext = message(64);
    let mut ciphertext = mode_encrypt(Mode::Cbc, &plaintext, &key(), Some(&iv)).unwrap().ciphertext;
    ciphertext[20] ^= 0x01;
    let result = mode_decrypt(Mode::Cbc, &ciphertext, &key(), Some(&iv));
    assert_ne!(result, Ok(plaintext));
}

#[test]
fn framing_round_trip() {
    let iv = Iv::new([0x11u8; 16]);
    let ciphertext = message(40);
    for mode in [Mode::Cbc, Mode::Cfb, Mode::Ofb, Mode::Ctr] {
        let framed = frame(mode, Some(&iv), &ciphertext).unwrap();
        let (got_iv, got_ct) = unframe(mode, &framed, None, FramingConvention::Embedded).unwrap();
        assert_eq!(got_iv, Some(iv));
        assert_eq!(got_ct, &ciphertext[..]);
    }
    assert_eq!(frame(Mode::Ecb, Some(&iv), &ciphertext).unwrap(), ciphertext);
}

#[test]
fn sealed_file_opens_with_either_convention_when_no_override() {
    let sealed = seal(Mode::Ofb, Some(key()), None, b"file body").unwrap();
    for convention in [FramingConvention::Embedded, FramingConvention::Detached] {
        assert_eq!(open(Mode::Ofb, &key(), &sealed.framed, None, convention).unwrap(), b"file body".to_vec());
    }
}
