// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Internal helper functions for unit tests
//!
//!

use secp256k1::SecretKey;

pub fn decode_sk(sk_hex: &str) -> SecretKey {
    let sk = hex::decode(sk_hex).unwrap();
    SecretKey::from_slice(&sk[..]).unwrap()
}

pub fn decode_pk(pk_hex: &str) -> secp256k1::PublicKey {
    let pk = hex::decode(pk_hex).unwrap();
    secp256k1::PublicKey::from_slice(&pk[..]).unwrap()
}

pub fn pk_from(sk: &SecretKey) -> secp256k1::PublicKey {
    let secp = secp256k1::Secp256k1::signing_only();
    secp256k1::PublicKey::from_secret_key(&secp, sk)
}

pub fn decode_hash(hash_hex: &str) -> Vec<u8> {
    let hash = hex::decode(hash_hex).unwrap();
    assert_eq!(hash.len(), 20, "not a hash160: {}", hash_hex);
    hash
}

/// Base58Check-encodes a raw body, for building malformed fixtures.
pub fn check_encode(body_hex: &str) -> String {
    crate::util::base58::check_encode_slice(&hex::decode(body_hex).unwrap())
}
