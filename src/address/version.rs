// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Version bytes
//!
//! Base58Check addresses carry a version byte chosen per network and address
//! type from the registry in [`crate::network::constants`]. CashAddr carries
//! its own version byte, independent of network, laid out as
//!
//! ```text
//!   bit  7    : reserved, zero
//!   bits 6..3 : address type (0 = pubkey hash, 1 = script hash)
//!   bits 2..0 : size class of the hash that follows
//! ```

use crate::address::{AddressType, Error};
use crate::network::constants::{legacy_candidates, stealth_candidates, Network};

const RESERVED_BIT: u8 = 0x80;
const TYPE_MASK: u8 = 0x78;
const SIZE_MASK: u8 = 0x07;

const PUBKEY_HASH_TYPE: u8 = 0x00;
const SCRIPT_HASH_TYPE: u8 = 0x08;

/// Hash length in bytes for each size class.
const HASH_SIZES: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

/// Base58Check version byte of `address_type` on `network`.
pub fn encode_version_byte(network: Network, address_type: AddressType) -> u8 {
    network.params().version_byte(address_type)
}

/// Network and address type of a pubkey-hash or script-hash version byte.
/// The first matching registry rule wins.
pub fn decode_version_byte(byte: u8) -> Result<(Network, AddressType), Error> {
    legacy_candidates(byte)
        .next()
        .map(|rule| (rule.network, rule.address_type))
        .ok_or(Error::InvalidVersionByte(byte))
}

/// Network of a stealth version byte. The first matching registry rule wins.
pub fn decode_stealth_version_byte(byte: u8) -> Result<Network, Error> {
    stealth_candidates(byte)
        .next()
        .map(|rule| rule.network)
        .ok_or(Error::InvalidVersionByte(byte))
}

/// Size class of a hash length, if the length has one.
pub fn size_class(hash_len: usize) -> Option<u8> {
    HASH_SIZES.iter().position(|&size| size == hash_len).map(|class| class as u8)
}

/// Hash length declared by a CashAddr version byte.
pub fn hash_size(version: u8) -> usize {
    HASH_SIZES[(version & SIZE_MASK) as usize]
}

/// CashAddr version byte for a hash of `hash_len` bytes. `None` for stealth
/// addresses and for lengths without a size class.
pub fn encode_cashaddr_version(address_type: AddressType, hash_len: usize) -> Option<u8> {
    let type_bits = match address_type {
        AddressType::PubkeyHash => PUBKEY_HASH_TYPE,
        AddressType::ScriptHash => SCRIPT_HASH_TYPE,
        AddressType::StealthHash => return None,
    };
    Some(type_bits | size_class(hash_len)?)
}

/// Address type of a CashAddr version byte, checking that the hash that
/// followed it has the declared size.
pub fn decode_cashaddr_version(version: u8, hash_len: usize) -> Result<AddressType, Error> {
    if version & RESERVED_BIT != 0 || hash_len != hash_size(version) {
        return Err(Error::InvalidVersionByte(version));
    }
    match version & TYPE_MASK {
        PUBKEY_HASH_TYPE => Ok(AddressType::PubkeyHash),
        SCRIPT_HASH_TYPE => Ok(AddressType::ScriptHash),
        _ => Err(Error::InvalidVersionByte(version)),
    }
}
