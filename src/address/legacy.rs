// Rust Bitcoin Library
// Written in 2014 by
//     Andrew Poelstra <apoelstra@wpsoftware.net>
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//
// Changes for rust-tapyrus is licensed as below.
// Copyright (c) 2019 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Legacy Base58Check addresses
//!
//! `base58check(version || hash)`, where the version byte selects network and
//! address type and the hash is 20 bytes.
//!
//! # Example: creating an address from a public key
//!
//! ```rust
//! use coinaddr::{AddressEncoding, LegacyAddress, Network, PublicKey};
//!
//! let bytes = [
//!     0x02, 0xed, 0xcd, 0xbe, 0xc9, 0xf7, 0x67, 0x66, 0x98, 0x1b, 0x1a,
//!     0xd5, 0x8d, 0x5e, 0x82, 0x7a, 0x51, 0x13, 0xfc, 0x81, 0xd2, 0x24,
//!     0x83, 0x5e, 0xc3, 0x63, 0x83, 0xc7, 0x93, 0x7a, 0xb0, 0x19, 0xbb,
//! ];
//! let public_key = PublicKey::from_slice(&bytes).unwrap();
//! let address = LegacyAddress::p2pkh(&public_key, Network::Mainnet);
//! assert_eq!(address.to_string(), "1HYEeWaMVQgCLWYArSbsSK4ZrvBHMxeVaN");
//! assert_eq!(address.public_key(), Some(&bytes[..]));
//! ```

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash as StdHash, Hasher};
use std::str::FromStr;

use hashes::{hash160, Hash};

use crate::address::cash::encode_cashaddr;
use crate::address::{decode_base58check, version, AddressEncoding, AddressType, Error, Malformed};
use crate::network::constants::Network;
use crate::util::base58;
use crate::util::key::PublicKey;

/// Length of the hash carried by a legacy address.
pub const HASH_LEN: usize = 20;

/// A legacy Base58Check address.
#[derive(Clone)]
pub struct LegacyAddress {
    network: Network,
    address_type: AddressType,
    data: Vec<u8>,
    public_key: Option<Vec<u8>>,
    base58: String,
    cashaddr: String,
}

impl LegacyAddress {
    /// Builds an address from a hash the caller has already computed. The
    /// hash is expected to be [`HASH_LEN`] bytes long.
    pub fn new(data: &[u8], address_type: AddressType, network: Network) -> LegacyAddress {
        LegacyAddress::build(data.to_vec(), address_type, network, None)
    }

    /// Creates a pay to public key hash address from a public key. The key
    /// is hashed in the serialization form its `compressed` flag selects.
    pub fn p2pkh(pk: &PublicKey, network: Network) -> LegacyAddress {
        let hash = pk.pubkey_hash();
        LegacyAddress::build(hash[..].to_vec(), AddressType::PubkeyHash, network, Some(pk.to_bytes()))
    }

    /// Creates a pay to script hash address from a redeem script.
    pub fn p2sh(script: &[u8], network: Network) -> LegacyAddress {
        let hash = <hash160::Hash as Hash>::hash(script);
        LegacyAddress::build(hash[..].to_vec(), AddressType::ScriptHash, network, None)
    }

    pub(crate) fn build(
        data: Vec<u8>,
        address_type: AddressType,
        network: Network,
        public_key: Option<Vec<u8>>,
    ) -> LegacyAddress {
        LegacyAddress {
            base58: encode_base58(network, address_type, &data),
            cashaddr: encode_cashaddr(network, address_type, &data),
            network,
            address_type,
            data,
            public_key,
        }
    }

    /// Parses the Base58Check-decoded body of an address, version byte first.
    pub(crate) fn from_body(body: &[u8]) -> Result<LegacyAddress, Error> {
        let (&version, hash) = body
            .split_first()
            .ok_or(Error::Invalid(Malformed::MissingVersionByte))?;
        let (network, address_type) = version::decode_version_byte(version)?;
        if hash.len() != HASH_LEN {
            return Err(Error::Invalid(Malformed::PayloadLength {
                expected: HASH_LEN,
                found: hash.len(),
            }));
        }
        Ok(LegacyAddress::build(hash.to_vec(), address_type, network, None))
    }
}

/// Base58Check string of `data` under the version byte of `network` and
/// `address_type`.
pub(crate) fn encode_base58(network: Network, address_type: AddressType, data: &[u8]) -> String {
    let mut prefixed = Vec::with_capacity(1 + data.len());
    prefixed.push(version::encode_version_byte(network, address_type));
    prefixed.extend_from_slice(data);
    base58::check_encode_slice(&prefixed)
}

impl AddressEncoding for LegacyAddress {
    fn network(&self) -> Network {
        self.network
    }

    fn address_type(&self) -> AddressType {
        self.address_type
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn public_key(&self) -> Option<&[u8]> {
        self.public_key.as_ref().map(|pk| &pk[..])
    }

    fn base58(&self) -> &str {
        &self.base58
    }

    fn cashaddr(&self) -> &str {
        &self.cashaddr
    }
}

impl PartialEq for LegacyAddress {
    fn eq(&self, other: &LegacyAddress) -> bool {
        self.network == other.network
            && self.address_type == other.address_type
            && self.data == other.data
    }
}

impl Eq for LegacyAddress {}

impl StdHash for LegacyAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.network.hash(state);
        self.address_type.hash(state);
        self.data.hash(state);
    }
}

impl Display for LegacyAddress {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&self.base58)
    }
}

impl fmt::Debug for LegacyAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl FromStr for LegacyAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<LegacyAddress, Error> {
        decode_base58check(s)
            .and_then(|body| LegacyAddress::from_body(&body))
            .map_err(|e| {
                trace!("rejected legacy address {:?}: {}", s, e);
                e
            })
    }
}

serde_string_impl!(LegacyAddress, "a legacy base58 address");
