// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Stealth addresses
//!
//! A stealth address wraps a fixed 71-byte record in Base58Check:
//!
//! ```text
//!   offset  size  field
//!        0     1  version byte of the network
//!        1     1  options, zero
//!        2    33  scan public key
//!       35     1  scan key count, one
//!       36    33  spend public key
//!       69     1  spend key count, one
//!       70     1  prefix length, zero
//! ```
//!
//! Only the Base58Check form exists; the CashAddr string of a stealth
//! address is empty.

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash as StdHash, Hasher};
use std::str::FromStr;

use crate::address::{decode_base58check, version, AddressEncoding, AddressType, Error, Malformed};
use crate::network::constants::Network;
use crate::util::base58;

/// Length of a serialized compressed public key.
pub const KEY_LEN: usize = 33;

/// Length of the stealth record, version byte included.
pub const RECORD_LEN: usize = 2 * KEY_LEN + 5;

const OPTIONS: u8 = 0;
const KEY_COUNT: u8 = 1;
const PREFIX_LEN: u8 = 0;

const SCAN_KEY_OFFSET: usize = 2;
const SPEND_KEY_OFFSET: usize = RECORD_LEN - 2 - KEY_LEN;

/// A dual-key stealth address.
#[derive(Clone)]
pub struct StealthAddress {
    network: Network,
    data: Vec<u8>,
    scan_public_key: [u8; KEY_LEN],
    spend_public_key: [u8; KEY_LEN],
    base58: String,
}

impl StealthAddress {
    /// Assembles the stealth record of `scan` and `spend` on `network`. Both
    /// keys are committed in compressed form.
    pub fn new(
        scan: &secp256k1::PublicKey,
        spend: &secp256k1::PublicKey,
        network: Network,
    ) -> StealthAddress {
        let scan = scan.serialize();
        let spend = spend.serialize();

        let mut data = Vec::with_capacity(RECORD_LEN);
        data.push(version::encode_version_byte(network, AddressType::StealthHash));
        data.push(OPTIONS);
        data.extend_from_slice(&scan);
        data.push(KEY_COUNT);
        data.extend_from_slice(&spend);
        data.push(KEY_COUNT);
        data.push(PREFIX_LEN);

        StealthAddress {
            base58: base58::check_encode_slice(&data),
            network,
            data,
            scan_public_key: scan,
            spend_public_key: spend,
        }
    }

    /// Parses the Base58Check-decoded stealth record.
    pub(crate) fn from_body(body: &[u8]) -> Result<StealthAddress, Error> {
        let version = *body.first().ok_or(Error::Invalid(Malformed::MissingVersionByte))?;
        let network = version::decode_stealth_version_byte(version)?;
        if !is_canonical_record(body) {
            return Err(Error::Invalid(Malformed::StealthRecord));
        }

        let mut scan_public_key = [0u8; KEY_LEN];
        scan_public_key.copy_from_slice(&body[SCAN_KEY_OFFSET..SCAN_KEY_OFFSET + KEY_LEN]);
        let mut spend_public_key = [0u8; KEY_LEN];
        spend_public_key.copy_from_slice(&body[SPEND_KEY_OFFSET..SPEND_KEY_OFFSET + KEY_LEN]);

        Ok(StealthAddress {
            network,
            data: body.to_vec(),
            scan_public_key,
            spend_public_key,
            base58: base58::check_encode_slice(body),
        })
    }

    /// The scan public key, compressed.
    pub fn scan_public_key(&self) -> &[u8; KEY_LEN] {
        &self.scan_public_key
    }

    /// The spend public key, compressed.
    pub fn spend_public_key(&self) -> &[u8; KEY_LEN] {
        &self.spend_public_key
    }
}

/// Checks the fixed fields around the two keys.
fn is_canonical_record(body: &[u8]) -> bool {
    body.len() == RECORD_LEN
        && body[1] == OPTIONS
        && body[SCAN_KEY_OFFSET + KEY_LEN] == KEY_COUNT
        && body[SPEND_KEY_OFFSET + KEY_LEN] == KEY_COUNT
        && body[RECORD_LEN - 1] == PREFIX_LEN
}

impl AddressEncoding for StealthAddress {
    fn network(&self) -> Network {
        self.network
    }

    fn address_type(&self) -> AddressType {
        AddressType::StealthHash
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn public_key(&self) -> Option<&[u8]> {
        None
    }

    fn base58(&self) -> &str {
        &self.base58
    }

    fn cashaddr(&self) -> &str {
        ""
    }
}

impl PartialEq for StealthAddress {
    fn eq(&self, other: &StealthAddress) -> bool {
        self.network == other.network && self.data == other.data
    }
}

impl Eq for StealthAddress {}

impl StdHash for StealthAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.network.hash(state);
        self.data.hash(state);
    }
}

impl Display for StealthAddress {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&self.base58)
    }
}

impl fmt::Debug for StealthAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl FromStr for StealthAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<StealthAddress, Error> {
        decode_base58check(s)
            .and_then(|body| StealthAddress::from_body(&body))
            .map_err(|e| {
                trace!("rejected stealth address {:?}: {}", s, e);
                e
            })
    }
}

serde_string_impl!(StealthAddress, "a stealth address");
