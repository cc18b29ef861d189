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

//! Addresses
//!
//! Three address families share the [`AddressEncoding`] view:
//!
//! * [`LegacyAddress`]: Base58Check over a version byte and a 20-byte hash,
//! * [`CashAddress`]: CashAddr under a network prefix,
//! * [`StealthAddress`]: Base58Check over a 71-byte dual-key record.
//!
//! [`Address`] is the sum of the three and parses any of them.
//!
//! # Example: one hash, both string forms
//!
//! ```rust
//! use coinaddr::{Address, AddressEncoding, AddressType, Network};
//!
//! let legacy: Address = "mjNkq5ycsAfY9Vybo9jG8wbkC5mbpo4xgC".parse().unwrap();
//! let cash: Address = "bchtest:qq498xkl67h0espwqxttfn8hdt4g3g05wqtqeyg993".parse().unwrap();
//!
//! assert_eq!(legacy.network(), Network::Testnet);
//! assert_eq!(legacy.address_type(), AddressType::PubkeyHash);
//! assert_eq!(legacy.data(), cash.data());
//! assert_eq!(legacy.cashaddr(), cash.to_string());
//! ```

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::network::constants::{stealth_candidates, Network};
use crate::util::{base58, cashaddr};

pub mod error;
pub mod version;
mod cash;
mod legacy;
mod stealth;

pub use self::cash::CashAddress;
pub use self::error::{Error, Malformed, UnknownAddressTypeError};
pub use self::legacy::{LegacyAddress, HASH_LEN};
pub use self::stealth::{StealthAddress, KEY_LEN, RECORD_LEN};

/// Longest Base58Check string any address family produces. A stealth record
/// with its checksum takes at most 103 characters.
const MAX_BASE58_LEN: usize = 110;

/// Base58Check-decodes an address string. Base58 decoding is quadratic in
/// the input, so over-long strings are refused before it starts.
pub(crate) fn decode_base58check(s: &str) -> Result<Vec<u8>, Error> {
    if s.len() > MAX_BASE58_LEN {
        return Err(base58::Error::InvalidLength(s.len()).into());
    }
    Ok(base58::from_check(s)?)
}

/// The different kinds of payload an address carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressType {
    /// pay-to-pubkey-hash
    PubkeyHash,
    /// pay-to-script-hash
    ScriptHash,
    /// scan and spend public keys of a stealth address
    StealthHash,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            AddressType::PubkeyHash => "p2pkh",
            AddressType::ScriptHash => "p2sh",
            AddressType::StealthHash => "stealth",
        })
    }
}

impl FromStr for AddressType {
    type Err = UnknownAddressTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p2pkh" => Ok(AddressType::PubkeyHash),
            "p2sh" => Ok(AddressType::ScriptHash),
            "stealth" => Ok(AddressType::StealthHash),
            _ => Err(UnknownAddressTypeError(s.to_owned())),
        }
    }
}

/// Read-only view shared by every address family.
pub trait AddressEncoding {
    /// The network the address belongs to.
    fn network(&self) -> Network;

    /// The kind of payload.
    fn address_type(&self) -> AddressType;

    /// The payload: a hash, or the whole record for stealth addresses.
    fn data(&self) -> &[u8];

    /// Serialized public key the address was built from, if it was built
    /// from one rather than parsed.
    fn public_key(&self) -> Option<&[u8]>;

    /// The Base58Check string.
    fn base58(&self) -> &str;

    /// The CashAddr string, empty where the family has no CashAddr form.
    fn cashaddr(&self) -> &str;
}

/// Any address.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Address {
    /// Base58Check address
    Legacy(LegacyAddress),
    /// CashAddr address
    Cash(CashAddress),
    /// Stealth address
    Stealth(StealthAddress),
}

impl Address {
    /// The legacy form of a pubkey-hash or script-hash address.
    pub fn to_legacy(&self) -> Option<LegacyAddress> {
        match *self {
            Address::Legacy(ref addr) => Some(addr.clone()),
            Address::Cash(ref addr) => Some(addr.clone().into()),
            Address::Stealth(_) => None,
        }
    }

    /// The CashAddr form of a pubkey-hash or script-hash address.
    pub fn to_cash(&self) -> Option<CashAddress> {
        match *self {
            Address::Legacy(ref addr) => Some(addr.clone().into()),
            Address::Cash(ref addr) => Some(addr.clone()),
            Address::Stealth(_) => None,
        }
    }

    fn inner(&self) -> &dyn AddressEncoding {
        match *self {
            Address::Legacy(ref addr) => addr,
            Address::Cash(ref addr) => addr,
            Address::Stealth(ref addr) => addr,
        }
    }
}

impl AddressEncoding for Address {
    fn network(&self) -> Network {
        self.inner().network()
    }

    fn address_type(&self) -> AddressType {
        self.inner().address_type()
    }

    fn data(&self) -> &[u8] {
        self.inner().data()
    }

    fn public_key(&self) -> Option<&[u8]> {
        self.inner().public_key()
    }

    fn base58(&self) -> &str {
        self.inner().base58()
    }

    fn cashaddr(&self) -> &str {
        self.inner().cashaddr()
    }
}

impl From<LegacyAddress> for Address {
    fn from(addr: LegacyAddress) -> Address {
        Address::Legacy(addr)
    }
}

impl From<CashAddress> for Address {
    fn from(addr: CashAddress) -> Address {
        Address::Cash(addr)
    }
}

impl From<StealthAddress> for Address {
    fn from(addr: StealthAddress) -> Address {
        Address::Stealth(addr)
    }
}

impl Display for Address {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Address::Legacy(ref addr) => Display::fmt(addr, fmt),
            Address::Cash(ref addr) => Display::fmt(addr, fmt),
            Address::Stealth(ref addr) => Display::fmt(addr, fmt),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl FromStr for Address {
    type Err = Error;

    /// A `:` selects CashAddr. Anything else is Base58Check, decoded once and
    /// routed to the stealth family when its version byte is a stealth one.
    fn from_str(s: &str) -> Result<Address, Error> {
        if s.contains(cashaddr::SEPARATOR) {
            return CashAddress::from_str(s).map(Address::Cash);
        }

        let body = decode_base58check(s).map_err(|e| {
            trace!("rejected address {:?}: {}", s, e);
            e
        })?;
        let is_stealth = body
            .first()
            .map_or(false, |&version| stealth_candidates(version).next().is_some());

        let parsed = if is_stealth {
            StealthAddress::from_body(&body).map(Address::Stealth)
        } else {
            LegacyAddress::from_body(&body).map(Address::Legacy)
        };
        parsed.map_err(|e| {
            trace!("rejected address {:?}: {}", s, e);
            e
        })
    }
}

serde_string_impl!(Address, "a legacy, cashaddr or stealth address");
