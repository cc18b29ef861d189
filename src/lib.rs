// Rust Bitcoin Library
// Written in 2014 by
//   Andrew Poelstra <apoelstra@wpsoftware.net>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Coin Address Library
//!
//! Conversion between human-readable cryptocurrency address strings and the
//! binary identifiers they encode. Three encoding families live behind one
//! [`Address`] type:
//!
//! * legacy Base58Check addresses ([`LegacyAddress`]),
//! * CashAddr addresses with a self-describing network prefix ([`CashAddress`]),
//! * dual-key stealth addresses ([`StealthAddress`]).
//!
//! Every supported [`Network`] contributes a fixed set of version bytes and a
//! CashAddr prefix; decoding recovers the network and [`AddressType`] from
//! them and rejects anything that does not match.
//!
//! ```rust
//! use coinaddr::{Address, AddressEncoding, Network};
//!
//! let addr: Address = "1AC4gh14wwZPULVPCdxUkgqbtPvC92PQPN".parse().unwrap();
//! assert_eq!(addr.network(), Network::Mainnet);
//! assert_eq!(addr.cashaddr(), "bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978");
//! ```

#![crate_name = "coinaddr"]
#![crate_type = "rlib"]

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

// Re-exported dependencies.
pub extern crate bitcoin_hashes as hashes;
pub extern crate secp256k1;

#[macro_use] extern crate log;
#[cfg(feature = "serde")] extern crate serde;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;
#[cfg(all(test, feature = "serde"))] extern crate serde_test;

#[cfg(target_pointer_width = "16")]
compile_error!("coinaddr cannot be used on 16-bit architectures");

#[cfg(test)]
mod test_helpers;
#[macro_use]
mod internal_macros;
pub mod network;
pub mod address;
pub mod util;

pub use crate::address::Address;
pub use crate::address::AddressEncoding;
pub use crate::address::AddressType;
pub use crate::address::CashAddress;
pub use crate::address::Error;
pub use crate::address::LegacyAddress;
pub use crate::address::StealthAddress;
pub use crate::network::constants::Network;
pub use crate::util::key::PublicKey;
