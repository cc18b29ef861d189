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
// Changes for rust-tapyrus is licensed as below.
// Copyright (c) 2019 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Network constants
//!
//! This module provides the per-network constants used by address encoding:
//! the Base58Check version bytes for pubkey-hash, script-hash and stealth
//! addresses, and the CashAddr prefix.
//!
//! The registry is an ordered table. Reverse lookups walk it top to bottom and
//! the first matching entry wins, so two networks may share a version byte and
//! the earlier registration takes precedence.
//!
//! # Example: looking up the network behind a version byte
//!
//! ```rust
//! use coinaddr::AddressType;
//! use coinaddr::network::constants::{legacy_candidates, Network};
//!
//! let rule = legacy_candidates(0x6f).next().unwrap();
//! assert_eq!(rule.network, Network::Testnet);
//! assert_eq!(rule.address_type, AddressType::PubkeyHash);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::address::AddressType;

/// The cryptocurrency network to act on
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub enum Network {
    /// Bitcoin Cash main network
    Mainnet,
    /// Bitcoin Cash test network
    Testnet,
    /// Verge main network
    MainnetXvg,
}

/// Constants a network contributes to address encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Network these constants belong to.
    pub network: Network,
    /// Base58Check version byte of pay-to-pubkey-hash addresses.
    pub pubkey_hash: u8,
    /// Base58Check version byte of pay-to-script-hash addresses.
    pub script_hash: u8,
    /// Base58Check version byte of stealth addresses.
    pub stealth_version: u8,
    /// Human-readable CashAddr prefix, without the `:` separator.
    pub scheme: &'static str,
}

impl NetworkParams {
    /// Base58Check version byte this network uses for the given address type.
    pub fn version_byte(&self, address_type: AddressType) -> u8 {
        match address_type {
            AddressType::PubkeyHash => self.pubkey_hash,
            AddressType::ScriptHash => self.script_hash,
            AddressType::StealthHash => self.stealth_version,
        }
    }
}

/// Bitcoin Cash main network.
pub const MAINNET: NetworkParams = NetworkParams {
    network: Network::Mainnet,
    pubkey_hash: 0x00,
    script_hash: 0x05,
    stealth_version: 0x2a,
    scheme: "bitcoincash",
};

/// Bitcoin Cash test network.
pub const TESTNET: NetworkParams = NetworkParams {
    network: Network::Testnet,
    pubkey_hash: 0x6f,
    script_hash: 0xc4,
    stealth_version: 0x2b,
    scheme: "bchtest",
};

/// Verge main network.
pub const MAINNET_XVG: NetworkParams = NetworkParams {
    network: Network::MainnetXvg,
    pubkey_hash: 0x1e,
    script_hash: 0x21,
    stealth_version: 0x28,
    scheme: "verge",
};

/// Every supported network, in registration order.
pub static NETWORKS: [&NetworkParams; 3] = [&MAINNET, &TESTNET, &MAINNET_XVG];

impl Network {
    /// Encoding constants of this network.
    pub fn params(self) -> &'static NetworkParams {
        match self {
            Network::Mainnet => &MAINNET,
            Network::Testnet => &TESTNET,
            Network::MainnetXvg => &MAINNET_XVG,
        }
    }

    /// Identifier used by `Display` and `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::MainnetXvg => "mainnetxvg",
        }
    }

    /// CashAddr prefix of this network.
    pub fn scheme(self) -> &'static str {
        self.params().scheme
    }

    /// Finds the network owning a CashAddr prefix. Matching is exact.
    pub fn from_scheme(scheme: &str) -> Option<Network> {
        NETWORKS.iter().find(|p| p.scheme == scheme).map(|p| p.network)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNetworkError(pub String);

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as network", self.0)
    }
}

impl ::std::error::Error for ParseNetworkError {}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NETWORKS
            .iter()
            .map(|p| p.network)
            .find(|n| n.as_str() == s)
            .ok_or_else(|| ParseNetworkError(s.to_owned()))
    }
}

/// One row of the legacy version-byte table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRule {
    /// Network selected when the rule matches.
    pub network: Network,
    /// Address type selected when the rule matches.
    pub address_type: AddressType,
}

impl VersionRule {
    /// Whether `byte` is the version byte this rule stands for.
    pub fn matches(&self, byte: u8) -> bool {
        self.network.params().version_byte(self.address_type) == byte
    }
}

/// Pubkey-hash and script-hash rules in decode priority order.
pub static LEGACY_RULES: [VersionRule; 6] = [
    VersionRule { network: Network::Mainnet, address_type: AddressType::PubkeyHash },
    VersionRule { network: Network::Testnet, address_type: AddressType::PubkeyHash },
    VersionRule { network: Network::Mainnet, address_type: AddressType::ScriptHash },
    VersionRule { network: Network::Testnet, address_type: AddressType::ScriptHash },
    VersionRule { network: Network::MainnetXvg, address_type: AddressType::PubkeyHash },
    VersionRule { network: Network::MainnetXvg, address_type: AddressType::ScriptHash },
];

/// Stealth rules in decode priority order.
pub static STEALTH_RULES: [VersionRule; 3] = [
    VersionRule { network: Network::Mainnet, address_type: AddressType::StealthHash },
    VersionRule { network: Network::Testnet, address_type: AddressType::StealthHash },
    VersionRule { network: Network::MainnetXvg, address_type: AddressType::StealthHash },
];

/// Every legacy rule a version byte could stand for, highest priority first.
pub fn legacy_candidates(byte: u8) -> impl Iterator<Item = VersionRule> {
    LEGACY_RULES.iter().copied().filter(move |rule| rule.matches(byte))
}

/// Every stealth rule a version byte could stand for, highest priority first.
pub fn stealth_candidates(byte: u8) -> impl Iterator<Item = VersionRule> {
    STEALTH_RULES.iter().copied().filter(move |rule| rule.matches(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_test() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Testnet.to_string(), "testnet");
        assert_eq!(Network::MainnetXvg.to_string(), "mainnetxvg");

        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert_eq!("mainnetxvg".parse::<Network>().unwrap(), Network::MainnetXvg);
        assert_eq!(
            "fakenet".parse::<Network>(),
            Err(ParseNetworkError("fakenet".to_owned()))
        );
    }

    #[test]
    fn params_belong_to_their_network() {
        for params in NETWORKS.iter() {
            assert_eq!(params.network.params(), *params);
        }
        assert_eq!(Network::Mainnet.params().version_byte(AddressType::PubkeyHash), 0x00);
        assert_eq!(Network::Testnet.params().version_byte(AddressType::ScriptHash), 0xc4);
        assert_eq!(Network::MainnetXvg.params().version_byte(AddressType::StealthHash), 0x28);
    }

    #[test]
    fn scheme_lookup() {
        assert_eq!(Network::from_scheme("bitcoincash"), Some(Network::Mainnet));
        assert_eq!(Network::from_scheme("bchtest"), Some(Network::Testnet));
        assert_eq!(Network::from_scheme("verge"), Some(Network::MainnetXvg));
        assert_eq!(Network::from_scheme("pref"), None);
        assert_eq!(Network::from_scheme("BITCOINCASH"), None);
        assert_eq!(Network::from_scheme(""), None);
    }

    #[test]
    fn every_rule_is_reachable() {
        // No rule may be shadowed by an earlier one carrying the same byte.
        for rule in LEGACY_RULES.iter() {
            let byte = rule.network.params().version_byte(rule.address_type);
            assert_eq!(legacy_candidates(byte).next(), Some(*rule));
        }
        for rule in STEALTH_RULES.iter() {
            let byte = rule.network.params().stealth_version;
            assert_eq!(stealth_candidates(byte).next(), Some(*rule));
        }
    }

    #[test]
    fn candidates_follow_registration_order() {
        let rules: Vec<_> = LEGACY_RULES.iter().map(|r| (r.network, r.address_type)).collect();
        assert_eq!(
            rules,
            vec![
                (Network::Mainnet, AddressType::PubkeyHash),
                (Network::Testnet, AddressType::PubkeyHash),
                (Network::Mainnet, AddressType::ScriptHash),
                (Network::Testnet, AddressType::ScriptHash),
                (Network::MainnetXvg, AddressType::PubkeyHash),
                (Network::MainnetXvg, AddressType::ScriptHash),
            ]
        );
        assert_eq!(legacy_candidates(0x2a).count(), 0);
        assert_eq!(stealth_candidates(0x00).count(), 0);
        assert_eq!(stealth_candidates(0x2b).next().map(|r| r.network), Some(Network::Testnet));
    }
}
