// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! CashAddr addresses
//!
//! `<prefix>:<data>`, where the prefix names the network and `data` holds a
//! CashAddr version byte followed by the hash. The prefix alone decides the
//! network; the version byte decides the address type and the hash size.
//!
//! ```rust
//! use coinaddr::{AddressEncoding, AddressType, CashAddress, Network};
//!
//! let addr: CashAddress = "bchtest:qq498xkl67h0espwqxttfn8hdt4g3g05wqtqeyg993".parse().unwrap();
//! assert_eq!(addr.network(), Network::Testnet);
//! assert_eq!(addr.address_type(), AddressType::PubkeyHash);
//! assert_eq!(addr.base58(), "mjNkq5ycsAfY9Vybo9jG8wbkC5mbpo4xgC");
//! ```

use std::fmt::{self, Display, Formatter};
use std::hash::{Hash as StdHash, Hasher};
use std::str::FromStr;

use hashes::{hash160, Hash};

use crate::address::legacy::{encode_base58, LegacyAddress, HASH_LEN};
use crate::address::{version, AddressEncoding, AddressType, Error, Malformed};
use crate::network::constants::Network;
use crate::util::cashaddr;
use crate::util::key::PublicKey;

/// A CashAddr address.
#[derive(Clone)]
pub struct CashAddress {
    network: Network,
    address_type: AddressType,
    data: Vec<u8>,
    public_key: Option<Vec<u8>>,
    base58: String,
    cashaddr: String,
}

impl CashAddress {
    /// Builds an address from a hash the caller has already computed. The
    /// hash is expected to be [`HASH_LEN`] bytes long, otherwise the CashAddr
    /// string of the result is empty.
    pub fn new(data: &[u8], address_type: AddressType, network: Network) -> CashAddress {
        LegacyAddress::build(data.to_vec(), address_type, network, None).into()
    }

    /// Creates a pay to public key hash address from a public key.
    pub fn p2pkh(pk: &PublicKey, network: Network) -> CashAddress {
        LegacyAddress::p2pkh(pk, network).into()
    }

    /// Creates a pay to script hash address from a redeem script.
    pub fn p2sh(script: &[u8], network: Network) -> CashAddress {
        let hash = <hash160::Hash as Hash>::hash(script);
        CashAddress::new(&hash[..], AddressType::ScriptHash, network)
    }
}

/// CashAddr string of `data` under the prefix of `network`. Empty for stealth
/// addresses and for hashes that are not [`HASH_LEN`] bytes long.
pub(crate) fn encode_cashaddr(network: Network, address_type: AddressType, data: &[u8]) -> String {
    if data.len() != HASH_LEN {
        return String::new();
    }
    match version::encode_cashaddr_version(address_type, data.len()) {
        Some(version) => {
            let mut payload = Vec::with_capacity(1 + data.len());
            payload.push(version);
            payload.extend_from_slice(data);
            cashaddr::encode(network.scheme(), &payload)
        }
        None => String::new(),
    }
}

fn decode(s: &str) -> Result<CashAddress, Error> {
    let (prefix, raw) = cashaddr::decode(s)?;
    let network = match Network::from_scheme(&prefix) {
        Some(network) => network,
        None => return Err(Error::InvalidScheme(prefix)),
    };

    let (&version, hash) = raw
        .split_first()
        .ok_or(Error::Invalid(Malformed::MissingVersionByte))?;
    let address_type = version::decode_cashaddr_version(version, hash.len())?;
    // Only the 20-byte size class has a Base58Check counterpart.
    if hash.len() != HASH_LEN {
        return Err(Error::InvalidVersionByte(version));
    }

    Ok(CashAddress {
        base58: encode_base58(network, address_type, hash),
        cashaddr: encode_cashaddr(network, address_type, hash),
        network,
        address_type,
        data: hash.to_vec(),
        public_key: None,
    })
}

impl From<LegacyAddress> for CashAddress {
    fn from(addr: LegacyAddress) -> CashAddress {
        let public_key = addr.public_key().map(|pk| pk.to_vec());
        CashAddress {
            network: addr.network(),
            address_type: addr.address_type(),
            data: addr.data().to_vec(),
            public_key,
            base58: addr.base58().to_owned(),
            cashaddr: addr.cashaddr().to_owned(),
        }
    }
}

impl From<CashAddress> for LegacyAddress {
    fn from(addr: CashAddress) -> LegacyAddress {
        LegacyAddress::build(addr.data, addr.address_type, addr.network, addr.public_key)
    }
}

impl AddressEncoding for CashAddress {
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

impl PartialEq for CashAddress {
    fn eq(&self, other: &CashAddress) -> bool {
        self.network == other.network
            && self.address_type == other.address_type
            && self.data == other.data
    }
}

impl Eq for CashAddress {}

impl StdHash for CashAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.network.hash(state);
        self.address_type.hash(state);
        self.data.hash(state);
    }
}

impl Display for CashAddress {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&self.cashaddr)
    }
}

impl fmt::Debug for CashAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl FromStr for CashAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<CashAddress, Error> {
        decode(s).map_err(|e| {
            trace!("rejected cashaddr {:?}: {}", s, e);
            e
        })
    }
}

serde_string_impl!(CashAddress, "a cashaddr address");

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::address::Address;
    use crate::network::constants::Network::{Mainnet, MainnetXvg, Testnet};
    use crate::test_helpers::decode_hash;

    macro_rules! hex (($hex:expr) => (hex::decode($hex).unwrap()));
    macro_rules! hex_key (($hex:expr) => (PublicKey::from_slice(&hex!($hex)).unwrap()));

    fn roundtrips(addr: &CashAddress) {
        assert_eq!(
            CashAddress::from_str(&addr.to_string()).unwrap(),
            *addr,
            "string round-trip failed for {}",
            addr,
        );
        assert_eq!(
            LegacyAddress::from_str(addr.base58()).unwrap().data(),
            addr.data(),
            "legacy form of {} decodes to another payload",
            addr,
        );
    }

    #[test]
    fn test_mainnet_cashaddr() {
        let key = hex_key!("045d21e7a118c479a007d45401bdbd06e3f9814ad5bbbbc5cec17f19029a060903ccfca71eff2101ad68238112e7585110e0f2c32d345225985356dc7cab8fdcc9");
        let addr = CashAddress::p2pkh(&key, Mainnet);
        assert_eq!(&addr.to_string(), "bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978");
        assert_eq!(addr.base58(), "1AC4gh14wwZPULVPCdxUkgqbtPvC92PQPN");
        assert_eq!(addr.public_key(), Some(&key.to_bytes()[..]));
        roundtrips(&addr);

        let parsed = CashAddress::from_str("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978").unwrap();
        assert_eq!(&parsed.to_string(), "bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978");
        assert_eq!(parsed.public_key(), None);
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_testnet_cashaddr() {
        let key = hex_key!("047e000cc16c9a4d38cb1572b9dc34c1452626aa170b46150d0e806be1b42517f0832c8a58f543128083ffb8632bae94dd5f3e1e89fad0a17f64ed8bbbb90b5753");
        let addr = CashAddress::p2pkh(&key, Testnet);
        assert_eq!(&addr.to_string(), "bchtest:qq498xkl67h0espwqxttfn8hdt4g3g05wqtqeyg993");
        roundtrips(&addr);

        let parsed = CashAddress::from_str("bchtest:qq498xkl67h0espwqxttfn8hdt4g3g05wqtqeyg993").unwrap();
        assert_eq!(parsed.network(), Testnet);
        assert_eq!(parsed.base58(), "mjNkq5ycsAfY9Vybo9jG8wbkC5mbpo4xgC");
    }

    #[test]
    fn test_script_hash() {
        let addr = CashAddress::from_str("bitcoincash:ppm2qsznhks23z7629mms6s4cwef74vcwvn0h829pq").unwrap();
        assert_eq!(addr.network(), Mainnet);
        assert_eq!(addr.address_type(), AddressType::ScriptHash);
        assert_eq!(addr.data(), &decode_hash("76a04053bda0a88bda5177b86a15c3b29f559873")[..]);
        assert_eq!(addr.base58(), "3CWFddi6m4ndiGyKqzYvsFYagqDLPVMTzC");
        roundtrips(&addr);

        let script = hex!("552103a765fc35b3f210b95223846b36ef62a4e53e34e2925270c2c7906b92c9f718eb2103c327511374246759ec8d0b89fa6c6b23b33e11f92c5bc155409d86de0c79180121038cae7406af1f12f4786d820a1466eec7bc5785a1b5e4a387eca6d797753ef6db2103252bfb9dcaab0cd00353f2ac328954d791270203d66c2be8b430f115f451b8a12103e79412d42372c55dd336f2eb6eb639ef9d74a22041ba79382c74da2338fe58ad21035049459a4ebc00e876a9eef02e72a3e70202d3d1f591fc0dd542f93f642021f82102016f682920d9723c61b27f562eb530c926c00106004798b6471e8c52c60ee02057ae");
        let addr = CashAddress::p2sh(&script, Testnet);
        assert_eq!(&addr.to_string(), "bchtest:pp67ratrv6velfcxpk2r53d6gtsxtvyhj59ruwfyu4");
        assert_eq!(addr.base58(), "2N3zXjbwdTcPsJiy8sUK9FhWJhqQCxA8Jjr");
    }

    #[test]
    fn test_alt_coin_cashaddr() {
        let addr = CashAddress::new(
            &decode_hash("64d0c87ba0981577f4e5782d863a5976ffffc86d"),
            AddressType::PubkeyHash,
            MainnetXvg,
        );
        assert_eq!(&addr.to_string(), "verge:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd5yn3afanh");
        assert_eq!(addr.base58(), "DELADwwiFMTg1LfywDx3JT1CmXeVW57YB4");
        roundtrips(&addr);
    }

    #[test]
    fn test_only_legacy_size_class() {
        // Well-formed 32-byte script hash: no legacy counterpart, so rejected
        assert_eq!(
            CashAddress::from_str("bitcoincash:pvqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shrqv35xcur50p7h2c7ctj5"),
            Err(Error::InvalidVersionByte(0x0b))
        );

        let hash: Vec<u8> = (0..32).collect();
        let addr = CashAddress::new(&hash, AddressType::ScriptHash, Mainnet);
        assert_eq!(addr.cashaddr(), "");
        assert_eq!(
            Address::from_str(addr.base58()),
            Err(Error::Invalid(Malformed::PayloadLength { expected: 20, found: 32 }))
        );

        // Same hash under the 20-byte size class
        assert_eq!(
            CashAddress::from_str("bitcoincash:pqqqzqsrqszsvpcgpy9qkrqdpc83qygjzv2p29shrqv35xcur50p7yz4ph2g0"),
            Err(Error::InvalidVersionByte(0x08))
        );
    }

    #[test]
    fn test_upper_case() {
        let addr = CashAddress::from_str("BITCOINCASH:QPJDPJRM5ZVP2AL5U4UZMP36T9M0LL7GD525RSS978").unwrap();
        assert_eq!(&addr.to_string(), "bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978");
    }

    #[test]
    fn test_invalid_checksum_cashaddr() {
        // Characters outside the alphabet
        assert_eq!(
            CashAddress::from_str("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978💦😆"),
            Err(Error::Invalid(Malformed::CashAddr(cashaddr::Error::InvalidChar('💦'))))
        );
        // Prefix of another network over the same data
        assert_eq!(
            CashAddress::from_str("bchtest:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978"),
            Err(Error::Invalid(Malformed::CashAddr(cashaddr::Error::BadChecksum)))
        );
        assert_eq!(
            CashAddress::from_str("qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978"),
            Err(Error::Invalid(Malformed::CashAddr(cashaddr::Error::MissingPrefix)))
        );
    }

    #[test]
    fn test_wrong_network_cashaddr() {
        assert_eq!(
            CashAddress::from_str("pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5"),
            Err(Error::InvalidScheme("pref".to_owned()))
        );
    }

    #[test]
    fn test_invalid_version_byte() {
        // Type bits 0x10
        assert_eq!(
            CashAddress::from_str("bitcoincash:zpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd5d7sw7rp5"),
            Err(Error::InvalidVersionByte(0x10))
        );
        // Size class 1 (24 bytes) over a 20-byte hash
        assert_eq!(
            CashAddress::from_str("bitcoincash:q9jdpjrm5zvp2al5u4uzmp36t9m0ll7gd59dx4hnr8"),
            Err(Error::InvalidVersionByte(0x01))
        );
        assert_eq!(
            CashAddress::from_str(&cashaddr::encode("bitcoincash", &[])),
            Err(Error::Invalid(Malformed::MissingVersionByte))
        );
    }

    #[test]
    fn test_conversions() {
        let cash = CashAddress::from_str("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978").unwrap();
        let legacy: LegacyAddress = cash.clone().into();
        assert_eq!(legacy.to_string(), "1AC4gh14wwZPULVPCdxUkgqbtPvC92PQPN");
        assert_eq!(legacy.data(), cash.data());
        let back: CashAddress = legacy.into();
        assert_eq!(back, cash);
        assert_eq!(back.to_string(), cash.to_string());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        let addr = CashAddress::from_str("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978").unwrap();
        assert_tokens(&addr, &[Token::Str("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978")]);
    }
}
