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

//! Public keys
//!
//! A secp256k1 public key together with the serialization form it was
//! committed to. The form matters for addresses: the same point hashes to
//! different pubkey-hash payloads in compressed and uncompressed form.
//!

use std::{error, fmt};

use hashes::{hash160, Hash};

/// A key-related error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// secp256k1-related error
    Secp256k1(secp256k1::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Secp256k1(ref e) => write!(f, "key error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Secp256k1(ref e) => Some(e),
        }
    }
}

#[doc(hidden)]
impl From<secp256k1::Error> for Error {
    fn from(e: secp256k1::Error) -> Error {
        Error::Secp256k1(e)
    }
}

/// A public key
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey {
    /// Whether this public key should be serialized as compressed
    pub compressed: bool,
    /// The actual secp256k1 key
    pub key: secp256k1::PublicKey,
}

impl PublicKey {
    /// Wraps a secp256k1 key in its compressed form.
    pub fn new(key: secp256k1::PublicKey) -> PublicKey {
        PublicKey { compressed: true, key }
    }

    /// Wraps a secp256k1 key in its uncompressed form.
    pub fn new_uncompressed(key: secp256k1::PublicKey) -> PublicKey {
        PublicKey { compressed: false, key }
    }

    /// Serialize the public key to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        if self.compressed {
            self.key.serialize().to_vec()
        } else {
            self.key.serialize_uncompressed().to_vec()
        }
    }

    /// Deserialize a public key from a slice. The compressed flag follows the
    /// length of the input.
    pub fn from_slice(data: &[u8]) -> Result<PublicKey, Error> {
        let compressed = match data.len() {
            33 => true,
            65 => false,
            len => {
                trace!("public key of {} bytes rejected", len);
                return Err(Error::Secp256k1(secp256k1::Error::InvalidPublicKey));
            }
        };

        Ok(PublicKey {
            compressed,
            key: secp256k1::PublicKey::from_slice(data)?,
        })
    }

    /// Hash160 of the serialized key, the payload of a pubkey-hash address.
    pub fn pubkey_hash(&self) -> hash160::Hash {
        hash160::Hash::hash(&self.to_bytes())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in self.to_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
