// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Address errors

use std::{error, fmt};

use crate::util::{base58, cashaddr};

/// Address parsing error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a well-formed address: bad characters, bad checksum
    /// or a payload of the wrong shape.
    Invalid(Malformed),
    /// CashAddr prefix that no known network uses.
    InvalidScheme(String),
    /// Version byte that maps to no known network and address type, or that
    /// declares a payload size the payload does not have.
    InvalidVersionByte(u8),
}

/// Detail of an [`Error::Invalid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Base58 or Base58Check error.
    Base58(base58::Error),
    /// CashAddr error.
    CashAddr(cashaddr::Error),
    /// Decoded data holds no version byte.
    MissingVersionByte,
    /// Hash payload of the wrong length.
    PayloadLength {
        /// Length the address type requires.
        expected: usize,
        /// Length found.
        found: usize,
    },
    /// Stealth record that does not follow the single scan key, single
    /// spend key layout.
    StealthRecord,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Invalid(ref m) => write!(f, "invalid address: {}", m),
            Error::InvalidScheme(ref prefix) => write!(f, "unknown cashaddr prefix {:?}", prefix),
            Error::InvalidVersionByte(b) => write!(f, "invalid version byte 0x{:02x}", b),
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Malformed::Base58(ref e) => write!(f, "base58: {}", e),
            Malformed::CashAddr(ref e) => write!(f, "cashaddr: {}", e),
            Malformed::MissingVersionByte => f.write_str("no version byte"),
            Malformed::PayloadLength { expected, found } =>
                write!(f, "payload of {} bytes where {} are required", found, expected),
            Malformed::StealthRecord => f.write_str("malformed stealth record"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Invalid(Malformed::Base58(ref e)) => Some(e),
            Error::Invalid(Malformed::CashAddr(ref e)) => Some(e),
            Error::Invalid(_)
            | Error::InvalidScheme(_)
            | Error::InvalidVersionByte(_) => None,
        }
    }
}

#[doc(hidden)]
impl From<base58::Error> for Error {
    fn from(e: base58::Error) -> Error {
        Error::Invalid(Malformed::Base58(e))
    }
}

#[doc(hidden)]
impl From<cashaddr::Error> for Error {
    fn from(e: cashaddr::Error) -> Error {
        Error::Invalid(Malformed::CashAddr(e))
    }
}

/// Address type is either invalid or not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAddressTypeError(pub String);

impl fmt::Display for UnknownAddressTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as address type", self.0)
    }
}

impl error::Error for UnknownAddressTypeError {}
