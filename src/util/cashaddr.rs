// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! CashAddr encoder and decoder
//!
//! A CashAddr string is `<prefix>:<data>`, where `data` is the payload in
//! 5-bit groups followed by a 40-bit BCH checksum that covers both the
//! prefix and the payload. This module only deals with that string layer;
//! it knows nothing about networks or version bytes.
//!
//! ```rust
//! use coinaddr::util::cashaddr;
//!
//! let s = cashaddr::encode("pref", &[0x08; 21]);
//! let (prefix, payload) = cashaddr::decode(&s).unwrap();
//! assert_eq!(prefix, "pref");
//! assert_eq!(payload, vec![0x08; 21]);
//! ```

use std::{error, fmt};

/// Separator between the prefix and the data part.
pub const SEPARATOR: char = ':';

/// Number of 5-bit groups taken by the checksum.
const CHECKSUM_LENGTH: usize = 8;

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Reverse lookup of `CHARSET` over lowercase ASCII.
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

const GENERATORS: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// An error that might occur during CashAddr decoding
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The string has no `:` separator or nothing in front of it.
    MissingPrefix,
    /// Upper and lower case letters are mixed.
    MixedCase,
    /// Character outside the prefix or data alphabet.
    InvalidChar(char),
    /// The data part is shorter than the checksum.
    TooShort(usize),
    /// The checksum does not verify.
    BadChecksum,
    /// Leftover bits of the 5-to-8 bit conversion are not zero padding.
    InvalidPadding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MissingPrefix => f.write_str("cashaddr prefix missing"),
            Error::MixedCase => f.write_str("cashaddr mixes upper and lower case"),
            Error::InvalidChar(c) => write!(f, "invalid cashaddr character {:?}", c),
            Error::TooShort(n) => write!(f, "cashaddr data part of {} characters cannot hold a checksum", n),
            Error::BadChecksum => f.write_str("cashaddr checksum mismatch"),
            Error::InvalidPadding => f.write_str("cashaddr data has non-zero padding"),
        }
    }
}

impl error::Error for Error {}

fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8;
        c = ((c & 0x07_ffff_ffff) << 5) ^ d as u64;
        for (i, g) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= g;
            }
        }
    }
    c ^ 1
}

/// Lower five bits of every prefix character, then a zero for the separator.
fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut ret: Vec<u8> = prefix.bytes().map(|b| b & 0x1f).collect();
    ret.push(0);
    ret
}

fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity((data.len() * 8 + 4) / 5);
    for &byte in data {
        acc = (acc << 8) | byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            ret.push(((acc >> bits) & 0x1f) as u8);
        }
    }
    if bits > 0 {
        ret.push(((acc << (5 - bits)) & 0x1f) as u8);
    }
    ret
}

fn from_base32(data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity(data.len() * 5 / 8);
    for &value in data {
        acc = ((acc << 5) | value as u32) & 0xfff;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            ret.push(((acc >> bits) & 0xff) as u8);
        }
    }
    if bits >= 5 || (acc << (8 - bits)) & 0xff != 0 {
        return Err(Error::InvalidPadding);
    }
    Ok(ret)
}

/// Encode `payload` under `prefix`. The prefix is expected in lower case.
pub fn encode(prefix: &str, payload: &[u8]) -> String {
    let data = to_base32(payload);

    let mut values = expand_prefix(prefix);
    values.extend_from_slice(&data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let checksum = polymod(&values);

    let mut ret = String::with_capacity(prefix.len() + 1 + data.len() + CHECKSUM_LENGTH);
    ret.push_str(prefix);
    ret.push(SEPARATOR);
    for &v in data.iter() {
        ret.push(CHARSET[v as usize] as char);
    }
    for i in 0..CHECKSUM_LENGTH {
        let v = (checksum >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f;
        ret.push(CHARSET[v as usize] as char);
    }
    ret
}

/// Decode a CashAddr string into its lower-cased prefix and payload.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Error> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Error::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let sep = match s.rfind(SEPARATOR) {
        Some(0) | None => return Err(Error::MissingPrefix),
        Some(pos) => pos,
    };
    let (prefix, data) = (&s[..sep], &s[sep + 1..]);

    if let Some(c) = prefix.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidChar(c));
    }

    let mut values = Vec::with_capacity(data.len());
    for c in data.chars() {
        let v = if c.is_ascii() { CHARSET_REV[c as usize] } else { -1 };
        if v < 0 {
            return Err(Error::InvalidChar(c));
        }
        values.push(v as u8);
    }
    if values.len() < CHECKSUM_LENGTH {
        return Err(Error::TooShort(values.len()));
    }

    let mut checked = expand_prefix(prefix);
    checked.extend_from_slice(&values);
    if polymod(&checked) != 0 {
        return Err(Error::BadChecksum);
    }

    values.truncate(values.len() - CHECKSUM_LENGTH);
    let payload = from_base32(&values)?;
    Ok((prefix.to_owned(), payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! hex (($hex:expr) => (hex::decode($hex).unwrap()));

    #[test]
    fn test_encode() {
        let mut payload = vec![0x00];
        payload.extend(hex!("76a04053bda0a88bda5177b86a15c3b29f559873"));
        assert_eq!(
            encode("bitcoincash", &payload),
            "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"
        );

        let mut payload = vec![0x08];
        payload.extend(hex!("f5bf48b397dae70be82b3cca4793f8eb2b6cdac9"));
        assert_eq!(encode("pref", &payload), "pref:pr6m7j9njldwwzlg9v7v53unlr4jkmx6ey65nvtks5");
        assert_eq!(encode("bchtest", &payload), "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t");
    }

    #[test]
    fn test_decode() {
        let (prefix, payload) = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2").unwrap();
        assert_eq!(prefix, "bitcoincash");
        assert_eq!(payload[0], 0x00);
        assert_eq!(payload[1..].to_vec(), hex!("f5bf48b397dae70be82b3cca4793f8eb2b6cdac9"));

        // Upper case is accepted and reported in lower case.
        let (prefix, upper) = decode("BITCOINCASH:QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2").unwrap();
        assert_eq!(prefix, "bitcoincash");
        assert_eq!(upper, payload);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode("bitcoincash:Qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"),
            Err(Error::MixedCase)
        );
        assert_eq!(
            decode("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"),
            Err(Error::MissingPrefix)
        );
        assert_eq!(decode(":qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"), Err(Error::MissingPrefix));
        assert_eq!(
            decode("bitcoincash:br6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"),
            Err(Error::InvalidChar('b'))
        );
        assert_eq!(
            decode("bitcoincash:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978💦😆"),
            Err(Error::InvalidChar('💦'))
        );
        assert_eq!(decode("bitcoincash:qpzry9x"), Err(Error::TooShort(7)));
        assert_eq!(
            decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg3"),
            Err(Error::BadChecksum)
        );
        // The checksum covers the prefix.
        assert_eq!(
            decode("bchtest:qpjdpjrm5zvp2al5u4uzmp36t9m0ll7gd525rss978"),
            Err(Error::BadChecksum)
        );
    }

    #[test]
    fn test_padding() {
        // 5 groups carry 25 bits: three bytes and one bit of padding.
        assert_eq!(from_base32(&[31, 31, 31, 31, 30]), Ok(vec![0xff, 0xff, 0xff]));
        assert_eq!(from_base32(&[31, 31, 31, 31, 31]), Err(Error::InvalidPadding));
        // A lone group cannot form a byte.
        assert_eq!(from_base32(&[0]), Err(Error::InvalidPadding));
        assert_eq!(to_base32(&[0xff, 0xff, 0xff]), vec![31, 31, 31, 31, 30]);
    }
}
