//! Seventh Edition Unix DES-based hash.
//
// Copyright (c) 2026 descrypt developers
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to the terms of this
// license.
//!
//! The original Unix password-hashing algorithm, extremely weak by
//! today's standards. It should be used for backward compatibility only.
//!
//! # Example
//!
//! ```
//! use descrypt::unix_crypt;
//!
//! assert_eq!(unix_crypt::hash_with("xO",
//!     "password").unwrap(), "xOAFZqRz5RduI");
//! assert!(unix_crypt::verify("password", "xOAFZqRz5RduI").is_ok());
//! ```
//!
//! # Parameters
//!
//! * __Password length__: effectively eight 7-bit characters; anything
//! longer is ignored, and the high bit of each character doesn't
//! contribute.
//!
//! * __Salt length__: 2 characters (12 bits).
//!
//! * __Rounds__: 25 (fixed).
//!
//! # Hash Format
//!
//! The format of the hash is *`{salt}`*_`{checksum}`_, where:
//!
//! * *`{salt}`* is a 2-character Base64 encoding of the salt.
//!
//! * *`{checksum}`* is a 11-character Base64 encoding of the checksum.
//!
//! [verify](verify) additionally accepts hashes carrying the LDAP-style
//! `{CRYPT}` prefix in front of the 13 characters.

use super::{consteq, Result};
use crate::des_crypt::unix_crypt;
use crate::error::Error;

/// Salt length.
pub const SALT_LEN: usize = 2;

/// Length of the hash string, salt included.
pub const HASH_LEN: usize = 13;

const CRYPT_PREFIX: &str = "{CRYPT}";

/// Hash a password with a user-provided salt.
///
/// Only the first two salt characters are significant; both must come
/// from the `./0-9A-Za-z` alphabet. An error is returned if the salt
/// is too short or contains an invalid character.
pub fn hash_with<B: AsRef<[u8]>>(salt: &str, pass: B) -> Result<String> {
    unix_crypt(pass.as_ref(), salt)
}

/// Verify that the hash corresponds to a password.
///
/// The stored hash may be given bare or with a leading `{CRYPT}`
/// scheme prefix. After stripping the prefix, anything that isn't
/// exactly 13 characters is rejected as
/// [InvalidHashLength](Error::InvalidHashLength); a well-formed hash
/// that doesn't match the password yields [Mismatch](Error::Mismatch).
/// The comparison itself doesn't depend on where the strings first
/// differ.
pub fn verify<B: AsRef<[u8]>>(pass: B, hash: &str) -> Result<()> {
    let hash = hash.strip_prefix(CRYPT_PREFIX).unwrap_or(hash);
    if hash.len() != HASH_LEN {
	return Err(Error::InvalidHashLength);
    }
    let salt = hash.get(..SALT_LEN).ok_or(Error::InvalidSalt)?;
    let calchash = unix_crypt(pass.as_ref(), salt)?;
    if consteq(hash, &calchash) {
	Ok(())
    } else {
	Err(Error::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    // Pinned against the output of a glibc crypt(3) oracle.
    const VECTORS: &[(&str, &str, &str)] = &[
	("SecretPassword123", "rq", "rq/N3gSWdwWeA"),
	("TestPassword123", "pn", "pnA3klLBJ.CRU"),
	("WrongPassword", "rq", "rqnO5.MEhjGLo"),
	("abc123", "ab", "ab3z4hnHA5WdU"),
	("", "xy", "xyw1.V0rbu5mQ"),
	("!@#$%^&*()", "zz", "zzMEAJ1GZvANE"),
	("longerpassword", "AA", "AAt4vbXD0zBFE"),
	("short", "12", "128Q9Am4iRrT6"),
    ];

    #[test]
    fn reference_vectors() {
	for &(pass, salt, hash) in VECTORS {
	    assert_eq!(super::hash_with(salt, pass).unwrap(), hash);
	    assert_eq!(super::verify(pass, hash), Ok(()));
	}
    }

    #[test]
    fn custom() {
	assert_eq!("aZGJuE6EXrjEE", super::hash_with("aZ", "test").unwrap());
	assert_eq!(super::verify("test", "aZGJuE6EXrjEE"), Ok(()));
	assert_eq!(super::verify("test", "aZFJuE6EXrjEE"), Err(Error::Mismatch));
	assert_eq!(super::verify("test", "!!"), Err(Error::InvalidHashLength));
    }

    #[test]
    fn wrong_password() {
	assert_eq!(super::verify("WrongPassword", "rq/N3gSWdwWeA"), Err(Error::Mismatch));
	assert_eq!(super::verify("SecretPassword124", "rq/N3gSWdwWeA"), Err(Error::Mismatch));
    }

    #[test]
    fn crypt_prefix() {
	assert_eq!(super::verify("short", "{CRYPT}128Q9Am4iRrT6"), Ok(()));
	assert_eq!(super::verify("long", "{CRYPT}128Q9Am4iRrT6"), Err(Error::Mismatch));
	assert_eq!(super::verify("short", "{CRYPT}128Q9Am4iRrT"), Err(Error::InvalidHashLength));
	assert_eq!(super::verify("short", "{CRYPT}"), Err(Error::InvalidHashLength));
    }

    #[test]
    fn hash_framing() {
	assert_eq!(super::verify("password", "short_______"), Err(Error::InvalidHashLength));
	assert_eq!(super::verify("short", "128Q9Am4iRrT6X"), Err(Error::InvalidHashLength));
	assert_eq!(super::verify("password", ""), Err(Error::InvalidHashLength));
    }

    #[test]
    fn generated_matrix() {
	let passwords = ["abc123", "", "!@#$$%^&*()", "longerpassword", "short"];
	let salts = ["ab", "xy", "zz", "AA", "12"];
	for pass in &passwords {
	    for salt in &salts {
		let hash = super::hash_with(salt, pass).unwrap();
		assert_eq!(hash.len(), super::HASH_LEN);
		assert_eq!(&hash[..2], *salt);
		assert!(hash.bytes().skip(2)
		    .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'/'));
		assert_eq!(super::hash_with(salt, pass).unwrap(), hash);
		assert_eq!(super::verify(pass, &hash), Ok(()));

		let wrong = format!("x{}", pass);
		assert_ne!(super::hash_with(salt, &wrong).unwrap(), hash);
		assert_eq!(super::verify(&wrong, &hash), Err(Error::Mismatch));
	    }
	}
    }

    #[test]
    fn only_first_eight_bytes_count() {
	assert_eq!(super::hash_with("rq", "SecretPassword123").unwrap(),
	    super::hash_with("rq", "SecretPa").unwrap());
	assert_ne!(super::hash_with("rq", "SecretPa").unwrap(),
	    super::hash_with("rq", "SecretP").unwrap());
    }

    #[test]
    fn long_salt_truncated() {
	assert_eq!(super::hash_with("abcdef", "password").unwrap(),
	    super::hash_with("ab", "password").unwrap());
    }

    #[test]
    #[should_panic(expected = "value: InvalidSaltLength")]
    fn short_salt() {
	let _ = super::hash_with("a", "password").unwrap();
    }

    #[test]
    #[should_panic(expected = "value: InvalidSaltLength")]
    fn empty_salt() {
	let _ = super::hash_with("", "password").unwrap();
    }

    #[test]
    #[should_panic(expected = "value: InvalidSalt")]
    fn bad_salt_chars() {
	let _ = super::hash_with("a!", "password").unwrap();
    }
}
