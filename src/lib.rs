//! Traditional Unix DES-based password hashing and verification.
//
// Copyright (c) 2026 descrypt developers
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to the terms of this
// license.
//!
//! A pure-Rust implementation of the __crypt__(3) scheme introduced in
//! Seventh Edition Unix and still found in legacy `/etc/passwd`-style
//! credential stores: a modified DES driven by a 56-bit key taken from
//! the password, iterated 25 times over the zero block, with a 12-bit
//! salt perturbing the expansion permutation.
//!
//! # Getting Started
//!
//! Add the following to the `[dependencies]` section of your `Cargo.toml`:
//!
//! ```toml
//! descrypt = "0.1"
//! ```
//!
//! # Examples
//!
//! To verify a password against a stored hash:
//!
//! ```
//! use descrypt::unix_crypt;
//!
//! assert!(unix_crypt::verify("password", "xOAFZqRz5RduI").is_ok());
//! ```
//!
//! The same hash with an LDAP-style `{CRYPT}` prefix is accepted as
//! well:
//!
//! ```
//! use descrypt::unix_crypt;
//!
//! assert!(unix_crypt::verify("password", "{CRYPT}xOAFZqRz5RduI").is_ok());
//! ```
//!
//! To hash a password under a known salt:
//!
//! ```
//! use descrypt::unix_crypt;
//!
//! let h = unix_crypt::hash_with("xO", "password").unwrap();
//! assert_eq!(h, "xOAFZqRz5RduI");
//! ```
//!
//! # Summary
//!
//! The algorithm is cryptographically broken by modern standards and
//! nothing here attempts to strengthen it; this crate is a
//! compatibility primitive for authenticating against existing DES
//! hashes, not a recommendation. Passwords are taken as raw byte
//! sequences, of which at most the first eight bytes, seven bits each,
//! reach the key schedule.
//!
//! Hashing is a pure function of the password and salt: it touches no
//! shared state and performs no I/O, so [hash_with](unix_crypt::hash_with)
//! and [verify](unix_crypt::verify) may be called concurrently without
//! synchronization.

#![warn(missing_docs)]

mod des_crypt;
mod enc_dec;
pub mod error;
pub mod unix_crypt;

/// Type alias for the Result type.
pub type Result<T> = std::result::Result<T, error::Error>;

fn consteq(hash: &str, calchash: &str) -> bool {
    if hash.len() != calchash.len() {
	return false;
    }
    0 == hash.bytes().zip(calchash.bytes()).fold(0, |xs, (h1, h2)| xs | h1 ^ h2)
}
