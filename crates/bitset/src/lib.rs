//! A fixed size sequence of N bits.
//!
//! ## Usage
//!
//! ```rust
//! use bitset::Bitset;
//!
//! // Allocates 128 bits, all initialized to zero.
//! let mut bits = Bitset::new(64);
//! assert_eq!(bits.size(), 128);
//!
//! bits.set(42)?;
//! bits.flip(28)?;
//! bits.reset(42)?;
//! assert!(bits.test(28)?);
//! assert!(!bits.test(42)?);
//!
//! assert!(bits.any());
//! assert!(!bits.all());
//! assert!(!bits.none());
//! assert_eq!(bits.true_count(), 1);
//! # Ok::<(), bitset::Error>(())
//! ```
//!
//! The size is rounded up to a multiple of 64, with one word beyond `bits / 64`:
//!
//! ```rust
//! # use bitset::Bitset;
//! assert_eq!(Bitset::new(50).size(), 64);
//! assert_eq!(Bitset::new(100).size(), 128);
//! assert_eq!(Bitset::new(150).size(), 192);
//! assert_eq!(Bitset::new(64).size(), 128);
//! ```
//!
//! Index 0 is rendered first, so setting it gives the pattern `1000...0`. Printing uses
//! [`std::fmt::Display`]:
//!
//! ```rust
//! # use bitset::Bitset;
//! let mut bits = Bitset::new(0);
//! bits.set(0)?;
//! assert_eq!(bits.to_string(), format!("1{}", "0".repeat(63)));
//! # Ok::<(), bitset::Error>(())
//! ```
//!
//! Copies share no storage:
//!
//! ```rust
//! # use bitset::Bitset;
//! let mut a = Bitset::new(200);
//! a.set(42)?;
//! let mut b = Bitset::new(100);
//! b.copy_from(&a);
//! b.reset(42)?;
//! assert!(a.test(42)?);
//! assert!(!b.test(42)?);
//! # Ok::<(), bitset::Error>(())
//! ```
//!
//! Any index greater than the size is rejected with [`Error::OutOfRange`]. By default the
//! index equal to the size is accepted and behaves as a bit that is always 0; build with
//! [`Bounds::Exclusive`] to reject it as well.
mod bitset;
mod error;
mod macros;
mod options;

pub use bitset::Bitset;
pub use error::{Error, Result};
pub use options::{Bounds, Options};
