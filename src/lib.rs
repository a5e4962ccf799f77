//! # orthovar
//!
//! A bidirectional word-level translator between British and American
//! English spellings.
//!
//! ## Features
//!
//! - Dictionary seeded from a built-in GB/US word-pair table
//! - Runtime mutation: add and remove pairs, with chaining
//! - Case-pattern mirroring, including partial mixed-case transfer
//! - Exact-key lookup with lowercase fallback
//! - External datasets loadable from JSON
//!
//! The library translates single words; splitting text into words and
//! rejoining the results is the caller's job. Unknown words are returned
//! unchanged, never as errors.
//!
//! ```
//! use orthovar::dataset::WordPair;
//! use orthovar::dictionary::{Dictionary, Direction};
//!
//! let mut dict = Dictionary::new();
//! dict.add(WordPair::new("lorry", "truck"));
//!
//! assert_eq!(dict.to_american("Lorry"), "Truck");
//! assert_eq!(
//!     dict.translate_all(&["COLOUR", "theatre", "lorry"], Direction::BritishToAmerican, true),
//!     vec!["COLOR", "theater", "truck"]
//! );
//! ```
//!
//! A `Dictionary` is plain in-memory state with no internal locking;
//! callers that share one across threads must serialize mutation
//! themselves.

pub mod casing;
pub mod dataset;
pub mod dictionary;
pub mod error;
pub mod folding;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
