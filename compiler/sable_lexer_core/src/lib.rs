//! Low-level tokenizer for Sable source text.
//!
//! This crate is standalone by design: no dependencies on other `sable_*`
//! crates, so external tools (syntax highlighters, formatters, language
//! servers) can scan source without pulling in the rest of the toolchain.
//!
//! The pipeline is two layers:
//!
//! 1. [`SourceBuffer`] copies the source into a sentinel-terminated,
//!    cache-line padded buffer and indexes line starts.
//! 2. [`RawScanner`] walks the buffer with a [`Cursor`] and produces
//!    [`RawToken`]s: a [`RawTag`] shape classification plus a byte length.
//!
//! Raw tokens carry no text, no interned names, no parsed values. The
//! `sable_lexer` crate cooks them into full tokens. Errors are tags in the
//! stream rather than `Result`s, so scanning always runs to completion.
//!
//! ```
//! use sable_lexer_core::{tokenize, RawTag, SourceBuffer};
//!
//! let buffer = SourceBuffer::new("let x = 42");
//! let tags: Vec<RawTag> = tokenize(&buffer).iter().map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     vec![
//!         RawTag::Ident,
//!         RawTag::Whitespace,
//!         RawTag::Ident,
//!         RawTag::Whitespace,
//!         RawTag::Eq,
//!         RawTag::Whitespace,
//!         RawTag::Int,
//!         RawTag::Eof,
//!     ]
//! );
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::{Position, SourceBuffer};
pub use tag::{RawTag, RawToken};
