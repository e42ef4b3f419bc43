//! Tolerant JSON decoding for documents emitted by .NET toolchains
//!
//! The `*.runtimeconfig.json` dialect is strict JSON plus two deviations the
//! ecosystem's generators are known to produce: `//` / `/* ... */` comments
//! and trailing commas. This crate provides a lexical pre-pass that removes
//! both, followed by an ordinary `serde_json` decode. The pre-pass is purely
//! textual and independently testable; the decoder stays swappable.

pub mod decode;
pub mod strip;

pub use decode::{from_slice, from_str};
pub use strip::{strip_comments, strip_trailing_commas};
