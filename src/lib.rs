//! # idforge — Composite Identifier Construction
//!
//! A declarative engine for building structured, partially human-readable
//! identifiers (e.g. `region-shard-sequence` composite keys): describe the
//! identifier as a tree of fixed-width value fields, literal delimiters, and
//! nested sections, then render the tree into one encoded string.
//!
//! ## Model
//!
//! - **Segment**: one tree node. Holds *either* child sections and delimiters
//!   *or* value fields, never both.
//! - **Field**: a leaf value supplying opaque bytes; the engine packs its low
//!   `bits` bits. Width is explicit ([`Segment::bits`]) or derived from the
//!   segment's declared character length through its charset.
//! - **Charset**: a named alphabet (`"hex"`, `"HEX"`, `"dec"`, `"base36"`,
//!   `"BASE36"`, `"base62"`). A field-holding segment encodes with its own
//!   charset, or the nearest ancestor's.
//!
//! Field buffers are concatenated bit-exactly in declaration order (no byte
//! padding between fields), then the packed buffer is rendered base-N. A
//! declared length left-pads short encodings with the charset's zero digit
//! and rejects overlong ones.
//!
//! ## Example
//!
//! ```
//! use idforge::{FixedBytes, Segment};
//!
//! let id = Segment::new()
//!     .charset("hex")?
//!     .section(
//!         Segment::new()
//!             .length(2)?
//!             .bits(8)?
//!             .field(FixedBytes::new([0xAB]))?,
//!     )?
//!     .delimiter("-")?
//!     .section(
//!         Segment::new()
//!             .charset("hex")?
//!             .bits(8)?
//!             .field(FixedBytes::new([0xCD]))?,
//!     )?;
//! assert_eq!(id.render()?, "ab-cd");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Builder calls consume and return the segment, so structural misuse (mixing
//! fields with sections, duplicate charset/length, zero widths) fails at the
//! offending call. See `tests/` for the full behavior catalogue.

pub mod bits;
pub mod codec;
pub mod field;
pub mod render;
pub mod schema;

pub use bits::concat_bits;
pub use codec::{codec, Codec};
pub use field::{Field, FixedBytes};
pub use render::RenderError;
pub use schema::{SchemaError, Segment};
