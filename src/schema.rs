//! Segment tree and builder API for composite identifiers.
//!
//! A [`Segment`] is either a *section* container (ordered child segments and
//! literal delimiters) or a *field* container (ordered bit-width-tagged value
//! fields), never both. Builder calls consume the segment and hand it back,
//! so a tree is written as one `?`-chained expression; every structural rule
//! is checked before any mutation, so a failed call never leaves a segment
//! half-changed.

use crate::codec::{codec, Codec};
use crate::field::Field;

/// Structural misuse detected while building a schema. These are programmer
/// errors: a failed call is not retryable with the same arguments.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("segment already holds fields; sections and delimiters go in a separate segment")]
    SectionAfterField,
    #[error("segment already holds sections; fields go inside their own section")]
    FieldAfterSection,
    #[error("charset already set for this segment")]
    CharsetAlreadySet,
    #[error("length already set for this segment")]
    LengthAlreadySet,
    #[error("length must be greater than zero")]
    ZeroLength,
    #[error("bit width must be greater than zero")]
    ZeroBits,
    #[error("unknown charset: {0}")]
    UnknownCharset(String),
}

/// One entry of a section-mode segment, in declaration order.
#[derive(Debug)]
pub(crate) enum Part {
    Section(Segment),
    Delimiter(String),
}

/// A field plus the bit width resolved for it at attach time. `bits: None`
/// defers resolution to render, where the owning segment's declared length is
/// sized through the effective codec.
#[derive(Debug)]
pub(crate) struct FieldSlot {
    pub(crate) field: Box<dyn Field>,
    pub(crate) bits: Option<u32>,
}

/// One node of a composite-identifier schema.
#[derive(Debug, Default)]
pub struct Segment {
    pub(crate) codec: Option<Codec>,
    pub(crate) length: Option<u32>,
    pending_bits: Option<u32>,
    pub(crate) parts: Vec<Part>,
    pub(crate) fields: Vec<FieldSlot>,
}

impl Segment {
    pub fn new() -> Self {
        Segment::default()
    }

    /// Attach a child section. Fails if this segment already holds fields.
    pub fn section(mut self, child: Segment) -> Result<Self, SchemaError> {
        if !self.fields.is_empty() {
            return Err(SchemaError::SectionAfterField);
        }
        self.parts.push(Part::Section(child));
        Ok(self)
    }

    /// Attach a literal delimiter. Delimiters live in the section list, so
    /// the same section/field exclusivity rule applies.
    pub fn delimiter(mut self, literal: impl Into<String>) -> Result<Self, SchemaError> {
        if !self.fields.is_empty() {
            return Err(SchemaError::SectionAfterField);
        }
        self.parts.push(Part::Delimiter(literal.into()));
        Ok(self)
    }

    /// Select the charset this segment encodes with. At most once per
    /// segment; unknown identifiers fail.
    pub fn charset(mut self, name: &str) -> Result<Self, SchemaError> {
        if self.codec.is_some() {
            return Err(SchemaError::CharsetAlreadySet);
        }
        self.codec = Some(codec(name)?);
        Ok(self)
    }

    /// Declare the character length of this segment's encoded output. At most
    /// once per segment; must be positive.
    pub fn length(mut self, n: u32) -> Result<Self, SchemaError> {
        if self.length.is_some() {
            return Err(SchemaError::LengthAlreadySet);
        }
        if n == 0 {
            return Err(SchemaError::ZeroLength);
        }
        self.length = Some(n);
        Ok(self)
    }

    /// Set the bit width for the *next* attached field. Must be positive. A
    /// second call before a field is attached overwrites the pending width.
    pub fn bits(mut self, n: u32) -> Result<Self, SchemaError> {
        if n == 0 {
            return Err(SchemaError::ZeroBits);
        }
        self.pending_bits = Some(n);
        Ok(self)
    }

    /// Attach a value field. Fails if this segment already holds sections.
    /// Consumes a pending [`bits`](Segment::bits) width if one is set;
    /// otherwise the field's width is derived at render time from the
    /// segment's declared length.
    pub fn field(mut self, f: impl Field + 'static) -> Result<Self, SchemaError> {
        if !self.parts.is_empty() {
            return Err(SchemaError::FieldAfterSection);
        }
        let bits = self.pending_bits.take();
        self.fields.push(FieldSlot {
            field: Box::new(f),
            bits,
        });
        Ok(self)
    }

    /// Bit width a field without an explicit width would inherit from this
    /// segment: the declared length sized through the segment's own codec.
    /// `None` when either is unset.
    pub fn section_bits(&self) -> Option<u32> {
        match (&self.codec, self.length) {
            (Some(c), Some(n)) => Some(c.bits_for_length(n)),
            _ => None,
        }
    }
}
