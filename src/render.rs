//! Materialization: turn a segment tree into its encoded string.
//!
//! Rendering is a single recursive pass in declaration order. A field-mode
//! segment resolves each field's bit width, folds the field buffers through
//! [`concat_bits`] into one packed buffer, encodes it with the segment's
//! effective codec, and applies the declared-length policy. A section-mode
//! segment concatenates its children's renders, delimiters passing through
//! verbatim; a segment with no content renders to the empty string.
//!
//! The codec a segment encodes with is its own if set, else the nearest
//! ancestor's, carried down in a render context rather than looked up through
//! parent pointers. Declared lengths are strictly per segment and never
//! inherit.
//!
//! The tree is read-only during rendering, so one schema can be rendered
//! repeatedly (or from several threads) as long as no builder call races with
//! a render.

use crate::bits::concat_bits;
use crate::codec::Codec;
use crate::schema::{Part, Segment};

/// Failure while materializing a schema. Like
/// [`SchemaError`](crate::schema::SchemaError), these report a structurally
/// incomplete schema, not bad data.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no charset configured for a field-holding segment or any of its ancestors")]
    MissingCodec,
    #[error("field has neither an explicit bit width nor a segment length to derive one from")]
    UnresolvedWidth,
    #[error("encoded output is {got} characters but the segment declares length {want}")]
    LengthOverflow { want: u32, got: usize },
}

/// Inherited state threaded through the render recursion.
struct RenderCtx<'a> {
    /// Nearest ancestor codec, used when a segment has none of its own.
    codec: Option<&'a Codec>,
}

impl Segment {
    /// Materialize the tree into its encoded string.
    pub fn render(&self) -> Result<String, RenderError> {
        self.render_with(&RenderCtx { codec: None })
    }

    fn render_with(&self, ctx: &RenderCtx<'_>) -> Result<String, RenderError> {
        if !self.fields.is_empty() {
            return self.render_fields(ctx);
        }
        let child_ctx = RenderCtx {
            codec: self.codec.as_ref().or(ctx.codec),
        };
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Section(child) => out.push_str(&child.render_with(&child_ctx)?),
                Part::Delimiter(lit) => out.push_str(lit),
            }
        }
        Ok(out)
    }

    fn render_fields(&self, ctx: &RenderCtx<'_>) -> Result<String, RenderError> {
        let codec = self
            .codec
            .as_ref()
            .or(ctx.codec)
            .ok_or(RenderError::MissingCodec)?;
        let derived = self.length.map(|n| codec.bits_for_length(n));

        let mut packed: Vec<u8> = Vec::new();
        let mut total_bits: u32 = 0;
        for slot in &self.fields {
            let bits = slot.bits.or(derived).ok_or(RenderError::UnresolvedWidth)?;
            packed = concat_bits(&packed, total_bits, &slot.field.bytes(), bits);
            total_bits += bits;
        }

        let encoded = codec.encode(&packed);
        match self.length {
            Some(want) if encoded.len() > want as usize => Err(RenderError::LengthOverflow {
                want,
                got: encoded.len(),
            }),
            Some(want) => {
                // left-pad with the charset's zero digit up to the declared length
                let mut out = String::with_capacity(want as usize);
                for _ in encoded.len()..want as usize {
                    out.push(codec.zero_digit());
                }
                out.push_str(&encoded);
                Ok(out)
            }
            None => Ok(encoded),
        }
    }
}
