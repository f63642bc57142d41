use thiserror::Error;

use crate::{Aspect, BorderColorValue, TextureFormat, WireFormatId};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum FormatError {
    #[error("format identifier {id} is outside the known range")]
    UnknownFormat { id: u32 },

    #[error("wire format {format} has no generic texel format")]
    UnsupportedWireFormat { format: WireFormatId },

    #[error("wire format {format} is block compressed and has no per texel format")]
    CompressedFormat { format: WireFormatId },

    #[error("no wire format matches texel format {format}")]
    NoMatchingWireFormat { format: TextureFormat },

    #[error("wire format {format} has no {aspect} aspect")]
    MissingAspect { format: WireFormatId, aspect: Aspect },
}

#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum SamplerError {
    #[error("border color kind {kind} is not recognized")]
    InvalidBorderColorKind { kind: u32 },

    #[error("border color {value:?} does not match any predefined border color")]
    NoMatchingBorderColor { value: BorderColorValue },
}

/// A violated format table invariant found by [run_self_test](crate::run_self_test).
#[derive(Debug, PartialEq, Clone, Copy, Error)]
pub enum SelfTestError {
    #[error("failed to map wire format {format}: {source}")]
    ForwardMapping {
        format: WireFormatId,
        source: FormatError,
    },

    #[error("wire format {format} maps to invalid texel format {texture_format}")]
    InvalidTextureFormat {
        format: WireFormatId,
        texture_format: TextureFormat,
    },

    #[error(
        "failed to map texel format {texture_format} for wire format {format} back: {source}"
    )]
    ReverseMapping {
        format: WireFormatId,
        texture_format: TextureFormat,
        source: FormatError,
    },

    #[error(
        "wire format {format} maps to {texture_format} which maps back to {remapped} \
         ({remapped_texture_format:?})"
    )]
    RoundTrip {
        format: WireFormatId,
        texture_format: TextureFormat,
        remapped: WireFormatId,
        remapped_texture_format: Option<TextureFormat>,
    },

    #[error("wire format {format} is compressed but has no compressed block format")]
    MissingCompressedFormat { format: WireFormatId },

    #[error("compressed wire format {format} maps back to {remapped}")]
    CompressedRoundTrip {
        format: WireFormatId,
        remapped: WireFormatId,
    },

    #[error("the {aspect} aspect of wire format {format} narrows to {texture_format}")]
    AspectNarrowing {
        format: WireFormatId,
        aspect: Aspect,
        texture_format: TextureFormat,
    },

    #[error("failed to classify wire format {format}: {source}")]
    Classification {
        format: WireFormatId,
        source: FormatError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChannelOrder, ChannelType};

    #[test]
    fn round_trip_message() {
        let error = SelfTestError::RoundTrip {
            format: WireFormatId::R8_UNORM,
            texture_format: TextureFormat::new(ChannelOrder::R, ChannelType::UnormInt8),
            remapped: WireFormatId::R8_SNORM,
            remapped_texture_format: None,
        };
        let message = error.to_string();
        assert!(message.starts_with("wire format R8_UNORM maps to "));
        assert!(message.ends_with(" which maps back to R8_SNORM (None)"));
    }
}
