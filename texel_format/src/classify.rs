use strum::Display;

use crate::{
    compressed_format, map_wire_format, Aspect, ChannelOrder, ChannelType, FormatError,
    TextureFormat, WireFormatId,
};

/// How the values of a format's channels are interpreted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum ChannelClass {
    Float,
    Unorm,
    Snorm,
    SignedInt,
    UnsignedInt,
    /// Combined depth and stencil with a different class for each aspect.
    DepthStencilComposite,
    Other,
}

impl ChannelType {
    /// The class of the channel values.
    ///
    /// Packed types use the class of their declared components.
    /// Depth stencil packings use the class of the depth component.
    pub const fn channel_class(self) -> ChannelClass {
        use ChannelType as T;

        match self {
            T::SnormInt8 | T::SnormInt16 | T::SnormInt1010102Rev => ChannelClass::Snorm,
            T::UnormInt8
            | T::UnormInt16
            | T::UnormByte44
            | T::UnormShort565
            | T::UnormShort4444
            | T::UnormShort5551
            | T::UnormShort1555
            | T::UnormInt1010102Rev
            | T::UnsignedInt16_8_8
            | T::UnsignedInt24_8Rev => ChannelClass::Unorm,
            T::SignedInt8
            | T::SignedInt16
            | T::SignedInt32
            | T::SignedInt64
            | T::SignedInt1010102Rev => ChannelClass::SignedInt,
            T::UnsignedInt8
            | T::UnsignedInt16
            | T::UnsignedInt32
            | T::UnsignedInt64
            | T::UnsignedInt1010102Rev => ChannelClass::UnsignedInt,
            T::HalfFloat
            | T::Float
            | T::Float64
            | T::UnsignedInt11f11f10fRev
            | T::UnsignedInt999E5Rev
            | T::FloatUnsignedInt24_8Rev => ChannelClass::Float,
        }
    }
}

impl TextureFormat {
    pub const fn channel_class(&self) -> ChannelClass {
        match self.order {
            ChannelOrder::Ds => ChannelClass::DepthStencilComposite,
            _ => self.ty.channel_class(),
        }
    }
}

/// Classify the channels of `format`.
///
/// Compressed formats use the class of their encoded values.
/// [WireFormatId::UNDEFINED] is [ChannelClass::Other].
/// Only identifiers outside the known range fail.
pub fn channel_class(format: WireFormatId) -> Result<ChannelClass, FormatError> {
    format.index()?;

    if let Some(compressed) = compressed_format(format) {
        return Ok(compressed.channel_class());
    }

    match map_wire_format(format) {
        Ok(texture_format) => Ok(texture_format.channel_class()),
        Err(FormatError::UnsupportedWireFormat { .. }) => Ok(ChannelClass::Other),
        Err(e) => Err(e),
    }
}

fn has_class(format: WireFormatId, class: ChannelClass) -> bool {
    channel_class(format) == Ok(class)
}

pub fn is_float_format(format: WireFormatId) -> bool {
    has_class(format, ChannelClass::Float)
}

pub fn is_unorm_format(format: WireFormatId) -> bool {
    has_class(format, ChannelClass::Unorm)
}

pub fn is_snorm_format(format: WireFormatId) -> bool {
    has_class(format, ChannelClass::Snorm)
}

pub fn is_int_format(format: WireFormatId) -> bool {
    has_class(format, ChannelClass::SignedInt)
}

pub fn is_uint_format(format: WireFormatId) -> bool {
    has_class(format, ChannelClass::UnsignedInt)
}

/// Returns `true` if `format` has a depth aspect.
pub fn has_depth_component(format: WireFormatId) -> bool {
    map_wire_format(format).is_ok_and(|f| f.order.has_depth())
}

/// Returns `true` if `format` has a stencil aspect.
pub fn has_stencil_component(format: WireFormatId) -> bool {
    map_wire_format(format).is_ok_and(|f| f.order.has_stencil())
}

/// Returns `true` if `format` has a depth aspect, a stencil aspect, or both.
pub fn is_depth_stencil_format(format: WireFormatId) -> bool {
    has_depth_component(format) || has_stencil_component(format)
}

/// Returns `true` if `format` stores sRGB encoded color.
pub fn is_srgb_format(format: WireFormatId) -> bool {
    match compressed_format(format) {
        Some(compressed) => compressed.is_srgb(),
        None => map_wire_format(format).is_ok_and(|f| f.order.is_srgb()),
    }
}

/// The format of the depth aspect of `format` as it appears in a depth only buffer.
pub fn depth_aspect_format(format: WireFormatId) -> Result<TextureFormat, FormatError> {
    aspect_format(format, Aspect::Depth)
}

/// The format of the stencil aspect of `format` as it appears in a stencil only buffer.
///
/// This is always 8-bit unsigned integer stencil.
pub fn stencil_aspect_format(format: WireFormatId) -> Result<TextureFormat, FormatError> {
    aspect_format(format, Aspect::Stencil)
}

fn aspect_format(format: WireFormatId, aspect: Aspect) -> Result<TextureFormat, FormatError> {
    let texture_format = match map_wire_format(format) {
        Ok(f) => f,
        Err(FormatError::UnknownFormat { id }) => return Err(FormatError::UnknownFormat { id }),
        Err(_) => return Err(FormatError::MissingAspect { format, aspect }),
    };

    match aspect {
        Aspect::Depth => texture_format.depth_aspect(),
        Aspect::Stencil => texture_format.stencil_aspect(),
    }
    .ok_or(FormatError::MissingAspect { format, aspect })
}
