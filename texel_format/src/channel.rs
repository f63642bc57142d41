use std::fmt;

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The channels present in a texel and the order they are declared in.
///
/// The `Srgb` orders share their memory layout with the linear order of the same name
/// but store sRGB encoded color values.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum ChannelOrder {
    R,
    Rg,
    Rgb,
    Rgba,
    Bgr,
    Bgra,
    Argb,
    SrgbR,
    SrgbRg,
    SrgbRgb,
    SrgbRgba,
    SrgbBgr,
    SrgbBgra,
    /// Depth only.
    D,
    /// Stencil only.
    S,
    /// Combined depth and stencil.
    Ds,
}

impl ChannelOrder {
    /// The number of channels stored for each texel.
    pub const fn channel_count(self) -> usize {
        match self {
            Self::R | Self::SrgbR | Self::D | Self::S => 1,
            Self::Rg | Self::SrgbRg | Self::Ds => 2,
            Self::Rgb | Self::Bgr | Self::SrgbRgb | Self::SrgbBgr => 3,
            Self::Rgba | Self::Bgra | Self::Argb | Self::SrgbRgba | Self::SrgbBgra => 4,
        }
    }

    pub const fn is_srgb(self) -> bool {
        matches!(
            self,
            Self::SrgbR
                | Self::SrgbRg
                | Self::SrgbRgb
                | Self::SrgbRgba
                | Self::SrgbBgr
                | Self::SrgbBgra
        )
    }

    /// The order with the same layout that stores linear values.
    pub const fn linear(self) -> Self {
        match self {
            Self::SrgbR => Self::R,
            Self::SrgbRg => Self::Rg,
            Self::SrgbRgb => Self::Rgb,
            Self::SrgbRgba => Self::Rgba,
            Self::SrgbBgr => Self::Bgr,
            Self::SrgbBgra => Self::Bgra,
            other => other,
        }
    }

    pub const fn has_depth(self) -> bool {
        matches!(self, Self::D | Self::Ds)
    }

    pub const fn has_stencil(self) -> bool {
        matches!(self, Self::S | Self::Ds)
    }
}

/// The storage of each channel in a texel.
///
/// Packed types describe the whole texel and list components
/// from the most significant bits to the least significant bits.
/// The `Rev` types store the first declared channel in the least significant bits.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
pub enum ChannelType {
    SnormInt8,
    SnormInt16,
    UnormInt8,
    UnormInt16,
    /// 4:4 in a single byte.
    UnormByte44,
    UnormShort565,
    UnormShort4444,
    UnormShort5551,
    UnormShort1555,
    UnormInt1010102Rev,
    SnormInt1010102Rev,
    UnsignedInt1010102Rev,
    SignedInt1010102Rev,
    /// Unsigned 11, 11 and 10 bit floats without a sign bit.
    UnsignedInt11f11f10fRev,
    /// Three 9 bit mantissas sharing a 5 bit exponent.
    UnsignedInt999E5Rev,
    /// 16 bit unorm depth, 8 bits of padding and 8 bit stencil.
    UnsignedInt16_8_8,
    /// 24 bit unorm depth in the low bits and 8 bits of stencil or padding in the high bits.
    UnsignedInt24_8Rev,
    /// 32 bit float depth, 24 bits of padding and 8 bit stencil.
    FloatUnsignedInt24_8Rev,
    SignedInt8,
    SignedInt16,
    SignedInt32,
    SignedInt64,
    UnsignedInt8,
    UnsignedInt16,
    UnsignedInt32,
    UnsignedInt64,
    HalfFloat,
    Float,
    Float64,
}

impl ChannelType {
    /// Returns `true` if the type describes the layout of the whole texel
    /// rather than a single channel.
    pub const fn is_packed(self) -> bool {
        self.packed_size().is_some()
    }

    /// The size in bytes of one channel or [None] for packed types.
    pub const fn channel_size(self) -> Option<usize> {
        match self {
            Self::SnormInt8 | Self::UnormInt8 | Self::SignedInt8 | Self::UnsignedInt8 => Some(1),
            Self::SnormInt16
            | Self::UnormInt16
            | Self::SignedInt16
            | Self::UnsignedInt16
            | Self::HalfFloat => Some(2),
            Self::SignedInt32 | Self::UnsignedInt32 | Self::Float => Some(4),
            Self::SignedInt64 | Self::UnsignedInt64 | Self::Float64 => Some(8),
            _ => None,
        }
    }

    const fn packed_size(self) -> Option<usize> {
        match self {
            Self::UnormByte44 => Some(1),
            Self::UnormShort565
            | Self::UnormShort4444
            | Self::UnormShort5551
            | Self::UnormShort1555 => Some(2),
            Self::UnormInt1010102Rev
            | Self::SnormInt1010102Rev
            | Self::UnsignedInt1010102Rev
            | Self::SignedInt1010102Rev
            | Self::UnsignedInt11f11f10fRev
            | Self::UnsignedInt999E5Rev
            | Self::UnsignedInt16_8_8
            | Self::UnsignedInt24_8Rev => Some(4),
            Self::FloatUnsignedInt24_8Rev => Some(8),
            _ => None,
        }
    }
}

/// The depth or stencil part of a combined depth stencil format.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum Aspect {
    #[strum(serialize = "depth")]
    Depth,
    #[strum(serialize = "stencil")]
    Stencil,
}

/// A generic texel format independent of any host format identifier.
///
/// The pair fully determines the size and bit layout of a texel.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct TextureFormat {
    pub order: ChannelOrder,
    pub ty: ChannelType,
}

impl TextureFormat {
    pub const fn new(order: ChannelOrder, ty: ChannelType) -> Self {
        Self { order, ty }
    }

    /// The size of a single texel in bytes.
    pub const fn pixel_size(&self) -> usize {
        match self.ty.packed_size() {
            Some(size) => size,
            None => match self.ty.channel_size() {
                Some(size) => size * self.order.channel_count(),
                None => 0,
            },
        }
    }

    /// Returns `true` if the channel type can be used with the channel order.
    ///
    /// Packed types constrain the number and kind of channels.
    /// Depth, stencil and sRGB orders only support the types the host API defines for them.
    pub const fn is_valid(&self) -> bool {
        use ChannelOrder as O;
        use ChannelType as T;

        match self.ty {
            T::UnormByte44 => matches!(self.order, O::Rg),
            T::UnormShort565 => matches!(self.order, O::Rgb | O::Bgr),
            T::UnormShort4444 | T::UnormShort5551 => matches!(self.order, O::Rgba | O::Bgra),
            T::UnormShort1555 => matches!(self.order, O::Argb),
            T::UnormInt1010102Rev
            | T::SnormInt1010102Rev
            | T::UnsignedInt1010102Rev
            | T::SignedInt1010102Rev => matches!(self.order, O::Rgba | O::Bgra),
            T::UnsignedInt11f11f10fRev | T::UnsignedInt999E5Rev => matches!(self.order, O::Rgb),
            T::UnsignedInt24_8Rev => matches!(self.order, O::D | O::Ds),
            T::UnsignedInt16_8_8 | T::FloatUnsignedInt24_8Rev => matches!(self.order, O::Ds),
            T::UnormInt8 => !matches!(self.order, O::D | O::S | O::Ds),
            T::UnormInt16 | T::Float => {
                !self.order.is_srgb() && !matches!(self.order, O::S | O::Ds)
            }
            T::UnsignedInt8 => !self.order.is_srgb() && !matches!(self.order, O::D | O::Ds),
            _ => !self.order.is_srgb() && !matches!(self.order, O::D | O::S | O::Ds),
        }
    }

    /// The format of the depth aspect in a depth only buffer.
    ///
    /// There is no single memory layout for interleaved depth and stencil,
    /// so combined formats are only accessible one aspect at a time.
    pub const fn depth_aspect(&self) -> Option<Self> {
        match (self.order, self.ty) {
            (ChannelOrder::D, _) => Some(*self),
            (ChannelOrder::Ds, ChannelType::UnsignedInt16_8_8) => {
                Some(Self::new(ChannelOrder::D, ChannelType::UnormInt16))
            }
            (ChannelOrder::Ds, ChannelType::UnsignedInt24_8Rev) => {
                Some(Self::new(ChannelOrder::D, ChannelType::UnsignedInt24_8Rev))
            }
            (ChannelOrder::Ds, ChannelType::FloatUnsignedInt24_8Rev) => {
                Some(Self::new(ChannelOrder::D, ChannelType::Float))
            }
            _ => None,
        }
    }

    /// The format of the stencil aspect in a stencil only buffer.
    pub const fn stencil_aspect(&self) -> Option<Self> {
        match self.order {
            ChannelOrder::S | ChannelOrder::Ds => {
                Some(Self::new(ChannelOrder::S, ChannelType::UnsignedInt8))
            }
            _ => None,
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.order, self.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn pixel_size_rgba8() {
        assert_eq!(
            4,
            TextureFormat::new(ChannelOrder::Rgba, ChannelType::UnormInt8).pixel_size()
        );
    }

    #[test]
    fn pixel_size_rgb_float64() {
        assert_eq!(
            24,
            TextureFormat::new(ChannelOrder::Rgb, ChannelType::Float64).pixel_size()
        );
    }

    #[test]
    fn pixel_size_packed() {
        assert_eq!(
            1,
            TextureFormat::new(ChannelOrder::Rg, ChannelType::UnormByte44).pixel_size()
        );
        assert_eq!(
            2,
            TextureFormat::new(ChannelOrder::Argb, ChannelType::UnormShort1555).pixel_size()
        );
        assert_eq!(
            8,
            TextureFormat::new(ChannelOrder::Ds, ChannelType::FloatUnsignedInt24_8Rev)
                .pixel_size()
        );
    }

    #[test]
    fn srgb_orders_share_layout() {
        for order in ChannelOrder::iter().filter(|o| o.is_srgb()) {
            assert_eq!(order.channel_count(), order.linear().channel_count());
            assert!(!order.linear().is_srgb());
        }
    }

    #[test]
    fn packed_types_have_no_channel_size() {
        for ty in ChannelType::iter() {
            assert_ne!(ty.is_packed(), ty.channel_size().is_some(), "{ty}");
        }
    }

    #[test]
    fn valid_depth_formats() {
        assert!(TextureFormat::new(ChannelOrder::D, ChannelType::UnormInt16).is_valid());
        assert!(TextureFormat::new(ChannelOrder::D, ChannelType::Float).is_valid());
        assert!(TextureFormat::new(ChannelOrder::D, ChannelType::UnsignedInt24_8Rev).is_valid());
        assert!(!TextureFormat::new(ChannelOrder::D, ChannelType::UnormInt8).is_valid());
        assert!(!TextureFormat::new(ChannelOrder::Ds, ChannelType::Float).is_valid());
    }

    #[test]
    fn invalid_packed_order() {
        assert!(!TextureFormat::new(ChannelOrder::Rgba, ChannelType::UnormShort565).is_valid());
        let format = TextureFormat::new(ChannelOrder::Bgr, ChannelType::UnsignedInt999E5Rev);
        assert!(!format.is_valid());
    }

    #[test]
    fn srgb_requires_unorm8() {
        assert!(TextureFormat::new(ChannelOrder::SrgbBgra, ChannelType::UnormInt8).is_valid());
        assert!(!TextureFormat::new(ChannelOrder::SrgbRgba, ChannelType::UnormInt16).is_valid());
    }

    #[test]
    fn depth_aspect_d24s8() {
        assert_eq!(
            Some(TextureFormat::new(
                ChannelOrder::D,
                ChannelType::UnsignedInt24_8Rev
            )),
            TextureFormat::new(ChannelOrder::Ds, ChannelType::UnsignedInt24_8Rev).depth_aspect()
        );
    }

    #[test]
    fn stencil_aspect_color() {
        assert_eq!(
            None,
            TextureFormat::new(ChannelOrder::Rgba, ChannelType::UnormInt8).stencil_aspect()
        );
    }

    #[test]
    fn display_texture_format() {
        assert_eq!(
            "(SrgbRgba, UnormInt8)",
            TextureFormat::new(ChannelOrder::SrgbRgba, ChannelType::UnormInt8).to_string()
        );
    }
}
