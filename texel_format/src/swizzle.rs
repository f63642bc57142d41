use crate::{map_wire_format, ChannelOrder, TextureFormat, WireFormatId};

/// The source of a single output component when reading a texel.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, strum::Display)]
pub enum ComponentSwizzle {
    Zero,
    One,
    R,
    G,
    B,
    A,
}

/// The components read for the output RGBA channels in order.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Swizzle {
    pub r: ComponentSwizzle,
    pub g: ComponentSwizzle,
    pub b: ComponentSwizzle,
    pub a: ComponentSwizzle,
}

impl Swizzle {
    pub const IDENTITY: Self = Self::new(
        ComponentSwizzle::R,
        ComponentSwizzle::G,
        ComponentSwizzle::B,
        ComponentSwizzle::A,
    );

    pub const fn new(
        r: ComponentSwizzle,
        g: ComponentSwizzle,
        b: ComponentSwizzle,
        a: ComponentSwizzle,
    ) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [ComponentSwizzle; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Swizzle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::fmt::Display for Swizzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl ChannelOrder {
    /// The default read swizzle for texels with this channel order.
    ///
    /// Components are named by their logical channel, so BGRA data
    /// that has been decoded into logical channels reads as the identity.
    /// Missing color channels read as zero and missing alpha reads as one.
    /// Stencil is exposed through the alpha component.
    pub const fn default_swizzle(self) -> Swizzle {
        use ChannelOrder as O;
        use ComponentSwizzle::{One, Zero, A, B, G, R};

        match self {
            O::R | O::SrgbR | O::D => Swizzle::new(R, Zero, Zero, One),
            O::Rg | O::SrgbRg => Swizzle::new(R, G, Zero, One),
            O::Rgb | O::Bgr | O::SrgbRgb | O::SrgbBgr => Swizzle::new(R, G, B, One),
            O::Rgba | O::Bgra | O::Argb | O::SrgbRgba | O::SrgbBgra => Swizzle::IDENTITY,
            O::S => Swizzle::new(Zero, Zero, Zero, A),
            O::Ds => Swizzle::new(R, Zero, Zero, A),
        }
    }
}

/// The default read swizzle for `format`.
///
/// This depends only on the channel order and never fails.
pub const fn default_swizzle(format: TextureFormat) -> Swizzle {
    format.order.default_swizzle()
}

/// The default read swizzle for a wire format.
///
/// Formats without a texel format such as [WireFormatId::UNDEFINED],
/// compressed formats, and unknown identifiers read as the identity.
pub fn default_swizzle_for_format(format: WireFormatId) -> Swizzle {
    map_wire_format(format)
        .map(default_swizzle)
        .unwrap_or(Swizzle::IDENTITY)
}

#[cfg(test)]
mod tests {
    use super::ComponentSwizzle::*;
    use super::*;
    use crate::ChannelType;
    use strum::IntoEnumIterator;

    #[test]
    fn swizzle_stencil() {
        assert_eq!(
            Swizzle::new(Zero, Zero, Zero, A),
            default_swizzle(TextureFormat::new(ChannelOrder::S, ChannelType::UnsignedInt8))
        );
    }

    #[test]
    fn swizzle_single_channel() {
        assert_eq!(Swizzle::new(R, Zero, Zero, One), ChannelOrder::R.default_swizzle());
        assert_eq!(Swizzle::new(R, Zero, Zero, One), ChannelOrder::D.default_swizzle());
    }

    #[test]
    fn swizzle_ignores_channel_type() {
        for order in ChannelOrder::iter() {
            let a = default_swizzle(TextureFormat::new(order, ChannelType::UnormInt8));
            let b = default_swizzle(TextureFormat::new(order, ChannelType::Float));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn swizzle_srgb_matches_linear() {
        for order in ChannelOrder::iter() {
            assert_eq!(order.default_swizzle(), order.linear().default_swizzle());
        }
    }

    #[test]
    fn swizzle_wire_formats() {
        assert_eq!(
            Swizzle::new(R, G, B, One),
            default_swizzle_for_format(WireFormatId::B8G8R8_UNORM)
        );
        assert_eq!(
            Swizzle::new(R, Zero, Zero, A),
            default_swizzle_for_format(WireFormatId::D32_SFLOAT_S8_UINT)
        );
    }

    #[test]
    fn swizzle_fallback_identity() {
        assert_eq!(Swizzle::IDENTITY, default_swizzle_for_format(WireFormatId::UNDEFINED));
        assert_eq!(
            Swizzle::IDENTITY,
            default_swizzle_for_format(WireFormatId::BC4_UNORM_BLOCK)
        );
        assert_eq!(Swizzle::IDENTITY, default_swizzle_for_format(WireFormatId(1000)));
    }

    #[test]
    fn swizzle_display() {
        assert_eq!("(R, Zero, Zero, One)", ChannelOrder::R.default_swizzle().to_string());
    }
}
