use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::{ChannelClass, ChannelOrder, ChannelType, TextureFormat, WireFormatId};

/// The family of block compression used by a [CompressedFormat].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display)]
pub enum CompressedFamily {
    /// BC1 to BC7 with 4x4 blocks.
    Bc,
    /// ETC2 color formats with 4x4 blocks.
    Etc2,
    /// EAC one and two channel formats with 4x4 blocks.
    Eac,
    /// ASTC LDR formats with variable block dimensions.
    Astc,
}

/// A block compressed encoding with a fixed block size.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug, PartialEq, Eq, Hash, Clone, Copy, EnumCount, EnumIter, IntoStaticStr, Display,
)]
pub enum CompressedFormat {
    Bc1RgbUnorm,
    Bc1RgbSrgb,
    Bc1RgbaUnorm,
    Bc1RgbaSrgb,
    Bc2Unorm,
    Bc2Srgb,
    Bc3Unorm,
    Bc3Srgb,
    Bc4Unorm,
    Bc4Snorm,
    Bc5Unorm,
    Bc5Snorm,
    Bc6hUfloat,
    Bc6hSfloat,
    Bc7Unorm,
    Bc7Srgb,
    Etc2Rgb8Unorm,
    Etc2Rgb8Srgb,
    Etc2Rgb8A1Unorm,
    Etc2Rgb8A1Srgb,
    Etc2Rgba8Unorm,
    Etc2Rgba8Srgb,
    EacR11Unorm,
    EacR11Snorm,
    EacRg11Unorm,
    EacRg11Snorm,
    Astc4x4Unorm,
    Astc4x4Srgb,
    Astc5x4Unorm,
    Astc5x4Srgb,
    Astc5x5Unorm,
    Astc5x5Srgb,
    Astc6x5Unorm,
    Astc6x5Srgb,
    Astc6x6Unorm,
    Astc6x6Srgb,
    Astc8x5Unorm,
    Astc8x5Srgb,
    Astc8x6Unorm,
    Astc8x6Srgb,
    Astc8x8Unorm,
    Astc8x8Srgb,
    Astc10x5Unorm,
    Astc10x5Srgb,
    Astc10x6Unorm,
    Astc10x6Srgb,
    Astc10x8Unorm,
    Astc10x8Srgb,
    Astc10x10Unorm,
    Astc10x10Srgb,
    Astc12x10Unorm,
    Astc12x10Srgb,
    Astc12x12Unorm,
    Astc12x12Srgb,
}

// Compressed formats and wire formats are listed in the same order.
const _: () = assert!(
    CompressedFormat::COUNT
        == (WireFormatId::ASTC_12X12_SRGB_BLOCK.0 - WireFormatId::BC1_RGB_UNORM_BLOCK.0 + 1)
            as usize
);

/// Returns `true` if `format` stores block compressed data.
pub const fn is_compressed_format(format: WireFormatId) -> bool {
    compressed_format(format).is_some()
}

/// The block compressed encoding for `format` or [None] if `format` is not compressed.
pub const fn compressed_format(format: WireFormatId) -> Option<CompressedFormat> {
    use CompressedFormat as C;
    use WireFormatId as F;

    let compressed = match format {
        F::BC1_RGB_UNORM_BLOCK => C::Bc1RgbUnorm,
        F::BC1_RGB_SRGB_BLOCK => C::Bc1RgbSrgb,
        F::BC1_RGBA_UNORM_BLOCK => C::Bc1RgbaUnorm,
        F::BC1_RGBA_SRGB_BLOCK => C::Bc1RgbaSrgb,
        F::BC2_UNORM_BLOCK => C::Bc2Unorm,
        F::BC2_SRGB_BLOCK => C::Bc2Srgb,
        F::BC3_UNORM_BLOCK => C::Bc3Unorm,
        F::BC3_SRGB_BLOCK => C::Bc3Srgb,
        F::BC4_UNORM_BLOCK => C::Bc4Unorm,
        F::BC4_SNORM_BLOCK => C::Bc4Snorm,
        F::BC5_UNORM_BLOCK => C::Bc5Unorm,
        F::BC5_SNORM_BLOCK => C::Bc5Snorm,
        F::BC6H_UFLOAT_BLOCK => C::Bc6hUfloat,
        F::BC6H_SFLOAT_BLOCK => C::Bc6hSfloat,
        F::BC7_UNORM_BLOCK => C::Bc7Unorm,
        F::BC7_SRGB_BLOCK => C::Bc7Srgb,
        F::ETC2_R8G8B8_UNORM_BLOCK => C::Etc2Rgb8Unorm,
        F::ETC2_R8G8B8_SRGB_BLOCK => C::Etc2Rgb8Srgb,
        F::ETC2_R8G8B8A1_UNORM_BLOCK => C::Etc2Rgb8A1Unorm,
        F::ETC2_R8G8B8A1_SRGB_BLOCK => C::Etc2Rgb8A1Srgb,
        F::ETC2_R8G8B8A8_UNORM_BLOCK => C::Etc2Rgba8Unorm,
        F::ETC2_R8G8B8A8_SRGB_BLOCK => C::Etc2Rgba8Srgb,
        F::EAC_R11_UNORM_BLOCK => C::EacR11Unorm,
        F::EAC_R11_SNORM_BLOCK => C::EacR11Snorm,
        F::EAC_R11G11_UNORM_BLOCK => C::EacRg11Unorm,
        F::EAC_R11G11_SNORM_BLOCK => C::EacRg11Snorm,
        F::ASTC_4X4_UNORM_BLOCK => C::Astc4x4Unorm,
        F::ASTC_4X4_SRGB_BLOCK => C::Astc4x4Srgb,
        F::ASTC_5X4_UNORM_BLOCK => C::Astc5x4Unorm,
        F::ASTC_5X4_SRGB_BLOCK => C::Astc5x4Srgb,
        F::ASTC_5X5_UNORM_BLOCK => C::Astc5x5Unorm,
        F::ASTC_5X5_SRGB_BLOCK => C::Astc5x5Srgb,
        F::ASTC_6X5_UNORM_BLOCK => C::Astc6x5Unorm,
        F::ASTC_6X5_SRGB_BLOCK => C::Astc6x5Srgb,
        F::ASTC_6X6_UNORM_BLOCK => C::Astc6x6Unorm,
        F::ASTC_6X6_SRGB_BLOCK => C::Astc6x6Srgb,
        F::ASTC_8X5_UNORM_BLOCK => C::Astc8x5Unorm,
        F::ASTC_8X5_SRGB_BLOCK => C::Astc8x5Srgb,
        F::ASTC_8X6_UNORM_BLOCK => C::Astc8x6Unorm,
        F::ASTC_8X6_SRGB_BLOCK => C::Astc8x6Srgb,
        F::ASTC_8X8_UNORM_BLOCK => C::Astc8x8Unorm,
        F::ASTC_8X8_SRGB_BLOCK => C::Astc8x8Srgb,
        F::ASTC_10X5_UNORM_BLOCK => C::Astc10x5Unorm,
        F::ASTC_10X5_SRGB_BLOCK => C::Astc10x5Srgb,
        F::ASTC_10X6_UNORM_BLOCK => C::Astc10x6Unorm,
        F::ASTC_10X6_SRGB_BLOCK => C::Astc10x6Srgb,
        F::ASTC_10X8_UNORM_BLOCK => C::Astc10x8Unorm,
        F::ASTC_10X8_SRGB_BLOCK => C::Astc10x8Srgb,
        F::ASTC_10X10_UNORM_BLOCK => C::Astc10x10Unorm,
        F::ASTC_10X10_SRGB_BLOCK => C::Astc10x10Srgb,
        F::ASTC_12X10_UNORM_BLOCK => C::Astc12x10Unorm,
        F::ASTC_12X10_SRGB_BLOCK => C::Astc12x10Srgb,
        F::ASTC_12X12_UNORM_BLOCK => C::Astc12x12Unorm,
        F::ASTC_12X12_SRGB_BLOCK => C::Astc12x12Srgb,
        _ => return None,
    };
    Some(compressed)
}

impl CompressedFormat {
    /// The wire format for this compressed encoding.
    pub const fn wire_format(self) -> WireFormatId {
        // Variants are declared in wire format order.
        WireFormatId(WireFormatId::BC1_RGB_UNORM_BLOCK.0 + self as u32)
    }

    pub const fn family(self) -> CompressedFamily {
        use CompressedFormat as C;

        match self {
            C::Bc1RgbUnorm
            | C::Bc1RgbSrgb
            | C::Bc1RgbaUnorm
            | C::Bc1RgbaSrgb
            | C::Bc2Unorm
            | C::Bc2Srgb
            | C::Bc3Unorm
            | C::Bc3Srgb
            | C::Bc4Unorm
            | C::Bc4Snorm
            | C::Bc5Unorm
            | C::Bc5Snorm
            | C::Bc6hUfloat
            | C::Bc6hSfloat
            | C::Bc7Unorm
            | C::Bc7Srgb => CompressedFamily::Bc,
            C::Etc2Rgb8Unorm
            | C::Etc2Rgb8Srgb
            | C::Etc2Rgb8A1Unorm
            | C::Etc2Rgb8A1Srgb
            | C::Etc2Rgba8Unorm
            | C::Etc2Rgba8Srgb => CompressedFamily::Etc2,
            C::EacR11Unorm | C::EacR11Snorm | C::EacRg11Unorm | C::EacRg11Snorm => {
                CompressedFamily::Eac
            }
            _ => CompressedFamily::Astc,
        }
    }

    /// The width, height, and depth of a block in texels.
    pub const fn block_dimensions(self) -> (u32, u32, u32) {
        use CompressedFormat as C;

        match self {
            C::Astc4x4Unorm | C::Astc4x4Srgb => (4, 4, 1),
            C::Astc5x4Unorm | C::Astc5x4Srgb => (5, 4, 1),
            C::Astc5x5Unorm | C::Astc5x5Srgb => (5, 5, 1),
            C::Astc6x5Unorm | C::Astc6x5Srgb => (6, 5, 1),
            C::Astc6x6Unorm | C::Astc6x6Srgb => (6, 6, 1),
            C::Astc8x5Unorm | C::Astc8x5Srgb => (8, 5, 1),
            C::Astc8x6Unorm | C::Astc8x6Srgb => (8, 6, 1),
            C::Astc8x8Unorm | C::Astc8x8Srgb => (8, 8, 1),
            C::Astc10x5Unorm | C::Astc10x5Srgb => (10, 5, 1),
            C::Astc10x6Unorm | C::Astc10x6Srgb => (10, 6, 1),
            C::Astc10x8Unorm | C::Astc10x8Srgb => (10, 8, 1),
            C::Astc10x10Unorm | C::Astc10x10Srgb => (10, 10, 1),
            C::Astc12x10Unorm | C::Astc12x10Srgb => (12, 10, 1),
            C::Astc12x12Unorm | C::Astc12x12Srgb => (12, 12, 1),
            // BC, ETC2, and EAC all use 4x4 blocks.
            _ => (4, 4, 1),
        }
    }

    pub const fn block_size_in_bytes(self) -> usize {
        use CompressedFormat as C;

        match self {
            C::Bc1RgbUnorm
            | C::Bc1RgbSrgb
            | C::Bc1RgbaUnorm
            | C::Bc1RgbaSrgb
            | C::Bc4Unorm
            | C::Bc4Snorm
            | C::Etc2Rgb8Unorm
            | C::Etc2Rgb8Srgb
            | C::Etc2Rgb8A1Unorm
            | C::Etc2Rgb8A1Srgb
            | C::EacR11Unorm
            | C::EacR11Snorm => 8,
            _ => 16,
        }
    }

    /// Returns `true` if the encoding stores alpha, including 1-bit punch through alpha.
    ///
    /// Use [has_dedicated_alpha](Self::has_dedicated_alpha) to exclude punch through alpha.
    pub const fn has_alpha(self) -> bool {
        use CompressedFormat as C;

        match self.family() {
            CompressedFamily::Astc => true,
            CompressedFamily::Eac => false,
            _ => matches!(
                self,
                C::Bc1RgbaUnorm
                    | C::Bc1RgbaSrgb
                    | C::Bc2Unorm
                    | C::Bc2Srgb
                    | C::Bc3Unorm
                    | C::Bc3Srgb
                    | C::Bc7Unorm
                    | C::Bc7Srgb
                    | C::Etc2Rgb8A1Unorm
                    | C::Etc2Rgb8A1Srgb
                    | C::Etc2Rgba8Unorm
                    | C::Etc2Rgba8Srgb
            ),
        }
    }

    /// Returns `true` if alpha is stored separately from the color endpoints.
    pub const fn has_dedicated_alpha(self) -> bool {
        use CompressedFormat as C;

        self.has_alpha()
            && !matches!(
                self,
                C::Bc1RgbaUnorm | C::Bc1RgbaSrgb | C::Etc2Rgb8A1Unorm | C::Etc2Rgb8A1Srgb
            )
    }

    /// The class of the encoded values.
    ///
    /// This can differ from the class of [uncompressed_format](Self::uncompressed_format),
    /// which is chosen to preserve decoded precision.
    pub const fn channel_class(self) -> ChannelClass {
        use CompressedFormat as C;

        match self {
            C::Bc6hUfloat | C::Bc6hSfloat => ChannelClass::Float,
            C::Bc4Snorm | C::Bc5Snorm | C::EacR11Snorm | C::EacRg11Snorm => ChannelClass::Snorm,
            _ => ChannelClass::Unorm,
        }
    }

    pub const fn is_srgb(self) -> bool {
        self.uncompressed_format().order.is_srgb()
    }

    /// The format of decompressed texels used when verifying decoded data.
    ///
    /// This does not describe how the compressed blocks are stored.
    pub const fn uncompressed_format(self) -> TextureFormat {
        use ChannelOrder as O;
        use ChannelType as T;
        use CompressedFormat as C;

        let (order, ty) = match self {
            C::Bc1RgbUnorm | C::Bc1RgbaUnorm | C::Bc2Unorm | C::Bc3Unorm | C::Bc7Unorm => {
                (O::Rgba, T::UnormInt8)
            }
            C::Bc1RgbSrgb | C::Bc1RgbaSrgb | C::Bc2Srgb | C::Bc3Srgb | C::Bc7Srgb => {
                (O::SrgbRgba, T::UnormInt8)
            }
            // Interpolated endpoints have more than 8 bits of precision.
            C::Bc4Unorm | C::Bc4Snorm => (O::R, T::Float),
            C::Bc5Unorm | C::Bc5Snorm => (O::Rg, T::Float),
            C::Bc6hUfloat | C::Bc6hSfloat => (O::Rgb, T::HalfFloat),
            C::Etc2Rgb8Unorm => (O::Rgb, T::UnormInt8),
            C::Etc2Rgb8Srgb => (O::SrgbRgb, T::UnormInt8),
            C::Etc2Rgb8A1Unorm | C::Etc2Rgba8Unorm => (O::Rgba, T::UnormInt8),
            C::Etc2Rgb8A1Srgb | C::Etc2Rgba8Srgb => (O::SrgbRgba, T::UnormInt8),
            C::EacR11Unorm => (O::R, T::UnormInt16),
            C::EacR11Snorm => (O::R, T::SnormInt16),
            C::EacRg11Unorm => (O::Rg, T::UnormInt16),
            C::EacRg11Snorm => (O::Rg, T::SnormInt16),
            C::Astc4x4Srgb
            | C::Astc5x4Srgb
            | C::Astc5x5Srgb
            | C::Astc6x5Srgb
            | C::Astc6x6Srgb
            | C::Astc8x5Srgb
            | C::Astc8x6Srgb
            | C::Astc8x8Srgb
            | C::Astc10x5Srgb
            | C::Astc10x6Srgb
            | C::Astc10x8Srgb
            | C::Astc10x10Srgb
            | C::Astc12x10Srgb
            | C::Astc12x12Srgb => (O::SrgbRgba, T::UnormInt8),
            // ASTC LDR decodes to half precision floats.
            _ => (O::Rgba, T::HalfFloat),
        };
        TextureFormat::new(order, ty)
    }
}

/// The format of decompressed texels for `format` used when verifying decoded data.
pub const fn uncompressed_equivalent(format: CompressedFormat) -> TextureFormat {
    format.uncompressed_format()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn compressed_format_bc1() {
        assert_eq!(
            Some(CompressedFormat::Bc1RgbaSrgb),
            compressed_format(WireFormatId::BC1_RGBA_SRGB_BLOCK)
        );
    }

    #[test]
    fn compressed_format_uncompressed() {
        assert_eq!(None, compressed_format(WireFormatId::R8G8B8A8_UNORM));
        assert_eq!(None, compressed_format(WireFormatId::UNDEFINED));
        assert_eq!(None, compressed_format(WireFormatId(5000)));
    }

    #[test]
    fn wire_format_round_trip() {
        for format in CompressedFormat::iter() {
            assert_eq!(Some(format), compressed_format(format.wire_format()));
        }
    }

    #[test]
    fn astc_block_dimensions() {
        assert_eq!((10, 6, 1), CompressedFormat::Astc10x6Srgb.block_dimensions());
        assert_eq!((12, 12, 1), CompressedFormat::Astc12x12Unorm.block_dimensions());
        assert_eq!(16, CompressedFormat::Astc12x12Unorm.block_size_in_bytes());
    }

    #[test]
    fn bc_block_dimensions() {
        assert_eq!((4, 4, 1), CompressedFormat::Bc6hSfloat.block_dimensions());
        assert_eq!(8, CompressedFormat::Bc4Snorm.block_size_in_bytes());
        assert_eq!(16, CompressedFormat::Bc5Snorm.block_size_in_bytes());
    }

    #[test]
    fn alpha_channels() {
        assert!(!CompressedFormat::Bc1RgbUnorm.has_alpha());
        assert!(CompressedFormat::Bc1RgbaUnorm.has_alpha());
        assert!(!CompressedFormat::EacRg11Snorm.has_alpha());
        assert!(CompressedFormat::Etc2Rgb8A1Srgb.has_alpha());
        assert!(CompressedFormat::Astc8x5Unorm.has_alpha());
        assert!(!CompressedFormat::Bc6hUfloat.has_alpha());
    }

    #[test]
    fn dedicated_alpha_excludes_punch_through() {
        assert!(CompressedFormat::Bc1RgbaSrgb.has_alpha());
        assert!(!CompressedFormat::Bc1RgbaSrgb.has_dedicated_alpha());
        assert!(!CompressedFormat::Etc2Rgb8A1Unorm.has_dedicated_alpha());
        assert!(CompressedFormat::Etc2Rgba8Unorm.has_dedicated_alpha());
        assert!(CompressedFormat::Bc3Unorm.has_dedicated_alpha());
        assert!(CompressedFormat::Astc6x6Srgb.has_dedicated_alpha());
        assert!(!CompressedFormat::Bc5Unorm.has_dedicated_alpha());
    }

    #[test]
    fn bc4_unorm_decodes_to_float() {
        assert_eq!(
            TextureFormat::new(ChannelOrder::R, ChannelType::Float),
            uncompressed_equivalent(CompressedFormat::Bc4Unorm)
        );
    }

    #[test]
    fn bc4_snorm_decodes_to_float() {
        assert_eq!(
            TextureFormat::new(ChannelOrder::R, ChannelType::Float),
            uncompressed_equivalent(CompressedFormat::Bc4Snorm)
        );
    }

    #[test]
    fn bc5_unorm_decodes_to_float() {
        assert_eq!(
            TextureFormat::new(ChannelOrder::Rg, ChannelType::Float),
            uncompressed_equivalent(CompressedFormat::Bc5Unorm)
        );
    }

    #[test]
    fn bc5_snorm_decodes_to_float() {
        assert_eq!(
            TextureFormat::new(ChannelOrder::Rg, ChannelType::Float),
            uncompressed_equivalent(CompressedFormat::Bc5Snorm)
        );
    }

    #[test]
    fn encoded_channel_class() {
        assert_eq!(ChannelClass::Unorm, CompressedFormat::Bc4Unorm.channel_class());
        assert_eq!(ChannelClass::Snorm, CompressedFormat::Bc5Snorm.channel_class());
        assert_eq!(ChannelClass::Snorm, CompressedFormat::EacRg11Snorm.channel_class());
        assert_eq!(ChannelClass::Float, CompressedFormat::Bc6hUfloat.channel_class());
        assert_eq!(ChannelClass::Unorm, CompressedFormat::Astc10x8Unorm.channel_class());
        assert_eq!(ChannelClass::Unorm, CompressedFormat::Etc2Rgb8Srgb.channel_class());
    }

    #[test]
    fn srgb_formats() {
        let srgb: Vec<_> = CompressedFormat::iter().filter(|f| f.is_srgb()).collect();
        assert_eq!(5 + 3 + 14, srgb.len());
        assert!(srgb.iter().all(|f| <&str>::from(*f).ends_with("Srgb")));
    }

    #[test]
    fn families() {
        assert_eq!(CompressedFamily::Bc, CompressedFormat::Bc7Srgb.family());
        assert_eq!(CompressedFamily::Etc2, CompressedFormat::Etc2Rgba8Unorm.family());
        assert_eq!(CompressedFamily::Eac, CompressedFormat::EacR11Unorm.family());
        assert_eq!(CompressedFamily::Astc, CompressedFormat::Astc4x4Unorm.family());
    }

    #[test]
    fn uncompressed_formats_are_valid() {
        for format in CompressedFormat::iter() {
            assert!(uncompressed_equivalent(format).is_valid(), "{format}");
        }
    }
}
