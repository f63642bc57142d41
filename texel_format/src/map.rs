use strum::EnumCount;

use crate::{
    compressed_format, ChannelOrder, ChannelType, FormatError, TextureFormat, WireFormatId,
    FORMAT_COUNT,
};

#[derive(Debug, Clone, Copy)]
enum ForwardEntry {
    Unsupported,
    Compressed,
    Texture(TextureFormat),
}

static FORWARD_TABLE: [ForwardEntry; FORMAT_COUNT] = build_forward_table();

const fn build_forward_table() -> [ForwardEntry; FORMAT_COUNT] {
    let mut table = [ForwardEntry::Unsupported; FORMAT_COUNT];
    let mut i = 0;
    while i < FORMAT_COUNT {
        table[i] = forward_entry(WireFormatId(i as u32));
        i += 1;
    }
    table
}

const fn forward_entry(format: WireFormatId) -> ForwardEntry {
    use ChannelOrder as O;
    use ChannelType as T;
    use WireFormatId as F;

    let (order, ty) = match format {
        F::R4G4_UNORM_PACK8 => (O::Rg, T::UnormByte44),
        F::R4G4B4A4_UNORM_PACK16 => (O::Rgba, T::UnormShort4444),
        F::B4G4R4A4_UNORM_PACK16 => (O::Bgra, T::UnormShort4444),
        F::R5G6B5_UNORM_PACK16 => (O::Rgb, T::UnormShort565),
        F::B5G6R5_UNORM_PACK16 => (O::Bgr, T::UnormShort565),
        F::R5G5B5A1_UNORM_PACK16 => (O::Rgba, T::UnormShort5551),
        F::B5G5R5A1_UNORM_PACK16 => (O::Bgra, T::UnormShort5551),
        F::A1R5G5B5_UNORM_PACK16 => (O::Argb, T::UnormShort1555),

        F::R8_UNORM => (O::R, T::UnormInt8),
        F::R8_SNORM => (O::R, T::SnormInt8),
        F::R8_USCALED => (O::R, T::UnsignedInt8),
        F::R8_SSCALED => (O::R, T::SignedInt8),
        F::R8_UINT => (O::R, T::UnsignedInt8),
        F::R8_SINT => (O::R, T::SignedInt8),
        F::R8_SRGB => (O::SrgbR, T::UnormInt8),

        F::R8G8_UNORM => (O::Rg, T::UnormInt8),
        F::R8G8_SNORM => (O::Rg, T::SnormInt8),
        F::R8G8_USCALED => (O::Rg, T::UnsignedInt8),
        F::R8G8_SSCALED => (O::Rg, T::SignedInt8),
        F::R8G8_UINT => (O::Rg, T::UnsignedInt8),
        F::R8G8_SINT => (O::Rg, T::SignedInt8),
        F::R8G8_SRGB => (O::SrgbRg, T::UnormInt8),

        F::R8G8B8_UNORM => (O::Rgb, T::UnormInt8),
        F::R8G8B8_SNORM => (O::Rgb, T::SnormInt8),
        F::R8G8B8_USCALED => (O::Rgb, T::UnsignedInt8),
        F::R8G8B8_SSCALED => (O::Rgb, T::SignedInt8),
        F::R8G8B8_UINT => (O::Rgb, T::UnsignedInt8),
        F::R8G8B8_SINT => (O::Rgb, T::SignedInt8),
        F::R8G8B8_SRGB => (O::SrgbRgb, T::UnormInt8),

        F::B8G8R8_UNORM => (O::Bgr, T::UnormInt8),
        F::B8G8R8_SNORM => (O::Bgr, T::SnormInt8),
        F::B8G8R8_USCALED => (O::Bgr, T::UnsignedInt8),
        F::B8G8R8_SSCALED => (O::Bgr, T::SignedInt8),
        F::B8G8R8_UINT => (O::Bgr, T::UnsignedInt8),
        F::B8G8R8_SINT => (O::Bgr, T::SignedInt8),
        F::B8G8R8_SRGB => (O::SrgbBgr, T::UnormInt8),

        F::R8G8B8A8_UNORM => (O::Rgba, T::UnormInt8),
        F::R8G8B8A8_SNORM => (O::Rgba, T::SnormInt8),
        F::R8G8B8A8_USCALED => (O::Rgba, T::UnsignedInt8),
        F::R8G8B8A8_SSCALED => (O::Rgba, T::SignedInt8),
        F::R8G8B8A8_UINT => (O::Rgba, T::UnsignedInt8),
        F::R8G8B8A8_SINT => (O::Rgba, T::SignedInt8),
        F::R8G8B8A8_SRGB => (O::SrgbRgba, T::UnormInt8),

        F::B8G8R8A8_UNORM => (O::Bgra, T::UnormInt8),
        F::B8G8R8A8_SNORM => (O::Bgra, T::SnormInt8),
        F::B8G8R8A8_USCALED => (O::Bgra, T::UnsignedInt8),
        F::B8G8R8A8_SSCALED => (O::Bgra, T::SignedInt8),
        F::B8G8R8A8_UINT => (O::Bgra, T::UnsignedInt8),
        F::B8G8R8A8_SINT => (O::Bgra, T::SignedInt8),
        F::B8G8R8A8_SRGB => (O::SrgbBgra, T::UnormInt8),

        // The packed 32-bit ABGR layout is the RGBA byte array on little endian hosts.
        F::A8B8G8R8_UNORM_PACK32 => (O::Rgba, T::UnormInt8),
        F::A8B8G8R8_SNORM_PACK32 => (O::Rgba, T::SnormInt8),
        F::A8B8G8R8_USCALED_PACK32 => (O::Rgba, T::UnsignedInt8),
        F::A8B8G8R8_SSCALED_PACK32 => (O::Rgba, T::SignedInt8),
        F::A8B8G8R8_UINT_PACK32 => (O::Rgba, T::UnsignedInt8),
        F::A8B8G8R8_SINT_PACK32 => (O::Rgba, T::SignedInt8),
        F::A8B8G8R8_SRGB_PACK32 => (O::SrgbRgba, T::UnormInt8),

        F::A2R10G10B10_UNORM_PACK32 => (O::Bgra, T::UnormInt1010102Rev),
        F::A2R10G10B10_SNORM_PACK32 => (O::Bgra, T::SnormInt1010102Rev),
        F::A2R10G10B10_USCALED_PACK32 => (O::Bgra, T::UnsignedInt1010102Rev),
        F::A2R10G10B10_SSCALED_PACK32 => (O::Bgra, T::SignedInt1010102Rev),
        F::A2R10G10B10_UINT_PACK32 => (O::Bgra, T::UnsignedInt1010102Rev),
        F::A2R10G10B10_SINT_PACK32 => (O::Bgra, T::SignedInt1010102Rev),

        F::A2B10G10R10_UNORM_PACK32 => (O::Rgba, T::UnormInt1010102Rev),
        F::A2B10G10R10_SNORM_PACK32 => (O::Rgba, T::SnormInt1010102Rev),
        F::A2B10G10R10_USCALED_PACK32 => (O::Rgba, T::UnsignedInt1010102Rev),
        F::A2B10G10R10_SSCALED_PACK32 => (O::Rgba, T::SignedInt1010102Rev),
        F::A2B10G10R10_UINT_PACK32 => (O::Rgba, T::UnsignedInt1010102Rev),
        F::A2B10G10R10_SINT_PACK32 => (O::Rgba, T::SignedInt1010102Rev),

        F::R16_UNORM => (O::R, T::UnormInt16),
        F::R16_SNORM => (O::R, T::SnormInt16),
        F::R16_USCALED => (O::R, T::UnsignedInt16),
        F::R16_SSCALED => (O::R, T::SignedInt16),
        F::R16_UINT => (O::R, T::UnsignedInt16),
        F::R16_SINT => (O::R, T::SignedInt16),
        F::R16_SFLOAT => (O::R, T::HalfFloat),

        F::R16G16_UNORM => (O::Rg, T::UnormInt16),
        F::R16G16_SNORM => (O::Rg, T::SnormInt16),
        F::R16G16_USCALED => (O::Rg, T::UnsignedInt16),
        F::R16G16_SSCALED => (O::Rg, T::SignedInt16),
        F::R16G16_UINT => (O::Rg, T::UnsignedInt16),
        F::R16G16_SINT => (O::Rg, T::SignedInt16),
        F::R16G16_SFLOAT => (O::Rg, T::HalfFloat),

        F::R16G16B16_UNORM => (O::Rgb, T::UnormInt16),
        F::R16G16B16_SNORM => (O::Rgb, T::SnormInt16),
        F::R16G16B16_USCALED => (O::Rgb, T::UnsignedInt16),
        F::R16G16B16_SSCALED => (O::Rgb, T::SignedInt16),
        F::R16G16B16_UINT => (O::Rgb, T::UnsignedInt16),
        F::R16G16B16_SINT => (O::Rgb, T::SignedInt16),
        F::R16G16B16_SFLOAT => (O::Rgb, T::HalfFloat),

        F::R16G16B16A16_UNORM => (O::Rgba, T::UnormInt16),
        F::R16G16B16A16_SNORM => (O::Rgba, T::SnormInt16),
        F::R16G16B16A16_USCALED => (O::Rgba, T::UnsignedInt16),
        F::R16G16B16A16_SSCALED => (O::Rgba, T::SignedInt16),
        F::R16G16B16A16_UINT => (O::Rgba, T::UnsignedInt16),
        F::R16G16B16A16_SINT => (O::Rgba, T::SignedInt16),
        F::R16G16B16A16_SFLOAT => (O::Rgba, T::HalfFloat),

        F::R32_UINT => (O::R, T::UnsignedInt32),
        F::R32_SINT => (O::R, T::SignedInt32),
        F::R32_SFLOAT => (O::R, T::Float),
        F::R32G32_UINT => (O::Rg, T::UnsignedInt32),
        F::R32G32_SINT => (O::Rg, T::SignedInt32),
        F::R32G32_SFLOAT => (O::Rg, T::Float),
        F::R32G32B32_UINT => (O::Rgb, T::UnsignedInt32),
        F::R32G32B32_SINT => (O::Rgb, T::SignedInt32),
        F::R32G32B32_SFLOAT => (O::Rgb, T::Float),
        F::R32G32B32A32_UINT => (O::Rgba, T::UnsignedInt32),
        F::R32G32B32A32_SINT => (O::Rgba, T::SignedInt32),
        F::R32G32B32A32_SFLOAT => (O::Rgba, T::Float),

        F::R64_UINT => (O::R, T::UnsignedInt64),
        F::R64_SINT => (O::R, T::SignedInt64),
        F::R64_SFLOAT => (O::R, T::Float64),
        F::R64G64_UINT => (O::Rg, T::UnsignedInt64),
        F::R64G64_SINT => (O::Rg, T::SignedInt64),
        F::R64G64_SFLOAT => (O::Rg, T::Float64),
        F::R64G64B64_UINT => (O::Rgb, T::UnsignedInt64),
        F::R64G64B64_SINT => (O::Rgb, T::SignedInt64),
        F::R64G64B64_SFLOAT => (O::Rgb, T::Float64),
        F::R64G64B64A64_UINT => (O::Rgba, T::UnsignedInt64),
        F::R64G64B64A64_SINT => (O::Rgba, T::SignedInt64),
        F::R64G64B64A64_SFLOAT => (O::Rgba, T::Float64),

        F::B10G11R11_UFLOAT_PACK32 => (O::Rgb, T::UnsignedInt11f11f10fRev),
        F::E5B9G9R9_UFLOAT_PACK32 => (O::Rgb, T::UnsignedInt999E5Rev),

        F::D16_UNORM => (O::D, T::UnormInt16),
        F::X8_D24_UNORM_PACK32 => (O::D, T::UnsignedInt24_8Rev),
        F::D32_SFLOAT => (O::D, T::Float),
        F::S8_UINT => (O::S, T::UnsignedInt8),
        F::D16_UNORM_S8_UINT => (O::Ds, T::UnsignedInt16_8_8),
        F::D24_UNORM_S8_UINT => (O::Ds, T::UnsignedInt24_8Rev),
        F::D32_SFLOAT_S8_UINT => (O::Ds, T::FloatUnsignedInt24_8Rev),

        _ => {
            return if compressed_format(format).is_some() {
                ForwardEntry::Compressed
            } else {
                ForwardEntry::Unsupported
            }
        }
    };

    ForwardEntry::Texture(TextureFormat::new(order, ty))
}

// Mirror of the forward table without the scaled, alias packed, and 64-bit integer formats.
// Each (order, type) pair may appear at most once.
const REVERSE_ENTRIES: &[(ChannelOrder, ChannelType, WireFormatId)] = {
    use ChannelOrder as O;
    use ChannelType as T;
    use WireFormatId as F;

    &[
        (O::Rg, T::UnormByte44, F::R4G4_UNORM_PACK8),
        (O::Rgba, T::UnormShort4444, F::R4G4B4A4_UNORM_PACK16),
        (O::Bgra, T::UnormShort4444, F::B4G4R4A4_UNORM_PACK16),
        (O::Rgb, T::UnormShort565, F::R5G6B5_UNORM_PACK16),
        (O::Bgr, T::UnormShort565, F::B5G6R5_UNORM_PACK16),
        (O::Rgba, T::UnormShort5551, F::R5G5B5A1_UNORM_PACK16),
        (O::Bgra, T::UnormShort5551, F::B5G5R5A1_UNORM_PACK16),
        (O::Argb, T::UnormShort1555, F::A1R5G5B5_UNORM_PACK16),
        (O::R, T::UnormInt8, F::R8_UNORM),
        (O::R, T::SnormInt8, F::R8_SNORM),
        (O::R, T::UnsignedInt8, F::R8_UINT),
        (O::R, T::SignedInt8, F::R8_SINT),
        (O::SrgbR, T::UnormInt8, F::R8_SRGB),
        (O::Rg, T::UnormInt8, F::R8G8_UNORM),
        (O::Rg, T::SnormInt8, F::R8G8_SNORM),
        (O::Rg, T::UnsignedInt8, F::R8G8_UINT),
        (O::Rg, T::SignedInt8, F::R8G8_SINT),
        (O::SrgbRg, T::UnormInt8, F::R8G8_SRGB),
        (O::Rgb, T::UnormInt8, F::R8G8B8_UNORM),
        (O::Rgb, T::SnormInt8, F::R8G8B8_SNORM),
        (O::Rgb, T::UnsignedInt8, F::R8G8B8_UINT),
        (O::Rgb, T::SignedInt8, F::R8G8B8_SINT),
        (O::SrgbRgb, T::UnormInt8, F::R8G8B8_SRGB),
        (O::Bgr, T::UnormInt8, F::B8G8R8_UNORM),
        (O::Bgr, T::SnormInt8, F::B8G8R8_SNORM),
        (O::Bgr, T::UnsignedInt8, F::B8G8R8_UINT),
        (O::Bgr, T::SignedInt8, F::B8G8R8_SINT),
        (O::SrgbBgr, T::UnormInt8, F::B8G8R8_SRGB),
        (O::Rgba, T::UnormInt8, F::R8G8B8A8_UNORM),
        (O::Rgba, T::SnormInt8, F::R8G8B8A8_SNORM),
        (O::Rgba, T::UnsignedInt8, F::R8G8B8A8_UINT),
        (O::Rgba, T::SignedInt8, F::R8G8B8A8_SINT),
        (O::SrgbRgba, T::UnormInt8, F::R8G8B8A8_SRGB),
        (O::Bgra, T::UnormInt8, F::B8G8R8A8_UNORM),
        (O::Bgra, T::SnormInt8, F::B8G8R8A8_SNORM),
        (O::Bgra, T::UnsignedInt8, F::B8G8R8A8_UINT),
        (O::Bgra, T::SignedInt8, F::B8G8R8A8_SINT),
        (O::SrgbBgra, T::UnormInt8, F::B8G8R8A8_SRGB),
        (O::Bgra, T::UnormInt1010102Rev, F::A2R10G10B10_UNORM_PACK32),
        (O::Bgra, T::SnormInt1010102Rev, F::A2R10G10B10_SNORM_PACK32),
        (O::Bgra, T::UnsignedInt1010102Rev, F::A2R10G10B10_UINT_PACK32),
        (O::Bgra, T::SignedInt1010102Rev, F::A2R10G10B10_SINT_PACK32),
        (O::Rgba, T::UnormInt1010102Rev, F::A2B10G10R10_UNORM_PACK32),
        (O::Rgba, T::SnormInt1010102Rev, F::A2B10G10R10_SNORM_PACK32),
        (O::Rgba, T::UnsignedInt1010102Rev, F::A2B10G10R10_UINT_PACK32),
        (O::Rgba, T::SignedInt1010102Rev, F::A2B10G10R10_SINT_PACK32),
        (O::R, T::UnormInt16, F::R16_UNORM),
        (O::R, T::SnormInt16, F::R16_SNORM),
        (O::R, T::UnsignedInt16, F::R16_UINT),
        (O::R, T::SignedInt16, F::R16_SINT),
        (O::R, T::HalfFloat, F::R16_SFLOAT),
        (O::Rg, T::UnormInt16, F::R16G16_UNORM),
        (O::Rg, T::SnormInt16, F::R16G16_SNORM),
        (O::Rg, T::UnsignedInt16, F::R16G16_UINT),
        (O::Rg, T::SignedInt16, F::R16G16_SINT),
        (O::Rg, T::HalfFloat, F::R16G16_SFLOAT),
        (O::Rgb, T::UnormInt16, F::R16G16B16_UNORM),
        (O::Rgb, T::SnormInt16, F::R16G16B16_SNORM),
        (O::Rgb, T::UnsignedInt16, F::R16G16B16_UINT),
        (O::Rgb, T::SignedInt16, F::R16G16B16_SINT),
        (O::Rgb, T::HalfFloat, F::R16G16B16_SFLOAT),
        (O::Rgba, T::UnormInt16, F::R16G16B16A16_UNORM),
        (O::Rgba, T::SnormInt16, F::R16G16B16A16_SNORM),
        (O::Rgba, T::UnsignedInt16, F::R16G16B16A16_UINT),
        (O::Rgba, T::SignedInt16, F::R16G16B16A16_SINT),
        (O::Rgba, T::HalfFloat, F::R16G16B16A16_SFLOAT),
        (O::R, T::UnsignedInt32, F::R32_UINT),
        (O::R, T::SignedInt32, F::R32_SINT),
        (O::R, T::Float, F::R32_SFLOAT),
        (O::Rg, T::UnsignedInt32, F::R32G32_UINT),
        (O::Rg, T::SignedInt32, F::R32G32_SINT),
        (O::Rg, T::Float, F::R32G32_SFLOAT),
        (O::Rgb, T::UnsignedInt32, F::R32G32B32_UINT),
        (O::Rgb, T::SignedInt32, F::R32G32B32_SINT),
        (O::Rgb, T::Float, F::R32G32B32_SFLOAT),
        (O::Rgba, T::UnsignedInt32, F::R32G32B32A32_UINT),
        (O::Rgba, T::SignedInt32, F::R32G32B32A32_SINT),
        (O::Rgba, T::Float, F::R32G32B32A32_SFLOAT),
        (O::R, T::Float64, F::R64_SFLOAT),
        (O::Rg, T::Float64, F::R64G64_SFLOAT),
        (O::Rgb, T::Float64, F::R64G64B64_SFLOAT),
        (O::Rgba, T::Float64, F::R64G64B64A64_SFLOAT),
        (O::Rgb, T::UnsignedInt11f11f10fRev, F::B10G11R11_UFLOAT_PACK32),
        (O::Rgb, T::UnsignedInt999E5Rev, F::E5B9G9R9_UFLOAT_PACK32),
        (O::D, T::UnormInt16, F::D16_UNORM),
        (O::D, T::UnsignedInt24_8Rev, F::X8_D24_UNORM_PACK32),
        (O::D, T::Float, F::D32_SFLOAT),
        (O::S, T::UnsignedInt8, F::S8_UINT),
        (O::Ds, T::UnsignedInt16_8_8, F::D16_UNORM_S8_UINT),
        (O::Ds, T::UnsignedInt24_8Rev, F::D24_UNORM_S8_UINT),
        (O::Ds, T::FloatUnsignedInt24_8Rev, F::D32_SFLOAT_S8_UINT),
    ]
};

// The order is stored in the high half of the key and the type in the low half.
const _: () = assert!(ChannelOrder::COUNT <= 1 << 16 && ChannelType::COUNT <= 1 << 16);

const REVERSE_TABLE_LEN: usize = ChannelOrder::COUNT * ChannelType::COUNT;

static REVERSE_TABLE: [Option<WireFormatId>; REVERSE_TABLE_LEN] = build_reverse_table();

const fn build_reverse_table() -> [Option<WireFormatId>; REVERSE_TABLE_LEN] {
    let mut table = [None; REVERSE_TABLE_LEN];
    let mut i = 0;
    while i < REVERSE_ENTRIES.len() {
        let (order, ty, format) = REVERSE_ENTRIES[i];
        let index = reverse_index(pack_format_key(TextureFormat::new(order, ty)));
        assert!(table[index].is_none(), "duplicate reverse format entry");
        table[index] = Some(format);
        i += 1;
    }
    table
}

pub(crate) fn reverse_entries() -> impl Iterator<Item = (TextureFormat, WireFormatId)> {
    REVERSE_ENTRIES
        .iter()
        .map(|(order, ty, format)| (TextureFormat::new(*order, *ty), *format))
}

/// Pack a texel format into a single integer key with the order in the high 16 bits.
pub const fn pack_format_key(format: TextureFormat) -> u32 {
    ((format.order as u32) << 16) | format.ty as u32
}

const fn reverse_index(key: u32) -> usize {
    (key >> 16) as usize * ChannelType::COUNT + (key & 0xFFFF) as usize
}

/// Find the generic texel format for a non compressed wire format.
///
/// Scaled formats map to the integer type with the same bit layout,
/// and the packed ABGR formats map to their byte array RGBA equivalent.
/// Neither family can be recovered with [map_texture_format].
pub fn map_wire_format(format: WireFormatId) -> Result<TextureFormat, FormatError> {
    match FORWARD_TABLE[format.index()?] {
        ForwardEntry::Texture(texture_format) => Ok(texture_format),
        ForwardEntry::Compressed => Err(FormatError::CompressedFormat { format }),
        ForwardEntry::Unsupported => Err(FormatError::UnsupportedWireFormat { format }),
    }
}

/// Find the wire format that [map_wire_format] maps to `format`.
pub fn map_texture_format(format: TextureFormat) -> Result<WireFormatId, FormatError> {
    REVERSE_TABLE[reverse_index(pack_format_key(format))]
        .ok_or(FormatError::NoMatchingWireFormat { format })
}

/// Returns `true` for formats storing integers intended for normalized float access.
pub const fn is_scaled_format(format: WireFormatId) -> bool {
    use WireFormatId as F;

    matches!(
        format,
        F::R8_USCALED
            | F::R8_SSCALED
            | F::R8G8_USCALED
            | F::R8G8_SSCALED
            | F::R8G8B8_USCALED
            | F::R8G8B8_SSCALED
            | F::B8G8R8_USCALED
            | F::B8G8R8_SSCALED
            | F::R8G8B8A8_USCALED
            | F::R8G8B8A8_SSCALED
            | F::B8G8R8A8_USCALED
            | F::B8G8R8A8_SSCALED
            | F::A8B8G8R8_USCALED_PACK32
            | F::A8B8G8R8_SSCALED_PACK32
            | F::A2R10G10B10_USCALED_PACK32
            | F::A2R10G10B10_SSCALED_PACK32
            | F::A2B10G10R10_USCALED_PACK32
            | F::A2B10G10R10_SSCALED_PACK32
            | F::R16_USCALED
            | F::R16_SSCALED
            | F::R16G16_USCALED
            | F::R16G16_SSCALED
            | F::R16G16B16_USCALED
            | F::R16G16B16_SSCALED
            | F::R16G16B16A16_USCALED
            | F::R16G16B16A16_SSCALED
    )
}

/// Returns `true` for packed formats with the same memory layout as a byte array format.
pub const fn is_alias_packed_format(format: WireFormatId) -> bool {
    use WireFormatId as F;

    matches!(
        format,
        F::A8B8G8R8_UNORM_PACK32
            | F::A8B8G8R8_SNORM_PACK32
            | F::A8B8G8R8_USCALED_PACK32
            | F::A8B8G8R8_SSCALED_PACK32
            | F::A8B8G8R8_UINT_PACK32
            | F::A8B8G8R8_SINT_PACK32
            | F::A8B8G8R8_SRGB_PACK32
    )
}

/// Returns `true` for formats with 64-bit integer channels.
///
/// These map forward but have no reverse mapping yet.
pub const fn is_int64_format(format: WireFormatId) -> bool {
    use WireFormatId as F;

    matches!(
        format,
        F::R64_UINT
            | F::R64_SINT
            | F::R64G64_UINT
            | F::R64G64_SINT
            | F::R64G64B64_UINT
            | F::R64G64B64_SINT
            | F::R64G64B64A64_UINT
            | F::R64G64B64A64_SINT
    )
}

/// Returns `true` if mapping `format` to a [TextureFormat] and back yields `format`.
pub fn round_trip_supported(format: WireFormatId) -> bool {
    !is_scaled_format(format)
        && !is_alias_packed_format(format)
        && !is_int64_format(format)
        && map_wire_format(format).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn map_rgba8_unorm() {
        let format = map_wire_format(WireFormatId::R8G8B8A8_UNORM).unwrap();
        assert_eq!(
            TextureFormat::new(ChannelOrder::Rgba, ChannelType::UnormInt8),
            format
        );
        assert_eq!(Ok(WireFormatId::R8G8B8A8_UNORM), map_texture_format(format));
    }

    #[test]
    fn map_scaled_to_uint_sibling() {
        let scaled = map_wire_format(WireFormatId::R16G16_USCALED).unwrap();
        let uint = map_wire_format(WireFormatId::R16G16_UINT).unwrap();
        assert_eq!(uint, scaled);
        assert_eq!(Ok(WireFormatId::R16G16_UINT), map_texture_format(scaled));
    }

    #[test]
    fn map_alias_packed_to_byte_array() {
        let packed = map_wire_format(WireFormatId::A8B8G8R8_SRGB_PACK32).unwrap();
        assert_eq!(Ok(WireFormatId::R8G8B8A8_SRGB), map_texture_format(packed));
    }

    #[test]
    fn map_undefined() {
        assert_eq!(
            Err(FormatError::UnsupportedWireFormat {
                format: WireFormatId::UNDEFINED
            }),
            map_wire_format(WireFormatId::UNDEFINED)
        );
    }

    #[test]
    fn map_compressed() {
        assert_eq!(
            Err(FormatError::CompressedFormat {
                format: WireFormatId::BC7_SRGB_BLOCK
            }),
            map_wire_format(WireFormatId::BC7_SRGB_BLOCK)
        );
    }

    #[test]
    fn map_unknown() {
        assert_eq!(
            Err(FormatError::UnknownFormat { id: 1000 }),
            map_wire_format(WireFormatId(1000))
        );
    }

    #[test]
    fn map_int64_has_no_reverse() {
        let format = map_wire_format(WireFormatId::R64G64_SINT).unwrap();
        assert_eq!(
            TextureFormat::new(ChannelOrder::Rg, ChannelType::SignedInt64),
            format
        );
        assert_eq!(
            Err(FormatError::NoMatchingWireFormat { format }),
            map_texture_format(format)
        );
    }

    #[test]
    fn map_texture_format_no_match() {
        let format = TextureFormat::new(ChannelOrder::Argb, ChannelType::Float);
        assert_eq!(
            Err(FormatError::NoMatchingWireFormat { format }),
            map_texture_format(format)
        );
    }

    #[test]
    fn pack_format_key_halves() {
        let format = TextureFormat::new(ChannelOrder::Rg, ChannelType::UnormInt16);
        let key = pack_format_key(format);
        assert_eq!(ChannelOrder::Rg as u32, key >> 16);
        assert_eq!(ChannelType::UnormInt16 as u32, key & 0xFFFF);
    }

    #[test]
    fn pack_format_key_unique() {
        let mut keys: Vec<_> = ChannelOrder::iter()
            .flat_map(|o| ChannelType::iter().map(move |t| TextureFormat::new(o, t)))
            .map(|f| reverse_index(pack_format_key(f)))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(REVERSE_TABLE_LEN, keys.len());
        assert_eq!(Some(&(REVERSE_TABLE_LEN - 1)), keys.last());
    }

    #[test]
    fn non_invertible_families() {
        assert!(!round_trip_supported(WireFormatId::R8_USCALED));
        assert!(!round_trip_supported(WireFormatId::A8B8G8R8_UINT_PACK32));
        assert!(!round_trip_supported(WireFormatId::R64_UINT));
        assert!(!round_trip_supported(WireFormatId::UNDEFINED));
        assert!(!round_trip_supported(WireFormatId::BC1_RGB_UNORM_BLOCK));
        assert!(round_trip_supported(WireFormatId::R64_SFLOAT));
        assert!(round_trip_supported(WireFormatId::A2R10G10B10_UINT_PACK32));
    }
}
