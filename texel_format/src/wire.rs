use std::fmt;
use std::str::FromStr;

use crate::FormatError;

/// The number of identifiers in the host format enumeration.
///
/// Every table in this crate is sized by this value.
/// Adding or removing an entry in the list below without updating it fails the build.
pub const FORMAT_COUNT: usize = 185;

/// An identifier from the host graphics API's format enumeration.
///
/// Values outside `0..FORMAT_COUNT` can still be represented since they come from the wire.
/// Operations reject them with [FormatError::UnknownFormat].
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[repr(transparent)]
pub struct WireFormatId(pub u32);

// Names that differ from the constant, such as the lowercase x in ASTC block sizes,
// are given after `as`.
macro_rules! wire_formats {
    ($($id:literal => $name:ident $(as $host:literal)?,)+) => {
        impl WireFormatId {
            $(pub const $name: Self = Self($id);)+
        }

        // The array lengths catch a list that is too short or too long.
        const NAMES: [&str; FORMAT_COUNT] = [$(host_name!($name $(, $host)?),)+];
        const IDS: [u32; FORMAT_COUNT] = [$($id,)+];
    };
}

macro_rules! host_name {
    ($name:ident) => {
        stringify!($name)
    };
    ($name:ident, $host:literal) => {
        $host
    };
}

wire_formats! {
    0 => UNDEFINED,
    1 => R4G4_UNORM_PACK8,
    2 => R4G4B4A4_UNORM_PACK16,
    3 => B4G4R4A4_UNORM_PACK16,
    4 => R5G6B5_UNORM_PACK16,
    5 => B5G6R5_UNORM_PACK16,
    6 => R5G5B5A1_UNORM_PACK16,
    7 => B5G5R5A1_UNORM_PACK16,
    8 => A1R5G5B5_UNORM_PACK16,
    9 => R8_UNORM,
    10 => R8_SNORM,
    11 => R8_USCALED,
    12 => R8_SSCALED,
    13 => R8_UINT,
    14 => R8_SINT,
    15 => R8_SRGB,
    16 => R8G8_UNORM,
    17 => R8G8_SNORM,
    18 => R8G8_USCALED,
    19 => R8G8_SSCALED,
    20 => R8G8_UINT,
    21 => R8G8_SINT,
    22 => R8G8_SRGB,
    23 => R8G8B8_UNORM,
    24 => R8G8B8_SNORM,
    25 => R8G8B8_USCALED,
    26 => R8G8B8_SSCALED,
    27 => R8G8B8_UINT,
    28 => R8G8B8_SINT,
    29 => R8G8B8_SRGB,
    30 => B8G8R8_UNORM,
    31 => B8G8R8_SNORM,
    32 => B8G8R8_USCALED,
    33 => B8G8R8_SSCALED,
    34 => B8G8R8_UINT,
    35 => B8G8R8_SINT,
    36 => B8G8R8_SRGB,
    37 => R8G8B8A8_UNORM,
    38 => R8G8B8A8_SNORM,
    39 => R8G8B8A8_USCALED,
    40 => R8G8B8A8_SSCALED,
    41 => R8G8B8A8_UINT,
    42 => R8G8B8A8_SINT,
    43 => R8G8B8A8_SRGB,
    44 => B8G8R8A8_UNORM,
    45 => B8G8R8A8_SNORM,
    46 => B8G8R8A8_USCALED,
    47 => B8G8R8A8_SSCALED,
    48 => B8G8R8A8_UINT,
    49 => B8G8R8A8_SINT,
    50 => B8G8R8A8_SRGB,
    51 => A8B8G8R8_UNORM_PACK32,
    52 => A8B8G8R8_SNORM_PACK32,
    53 => A8B8G8R8_USCALED_PACK32,
    54 => A8B8G8R8_SSCALED_PACK32,
    55 => A8B8G8R8_UINT_PACK32,
    56 => A8B8G8R8_SINT_PACK32,
    57 => A8B8G8R8_SRGB_PACK32,
    58 => A2R10G10B10_UNORM_PACK32,
    59 => A2R10G10B10_SNORM_PACK32,
    60 => A2R10G10B10_USCALED_PACK32,
    61 => A2R10G10B10_SSCALED_PACK32,
    62 => A2R10G10B10_UINT_PACK32,
    63 => A2R10G10B10_SINT_PACK32,
    64 => A2B10G10R10_UNORM_PACK32,
    65 => A2B10G10R10_SNORM_PACK32,
    66 => A2B10G10R10_USCALED_PACK32,
    67 => A2B10G10R10_SSCALED_PACK32,
    68 => A2B10G10R10_UINT_PACK32,
    69 => A2B10G10R10_SINT_PACK32,
    70 => R16_UNORM,
    71 => R16_SNORM,
    72 => R16_USCALED,
    73 => R16_SSCALED,
    74 => R16_UINT,
    75 => R16_SINT,
    76 => R16_SFLOAT,
    77 => R16G16_UNORM,
    78 => R16G16_SNORM,
    79 => R16G16_USCALED,
    80 => R16G16_SSCALED,
    81 => R16G16_UINT,
    82 => R16G16_SINT,
    83 => R16G16_SFLOAT,
    84 => R16G16B16_UNORM,
    85 => R16G16B16_SNORM,
    86 => R16G16B16_USCALED,
    87 => R16G16B16_SSCALED,
    88 => R16G16B16_UINT,
    89 => R16G16B16_SINT,
    90 => R16G16B16_SFLOAT,
    91 => R16G16B16A16_UNORM,
    92 => R16G16B16A16_SNORM,
    93 => R16G16B16A16_USCALED,
    94 => R16G16B16A16_SSCALED,
    95 => R16G16B16A16_UINT,
    96 => R16G16B16A16_SINT,
    97 => R16G16B16A16_SFLOAT,
    98 => R32_UINT,
    99 => R32_SINT,
    100 => R32_SFLOAT,
    101 => R32G32_UINT,
    102 => R32G32_SINT,
    103 => R32G32_SFLOAT,
    104 => R32G32B32_UINT,
    105 => R32G32B32_SINT,
    106 => R32G32B32_SFLOAT,
    107 => R32G32B32A32_UINT,
    108 => R32G32B32A32_SINT,
    109 => R32G32B32A32_SFLOAT,
    110 => R64_UINT,
    111 => R64_SINT,
    112 => R64_SFLOAT,
    113 => R64G64_UINT,
    114 => R64G64_SINT,
    115 => R64G64_SFLOAT,
    116 => R64G64B64_UINT,
    117 => R64G64B64_SINT,
    118 => R64G64B64_SFLOAT,
    119 => R64G64B64A64_UINT,
    120 => R64G64B64A64_SINT,
    121 => R64G64B64A64_SFLOAT,
    122 => B10G11R11_UFLOAT_PACK32,
    123 => E5B9G9R9_UFLOAT_PACK32,
    124 => D16_UNORM,
    125 => X8_D24_UNORM_PACK32,
    126 => D32_SFLOAT,
    127 => S8_UINT,
    128 => D16_UNORM_S8_UINT,
    129 => D24_UNORM_S8_UINT,
    130 => D32_SFLOAT_S8_UINT,
    131 => BC1_RGB_UNORM_BLOCK,
    132 => BC1_RGB_SRGB_BLOCK,
    133 => BC1_RGBA_UNORM_BLOCK,
    134 => BC1_RGBA_SRGB_BLOCK,
    135 => BC2_UNORM_BLOCK,
    136 => BC2_SRGB_BLOCK,
    137 => BC3_UNORM_BLOCK,
    138 => BC3_SRGB_BLOCK,
    139 => BC4_UNORM_BLOCK,
    140 => BC4_SNORM_BLOCK,
    141 => BC5_UNORM_BLOCK,
    142 => BC5_SNORM_BLOCK,
    143 => BC6H_UFLOAT_BLOCK,
    144 => BC6H_SFLOAT_BLOCK,
    145 => BC7_UNORM_BLOCK,
    146 => BC7_SRGB_BLOCK,
    147 => ETC2_R8G8B8_UNORM_BLOCK,
    148 => ETC2_R8G8B8_SRGB_BLOCK,
    149 => ETC2_R8G8B8A1_UNORM_BLOCK,
    150 => ETC2_R8G8B8A1_SRGB_BLOCK,
    151 => ETC2_R8G8B8A8_UNORM_BLOCK,
    152 => ETC2_R8G8B8A8_SRGB_BLOCK,
    153 => EAC_R11_UNORM_BLOCK,
    154 => EAC_R11_SNORM_BLOCK,
    155 => EAC_R11G11_UNORM_BLOCK,
    156 => EAC_R11G11_SNORM_BLOCK,
    157 => ASTC_4X4_UNORM_BLOCK as "ASTC_4x4_UNORM_BLOCK",
    158 => ASTC_4X4_SRGB_BLOCK as "ASTC_4x4_SRGB_BLOCK",
    159 => ASTC_5X4_UNORM_BLOCK as "ASTC_5x4_UNORM_BLOCK",
    160 => ASTC_5X4_SRGB_BLOCK as "ASTC_5x4_SRGB_BLOCK",
    161 => ASTC_5X5_UNORM_BLOCK as "ASTC_5x5_UNORM_BLOCK",
    162 => ASTC_5X5_SRGB_BLOCK as "ASTC_5x5_SRGB_BLOCK",
    163 => ASTC_6X5_UNORM_BLOCK as "ASTC_6x5_UNORM_BLOCK",
    164 => ASTC_6X5_SRGB_BLOCK as "ASTC_6x5_SRGB_BLOCK",
    165 => ASTC_6X6_UNORM_BLOCK as "ASTC_6x6_UNORM_BLOCK",
    166 => ASTC_6X6_SRGB_BLOCK as "ASTC_6x6_SRGB_BLOCK",
    167 => ASTC_8X5_UNORM_BLOCK as "ASTC_8x5_UNORM_BLOCK",
    168 => ASTC_8X5_SRGB_BLOCK as "ASTC_8x5_SRGB_BLOCK",
    169 => ASTC_8X6_UNORM_BLOCK as "ASTC_8x6_UNORM_BLOCK",
    170 => ASTC_8X6_SRGB_BLOCK as "ASTC_8x6_SRGB_BLOCK",
    171 => ASTC_8X8_UNORM_BLOCK as "ASTC_8x8_UNORM_BLOCK",
    172 => ASTC_8X8_SRGB_BLOCK as "ASTC_8x8_SRGB_BLOCK",
    173 => ASTC_10X5_UNORM_BLOCK as "ASTC_10x5_UNORM_BLOCK",
    174 => ASTC_10X5_SRGB_BLOCK as "ASTC_10x5_SRGB_BLOCK",
    175 => ASTC_10X6_UNORM_BLOCK as "ASTC_10x6_UNORM_BLOCK",
    176 => ASTC_10X6_SRGB_BLOCK as "ASTC_10x6_SRGB_BLOCK",
    177 => ASTC_10X8_UNORM_BLOCK as "ASTC_10x8_UNORM_BLOCK",
    178 => ASTC_10X8_SRGB_BLOCK as "ASTC_10x8_SRGB_BLOCK",
    179 => ASTC_10X10_UNORM_BLOCK as "ASTC_10x10_UNORM_BLOCK",
    180 => ASTC_10X10_SRGB_BLOCK as "ASTC_10x10_SRGB_BLOCK",
    181 => ASTC_12X10_UNORM_BLOCK as "ASTC_12x10_UNORM_BLOCK",
    182 => ASTC_12X10_SRGB_BLOCK as "ASTC_12x10_SRGB_BLOCK",
    183 => ASTC_12X12_UNORM_BLOCK as "ASTC_12x12_UNORM_BLOCK",
    184 => ASTC_12X12_SRGB_BLOCK as "ASTC_12x12_SRGB_BLOCK",
}

// Identifiers are used directly as table indices.
const _: () = {
    let mut i = 0;
    while i < FORMAT_COUNT {
        assert!(IDS[i] as usize == i, "wire format list is not dense");
        i += 1;
    }
};

impl WireFormatId {
    /// The raw value of the identifier.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` if the identifier is in `0..FORMAT_COUNT`.
    pub const fn is_known(self) -> bool {
        (self.0 as usize) < FORMAT_COUNT
    }

    /// The host API name without the `VK_FORMAT_` prefix or [None] for unknown identifiers.
    pub fn name(self) -> Option<&'static str> {
        NAMES.get(self.0 as usize).copied()
    }

    /// Iterate over every identifier in `0..FORMAT_COUNT` in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FORMAT_COUNT as u32).map(Self)
    }

    pub(crate) fn index(self) -> Result<usize, FormatError> {
        if self.is_known() {
            Ok(self.0 as usize)
        } else {
            Err(FormatError::UnknownFormat { id: self.0 })
        }
    }
}

impl fmt::Display for WireFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "WireFormatId({})", self.0),
        }
    }
}

impl TryFrom<u32> for WireFormatId {
    type Error = FormatError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let format = Self(value);
        format.index().map(|_| format)
    }
}

impl From<WireFormatId> for u32 {
    fn from(value: WireFormatId) -> Self {
        value.0
    }
}

const PREFIX: &str = "VK_FORMAT_";

impl FromStr for WireFormatId {
    type Err = strum::ParseError;

    /// Parse a host format name with or without the `VK_FORMAT_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s.get(..PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(PREFIX) => &s[PREFIX.len()..],
            _ => s,
        };
        NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| Self(i as u32))
            .ok_or(strum::ParseError::VariantNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_format_matches_count() {
        assert_eq!(
            FORMAT_COUNT as u32,
            WireFormatId::ASTC_12X12_SRGB_BLOCK.raw() + 1
        );
    }

    #[test]
    fn display_known_format() {
        assert_eq!("R8G8B8A8_UNORM", WireFormatId::R8G8B8A8_UNORM.to_string());
    }

    #[test]
    fn display_unknown_format() {
        assert_eq!("WireFormatId(999)", WireFormatId(999).to_string());
    }

    #[test]
    fn try_from_out_of_range() {
        assert_eq!(
            Err(FormatError::UnknownFormat { id: 185 }),
            WireFormatId::try_from(185)
        );
    }

    #[test]
    fn try_from_in_range() {
        assert_eq!(Ok(WireFormatId::D32_SFLOAT), WireFormatId::try_from(126));
    }

    #[test]
    fn all_covers_range() {
        assert_eq!(FORMAT_COUNT, WireFormatId::all().count());
        assert_eq!(Some(WireFormatId::UNDEFINED), WireFormatId::all().next());
    }

    #[test]
    fn parse_with_prefix() {
        assert_eq!(
            Ok(WireFormatId::B10G11R11_UFLOAT_PACK32),
            "VK_FORMAT_B10G11R11_UFLOAT_PACK32".parse()
        );
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(
            Ok(WireFormatId::ASTC_10X5_SRGB_BLOCK),
            "astc_10x5_srgb_block".parse()
        );
    }

    #[test]
    fn parse_lowercase_prefix() {
        assert_eq!(Ok(WireFormatId::R8_UNORM), "vk_format_r8_unorm".parse());
    }

    #[test]
    fn parse_prefix_only() {
        assert!("VK_FORMAT_".parse::<WireFormatId>().is_err());
    }

    #[test]
    fn display_astc_host_name() {
        assert_eq!(
            "ASTC_4x4_UNORM_BLOCK",
            WireFormatId::ASTC_4X4_UNORM_BLOCK.to_string()
        );
        assert_eq!(
            Some("ASTC_12x10_SRGB_BLOCK"),
            WireFormatId::ASTC_12X10_SRGB_BLOCK.name()
        );
    }

    #[test]
    fn parse_astc_host_name() {
        assert_eq!(
            Ok(WireFormatId::ASTC_8X6_UNORM_BLOCK),
            "VK_FORMAT_ASTC_8x6_UNORM_BLOCK".parse()
        );
    }

    #[test]
    fn parse_unknown_name() {
        assert!("R7_UNORM".parse::<WireFormatId>().is_err());
    }
}
