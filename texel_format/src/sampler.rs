//! Translation between host sampler parameters and the generic [Sampler].
//!
//! Each parameter maps independently of the others and of the format tables.
use strum::{Display, EnumCount, EnumIter, FromRepr};

use crate::SamplerError;

/// Largest LOD that still samples only the base level.
///
/// Host samplers without mipmapping clamp LOD to this value.
pub const NON_MIPMAPPED_MAX_LOD: f32 = 0.25;

/// Maximum LOD used for mipmapped host samplers created from a [Sampler].
pub const LOD_CLAMP_NONE: f32 = 1000.0;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter, FromRepr)]
#[repr(u32)]
pub enum SamplerAddressMode {
    Repeat = 0,
    MirroredRepeat = 1,
    ClampToEdge = 2,
    ClampToBorder = 3,
    MirrorClampToEdge = 4,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter, FromRepr)]
#[repr(u32)]
pub enum Filter {
    Nearest = 0,
    Linear = 1,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter, FromRepr)]
#[repr(u32)]
pub enum SamplerMipmapMode {
    Nearest = 0,
    Linear = 1,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter, FromRepr)]
#[repr(u32)]
pub enum CompareOp {
    Never = 0,
    Less = 1,
    Equal = 2,
    LessOrEqual = 3,
    Greater = 4,
    NotEqual = 5,
    GreaterOrEqual = 6,
    Always = 7,
}

/// The predefined border colors of the host API.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter, FromRepr)]
#[repr(u32)]
pub enum BorderColor {
    FloatTransparentBlack = 0,
    IntTransparentBlack = 1,
    FloatOpaqueBlack = 2,
    IntOpaqueBlack = 3,
    FloatOpaqueWhite = 4,
    IntOpaqueWhite = 5,
}

impl TryFrom<u32> for BorderColor {
    type Error = SamplerError;

    fn try_from(kind: u32) -> Result<Self, Self::Error> {
        Self::from_repr(kind).ok_or(SamplerError::InvalidBorderColorKind { kind })
    }
}

impl BorderColor {
    /// The border color value in the representation selected by the kind.
    pub const fn value(self) -> BorderColorValue {
        match self {
            Self::FloatTransparentBlack => BorderColorValue::Float([0.0, 0.0, 0.0, 0.0]),
            Self::IntTransparentBlack => BorderColorValue::Uint([0, 0, 0, 0]),
            Self::FloatOpaqueBlack => BorderColorValue::Float([0.0, 0.0, 0.0, 1.0]),
            Self::IntOpaqueBlack => BorderColorValue::Uint([0, 0, 0, 1]),
            Self::FloatOpaqueWhite => BorderColorValue::Float([1.0, 1.0, 1.0, 1.0]),
            Self::IntOpaqueWhite => BorderColorValue::Uint([1, 1, 1, 1]),
        }
    }
}

/// Host sampler creation parameters.
///
/// The border color is kept as the raw kind from the host
/// since it is only validated when mapped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SamplerCreateInfo {
    pub mag_filter: Filter,
    pub min_filter: Filter,
    pub mipmap_mode: SamplerMipmapMode,
    pub address_mode_u: SamplerAddressMode,
    pub address_mode_v: SamplerAddressMode,
    pub address_mode_w: SamplerAddressMode,
    pub compare_enable: bool,
    pub compare_op: CompareOp,
    pub min_lod: f32,
    pub max_lod: f32,
    pub border_color: u32,
    pub unnormalized_coordinates: bool,
}

impl Default for SamplerCreateInfo {
    fn default() -> Self {
        Self {
            mag_filter: Filter::Nearest,
            min_filter: Filter::Nearest,
            mipmap_mode: SamplerMipmapMode::Nearest,
            address_mode_u: SamplerAddressMode::Repeat,
            address_mode_v: SamplerAddressMode::Repeat,
            address_mode_w: SamplerAddressMode::Repeat,
            compare_enable: false,
            compare_op: CompareOp::Never,
            min_lod: 0.0,
            max_lod: NON_MIPMAPPED_MAX_LOD,
            border_color: BorderColor::FloatTransparentBlack as u32,
            unnormalized_coordinates: false,
        }
    }
}

impl SamplerCreateInfo {
    /// Returns `true` if the LOD range selects levels other than the base level.
    pub fn is_mipmapped(&self) -> bool {
        self.max_lod > NON_MIPMAPPED_MAX_LOD
    }
}

/// Texture coordinate wrapping.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter)]
pub enum WrapMode {
    ClampToEdge,
    ClampToBorder,
    RepeatGl,
    MirroredRepeatGl,
    /// Mirror once around zero then clamp to edge.
    MirroredOnce,
}

/// Texel filtering with optional filtering between mipmap levels.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter)]
pub enum FilterMode {
    Nearest,
    Linear,
    NearestMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapNearest,
    LinearMipmapLinear,
}

impl FilterMode {
    /// The filter applied within a single level.
    pub const fn texel_filter(self) -> Filter {
        match self {
            Self::Nearest | Self::NearestMipmapNearest | Self::NearestMipmapLinear => {
                Filter::Nearest
            }
            Self::Linear | Self::LinearMipmapNearest | Self::LinearMipmapLinear => Filter::Linear,
        }
    }

    /// The filter applied between levels or `None` for the base level only.
    pub const fn mipmap_mode(self) -> Option<SamplerMipmapMode> {
        match self {
            Self::Nearest | Self::Linear => None,
            Self::NearestMipmapNearest | Self::LinearMipmapNearest => {
                Some(SamplerMipmapMode::Nearest)
            }
            Self::NearestMipmapLinear | Self::LinearMipmapLinear => {
                Some(SamplerMipmapMode::Linear)
            }
        }
    }
}

/// Depth comparison applied to fetched texels.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, EnumCount, EnumIter)]
pub enum CompareMode {
    None,
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

/// A border color in the representation chosen by the border color kind.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BorderColorValue {
    Float([f32; 4]),
    Uint([u32; 4]),
}

impl BorderColorValue {
    /// The bytes of the 16 byte clear value union holding this color.
    pub fn to_bytes(self) -> [u8; 16] {
        match self {
            Self::Float(v) => bytemuck::cast(v),
            Self::Uint(v) => bytemuck::cast(v),
        }
    }
}

/// A sampler described independently of the host API.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Sampler {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub wrap_r: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub compare: CompareMode,
    pub border_color: BorderColorValue,
    pub normalized_coordinates: bool,
}

pub const fn map_address_mode(mode: SamplerAddressMode) -> WrapMode {
    match mode {
        SamplerAddressMode::Repeat => WrapMode::RepeatGl,
        SamplerAddressMode::MirroredRepeat => WrapMode::MirroredRepeatGl,
        SamplerAddressMode::ClampToEdge => WrapMode::ClampToEdge,
        SamplerAddressMode::ClampToBorder => WrapMode::ClampToBorder,
        SamplerAddressMode::MirrorClampToEdge => WrapMode::MirroredOnce,
    }
}

pub const fn map_wrap_mode(mode: WrapMode) -> SamplerAddressMode {
    match mode {
        WrapMode::RepeatGl => SamplerAddressMode::Repeat,
        WrapMode::MirroredRepeatGl => SamplerAddressMode::MirroredRepeat,
        WrapMode::ClampToEdge => SamplerAddressMode::ClampToEdge,
        WrapMode::ClampToBorder => SamplerAddressMode::ClampToBorder,
        WrapMode::MirroredOnce => SamplerAddressMode::MirrorClampToEdge,
    }
}

/// Combine a minification filter with an optional mipmap mode.
pub const fn map_min_filter(filter: Filter, mipmap_mode: Option<SamplerMipmapMode>) -> FilterMode {
    match (filter, mipmap_mode) {
        (Filter::Nearest, None) => FilterMode::Nearest,
        (Filter::Linear, None) => FilterMode::Linear,
        (Filter::Nearest, Some(SamplerMipmapMode::Nearest)) => FilterMode::NearestMipmapNearest,
        (Filter::Nearest, Some(SamplerMipmapMode::Linear)) => FilterMode::NearestMipmapLinear,
        (Filter::Linear, Some(SamplerMipmapMode::Nearest)) => FilterMode::LinearMipmapNearest,
        (Filter::Linear, Some(SamplerMipmapMode::Linear)) => FilterMode::LinearMipmapLinear,
    }
}

/// Split a minification filter into the host filter and mipmap mode.
pub const fn map_host_min_filter(filter: FilterMode) -> (Filter, Option<SamplerMipmapMode>) {
    (filter.texel_filter(), filter.mipmap_mode())
}

pub const fn map_mag_filter(filter: Filter) -> FilterMode {
    match filter {
        Filter::Nearest => FilterMode::Nearest,
        Filter::Linear => FilterMode::Linear,
    }
}

/// Magnification never uses mipmaps, so only the texel filter is kept.
pub const fn map_host_mag_filter(filter: FilterMode) -> Filter {
    filter.texel_filter()
}

pub const fn map_compare_op(compare_op: Option<CompareOp>) -> CompareMode {
    match compare_op {
        None => CompareMode::None,
        Some(CompareOp::Never) => CompareMode::Never,
        Some(CompareOp::Less) => CompareMode::Less,
        Some(CompareOp::Equal) => CompareMode::Equal,
        Some(CompareOp::LessOrEqual) => CompareMode::LessOrEqual,
        Some(CompareOp::Greater) => CompareMode::Greater,
        Some(CompareOp::NotEqual) => CompareMode::NotEqual,
        Some(CompareOp::GreaterOrEqual) => CompareMode::GreaterOrEqual,
        Some(CompareOp::Always) => CompareMode::Always,
    }
}

pub const fn map_compare_mode(mode: CompareMode) -> Option<CompareOp> {
    match mode {
        CompareMode::None => None,
        CompareMode::Never => Some(CompareOp::Never),
        CompareMode::Less => Some(CompareOp::Less),
        CompareMode::Equal => Some(CompareOp::Equal),
        CompareMode::LessOrEqual => Some(CompareOp::LessOrEqual),
        CompareMode::Greater => Some(CompareOp::Greater),
        CompareMode::NotEqual => Some(CompareOp::NotEqual),
        CompareMode::GreaterOrEqual => Some(CompareOp::GreaterOrEqual),
        CompareMode::Always => Some(CompareOp::Always),
    }
}

/// The border color value for a raw host border color kind.
pub fn map_border_color(kind: u32) -> Result<BorderColorValue, SamplerError> {
    BorderColor::try_from(kind).map(BorderColor::value)
}

/// Find the predefined border color with exactly this value.
pub fn map_border_color_value(value: BorderColorValue) -> Result<BorderColor, SamplerError> {
    use strum::IntoEnumIterator;

    BorderColor::iter()
        .find(|c| c.value() == value)
        .ok_or(SamplerError::NoMatchingBorderColor { value })
}

/// Convert host sampler parameters to a [Sampler].
pub fn map_sampler(info: &SamplerCreateInfo) -> Result<Sampler, SamplerError> {
    let mipmap_mode = info.is_mipmapped().then_some(info.mipmap_mode);
    let compare_op = info.compare_enable.then_some(info.compare_op);

    Ok(Sampler {
        wrap_s: map_address_mode(info.address_mode_u),
        wrap_t: map_address_mode(info.address_mode_v),
        wrap_r: map_address_mode(info.address_mode_w),
        min_filter: map_min_filter(info.min_filter, mipmap_mode),
        mag_filter: map_mag_filter(info.mag_filter),
        compare: map_compare_op(compare_op),
        border_color: map_border_color(info.border_color)?,
        normalized_coordinates: !info.unnormalized_coordinates,
    })
}

/// Convert a [Sampler] to host sampler parameters.
///
/// Samplers without mipmap filtering clamp LOD to the base level.
pub fn map_host_sampler(sampler: &Sampler) -> Result<SamplerCreateInfo, SamplerError> {
    let (min_filter, mipmap_mode) = map_host_min_filter(sampler.min_filter);
    let compare_op = map_compare_mode(sampler.compare);
    let border_color = map_border_color_value(sampler.border_color)?;

    Ok(SamplerCreateInfo {
        mag_filter: map_host_mag_filter(sampler.mag_filter),
        min_filter,
        mipmap_mode: mipmap_mode.unwrap_or(SamplerMipmapMode::Nearest),
        address_mode_u: map_wrap_mode(sampler.wrap_s),
        address_mode_v: map_wrap_mode(sampler.wrap_t),
        address_mode_w: map_wrap_mode(sampler.wrap_r),
        compare_enable: compare_op.is_some(),
        compare_op: compare_op.unwrap_or(CompareOp::Never),
        min_lod: 0.0,
        max_lod: if mipmap_mode.is_some() {
            LOD_CLAMP_NONE
        } else {
            NON_MIPMAPPED_MAX_LOD
        },
        border_color: border_color as u32,
        unnormalized_coordinates: !sampler.normalized_coordinates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn address_modes_round_trip() {
        for mode in SamplerAddressMode::iter() {
            assert_eq!(mode, map_wrap_mode(map_address_mode(mode)));
        }
        assert_eq!(WrapMode::COUNT, SamplerAddressMode::COUNT);
    }

    #[test]
    fn min_filters_round_trip() {
        for filter in FilterMode::iter() {
            let (host, mipmap_mode) = map_host_min_filter(filter);
            assert_eq!(filter, map_min_filter(host, mipmap_mode));
        }
    }

    #[test]
    fn mag_filter_drops_mipmap() {
        assert_eq!(Filter::Linear, map_host_mag_filter(FilterMode::LinearMipmapNearest));
        assert_eq!(FilterMode::Nearest, map_mag_filter(Filter::Nearest));
    }

    #[test]
    fn compare_round_trip() {
        for mode in CompareMode::iter() {
            assert_eq!(mode, map_compare_op(map_compare_mode(mode)));
        }
        assert_eq!(None, map_compare_mode(CompareMode::None));
    }

    #[test]
    fn border_colors() {
        assert_eq!(
            Ok(BorderColorValue::Float([0.0, 0.0, 0.0, 1.0])),
            map_border_color(BorderColor::FloatOpaqueBlack as u32)
        );
        assert_eq!(
            Ok(BorderColorValue::Uint([1, 1, 1, 1])),
            map_border_color(BorderColor::IntOpaqueWhite as u32)
        );
        for color in BorderColor::iter() {
            assert_eq!(Ok(color), map_border_color_value(color.value()));
        }
    }

    #[test]
    fn invalid_border_color_kind() {
        assert_eq!(
            Err(SamplerError::InvalidBorderColorKind { kind: 6 }),
            map_border_color(6)
        );
        assert_eq!(
            Err(SamplerError::InvalidBorderColorKind { kind: u32::MAX }),
            BorderColor::try_from(u32::MAX)
        );
    }

    #[test]
    fn no_matching_border_color() {
        let value = BorderColorValue::Float([0.5, 0.0, 0.0, 1.0]);
        assert_eq!(
            Err(SamplerError::NoMatchingBorderColor { value }),
            map_border_color_value(value)
        );
    }

    #[test]
    fn border_color_bytes() {
        let bytes = BorderColorValue::Float([1.0, 0.0, 0.0, 0.0]).to_bytes();
        assert_eq!(1.0f32.to_le_bytes(), bytes[..4]);
        assert_eq!([0u8; 12], bytes[4..]);

        let bytes = BorderColorValue::Uint([0, 0, 0, 1]).to_bytes();
        assert_eq!([0u8; 12], bytes[..12]);
        assert_eq!(1u32.to_le_bytes(), bytes[12..]);
    }

    #[test]
    fn sampler_non_mipmapped() {
        let info = SamplerCreateInfo {
            min_filter: Filter::Linear,
            mipmap_mode: SamplerMipmapMode::Linear,
            ..Default::default()
        };
        let sampler = map_sampler(&info).unwrap();
        assert_eq!(FilterMode::Linear, sampler.min_filter);
        assert_eq!(CompareMode::None, sampler.compare);
        assert!(sampler.normalized_coordinates);
    }

    #[test]
    fn sampler_round_trip() {
        let info = SamplerCreateInfo {
            mag_filter: Filter::Linear,
            min_filter: Filter::Nearest,
            mipmap_mode: SamplerMipmapMode::Linear,
            address_mode_u: SamplerAddressMode::ClampToBorder,
            address_mode_v: SamplerAddressMode::MirroredRepeat,
            address_mode_w: SamplerAddressMode::MirrorClampToEdge,
            compare_enable: true,
            compare_op: CompareOp::GreaterOrEqual,
            min_lod: 0.0,
            max_lod: LOD_CLAMP_NONE,
            border_color: BorderColor::IntOpaqueBlack as u32,
            unnormalized_coordinates: false,
        };
        let sampler = map_sampler(&info).unwrap();
        assert_eq!(
            Sampler {
                wrap_s: WrapMode::ClampToBorder,
                wrap_t: WrapMode::MirroredRepeatGl,
                wrap_r: WrapMode::MirroredOnce,
                min_filter: FilterMode::NearestMipmapLinear,
                mag_filter: FilterMode::Linear,
                compare: CompareMode::GreaterOrEqual,
                border_color: BorderColorValue::Uint([0, 0, 0, 1]),
                normalized_coordinates: true,
            },
            sampler
        );
        assert_eq!(Ok(info), map_host_sampler(&sampler));
    }

    #[test]
    fn sampler_invalid_border_color() {
        let info = SamplerCreateInfo {
            border_color: 42,
            ..Default::default()
        };
        assert_eq!(
            Err(SamplerError::InvalidBorderColorKind { kind: 42 }),
            map_sampler(&info)
        );
    }
}
