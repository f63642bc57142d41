//! # texel_format
//! texel_format translates between the pixel format identifiers of a Vulkan style
//! host API and a generic texel format made of a [ChannelOrder] and a [ChannelType].
//!
//! The generic [TextureFormat] describes how to interpret the bytes of a texel.
//! Mapping a [WireFormatId] to a [TextureFormat] and back recovers the original
//! identifier except for the scaled integer formats, the packed ABGR formats,
//! and the formats with 64-bit integer channels.
//! Block compressed formats map to a [CompressedFormat] instead.
//!
//! All tables are static and every operation is a pure lookup,
//! so the API can be called from any number of threads.
//!
//! # Getting Started
//! ```rust
//! use texel_format::{
//!     map_texture_format, map_wire_format, ChannelOrder, ChannelType, WireFormatId,
//! };
//!
//! let format = map_wire_format(WireFormatId::R8G8B8A8_UNORM)?;
//! assert_eq!(ChannelOrder::Rgba, format.order);
//! assert_eq!(ChannelType::UnormInt8, format.ty);
//! assert_eq!(WireFormatId::R8G8B8A8_UNORM, map_texture_format(format)?);
//! # Ok::<(), texel_format::FormatError>(())
//! ```
//!
//! Depth stencil formats have no defined interleaved memory layout.
//! Use [depth_aspect_format] or [stencil_aspect_format] to get the format of a single aspect.
//! ```rust
//! use texel_format::{
//!     stencil_aspect_format, ChannelOrder, ChannelType, TextureFormat, WireFormatId,
//! };
//!
//! assert_eq!(
//!     TextureFormat::new(ChannelOrder::S, ChannelType::UnsignedInt8),
//!     stencil_aspect_format(WireFormatId::D24_UNORM_S8_UINT)?
//! );
//! # Ok::<(), texel_format::FormatError>(())
//! ```
//!
//! # Features
//! - `serde` implements `Serialize` and `Deserialize` for the public value types.
//! - `arbitrary` implements `Arbitrary` for fuzzing.

// Byte array formats with multi byte channels are assumed to be little endian.
#[cfg(target_endian = "big")]
compile_error!("texel_format only supports little endian targets");

mod channel;
mod classify;
mod compressed;
mod error;
mod map;
mod sampler;
mod swizzle;
mod wire;

pub use channel::{Aspect, ChannelOrder, ChannelType, TextureFormat};
pub use classify::{
    channel_class, depth_aspect_format, has_depth_component, has_stencil_component,
    is_depth_stencil_format, is_float_format, is_int_format, is_snorm_format, is_srgb_format,
    is_uint_format, is_unorm_format, stencil_aspect_format, ChannelClass,
};
pub use compressed::{
    compressed_format, is_compressed_format, uncompressed_equivalent, CompressedFamily,
    CompressedFormat,
};
pub use error::{FormatError, SamplerError, SelfTestError};
pub use map::{
    is_alias_packed_format, is_int64_format, is_scaled_format, map_texture_format,
    map_wire_format, pack_format_key, round_trip_supported,
};
pub use sampler::*;
pub use self_test::run_self_test;
pub use swizzle::{default_swizzle, default_swizzle_for_format, ComponentSwizzle, Swizzle};
pub use wire::{WireFormatId, FORMAT_COUNT};
