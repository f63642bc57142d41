#![no_main]

use libfuzzer_sys::fuzz_target;
use texel_format::*;

fuzz_target!(|format: WireFormatId| {
    let _ = channel_class(format);
    let _ = default_swizzle_for_format(format);
    let _ = depth_aspect_format(format);
    let _ = stencil_aspect_format(format);

    if let Some(compressed) = compressed_format(format) {
        assert_eq!(format, compressed.wire_format());
    }

    if round_trip_supported(format) {
        let texture_format = map_wire_format(format).unwrap();
        assert_eq!(Ok(format), map_texture_format(texture_format));
    }
});
