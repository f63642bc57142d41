#![no_main]

use libfuzzer_sys::fuzz_target;
use texel_format::*;

fuzz_target!(|texture_format: TextureFormat| {
    let _ = texture_format.pixel_size();
    let _ = default_swizzle(texture_format);

    if let Ok(format) = map_texture_format(texture_format) {
        assert!(texture_format.is_valid());
        assert_eq!(Ok(texture_format), map_wire_format(format));
    }
});
