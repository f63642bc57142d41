use texel_format::*;

// Usage: format_info R8G8B8A8_UNORM
fn main() {
    let args: Vec<_> = std::env::args().collect();
    let format: WireFormatId = args[1].parse().unwrap();

    println!("{format} = {}", format.raw());
    println!("class: {}", channel_class(format).unwrap());
    println!("swizzle: {}", default_swizzle_for_format(format));

    if let Some(compressed) = compressed_format(format) {
        let (width, height, depth) = compressed.block_dimensions();
        println!(
            "compressed: {compressed} {width}x{height}x{depth} {} bytes per block",
            compressed.block_size_in_bytes()
        );
        println!("decompressed: {}", compressed.uncompressed_format());
        return;
    }

    match map_wire_format(format) {
        Ok(texture_format) => {
            println!(
                "texel format: {texture_format} {} bytes",
                texture_format.pixel_size()
            );
            match map_texture_format(texture_format) {
                Ok(remapped) if remapped == format => println!("round trip: ok"),
                Ok(remapped) => println!("round trip: maps back to {remapped}"),
                Err(e) => println!("round trip: {e}"),
            }
        }
        Err(e) => println!("{e}"),
    }

    if let Ok(depth) = depth_aspect_format(format) {
        println!("depth aspect: {depth}");
    }
    if let Ok(stencil) = stencil_aspect_format(format) {
        println!("stencil aspect: {stencil}");
    }
}
