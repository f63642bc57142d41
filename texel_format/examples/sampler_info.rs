use texel_format::*;

fn main() {
    let info = SamplerCreateInfo {
        mag_filter: Filter::Linear,
        min_filter: Filter::Linear,
        mipmap_mode: SamplerMipmapMode::Linear,
        address_mode_u: SamplerAddressMode::ClampToBorder,
        address_mode_v: SamplerAddressMode::ClampToBorder,
        max_lod: LOD_CLAMP_NONE,
        border_color: BorderColor::FloatOpaqueWhite as u32,
        ..Default::default()
    };

    let sampler = map_sampler(&info).unwrap();
    println!("{sampler:#?}");
    println!("border bytes: {:?}", sampler.border_color.to_bytes());

    let remapped = map_host_sampler(&sampler).unwrap();
    println!("{remapped:#?}");
}
