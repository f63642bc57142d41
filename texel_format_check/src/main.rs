use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use texel_format::{
    channel_class, compressed_format, default_swizzle_for_format, map_wire_format,
    round_trip_supported, run_self_test, ChannelClass, CompressedFormat, Swizzle, TextureFormat,
    WireFormatId,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Check the format tables and print how every host format is mapped.
#[derive(Parser, Debug)]
struct Args {
    /// Print the format table as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Only print the table without checking the tables first.
    #[arg(long)]
    skip_self_test: bool,
}

#[derive(Debug, Serialize)]
struct FormatRow {
    id: u32,
    name: String,
    class: ChannelClass,
    texture_format: Option<TextureFormat>,
    compressed: Option<CompressedInfo>,
    swizzle: Swizzle,
    round_trip: bool,
}

impl FormatRow {
    fn is_lossy(&self) -> bool {
        self.texture_format.is_some() && !self.round_trip
    }
}

#[derive(Debug, Serialize)]
struct CompressedInfo {
    format: CompressedFormat,
    block_dimensions: (u32, u32, u32),
    block_size_in_bytes: usize,
    has_alpha: bool,
    has_dedicated_alpha: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.skip_self_test {
        warn!("skipping format table self test");
    } else {
        run_self_test().context("format table self test failed")?;
    }

    let rows = WireFormatId::all()
        .map(format_row)
        .collect::<Result<Vec<_>>>()?;

    let lossy = rows
        .iter()
        .filter(|r| r.is_lossy())
        .count();
    info!(formats = rows.len(), lossy, json = args.json, "printing format table");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            print_row(row);
        }
    }

    Ok(())
}

fn format_row(format: WireFormatId) -> Result<FormatRow> {
    let class = channel_class(format).with_context(|| format!("failed to classify {format}"))?;

    Ok(FormatRow {
        id: format.raw(),
        name: format.to_string(),
        class,
        texture_format: map_wire_format(format).ok(),
        compressed: compressed_format(format).map(|f| CompressedInfo {
            format: f,
            block_dimensions: f.block_dimensions(),
            block_size_in_bytes: f.block_size_in_bytes(),
            has_alpha: f.has_alpha(),
            has_dedicated_alpha: f.has_dedicated_alpha(),
        }),
        swizzle: default_swizzle_for_format(format),
        round_trip: round_trip_supported(format),
    })
}

fn print_row(row: &FormatRow) {
    let mapped = match (&row.texture_format, &row.compressed) {
        (Some(texture_format), _) => texture_format.to_string(),
        (None, Some(info)) => {
            let (width, height, _) = info.block_dimensions;
            format!("{} {width}x{height}", info.format)
        }
        (None, None) => "-".to_string(),
    };

    println!(
        "{:>3} {:<32} {:<22} {:<40} {} {}",
        row.id,
        row.name,
        row.class.to_string(),
        mapped,
        row.swizzle,
        if row.is_lossy() { "lossy" } else { "" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_row_is_lossy() {
        let row = format_row(WireFormatId::R8_USCALED).unwrap();
        assert!(row.is_lossy());
    }

    #[test]
    fn compressed_row_is_not_lossy() {
        let row = format_row(WireFormatId::BC1_RGBA_UNORM_BLOCK).unwrap();
        assert!(!row.is_lossy());
        assert!(row.compressed.unwrap().has_alpha);
    }

    #[test]
    fn astc_row_uses_host_name() {
        let row = format_row(WireFormatId::ASTC_5X4_SRGB_BLOCK).unwrap();
        assert_eq!("ASTC_5x4_SRGB_BLOCK", row.name);
    }
}
