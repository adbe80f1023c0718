use crate::png;
use crate::rgb565;
use anyhow::Context;
use clap::Subcommand;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a raw RGB565 framebuffer dump to a PNG image
    Decode {
        input: PathBuf,
        #[arg(long, help = "Framebuffer width in pixels")]
        width: u32,
        #[arg(long, help = "Framebuffer height in pixels")]
        height: u32,
        #[arg(
            short,
            long,
            help = "Output file path (defaults to the input path with extension .png)"
        )]
        output: Option<PathBuf>,
    },
    /// Pack an 8-bit RGB or RGBA PNG into a raw RGB565 framebuffer dump
    Encode {
        input: PathBuf,
        #[arg(
            short,
            long,
            help = "Output file path (defaults to the input path with extension .raw)"
        )]
        output: Option<PathBuf>,
    },
    /// Check a raw dump against the expected dimensions without converting
    Info {
        input: PathBuf,
        #[arg(long, help = "Framebuffer width in pixels")]
        width: u32,
        #[arg(long, help = "Framebuffer height in pixels")]
        height: u32,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Decode {
                input,
                width,
                height,
                output,
            } => decode(&input, width, height, output),
            Command::Encode { input, output } => encode(&input, output),
            Command::Info {
                input,
                width,
                height,
            } => report(&input, width, height),
        }
    }
}

fn decode(input: &Path, width: u32, height: u32, output: Option<PathBuf>) -> anyhow::Result<()> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let img = rgb565::decode(&raw, width, height)?;
    // Encode fully in memory first so a failure never leaves a partial
    // output file behind.
    let encoded = png::encode_img(&img)?;

    let output = output.unwrap_or_else(|| input.with_extension("png"));
    fs::write(&output, encoded).with_context(|| format!("writing {}", output.display()))?;
    info!(
        "decoded {} ({width}x{height}) -> {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn encode(input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let img = png::parse_img(&bytes)?;
    let raw = rgb565::encode(&img);

    let output = output.unwrap_or_else(|| input.with_extension("raw"));
    fs::write(&output, raw).with_context(|| format!("writing {}", output.display()))?;
    info!(
        "packed {} ({}x{}) -> {}",
        input.display(),
        img.width(),
        img.height(),
        output.display()
    );
    Ok(())
}

fn report(input: &Path, width: u32, height: u32) -> anyhow::Result<()> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let img = rgb565::decode(&raw, width, height)?;
    println!(
        "{}: {} bytes, {}x{} RGB565, {} pixels",
        input.display(),
        raw.len(),
        img.width(),
        img.height(),
        img.width() as u64 * img.height() as u64
    );
    Ok(())
}
