mod assets;
mod board;
mod script;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use gameman::video::Framebuffers;
use gameman::{GameConfig, GameContext, RenderStyle};
use tracing::{Level, error, info};
use tracing_subscriber::util::SubscriberInitExt;

use crate::assets::AssetLoader;
use crate::board::SimBoard;
use crate::script::Script;

/// External SRAM left over for sprites once both framebuffers are placed.
const SPRITE_MEMORY_PIXELS: usize = 64 * 1024;

#[derive(Parser)]
#[command(name = "gmsim")]
#[command(version, about = "Run the GameMan game core on the desktop", long_about = None)]
struct Cli {
    /// Number of frames to run after boot
    #[arg(short, long, default_value_t = 240)]
    frames: u32,

    /// Milliseconds between two frames
    #[arg(long, default_value_t = 16)]
    frame_ms: u32,

    /// Gamepad input script (a built-in demo runs when omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Directory standing in for the SD card root, holding `sprites/`
    #[arg(long)]
    card: Option<PathBuf>,

    /// Draw generated tiles for sprites that cannot be found
    #[arg(long)]
    placeholders: bool,

    #[arg(long, value_enum, default_value_t = Style::Cpu)]
    render_style: Style,

    /// Where to write the last frame the panel showed
    #[arg(short, long, default_value = "gameman.png")]
    output: PathBuf,

    /// Also dump that frame as raw native-endian RGB565
    #[arg(long)]
    raw: Option<PathBuf>,

    /// More output; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, ValueEnum)]
enum Style {
    Cpu,
    Dma2d,
}

impl From<Style> for RenderStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Cpu => RenderStyle::Cpu,
            Style::Dma2d => RenderStyle::Dma2d,
        }
    }
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

fn rgb565_to_rgb888(px: u16) -> [u8; 3] {
    let r = (px >> 11) as u8 & 0x1F;
    let g = (px >> 5) as u8 & 0x3F;
    let b = px as u8 & 0x1F;
    [(r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2)]
}

fn write_png(pixels: &[u16], width: u16, height: u16, path: &Path) -> anyhow::Result<()> {
    let image = image::RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let px = pixels[y as usize * width as usize + x as usize];
        image::Rgb(rgb565_to_rgb888(px))
    });
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => script::DEMO.parse()?,
    };
    let config = GameConfig {
        render_style: cli.render_style.into(),
        ..GameConfig::default()
    };

    let mut first = vec![0u16; config.framebuffer_size()];
    let mut second = vec![0u16; config.framebuffer_size()];
    let mut sprite_memory = vec![0u16; SPRITE_MEMORY_PIXELS];
    let framebuffers = Framebuffers::new(&mut first, &mut second, config.width, config.height)?;
    let mut game = GameContext::new(config, framebuffers, &mut sprite_memory)?;

    let assets = AssetLoader::new(cli.card.clone(), cli.placeholders);
    let mut board = SimBoard::new(script, cli.frame_ms, assets);

    game.boot(&mut board);
    info!("console booted, running {} frames", cli.frames);

    let mut halted = None;
    for frame in 0..cli.frames {
        if let Err(e) = game.frame(&mut board) {
            error!("game halted on frame {frame}: {e} (code {})", e.code());
            halted = Some((frame, e));
            break;
        }
    }
    info!(
        "stopped in {} with {} objects queued, {} vblanks",
        game.state(),
        game.queue().len(),
        board.vblanks()
    );

    write_png(board.panel(), config.width, config.height, &cli.output)?;
    if let Some(raw) = &cli.raw {
        std::fs::write(raw, bytemuck::cast_slice::<u16, u8>(board.panel()))
            .with_context(|| format!("writing {}", raw.display()))?;
    }

    match halted {
        Some((frame, e)) => Err(e).with_context(|| format!("frame {frame}")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_expands_to_full_range() {
        assert_eq!(rgb565_to_rgb888(0xFFFF), [255, 255, 255]);
        assert_eq!(rgb565_to_rgb888(0x0000), [0, 0, 0]);
        assert_eq!(rgb565_to_rgb888(0xF800), [255, 0, 0]);
        assert_eq!(rgb565_to_rgb888(0x001F), [0, 0, 255]);
    }

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from(["gmsim", "-f", "10", "--render-style", "dma2d", "-vv"]).unwrap();
        assert_eq!(cli.frames, 10);
        assert!(matches!(cli.render_style, Style::Dma2d));
        assert_eq!(cli.verbose, 2);
    }
}
