use std::{fs, path::PathBuf};

use anyhow::Context;
use argh::FromArgs;
use log::info;
use zxgfx::{core::scr, DisplayFile};

mod screenshot;
mod script;

#[derive(FromArgs)]
#[argh(description = "Draw on a ZX Spectrum screen from a script.")]
struct Args {
    #[argh(positional)]
    script: PathBuf,
    #[argh(option, short = 'o', description = "write a 6912 byte .scr dump")]
    output: Option<PathBuf>,
    #[argh(option, description = "write a .tap tape image")]
    tap: Option<PathBuf>,
    #[argh(option, description = "write a png screenshot")]
    png: Option<PathBuf>,
    #[argh(
        option,
        short = 's',
        default = "3",
        description = "scale factor for the png and the preview window"
    )]
    scale: u32,
    #[argh(switch, description = "show the screen in a window")]
    preview: bool,
    #[argh(switch, description = "render FLASH cells in their swapped phase")]
    flash: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    pretty_env_logger::init();

    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;

    let mut screen = DisplayFile::new();
    script::run(&source, &mut screen).with_context(|| format!("in {}", args.script.display()))?;

    if let Some(path) = &args.output {
        scr::save_scr(&screen, path)?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &args.tap {
        scr::save_tap(&screen, &tape_name(&args.script), path)?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &args.png {
        screenshot::save_png(&screen, path, args.scale, args.flash)?;
        info!("wrote {}", path.display());
    }

    if args.preview {
        preview(&screen, &args)?;
    }

    Ok(())
}

fn tape_name(script: &std::path::Path) -> String {
    script
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "screen".to_string())
}

#[cfg(feature = "sdl2-renderer")]
fn preview(screen: &DisplayFile, args: &Args) -> anyhow::Result<()> {
    let title = format!("zxgfx - {}", args.script.display());
    zxgfx::sdl2_renderer::launch_preview(screen, &title, args.scale)
}

#[cfg(not(feature = "sdl2-renderer"))]
fn preview(_screen: &DisplayFile, _args: &Args) -> anyhow::Result<()> {
    anyhow::bail!("built without the `sdl2-renderer` feature")
}
