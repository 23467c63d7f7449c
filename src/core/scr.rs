//! Screen dumps: raw `.scr` files and `.tap` tape images.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context;
use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use crate::core::{
    spectrum::{BITMAP_ADDR, DISPLAY_FILE_SIZE},
    DisplayFile, Source,
};

const TAP_HEADER_FLAG: u8 = 0x00;
const TAP_DATA_FLAG: u8 = 0xff;
const TAP_TYPE_CODE: u8 = 3;
const TAP_NAME_LEN: usize = 10;
/// Second header parameter of a CODE block, unused by the ROM loader.
const TAP_CODE_PARAM2: u16 = 32768;

fn display_file_bytes<T: Source<u8>>(fb: &T) -> anyhow::Result<[u8; DISPLAY_FILE_SIZE]> {
    fb.items_at::<DISPLAY_FILE_SIZE>(0)
        .context("framebuffer is smaller than a display file")
}

/// Write the display file as a raw 6912-byte `.scr` dump.
pub fn write_scr<W: Write, T: Source<u8>>(w: &mut W, fb: &T) -> anyhow::Result<()> {
    w.write_all(&display_file_bytes(fb)?)?;
    Ok(())
}

/// Read a raw `.scr` dump.
pub fn read_scr<R: Read>(mut r: R) -> anyhow::Result<DisplayFile> {
    let mut bytes = Vec::with_capacity(DISPLAY_FILE_SIZE);
    r.read_to_end(&mut bytes)?;
    DisplayFile::from_scr(&bytes)
}

pub fn save_scr<T: Source<u8>>(fb: &T, path: &Path) -> anyhow::Result<()> {
    debug!("writing screen dump to {}", path.display());
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );
    write_scr(&mut file, fb)?;
    file.flush()?;
    Ok(())
}

pub fn load_scr(path: &Path) -> anyhow::Result<DisplayFile> {
    debug!("reading screen dump from {}", path.display());
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_scr(file).with_context(|| format!("failed to load {}", path.display()))
}

/// Write the display file as a tape image: a `CODE` header named `name`
/// followed by the 6912 data bytes, loadable with `LOAD "" SCREEN$`.
///
/// `name` is cut or space padded to ten characters; anything outside
/// printable ASCII becomes `?`.
pub fn write_tap<W: Write, T: Source<u8>>(w: &mut W, name: &str, fb: &T) -> anyhow::Result<()> {
    let data = display_file_bytes(fb)?;

    let mut header = Vec::with_capacity(17);
    header.push(TAP_TYPE_CODE);
    header.extend(tap_name(name));
    header.write_u16::<LittleEndian>(DISPLAY_FILE_SIZE as u16)?;
    header.write_u16::<LittleEndian>(BITMAP_ADDR)?;
    header.write_u16::<LittleEndian>(TAP_CODE_PARAM2)?;

    write_tap_block(w, TAP_HEADER_FLAG, &header)?;
    write_tap_block(w, TAP_DATA_FLAG, &data)?;
    Ok(())
}

pub fn save_tap<T: Source<u8>>(fb: &T, name: &str, path: &Path) -> anyhow::Result<()> {
    debug!("writing tape image to {}", path.display());
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );
    write_tap(&mut file, name, fb)?;
    file.flush()?;
    Ok(())
}

fn tap_name(name: &str) -> [u8; TAP_NAME_LEN] {
    let mut padded = [b' '; TAP_NAME_LEN];
    for (slot, ch) in padded.iter_mut().zip(name.chars()) {
        *slot = if ch.is_ascii_graphic() || ch == ' ' {
            ch as u8
        } else {
            b'?'
        };
    }
    padded
}

/// A tape block: length, flag, payload, then the XOR of flag and payload.
fn write_tap_block<W: Write>(w: &mut W, flag: u8, payload: &[u8]) -> anyhow::Result<()> {
    let checksum = payload.iter().fold(flag, |acc, b| acc ^ b);

    w.write_u16::<LittleEndian>((payload.len() + 2) as u16)?;
    w.write_u8(flag)?;
    w.write_all(payload)?;
    w.write_u8(checksum)?;
    Ok(())
}
