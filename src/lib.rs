#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod core;

#[doc(inline)]
pub use crate::core::{
    circle, clear, clear_bitmap, filled_circle, filled_rect, line, pixel, plot, rect,
    spectrum::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, XMAX, YELLOW, YMAX},
    utils::attribute,
    DisplayFile, Pen, Sink, Source,
};

#[cfg(feature = "sdl2-renderer")]
pub mod sdl2_renderer;
