//! Textual (CSS) renderings of frame values, for surfaces backed by a styled document.

use alloc::format;
use alloc::string::String;

use folio::{Cursor, Emphasis};

/// Class toggled on the active tab, panel and indicator.
pub const ACTIVE_CLASS: &str = "active";
/// Class of every generated indicator.
pub const INDICATOR_CLASS: &str = "indicator";

/// `translateX(<px>px)` for the track.
pub fn transform_css(translate_x: i64) -> String {
    format!("translateX({translate_x}px)")
}

pub fn opacity_css(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Emphasized => "1",
        Emphasis::DeEmphasized => "0.7",
    }
}

pub fn scale_css(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Emphasized => "scale(1)",
        Emphasis::DeEmphasized => "scale(0.9)",
    }
}

pub fn cursor_css(cursor: Cursor) -> &'static str {
    match cursor {
        Cursor::Grab => "grab",
        Cursor::Grabbing => "grabbing",
    }
}
