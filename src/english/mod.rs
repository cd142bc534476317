// ============================================================================
// English Module
// Word tables and the renderer that turns parsed numerals into English
// ============================================================================

mod renderer;
mod vocabulary;

pub use renderer::{
    max_exponent, render, render_chunk, render_integer, render_integer_with_scales,
    render_with_scales,
};
pub use vocabulary::{HUNDRED, NEGATIVE, POINT, SCALES, TEENS, TENS, UNITS};
