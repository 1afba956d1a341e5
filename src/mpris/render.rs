//! Status-line rendering for polybar.
//!
//! Buttons are wrapped in polybar action tags (`%{A1:<cmd>:} ... %{A}`) so a
//! left click on the glyph runs the embedded command.

use crate::error::Result;
use crate::mpris::cache::{PlaybackState, PropertyCache};

/// Shown while playing; clicking pauses.
pub const PAUSE_GLYPH: &str = "\u{f03e4}";
/// Shown while paused; clicking plays.
pub const PLAY_GLYPH: &str = "\u{f040a}";
pub const NEXT_GLYPH: &str = "\u{f04ad}";
pub const PREVIOUS_GLYPH: &str = "\u{f04ae}";
pub const SHIFT_GLYPH: &str = "\u{f0465}";
pub const UNSHIFT_GLYPH: &str = "\u{f0467}";

pub const PLAY_PAUSE_CMD: &str = "playerctl play-pause";
pub const NEXT_CMD: &str = "playerctl next";
pub const PREVIOUS_CMD: &str = "playerctl previous";
pub const SHIFT_CMD: &str = "playerctld shift";
pub const UNSHIFT_CMD: &str = "playerctld unshift";

const ELLIPSIS: &str = "...";

/// Wrap `text` in a left-click action running `cmd`.
pub fn clickable(cmd: &str, text: &str) -> String {
    format!("%{{A1:{}:}} {} %{{A}}", cmd, text)
}

/// Cut `text` to at most `max_len` characters, ending in `...` when cut.
///
/// Lengths count Unicode scalar values, not bytes.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Glyph for the play/pause button.
pub fn play_pause_glyph(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Paused => PLAY_GLYPH,
        PlaybackState::Playing => PAUSE_GLYPH,
    }
}

/// Renders the now-playing line from the property cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRenderer {
    max_title_len: usize,
}

impl StatusRenderer {
    pub fn new(max_title_len: usize) -> Self {
        Self { max_title_len }
    }

    /// Title, then previous/play-pause/next, then shift/unshift.
    pub fn render(&self, cache: &PropertyCache) -> Result<String> {
        let state = cache.playback_state()?;
        let title = truncate(cache.title()?.unwrap_or_default(), self.max_title_len);

        let mut line = title;
        line.push_str(&clickable(PREVIOUS_CMD, PREVIOUS_GLYPH));
        line.push_str(&clickable(PLAY_PAUSE_CMD, play_pause_glyph(state)));
        line.push_str(&clickable(NEXT_CMD, NEXT_GLYPH));
        line.push_str(&clickable(SHIFT_CMD, SHIFT_GLYPH));
        line.push_str(&clickable(UNSHIFT_CMD, UNSHIFT_GLYPH));
        Ok(line)
    }
}
