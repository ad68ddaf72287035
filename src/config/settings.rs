//! Editor preferences for the in-browser code editor
//!
//! This module defines the `EditorSettings` struct that holds every
//! user-configurable editor option, with serde support for JSON persistence,
//! plus `EditorSettingsPatch` for partial updates.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Option Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Soft-wrap mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum WordWrap {
    #[default]
    On,
    Off,
    /// Wrap at the configured column
    WordWrapColumn,
    /// Wrap at the viewport or the column, whichever is smaller
    Bounded,
}

/// Gutter line-number mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineNumbers {
    #[default]
    On,
    Off,
    Relative,
    Interval,
}

/// Which whitespace characters are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderWhitespace {
    None,
    Boundary,
    #[default]
    Selection,
    Trailing,
    All,
}

/// Caret blink animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorBlinking {
    #[default]
    Blink,
    Smooth,
    Phase,
    Expand,
    Solid,
}

/// Caret shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CursorStyle {
    #[default]
    Line,
    Block,
    Underline,
    LineThin,
    BlockOutline,
    UnderlineThin,
}

impl CursorStyle {
    /// Get a display label for the style.
    pub fn label(&self) -> &'static str {
        match self {
            CursorStyle::Line => "Line",
            CursorStyle::Block => "Block",
            CursorStyle::Underline => "Underline",
            CursorStyle::LineThin => "Thin line",
            CursorStyle::BlockOutline => "Block outline",
            CursorStyle::UnderlineThin => "Thin underline",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Process-wide editor preferences.
///
/// Persisted across sessions. Values are accepted as given; there is no
/// range validation on load or on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettings {
    // ─────────────────────────────────────────────────────────────────────────
    // Indentation & Layout
    // ─────────────────────────────────────────────────────────────────────────
    /// Indent width in columns
    pub tab_size: u32,

    /// Indent with spaces instead of tab characters
    pub insert_spaces: bool,

    /// Soft-wrap mode
    pub word_wrap: WordWrap,

    /// Font size in pixels
    pub font_size: u32,

    /// Show the minimap
    pub minimap: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────
    pub line_numbers: LineNumbers,
    pub render_whitespace: RenderWhitespace,
    pub cursor_blinking: CursorBlinking,
    pub cursor_style: CursorStyle,
    pub smooth_scrolling: bool,

    /// Ctrl + wheel changes the font size
    pub mouse_wheel_zoom: bool,
    pub bracket_pair_colorization: bool,

    /// Indentation guides
    pub guides: bool,
    pub folding: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────
    pub format_on_paste: bool,
    pub format_on_type: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            word_wrap: WordWrap::On,
            font_size: 14,
            minimap: true,

            line_numbers: LineNumbers::On,
            render_whitespace: RenderWhitespace::Selection,
            cursor_blinking: CursorBlinking::Blink,
            cursor_style: CursorStyle::Line,
            smooth_scrolling: true,
            mouse_wheel_zoom: true,
            bracket_pair_colorization: true,
            guides: true,
            folding: true,

            format_on_paste: false,
            format_on_type: false,
        }
    }
}

impl EditorSettings {
    /// Shallow-merge a partial update. Present fields are copied verbatim.
    pub fn merge(&mut self, patch: EditorSettingsPatch) {
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = patch.$field {
                    self.$field = value;
                })*
            };
        }

        apply!(
            tab_size,
            insert_spaces,
            word_wrap,
            font_size,
            minimap,
            line_numbers,
            render_whitespace,
            cursor_blinking,
            cursor_style,
            smooth_scrolling,
            mouse_wheel_zoom,
            bracket_pair_colorization,
            guides,
            folding,
            format_on_paste,
            format_on_type,
        );
    }
}

/// A partial `EditorSettings` update; `None` fields are left untouched.
///
/// Deserializes from the same camelCase keys as `EditorSettings`, so a
/// settings form can send only the fields it changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_wrap: Option<WordWrap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<LineNumbers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_whitespace: Option<RenderWhitespace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_blinking: Option<CursorBlinking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_style: Option<CursorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smooth_scrolling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_wheel_zoom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_pair_colorization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_on_paste: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_on_type: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
