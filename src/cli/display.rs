// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for notefinder results.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `NOTEFINDER_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! and non-TTY stdout turn colors off entirely so output pipes cleanly.
//!
//! Results render as boxed tables: one row per note with score, confidence,
//! a match-type badge, and the matched excerpt underneath.

use notefinder::{LinkResolution, MatchType, Note, SearchResult, SearchStats};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("NOTEFINDER_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7+ (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Shorten plain text to `max_chars`, ending with `…` when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(), "─".repeat(BOX_WIDTH), reset());
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded match type badge
pub fn match_type_badge(match_type: MatchType) -> String {
    let label = format!("[{}]", match_type);
    let color: fn() -> String = match match_type {
        MatchType::ExactTitle => BRIGHT_GREEN,
        MatchType::TitleStart => BLUE,
        MatchType::TitleContains => YELLOW,
        MatchType::ContentMatch => MAGENTA,
        MatchType::TagMatch => CYAN,
        MatchType::FuzzyMatch => GRAY,
    };
    themed(color, &[], &label)
}

/// Color-coded score value
pub fn score_value(score: i64) -> String {
    let text = format!("{:>5}", score);
    let color: fn() -> String = if score >= 100 {
        BRIGHT_GREEN
    } else if score >= 60 {
        GREEN
    } else if score >= 33 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[BOLD], &text)
}

/// Ten-cell confidence bar: `███████░░░  72%`
pub fn confidence_bar(confidence: i64) -> String {
    let filled = (confidence.clamp(0, 100) / 10) as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
    format!("{} {:>3}%", themed(GREEN, &[], &bar), confidence)
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    let color: fn() -> String = if value < 1.0 {
        GREEN
    } else if value < 10.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &text)
}

fn note_label(note: &Note) -> String {
    let id = note.id.as_deref().unwrap_or("unsaved");
    format!(
        "{} {}",
        themed(BRIGHT_CYAN, &[BOLD], &truncate(&note.title, 50)),
        themed(GRAY, &[DIM], &format!("({})", id))
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed table of ranked results.
pub fn print_results(query: &str, results: &[SearchResult<'_>]) {
    section_top(&format!("RESULTS for \"{}\"", truncate(query, 40)));
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], "  no matching notes"));
    }
    for (rank, result) in results.iter().enumerate() {
        row(&format!(
            " {:>2}. {} {}  {}",
            rank + 1,
            score_value(result.score),
            confidence_bar(result.confidence),
            match_type_badge(result.match_type)
        ));
        row(&format!("     {}", note_label(result.note)));
        if result.matched_text != result.note.title {
            row(&themed(
                GRAY,
                &[],
                &format!("     {}", truncate(&result.matched_text, BOX_WIDTH - 6)),
            ));
        }
    }
    section_bot();
}

/// Boxed list of notes a link resolved to.
pub fn print_resolution(link_text: &str, resolution: &LinkResolution<'_>) {
    section_top(&format!("[[{}]]", truncate(link_text, 60)));
    match resolution {
        LinkResolution::None => row(&themed(RED, &[], "  unresolved")),
        LinkResolution::One(note) => row(&format!("  → {}", note_label(note))),
        LinkResolution::Many(notes) if notes.is_empty() => {
            row(&themed(RED, &[], "  unresolved"));
        }
        LinkResolution::Many(notes) => {
            for note in notes {
                row(&format!("  → {}", note_label(note)));
            }
        }
    }
    section_bot();
}

/// Boxed key/value summary of one search.
pub fn print_stats(query: &str, stats: &SearchStats) {
    section_top(&format!("STATS for \"{}\"", truncate(query, 40)));
    row(&format!("  {} {}", pad_right("results", 16), stats.total_results));
    row(&format!("  {} {}", pad_right("average score", 16), stats.avg_score));
    row(&format!(
        "  {} {}",
        pad_right("top match type", 16),
        stats.top_match_type_label()
    ));
    row(&format!(
        "  {} {}",
        pad_right("search time", 16),
        timing_ms(stats.search_time_ms())
    ));
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
