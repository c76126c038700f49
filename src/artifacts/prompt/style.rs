//! zsh prompt escapes and glyphs
//!
//! The `%{...%}` wrappers tell zsh the enclosed sequence has zero width. They
//! are emitted verbatim and never interpreted here.

pub const BRANCH_START: &str = "%{%F{66}%}";
pub const COLOR_END: &str = "%{%f%}";

pub const AHEAD: &str = "↑";
pub const BEHIND: &str = "↓";

pub const SEPARATOR: &str = " ";

/// Colour start, glyph and colour end for one change category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub start: &'static str,
    pub glyph: &'static str,
    pub end: &'static str,
}

pub const INDEXED: Badge = Badge {
    start: "%{%F{2}%}",
    glyph: "*",
    end: COLOR_END,
};

pub const MODIFIED: Badge = Badge {
    start: "%{%F{1}%}",
    glyph: "+",
    end: COLOR_END,
};

pub const DELETED: Badge = Badge {
    start: "%{%F{1}%}",
    glyph: "-",
    end: COLOR_END,
};

pub const UNMERGED: Badge = Badge {
    start: "%{%B%F{1}%}",
    glyph: "×",
    end: "%{%f%b%}",
};

pub const UNTRACKED: Badge = Badge {
    start: "%{%F{1}%}",
    glyph: "…",
    end: COLOR_END,
};

pub const CLEAN: Badge = Badge {
    start: "%{%B%F{2}%}",
    glyph: "✓",
    end: "%{%f%b%}",
};
