//! Fixed level content: note placements and whisper lines.

/// Note top-left corners and their text.
pub const NOTES: [(f32, f32, &str); 3] = [
    (400.0, 700.0, "Someone here... left this."),
    (1000.0, 1100.0, "Are you sure you're alone?"),
    (1800.0, 1800.0, "Don't clap twice - they are listening."),
];

pub const WHISPER_LINES: [&str; 6] = [
    "Someone is nearby...",
    "Are you sure you're alone?",
    "Silence is deceptive.",
    "They hear you.",
    "Don't make noise.",
    "They're already close...",
];
