//! CLI output formatting for gallery generation.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each artwork is shown
//! by its positional index and name, with the file it came from and the
//! image it displays as indented context lines. Artworks that are left out of
//! the grid are still listed, so the report accounts for every file read.
//!
//! # Output Format
//!
//! ```text
//! Artworks (4 in data)
//! 001 Sunset
//!     Source: 010-sunset.yml
//!     Image: img/sunset.jpg
//! 002 Void (no images, skipped)
//!     Source: 020-void.yml
//! 003 Harbour at Dawn
//!     Source: 030-harbour.yaml
//!     Image: img/harbour.jpg
//!
//! Generated index.html (2 artworks, 2 skipped)
//! ```
//!
//! # Architecture
//!
//! [`format_event`] and [`format_summary`] return `Vec<String>` / `String` for
//! testability; the `print_*` wrappers write to stdout. Format functions are
//! pure — no I/O, no side effects.

use crate::generate::{GalleryStats, GenerateEvent};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// One-line account of a gallery: what made it into the grid and what didn't.
pub fn format_summary(stats: &GalleryStats) -> String {
    format!(
        "{}, {} skipped",
        plural(stats.rendered, "artwork"),
        stats.skipped
    )
}

/// Format a single generation event as display lines.
pub fn format_event(event: &GenerateEvent) -> Vec<String> {
    match event {
        GenerateEvent::Scanned { source_dir, count } => {
            vec![format!("Artworks ({} in {})", count, source_dir.display())]
        }
        GenerateEvent::ArtworkRendered {
            index,
            name,
            source,
            image,
        } => vec![
            format!("{} {}", format_index(*index), name),
            format!("    Source: {}", source),
            format!("    Image: {}", image),
        ],
        GenerateEvent::ArtworkSkipped {
            index,
            name,
            source,
        } => vec![
            format!("{} {} (no images, skipped)", format_index(*index), name),
            format!("    Source: {}", source),
        ],
        GenerateEvent::PageWritten { path, stats } => vec![
            String::new(),
            format!("Generated {} ({})", path.display(), format_summary(stats)),
        ],
    }
}

/// Print a generation event to stdout.
pub fn print_event(event: &GenerateEvent) {
    for line in format_event(event) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
