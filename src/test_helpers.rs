//! Shared test utilities for the artwork-gallery test suite.
//!
//! Provides fixture setup, record builders, and small extractors for the
//! generated HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let artworks = scan(tmp.path()).unwrap();
//! assert_eq!(artwork_names(&artworks)[0], Some("Sunset"));
//!
//! let (grid, _) = render_grid(&artworks, &SiteConfig::default(), None).unwrap();
//! assert_eq!(img_srcs(&grid.into_string()), vec!["img/sunset.jpg", "img/harbour.jpg"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::Artwork;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/data/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/data");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Build an in-memory artwork record.
pub fn artwork(name: Option<&str>, img: &[&str]) -> Artwork {
    let source = match name {
        Some(n) => format!("{}.yml", n.to_lowercase().replace(' ', "-")),
        None => "unnamed.yml".to_string(),
    };
    Artwork {
        source,
        name: name.map(String::from),
        img: img.iter().map(|s| s.to_string()).collect(),
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// All artwork names in record order.
pub fn artwork_names(artworks: &[Artwork]) -> Vec<Option<&str>> {
    artworks.iter().map(|a| a.name.as_deref()).collect()
}

/// Split rendered HTML into its grid items, in document order.
///
/// Each returned slice starts at a grid item's opening tag and runs up to the
/// next grid item (or the end of the input).
pub fn grid_items(html: &str) -> Vec<&str> {
    const OPEN: &str = r#"<div class="grid-item">"#;
    let starts: Vec<usize> = html.match_indices(OPEN).map(|(i, _)| i).collect();
    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

/// The `src` attribute of every `<img>` tag, in document order.
pub fn img_srcs(html: &str) -> Vec<&str> {
    html.split("<img")
        .skip(1)
        .filter_map(|tag| {
            let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
            let start = tag.find(r#"src=""#)? + r#"src=""#.len();
            let len = tag[start..].find('"')?;
            Some(&tag[start..start + len])
        })
        .collect()
}

/// The text of every `<h3>` heading, in document order.
pub fn headings(html: &str) -> Vec<&str> {
    html.split("<h3>")
        .skip(1)
        .filter_map(|rest| rest.find("</h3>").map(|end| &rest[..end]))
        .collect()
}
