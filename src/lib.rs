//! # Artwork Gallery
//!
//! Generates a static HTML gallery page from a directory of YAML-described
//! artworks. Each file describes one artwork; each artwork with an image
//! becomes one tile in a masonry grid.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Scan      data/*.yml  →  Vec<Artwork>   (files → records)
//! 2. Render    records     →  grid markup    (records → grid items)
//! 3. Write     grid        →  index.html     (grid → page shell → disk)
//! ```
//!
//! The stages run once, in order, on a single thread. Nothing is written until
//! scanning and rendering have both succeeded, so a failed run never leaves a
//! half-built page behind.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — reads the YAML files of the data directory into records |
//! | [`generate`] | Stages 2 and 3 — renders grid items and page shells with Maud, writes the page |
//! | [`config`] | Optional `config.toml`: page shell selection and path prefixes |
//! | [`types`] | The [`types::Artwork`] record |
//! | [`output`] | CLI output formatting for generation events |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templates
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Artwork names come
//! from user-edited files and are interpolated into attributes and headings;
//! Maud escapes every interpolation, so a name like `<b>Bold</b>` shows up as
//! text instead of markup.
//!
//! ## Events Instead of Printing
//!
//! The library never prints. [`generate::generate`] takes an optional
//! `Sender<GenerateEvent>` and reports each artwork it reads, renders or
//! skips. The binary formats those events with [`output`]; tests collect them
//! from the receiving end.
//!
//! ## Two Page Shells
//!
//! The grid can be embedded in a "classic" page (header, top navigation,
//! footer, items linking to `#`) or a "sidebar" page (sidebar navigation,
//! items linking to one page per artwork). `config.toml` picks one; see
//! [`config::TemplateVariant`].

pub mod config;
pub mod generate;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
