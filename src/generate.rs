//! HTML gallery generation.
//!
//! Stages 2 and 3 of the gallery pipeline. Renders each artwork into a grid
//! item, embeds the grid into a page shell, and writes the page to disk.
//!
//! ## Grid Items
//!
//! Every artwork with at least one image becomes one masonry grid item showing
//! its first image. Extra images are not displayed. Artworks without images
//! produce nothing, but are still reported through [`GenerateEvent`].
//!
//! ```html
//! <div class="grid-item">
//!     <img class="img-responsive" alt="Sunset" src="img/sunset.jpg">
//!     <a class="project-description" href="#">
//!         <div class="project-text-holder">
//!             <div class="project-text-inner">
//!                 <h3>Sunset</h3>
//!                 <p>Discover more</p>
//!             </div>
//!         </div>
//!     </a>
//! </div>
//! ```
//!
//! ## Page Shells
//!
//! Two fixed shells are available, selected by [`TemplateVariant`]:
//!
//! - **Classic**: header with logo and address, top navigation, footer.
//!   Grid items link to `#`.
//! - **Sidebar**: collapsible sidebar with brand, navigation and social
//!   links. Grid items link to `./artwork-pages/{name}.html`.
//!
//! Both shells have exactly one grid container, which receives the rendered
//! items in input order.
//!
//! ## Write Ordering
//!
//! The whole page is rendered in memory before the output file is opened. A
//! run that fails while loading or rendering leaves the previous output file
//! as it was.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Artwork names and image file names are escaped on interpolation.

use crate::config::{SiteConfig, TemplateVariant};
use crate::scan::{self, ScanError};
use crate::types::Artwork;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Artwork has no name: {0}")]
    MissingName(String),
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Progress events emitted while generating a gallery.
///
/// Every loaded artwork produces exactly one `ArtworkRendered` or
/// `ArtworkSkipped` event, in input order. `index` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    Scanned {
        source_dir: PathBuf,
        count: usize,
    },
    ArtworkRendered {
        index: usize,
        name: String,
        source: String,
        image: String,
    },
    ArtworkSkipped {
        index: usize,
        name: String,
        source: String,
    },
    PageWritten {
        path: PathBuf,
        stats: GalleryStats,
    },
}

/// How many artworks ended up in the grid, and how many were left out for
/// lack of images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryStats {
    pub rendered: usize,
    pub skipped: usize,
}

fn emit(events: Option<&Sender<GenerateEvent>>, event: GenerateEvent) {
    if let Some(tx) = events {
        // Events are best-effort; a closed receiver is not an error.
        tx.send(event).ok();
    }
}

/// Run the full pipeline: load `source_dir`, render, write the page to `output`.
pub fn generate(
    source_dir: &Path,
    output: &Path,
    config: &SiteConfig,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GalleryStats, GenerateError> {
    let (page, stats) = build(source_dir, config, events.as_ref())?;
    write_page(page, output)?;
    emit(
        events.as_ref(),
        GenerateEvent::PageWritten {
            path: output.to_path_buf(),
            stats,
        },
    );
    Ok(stats)
}

/// Load and render without writing anything.
pub fn check(
    source_dir: &Path,
    config: &SiteConfig,
    events: Option<Sender<GenerateEvent>>,
) -> Result<GalleryStats, GenerateError> {
    let (_, stats) = build(source_dir, config, events.as_ref())?;
    Ok(stats)
}

fn build(
    source_dir: &Path,
    config: &SiteConfig,
    events: Option<&Sender<GenerateEvent>>,
) -> Result<(Markup, GalleryStats), GenerateError> {
    let artworks = scan::scan(source_dir)?;
    emit(
        events,
        GenerateEvent::Scanned {
            source_dir: source_dir.to_path_buf(),
            count: artworks.len(),
        },
    );
    let (grid, stats) = render_grid(&artworks, config, events)?;
    Ok((render_page(grid, config), stats))
}

/// Persist a rendered page, replacing whatever is at `path`.
pub fn write_page(page: Markup, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page.into_string())
}

// ============================================================================
// Grid
// ============================================================================

/// Render the grid items for all artworks, in input order.
pub fn render_grid(
    artworks: &[Artwork],
    config: &SiteConfig,
    events: Option<&Sender<GenerateEvent>>,
) -> Result<(Markup, GalleryStats), RenderError> {
    let mut fragments = Vec::with_capacity(artworks.len());
    let mut stats = GalleryStats::default();

    for (idx, artwork) in artworks.iter().enumerate() {
        let fragment = render_artwork(artwork, config)?;
        let name = artwork.display_name().to_string();
        let source = artwork.source.clone();

        match artwork.main_image() {
            Some(image) => {
                stats.rendered += 1;
                fragments.push(fragment);
                emit(
                    events,
                    GenerateEvent::ArtworkRendered {
                        index: idx + 1,
                        name,
                        source,
                        image: image_src(config, image),
                    },
                );
            }
            None => {
                stats.skipped += 1;
                emit(
                    events,
                    GenerateEvent::ArtworkSkipped {
                        index: idx + 1,
                        name,
                        source,
                    },
                );
            }
        }
    }

    let grid = html! {
        @for fragment in fragments {
            (fragment)
        }
    };
    Ok((grid, stats))
}

/// Render one artwork as a grid item.
///
/// Returns empty markup for an artwork without images. A missing name is an
/// error whether or not the artwork has images.
pub fn render_artwork(artwork: &Artwork, config: &SiteConfig) -> Result<Markup, RenderError> {
    let name = artwork
        .name
        .as_deref()
        .ok_or_else(|| RenderError::MissingName(artwork.source.clone()))?;

    let Some(main_image) = artwork.main_image() else {
        return Ok(html! {});
    };

    Ok(html! {
        div.grid-item {
            img.img-responsive alt=(name) src=(image_src(config, main_image));
            a.project-description href=(artwork_link(config, name)) {
                div.project-text-holder {
                    div.project-text-inner {
                        h3 { (name) }
                        p { (link_label(config.template)) }
                    }
                }
            }
        }
    })
}

fn image_src(config: &SiteConfig, image: &str) -> String {
    format!("{}/{}", config.image_dir, image)
}

/// Where a grid item links to.
///
/// Sidebar links name the artwork page after the artwork, percent-encoded so
/// that `#`, `?` or `/` in a name stay part of the file name.
pub fn artwork_link(config: &SiteConfig, name: &str) -> String {
    match config.template {
        TemplateVariant::Classic => "#".to_string(),
        TemplateVariant::Sidebar => format!(
            "./{}/{}.html",
            config.artwork_pages_dir,
            encode_path_segment(name)
        ),
    }
}

/// Percent-encode every byte outside the URL unreserved set.
fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

fn link_label(template: TemplateVariant) -> &'static str {
    match template {
        TemplateVariant::Classic => "Discover more",
        TemplateVariant::Sidebar => "Ver más",
    }
}

// ============================================================================
// Page Shells
// ============================================================================

const SITE_TITLE: &str = "Clínica Dental de la Doctora Quadros";
const GALLERY_TITLE: &str = "Clínica Dental de la Doctora Quadros Art Gallery";

const MASONRY_JS: &str = r#"
document.addEventListener("DOMContentLoaded", function (event) {
    masonryBuild();
});
"#;

const SIDEBAR_JS: &str = r#"
document.addEventListener("DOMContentLoaded", function (event) {
    navbarToggleSidebar();
    navActivePage();
});
"#;

/// Embed the rendered grid into the configured page shell.
pub fn render_page(grid: Markup, config: &SiteConfig) -> Markup {
    match config.template {
        TemplateVariant::Classic => classic_page(grid),
        TemplateVariant::Sidebar => sidebar_page(grid),
    }
}

/// The masonry container shared by both shells.
fn grid_container(grid: Markup) -> Markup {
    html! {
        div.hero-full-wrapper {
            div.grid {
                div.gutter-sizer {}
                div.grid-sizer {}
                (grid)
            }
        }
    }
}

fn stylesheets() -> Markup {
    html! {
        link rel="stylesheet" href="styles/main.82cfd66e.css";
        link rel="stylesheet" href="styles/gallery.css";
    }
}

fn classic_page(grid: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (SITE_TITLE) }
                (stylesheets())
            }
            body {
                header {
                    div.header-container {
                        img.logo src="draquadros-logo.svg" alt="Gallery Logo";
                        div.gallery-info {
                            h1 { (GALLERY_TITLE) }
                            p { "Calle del Capitán Haya 47, 28020 Madrid" }
                        }
                    }
                    nav {
                        ul {
                            li { a href="#home" { "Home" } }
                            li { a href="#artists" { "Artists" } }
                            li { a href="#about" { "About" } }
                            li { a href="#contact" { "Contact" } }
                        }
                    }
                }
                main id="main-collapse" {
                    (grid_container(grid))
                }
                footer {
                    p {
                        "© 2023 " (GALLERY_TITLE) ". All rights reserved. | Connect with us:"
                    }
                }
            }
        }
    }
}

fn sidebar_page(grid: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta content="Page description" name="description";
                meta content="Developed by ININ" name="author";
                link href="./assets/apple-icon-180x180.png" rel="apple-touch-icon";
                link href="./assets/favicon.ico" rel="icon";
                title { (SITE_TITLE) }
                (stylesheets())
            }
            body {
                header {
                    div.navbar.navbar-default.visible-xs {
                        button.navbar-toggle.collapsed type="button" {
                            span.sr-only { "Toggle navigation" }
                            span.icon-bar {}
                            span.icon-bar {}
                            span.icon-bar {}
                        }
                        a.navbar-brand href="./index.html" { (SITE_TITLE) }
                    }
                    nav.sidebar {
                        div.navbar-collapse id="navbar-collapse" {
                            div.site-header.hidden-xs {
                                a.site-brand href="./index.html" title="" {
                                    img.img-responsive.site-logo alt="" src="./assets/images/mashup-logo.svg";
                                    (SITE_TITLE)
                                }
                                p { "Venta de equipos" }
                            }
                            ul.nav {
                                li { a href="./index.html" title="" { "Portada" } }
                                li { a href="./about.html" title="" { "Acerca de" } }
                                li { a href="./contact.html" title="" { "Contacto" } }
                            }
                            nav.nav-footer {
                                p.nav-footer-social-buttons {
                                    a.fa-icon href="https://www.instagram.com/" title="" { i.fa.fa-instagram {} }
                                    a.fa-icon href="https://dribbble.com/" title="" { i.fa.fa-dribbble {} }
                                    a.fa-icon href="https://twitter.com/" title="" { i.fa.fa-twitter {} }
                                }
                                p { "© 2024 ININ | " (SITE_TITLE) }
                            }
                        }
                    }
                }
                main id="main-collapse" {
                    (grid_container(grid))
                    script { (PreEscaped(MASONRY_JS)) }
                }
                script { (PreEscaped(SIDEBAR_JS)) }
                script type="text/javascript" src="./main.85741bff.js" {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
