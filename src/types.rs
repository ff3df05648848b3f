//! The artwork record shared by every pipeline stage.
//!
//! Records are loaded by [`crate::scan`], rendered by [`crate::generate`],
//! and reported by [`crate::output`]. They are never mutated after load.

use serde::{Deserialize, Serialize};

/// One artwork, loaded from a single YAML file.
///
/// The file format is a mapping with two recognized keys:
///
/// ```yaml
/// name: Sunset
/// img:
///   - sunset-front.jpg
///   - sunset-detail.jpg
/// ```
///
/// `name` is kept optional here so that a file without it still loads; the
/// renderer rejects it, since the grid item cannot be built without a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artwork {
    /// File name the record was read from, for diagnostics.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image file names, in the order listed. Only the first is displayed.
    pub img: Vec<String>,
}

impl Artwork {
    /// The image shown in the gallery grid, if the artwork has any.
    pub fn main_image(&self) -> Option<&str> {
        self.img.first().map(String::as_str)
    }

    /// Name for display in reports; falls back to the source file name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.source)
    }
}

/// On-disk shape of an artwork file. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworkFile {
    #[serde(default)]
    pub name: Option<String>,
    /// `img:` with no value (YAML null) is treated like an empty list.
    #[serde(default)]
    pub img: Option<Vec<String>>,
}

impl ArtworkFile {
    pub(crate) fn into_artwork(self, source: String) -> Artwork {
        Artwork {
            source,
            name: self.name,
            img: self.img.unwrap_or_default(),
        }
    }
}
