use serde::{Deserialize, Serialize};

use super::name::{parse_image_name, NamingConvention};

/// Normalized identity of one image.
///
/// Two refs denote the *same image* iff their identity keys
/// (`"{filename}.{extension}"`) match exactly, case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub filename: String,
    pub extension: String,
}

impl ImageRef {
    /// Builds a ref by parsing `url` under the given naming convention.
    pub fn from_url(url: &str, convention: NamingConvention) -> Self {
        let name = parse_image_name(url, convention);
        Self {
            url: url.to_string(),
            filename: name.filename,
            extension: name.extension,
        }
    }

    /// The key used to match attached images against declared ones.
    pub fn identity_key(&self) -> String {
        format!("{}.{}", self.filename, self.extension)
    }
}

/// An image declared by a configured attribute value on a variant - the
/// desired-state side of the reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredImage {
    #[serde(flatten)]
    pub image: ImageRef,
    pub attribute_name: String,
}

impl DeclaredImage {
    pub fn identity_key(&self) -> String {
        self.image.identity_key()
    }
}
