//! Filename/extension extraction from image URLs.
//!
//! The marketplace feed and the catalog name the same image differently: the
//! catalog appends an 8-character alphanumeric suffix before the extension on
//! upload to avoid collisions. Both conventions are normalized here so the
//! diff can match images by name across systems.

/// Which system's naming rules to apply when parsing a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingConvention {
    /// Marketplace feed URLs: plain `<name>.<ext>` last path segment.
    SourceFeed,
    /// Catalog CDN URLs: `<name>-XXXXXXXX.<ext>` with an 8-alphanumeric
    /// upload suffix.
    Catalog,
}

/// A normalized `(filename, extension)` pair.
///
/// `filename` never includes the extension; `extension` has no leading dot
/// and is empty when the segment carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageName {
    pub filename: String,
    pub extension: String,
}

/// Extracts the normalized name from `url` under the given convention.
///
/// Pure and infallible: malformed URLs degrade to a best-effort split
/// instead of failing the reconciliation pass.
pub fn parse_image_name(url: &str, convention: NamingConvention) -> ImageName {
    let segment = url.rsplit('/').next().unwrap_or("");

    match convention {
        NamingConvention::SourceFeed => match split_last_dot(segment) {
            Some((stem, ext)) => ImageName {
                filename: stem.to_string(),
                extension: ext.to_string(),
            },
            None => ImageName {
                filename: segment.to_string(),
                extension: String::new(),
            },
        },

        NamingConvention::Catalog => {
            if let Some((stem, ext)) = split_last_dot(segment) {
                if let Some(base) = strip_upload_suffix(stem) {
                    return ImageName {
                        filename: base.to_string(),
                        extension: ext.to_string(),
                    };
                }
                // No upload suffix: the whole segment stands as the filename.
                return ImageName {
                    filename: segment.to_string(),
                    extension: ext.to_string(),
                };
            }
            ImageName {
                filename: segment.to_string(),
                extension: String::new(),
            }
        }
    }
}

/// Splits at the final dot, requiring a non-empty extension after it.
fn split_last_dot(segment: &str) -> Option<(&str, &str)> {
    let idx = segment.rfind('.')?;
    let ext = &segment[idx + 1..];
    if ext.is_empty() {
        return None;
    }
    Some((&segment[..idx], ext))
}

/// Strips a trailing `-XXXXXXXX` upload suffix (8 ASCII alphanumerics) from
/// a filename stem, returning the base when the pattern matches.
fn strip_upload_suffix(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    if bytes.len() < 9 {
        return None;
    }
    let split = bytes.len() - 9;
    if bytes[split] != b'-' {
        return None;
    }
    if !bytes[split + 1..].iter().all(u8::is_ascii_alphanumeric) {
        return None;
    }
    Some(&stem[..split])
}
