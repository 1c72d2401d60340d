//! Output path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of review copies.
pub const DEFAULT_SUFFIX: &str = "_for_review";

/// Derives the review copy's path: same directory and extension, with
/// `suffix` appended to the file stem.
///
/// `scans/page.jpg` becomes `scans/page_for_review.jpg`. Only the last
/// extension counts, so `a.tar.gz` becomes `a.tar_for_review.gz`.
pub fn review_output_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(source.file_stem().unwrap_or_default());
    name.push(suffix);
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    source.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_goes_before_extension() {
        assert_eq!(
            review_output_path(Path::new("cmd/api/angled_cards.jpg"), DEFAULT_SUFFIX),
            PathBuf::from("cmd/api/angled_cards_for_review.jpg")
        );
    }

    #[test]
    fn test_only_last_extension_is_kept() {
        assert_eq!(
            review_output_path(Path::new("/tmp/scan.v2.png"), DEFAULT_SUFFIX),
            PathBuf::from("/tmp/scan.v2_for_review.png")
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(
            review_output_path(Path::new("receipt"), "_check"),
            PathBuf::from("receipt_check")
        );
    }
}
