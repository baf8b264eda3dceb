//! Artifact variant naming
//!
//! A variant of a primary file (e.g. a thumbnail) lives beside it, named by
//! inserting the variant tag immediately before the extension. Applying the
//! same transform to a file's old and new canonical paths keeps the variant's
//! location parallel to the primary's.

/// Derive the variant path for a base path and tag.
///
/// Pure function of `(path, tag)`: directory and extension are preserved, the
/// tag lands between the stem and the extension. Names without an extension
/// get the tag appended.
pub fn variant_path(path: &str, tag: &str) -> String {
    let (dir, name) = match path.rfind(['/', '\\']) {
        Some(i) => (&path[..=i], &path[i + 1..]),
        None => ("", path),
    };
    match name.rfind('.') {
        Some(dot) if dot > 0 => format!("{dir}{}{tag}{}", &name[..dot], &name[dot..]),
        _ => format!("{dir}{name}{tag}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inserts_tag_before_extension() {
        assert_eq!(
            variant_path("/media/999/cat.jpg", "_thumb"),
            "/media/999/cat_thumb.jpg"
        );
    }

    #[test]
    fn preserves_every_directory_segment() {
        assert_eq!(
            variant_path("/media/Site/2024/cat.tar.gz", "_big-thumb"),
            "/media/Site/2024/cat.tar_big-thumb.gz"
        );
    }

    #[test]
    fn appends_tag_when_no_extension() {
        assert_eq!(variant_path("/media/999/README", "_thumb"), "/media/999/README_thumb");
    }

    #[test]
    fn dotfile_counts_as_having_no_stem() {
        assert_eq!(
            variant_path("/media/999/.config", "_thumb"),
            "/media/999/.config_thumb"
        );
    }

    proptest! {
        #[test]
        fn directory_and_extension_survive(
            dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            stem in "[a-zA-Z][a-zA-Z0-9-]{0,12}",
            ext in "[a-z]{1,4}",
            tag in "_[a-z-]{1,10}",
        ) {
            let base = format!("/{dir}/{stem}.{ext}");
            let derived = variant_path(&base, &tag);
            prop_assert_eq!(&derived, &format!("/{dir}/{stem}{tag}.{ext}"));
            // Same transform applied twice to the same input is identical.
            prop_assert_eq!(derived, variant_path(&base, &tag));
        }
    }
}
