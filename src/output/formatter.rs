//! Record-to-text formatting
//!
//! Each harvested record becomes a reusable GraphQL alias block keyed by a
//! machine-safe identifier derived from its primary title. Formatting is
//! pure: no I/O, same input always yields the same block.

use crate::media::Media;

/// Derives a machine-safe identifier from a title
///
/// Every whitespace run (leading and trailing runs included) collapses to a
/// single underscore, then anything outside `[A-Za-z0-9_]` is stripped. A
/// title that normalizes to nothing yields an empty identifier; callers must
/// tolerate that rather than treat it as an error.
pub fn alias_identifier(title: &str) -> String {
    let mut identifier = String::with_capacity(title.len());
    let mut in_whitespace_run = false;

    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace_run {
                identifier.push('_');
                in_whitespace_run = true;
            }
        } else {
            in_whitespace_run = false;
            if c.is_ascii_alphanumeric() || c == '_' {
                identifier.push(c);
            }
        }
    }

    identifier
}

/// Formats one record into its fixed-shape alias block
pub fn media_block(media: &Media) -> String {
    let alias = alias_identifier(media.title.primary());

    format!(
        "{alias}: Media(id: {id}, type: ANIME) {{\n  \
         title {{ romaji english }}\n  \
         episodes\n  \
         format\n  \
         season\n  \
         seasonYear\n\
         }}",
        alias = alias,
        id = media.id,
    )
}
