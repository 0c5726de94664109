//! Splits issue descriptions around embedded image markers.
//!
//! Descriptions embed images with markdown of the shape
//! `![caption](/d/{imageId}?f=0)`. This module extracts the referenced image
//! ids and the prose between the markers; the migration engine turns the
//! pieces into destination blocks and weaves them back together with
//! [`interleave`], so each image lands where it occurred in the prose rather
//! than after it.

use once_cell::sync::Lazy;
use regex::Regex;

// Lazy quantifiers so adjacent markers on one line match independently.
static IMAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[.*?\]\(/d/(.*?)\?f=0\)").unwrap());

/// A description taken apart around its image markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionParts {
    /// Prose between the markers, trimmed, in order. Always one more
    /// segment than markers; leading and trailing segments may be empty.
    pub segments: Vec<String>,

    /// Image ids referenced by the markers, in left-to-right order.
    pub image_ids: Vec<String>,
}

/// Splits a description into prose segments and referenced image ids.
///
/// Empty segments are kept: a description that opens or closes with a
/// marker, or places two markers back to back, still yields a segment for
/// each gap so the alternation in [`interleave`] stays positional.
pub fn split_description(description: &str) -> DescriptionParts {
    let mut segments = Vec::new();
    let mut image_ids = Vec::new();
    let mut cursor = 0;

    for captures in IMAGE_MARKER.captures_iter(description) {
        let marker = captures.get(0).unwrap();
        segments.push(description[cursor..marker.start()].trim().to_string());
        image_ids.push(captures[1].to_string());
        cursor = marker.end();
    }
    segments.push(description[cursor..].trim().to_string());

    DescriptionParts {
        segments,
        image_ids,
    }
}

/// Alternates two sequences, starting with the first, continuing past the
/// shorter one until both are exhausted.
pub fn interleave<T>(first: Vec<T>, second: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (None, None) => break,
            (a, b) => {
                merged.extend(a);
                merged.extend(b);
            }
        }
    }

    merged
}
