//! Staging index file format
//!
//! The index is a plain text file holding one repository-relative path per
//! line, in the order the paths were staged:
//!
//! ```text
//! foo.txt
//! src/main.rs
//! ```
//!
//! Blank lines are ignored on read and duplicate lines keep their first
//! occurrence, so a hand-edited index still decodes to an ordered set.

use std::collections::HashSet;

/// Separator between staged paths
pub const PATH_SEPARATOR: char = '\n';

/// Decode the content of an index file into the ordered list of staged paths
pub fn decode_paths(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    content
        .split(PATH_SEPARATOR)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Encode staged paths into index file content, one terminated line per path
pub fn encode_paths<'p>(paths: impl IntoIterator<Item = &'p str>) -> String {
    paths.into_iter().fold(String::new(), |mut content, path| {
        content.push_str(path);
        content.push(PATH_SEPARATOR);
        content
    })
}
