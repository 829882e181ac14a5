/// Candidate index: all available images grouped by global page number

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use super::filename::{parse_image_name, ParsedName};
use crate::error::MatchupError;

/// One image file offered for assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub ordinal: u32,
    pub filename: String,
}

/// Counts reported by an index build
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct global page numbers with at least one candidate
    pub groups: usize,
    /// Filenames skipped because they didn't parse
    pub malformed: usize,
}

/// Mapping from global page number to its candidates, sorted by ordinal.
/// Built once per run; only the allocator's cursors advance afterwards.
#[derive(Debug, Default)]
pub struct CandidateIndex {
    groups: BTreeMap<u32, Vec<Candidate>>,
}

impl CandidateIndex {
    /// Build the index from a batch of filenames.
    ///
    /// Files without the expected extension are ignored; files with the
    /// extension that fail to parse are skipped and counted. Each group's
    /// candidates end up sorted ascending by ordinal, with duplicate
    /// ordinals kept in discovery order (the sort is stable).
    pub fn build<I, S>(names: I, ext: &str) -> (Self, IndexStats)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups: BTreeMap<u32, Vec<Candidate>> = BTreeMap::new();
        let mut malformed = 0;

        for name in names {
            let name = name.into();
            if !name.ends_with(ext) {
                continue;
            }

            match parse_image_name(&name, ext) {
                Some(ParsedName { group, ordinal }) => {
                    groups
                        .entry(group)
                        .or_default()
                        .push(Candidate { ordinal, filename: name });
                }
                None => {
                    eprintln!("⚠️  Skipping malformed filename: {}", name);
                    malformed += 1;
                }
            }
        }

        for candidates in groups.values_mut() {
            candidates.sort_by_key(|c| c.ordinal);
        }

        let stats = IndexStats {
            groups: groups.len(),
            malformed,
        };
        (CandidateIndex { groups }, stats)
    }

    /// Candidates for one global page, in ordinal order
    pub fn candidates(&self, group: u32) -> Option<&[Candidate]> {
        self.groups.get(&group).map(Vec::as_slice)
    }
}

/// List the image directory, one level deep, files only.
///
/// No ordering is assumed from the filesystem; the index build sorts.
pub fn scan_images(dir: &Path) -> Result<Vec<String>, MatchupError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|source| MatchupError::Scan {
            dir: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().to_string());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_and_sorts_by_ordinal() {
        let names = vec![
            "5_page_2.png",
            "5_page_1.png",
            "7_page_1.png",
            "5_page_3.png",
        ];
        let (index, stats) = CandidateIndex::build(names, ".png");

        assert_eq!(stats.groups, 2);
        assert_eq!(stats.malformed, 0);

        let ordinals: Vec<u32> = index
            .candidates(5)
            .unwrap()
            .iter()
            .map(|c| c.ordinal)
            .collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(index.candidates(7).unwrap().len(), 1);
        assert!(index.candidates(6).is_none());
    }

    #[test]
    fn test_malformed_names_are_counted_not_fatal() {
        let names = vec!["5_page_1.png", "notes.png", "cover_page_x.png"];
        let (index, stats) = CandidateIndex::build(names, ".png");

        assert_eq!(stats.groups, 1);
        assert_eq!(stats.malformed, 2);
        assert_eq!(index.candidates(5).unwrap().len(), 1);
    }

    #[test]
    fn test_other_extensions_ignored_silently() {
        let names = vec!["5_page_1.png", "5_page_2.jpg", "readme.txt"];
        let (index, stats) = CandidateIndex::build(names, ".png");

        assert_eq!(stats.groups, 1);
        assert_eq!(stats.malformed, 0);
        assert_eq!(index.candidates(5).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_ordinals_keep_discovery_order() {
        let names = vec!["9_page_1.png", "match9_page_1.png"];
        let (index, _) = CandidateIndex::build(names, ".png");

        let filenames: Vec<&str> = index
            .candidates(9)
            .unwrap()
            .iter()
            .map(|c| c.filename.as_str())
            .collect();
        assert_eq!(filenames, vec!["9_page_1.png", "match9_page_1.png"]);
    }

    #[test]
    fn test_empty_input() {
        let (index, stats) = CandidateIndex::build(Vec::<String>::new(), ".png");
        assert_eq!(stats.groups, 0);
        assert!(index.candidates(1).is_none());
    }
}
