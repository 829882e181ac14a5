/// Candidate allocation
///
/// Pure, in-memory core of the run: walks the unassigned labels in the
/// order the catalog returned them (book, page, id ascending) and hands
/// each one the next unconsumed candidate for its global page. Performs
/// no storage writes; the caller applies the returned assignments.

use std::collections::HashMap;
use std::path::Path;

use super::global_page;
use super::index::CandidateIndex;
use crate::catalog::data::Label;

/// One label-to-image pairing, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub label_id: i64,
    /// Base path joined with the candidate filename
    pub image_path: String,
}

/// Why a label got no image this run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No image group exists for the label's global page
    NoCandidates,
    /// The group exists but earlier labels consumed every candidate
    Exhausted,
}

/// A label skipped during allocation, kept for operator follow-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    pub label: Label,
    pub global_page: u32,
    pub reason: SkipReason,
}

/// Everything one allocation pass produced
#[derive(Debug, Default)]
pub struct AllocationReport {
    /// Assignments in emission order; writes must apply in this order
    pub assignments: Vec<Assignment>,
    pub skips: Vec<Skip>,
}

impl AllocationReport {
    pub fn assigned(&self) -> usize {
        self.assignments.len()
    }

    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.skips.iter().filter(|s| s.reason == reason).count()
    }
}

/// Allocate candidates to labels, consuming each group front to back.
///
/// The per-group cursors live only inside this call, so two labels on the
/// same page get distinct candidates within a run, and a re-run over
/// already-assigned rows (which the catalog fetch excludes) starts fresh
/// without double-assigning.
pub fn allocate(
    labels: &[Label],
    index: &CandidateIndex,
    base_path: &str,
    pages_per_book: u32,
) -> AllocationReport {
    let mut cursors: HashMap<u32, usize> = HashMap::new();
    let mut report = AllocationReport::default();

    for label in labels {
        let page = global_page(label.book, label.page, pages_per_book);

        let Some(candidates) = index.candidates(page) else {
            report.skips.push(Skip {
                label: *label,
                global_page: page,
                reason: SkipReason::NoCandidates,
            });
            continue;
        };

        let cursor = cursors.entry(page).or_insert(0);
        if *cursor >= candidates.len() {
            report.skips.push(Skip {
                label: *label,
                global_page: page,
                reason: SkipReason::Exhausted,
            });
            continue;
        }

        let candidate = &candidates[*cursor];
        *cursor += 1;

        let image_path = Path::new(base_path)
            .join(&candidate.filename)
            .to_string_lossy()
            .into_owned();
        report.assignments.push(Assignment {
            label_id: label.id,
            image_path,
        });
    }

    report
}
