//! Line-scanning state machine that buckets pasted text into sections.

use super::header::HeaderMatcher;
use super::heuristics::{
    bullet_item, classify_header, label_role, looks_like_header, strip_decoration, Role,
};
use crate::models::{ParsedSection, ParsedUpdate};

/// Where the scanner currently is.
#[derive(Debug)]
enum ScanState<'a> {
    /// No header seen yet; non-header lines are dropped.
    Idle,
    /// Accumulating body lines for `slot`.
    InSection { slot: usize, lines: Vec<&'a str> },
}

/// A header line bound to a slot.
#[derive(Debug, PartialEq, Eq)]
struct Binding {
    slot: usize,
    /// Set when the header was recognized heuristically.
    detected_label: Option<String>,
}

/// Per-parse bookkeeping for header recognition.
pub(crate) struct SectionExtractor {
    matchers: Vec<HeaderMatcher>,
    label_roles: Vec<Option<Role>>,
    /// Slots whose label occurs verbatim somewhere in the text.
    reserved: Vec<bool>,
    /// Slots that already received a header in this parse.
    claimed: Vec<bool>,
    generic_fallback: bool,
}

impl SectionExtractor {
    pub(crate) fn new<S: AsRef<str>>(labels: &[S], lines: &[&str]) -> Self {
        let matchers: Vec<HeaderMatcher> = labels
            .iter()
            .map(|label| HeaderMatcher::new(label.as_ref()))
            .collect();
        let label_roles = labels.iter().map(|l| label_role(l.as_ref())).collect();
        let reserved: Vec<bool> = matchers
            .iter()
            .map(|m| lines.iter().any(|line| m.is_match(line.trim())))
            .collect();
        let generic_fallback = !reserved.iter().any(|&r| r);

        Self {
            claimed: vec![false; matchers.len()],
            matchers,
            label_roles,
            reserved,
            generic_fallback,
        }
    }

    pub(crate) fn run(mut self, lines: &[&str]) -> ParsedUpdate {
        let mut update = ParsedUpdate::empty(self.matchers.len());
        let mut state = ScanState::Idle;
        let mut after_blank = true;

        for &line in lines {
            let header_position = after_blank || matches!(state, ScanState::Idle);
            after_blank = line.trim().is_empty();

            match self.bind(line, header_position) {
                Some(binding) => {
                    if let ScanState::InSection { slot, lines } = state {
                        flush(&mut update.sections[slot], &lines);
                    }
                    tracing::debug!(
                        "Header {:?} opens section {}",
                        line.trim(),
                        binding.slot
                    );
                    if binding.detected_label.is_some() {
                        update.sections[binding.slot].detected_label = binding.detected_label;
                    }
                    state = ScanState::InSection {
                        slot: binding.slot,
                        lines: Vec::new(),
                    };
                }
                None => match &mut state {
                    ScanState::Idle => {
                        if !line.trim().is_empty() {
                            tracing::trace!("Dropping preamble line {:?}", line);
                        }
                    }
                    ScanState::InSection { lines, .. } => lines.push(line),
                },
            }
        }

        if let ScanState::InSection { slot, lines } = state {
            flush(&mut update.sections[slot], &lines);
        }

        update
    }

    /// Decide whether `line` is a header and, if so, for which slot.
    ///
    /// Exact labels bind anywhere. Heuristic headers only bind in header
    /// position: before any section opens or right after a blank line.
    fn bind(&mut self, line: &str, header_position: bool) -> Option<Binding> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(slot) = self.matchers.iter().position(|m| m.is_match(trimmed)) {
            self.claimed[slot] = true;
            return Some(Binding {
                slot,
                detected_label: None,
            });
        }

        if !header_position {
            return None;
        }

        if let Some(role) = classify_header(trimmed) {
            let family: Vec<usize> = (0..self.label_roles.len())
                .filter(|&slot| self.label_roles[slot] == Some(role))
                .collect();
            if !family.is_empty() {
                let slot = family.into_iter().find(|&slot| self.is_open(slot))?;
                return Some(self.claim(slot, trimmed));
            }
        }

        if self.generic_fallback && looks_like_header(trimmed) {
            let slot = (0..self.claimed.len()).find(|&slot| self.is_open(slot))?;
            return Some(self.claim(slot, trimmed));
        }

        None
    }

    fn is_open(&self, slot: usize) -> bool {
        !self.claimed[slot] && !self.reserved[slot]
    }

    fn claim(&mut self, slot: usize, line: &str) -> Binding {
        self.claimed[slot] = true;
        Binding {
            slot,
            detected_label: Some(strip_decoration(line).to_string()),
        }
    }
}

/// Store accumulated body lines into a section.
///
/// Any bullet-marked line turns the whole block into a bullet list and
/// unmarked lines in that block are dropped. Blocks with nothing but blank
/// lines leave the section untouched.
fn flush(section: &mut ParsedSection, lines: &[&str]) {
    if lines.iter().all(|line| line.trim().is_empty()) {
        return;
    }

    let bullets: Vec<String> = lines
        .iter()
        .filter_map(|line| bullet_item(line))
        .map(str::to_string)
        .collect();

    if bullets.is_empty() {
        section.text = lines.join("\n").trim().to_string();
        section.bullets.clear();
    } else {
        tracing::trace!("Flushing {} bullets", bullets.len());
        section.bullets = bullets;
        section.text.clear();
    }
}
