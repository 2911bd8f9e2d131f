//! Best-effort structuring of AI-generated recommendation text.
//!
//! The analysis service returns loosely Markdown-flavoured prose:
//! numbered findings, optional "Masalah:"/"Solusi:" sections inside a
//! finding, and "Minggu N:" action-plan markers. None of that is
//! guaranteed, so parsing is lossy and total: anything unrecognized ends
//! up as plain detail lines, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// One rendered block: an expandable finding, or a flat info card when
/// `is_week_marker` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationItem {
    pub title: String,
    pub details: Vec<String>,
    pub problem: Option<String>,
    pub solutions: Vec<String>,
    pub is_week_marker: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Problem,
    Solutions,
}

static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_#`]+").unwrap());
static BULLET_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•]+$").unwrap());
static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•]\s*").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s+(.*)$").unwrap());
static WEEK_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(?:minggu|week)\s+\d+").unwrap());
static PROBLEM_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:masalah|problem)\b\s*:?\s*(.*)$").unwrap());
static SOLUTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:langkah\s+konkret|solusi|solution|langkah)\b\s*:?\s*(.*)$").unwrap()
});

/// Parse a raw recommendation blob into renderable items. Deterministic;
/// `parse("")` is empty; arbitrary text yields at worst a single item
/// with only `details` populated.
pub fn parse(raw: &str) -> Vec<RecommendationItem> {
    let mut items: Vec<RecommendationItem> = Vec::new();
    let mut current: Option<RecommendationItem> = None;
    let mut section = Section::None;

    for line in raw.lines() {
        let stripped = MARKUP.replace_all(line, "");
        let text = stripped.trim();
        if text.is_empty() || BULLET_ONLY.is_match(text) {
            continue;
        }

        if let Some(caps) = NUMBERED_ITEM.captures(text) {
            let title = caps[1].trim().to_string();
            flush(&mut items, current.take());
            current = Some(RecommendationItem {
                is_week_marker: WEEK_MARKER.is_match(&title),
                title,
                ..Default::default()
            });
            section = Section::None;
            continue;
        }
        if WEEK_MARKER.is_match(text) {
            flush(&mut items, current.take());
            current = Some(RecommendationItem {
                title: text.to_string(),
                is_week_marker: true,
                ..Default::default()
            });
            section = Section::None;
            continue;
        }

        if current.is_some() {
            if let Some(caps) = PROBLEM_HEADER.captures(text) {
                section = Section::Problem;
                let rest = caps[1].trim();
                if let Some(item) = current.as_mut() {
                    // a repeated header restarts the problem text
                    item.problem = (!rest.is_empty()).then(|| rest.to_string());
                }
                continue;
            }
            if let Some(caps) = SOLUTION_HEADER.captures(text) {
                section = Section::Solutions;
                let rest = BULLET_PREFIX.replace(caps[1].trim(), "").trim().to_string();
                if !rest.is_empty() {
                    if let Some(item) = current.as_mut() {
                        item.solutions.push(rest);
                    }
                }
                continue;
            }
        }

        let content = BULLET_PREFIX.replace(text, "").trim().to_string();
        if content.is_empty() {
            continue;
        }
        match current.as_mut() {
            None => {
                // preamble before any marker becomes an untitled item
                current = Some(RecommendationItem {
                    details: vec![content],
                    ..Default::default()
                });
                section = Section::None;
            }
            Some(item) => match section {
                Section::Problem => match item.problem.as_mut() {
                    Some(problem) => {
                        problem.push(' ');
                        problem.push_str(&content);
                    }
                    None => item.problem = Some(content),
                },
                Section::Solutions => item.solutions.push(content),
                Section::None => item.details.push(content),
            },
        }
    }

    flush(&mut items, current);
    items
}

fn flush(items: &mut Vec<RecommendationItem>, finished: Option<RecommendationItem>) {
    if let Some(item) = finished {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_parses_to_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn numbered_item_with_problem_and_solutions() {
        let raw = "1. Fix labeling\nMasalah:\nLabel tidak sesuai standar\nSolusi:\n- Ganti label\n- Uji ulang";
        let items = parse(raw);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.title, "Fix labeling");
        assert_eq!(item.problem.as_deref(), Some("Label tidak sesuai standar"));
        assert_eq!(
            item.solutions,
            vec!["Ganti label".to_string(), "Uji ulang".to_string()]
        );
        assert!(item.details.is_empty());
        assert!(!item.is_week_marker);
    }

    #[test]
    fn markup_is_stripped_without_losing_text() {
        let items = parse("**1. Perbaiki `label` kemasan**\n# Masalah: _berat_ tidak tertera");
        assert_eq!(items[0].title, "Perbaiki label kemasan");
        assert_eq!(items[0].problem.as_deref(), Some("berat tidak tertera"));
    }

    #[test]
    fn week_markers_become_flat_items() {
        let raw = "Minggu 1: Perbaiki kemasan\nGunakan vacuum sealer\nMinggu 2: Uji kirim sampel";
        let items = parse(raw);
        assert_eq!(items.len(), 2);
        assert!(items[0].is_week_marker);
        assert_eq!(items[0].title, "Minggu 1: Perbaiki kemasan");
        assert_eq!(items[0].details, vec!["Gunakan vacuum sealer".to_string()]);
        assert!(items[1].is_week_marker);
    }

    #[test]
    fn english_week_marker_is_recognized() {
        let items = parse("Week 3: Register for export permit");
        assert_eq!(items.len(), 1);
        assert!(items[0].is_week_marker);
    }

    #[test]
    fn repeated_problem_header_overwrites() {
        let raw = "1. Item\nMasalah: pertama\nProblem: kedua";
        let items = parse(raw);
        assert_eq!(items[0].problem.as_deref(), Some("kedua"));
    }

    #[test]
    fn multiline_problem_is_joined() {
        let raw = "1. Item\nMasalah:\nbaris satu\nbaris dua";
        let items = parse(raw);
        assert_eq!(items[0].problem.as_deref(), Some("baris satu baris dua"));
    }

    #[test]
    fn preamble_becomes_untitled_details_item() {
        let raw = "Produk Anda cukup siap ekspor.\nBeberapa hal perlu dibenahi.\n1. Pertama";
        let items = parse(raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].details.len(), 2);
        assert_eq!(items[1].title, "Pertama");
    }

    #[test]
    fn masalah_prefix_of_longer_word_is_not_a_header() {
        let raw = "1. Item\nMasalahnya cukup rumit";
        let items = parse(raw);
        assert!(items[0].problem.is_none());
        assert_eq!(items[0].details, vec!["Masalahnya cukup rumit".to_string()]);
    }

    #[test]
    fn bullet_only_lines_are_skipped() {
        let items = parse("1. Item\n-\n•\ndetail");
        assert_eq!(items[0].details, vec!["detail".to_string()]);
    }

    #[test]
    fn garbage_never_panics_and_is_deterministic() {
        let garbage = "###**__``\n)(*&^%$\n- - -\n17 tanpa titik\nMasalah";
        let first = parse(garbage);
        let second = parse(garbage);
        assert_eq!(first, second);
    }
}
