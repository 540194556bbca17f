//! Heading-line detection.

use regex::Regex;

/// Line-anchored pattern for a heading: a run of `#`, an optional numeric
/// ordinal (`N.`), optional emphasis markers, rest of the line.
const HEADING_PATTERN: &str = r"(?m)^(#+\s*\d*\.?\s*\*?.*?\*?)$";

/// Leading `N. ` ordinal prefix removed from derived titles.
const ORDINAL_PATTERN: &str = r"^\d+\.\s+";

/// A heading line found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMatch {
    /// Title with `#`, `*`, and any leading ordinal removed.
    pub title: String,

    /// Depth of the leading `#` run.
    pub level: usize,

    /// Byte offset where the heading line starts.
    pub start: usize,

    /// Byte offset just past the heading line (before its newline).
    pub end: usize,
}

/// Scans text for heading lines and derives their display titles.
#[derive(Debug, Clone)]
pub struct HeadingScanner {
    pattern: Regex,
    ordinal: Regex,
}

impl HeadingScanner {
    /// Create a scanner with the standard heading pattern.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(HEADING_PATTERN).expect("heading pattern is valid"),
            ordinal: Regex::new(ORDINAL_PATTERN).expect("ordinal pattern is valid"),
        }
    }

    /// Find every heading line in `text`, in document order.
    pub fn scan(&self, text: &str) -> Vec<HeadingMatch> {
        self.pattern
            .find_iter(text)
            .map(|m| HeadingMatch {
                title: self.derive_title(m.as_str()),
                level: m.as_str().chars().take_while(|&c| c == '#').count(),
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Strip markup from a matched heading line to produce its title.
    fn derive_title(&self, raw: &str) -> String {
        let stripped: String = raw
            .trim()
            .chars()
            .filter(|&c| c != '#' && c != '*')
            .collect();
        self.ordinal.replace(stripped.trim(), "").into_owned()
    }
}

impl Default for HeadingScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_heading() {
        let scanner = HeadingScanner::new();
        let matches = scanner.scan("testo\n## Rischi\naltro");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Rischi");
        assert_eq!(matches[0].level, 2);
    }

    #[test]
    fn test_ordinal_and_emphasis_removed() {
        let scanner = HeadingScanner::new();
        let matches = scanner.scan("## 2. *Dividendi storici*\n");
        assert_eq!(matches[0].title, "Dividendi storici");
    }

    #[test]
    fn test_offsets_cover_heading_line() {
        let text = "prima\n# Titolo\ndopo";
        let scanner = HeadingScanner::new();
        let matches = scanner.scan(text);
        assert_eq!(&text[matches[0].start..matches[0].end], "# Titolo");
    }

    #[test]
    fn test_document_order() {
        let scanner = HeadingScanner::new();
        let matches = scanner.scan("# Uno\ncorpo\n### Due\n## Tre\n");
        let titles: Vec<_> = matches.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["Uno", "Due", "Tre"]);
        assert_eq!(matches[1].level, 3);
    }

    #[test]
    fn test_hash_inside_prose_is_not_a_heading() {
        let scanner = HeadingScanner::new();
        assert!(scanner.scan("il ticker #FDJ resta in prosa").is_empty());
    }

    #[test]
    fn test_heading_without_ordinal() {
        let scanner = HeadingScanner::new();
        let matches = scanner.scan("#Conclusioni\n");
        assert_eq!(matches[0].title, "Conclusioni");
        assert_eq!(matches[0].level, 1);
    }
}
