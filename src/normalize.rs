//! Raw menu text -> ordered list of items
//!
//! Numbered text ("1. Pizza 2. Salad") is split on its markers.
//! Text without markers is split on commas and newlines.

use std::sync::OnceLock;
use regex::Regex;

// Candidate "N." at the start of the text or after whitespace.
// A digit right after the period means a decimal, not a marker.
fn enumeration_marker() -> &'static Regex
{   static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
      Regex::new(r"(?:^|\s)(\d+)\.\s*").expect("marker pattern is valid")
    })
}

const BULLETS: &[char] = &['-', '*', '•'];

fn clean(segment: &str) -> Option<String>
{   let item = segment
      .trim()
      .trim_start_matches(BULLETS)
      .trim();
    if item.is_empty()
    {   None
    } else
    {   Some(item.to_string())
    }
}

/// Byte spans of every enumeration marker, trailing whitespace included
fn marker_spans(raw: &str) -> Vec<(usize, usize)>
{   enumeration_marker()
      .captures_iter(raw)
      .filter_map(|caps| {
        let number = caps.get(1)?;
        let whole = caps.get(0)?;
        let after_period = number.end() + 1;
        let decimal = whole.end() == after_period
          && raw[after_period..]
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_digit());
        if decimal
        {   None
        } else
        {   Some((number.start(), whole.end()))
        }
      })
      .collect()
}

/// Whether the text carries at least one "N." marker
pub fn is_enumerated(raw: &str) -> bool
{   !marker_spans(raw).is_empty()
}

/// Split model output into trimmed, non-empty items in source order
pub fn menu_items(raw: &str) -> Vec<String>
{   let spans = marker_spans(raw);
    if spans.is_empty()
    {   return raw.split(|c: char| c == ',' || c == '\n')
          .filter_map(clean)
          .collect();
    }

    let mut segments = Vec::with_capacity(spans.len() + 1);
    let mut cursor = 0;
    for (start, end) in spans
    {   segments.push(&raw[cursor..start]);
        cursor = end;
    }
    segments.push(&raw[cursor..]);
    segments.into_iter().filter_map(clean).collect()
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn bullet_characters_are_stripped()
    {   assert_eq!(
          menu_items("- Pho\n* Banh Mi\n• Spring Rolls"),
          vec!["Pho", "Banh Mi", "Spring Rolls"]
        );
    }

    #[test]
    fn decimal_is_not_a_marker()
    {   assert!(!is_enumerated("Steak 12.5 oz, Fries"));
        assert!(is_enumerated("1. Steak"));
        assert!(is_enumerated("Menu:\n1. Steak"));
    }

    #[test]
    fn multi_digit_markers_split()
    {   assert_eq!(
          menu_items("10.  Flan 11.Churros"),
          vec!["Flan", "Churros"]
        );
    }
}
