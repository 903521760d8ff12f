use super::Roster;
use crate::config::RosterSource;
use csv::ReaderBuilder;
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static identifier regex"));

/// True when `s` is a non-empty string of ASCII digits.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER_RE.is_match(s)
}

/// Split one CSV line on commas that are not inside quoted fields.
///
/// Malformed or empty lines yield an empty vector, so the caller drops them.
fn split_line(line: &str) -> Vec<String> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match rdr.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

fn clean_cell(cell: &str) -> String {
    cell.replace('"', "").trim().to_string()
}

/// Local part of an e-mail address reduced to its digits.
fn id_from_email(cell: &str) -> String {
    let local = cell.split('@').next().unwrap_or_default();
    local.chars().filter(char::is_ascii_digit).collect()
}

/// Parse the raw text of one roster file into `roster`.
///
/// Rows are accepted only when the name is non-empty and the id is all
/// digits; anything else is skipped silently. Returns the accepted count.
/// A column index no row can reach accepts nothing.
pub fn parse_roster_text(text: &str, source: &RosterSource, roster: &mut Roster) -> usize {
    let Some(min_cols) = source.id_column.max(source.name_column).checked_add(1) else {
        return 0;
    };
    let mut accepted = 0;

    for line in text.lines().skip(source.skip_lines) {
        let cols = split_line(line);
        if cols.len() < min_cols {
            continue;
        }

        let raw_id = clean_cell(&cols[source.id_column]);
        let id = if source.email_id {
            id_from_email(&raw_id)
        } else {
            raw_id
        };
        let name = clean_cell(&cols[source.name_column]);

        if !name.is_empty() && is_identifier(&id) {
            roster.insert(id, name);
            accepted += 1;
        }
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> RosterSource {
        RosterSource {
            path: "members.csv".into(),
            id_column: 2,
            name_column: 1,
            skip_lines: 3,
            email_id: false,
        }
    }

    fn officers() -> RosterSource {
        RosterSource {
            path: "officers.csv".into(),
            id_column: 3,
            name_column: 0,
            skip_lines: 3,
            email_id: true,
        }
    }

    const HEADER: &str = "Club Roster\nFall term\nTimestamp,Name,ID\n";

    #[test]
    fn accepts_digit_ids_with_names() {
        let text = format!("{HEADER}x,Jane Doe,123456\ny,John Roe,000042\n");
        let mut roster = Roster::new();
        let n = parse_roster_text(&text, &members(), &mut roster);
        assert_eq!(n, 2);
        assert_eq!(roster.get("123456"), Some("Jane Doe"));
        assert_eq!(roster.get("000042"), Some("John Roe"));
    }

    #[test]
    fn header_lines_are_skipped() {
        let text = "a,Header Person,111\nb,Second,222\nc,Third,333\nd,Real,444\n";
        let mut roster = Roster::new();
        parse_roster_text(text, &members(), &mut roster);
        assert_eq!(roster.len(), 1);
        assert!(roster.contains("444"));
        assert!(!roster.contains("111"));
    }

    #[test]
    fn non_digit_and_empty_rows_are_dropped() {
        let text = format!("{HEADER}x,Jane,12a45\nx,,777\nx,Nobody,\nx,Short\n\n");
        let mut roster = Roster::new();
        assert_eq!(parse_roster_text(&text, &members(), &mut roster), 0);
        assert!(roster.is_empty());
    }

    #[test]
    fn unreachable_column_index_accepts_nothing() {
        let source = RosterSource {
            id_column: usize::MAX,
            ..members()
        };
        let text = format!("{HEADER}x,Jane Doe,123456\n");
        let mut roster = Roster::new();
        assert_eq!(parse_roster_text(&text, &source, &mut roster), 0);
        assert!(roster.is_empty());
    }

    #[test]
    fn quoted_commas_stay_inside_the_field() {
        let text = format!("{HEADER}x,\"Doe, Jane\",\" 123 \"\n");
        let mut roster = Roster::new();
        parse_roster_text(&text, &members(), &mut roster);
        assert_eq!(roster.get("123"), Some("Doe, Jane"));
    }

    #[test]
    fn email_ids_keep_only_local_part_digits() {
        let text = format!(
            "{HEADER}Ann Officer,President,x,s0012345@slu.edu\nBob Officer,VP,x,abc@slu.edu\n"
        );
        let mut roster = Roster::new();
        parse_roster_text(&text, &officers(), &mut roster);
        assert_eq!(roster.get("0012345"), Some("Ann Officer"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn later_rows_overwrite_earlier_ones() {
        let text = format!("{HEADER}x,First Name,55\nx,Second Name,55\n");
        let mut roster = Roster::new();
        parse_roster_text(&text, &members(), &mut roster);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("55"), Some("Second Name"));
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let text = "h1\r\nh2\r\nh3\r\nx,Jane Doe,123456\r\n";
        let mut roster = Roster::new();
        parse_roster_text(text, &members(), &mut roster);
        assert_eq!(roster.get("123456"), Some("Jane Doe"));
    }

    #[test]
    fn identifier_check_rejects_unicode_digits() {
        assert!(is_identifier("0123"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("١٢٣"));
        assert!(!is_identifier("12 3"));
    }
}
