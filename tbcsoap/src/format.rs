//! Pretty-printing of response bodies

use crate::parser::parse_document;
use xmltree::EmitterConfig;

/// Re-indents an XML document for diagnostics
///
/// Text that does not parse as XML is returned unchanged.
pub fn format_xml(raw: &str) -> String {
    let Ok(root) = parse_document(raw) else {
        return raw.to_string();
    };

    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("  ");

    match root.write_with_config(&mut buf, config) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indents_document() {
        let formatted = format_xml("<a><b>1</b><c/></a>");
        assert!(formatted.contains("\n  <b>1</b>"));
        assert!(formatted.trim_end().ends_with("</a>"));
    }

    #[test]
    fn test_non_xml_is_unchanged() {
        assert_eq!(format_xml("502 Bad Gateway"), "502 Bad Gateway");
        assert_eq!(format_xml(""), "");
    }
}
