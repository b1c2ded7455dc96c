//! JSON output formatting

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// Layout of a rewritten locale document.
///
/// Non-ASCII characters are always written as-is; only `"`, `\` and control
/// characters are escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFormat {
    /// Spaces per nesting level.
    pub indent: usize,
    pub trailing_newline: bool,
}

impl Default for DocumentFormat {
    fn default() -> Self {
        Self { indent: 4, trailing_newline: false }
    }
}

impl DocumentFormat {
    /// Serialize `value` in this format.
    ///
    /// # Errors
    /// Fails only if `value` cannot be represented as JSON.
    pub fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, serde_json::Error> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        value.serialize(&mut serializer)?;
        if self.trailing_newline {
            buf.push(b'\n');
        }
        Ok(buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    fn render(format: DocumentFormat, value: &serde_json::Value) -> String {
        String::from_utf8(format.to_bytes(value).unwrap()).unwrap()
    }

    #[rstest]
    fn default_format_uses_four_spaces() {
        let value = json!({"common": {"cancel": "Cancel"}, "list": [1, 2], "empty": {}});

        let text = render(DocumentFormat::default(), &value);

        assert_eq!(
            text,
            "{\n    \"common\": {\n        \"cancel\": \"Cancel\"\n    },\n    \"list\": [\n        1,\n        2\n    ],\n    \"empty\": {}\n}"
        );
    }

    #[rstest]
    fn non_ascii_is_written_literally() {
        let value = json!({"cancel": "Отмена", "emoji": "✅"});

        let text = render(DocumentFormat::default(), &value);

        assert_that!(text, contains_substring("\"Отмена\""));
        assert_that!(text, contains_substring("\"✅\""));
        assert_that!(text, not(contains_substring("\\u")));
    }

    #[rstest]
    fn control_characters_and_quotes_are_escaped() {
        let value = json!({"k": "line\nbreak \"quoted\" back\\slash"});

        let text = render(DocumentFormat::default(), &value);

        assert_that!(text, contains_substring(r#""line\nbreak \"quoted\" back\\slash""#));
    }

    #[rstest]
    #[case(0, "{\n\"a\": 1\n}")]
    #[case(2, "{\n  \"a\": 1\n}")]
    fn indent_is_configurable(#[case] indent: usize, #[case] expected: &str) {
        let format = DocumentFormat { indent, trailing_newline: false };

        assert_eq!(render(format, &json!({"a": 1})), expected);
    }

    #[rstest]
    fn trailing_newline_is_optional() {
        let format = DocumentFormat { trailing_newline: true, ..DocumentFormat::default() };

        assert_that!(render(format, &json!({})), eq("{}\n"));
    }
}
