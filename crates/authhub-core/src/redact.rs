//! PII redaction for log output.
//!
//! Scrubs the values of named fields out of `field=value` formatted text
//! (query strings, form bodies) before the text reaches a log line.

use regex::Regex;

/// Replaces the value of each named field in `message` with `redaction`.
///
/// Fields are expected in `name=value` form, with values running up to the
/// next `separator` character. Unknown fields pass through untouched. If a
/// field name cannot form a valid pattern the message is returned as-is
/// rather than risking an unredacted panic path.
pub fn redact_fields(fields: &[&str], redaction: &str, message: &str, separator: char) -> String {
    if fields.is_empty() || message.is_empty() {
        return message.to_string();
    }

    let names = fields
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");
    let sep = regex::escape(&separator.to_string());
    let pattern = format!("({names})=[^{sep}]*");

    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(message, format!("${{1}}={redaction}"))
            .into_owned(),
        Err(_) => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_single_field() {
        let out = redact_fields(&["password"], "***", "email=a@b.c&password=hunter2", '&');
        assert_eq!(out, "email=a@b.c&password=***");
    }

    #[test]
    fn test_redacts_multiple_fields() {
        let out = redact_fields(
            &["password", "ssn"],
            "xxx",
            "name=bob;ssn=123-45-6789;password=pw;ip=1.2.3.4",
            ';',
        );
        assert_eq!(out, "name=bob;ssn=xxx;password=xxx;ip=1.2.3.4");
    }

    #[test]
    fn test_field_at_end_of_message() {
        let out = redact_fields(&["token"], "***", "a=1&token=abcdef", '&');
        assert_eq!(out, "a=1&token=***");
    }

    #[test]
    fn test_no_matching_field_is_untouched() {
        let message = "email=a@b.c&role=admin";
        assert_eq!(redact_fields(&["password"], "***", message, '&'), message);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(redact_fields(&[], "***", "a=1", '&'), "a=1");
        assert_eq!(redact_fields(&["a"], "***", "", '&'), "");
    }
}
