//! Error page shown for failed requests.

use crate::domain::Error;

use super::{Views, escape_html};

impl Views {
    /// Render `error` with the HTTP reason phrase as heading.
    #[must_use]
    pub fn error_page(&self, reason: &str, error: &Error) -> String {
        let mut body = format!(
            "<p class=\"error\" data-code=\"{code}\">{message}</p>\n",
            code = error.code().as_str(),
            message = escape_html(error.message()),
        );
        if let Some(trace_id) = error.trace_id() {
            body.push_str(&format!(
                "<p class=\"trace\">Reference: <code>{}</code></p>\n",
                escape_html(trace_id)
            ));
        }
        body.push_str("<p><a href=\"/\">Back to the directory</a></p>\n");
        self.layout(reason, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn renders_code_message_and_reference() {
        let error = Error::invalid_request("name is required")
            .with_trace_id("00000000-0000-0000-0000-000000000000");
        let page = Views::default().error_page("Bad Request", &error);

        assert!(page.contains("data-code=\"invalid_request\""));
        assert!(page.contains("name is required"));
        assert!(page.contains("00000000-0000-0000-0000-000000000000"));
    }

    #[rstest]
    fn omits_reference_without_trace_id() {
        let page = Views::default().error_page("Not Found", &Error::not_found("gone"));
        assert!(!page.contains("Reference:"));
    }
}
