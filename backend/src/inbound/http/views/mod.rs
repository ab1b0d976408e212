//! Server-rendered HTML views.
//!
//! [`Views`] is constructed once at startup and shared through the HTTP
//! state. Rendering is pure: every method takes the data to show and returns
//! a complete document. All record text passes through [`escape_html`].

mod error_page;
mod forms;
mod list;

/// Default page title.
pub const DEFAULT_TITLE: &str = "Staff directory";
/// Default mount path of the static asset directory.
pub const DEFAULT_STATIC_PREFIX: &str = "/static";

/// HTML renderer for the directory pages.
///
/// # Examples
/// ```
/// use directory::inbound::http::views::Views;
///
/// let views = Views::new("Team", "/assets");
/// let page = views.create_form();
/// assert!(page.contains("<title>Team - Add user</title>"));
/// assert!(page.contains("/assets/style.css"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Views {
    title: String,
    static_prefix: String,
}

impl Default for Views {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_STATIC_PREFIX)
    }
}

impl Views {
    /// Build a renderer with a site title and static mount path.
    pub fn new(title: impl Into<String>, static_prefix: impl Into<String>) -> Self {
        let static_prefix = static_prefix.into();
        Self {
            title: title.into(),
            static_prefix: static_prefix.trim_end_matches('/').to_owned(),
        }
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn layout(&self, heading: &str, body: &str) -> String {
        let title = escape_html(&self.title);
        let heading = escape_html(heading);
        let stylesheet = escape_html(&format!("{}/style.css", self.static_prefix));
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{title} - {heading}</title>\n\
             <link rel=\"stylesheet\" href=\"{stylesheet}\">\n\
             </head>\n\
             <body>\n\
             <header><a class=\"brand\" href=\"/\">{title}</a></header>\n\
             <main>\n\
             <h1>{heading}</h1>\n\
             {body}\
             </main>\n\
             </body>\n\
             </html>\n"
        )
    }
}

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Examples
/// ```
/// use directory::inbound::http::views::escape_html;
///
/// assert_eq!(escape_html("<b>\"R&D\"</b>"), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
