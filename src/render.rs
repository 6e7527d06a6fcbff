//! Page rendering: source text in, complete HTML document out.
//!
//! Rendering is pure. Callers read the file, hand its text to [`render_page`]
//! and write the result of [`RenderedPage::to_html`] wherever they like.
//!
//! ## Plain text (`.txt`)
//!
//! A title is recognized when the text contains a triple newline (`\n\n\n`,
//! CRLF tolerated): everything before it is the title. The first section after
//! the title is split on blank lines into `<p>` paragraphs. Further sections
//! separated by triple newlines are not rendered.
//!
//! ## Markdown (`.md`)
//!
//! Front matter is stripped and substituted (see [`crate::frontmatter`]), then
//! the body goes through pulldown-cmark with raw HTML passed through. The title
//! comes only from the front matter `title` field; headings in the body are
//! never promoted.
//!
//! ## Document layout
//!
//! The skeleton is assembled literally, with CRLF line breaks and tab
//! indentation. Generated sites are compared byte for byte against earlier
//! builds, so the layout in [`RenderedPage::to_html`] must not drift.

use crate::frontmatter;
use crate::naming;
use crate::types::{RenderedPage, SourceFile, SourceKind};
use pulldown_cmark::{Options, Parser, html as md_html};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("{extension} is not a file type that can be processed")]
    UnsupportedType { extension: String },
}

/// Title of the generated index page.
pub const INDEX_TITLE: &str = "Generated Pages";

static TITLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n\r?\n").expect("title separator regex"));
static PARAGRAPH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n").expect("paragraph separator regex"));

impl RenderedPage {
    /// Serialize into the fixed document skeleton.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<!doctype html>");
        html.push_str("\r\n\t<html lang=\"en\">");
        html.push_str("\r\n\t<head>");
        html.push_str("\r\n\t\t<meta charset=\"utf-8\">");
        html.push_str(&format!("\r\n\t\t<title>{}</title>", self.title));
        html.push_str(
            "\r\n\t\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
        );
        if !self.stylesheet_url.is_empty() {
            html.push_str(&format!(
                "\r\n\t\t<link href=\"{}\" rel=\"stylesheet\">",
                self.stylesheet_url
            ));
        }
        html.push_str("\r\n\t</head>");
        html.push_str("\r\n\t<body>");
        if self.show_heading && !self.title.is_empty() {
            html.push_str(&format!("\r\n\t\t<h1>{}</h1>", self.title));
        }
        html.push_str(&self.body_html);
        html.push_str("\r\n\t</body>\r\n</html>");
        html
    }
}

/// Assemble a document from a title, stylesheet URL and body fragment.
///
/// Empty `title` gives an empty `<title>` and no `<h1>`; empty `stylesheet_url`
/// omits the `<link>`.
pub fn html_document(title: &str, stylesheet_url: &str, body_html: &str) -> String {
    RenderedPage {
        title: title.to_string(),
        show_heading: true,
        body_html: body_html.to_string(),
        stylesheet_url: stylesheet_url.to_string(),
    }
    .to_html()
}

/// Render one source document.
///
/// `global_stylesheet` applies unless Markdown front matter overrides it.
pub fn render_page(
    source: &SourceFile,
    raw: &str,
    global_stylesheet: &str,
) -> Result<RenderedPage, RenderError> {
    match source.kind()? {
        SourceKind::Text => {
            let (title, body_html) = render_text(raw);
            Ok(RenderedPage {
                title,
                show_heading: true,
                body_html,
                stylesheet_url: global_stylesheet.to_string(),
            })
        }
        SourceKind::Markdown => {
            let doc = frontmatter::parse(raw);
            if doc.malformed {
                warn!(
                    path = %source.path.display(),
                    "front matter is not delimited by two `---` lines; using best-effort split"
                );
            }
            let stylesheet_url = if doc.metadata.stylesheet.is_empty() {
                global_stylesheet.to_string()
            } else {
                doc.metadata.stylesheet.clone()
            };
            Ok(RenderedPage {
                show_heading: !doc.metadata.hide_title,
                title: doc.metadata.title,
                body_html: render_markdown(&doc.body),
                stylesheet_url,
            })
        }
    }
}

/// Split plain text into a title and `<p>` paragraphs.
///
/// Returns `(title, body_html)`; the title is empty when the text has no
/// triple-newline separator.
pub fn render_text(raw: &str) -> (String, String) {
    let mut sections = TITLE_SEPARATOR.split(raw);
    let first = sections.next().unwrap_or_default();
    let (title, body) = match sections.next() {
        Some(body) => (first.to_string(), body),
        None => (String::new(), first),
    };

    let paragraphs: Vec<&str> = PARAGRAPH_SEPARATOR.split(body).collect();
    let start = paragraphs
        .iter()
        .position(|p| !p.trim().is_empty())
        .unwrap_or(paragraphs.len());
    let end = paragraphs
        .iter()
        .rposition(|p| !p.trim().is_empty())
        .map_or(start, |i| i + 1);

    let body_html = paragraphs[start..end]
        .iter()
        .map(|p| format!("\r\n\t\t<p>{p}</p>"))
        .collect::<Vec<_>>()
        .join("\n");
    (title, body_html)
}

/// CommonMark to HTML, raw HTML passed through.
pub fn render_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(body, options);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}

/// The index page linking every generated page, in the order given.
pub fn render_index(base_names: &[String], stylesheet_url: &str) -> RenderedPage {
    let body_html: String = base_names
        .iter()
        .map(|name| {
            format!(
                "\r\n\t\t<h2>\r\n\t\t\t<a href=\"./{}\">{}</a>\r\n\t\t</h2>",
                naming::output_file_name(name),
                name
            )
        })
        .collect();
    RenderedPage {
        title: INDEX_TITLE.to_string(),
        show_heading: true,
        body_html,
        stylesheet_url: stylesheet_url.to_string(),
    }
}
