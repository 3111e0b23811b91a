//! Minimal HTML builder used by the view templates.
//!
//! Text and attribute values are always escaped; tag and attribute names are
//! `&'static str` so only template code can choose them.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Default)]
pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening tag with attributes
    pub fn open(mut self, tag: &'static str, attrs: &[(&'static str, &str)]) -> Self {
        self.start_tag(tag, attrs);
        self
    }

    /// Void element such as `<img>`; same output as `open`, but never
    /// paired with a `close`
    pub fn void(self, tag: &'static str, attrs: &[(&'static str, &str)]) -> Self {
        self.open(tag, attrs)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.buf.push_str(&escape_html(text));
        self
    }

    pub fn close(mut self, tag: &'static str) -> Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Element with text content only
    pub fn element(self, tag: &'static str, attrs: &[(&'static str, &str)], text: &str) -> Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Append markup produced by another builder
    pub fn append(mut self, markup: &str) -> Self {
        self.buf.push_str(markup);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn start_tag(&mut self, tag: &'static str, attrs: &[(&'static str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_html(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }
}
