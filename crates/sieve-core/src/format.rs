use markdown::{Options as MarkdownOptions, to_html_with_options};

fn markdown_options() -> MarkdownOptions {
    let mut options = MarkdownOptions::gfm();
    // Dictionary definitions embed their own HTML, let it through.
    options.compile.allow_dangerous_html = true;
    options.compile.allow_dangerous_protocol = true;
    options.compile.gfm_tagfilter = false;
    options
}

/// Markdown to HTML without `<p>` wrapping, for pasting into a note field
pub fn markdown_nop(input: &str) -> String {
    let html = to_html_with_options(input, &markdown_options()).unwrap_or_else(|_| input.to_string());
    strip_paragraphs(&html)
}

fn strip_paragraphs(html: &str) -> String {
    html.replace("<p>", "")
        .replace("</p>", "")
        .trim_end_matches('\n')
        .to_string()
}

/// Line breaks as HTML breaks
pub fn nl2br(text: &str) -> String {
    text.replace('\n', "<br>")
}
