//! Renders a view tree to HTML.

use crate::pages::PageView;
use crate::view::{ImageFit, ImageSpec, ViewNode};

/// Escape for text and attribute contexts.
fn escape(input: &str) -> String {
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

fn fit_css(fit: ImageFit) -> &'static str {
    match fit {
        ImageFit::Cover => "cover",
        ImageFit::Contain => "contain",
    }
}

fn write_image(img: &ImageSpec, out: &mut String) {
    let mut style = format!("object-fit: {}", fit_css(img.fit));
    if img.dimmed {
        style.push_str("; filter: brightness(0.7)");
    }
    // onerror swaps in the placeholder and relaxes the fit so it is not
    // cropped; a dimmed image also drops its filter.
    let onerror = format!(
        "this.src='{}';this.style.objectFit='{}';this.style.filter='none';",
        img.fallback_src,
        fit_css(img.fallback_fit)
    );
    out.push_str("<img src=\"");
    out.push_str(&escape(&img.src));
    out.push_str("\" alt=\"");
    out.push_str(&escape(&img.alt));
    out.push_str("\" style=\"");
    out.push_str(&escape(&style));
    out.push_str("\" onerror=\"");
    out.push_str(&escape(&onerror));
    out.push_str("\">");
}

fn write_node(node: &ViewNode, out: &mut String) {
    match node {
        ViewNode::Text(text) => out.push_str(&escape(text)),
        ViewNode::Image(img) => write_image(img, out),
        ViewNode::Element {
            tag,
            class,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            if let Some(class) = class {
                out.push_str(" class=\"");
                out.push_str(&escape(class));
                out.push('"');
            }
            for (name, value) in attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape(value));
                out.push('"');
            }
            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

/// Render a single view tree.
pub fn render(node: &ViewNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Render a whole page state, including the non-content states.
pub fn render_page(view: &PageView) -> String {
    match view {
        PageView::Loaded(node) => render(node),
        PageView::Loading { message } => format!("<div class=\"loading\">{}</div>", escape(message)),
        PageView::Empty { message } => format!("<p>{}</p>", escape(message)),
        PageView::Error { message } => {
            format!("<div class=\"error-banner\">{}</div>", escape(message))
        }
    }
}
