//! Aligned rendering of the declaration listing.
//!
//! Column widths are computed over the union of the sections actually being
//! rendered, so a `show_hidden` listing stays aligned across both sections.

use crate::ArgParser;

pub(crate) fn render(parser: &ArgParser, show_hidden: bool) -> String {
    let visible = parser.visible.as_slice();
    let hidden: &[usize] = if show_hidden { &parser.hidden } else { &[] };

    let mut short_w = 0;
    let mut long_w = 0;
    for &idx in visible.iter().chain(hidden) {
        let arg = &parser.args[idx];
        short_w = short_w.max(arg.short().len());
        long_w = long_w.max(arg.long().len() + arg.default_text().len());
    }

    let mut buf = String::new();
    buf.push_str("[[Allowed Arguments]]\n");
    for &idx in visible {
        render_line(&mut buf, parser, idx, short_w, long_w);
    }
    if !hidden.is_empty() {
        buf.push_str("[[Hidden Arguments]]\n");
        for &idx in hidden {
            render_line(&mut buf, parser, idx, short_w, long_w);
        }
    }
    buf
}

fn render_line(buf: &mut String, parser: &ArgParser, idx: usize, short_w: usize, long_w: usize) {
    let arg = &parser.args[idx];
    let long = format!("{}{}", arg.long(), arg.default_text());
    let sep = if arg.short().is_empty() || long.is_empty() { "  " } else { ", " };
    let line = format!(
        "  {short:>short_w$}{sep}{long:<long_w$}  {desc}",
        short = arg.short(),
        desc = arg.description(),
    );
    buf.push_str(line.trim_end());
    buf.push('\n');
}
