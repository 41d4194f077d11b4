use crate::formatting::*;
use crate::language::Abbreviation;

/// We do the formatting in two passes. First we convert from the parsed
/// tree into a Vec of "fragments" (Syntax tag, String pairs). Then second we
/// apply the specified renderer to each pair to result in an embellished or
/// plain String.
pub fn render(renderer: &dyn Render, abbreviation: &Abbreviation, options: &Options) -> String {
    // Pass 1: Format tree to tagged fragments
    let fragments = format_with_renderer(abbreviation, options);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

fn render_to_string(renderer: &dyn Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
