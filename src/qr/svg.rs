//! SVG rendering of a module grid

use crate::qr::ModuleGrid;
use qrcode::render::svg;

/// Render `grid` as a standalone SVG document.
///
/// The symbol is drawn by the `qrcode` SVG renderer in module units and
/// nested inside an outer document that adds `border` quiet-zone modules on
/// each side. One module is 1mm. Colors are emitted verbatim.
pub fn render_svg(grid: &ModuleGrid, border: u32, fill: &str, back: &str) -> String {
    let width = grid.width() as u64;
    let side = width + 2 * u64::from(border);
    let fill = escape_attr(fill);
    let back = escape_attr(back);

    let symbol = grid
        .code()
        .render::<svg::Color<'_>>()
        .quiet_zone(false)
        .module_dimensions(1, 1)
        .dark_color(svg::Color(&fill))
        .light_color(svg::Color(&back))
        .build();
    // Drop the XML declaration so the symbol can be nested
    let symbol = symbol.find("<svg").map_or(symbol.as_str(), |start| &symbol[start..]);
    let symbol = symbol.replacen("<svg", &format!("<svg x=\"{border}\" y=\"{border}\""), 1);

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
         width=\"{side}mm\" height=\"{side}mm\" viewBox=\"0 0 {side} {side}\" \
         shape-rendering=\"crispEdges\">\n\
         <rect x=\"0\" y=\"0\" width=\"{side}\" height=\"{side}\" fill=\"{back}\"/>\n\
         {symbol}\n\
         </svg>\n"
    )
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
