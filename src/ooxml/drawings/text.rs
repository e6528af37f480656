//! Text bodies (`p:txBody`, `a:p`, `a:r`).

use super::{fill::solid_fill_rgb, parse_bool, parse_i64};
use crate::common::unit::font_size_to_pt;
use crate::ooxml::element::Element;
use crate::presentation::{Paragraph, Run, RunFont, TextBody};

/// Read character properties from an `a:rPr` (or `a:endParaRPr`).
pub fn read_run_font(r_pr: &Element) -> RunFont {
    RunFont {
        name: r_pr
            .child("latin")
            .and_then(|latin| latin.attr("typeface"))
            .filter(|face| !face.is_empty())
            .map(str::to_string),
        size: r_pr.attr("sz").and_then(parse_i64).map(font_size_to_pt),
        bold: r_pr.attr("b").and_then(parse_bool),
        italic: r_pr.attr("i").and_then(parse_bool),
        color: solid_fill_rgb(r_pr),
    }
}

fn read_run(run: &Element, text: String) -> Run {
    Run {
        text,
        font: run.child("rPr").map(read_run_font).unwrap_or_default(),
    }
}

/// Read one `a:p`. Text runs and fields keep their `a:t`; `a:br` becomes `"\n"`.
pub fn read_paragraph(p: &Element) -> Paragraph {
    let runs = p
        .children()
        .iter()
        .filter_map(|child| match child.local_name() {
            "r" | "fld" => {
                let text = child.child("t").map(|t| t.text().to_string()).unwrap_or_default();
                Some(read_run(child, text))
            },
            "br" => Some(read_run(child, "\n".to_string())),
            _ => None,
        })
        .collect();
    Paragraph { runs }
}

/// Read a `p:txBody`.
pub fn read_text_body(tx_body: &Element) -> TextBody {
    TextBody {
        paragraphs: tx_body.children_named("p").map(read_paragraph).collect(),
    }
}
