//! Document skeleton generation
//!
//! Produces the LaTeX preamble for one compilation pass: document class
//! and size, package imports, margin and line-spacing placeholders, and
//! the resolved header/question command definitions. Margin and spacing
//! placeholders stay unresolved here; the compiler substitutes them
//! against the same configuration, so the threshold logic lives in one
//! place.
//!
//! LaTeX classes only support a discrete set of point sizes, so the
//! continuous scale factors are quantized: the effective size rounds to
//! the nearest supported size, and the per-element scale factors map to
//! step keywords (`\large`, `\Large`) through a fixed tier table.

use crate::config::StyleConfig;
use crate::error::SkeletonError;

/// Point sizes the backend document classes support, ascending
pub const SUPPORTED_SIZES: [u32; 10] = [6, 7, 8, 9, 10, 11, 12, 14, 17, 20];

/// Largest size the standard `article` class handles
const ARTICLE_MAX_SIZE: f64 = 12.0;

/// Fallback when the configured base size token is unsupported
const FALLBACK_SIZE: f64 = 12.0;

/// Emphasis tiers: (element scale floor, global scale floor, keyword),
/// evaluated in order, first match wins.
const EMPHASIS_TIERS: [(f64, f64, &str); 2] = [(1.3, 0.9, "\\Large"), (1.1, 0.8, "\\large")];

/// Margin and spacing placeholders left for the compiler to resolve
pub const TOP_PLACEHOLDER: &str = "#TOP#";
pub const RIGHT_PLACEHOLDER: &str = "#RIGHT#";
pub const BOTTOM_PLACEHOLDER: &str = "#BOTTOM#";
pub const LEFT_PLACEHOLDER: &str = "#LEFT#";
pub const LINE_SPACING_PLACEHOLDER: &str = "#LINESPACING#";
/// Content region placeholder
pub const CONTENT_PLACEHOLDER: &str = "#CONTENT#";

/// Map a per-element scale factor to a discrete emphasis keyword.
///
/// Returns the empty string when no tier matches.
pub fn emphasis_keyword(element_scale: f64, global_scale: f64) -> &'static str {
    for (element_floor, global_floor, keyword) in EMPHASIS_TIERS {
        if element_scale > element_floor && global_scale > global_floor {
            return keyword;
        }
    }
    ""
}

/// Round an effective size to the nearest supported class size.
///
/// Ties resolve to the first candidate in ascending order.
pub fn round_to_supported(effective: f64) -> u32 {
    let mut best = SUPPORTED_SIZES[0];
    let mut best_diff = (effective - f64::from(best)).abs();
    for &candidate in &SUPPORTED_SIZES[1..] {
        let diff = (effective - f64::from(candidate)).abs();
        if diff < best_diff {
            best = candidate;
            best_diff = diff;
        }
    }
    best
}

/// Parse a scale field, failing with the field name on malformed input.
fn parse_scale(field: &'static str, value: &str) -> Result<f64, SkeletonError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| SkeletonError::MalformedScale {
            field,
            value: value.to_string(),
        })
}

/// Numeric value of the base size token, silently corrected to the
/// fallback when the token is not one of the supported sizes.
fn base_size_points(token: &str) -> f64 {
    let numeric = token.trim().trim_end_matches("pt").trim().parse::<f64>();
    match numeric {
        Ok(v) if SUPPORTED_SIZES.iter().any(|&s| f64::from(s) == v) => v,
        _ => FALLBACK_SIZE,
    }
}

/// Base size times global scale.
pub fn effective_size(config: &StyleConfig) -> Result<f64, SkeletonError> {
    let global = parse_scale("fonts.global_scale", &config.fonts.global_scale)?;
    Ok(base_size_points(&config.fonts.base_font_size) * global)
}

/// Generate the document skeleton for the given configuration.
///
/// The returned string contains exactly four margin placeholders, one
/// line-spacing placeholder, and one content placeholder; every font
/// directive is fully resolved.
pub fn generate_skeleton(config: &StyleConfig) -> Result<String, SkeletonError> {
    let global = parse_scale("fonts.global_scale", &config.fonts.global_scale)?;
    let header_scale = parse_scale(
        "fonts.problem_header_scale",
        &config.fonts.problem_header_scale,
    )?;
    let question_scale = parse_scale("fonts.question_scale", &config.fonts.question_scale)?;
    // Validated for consistency with the other scale fields; math
    // environments take their size from the document class.
    parse_scale("fonts.equation_scale", &config.fonts.equation_scale)?;

    let effective = base_size_points(&config.fonts.base_font_size) * global;
    let size = round_to_supported(effective);
    let class = if effective > ARTICLE_MAX_SIZE {
        "extarticle"
    } else {
        "article"
    };

    let header_emphasis = emphasis_keyword(header_scale, global);
    let question_emphasis = emphasis_keyword(question_scale, global);

    let mut out = String::new();
    out.push_str(&format!("\\documentclass[{size}pt]{{{class}}}\n"));
    out.push_str("\\usepackage[fleqn]{amsmath}\n");
    out.push_str("\\usepackage{amssymb}\n");
    out.push_str("\\usepackage{graphicx}\n");
    out.push_str("\\usepackage{geometry}\n");
    out.push_str("\\usepackage{setspace}\n\n");

    out.push_str("\\geometry{\n");
    out.push_str(&format!("    top={TOP_PLACEHOLDER},\n"));
    out.push_str(&format!("    right={RIGHT_PLACEHOLDER},\n"));
    out.push_str(&format!("    bottom={BOTTOM_PLACEHOLDER},\n"));
    out.push_str(&format!("    left={LEFT_PLACEHOLDER}\n"));
    out.push_str("}\n\n");

    out.push_str(&format!("\\setstretch{{{LINE_SPACING_PLACEHOLDER}}}\n\n"));

    out.push_str("\\setcounter{secnumdepth}{0}\n");
    out.push_str("\\setlength{\\parindent}{0pt}\n");
    out.push_str("\\setlength{\\mathindent}{3em}\n\n");

    out.push_str(&format!(
        "\\newcommand{{\\problemheader}}[1]{{{header_emphasis}\\textbf{{#1}}}}\n"
    ));
    out.push_str(&format!(
        "\\newcommand{{\\questiontext}}[1]{{{question_emphasis} #1}}\n\n"
    ));

    out.push_str("\\begin{document}\n\n");
    out.push_str(CONTENT_PLACEHOLDER);
    out.push_str("\n\n\\end{document}\n");

    Ok(out)
}
