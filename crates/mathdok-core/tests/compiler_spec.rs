//! End-to-end compilation behavior
//!
//! These tests drive the public surface only: `parse`,
//! `generate_skeleton`, and `instantiate`.

use std::collections::HashMap;

use mathdok_core::{
    builtin_templates, generate_skeleton, instantiate, parse, skeleton, StyleConfig,
};

#[test]
fn empty_markup_produces_preamble_and_empty_content() {
    let config = StyleConfig::default();
    let out = parse("", &config).unwrap();

    assert!(out.starts_with("\\documentclass"));
    let begin = out.find("\\begin{document}").unwrap();
    let end = out.find("\\end{document}").unwrap();
    assert!(begin < end);
    let content = &out[begin + "\\begin{document}".len()..end];
    assert!(content.trim().is_empty());
}

#[test]
fn problem_equation_question_render_in_order() {
    let config = StyleConfig::default();
    let out = parse("#problem\nP\n#eq\n2x=4\n#question\nWhat is x?", &config).unwrap();

    let header = out.find("\\section*{}").expect("problem header");
    let equation = out.find("\\begin{equation}\n2x=4\n\\end{equation}").expect("equation");
    let question = out.find("What is x?").expect("question");
    assert!(header < equation && equation < question);
    // Single equation environment, opened then closed
    assert_eq!(out.matches("\\begin{equation}").count(), 1);
    assert_eq!(out.matches("\\end{equation}").count(), 1);
}

#[test]
fn align_without_trailing_marker_forms_one_block() {
    let config = StyleConfig::default();
    let out = parse("#align\nx + y = 5\nx - y = 3", &config).unwrap();

    assert_eq!(out.matches("\\begin{align}").count(), 1);
    assert!(out.contains("x + y = 5 \\\\ x - y = 3"));
}

#[test]
fn effective_size_rounding_is_closed_and_idempotent() {
    let mut config = StyleConfig::default();
    for &base in &skeleton::SUPPORTED_SIZES {
        for step in 0..=20 {
            let scale = 0.5 + f64::from(step) * 0.05;
            config.fonts.base_font_size = format!("{base}pt");
            config.fonts.global_scale = format!("{scale}");

            let effective = skeleton::effective_size(&config).unwrap();
            let rounded = skeleton::round_to_supported(effective);
            assert!(skeleton::SUPPORTED_SIZES.contains(&rounded));
            assert_eq!(skeleton::round_to_supported(f64::from(rounded)), rounded);
        }
    }
}

#[test]
fn skeleton_carries_exactly_the_declared_placeholders() {
    let config = StyleConfig::default();
    let out = generate_skeleton(&config).unwrap();
    for placeholder in ["#TOP#", "#RIGHT#", "#BOTTOM#", "#LEFT#", "#LINESPACING#", "#CONTENT#"] {
        assert_eq!(out.matches(placeholder).count(), 1, "{placeholder}");
    }
}

#[test]
fn instantiate_then_parse_leaves_no_placeholder_tokens() {
    let config = StyleConfig::default();
    for template in builtin_templates() {
        let mut slot_values: HashMap<String, String> = HashMap::new();
        for slot in &template.slots {
            let value = if slot.default.is_empty() {
                "extra remarks".to_string()
            } else {
                slot.default.to_string()
            };
            slot_values.insert(slot.id.to_string(), value);
        }

        let markup = instantiate(template.id, &slot_values).unwrap();
        let latex = parse(&markup, &config).unwrap();

        for slot in &template.slots {
            let token = format!("#{}#", slot.id.to_uppercase());
            assert!(!markup.contains(&token), "{}: {token}", template.id);
            assert!(!latex.contains(&token), "{}: {token}", template.id);
        }
        assert!(!latex.contains("_WRAP_START#"));
        assert!(!latex.contains("_WRAP_END#"));
    }
}

#[test]
fn optional_slot_excision_leaves_no_orphan_markers() {
    let required_only: HashMap<String, String> = [
        ("description", "Consider the triangle shown in the figure:"),
        ("question", "Calculate the area of the triangle."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let markup = instantiate("image_problem", &required_only).unwrap();
    assert!(!markup.contains("WRAP_START"));
    assert!(!markup.contains("WRAP_END"));
    assert!(!markup.contains("#ADDITIONAL_TEXT#"));

    // The excised markup still compiles cleanly
    let config = StyleConfig::default();
    let latex = parse(&markup, &config).unwrap();
    assert!(latex.contains("Calculate the area of the triangle."));
}

#[test]
fn compilation_does_not_mutate_the_config() {
    let config = StyleConfig::default();
    let snapshot = config.clone();
    let _ = parse("#problem\n#eq\nx=1\n#align\na=b", &config).unwrap();
    assert_eq!(config, snapshot);
}

#[test]
fn reset_after_mutation_matches_fresh_defaults() {
    let mut config = StyleConfig::default();
    config.fonts.global_scale = "1.2".to_string();
    config.styling.question_format = "\\textbf{Question:} #TEXT#".to_string();
    config.reset();
    assert_eq!(config, StyleConfig::default());
}
