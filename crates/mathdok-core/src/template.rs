//! Built-in templates and slot-filling instantiation
//!
//! Templates are named markup skeletons with typed slots. Instantiation
//! substitutes caller-supplied values for the slot placeholders and
//! excises the wrapped region of any optional slot left empty, yielding
//! plain markup ready for [`crate::parse`].

use std::collections::HashMap;

use regex::Regex;

use mathdok_ast::{Slot, SlotKind, Template};

use crate::error::TemplateError;

/// All built-in templates, in menu order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        basic_problem(),
        two_equation_problem(),
        image_problem(),
        multi_part_problem(),
    ]
}

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

/// Instantiate a template with the given slot values.
///
/// Required slots must carry a non-empty value. Optional slots left
/// empty are excised together with their wrapped region; filled
/// optional slots keep their content and lose the wrap markers.
pub fn instantiate(
    template_id: &str,
    slot_values: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let template = find_template(template_id)
        .ok_or_else(|| TemplateError::UnknownTemplate(template_id.to_string()))?;

    let mut out = template.skeleton.to_string();
    for slot in &template.slots {
        let value = slot_values
            .get(slot.id)
            .map(String::as_str)
            .unwrap_or("")
            .trim();

        if value.is_empty() {
            if slot.required {
                return Err(TemplateError::MissingRequiredSlot {
                    name: slot.name.to_string(),
                });
            }
            out = excise_wrapped_region(&out, slot);
        } else {
            out = out.replace(&slot.wrap_start(), "");
            out = out.replace(&slot.wrap_end(), "");
            out = out.replace(&slot.placeholder(), value);
        }
    }
    Ok(out)
}

/// Remove an optional slot's wrapped region, markers included.
///
/// Falls back to clearing the bare placeholder when the skeleton does
/// not wrap the slot.
fn excise_wrapped_region(skeleton: &str, slot: &Slot) -> String {
    let start = slot.wrap_start();
    let end = slot.wrap_end();
    if skeleton.contains(&start) && skeleton.contains(&end) {
        let pattern = format!("(?s){}.*?{}", regex::escape(&start), regex::escape(&end));
        let re = Regex::new(&pattern).unwrap();
        re.replace_all(skeleton, "").into_owned()
    } else {
        skeleton.replace(&slot.placeholder(), "")
    }
}

fn basic_problem() -> Template {
    Template {
        id: "basic_problem",
        name: "Basic Problem",
        description: "A simple problem with one equation and a question",
        skeleton: "#problem\n#DESCRIPTION#\n\n#eq\n#EQUATION#\n\n#question\n#QUESTION#\n",
        slots: vec![
            Slot {
                id: "description",
                name: "Description",
                kind: SlotKind::Text,
                required: true,
                default: "Solve the following equation:",
            },
            Slot {
                id: "equation",
                name: "Equation",
                kind: SlotKind::Equation,
                required: true,
                default: "2x + 3 = 7",
            },
            Slot {
                id: "question",
                name: "Question",
                kind: SlotKind::Question,
                required: true,
                default: "What is the value of x?",
            },
        ],
    }
}

fn two_equation_problem() -> Template {
    Template {
        id: "two_equation_problem",
        name: "Two Equation Problem",
        description: "A problem with two equations and a question",
        skeleton: "#problem\n#DESCRIPTION#\n\n#eq\n#EQUATION1#\n\n#eq\n#EQUATION2#\n\n#question\n#QUESTION#\n",
        slots: vec![
            Slot {
                id: "description",
                name: "Description",
                kind: SlotKind::Text,
                required: true,
                default: "Solve the system of equations:",
            },
            Slot {
                id: "equation1",
                name: "First Equation",
                kind: SlotKind::Equation,
                required: true,
                default: "3x + 2y = 12",
            },
            Slot {
                id: "equation2",
                name: "Second Equation",
                kind: SlotKind::Equation,
                required: true,
                default: "x - y = 1",
            },
            Slot {
                id: "question",
                name: "Question",
                kind: SlotKind::Question,
                required: true,
                default: "Find the values of x and y.",
            },
        ],
    }
}

fn image_problem() -> Template {
    Template {
        id: "image_problem",
        name: "Problem with Image",
        description: "A problem with an image and a question",
        skeleton: "#problem\n#DESCRIPTION#\n\n[Insert figure reference here]\n\n#ADDITIONAL_TEXT_WRAP_START#\n#ADDITIONAL_TEXT#\n#ADDITIONAL_TEXT_WRAP_END#\n\n#question\n#QUESTION#\n",
        slots: vec![
            Slot {
                id: "description",
                name: "Description",
                kind: SlotKind::Text,
                required: true,
                default: "Consider the triangle shown in the figure:",
            },
            Slot {
                id: "additional_text",
                name: "Additional Text",
                kind: SlotKind::Text,
                required: false,
                default: "",
            },
            Slot {
                id: "question",
                name: "Question",
                kind: SlotKind::Question,
                required: true,
                default: "Calculate the area of the triangle.",
            },
        ],
    }
}

fn multi_part_problem() -> Template {
    Template {
        id: "multi_part_problem",
        name: "Multi-Part Problem",
        description: "A problem with multiple parts",
        skeleton: "#problem\n#DESCRIPTION#\n\n#eq\n#EQUATION#\n\n#question\n#QUESTION_PART_A#\n\n#QUESTION_PART_B_WRAP_START#\n#question\n#QUESTION_PART_B#\n#QUESTION_PART_B_WRAP_END#\n\n#QUESTION_PART_C_WRAP_START#\n#question\n#QUESTION_PART_C#\n#QUESTION_PART_C_WRAP_END#\n",
        slots: vec![
            Slot {
                id: "description",
                name: "Description",
                kind: SlotKind::Text,
                required: true,
                default: "Consider the following equation:",
            },
            Slot {
                id: "equation",
                name: "Equation",
                kind: SlotKind::Equation,
                required: true,
                default: "f(x) = x^2 - 4x + 3",
            },
            Slot {
                id: "question_part_a",
                name: "Question Part A",
                kind: SlotKind::Question,
                required: true,
                default: "Find the zeros of f(x).",
            },
            Slot {
                id: "question_part_b",
                name: "Question Part B",
                kind: SlotKind::Question,
                required: false,
                default: "Find the minimum value of f(x).",
            },
            Slot {
                id: "question_part_c",
                name: "Question Part C",
                kind: SlotKind::Question,
                required: false,
                default: "Sketch the graph of f(x).",
            },
        ],
    }
}
