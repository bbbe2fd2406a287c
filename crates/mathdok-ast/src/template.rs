//! Fill-in template definitions
//!
//! A template is a named markup skeleton with typed slots. Each slot's
//! placeholder token is `#<SLOT_ID_UPPERCASE>#`; optional slots are
//! wrapped by `#<ID>_WRAP_START#` / `#<ID>_WRAP_END#` marker pairs so
//! that an empty optional slot can be excised together with its
//! surrounding markup.

/// The kind of input a slot expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Free-form prose
    Text,
    /// A single equation line
    Equation,
    /// Multiple equation rows for an align environment
    AlignedEquations,
    /// A question sentence
    Question,
    /// An image reference
    Image,
    /// A set of answer choices
    MultiChoice,
}

/// One declared fill-in point of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Slot identifier, lowercase; the placeholder token is derived from it
    pub id: &'static str,
    /// Human-readable name, used in error messages and slot prompts
    pub name: &'static str,
    /// Expected input kind
    pub kind: SlotKind,
    /// Whether instantiation fails when this slot is left empty
    pub required: bool,
    /// Suggested default value
    pub default: &'static str,
}

impl Slot {
    /// The placeholder token this slot substitutes, e.g. `#EQUATION#`
    pub fn placeholder(&self) -> String {
        format!("#{}#", self.id.to_uppercase())
    }

    /// Start marker of the optional wrapped region
    pub fn wrap_start(&self) -> String {
        format!("#{}_WRAP_START#", self.id.to_uppercase())
    }

    /// End marker of the optional wrapped region
    pub fn wrap_end(&self) -> String {
        format!("#{}_WRAP_END#", self.id.to_uppercase())
    }
}

/// A named, fill-in markup skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier, e.g. `basic_problem`
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Markup skeleton containing the slot placeholders
    pub skeleton: &'static str,
    /// Declared slots, in skeleton order
    pub slots: Vec<Slot>,
}

impl Template {
    /// Look up a slot declaration by id
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }
}
