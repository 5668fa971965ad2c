//! Prompt construction for nursing-note generation.
//!
//! The template is static clinical-documentation content. It is assembled
//! section by section around the two user texts; the user text itself is
//! appended as-is and never scanned for placeholders.

/// Versioned instruction template with parameterised sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub version: &'static str,
    pub role: &'static str,
    pub order_heading: &'static str,
    pub observation_heading: &'static str,
    pub format_heading: &'static str,
    pub output_format: &'static [&'static str],
    pub directives_heading: &'static str,
    /// Rendered as a numbered list, starting at 1.
    pub directives: &'static [&'static str],
}

pub const CANONICAL_TEMPLATE: PromptTemplate = PromptTemplate {
    version: "4",
    role: "You are an experienced registered nurse on an acute medical-surgical unit. \
Convert the doctor's order note below into clear, professional nursing documentation \
for the current shift. Write for the next nurse taking over care: concise, factual \
and ready to be entered in the patient's chart.",
    order_heading: "DOCTOR'S ORDER NOTE:",
    observation_heading: "NURSING OBSERVATIONS (since the order note was written):",
    format_heading: "OUTPUT FORMAT:",
    output_format: &[
        "Use exactly these headings, in this order:",
        "- Active Diagnoses",
        "- Nursing Assessment",
        "- Nursing Interventions",
        "- Medications and Treatments",
        "- Monitoring and Follow-up",
        "- Infection Prevention",
        "- Patient and Family Education",
        "Under each heading write short bullet points. Do not add other headings, \
a preamble or a closing summary.",
    ],
    directives_heading: "INSTRUCTIONS:",
    directives: &[
        "List no more than three active diagnoses, most acute first. Group related \
findings under one diagnosis instead of listing each finding separately.",
        "Turn every order into a concrete nursing action with its frequency or timing \
(for example q4h, daily, PRN).",
        "For any line, catheter, drain, wound or isolation order, include the matching \
infection prevention bundle: hand hygiene, site assessment, dressing and tubing care, \
and a daily review of whether the device is still needed.",
        "Use the nursing observations wherever they change the assessment or the \
priorities. If no observations are given, base the note on the order note alone and \
do not mention that observations are missing.",
        "Do not invent vital signs, laboratory values, medications or doses that are not \
stated in the input.",
        "Flag any order that is ambiguous or incomplete under Monitoring and Follow-up as \
\"Clarify with provider\".",
        "Use standard clinical abbreviations only and write in the third person.",
    ],
};

impl PromptTemplate {
    /// Renders the full prompt. Pure and total: any two strings are accepted,
    /// including an empty observation note which is rendered as an empty field.
    pub fn render(&self, order_note: &str, observation_note: &str) -> String {
        let mut out = String::with_capacity(2048 + order_note.len() + observation_note.len());

        out.push_str(self.role);
        out.push_str("\n\n");

        out.push_str(self.order_heading);
        out.push('\n');
        out.push_str(order_note);
        out.push_str("\n\n");

        out.push_str(self.observation_heading);
        out.push('\n');
        out.push_str(observation_note);
        out.push_str("\n\n");

        out.push_str(self.format_heading);
        out.push('\n');
        for line in self.output_format {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');

        out.push_str(self.directives_heading);
        for (i, directive) in self.directives.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{}. {}", i + 1, directive));
        }
        out.push('\n');

        out
    }
}

/// Builds the prompt from the canonical template.
pub fn build_prompt(order_note: &str, observation_note: &str) -> String {
    CANONICAL_TEMPLATE.render(order_note, observation_note)
}
