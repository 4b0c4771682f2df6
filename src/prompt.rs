use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

const EQUATION_DEFINITION: &str = "$$ ... $$ {#id}";

/// Paper section a paragraph belongs to. Picks the revision template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Abstract,
    IntroOrDiscussion,
    Results,
    Methods,
    Other,
}

impl Section {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "abstract" => Section::Abstract,
            "introduction" | "discussion" => Section::IntroOrDiscussion,
            "results" => Section::Results,
            "methods" => Section::Methods,
            _ => Section::Other,
        }
    }
}

/// Whether the target endpoint takes one combined prompt or a separate
/// instruction and input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptShape {
    Combined,
    InstructionInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Single(String),
    InstructionInput { instruction: String, input: String },
}

fn capitalize(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn instruction_template(section: Section, name: &str, title: &str, keywords: &str) -> String {
    match section {
        Section::Abstract => format!(
            "Revise the following paragraph from the {name} of an academic paper \
             (with the title '{title}' and keywords '{keywords}')
             so the research problem/question is clear,
                the solution proposed is clear,
                the text grammar is correct, spelling errors are fixed,
                and the text is in active voice and has a clear sentence structure"
        ),
        Section::IntroOrDiscussion => format!(
            "Revise the following paragraph from the {name} section of an academic paper \
             (with the title '{title}' and keywords '{keywords}')
             so
                most of the citations to other academic papers are kept,
                the text minimizes the use of jargon,
                the text grammar is correct, spelling errors are fixed,
                and the text has a clear sentence structure"
        ),
        Section::Results => format!(
            "Revise the following paragraph from the {name} section of an academic paper \
             (with the title '{title}' and keywords '{keywords}')
             so
                most references to figures and tables are kept,
                the details are enough to clearly explain the outcomes,
                sentences are concise and to the point,
                the text minimizes the use of jargon,
                the text grammar is correct, spelling errors are fixed,
                and the text has a clear sentence structure"
        ),
        Section::Methods => format!(
            "Revise the paragraph(s) below from
             the {name} section of an academic paper
             (with the title '{title}' and keywords '{keywords}')
             so
                most of the citations to other academic papers are kept,
                most of the technical details are kept,
                most references to equations (such as \"Equation (@id)\") are kept,
                all equations definitions (such as '{EQUATION_DEFINITION}') are included with newlines before and after,
                the most important symbols in equations are defined,
                spelling errors are fixed, the text grammar is correct,
                and the text has a clear sentence structure"
        ),
        Section::Other => format!(
            "Revise the following paragraph from the {name} section of an academic paper \
             (with the title '{title}' and keywords '{keywords}')
             so
                the text minimizes the use of jargon,
                the text grammar is correct, spelling errors are fixed,
                and the text has a clear sentence structure"
        ),
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

fn instruction(section_label: &str, title: &str, keywords: &str) -> String {
    let section = Section::from_label(section_label);
    let name = capitalize(section_label.trim());
    collapse_whitespace(&instruction_template(section, &name, title, keywords))
}

/// One prompt string: the instruction, a blank line, then the paragraph.
pub fn combined_prompt(paragraph: &str, section_label: &str, title: &str, keywords: &str) -> String {
    let instruction = instruction(section_label, title, keywords);
    format!("{instruction}.\n\n{}", paragraph.trim())
}

/// Separate `(instruction, input)` for edit-style endpoints.
pub fn instruction_input(
    paragraph: &str,
    section_label: &str,
    title: &str,
    keywords: &str,
) -> (String, String) {
    let instruction = instruction(section_label, title, keywords)
        .replace("the following paragraph", "this paragraph");
    (format!("{instruction}."), paragraph.trim().to_string())
}

/// Builds the revision prompt for a paragraph. Unknown section labels use the
/// generic template.
pub fn build_prompt(
    paragraph: &str,
    section_label: &str,
    title: &str,
    keywords: &str,
    shape: PromptShape,
) -> Prompt {
    match shape {
        PromptShape::Combined => {
            Prompt::Single(combined_prompt(paragraph, section_label, title, keywords))
        }
        PromptShape::InstructionInput => {
            let (instruction, input) = instruction_input(paragraph, section_label, title, keywords);
            Prompt::InstructionInput { instruction, input }
        }
    }
}
