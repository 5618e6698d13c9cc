//! Prompt composition for the preview session
//!
//! Builds the single text prompt handed to the text-generation collaborator
//! from the in-progress draft configuration plus the operator's test message.

use crate::types::Page;

/// Fallback shown when a page has no services configured.
pub const NO_SERVICES_LINE: &str = "No specific services listed.";

/// The instruction block: verbatim custom instructions when set, otherwise a
/// sentence synthesized from the brand voice.
#[must_use]
pub fn instruction_block(page: &Page) -> String {
    if page.custom_instructions.is_empty() {
        format!(
            "You are a customer-support assistant for this business page. Reply in a {} tone.",
            page.brand_voice.label()
        )
    } else {
        page.custom_instructions.clone()
    }
}

/// Composes the full generation prompt: instruction block, page context, and
/// the literal user message.
#[must_use]
pub fn compose_prompt(page: &Page, user_message: &str) -> String {
    let services = if page.services.is_empty() {
        NO_SERVICES_LINE.to_string()
    } else {
        page.services
            .iter()
            .map(|s| format!("- {s}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{instructions}\n\n\
         Page Name: {name}\n\
         Business Type: {business}\n\
         Language: {language}\n\
         Services:\n{services}\n\n\
         Customer message: {user_message}",
        instructions = instruction_block(page),
        name = page.page_name,
        business = page.business_type.label(),
        language = page.language.code().to_uppercase(),
    )
}
