// Shared prompt constants and prompt-building utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

use crate::models::Language;

/// Persona for the general interview assistant.
pub const ASSISTANT_SYSTEM: &str = "\
You are a professional job interview assistant, designed to help job seekers prepare for interviews.
Your capabilities include:

1. Resume analysis and improvement suggestions
2. Job description analysis to identify key requirements
3. Mock interview preparation with sample questions and answers
4. Personalized interview tips based on the user's background and target role
5. Advice on handling difficult interview questions
6. Guidance on salary negotiation and post-interview follow-up

When analyzing documents like resumes or job descriptions:
- Identify key skills and qualifications
- Suggest improvements for better matching with job requirements
- Highlight potential gaps or areas for improvement
- Provide specific, actionable advice

For mock interviews:
- Provide realistic questions based on the job role and industry
- Evaluate answers and suggest improvements
- Adapt your questions based on the user's responses

Your tone should be professional but friendly, encouraging, honest but constructive, \
and clear and concise in your explanations.

Respond in a structured way with clear sections, bullet points where appropriate, and concise language.";

/// Assistant persona followed by the answer-language instruction.
pub fn assistant_system(language: Language) -> String {
    format!("{ASSISTANT_SYSTEM}\n\n{}", language.instruction())
}

/// Assistant persona with an extra expert role, e.g. "You are a skills gap analyst."
pub fn expert_system(role: &str, language: Language) -> String {
    format!("{ASSISTANT_SYSTEM}\n\n{role}\n\n{}", language.instruction())
}

/// System prompt that grounds the chat in an uploaded document.
pub fn document_context_system(document: &str) -> String {
    format!(
        "{ASSISTANT_SYSTEM}\n\nI have analyzed the following document:\n\n{document}\n\n\
         Please use this information to provide more personalized and relevant interview assistance."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_system_ends_with_instruction() {
        assert!(assistant_system(Language::En).ends_with("Answer in English."));
        assert!(assistant_system(Language::Vi).ends_with("Trả lời bằng tiếng Việt."));
    }

    #[test]
    fn test_document_context_embeds_document() {
        let prompt = document_context_system("Jane Doe, Rust engineer");
        assert!(prompt.starts_with(ASSISTANT_SYSTEM));
        assert!(prompt.contains("Jane Doe, Rust engineer"));
    }
}
