//! Conversation shaping for the general assistant chat.

pub mod handlers;

use crate::llm_client::prompts::{assistant_system, document_context_system};
use crate::models::{ChatTurn, Language};

/// Makes sure the conversation opens with a system turn that carries the
/// language instruction. A caller-supplied system turn is kept and extended.
pub fn with_language_instruction(mut turns: Vec<ChatTurn>, language: Language) -> Vec<ChatTurn> {
    match turns.first_mut() {
        Some(first) if first.is_system() => {
            first.content.push_str("\n\n");
            first.content.push_str(language.instruction());
        }
        _ => turns.insert(0, ChatTurn::system(assistant_system(language))),
    }
    turns
}

/// Appends a user message, inserting the assistant system prompt on the first one.
pub fn push_user_message(chat: &mut Vec<ChatTurn>, message: &str, language: Language) {
    if chat.is_empty() {
        chat.push(ChatTurn::system(assistant_system(language)));
    }
    chat.push(ChatTurn::user(message));
}

/// Grounds the conversation in an uploaded document by replacing the leading
/// system turn, or inserting one when there is none.
pub fn attach_document(chat: &mut Vec<ChatTurn>, document: &str, language: Language) {
    let system = ChatTurn::system(format!(
        "{}\n\n{}",
        document_context_system(document),
        language.instruction()
    ));
    match chat.first_mut() {
        Some(first) if first.is_system() => *first = system,
        _ => chat.insert(0, system),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_instruction_appended_to_existing_system_turn() {
        let turns = vec![ChatTurn::system("Be brief."), ChatTurn::user("hi")];
        let shaped = with_language_instruction(turns, Language::En);
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].content, "Be brief.\n\nAnswer in English.");
    }

    #[test]
    fn test_system_turn_inserted_when_missing() {
        let shaped = with_language_instruction(vec![ChatTurn::user("xin chào")], Language::Vi);
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].role, Role::System);
        assert!(shaped[0].content.ends_with("Trả lời bằng tiếng Việt."));
        assert_eq!(shaped[1].content, "xin chào");
    }

    #[test]
    fn test_empty_conversation_gets_system_turn() {
        let shaped = with_language_instruction(Vec::new(), Language::En);
        assert_eq!(shaped.len(), 1);
        assert!(shaped[0].is_system());
    }

    #[test]
    fn test_first_user_message_inserts_system_prompt() {
        let mut chat = Vec::new();
        push_user_message(&mut chat, "hello", Language::En);
        push_user_message(&mut chat, "again", Language::En);
        assert_eq!(chat.len(), 3);
        assert!(chat[0].is_system());
        assert_eq!(chat[2].content, "again");
    }

    #[test]
    fn test_attach_document_replaces_system_turn() {
        let mut chat = Vec::new();
        push_user_message(&mut chat, "hello", Language::En);
        attach_document(&mut chat, "Jane Doe CV", Language::En);
        assert_eq!(chat.len(), 2);
        assert!(chat[0].content.contains("Jane Doe CV"));
        assert!(chat[0].content.ends_with("Answer in English."));
    }

    #[test]
    fn test_attach_document_inserts_when_history_empty() {
        let mut chat = Vec::new();
        attach_document(&mut chat, "JD", Language::Vi);
        assert_eq!(chat.len(), 1);
        assert!(chat[0].is_system());
    }
}
