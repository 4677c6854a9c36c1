use std::collections::HashMap;

use ensk_core::dialogue::Dialogue;

/// One admin in one chat. Two admins in the same group chat get separate
/// dialogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub chat_id: i64,
    pub user_id: i64,
}

impl ConversationKey {
    pub const fn new(chat_id: i64, user_id: i64) -> Self {
        Self { chat_id, user_id }
    }
}

/// In-flight admin dialogues. Lost on restart; rows already written stay.
#[derive(Debug, Default)]
pub struct DialogueSessions {
    active: HashMap<ConversationKey, Dialogue>,
}

impl DialogueSessions {
    pub fn get(&self, key: ConversationKey) -> Option<&Dialogue> {
        self.active.get(&key)
    }

    /// Store the dialogue for `key`, replacing any previous one.
    pub fn insert(&mut self, key: ConversationKey, dialogue: Dialogue) {
        self.active.insert(key, dialogue);
    }

    pub fn remove(&mut self, key: ConversationKey) -> Option<Dialogue> {
        self.active.remove(&key)
    }

    pub fn contains(&self, key: ConversationKey) -> bool {
        self.active.contains_key(&key)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
