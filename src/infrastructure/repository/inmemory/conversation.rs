//! InMemory Conversation Repository 実装
//!
//! ドメイン層が定義する ConversationRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用し、ID 採番はストア自身が持つ
//! AtomicI64 で行います（プロセス全体のグローバル変数には依存しません）。

use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Conversation, ConversationId, ConversationRepository};

/// インメモリ Conversation Repository 実装
///
/// ストアごとに独立したカウンタとマップを所有するため、
/// テストを並列に実行しても互いに干渉しません。
pub struct InMemoryConversationRepository {
    /// Conversation ドメインモデル（ID をキーとするマップ）
    conversations: Mutex<HashMap<ConversationId, Conversation>>,
    /// ID 採番用シーケンス（単調増加、最初の ID は 1）
    id_seq: AtomicI64,
}

impl InMemoryConversationRepository {
    /// 新しい InMemoryConversationRepository を作成
    pub fn new() -> Self {
        Self {
            conversations: Mutex::new(HashMap::new()),
            id_seq: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> ConversationId {
        ConversationId::new(self.id_seq.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryConversationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn create(&self, name: &str, participants: &[String]) -> Conversation {
        let conversation =
            Conversation::new(self.next_id(), name, participants.iter().cloned());
        let mut conversations = self.conversations.lock().await;
        conversations.insert(conversation.id, conversation.clone());
        conversation
    }

    async fn find_by_id(&self, id: ConversationId) -> Option<Conversation> {
        let conversations = self.conversations.lock().await;
        conversations.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<Conversation> {
        let conversations = self.conversations.lock().await;
        conversations.values().cloned().collect()
    }

    async fn find_by_participant(&self, user_name: &str) -> Vec<Conversation> {
        let conversations = self.conversations.lock().await;
        conversations
            .values()
            .filter(|c| c.has_participant(user_name))
            .cloned()
            .collect()
    }

    async fn add_participant(&self, id: ConversationId, user_name: &str) -> bool {
        let mut conversations = self.conversations.lock().await;
        match conversations.get_mut(&id) {
            Some(conversation) => {
                conversation.add_participant(user_name);
                true
            }
            None => false,
        }
    }
}
