//! InMemory Message Repository 実装
//!
//! ドメイン層が定義する MessageRepository trait の具体的な実装。
//! 会話 ID ごとのメッセージリストを HashMap で保持し、メッセージ ID は
//! 全会話で共有する単一のシーケンスから採番します（グローバルに一意）。

use std::{
    collections::HashMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConversationId, Message, MessageId, MessageRepository, MessageText, Timestamp};

/// インメモリ Message Repository 実装
///
/// メッセージは会話ごとに挿入順で保持されます。会話の存在は検証しません
/// （会話ストアとは独立しており、先に会話が消えていても追記は安全です）。
pub struct InMemoryMessageRepository {
    /// 会話 ID ごとのメッセージリスト（挿入順）
    messages: Mutex<HashMap<ConversationId, Vec<Message>>>,
    /// ID 採番用シーケンス（全会話で共有、最初の ID は 1）
    id_seq: AtomicI64,
}

impl InMemoryMessageRepository {
    /// 新しい InMemoryMessageRepository を作成
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(HashMap::new()),
            id_seq: AtomicI64::new(0),
        }
    }

    fn next_id(&self) -> MessageId {
        MessageId::new(self.id_seq.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(
        &self,
        conversation_id: ConversationId,
        sender_name: &str,
        text: MessageText,
    ) -> Message {
        let message = Message::new(
            self.next_id(),
            conversation_id,
            sender_name,
            text,
            Timestamp::now(),
        );
        let mut messages = self.messages.lock().await;
        messages
            .entry(conversation_id)
            .or_default()
            .push(message.clone());
        message
    }

    async fn find_by_conversation(&self, conversation_id: ConversationId) -> Vec<Message> {
        let messages = self.messages.lock().await;
        messages.get(&conversation_id).cloned().unwrap_or_default()
    }

    async fn init_conversation(&self, conversation_id: ConversationId) {
        let mut messages = self.messages.lock().await;
        messages.entry(conversation_id).or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MessageText {
        MessageText::new(s.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_globally_unique_ids() {
        // テスト項目: メッセージ ID は会話をまたいでグローバルに一意
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        let conv_a = ConversationId::new(1);
        let conv_b = ConversationId::new(2);

        // when (操作):
        let m1 = repo.create(conv_a, "alice", text("one")).await;
        let m2 = repo.create(conv_b, "bob", text("two")).await;
        let m3 = repo.create(conv_a, "alice", text("three")).await;

        // then (期待する結果):
        assert_eq!(m1.id, MessageId::new(1));
        assert!(m2.id > m1.id);
        assert!(m3.id > m2.id);
    }

    #[tokio::test]
    async fn test_create_appends_in_insertion_order() {
        // テスト項目: メッセージは挿入順で保持される
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        let conv = ConversationId::new(1);

        // when (操作):
        repo.create(conv, "alice", text("first")).await;
        repo.create(conv, "bob", text("second")).await;
        repo.create(conv, "alice", text("third")).await;

        // then (期待する結果):
        let messages = repo.find_by_conversation(conv).await;
        let bodies: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_create_does_not_validate_conversation() {
        // テスト項目: 会話の存在チェックなしでメッセージを保存できる
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();

        // when (操作): どの会話ストアにも存在しない ID に追記する
        let message = repo
            .create(ConversationId::new(999), "ghost", text("boo"))
            .await;

        // then (期待する結果):
        assert_eq!(message.conversation_id, ConversationId::new(999));
        assert_eq!(
            repo.find_by_conversation(ConversationId::new(999)).await.len(),
            1
        );
    }

    #[tokio::test]
    async fn test_find_by_conversation_unknown_is_empty() {
        // テスト項目: 未知の会話のメッセージ一覧は空
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();

        // when (操作):
        let messages = repo.find_by_conversation(ConversationId::new(5)).await;

        // then (期待する結果):
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_init_conversation_registers_empty_list() {
        // テスト項目: init_conversation は空のメッセージリストを事前登録する
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        let conv = ConversationId::new(1);

        // when (操作):
        repo.init_conversation(conv).await;

        // then (期待する結果):
        assert!(repo.find_by_conversation(conv).await.is_empty());
        // 既存のリストに対しては no-op
        repo.create(conv, "alice", text("hello")).await;
        repo.init_conversation(conv).await;
        assert_eq!(repo.find_by_conversation(conv).await.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_conversation_returns_snapshot() {
        // テスト項目: 取得したリストはスナップショットで、ストアとは独立
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        let conv = ConversationId::new(1);
        repo.create(conv, "alice", text("hello")).await;

        // when (操作): スナップショットだけを書き換える
        let mut snapshot = repo.find_by_conversation(conv).await;
        snapshot.clear();

        // then (期待する結果): ストア内のリストは変わらない
        assert_eq!(repo.find_by_conversation(conv).await.len(), 1);
    }
}
