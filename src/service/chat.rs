//! サービス層: ChatService ファサード
//!
//! UI から呼び出される唯一の入口。Repository を組み合わせて
//! 会話とメッセージの操作を提供し、新着メッセージをリスナーへ配信します。
//!
//! ## 設計メモ
//!
//! - 「存在チェック → 参加者追加 → メッセージ作成」の一連の操作は
//!   全体としてはアトミックではありません。各ステップが単独で安全
//!   （参加者追加は冪等、メッセージ作成は会話の存在を要求しない）なので、
//!   呼び出しの交錯は許容します。
//! - リスナーへの配信は送信者のタスク上で同期的に、登録順に行います。
//!   1 つのリスナーの失敗はログに記録し、残りのリスナーへの配信は
//!   継続します（失敗は送信者へ伝播しません）。

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Mutex;

use crate::{
    domain::{
        Conversation, ConversationId, ConversationRepository, Message, MessageRepository,
        MessageText, ValueObjectError,
    },
    infrastructure::{InMemoryConversationRepository, InMemoryMessageRepository},
};

use super::{
    error::SendMessageError,
    listener::{ListenerId, MessageListener},
};

/// Backend service for managing chat conversations and messages.
pub struct ChatService {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
    /// Listener registry in registration order
    listeners: Mutex<Vec<(ListenerId, Arc<dyn MessageListener>)>>,
    listener_seq: AtomicU64,
}

impl ChatService {
    /// Create a service over the given repositories.
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            messages,
            listeners: Mutex::new(Vec::new()),
            listener_seq: AtomicU64::new(0),
        }
    }

    /// Convenience constructor wiring fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryConversationRepository::new()),
            Arc::new(InMemoryMessageRepository::new()),
        )
    }

    /// Create a conversation and eagerly register its empty message list.
    pub async fn create_conversation(
        &self,
        name: &str,
        participants: &[String],
    ) -> Conversation {
        let conversation = self.conversations.create(name, participants).await;
        self.messages.init_conversation(conversation.id).await;
        tracing::debug!("created conversation '{}'", conversation);
        conversation
    }

    /// Look up a conversation by id.
    pub async fn conversation(&self, conversation_id: ConversationId) -> Option<Conversation> {
        self.conversations.find_by_id(conversation_id).await
    }

    /// All conversations containing `user_name` as a participant.
    pub async fn conversations_for_user(&self, user_name: &str) -> Vec<Conversation> {
        self.conversations.find_by_participant(user_name).await
    }

    /// Every conversation known to the store.
    pub async fn all_conversations(&self) -> Vec<Conversation> {
        self.conversations.find_all().await
    }

    /// Record a message in a conversation and notify listeners.
    ///
    /// The sender is added to the conversation's participant set first if not
    /// already a member. Text is truncated to the domain length bound; empty
    /// text is rejected.
    ///
    /// # Errors
    ///
    /// * `SendMessageError::ConversationNotFound` - unknown conversation id
    /// * `SendMessageError::EmptyText` - empty message body
    pub async fn send_message(
        &self,
        conversation_id: ConversationId,
        sender_name: &str,
        text: &str,
        _image_data: Option<Vec<u8>>,
    ) -> Result<Message, SendMessageError> {
        let conversation = self
            .conversations
            .find_by_id(conversation_id)
            .await
            .ok_or(SendMessageError::ConversationNotFound(conversation_id))?;

        let text = MessageText::new(text.to_string()).map_err(|e| match e {
            ValueObjectError::MessageTextEmpty => SendMessageError::EmptyText,
        })?;

        if !conversation.has_participant(sender_name) {
            self.conversations
                .add_participant(conversation_id, sender_name)
                .await;
        }

        // TODO: persist image attachments once the message store supports them
        let message = self.messages.create(conversation_id, sender_name, text).await;
        tracing::debug!("stored message {} in conversation {}", message.id, conversation_id);

        self.notify_listeners(&message).await;

        Ok(message)
    }

    /// Snapshot of a conversation's messages in insertion order.
    pub async fn messages(&self, conversation_id: ConversationId) -> Vec<Message> {
        self.messages.find_by_conversation(conversation_id).await
    }

    /// Add a participant to a conversation. Returns whether the conversation
    /// existed.
    pub async fn add_participant(&self, conversation_id: ConversationId, user_name: &str) -> bool {
        self.conversations
            .add_participant(conversation_id, user_name)
            .await
    }

    /// Register a listener for new messages. No deduplication: the same
    /// listener registered twice is notified twice per message.
    pub async fn add_message_listener(&self, listener: Arc<dyn MessageListener>) -> ListenerId {
        let id = ListenerId::new(self.listener_seq.fetch_add(1, Ordering::SeqCst) + 1);
        let mut listeners = self.listeners.lock().await;
        listeners.push((id, listener));
        id
    }

    /// Unregister a previously added listener. Returns whether it was still
    /// registered.
    pub async fn remove_message_listener(&self, listener_id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().await;
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != listener_id);
        listeners.len() < before
    }

    /// Deliver a message to every registered listener in registration order.
    ///
    /// The registry is snapshotted before delivery, so concurrent
    /// registration or removal never observes a half-mutated list. Each
    /// invocation is isolated: a failing listener is logged and skipped.
    async fn notify_listeners(&self, message: &Message) {
        let snapshot: Vec<(ListenerId, Arc<dyn MessageListener>)> = {
            let listeners = self.listeners.lock().await;
            listeners
                .iter()
                .map(|(id, listener)| (*id, Arc::clone(listener)))
                .collect()
        };

        for (listener_id, listener) in snapshot {
            if let Err(e) = listener.on_message(message) {
                tracing::warn!("message listener {} failed: {}", listener_id, e);
            }
        }
    }
}
