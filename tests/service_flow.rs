//! End-to-end tests for the chat service public API.
//!
//! Exercises the full conversation/message/listener flow through the crate's
//! public surface, the way a front-end would drive it.

mod fixtures;

use std::collections::HashSet;
use std::sync::Arc;

use banter::{ConversationId, SendMessageError};
use fixtures::{RecordingListener, service};

#[tokio::test]
async fn test_team_conversation_scenario() {
    // テスト項目: 仕様のシナリオ（会話作成 → 非参加者の送信 → 参加者集合の更新）
    // given (前提条件):
    let service = service();

    // when (操作):
    let team = service
        .create_conversation("Team", &["alice".to_string(), "bob".to_string()])
        .await;
    service
        .send_message(team.id, "carol", "hello team", None)
        .await
        .expect("send should succeed");

    // then (期待する結果):
    let stored = service.conversation(team.id).await.unwrap();
    let expected: HashSet<String> = ["alice", "bob", "carol"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(stored.participants, expected);

    let messages = service.messages(team.id).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_name, "carol");
    assert_eq!(messages[0].text.as_str(), "hello team");
}

#[tokio::test]
async fn test_conversation_ids_strictly_increase() {
    // テスト項目: 会話 ID は作成のたびに厳密に増加する
    // given (前提条件):
    let service = service();

    // when (操作):
    let mut previous = None;
    for i in 0..20 {
        let conversation = service.create_conversation(&format!("room {i}"), &[]).await;

        // then (期待する結果):
        if let Some(prev) = previous {
            assert!(conversation.id > prev);
        }
        previous = Some(conversation.id);
    }
}

#[tokio::test]
async fn test_message_ids_unique_across_conversations() {
    // テスト項目: メッセージ ID は会話をまたいで一意
    // given (前提条件):
    let service = service();
    let a = service.create_conversation("A", &[]).await;
    let b = service.create_conversation("B", &[]).await;

    // when (操作):
    let mut ids = HashSet::new();
    for i in 0..5 {
        let in_a = service
            .send_message(a.id, "alice", &format!("a{i}"), None)
            .await
            .unwrap();
        let in_b = service
            .send_message(b.id, "bob", &format!("b{i}"), None)
            .await
            .unwrap();
        ids.insert(in_a.id);
        ids.insert(in_b.id);
    }

    // then (期待する結果):
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_listener_lifecycle_across_conversations() {
    // テスト項目: リスナーは全会話の送信を登録順に受け取り、削除後は受け取らない
    // given (前提条件):
    let service = service();
    let a = service.create_conversation("A", &[]).await;
    let b = service.create_conversation("B", &[]).await;
    let listener = Arc::new(RecordingListener::default());
    let id = service.add_message_listener(listener.clone()).await;

    // when (操作):
    service.send_message(a.id, "alice", "first", None).await.unwrap();
    service.send_message(b.id, "bob", "second", None).await.unwrap();
    service.remove_message_listener(id).await;
    service.send_message(a.id, "alice", "third", None).await.unwrap();

    // then (期待する結果):
    let received = listener.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].text.as_str(), "first");
    assert_eq!(received[1].text.as_str(), "second");
}

#[tokio::test]
async fn test_unknown_conversation_is_not_found_everywhere() {
    // テスト項目: 未知の会話 ID に対する各操作は not-found / 失敗を報告する
    // given (前提条件):
    let service = service();
    let unknown = ConversationId::new(777);

    // then (期待する結果):
    assert!(service.conversation(unknown).await.is_none());
    assert!(!service.add_participant(unknown, "alice").await);
    assert!(service.messages(unknown).await.is_empty());
    assert_eq!(
        service.send_message(unknown, "alice", "hi", None).await,
        Err(SendMessageError::ConversationNotFound(unknown))
    );
    // どの操作も会話を暗黙には作成しない
    assert!(service.all_conversations().await.is_empty());
}

#[tokio::test]
async fn test_lookups_for_unknown_user_are_empty() {
    // テスト項目: どの会話にも属さないユーザーの会話一覧は空
    // given (前提条件):
    let service = service();
    service
        .create_conversation("Team", &["alice".to_string()])
        .await;

    // when (操作):
    let conversations = service.conversations_for_user("nobody").await;

    // then (期待する結果):
    assert!(conversations.is_empty());
}
