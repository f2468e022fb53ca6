use cookbook_cms::application::{
    dto::{AuthenticatedUser, FlashMessage},
    ports::sessions::SessionId,
    services::SessionService,
};
use cookbook_cms::infrastructure::security::session_store::InMemorySessionStore;
use std::{sync::Arc, time::Duration};

mod support;

use support::{InMemoryCookbook, PASSWORD};

fn service(store: &Arc<InMemoryCookbook>) -> SessionService {
    SessionService::new(
        Arc::new(InMemorySessionStore::new(Duration::from_secs(60))),
        store.clone(),
    )
}

#[tokio::test]
async fn login_rotates_id_and_keeps_pending_flashes() {
    let store = Arc::new(InMemoryCookbook::new());
    let id = store.seed_user("chef", PASSWORD);
    let sessions = service(&store);
    let chef = AuthenticatedUser {
        id,
        username: "chef".into(),
    };

    let anonymous = sessions.resolve(None).await.unwrap();
    assert!(anonymous.is_new);
    sessions
        .flash(anonymous.id, FlashMessage::info("You should login first."))
        .await
        .unwrap();

    let rotated = sessions.login(anonymous.id, &chef).await.unwrap();
    assert_ne!(rotated, anonymous.id);

    let stale = sessions.resolve(Some(anonymous.id)).await.unwrap();
    assert!(stale.is_new && stale.user.is_none());

    let current = sessions.resolve(Some(rotated)).await.unwrap();
    assert!(!current.is_new);
    assert_eq!(current.user.unwrap().id, id);

    let flashes = sessions.take_flashes(rotated).await.unwrap();
    assert_eq!(flashes, vec![FlashMessage::info("You should login first.")]);
    assert!(sessions.take_flashes(rotated).await.unwrap().is_empty());
    // The user binding survives draining the flashes.
    assert!(sessions.resolve(Some(rotated)).await.unwrap().user.is_some());
}

#[tokio::test]
async fn logout_leaves_only_the_farewell() {
    let store = Arc::new(InMemoryCookbook::new());
    let id = store.seed_user("chef", PASSWORD);
    let sessions = service(&store);
    let chef = AuthenticatedUser {
        id,
        username: "chef".into(),
    };

    let session = sessions.login(SessionId::generate(), &chef).await.unwrap();
    let flushed = sessions
        .logout(session, FlashMessage::success("Successfully logged out"))
        .await
        .unwrap();

    let resolved = sessions.resolve(Some(flushed)).await.unwrap();
    assert!(resolved.user.is_none());
    assert!(!resolved.is_new);
    assert!(sessions.resolve(Some(session)).await.unwrap().is_new);

    let flashes = sessions.take_flashes(flushed).await.unwrap();
    assert_eq!(flashes.len(), 1);
    // Emptied anonymous sessions are dropped from the store.
    assert!(sessions.resolve(Some(flushed)).await.unwrap().is_new);
}

#[tokio::test]
async fn deactivated_user_resolves_as_anonymous() {
    let store = Arc::new(InMemoryCookbook::new());
    let ghost = store.seed_inactive_user("ghost", PASSWORD);
    let sessions = service(&store);

    let session = sessions
        .login(
            SessionId::generate(),
            &AuthenticatedUser {
                id: ghost,
                username: "ghost".into(),
            },
        )
        .await
        .unwrap();

    let resolved = sessions.resolve(Some(session)).await.unwrap();
    assert!(resolved.user.is_none());
    assert!(!resolved.is_new);
}
