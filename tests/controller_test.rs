mod common;

use std::sync::Arc;

use common::{Call, MockBackend, RecordingView, track};
use playlist_builder::{
    controller::{
        ADD_SUCCEEDED, CREATE_FAILED, Controller, CreateButton, FINISH_QUESTION, FINISHED, Field,
        INVALID_NAME, NoticeKind, Results, TrackEntry, View,
    },
    error::{ClientError, FlowError},
    types::{AddTrackResponse, CreatePlaylistForm, FinishResponse},
};
use tokio::sync::Notify;

fn server_error(status: u16, message: Option<&str>) -> ClientError {
    ClientError::Server {
        status,
        message: message.map(str::to_string),
    }
}

// Create-playlist flow

#[tokio::test]
async fn test_create_sends_trimmed_name_and_description() {
    let view = RecordingView::with(&[
        (Field::PlaylistName, "  Road Trip  "),
        (Field::PlaylistDescription, "\tsummer 2024 "),
    ]);
    let controller = Controller::new(MockBackend::default(), view);

    let created = controller.create_playlist().await.unwrap();

    assert_eq!(created.unwrap().name, "Road Trip");
    assert_eq!(
        controller.backend().calls(),
        vec![Call::Create(CreatePlaylistForm {
            playlist_name: "Road Trip".to_string(),
            playlist_description: Some("summer 2024".to_string()),
        })]
    );
    assert_eq!(
        controller.view().messages(),
        vec!["Successfully created playlist: Road Trip".to_string()]
    );
    assert_eq!(controller.view().notices()[0].kind, NoticeKind::Success);
}

#[tokio::test]
async fn test_create_omits_blank_description() {
    let view = RecordingView::with(&[
        (Field::PlaylistName, "Road Trip"),
        (Field::PlaylistDescription, "   "),
    ]);
    let controller = Controller::new(MockBackend::default(), view);

    controller.create_playlist().await.unwrap();

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Create(CreatePlaylistForm {
            playlist_name: "Road Trip".to_string(),
            playlist_description: None,
        })]
    );
}

#[tokio::test]
async fn test_create_rejects_blank_name_without_request() {
    for name in ["", "   ", "\t\n"] {
        let view = RecordingView::with(&[(Field::PlaylistName, name)]);
        let controller = Controller::new(MockBackend::default(), view);

        let result = controller.create_playlist().await;

        assert_eq!(result, Err(FlowError::Validation(INVALID_NAME.to_string())));
        assert!(controller.backend().calls().is_empty());
        assert_eq!(controller.view().messages(), vec![INVALID_NAME.to_string()]);
        // The trigger is never touched and the flag never set.
        assert!(controller.view().buttons().is_empty());
        assert!(!controller.is_creating());
    }
}

#[tokio::test]
async fn test_create_disables_trigger_while_in_flight() {
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(MockBackend::default(), view);

    controller.create_playlist().await.unwrap();

    assert_eq!(
        controller.view().buttons(),
        vec![CreateButton::CREATING, CreateButton::IDLE]
    );
    assert_eq!(CreateButton::CREATING.label, "Creating...");
    assert!(!CreateButton::CREATING.enabled);
    assert_eq!(CreateButton::IDLE.label, "Create Playlist");
    assert!(CreateButton::IDLE.enabled);
}

#[tokio::test]
async fn test_create_ignores_second_activation_while_in_flight() {
    let gate = Arc::new(Notify::new());
    let backend = MockBackend {
        create_gate: Some(Arc::clone(&gate)),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(backend, view);

    let first = controller.create_playlist();
    let second = async {
        // Let the first activation reach the backend.
        tokio::task::yield_now().await;
        assert!(controller.is_creating());
        assert_eq!(controller.view().last_button(), Some(CreateButton::CREATING));

        let result = controller.create_playlist().await;
        gate.notify_one();
        result
    };

    let (first, second) = tokio::join!(first, second);

    assert!(first.unwrap().is_some());
    assert_eq!(second, Ok(None));
    assert_eq!(controller.backend().calls().len(), 1);
    assert!(!controller.is_creating());
    assert_eq!(controller.view().last_button(), Some(CreateButton::IDLE));
}

#[tokio::test]
async fn test_create_uses_server_message_and_restores_trigger() {
    let backend = MockBackend {
        create: Err(server_error(400, Some("Spotify API error: invalid name"))),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(backend, view);

    let result = controller.create_playlist().await;

    assert_eq!(
        result,
        Err(FlowError::Server("Spotify API error: invalid name".to_string()))
    );
    assert_eq!(
        controller.view().messages(),
        vec!["Spotify API error: invalid name".to_string()]
    );
    assert_eq!(controller.view().notices()[0].kind, NoticeKind::Failure);
    assert_eq!(controller.view().last_button(), Some(CreateButton::IDLE));
    assert!(!controller.is_creating());
}

#[tokio::test]
async fn test_create_falls_back_to_generic_message() {
    let backend = MockBackend {
        create: Err(server_error(500, None)),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(backend, view);

    let result = controller.create_playlist().await;

    assert_eq!(result, Err(FlowError::Server(CREATE_FAILED.to_string())));
    assert_eq!(controller.view().messages(), vec![CREATE_FAILED.to_string()]);
}

#[tokio::test]
async fn test_create_reports_transport_error_text() {
    let backend = MockBackend {
        create: Err(ClientError::Transport("connection refused".to_string())),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(backend, view);

    let result = controller.create_playlist().await;

    assert_eq!(
        result,
        Err(FlowError::Transport("connection refused".to_string()))
    );
    assert_eq!(
        controller.view().messages(),
        vec!["connection refused".to_string()]
    );
    assert_eq!(controller.view().last_button(), Some(CreateButton::IDLE));
}

#[tokio::test]
async fn test_create_accepted_again_after_failure() {
    let backend = MockBackend {
        create: Err(ClientError::Parse("expected value".to_string())),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]);
    let controller = Controller::new(backend, view);

    assert!(controller.create_playlist().await.is_err());
    assert!(controller.create_playlist().await.is_err());

    assert_eq!(controller.backend().calls().len(), 2);
    assert_eq!(
        controller.view().buttons(),
        vec![
            CreateButton::CREATING,
            CreateButton::IDLE,
            CreateButton::CREATING,
            CreateButton::IDLE
        ]
    );
}

// Search flow

#[tokio::test]
async fn test_search_with_empty_query_is_a_noop() {
    let controller = Controller::new(MockBackend::default(), RecordingView::default());

    assert_eq!(controller.search().await, Ok(None));

    assert!(controller.backend().calls().is_empty());
    assert!(controller.view().results().is_empty());
}

#[tokio::test]
async fn test_search_query_is_sent_untrimmed() {
    let view = RecordingView::with(&[(Field::SearchQuery, " daft punk ")]);
    let controller = Controller::new(MockBackend::default(), view);

    controller.search().await.unwrap();

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Search(" daft punk ".to_string())]
    );
}

#[tokio::test]
async fn test_search_renders_entries_in_response_order() {
    let backend = MockBackend {
        search: Ok(vec![
            track("Zebra", &["Beach House"], "spotify:track:z"),
            track("Apple", &["Fiona Apple", "Jon Brion"], "spotify:track:a"),
            track("Mango", &[], "spotify:track:m"),
        ]),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::SearchQuery, "fruit")]);
    let controller = Controller::new(backend, view);

    assert_eq!(controller.search().await, Ok(Some(3)));

    let results = controller.view().results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Results::Searching);

    let Results::Tracks(entries) = &results[1] else {
        panic!("expected rendered tracks, got {:?}", results[1]);
    };
    let ordinals: Vec<usize> = entries.iter().map(|e| e.ordinal).collect();
    let uris: Vec<&str> = entries.iter().map(|e| e.uri.as_str()).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
    assert_eq!(
        uris,
        vec!["spotify:track:z", "spotify:track:a", "spotify:track:m"]
    );
    assert_eq!(entries[1].artists, "Fiona Apple, Jon Brion");
    assert_eq!(entries[2].to_string(), "3. Mango by ");
}

#[tokio::test]
async fn test_search_renders_documented_example() {
    let body = r#"{"tracks":{"items":[{"name":"Song A","artists":[{"name":"Artist X"}],"uri":"spotify:track:1"}]}}"#;
    let response: playlist_builder::types::SearchResponse = serde_json::from_str(body).unwrap();
    let backend = MockBackend {
        search: Ok(response.tracks.items),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::SearchQuery, "song a")]);
    let controller = Controller::new(backend, view);

    controller.search().await.unwrap();

    assert_eq!(
        controller.view().results().last(),
        Some(&Results::Tracks(vec![TrackEntry {
            ordinal: 1,
            name: "Song A".to_string(),
            artists: "Artist X".to_string(),
            uri: "spotify:track:1".to_string(),
        }]))
    );
    let Some(Results::Tracks(entries)) = controller.view().results().last().cloned() else {
        panic!("expected rendered tracks");
    };
    assert_eq!(entries[0].to_string(), "1. Song A by Artist X");
}

#[tokio::test]
async fn test_search_failure_replaces_results_with_error() {
    let backend = MockBackend {
        search: Err(ClientError::Parse("missing field `tracks`".to_string())),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::SearchQuery, "anything")]);
    let controller = Controller::new(backend, view);

    let result = controller.search().await;

    assert_eq!(
        result,
        Err(FlowError::Transport("missing field `tracks`".to_string()))
    );
    assert_eq!(
        controller.view().results(),
        vec![
            Results::Searching,
            Results::Error("Error: missing field `tracks`".to_string())
        ]
    );
}

#[tokio::test]
async fn test_search_failure_prefers_server_message() {
    let backend = MockBackend {
        search: Err(server_error(401, Some("Not logged in"))),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::SearchQuery, "anything")]);
    let controller = Controller::new(backend, view);

    let _ = controller.search().await;

    assert_eq!(
        controller.view().results().last(),
        Some(&Results::Error("Error: Not logged in".to_string()))
    );
}

#[tokio::test]
async fn test_search_is_not_blocked_by_pending_creation() {
    let gate = Arc::new(Notify::new());
    let backend = MockBackend {
        create_gate: Some(Arc::clone(&gate)),
        search: Ok(vec![track("Song A", &["Artist X"], "spotify:track:1")]),
        ..Default::default()
    };
    let view = RecordingView::with(&[
        (Field::PlaylistName, "Road Trip"),
        (Field::SearchQuery, "song"),
    ]);
    let controller = Controller::new(backend, view);

    let create = controller.create_playlist();
    let search = async {
        tokio::task::yield_now().await;
        let result = controller.search().await;
        gate.notify_one();
        result
    };

    let (created, searched) = tokio::join!(create, search);

    assert!(created.unwrap().is_some());
    assert_eq!(searched, Ok(Some(1)));
    assert_eq!(
        controller.backend().calls()[1],
        Call::Search("song".to_string())
    );
}

// Add-to-playlist flow

#[tokio::test]
async fn test_add_sends_exactly_one_request_with_uri() {
    let controller = Controller::new(MockBackend::default(), RecordingView::default());

    controller.add_to_playlist("spotify:track:1").await.unwrap();

    assert_eq!(
        controller.backend().calls(),
        vec![Call::Add("spotify:track:1".to_string())]
    );
    assert_eq!(controller.view().messages(), vec![ADD_SUCCEEDED.to_string()]);
}

#[tokio::test]
async fn test_add_does_not_deduplicate() {
    let controller = Controller::new(MockBackend::default(), RecordingView::default());

    let (a, b) = tokio::join!(
        controller.add_to_playlist("spotify:track:1"),
        controller.add_to_playlist("spotify:track:1")
    );

    assert!(a.is_ok() && b.is_ok());
    assert_eq!(controller.backend().calls().len(), 2);
}

#[tokio::test]
async fn test_add_reports_server_error() {
    let backend = MockBackend {
        add: Ok(AddTrackResponse {
            success: false,
            error: Some("No active playlist".to_string()),
        }),
        ..Default::default()
    };
    let controller = Controller::new(backend, RecordingView::default());

    let result = controller.add_to_playlist("spotify:track:1").await;

    assert_eq!(
        result,
        Err(FlowError::Server("No active playlist".to_string()))
    );
    assert_eq!(
        controller.view().messages(),
        vec!["Error: No active playlist".to_string()]
    );
}

#[tokio::test]
async fn test_add_falls_back_to_generic_message() {
    let backend = MockBackend {
        add: Ok(AddTrackResponse::default()),
        ..Default::default()
    };
    let controller = Controller::new(backend, RecordingView::default());

    let _ = controller.add_to_playlist("spotify:track:1").await;

    assert_eq!(
        controller.view().messages(),
        vec!["Error: Failed to add song".to_string()]
    );
}

#[tokio::test]
async fn test_add_reports_transport_error() {
    let backend = MockBackend {
        add: Err(ClientError::Transport("connection reset".to_string())),
        ..Default::default()
    };
    let controller = Controller::new(backend, RecordingView::default());

    let result = controller.add_to_playlist("spotify:track:1").await;

    assert!(matches!(result, Err(FlowError::Transport(_))));
    assert_eq!(
        controller.view().messages(),
        vec!["Failed to add song: connection reset".to_string()]
    );
}

// Finish flow

#[tokio::test]
async fn test_finish_declined_sends_nothing() {
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]).answering(false);
    let controller = Controller::new(MockBackend::default(), view);

    assert_eq!(controller.finish().await, Ok(false));

    assert!(controller.backend().calls().is_empty());
    assert_eq!(controller.view().questions(), vec![FINISH_QUESTION.to_string()]);
    assert_eq!(controller.view().value(Field::PlaylistName), "Road Trip");
}

#[tokio::test]
async fn test_finish_confirmed_clears_fields_and_results() {
    let view = RecordingView::with(&[
        (Field::PlaylistName, "Road Trip"),
        (Field::PlaylistDescription, "summer"),
        (Field::SearchQuery, "song"),
    ])
    .answering(true);
    let controller = Controller::new(MockBackend::default(), view);

    assert_eq!(controller.finish().await, Ok(true));

    assert_eq!(controller.backend().calls(), vec![Call::Finish]);
    let view = controller.view();
    assert_eq!(view.value(Field::PlaylistName), "");
    assert_eq!(view.value(Field::PlaylistDescription), "");
    assert_eq!(view.value(Field::SearchQuery), "song");
    assert_eq!(view.results(), vec![Results::Empty]);
    assert_eq!(view.messages(), vec![FINISHED.to_string()]);
}

#[tokio::test]
async fn test_finish_without_success_changes_nothing() {
    let backend = MockBackend {
        finish: Ok(FinishResponse::default()),
        ..Default::default()
    };
    let view = RecordingView::with(&[(Field::PlaylistName, "Road Trip")]).answering(true);
    let controller = Controller::new(backend, view);

    assert_eq!(controller.finish().await, Ok(false));

    assert_eq!(controller.backend().calls(), vec![Call::Finish]);
    assert_eq!(controller.view().value(Field::PlaylistName), "Road Trip");
    assert!(controller.view().results().is_empty());
    assert!(controller.view().notices().is_empty());
}

#[tokio::test]
async fn test_finish_transport_error_is_returned_without_notice() {
    let backend = MockBackend {
        finish: Err(ClientError::Transport("timed out".to_string())),
        ..Default::default()
    };
    let controller = Controller::new(backend, RecordingView::default().answering(true));

    assert_eq!(
        controller.finish().await,
        Err(FlowError::Transport("timed out".to_string()))
    );
    assert!(controller.view().notices().is_empty());
}
