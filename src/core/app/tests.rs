use super::*;
use crate::utils::test_utils::{create_test_app, create_test_item, dispatch, TEST_YEAR};

fn dubai() -> LocationState {
    LocationState::new(25.2048, 55.2708, "Dubai, UAE")
}

fn resolve_token(command: Option<AppCommand>) -> u64 {
    match command {
        Some(AppCommand::ResolveLocation { ticket, .. }) => ticket.token,
        other => panic!("expected resolve command, got {other:?}"),
    }
}

fn news_ticket(command: Option<AppCommand>) -> (String, i32, RequestTicket) {
    match command {
        Some(AppCommand::FetchNews {
            location,
            year,
            ticket,
        }) => (location, year, ticket),
        other => panic!("expected news command, got {other:?}"),
    }
}

/// Exploring app with Dubai selected and its first fetch already settled.
fn exploring_in_dubai() -> App {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Dubai".into(),
        },
    ));
    let (_, _, ticket) = news_ticket(dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: dubai(),
            token,
        },
    ));
    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: Vec::new(),
            token: ticket.token,
        },
    );
    app
}

#[test]
fn new_app_starts_on_landing_with_current_year() {
    let app = create_test_app();
    assert_eq!(app.explorer.mode, AppMode::Landing);
    assert_eq!(app.explorer.selected_year, TEST_YEAR);
    assert!(app.explorer.selected_location.is_none());
    assert!(!app.explorer.is_loading);
}

#[test]
fn submit_search_sets_resolving_and_clears_error() {
    let mut app = create_test_app();
    app.explorer.error_message = Some("old".into());

    let command = dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "  Dubai, UAE ".into(),
        },
    );
    match command {
        Some(AppCommand::ResolveLocation { query, ticket }) => {
            assert_eq!(query, "Dubai, UAE");
            assert_eq!(ticket.token, 1);
        }
        other => panic!("expected resolve command, got {other:?}"),
    }
    assert!(app.explorer.is_resolving_location);
    assert_eq!(app.explorer.error_message, None);
}

#[test]
fn blank_query_is_ignored() {
    let mut app = create_test_app();
    assert!(dispatch(&mut app, AppAction::SubmitSearch { query: "   ".into() }).is_none());
    assert!(!app.explorer.is_resolving_location);
}

#[test]
fn resolved_location_triggers_fetch_only_while_exploring() {
    let mut app = create_test_app();
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Dubai".into(),
        },
    ));
    let command = dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: dubai(),
            token,
        },
    );
    assert!(command.is_none(), "landing never fetches");
    assert_eq!(app.explorer.selected_location, Some(dubai()));
    assert!(!app.explorer.is_resolving_location);

    let (location, year, _) = news_ticket(dispatch(&mut app, AppAction::EnterExploring));
    assert_eq!(location, "Dubai, UAE");
    assert_eq!(year, TEST_YEAR);
    assert!(app.explorer.is_loading);
}

#[test]
fn news_loaded_stores_items_and_clears_loading() {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Dubai".into(),
        },
    ));
    let (_, _, ticket) = news_ticket(dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: dubai(),
            token,
        },
    ));

    let items = vec![
        create_test_item("Dubai, UAE", TEST_YEAR, 0),
        create_test_item("Dubai, UAE", TEST_YEAR, 1),
    ];
    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: items.clone(),
            token: ticket.token,
        },
    );
    assert_eq!(app.explorer.news, items);
    assert!(!app.explorer.is_loading);
}

#[test]
fn resolve_failure_keeps_location_and_sets_error() {
    let mut app = exploring_in_dubai();
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Atlantis".into(),
        },
    ));
    let command = dispatch(
        &mut app,
        AppAction::LocationFailed {
            message: "Could not find that location.".into(),
            token,
        },
    );

    assert!(command.is_none());
    assert_eq!(app.explorer.selected_location, Some(dubai()));
    assert_eq!(
        app.explorer.error_message.as_deref(),
        Some("Could not find that location.")
    );
    assert!(!app.explorer.is_resolving_location);
}

#[test]
fn future_year_never_fetches_and_clears_news() {
    let mut app = exploring_in_dubai();
    app.explorer.news = vec![create_test_item("Dubai, UAE", TEST_YEAR, 0)];

    let command = dispatch(
        &mut app,
        AppAction::SelectYear {
            year: TEST_YEAR + 3,
        },
    );
    assert!(command.is_none());
    assert_eq!(app.explorer.selected_year, TEST_YEAR + 3);
    assert!(app.explorer.news.is_empty());
    assert!(!app.explorer.is_loading);
}

#[test]
fn future_year_drops_the_fetch_in_flight() {
    let mut app = exploring_in_dubai();
    let (_, _, ticket) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2001 }));

    dispatch(&mut app, AppAction::SelectYear { year: 2030 });
    assert!(ticket.cancel.is_cancelled());

    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: vec![create_test_item("Dubai, UAE", 2001, 0)],
            token: ticket.token,
        },
    );
    assert!(app.explorer.news.is_empty(), "late 2001 results must not show under 2030");
}

#[test]
fn future_year_follows_the_clock_in_the_action_context() {
    let mut app = exploring_in_dubai();
    let command = apply_action(
        &mut app,
        AppAction::SelectYear { year: 2030 },
        AppActionContext { current_year: 2031 },
    );
    let (_, year, _) = news_ticket(command);
    assert_eq!(year, 2030);
    assert_eq!(app.current_year(), 2031);
}

#[test]
fn selecting_the_same_year_is_a_no_op() {
    let mut app = exploring_in_dubai();
    let year = app.explorer.selected_year;
    assert!(dispatch(&mut app, AppAction::SelectYear { year }).is_none());
}

#[test]
fn year_selection_is_clamped_to_the_strip() {
    let mut app = exploring_in_dubai();
    dispatch(&mut app, AppAction::SelectYear { year: 1900 });
    assert_eq!(app.explorer.selected_year, FIRST_YEAR);
    assert!(dispatch(&mut app, AppAction::StepYear { delta: -1 }).is_none());
    assert_eq!(app.explorer.selected_year, FIRST_YEAR);

    dispatch(&mut app, AppAction::SelectYear { year: 3000 });
    assert_eq!(app.explorer.selected_year, LAST_YEAR);
}

#[test]
fn step_year_moves_one_year_and_fetches() {
    let mut app = exploring_in_dubai();
    let (_, year, _) = news_ticket(dispatch(&mut app, AppAction::StepYear { delta: -1 }));
    assert_eq!(year, TEST_YEAR - 1);
}

#[test]
fn reselecting_the_same_pair_issues_independent_fetches() {
    let mut app = exploring_in_dubai();
    let (_, _, first) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2021 }));
    dispatch(&mut app, AppAction::SelectYear { year: 2020 });
    let (location, year, second) =
        news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2021 }));

    assert_eq!((location.as_str(), year), ("Dubai, UAE", 2021));
    assert_ne!(first.token, second.token);
    assert!(first.cancel.is_cancelled());
    assert!(!second.cancel.is_cancelled());
}

#[test]
fn latest_issued_fetch_wins_when_an_older_one_settles_last() {
    let mut app = exploring_in_dubai();
    let (_, _, older) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2019 }));
    let (_, _, newer) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2021 }));

    let newer_items = vec![create_test_item("Dubai, UAE", 2021, 0)];
    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: newer_items.clone(),
            token: newer.token,
        },
    );
    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: vec![create_test_item("Dubai, UAE", 2019, 0)],
            token: older.token,
        },
    );

    assert_eq!(app.explorer.news, newer_items);
    assert!(!app.explorer.is_loading);
}

#[test]
fn older_fetch_settling_first_does_not_end_loading() {
    let mut app = exploring_in_dubai();
    let (_, _, older) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2019 }));
    let (_, _, newer) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2021 }));

    dispatch(
        &mut app,
        AppAction::NewsFailed {
            message: "Archive retrieval failed: boom".into(),
            token: older.token,
        },
    );
    assert!(app.explorer.is_loading);
    assert_eq!(app.explorer.error_message, None);

    dispatch(
        &mut app,
        AppAction::NewsFailed {
            message: "Archive retrieval failed: late".into(),
            token: newer.token,
        },
    );
    assert!(!app.explorer.is_loading);
    assert_eq!(
        app.explorer.error_message.as_deref(),
        Some("Archive retrieval failed: late")
    );
}

#[test]
fn stale_resolve_result_is_discarded() {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);
    let first = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Paris".into(),
        },
    ));
    let second = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Tokyo".into(),
        },
    ));

    let tokyo = LocationState::new(35.6762, 139.6503, "Tokyo, Japan");
    news_ticket(dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: tokyo.clone(),
            token: second,
        },
    ));
    let late = dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: LocationState::new(48.8566, 2.3522, "Paris, France"),
            token: first,
        },
    );
    assert!(late.is_none());
    assert_eq!(app.explorer.selected_location, Some(tokyo));
}

#[test]
fn search_input_submits_trimmed_text_once() {
    let mut app = create_test_app();
    app.ui.set_search_text("  Sydney ");

    let token = resolve_token(dispatch(&mut app, AppAction::SubmitSearchInput));
    assert_eq!(token, 1);
    assert!(
        dispatch(&mut app, AppAction::SubmitSearchInput).is_none(),
        "input is disabled while resolving"
    );
}

#[test]
fn quick_pick_fills_input_and_submits() {
    let mut app = create_test_app();
    match dispatch(&mut app, AppAction::QuickPick { index: 1 }) {
        Some(AppCommand::ResolveLocation { query, .. }) => assert_eq!(query, "Paris, France"),
        other => panic!("expected resolve command, got {other:?}"),
    }
    assert_eq!(app.ui.search_text(), "Paris, France");
    assert!(dispatch(&mut app, AppAction::QuickPick { index: 0 }).is_none());
}

#[test]
fn quick_pick_out_of_range_is_ignored() {
    let mut app = create_test_app();
    assert!(dispatch(&mut app, AppAction::QuickPick { index: 7 }).is_none());
    assert!(!app.explorer.is_resolving_location);
}

#[test]
fn exit_to_landing_keeps_state_and_reentry_refetches() {
    let mut app = exploring_in_dubai();
    app.explorer.news = vec![create_test_item("Dubai, UAE", TEST_YEAR, 0)];

    assert!(dispatch(&mut app, AppAction::ExitToLanding).is_none());
    assert_eq!(app.explorer.mode, AppMode::Landing);
    assert_eq!(app.explorer.selected_location, Some(dubai()));
    assert_eq!(app.explorer.news.len(), 1);

    let (location, _, _) = news_ticket(dispatch(&mut app, AppAction::EnterExploring));
    assert_eq!(location, "Dubai, UAE");
}

#[test]
fn news_results_apply_after_leaving_exploring() {
    let mut app = exploring_in_dubai();
    let (_, _, ticket) = news_ticket(dispatch(&mut app, AppAction::SelectYear { year: 2021 }));
    dispatch(&mut app, AppAction::ExitToLanding);
    dispatch(
        &mut app,
        AppAction::NewsLoaded {
            items: vec![create_test_item("Dubai, UAE", 2021, 0)],
            token: ticket.token,
        },
    );
    assert_eq!(app.explorer.news.len(), 1);
}

#[test]
fn map_focus_seeds_reticle_from_location() {
    let mut app = exploring_in_dubai();
    dispatch(&mut app, AppAction::CycleFocus { reverse: true });
    assert_eq!(app.ui.focus, Focus::Map);
    assert_eq!(app.ui.reticle, Some((25.2048, 55.2708)));

    dispatch(
        &mut app,
        AppAction::MoveReticle {
            d_lat: 10.0,
            d_lng: -1.0,
        },
    );
    let (lat, lng) = app.ui.reticle.expect("reticle");
    assert!((lat - 35.2048).abs() < 1e-9);
    assert!((lng - 54.2708).abs() < 1e-9);

    dispatch(&mut app, AppAction::CycleFocus { reverse: false });
    assert_eq!(app.ui.focus, Focus::Search);
    assert_eq!(app.ui.reticle, None);
}

#[test]
fn reticle_moves_are_ignored_outside_map_focus() {
    let mut app = create_test_app();
    dispatch(
        &mut app,
        AppAction::MoveReticle {
            d_lat: 1.0,
            d_lng: 1.0,
        },
    );
    assert_eq!(app.ui.reticle, None);
}

#[test]
fn pinned_point_becomes_the_location_and_fetches() {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);

    let ticket = match dispatch(
        &mut app,
        AppAction::PinMapPoint {
            lat: 0.0,
            lng: -30.0,
        },
    ) {
        Some(AppCommand::ReverseGeocode { lat, lng, ticket }) => {
            assert_eq!((lat, lng), (0.0, -30.0));
            ticket
        }
        other => panic!("expected geocode command, got {other:?}"),
    };
    assert!(app.is_naming_point());

    let (location, _, _) = news_ticket(dispatch(
        &mut app,
        AppAction::PointNamed {
            lat: 0.0,
            lng: -30.0,
            name: "The High Seas".into(),
            token: ticket.token,
        },
    ));
    assert_eq!(location, "The High Seas");
    assert!(!app.is_naming_point());
    assert_eq!(
        app.explorer.selected_location,
        Some(LocationState::new(0.0, -30.0, "The High Seas"))
    );
}

#[test]
fn stale_geocode_result_is_discarded() {
    let mut app = create_test_app();
    let first = match dispatch(&mut app, AppAction::PinMapPoint { lat: 1.0, lng: 1.0 }) {
        Some(AppCommand::ReverseGeocode { ticket, .. }) => ticket,
        other => panic!("expected geocode command, got {other:?}"),
    };
    dispatch(&mut app, AppAction::PinMapPoint { lat: 2.0, lng: 2.0 });

    assert!(dispatch(
        &mut app,
        AppAction::PointNamed {
            lat: 1.0,
            lng: 1.0,
            name: "Selected Point".into(),
            token: first.token,
        },
    )
    .is_none());
    assert!(app.explorer.selected_location.is_none());
}

#[test]
fn search_after_pin_wins_over_a_slower_geocode() {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);
    let pin = match dispatch(&mut app, AppAction::PinMapPoint { lat: 0.0, lng: -30.0 }) {
        Some(AppCommand::ReverseGeocode { ticket, .. }) => ticket,
        other => panic!("expected geocode command, got {other:?}"),
    };
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Paris".into(),
        },
    ));
    assert!(pin.cancel.is_cancelled());
    assert!(!app.is_naming_point());

    let paris = LocationState::new(48.8566, 2.3522, "Paris, France");
    dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: paris.clone(),
            token,
        },
    );
    assert!(dispatch(
        &mut app,
        AppAction::PointNamed {
            lat: 0.0,
            lng: -30.0,
            name: "The High Seas".into(),
            token: pin.token,
        },
    )
    .is_none());
    assert_eq!(app.explorer.selected_location, Some(paris));
}

#[test]
fn pin_after_search_wins_over_a_slower_resolve() {
    let mut app = create_test_app();
    dispatch(&mut app, AppAction::EnterExploring);
    let token = resolve_token(dispatch(
        &mut app,
        AppAction::SubmitSearch {
            query: "Paris".into(),
        },
    ));
    let pin = match dispatch(&mut app, AppAction::PinMapPoint { lat: 0.0, lng: -30.0 }) {
        Some(AppCommand::ReverseGeocode { ticket, .. }) => ticket,
        other => panic!("expected geocode command, got {other:?}"),
    };
    assert!(!app.explorer.is_resolving_location);

    dispatch(
        &mut app,
        AppAction::PointNamed {
            lat: 0.0,
            lng: -30.0,
            name: "The High Seas".into(),
            token: pin.token,
        },
    );
    assert!(dispatch(
        &mut app,
        AppAction::LocationResolved {
            location: LocationState::new(48.8566, 2.3522, "Paris, France"),
            token,
        },
    )
    .is_none());
    assert_eq!(
        app.explorer.selected_location,
        Some(LocationState::new(0.0, -30.0, "The High Seas"))
    );
}

#[test]
fn apply_actions_collects_commands_in_order() {
    let mut app = create_test_app();
    let ctx = crate::utils::test_utils::test_ctx();
    let commands = apply_actions(
        &mut app,
        [
            AppAction::EnterExploring,
            AppAction::SubmitSearch {
                query: "Dubai".into(),
            },
            AppAction::LocationResolved {
                location: dubai(),
                token: 1,
            },
        ]
        .into_iter()
        .map(|action| AppActionEnvelope {
            action,
            context: ctx,
        }),
    );
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::ResolveLocation { .. }));
    assert!(matches!(commands[1], AppCommand::FetchNews { .. }));
}

#[test]
fn app_from_config_uses_theme_and_quick_picks() {
    let config = Config {
        theme: Some("mono".into()),
        quick_picks: vec!["Lima".into()],
        ..Default::default()
    };
    let app = App::new(&config, 2024);
    assert_eq!(app.ui.theme.id, "mono");
    assert_eq!(app.ui.quick_picks, vec!["Lima".to_string()]);
    assert_eq!(app.current_year(), 2024);
}
