use match_core::{GameOutcome, MatchState, Team, game_finished_message};
use scoreboard_runtime::{
    DEFAULT_STORAGE_KEY, Event, FileStateRepository, InMemoryStateRepo, MatchEvent, Mutation,
    RuntimeConfig, RuntimeError, Scoreboard, StateRepository, Topic,
};
use std::sync::Arc;
use tempfile::TempDir;

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Best-of-3 to 12 points, won by A in two straight games.
#[test]
fn best_of_three_played_to_the_end() {
    let repo = Arc::new(InMemoryStateRepo::new());
    let mut board = Scoreboard::builder(Arc::clone(&repo)).build();
    let mut matches = board.subscribe(Topic::Match);

    // ================================================================
    // Game 1
    // ================================================================
    let outcome = board.add_score(Team::A, 12).unwrap();
    assert_eq!(
        outcome,
        GameOutcome::NextGame {
            winner: Team::A,
            finished_game: 1,
            next_game: 2,
        }
    );
    assert_eq!(board.state().side_a.wins, 1);
    assert_eq!(board.state().current_game, 2);
    assert_eq!((board.state().score(Team::A), board.state().score(Team::B)), (0, 0));

    let Some(Event::Match(MatchEvent::GameFinished {
        finished_game,
        next_game,
        ..
    })) = drain(&mut matches).pop()
    else {
        panic!("expected a game finished notice");
    };
    assert_eq!(
        game_finished_message(finished_game, next_game),
        "Partida 1 finalizada! Começando partida 2"
    );

    // ================================================================
    // Game 2 decides the match
    // ================================================================
    let outcome = board.add_score(Team::A, 12).unwrap();
    assert_eq!(
        outcome,
        GameOutcome::MatchWon {
            winner: Team::A,
            wins_a: 2,
            wins_b: 0,
        }
    );
    assert_eq!(board.state().winner, Some(Team::A));
    assert_eq!(board.state().score(Team::A), 12);
    assert_eq!(board.state().current_game, 2);

    let view = board.view();
    assert_eq!(view.winner_banner().as_deref(), Some("TIME A GANHOU!"));
    assert_eq!(view.tally(), "2 x 0");

    assert_eq!(
        drain(&mut matches),
        vec![Event::Match(MatchEvent::MatchWon {
            team: Team::A,
            wins_a: 2,
            wins_b: 0,
            team_name: "TIME A".to_string(),
        })]
    );

    // ================================================================
    // Decided match refuses further scoring until a new match starts
    // ================================================================
    assert!(matches!(
        board.add_score(Team::B, 1),
        Err(RuntimeError::Score(_))
    ));

    board.start_new_match();
    assert_eq!(board.state().winner, None);
    assert_eq!(board.state().current_game, 1);
    assert_eq!(board.state().side_a.wins, 0);
    assert_eq!(board.state().config.point_limit, 12);

    let reloaded = Scoreboard::builder(repo).build();
    assert_eq!(reloaded.state(), board.state());
}

#[test]
fn blank_names_fall_back_to_defaults() {
    let mut board = Scoreboard::builder(InMemoryStateRepo::new()).build();
    board.update_team_names("", "  ");

    let view = board.view();
    assert_eq!(view.team_name(Team::A), "TIME A");
    assert_eq!(view.team_name(Team::B), "TIME B");

    board.update_team_names("  nós ", "Eles");
    assert_eq!(board.view().team_name(Team::A), "NÓS");
    assert_eq!(board.view().team_name(Team::B), "ELES");
}

#[test]
fn every_mutation_refreshes_the_display() {
    let mut board = Scoreboard::builder(InMemoryStateRepo::new()).build();
    let mut display = board.subscribe(Topic::Display);

    board.add_score(Team::B, 3).unwrap();
    board.undo_score(Team::B);
    board.update_settings(15, 5).unwrap();
    board.update_team_names("a", "b");
    board.reset_game();
    board.reset_match();

    let mutations: Vec<Mutation> = drain(&mut display)
        .into_iter()
        .filter_map(|event| match event {
            Event::Display(display) => Some(display.mutation),
            Event::Match(_) => None,
        })
        .collect();

    assert_eq!(
        mutations,
        vec![
            Mutation::ScoreAdded {
                team: Team::B,
                points: 3
            },
            Mutation::ScoreUndone { team: Team::B },
            Mutation::SettingsUpdated,
            Mutation::NamesUpdated,
            Mutation::GameReset,
            Mutation::MatchReset,
        ]
    );
}

#[test]
fn game_reset_keeps_wins_while_match_reset_clears_them() {
    let mut board = Scoreboard::builder(InMemoryStateRepo::new()).build();
    board.add_score(Team::B, 12).unwrap();
    board.add_score(Team::A, 7).unwrap();

    board.reset_game();
    assert_eq!(board.state().score(Team::A), 0);
    assert!(board.state().side_a.history.is_empty());
    assert_eq!(board.state().side_b.wins, 1);
    assert_eq!(board.state().current_game, 2);

    board.reset_match();
    assert_eq!(board.state().side_b.wins, 0);
    assert_eq!(board.state().current_game, 1);
}

#[test]
fn match_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();

    let state = {
        let repo = FileStateRepository::new(dir.path()).unwrap();
        let mut board = Scoreboard::builder(repo).build();
        board.update_settings(15, 5).unwrap();
        board.update_team_names("casa", "visita");
        board.add_score(Team::A, 15).unwrap();
        board.add_score(Team::B, 6).unwrap();
        board.add_score(Team::B, 3).unwrap();
        board.state().clone()
    };

    let repo = FileStateRepository::new(dir.path()).unwrap();
    let board = Scoreboard::builder(repo).build();

    assert_eq!(board.state(), &state);
    assert_eq!(board.state().side_b.history, vec![0, 6]);
    assert_eq!(board.view().formatted_previous(Team::B), "06");
}

#[test]
fn corrupt_record_starts_fresh_and_is_overwritten() {
    let repo = Arc::new(InMemoryStateRepo::with_record(
        DEFAULT_STORAGE_KEY,
        "not json at all",
    ));
    let mut board = Scoreboard::builder(Arc::clone(&repo)).build();

    assert_eq!(board.state(), &MatchState::default());

    board.add_score(Team::A, 1).unwrap();
    let payload = repo.load(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    assert!(payload.contains("\"scoreA\":1"));
}

#[test]
fn legacy_record_with_missing_fields_loads_with_defaults() {
    let repo = InMemoryStateRepo::with_record(
        "placar",
        r#"{"scoreA": 7, "scoreB": 4, "winsA": 1, "currentGame": 2, "teamAName": "NÓS"}"#,
    );
    let config = RuntimeConfig {
        storage_key: "placar".to_string(),
        ..RuntimeConfig::default()
    };
    let board = Scoreboard::builder(repo).config(config).build();

    let state = board.state();
    assert_eq!(state.score(Team::A), 7);
    assert!(state.side_a.history.is_empty());
    assert_eq!(state.config.point_limit, 12);
    assert_eq!(state.config.max_games, 3);
    assert_eq!(board.view().team_name(Team::B), "TIME B");
    assert_eq!(state.winner, None);
}

#[test]
fn record_with_exhausted_counters_starts_fresh() {
    for payload in [
        r#"{"currentGame": 4294967295}"#,
        r#"{"winsA": 4294967295, "matchWinner": null}"#,
    ] {
        let repo = InMemoryStateRepo::with_record(DEFAULT_STORAGE_KEY, payload);
        let mut board = Scoreboard::builder(repo).build();
        assert_eq!(board.state(), &MatchState::default(), "{payload}");

        let outcome = board.add_score(Team::A, 12).unwrap();
        assert_eq!(outcome.game_winner(), Some(Team::A));
        assert_eq!(board.state().current_game, 2);
    }
}
