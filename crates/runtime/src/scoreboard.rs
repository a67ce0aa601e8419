//! Scoreboard controller.
//!
//! The [`Scoreboard`] owns the single in-memory match, applies user events
//! through [`MatchEngine`], persists after every mutation and publishes
//! display refreshes and completion notices on the [`EventBus`].

use tokio::sync::broadcast;

use match_core::{GameOutcome, MatchEngine, MatchState, ScoreboardView, Team};

use crate::api::Result;
use crate::events::{DisplayEvent, Event, EventBus, MatchEvent, Mutation, Topic};
use crate::repository::{DEFAULT_STORAGE_KEY, PersistenceGateway, StateRepository};

/// Runtime configuration shared by the controller and its gateway.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Key of the saved match record.
    pub storage_key: String,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            event_buffer_size: 64,
        }
    }
}

/// Single owner of the match state.
///
/// Operations run to completion before returning; callers serialize user
/// events (one at a time) and may layer an
/// [`InputThrottle`](crate::throttle::InputThrottle) in front.
pub struct Scoreboard<R> {
    state: MatchState,
    gateway: PersistenceGateway<R>,
    events: EventBus,
}

impl<R: StateRepository> Scoreboard<R> {
    /// Create a new scoreboard builder
    pub fn builder(repository: R) -> ScoreboardBuilder<R> {
        ScoreboardBuilder::new(repository)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Snapshot for display consumers.
    pub fn view(&self) -> ScoreboardView {
        ScoreboardView::from_state(&self.state)
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    pub fn gateway(&self) -> &PersistenceGateway<R> {
        &self.gateway
    }

    /// Adds points to a side, persists, and announces any completed game.
    pub fn add_score(&mut self, team: Team, points: u32) -> Result<GameOutcome> {
        let outcome = MatchEngine::new(&mut self.state).add_score(team, points)?;
        self.commit(Mutation::ScoreAdded { team, points });
        self.announce(outcome);
        Ok(outcome)
    }

    /// Reverts the last scoring event of a side.
    ///
    /// Returns the restored score; `None` leaves the match untouched and
    /// nothing is saved or published.
    pub fn undo_score(&mut self, team: Team) -> Option<u32> {
        let restored = MatchEngine::new(&mut self.state).undo_score(team)?;
        self.commit(Mutation::ScoreUndone { team });
        Some(restored)
    }

    /// Re-evaluates the game in progress, e.g. after the point limit was
    /// lowered below a score already on the board.
    pub fn check_completion(&mut self) -> GameOutcome {
        let outcome = MatchEngine::new(&mut self.state).check_completion();
        if outcome != GameOutcome::NoWinner {
            self.commit(Mutation::GameCompleted);
            self.announce(outcome);
        }
        outcome
    }

    pub fn start_new_match(&mut self) {
        MatchEngine::new(&mut self.state).start_new_match();
        tracing::info!("Started new match");
        self.commit(Mutation::NewMatch);
    }

    /// Clears the current game's scores. Callers confirm with the user first.
    pub fn reset_game(&mut self) {
        MatchEngine::new(&mut self.state).reset_game();
        tracing::info!(game = self.state.current_game, "Reset current game");
        self.commit(Mutation::GameReset);
    }

    /// Clears scores, wins and the game counter. Callers confirm with the
    /// user first.
    pub fn reset_match(&mut self) {
        MatchEngine::new(&mut self.state).reset_match();
        tracing::info!("Reset match to game 1");
        self.commit(Mutation::MatchReset);
    }

    pub fn update_settings(&mut self, point_limit: u32, max_games: u32) -> Result<()> {
        MatchEngine::new(&mut self.state).update_settings(point_limit, max_games)?;
        tracing::debug!(point_limit, max_games, "Updated match settings");
        self.commit(Mutation::SettingsUpdated);
        Ok(())
    }

    pub fn update_team_names(&mut self, name_a: &str, name_b: &str) {
        MatchEngine::new(&mut self.state).update_team_names(name_a, name_b);
        self.commit(Mutation::NamesUpdated);
    }

    fn commit(&self, mutation: Mutation) {
        self.gateway.save(&self.state);
        self.events.publish(Event::Display(DisplayEvent {
            mutation,
            view: self.view(),
        }));
    }

    fn announce(&self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::NoWinner => {}
            GameOutcome::NextGame {
                winner,
                finished_game,
                next_game,
            } => {
                tracing::info!(
                    %winner,
                    finished_game,
                    next_game,
                    "Game finished, starting next game"
                );
                self.events.publish(Event::Match(MatchEvent::GameFinished {
                    winner,
                    finished_game,
                    next_game,
                }));
            }
            GameOutcome::MatchWon {
                winner,
                wins_a,
                wins_b,
            } => {
                let team_name = self.state.names.get(winner).to_string();
                tracing::info!(%winner, wins_a, wins_b, "{} won the match", team_name);
                self.events.publish(Event::Match(MatchEvent::MatchWon {
                    team: winner,
                    wins_a,
                    wins_b,
                    team_name,
                }));
            }
        }
    }
}

/// Builder for [`Scoreboard`] with flexible configuration.
pub struct ScoreboardBuilder<R> {
    repository: R,
    config: RuntimeConfig,
    state: Option<MatchState>,
    events: Option<EventBus>,
}

impl<R: StateRepository> ScoreboardBuilder<R> {
    fn new(repository: R) -> Self {
        Self {
            repository,
            config: RuntimeConfig::default(),
            state: None,
            events: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial match state instead of loading the saved one
    pub fn initial_state(mut self, state: MatchState) -> Self {
        self.state = Some(state);
        self
    }

    /// Share an existing event bus
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the scoreboard, restoring the saved match when there is one.
    pub fn build(self) -> Scoreboard<R> {
        let gateway = PersistenceGateway::with_key(self.repository, self.config.storage_key);

        let state = match self.state {
            Some(state) => state,
            None => gateway.load().unwrap_or_else(|| {
                tracing::info!(key = gateway.key(), "No saved match, starting with defaults");
                MatchState::default()
            }),
        };

        tracing::debug!(
            game = state.current_game,
            wins_a = state.side_a.wins,
            wins_b = state.side_b.wins,
            "Scoreboard ready"
        );

        Scoreboard {
            state,
            gateway,
            events: self
                .events
                .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size)),
        }
    }
}
