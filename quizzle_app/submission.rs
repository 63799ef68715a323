use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use uuid::Uuid;

use quizzle_types::{
    common::{GameResult, Identity},
    errors::{ApplicationError, IdentityError},
    scoring::{ScoreSubmission, ScoreSubmissionResult},
};

use crate::{
    achievement::AchievementState,
    app::AppBus,
    command_handlers::SubmitScoreCommandHandler,
    cqrs::{commands::SubmitScore, queries::GetIdentity},
    queries_handlers::GetIdentityHandler,
};

/// User-facing notice shown when the workflow gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    UsernameNotFound,
    IdentityUnavailable,
    SubmissionFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::UsernameNotFound => "Username not found",
            Notice::IdentityUnavailable => "An error occurred while fetching the username",
            Notice::SubmissionFailed => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing known yet.
    Idle,
    /// At least one input is known and the rest is pending: the identity,
    /// the game result, or both.
    AwaitingIdentity,
    /// The request is in flight. Never left except for `Derived` or `Failed`.
    Submitting(ScoreSubmission),
    Derived {
        result: ScoreSubmissionResult,
        achievement: Option<AchievementState>,
    },
    Failed(Notice),
}

impl SubmissionState {
    fn accepts_inputs(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::AwaitingIdentity)
    }
}

/// Snapshot of what the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub points: Option<u32>,
    pub loading: bool,
    pub achievement: Option<AchievementState>,
    pub notice: Option<Notice>,
}

impl ResultView {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Game ended".to_string()];
        if let Some(points) = self.points {
            lines.push(format!("You got {points} points!"));
        }
        if self.loading {
            lines.push("Saving your score...".to_string());
        }
        if let Some(achievement) = self.achievement {
            lines.push(achievement.message());
        }
        if let Some(notice) = self.notice {
            lines.push(notice.message().to_string());
        }
        lines
    }
}

#[derive(Debug)]
struct Inner {
    state: SubmissionState,
    game: Option<GameResult>,
    identity: Option<Identity>,
    lookup_started: bool,
}

/// Drives a single finished game through identity lookup, score submission
/// and achievement derivation.
///
/// Inputs may arrive in any order and any number of times; the transition to
/// `Submitting` happens once, under the state lock, as soon as both the game
/// result and the identity are known. A failed game stays failed.
pub struct SubmissionController {
    game_id: Uuid,
    bus: Arc<AppBus>,
    inner: Mutex<Inner>,
}

impl SubmissionController {
    pub fn new(bus: Arc<AppBus>) -> Self {
        Self {
            game_id: Uuid::new_v4(),
            bus,
            inner: Mutex::new(Inner {
                state: SubmissionState::Idle,
                game: None,
                identity: None,
                lookup_started: false,
            }),
        }
    }

    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// Convenience for the usual flow: record the game and look up who
    /// played it.
    pub async fn run(&self, result: GameResult) -> SubmissionState {
        self.game_over(result).await;
        self.resolve_identity().await
    }

    /// Records the finished game. Only the first result of this game
    /// instance is kept.
    pub async fn game_over(&self, result: GameResult) -> SubmissionState {
        {
            let mut inner = self.lock();
            let known = inner.game;
            match known {
                None => {
                    inner.game = Some(result);
                    if inner.state == SubmissionState::Idle {
                        inner.state = SubmissionState::AwaitingIdentity;
                    }
                }
                Some(existing) if existing != result => {
                    tracing::warn!(
                        game_id = %self.game_id,
                        "Ignoring a second, different result for the same game"
                    );
                }
                Some(_) => {}
            }
        }
        self.advance().await
    }

    /// Same as [`SubmissionController::game_over`], reading the raw
    /// navigation parameters. Incomplete parameters are not an error, the
    /// controller simply keeps waiting.
    pub async fn game_params(&self, params: &HashMap<String, String>) -> SubmissionState {
        match GameResult::from_params(params) {
            Some(result) => self.game_over(result).await,
            None => {
                tracing::debug!(game_id = %self.game_id, "Game parameters incomplete");
                self.state()
            }
        }
    }

    /// Reads the username from the identity store. The lookup runs at most
    /// once per game, and not at all once an identity was handed in.
    pub async fn resolve_identity(&self) -> SubmissionState {
        {
            let mut inner = self.lock();
            if inner.lookup_started
                || inner.identity.is_some()
                || !inner.state.accepts_inputs()
            {
                return inner.state.clone();
            }
            inner.lookup_started = true;
            if inner.state == SubmissionState::Idle {
                inner.state = SubmissionState::AwaitingIdentity;
            }
        }

        match self.bus.query(GetIdentity, GetIdentityHandler::new()).await {
            Ok(identity) => self.identity_resolved(identity).await,
            Err(ApplicationError::Identity(IdentityError::NotFound)) => {
                tracing::warn!(game_id = %self.game_id, "Username not found in storage");
                self.fail(Notice::UsernameNotFound)
            }
            Err(e) => {
                tracing::error!(game_id = %self.game_id, error = %e, "Error fetching username from storage");
                self.fail(Notice::IdentityUnavailable)
            }
        }
    }

    /// Records the identity of the player.
    pub async fn identity_resolved(&self, identity: Identity) -> SubmissionState {
        {
            let mut inner = self.lock();
            if inner.identity.is_none() {
                inner.identity = Some(identity);
                if inner.state == SubmissionState::Idle {
                    inner.state = SubmissionState::AwaitingIdentity;
                }
            }
        }
        self.advance().await
    }

    pub fn view(&self) -> ResultView {
        let inner = self.lock();
        let (loading, achievement, notice) = match &inner.state {
            SubmissionState::Submitting(_) => (true, None, None),
            SubmissionState::Derived { achievement, .. } => (false, *achievement, None),
            SubmissionState::Failed(notice) => (false, None, Some(*notice)),
            SubmissionState::Idle | SubmissionState::AwaitingIdentity => (false, None, None),
        };

        ResultView {
            points: inner.game.map(|g| g.points),
            loading,
            achievement,
            notice,
        }
    }

    async fn advance(&self) -> SubmissionState {
        let Some(submission) = self.try_begin_submission() else {
            return self.state();
        };

        let outcome = self
            .bus
            .execute(SubmitScore { submission }, SubmitScoreCommandHandler::new())
            .await;

        let mut inner = self.lock();
        inner.state = match outcome {
            Ok(result) => {
                let achievement = AchievementState::derive(&result);
                tracing::info!(game_id = %self.game_id, ?achievement, "Score submitted");
                SubmissionState::Derived {
                    result,
                    achievement,
                }
            }
            Err(e) => {
                tracing::error!(game_id = %self.game_id, error = %e, "Could not save leaderboard points");
                SubmissionState::Failed(Notice::SubmissionFailed)
            }
        };
        inner.state.clone()
    }

    /// The only way into `Submitting`.
    fn try_begin_submission(&self) -> Option<ScoreSubmission> {
        let mut inner = self.lock();
        if !inner.state.accepts_inputs() {
            return None;
        }

        let game = inner.game?;
        let submission = ScoreSubmission::new(inner.identity.as_ref()?, &game);
        inner.state = SubmissionState::Submitting(submission.clone());
        Some(submission)
    }

    /// Identity failures only stick while no identity is known.
    fn fail(&self, notice: Notice) -> SubmissionState {
        let mut inner = self.lock();
        if inner.state.accepts_inputs() && inner.identity.is_none() {
            inner.state = SubmissionState::Failed(notice);
        }
        inner.state.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
