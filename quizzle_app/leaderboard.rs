use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use quizzle_types::{
    category::Category,
    errors::ApplicationError,
    leaderboard::{LeaderboardEntry, LeaderboardQuery, RankedEntry},
};

use crate::{app::AppBus, cqrs::queries::GetLeaderboard, queries_handlers::GetLeaderboardHandler};

pub const LEADERBOARD_TITLE: &str = "TOP 10 scores";
pub const LEADERBOARD_ERROR: &str = "Failed to fetch leaderboard data.";

/// The two tabs of the leaderboard screen. Both currently show the same rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeaderboardTab {
    #[default]
    All,
    You,
}

impl LeaderboardTab {
    pub fn title(&self) -> &'static str {
        match self {
            LeaderboardTab::All => "All",
            LeaderboardTab::You => "You",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaderboardStatus {
    Loading,
    Loaded(Vec<LeaderboardEntry>),
    Failed,
}

/// Identifies one issued query. Only the ticket of the latest query may
/// update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket {
    generation: u64,
    pub query: LeaderboardQuery,
}

#[derive(Debug)]
struct Inner {
    query: LeaderboardQuery,
    generation: u64,
    status: LeaderboardStatus,
    tab: LeaderboardTab,
}

pub struct LeaderboardViewModel {
    bus: Arc<AppBus>,
    inner: Mutex<Inner>,
}

impl LeaderboardViewModel {
    pub fn new(bus: Arc<AppBus>) -> Self {
        Self {
            bus,
            inner: Mutex::new(Inner {
                query: LeaderboardQuery::default(),
                generation: 0,
                status: LeaderboardStatus::Loading,
                tab: LeaderboardTab::All,
            }),
        }
    }

    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL_CATEGORIES
    }

    pub fn query(&self) -> LeaderboardQuery {
        self.lock().query
    }

    pub fn status(&self) -> LeaderboardStatus {
        self.lock().status.clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lock().status, LeaderboardStatus::Loading)
    }

    pub fn has_error(&self) -> bool {
        matches!(self.lock().status, LeaderboardStatus::Failed)
    }

    pub fn tab(&self) -> LeaderboardTab {
        self.lock().tab
    }

    pub fn select_tab(&self, tab: LeaderboardTab) {
        self.lock().tab = tab;
    }

    /// Ranked rows for the active tab. Empty while loading or after a failure.
    pub fn rows(&self) -> Vec<RankedEntry> {
        match &self.lock().status {
            LeaderboardStatus::Loaded(entries) => RankedEntry::rank_all(entries),
            LeaderboardStatus::Loading | LeaderboardStatus::Failed => Vec::new(),
        }
    }

    /// Reloads the active category.
    pub async fn refresh(&self) -> bool {
        let category_id = self.query().category_id;
        self.select_category(category_id).await
    }

    /// Switches to `category_id` and fetches its leaderboard. Selecting the
    /// active category again re-issues the query.
    ///
    /// Returns `false` when a newer selection superseded this one before the
    /// response arrived.
    pub async fn select_category(&self, category_id: u32) -> bool {
        let ticket = self.begin(category_id);
        let result = self
            .bus
            .query(
                GetLeaderboard {
                    query: ticket.query,
                },
                GetLeaderboardHandler::new(),
            )
            .await;
        self.complete(ticket, result)
    }

    /// Marks a new query as the latest one and drops the current rows.
    pub fn begin(&self, category_id: u32) -> QueryTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.query = LeaderboardQuery::new(category_id);
        inner.status = LeaderboardStatus::Loading;

        QueryTicket {
            generation: inner.generation,
            query: inner.query,
        }
    }

    /// Applies the outcome of `ticket`'s query, unless a later query was
    /// issued in the meantime.
    pub fn complete(
        &self,
        ticket: QueryTicket,
        result: Result<Vec<LeaderboardEntry>, ApplicationError>,
    ) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            tracing::debug!(
                category = ticket.query.category_id,
                generation = ticket.generation,
                latest = inner.generation,
                "Discarding stale leaderboard response"
            );
            return false;
        }

        inner.status = match result {
            Ok(entries) => LeaderboardStatus::Loaded(entries),
            Err(e) => {
                tracing::error!(category = ticket.query.category_id, error = %e, "Failed to fetch leaderboard data");
                LeaderboardStatus::Failed
            }
        };
        true
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use quizzle_types::errors::QueryError;

    use super::*;
    use crate::test_utils::tests::{MockScoringService, MockServices};

    fn view_model(scoring: MockScoringService) -> (MockServices, LeaderboardViewModel) {
        let mocks = MockServices {
            scoring,
            ..Default::default()
        };
        let vm = LeaderboardViewModel::new(mocks.bus());
        (mocks, vm)
    }

    fn books() -> Vec<LeaderboardEntry> {
        vec![LeaderboardEntry::new("dana", 70)]
    }

    fn films() -> Vec<LeaderboardEntry> {
        vec![
            LeaderboardEntry::new("erin", 60),
            LeaderboardEntry::new("fay", 50),
        ]
    }

    #[test]
    fn test_starts_loading_all_categories() {
        let (_, vm) = view_model(MockScoringService::new());

        assert_eq!(vm.query(), LeaderboardQuery::new(0));
        assert!(vm.is_loading());
        assert!(vm.rows().is_empty());
        assert_eq!(vm.categories().len(), 11);
    }

    #[tokio::test]
    async fn test_rows_are_ranked_in_service_order() {
        let scoring = MockScoringService::new().with_leaderboard(
            0,
            vec![
                LeaderboardEntry::new("bob", 90),
                LeaderboardEntry::new("carl", 80),
            ],
        );
        let (_, vm) = view_model(scoring);

        assert!(vm.refresh().await);

        let rows = vm.rows();
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].username, "bob");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].username, "carl");
        assert!(!vm.is_loading());
        assert!(!vm.has_error());
    }

    #[tokio::test]
    async fn test_category_is_always_sent() {
        let scoring = MockScoringService::new();
        let (mocks, vm) = view_model(scoring);

        vm.refresh().await;
        vm.select_category(11).await;

        assert_eq!(
            mocks.scoring.queries(),
            vec![LeaderboardQuery::new(0), LeaderboardQuery::new(11)]
        );
    }

    #[test]
    fn test_out_of_order_response_is_discarded() {
        let (_, vm) = view_model(MockScoringService::new());

        let first = vm.begin(10);
        let second = vm.begin(11);

        assert!(vm.complete(second, Ok(films())));
        assert!(!vm.complete(first, Ok(books())));

        assert_eq!(vm.status(), LeaderboardStatus::Loaded(films()));
        assert_eq!(vm.query(), LeaderboardQuery::new(11));
    }

    #[test]
    fn test_stale_error_does_not_clobber_newer_rows() {
        let (_, vm) = view_model(MockScoringService::new());

        let first = vm.begin(10);
        let second = vm.begin(11);
        vm.complete(second, Ok(films()));
        vm.complete(first, Err(QueryError::Status(500).into()));

        assert!(!vm.has_error());
        assert_eq!(vm.rows().len(), 2);
    }

    #[tokio::test]
    async fn test_slow_earlier_query_loses_the_race() {
        let scoring = MockScoringService::new()
            .with_leaderboard(10, books())
            .with_leaderboard(11, films())
            .with_query_delay(10, Duration::from_millis(50));
        let (_, vm) = view_model(scoring);

        let (first, second) = tokio::join!(vm.select_category(10), async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            vm.select_category(11).await
        });

        assert!(!first);
        assert!(second);
        assert_eq!(vm.status(), LeaderboardStatus::Loaded(films()));
    }

    #[tokio::test]
    async fn test_new_selection_clears_previous_rows() {
        let scoring = MockScoringService::new().with_leaderboard(10, books());
        let (_, vm) = view_model(scoring);
        vm.select_category(10).await;
        assert_eq!(vm.rows().len(), 1);

        vm.begin(11);

        assert!(vm.is_loading());
        assert!(vm.rows().is_empty());
    }

    #[tokio::test]
    async fn test_error_then_retry_by_reselecting() {
        let scoring = MockScoringService::new()
            .with_leaderboard(12, books())
            .with_query_error(12, QueryError::Transport("offline".to_string()));
        let (mocks, vm) = view_model(scoring);

        vm.select_category(12).await;
        assert!(vm.has_error());
        assert!(vm.rows().is_empty());

        mocks.scoring.clear_query_error(12);
        vm.select_category(12).await;

        assert!(!vm.has_error());
        assert_eq!(vm.rows().len(), 1);
    }

    #[tokio::test]
    async fn test_tabs_share_the_same_rows() {
        let scoring = MockScoringService::new().with_leaderboard(0, films());
        let (_, vm) = view_model(scoring);
        vm.refresh().await;

        let all = vm.rows();
        vm.select_tab(LeaderboardTab::You);

        assert_eq!(vm.tab().title(), "You");
        assert_eq!(vm.rows(), all);
    }
}
