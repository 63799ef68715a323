use async_trait::async_trait;
use std::sync::Arc;

use quizzle_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetLeaderboard},
    services::ServiceProvider,
};

pub struct GetLeaderboardHandler {}

impl GetLeaderboardHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetLeaderboard> for GetLeaderboardHandler {
    async fn handle(
        &self,
        query: GetLeaderboard,
        services: &Arc<dyn ServiceProvider>,
        _config: &Arc<Config>,
    ) -> Result<<GetLeaderboard as Query>::Output, ApplicationError> {
        tracing::debug!(category = query.query.category_id, "Fetching leaderboard");
        services.scoring().query(query.query).await
    }
}

#[cfg(test)]
mod tests {
    use quizzle_types::{
        errors::QueryError,
        leaderboard::{LeaderboardEntry, LeaderboardQuery},
    };

    use super::*;
    use crate::test_utils::tests::{MockScoringService, MockServices};

    #[tokio::test]
    async fn test_get_leaderboard_keeps_service_order() -> Result<(), ApplicationError> {
        let entries = vec![
            LeaderboardEntry::new("bob", 90),
            LeaderboardEntry::new("carl", 80),
        ];
        let scoring = MockScoringService::new().with_leaderboard(0, entries.clone());
        let mocks = MockServices {
            scoring: scoring.clone(),
            ..Default::default()
        };

        let result = mocks
            .bus()
            .query(
                GetLeaderboard {
                    query: LeaderboardQuery::new(0),
                },
                GetLeaderboardHandler::new(),
            )
            .await?;

        assert_eq!(result, entries);
        assert_eq!(scoring.queries(), vec![LeaderboardQuery::new(0)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_leaderboard_error() {
        let scoring = MockScoringService::new().with_query_error(11, QueryError::Status(503));
        let mocks = MockServices {
            scoring,
            ..Default::default()
        };

        let result = mocks
            .bus()
            .query(
                GetLeaderboard {
                    query: LeaderboardQuery::new(11),
                },
                GetLeaderboardHandler::new(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Query(QueryError::Status(503)))
        ));
    }
}
