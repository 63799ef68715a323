#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use quizzle_types::{
        common::{TOKEN_KEY, USERNAME_KEY},
        errors::{ApplicationError, AuthError, IdentityError, QueryError, SubmissionError},
        leaderboard::{LeaderboardEntry, LeaderboardQuery},
        scoring::{ScoreSubmission, ScoreSubmissionResult},
    };

    use crate::{
        app::AppBus,
        config::Config,
        repository::{AuthService, IdentityRepository, ScoringService},
        services::ServiceProvider,
    };

    #[derive(Default, Clone)]
    pub struct MockIdentityRepository {
        values: Arc<Mutex<HashMap<String, String>>>,
        broken: Arc<Mutex<bool>>,
        reads: Arc<Mutex<usize>>,
    }

    impl MockIdentityRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_username(self, username: &str) -> Self {
            self.values
                .lock()
                .unwrap()
                .insert(USERNAME_KEY.to_string(), username.to_string());
            self
        }

        /// Every read and write fails with a storage error.
        pub fn broken(self) -> Self {
            *self.broken.lock().unwrap() = true;
            self
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        pub fn token(&self) -> Option<String> {
            self.value(TOKEN_KEY)
        }

        pub fn reads(&self) -> usize {
            *self.reads.lock().unwrap()
        }
    }

    #[async_trait]
    impl IdentityRepository for MockIdentityRepository {
        async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
            *self.reads.lock().unwrap() += 1;
            if *self.broken.lock().unwrap() {
                return Err(IdentityError::Storage("storage unavailable".to_string()).into());
            }
            Ok(self.value(key))
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
            if *self.broken.lock().unwrap() {
                return Err(IdentityError::Storage("storage unavailable".to_string()).into());
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockScoringService {
        submissions: Arc<Mutex<Vec<ScoreSubmission>>>,
        submit_error: Arc<Mutex<Option<SubmissionError>>>,
        submit_result: Arc<Mutex<ScoreSubmissionResult>>,
        submit_delay: Arc<Mutex<Option<Duration>>>,
        queries: Arc<Mutex<Vec<LeaderboardQuery>>>,
        leaderboards: Arc<Mutex<HashMap<u32, Vec<LeaderboardEntry>>>>,
        query_errors: Arc<Mutex<HashMap<u32, QueryError>>>,
        query_delays: Arc<Mutex<HashMap<u32, Duration>>>,
    }

    impl MockScoringService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_submit_result(self, result: ScoreSubmissionResult) -> Self {
            *self.submit_result.lock().unwrap() = result;
            self
        }

        pub fn with_submit_error(self, error: SubmissionError) -> Self {
            *self.submit_error.lock().unwrap() = Some(error);
            self
        }

        pub fn with_submit_delay(self, delay: Duration) -> Self {
            *self.submit_delay.lock().unwrap() = Some(delay);
            self
        }

        pub fn with_leaderboard(self, category_id: u32, entries: Vec<LeaderboardEntry>) -> Self {
            self.leaderboards
                .lock()
                .unwrap()
                .insert(category_id, entries);
            self
        }

        pub fn with_query_error(self, category_id: u32, error: QueryError) -> Self {
            self.query_errors
                .lock()
                .unwrap()
                .insert(category_id, error);
            self
        }

        pub fn clear_query_error(&self, category_id: u32) {
            self.query_errors.lock().unwrap().remove(&category_id);
        }

        pub fn with_query_delay(self, category_id: u32, delay: Duration) -> Self {
            self.query_delays
                .lock()
                .unwrap()
                .insert(category_id, delay);
            self
        }

        pub fn submissions(&self) -> Vec<ScoreSubmission> {
            self.submissions.lock().unwrap().clone()
        }

        pub fn queries(&self) -> Vec<LeaderboardQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScoringService for MockScoringService {
        async fn submit(
            &self,
            submission: &ScoreSubmission,
        ) -> Result<ScoreSubmissionResult, ApplicationError> {
            self.submissions.lock().unwrap().push(submission.clone());

            let delay = *self.submit_delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let error = self.submit_error.lock().unwrap().clone();
            if let Some(error) = error {
                return Err(error.into());
            }
            Ok(*self.submit_result.lock().unwrap())
        }

        async fn query(
            &self,
            query: LeaderboardQuery,
        ) -> Result<Vec<LeaderboardEntry>, ApplicationError> {
            self.queries.lock().unwrap().push(query);

            let delay = self
                .query_delays
                .lock()
                .unwrap()
                .get(&query.category_id)
                .copied();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let error = self
                .query_errors
                .lock()
                .unwrap()
                .get(&query.category_id)
                .cloned();
            if let Some(error) = error {
                return Err(error.into());
            }

            Ok(self
                .leaderboards
                .lock()
                .unwrap()
                .get(&query.category_id)
                .cloned()
                .unwrap_or_default())
        }
    }

    #[derive(Default, Clone)]
    pub struct MockAuthService {
        accounts: Arc<Mutex<HashMap<String, (String, String)>>>,
        logins: Arc<Mutex<Vec<String>>>,
    }

    impl MockAuthService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_account(self, username: &str, password: &str, token: &str) -> Self {
            self.accounts.lock().unwrap().insert(
                username.to_string(),
                (password.to_string(), token.to_string()),
            );
            self
        }

        pub fn logins(&self) -> Vec<String> {
            self.logins.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuthService for MockAuthService {
        async fn login(&self, username: &str, password: &str) -> Result<String, ApplicationError> {
            self.logins.lock().unwrap().push(username.to_string());

            match self.accounts.lock().unwrap().get(username) {
                Some((expected, token)) if expected == password => Ok(token.clone()),
                _ => Err(AuthError::Rejected("Invalid credentials".to_string()).into()),
            }
        }
    }

    #[derive(Default, Clone)]
    pub struct MockServices {
        pub identity: MockIdentityRepository,
        pub scoring: MockScoringService,
        pub auth: MockAuthService,
    }

    impl MockServices {
        /// An [`AppBus`] wired to these fakes.
        pub fn bus(&self) -> Arc<AppBus> {
            let config = Arc::new(Config::new("http://localhost:3000", "unused.json"));
            Arc::new(AppBus::new(config, Arc::new(self.clone())))
        }
    }

    impl ServiceProvider for MockServices {
        fn identity(&self) -> Arc<dyn IdentityRepository> {
            Arc::new(self.identity.clone())
        }

        fn scoring(&self) -> Arc<dyn ScoringService> {
            Arc::new(self.scoring.clone())
        }

        fn auth(&self) -> Arc<dyn AuthService> {
            Arc::new(self.auth.clone())
        }
    }
}
