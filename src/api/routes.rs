use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // Read-only API, open to any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // System endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_handler))
        // Game endpoints
        .route("/games", get(handlers::get_games))
        // Player endpoints
        .route("/players/agg", get(handlers::get_player_aggregate))
        .route("/players/gamelogs", get(handlers::get_player_game_logs))
        .route("/players/search", get(handlers::search_players))
        // Add state, CORS and request tracing
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::domain::repository::MockStatsRepository;
    use crate::domain::{GameLogRecord, PlayerAggregate};
    use crate::error::StatsError;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(repo: MockStatsRepository) -> Router {
        create_router(AppState::new(Arc::new(repo), &ApiConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");
        let response = app.oneshot(request).await.expect("router request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let body = serde_json::from_slice(&bytes).expect("response was not JSON");
        (status, body)
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let (status, body) = get(app(MockStatsRepository::new()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "NBA Stats API is running" }));
    }

    #[tokio::test]
    async fn test_games_without_team_is_structured_error() {
        let mut repo = MockStatsRepository::new();
        repo.expect_games().never();

        let (status, body) = get(app(repo), "/games?season=2024").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "error": "Provide team_id or team_name" }));
    }

    #[tokio::test]
    async fn test_malformed_query_is_unprocessable() {
        let mut repo = MockStatsRepository::new();
        repo.expect_player_aggregate().never();

        let (status, body) = get(app(repo), "/players/agg?person_id=abc").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_required_param_is_unprocessable() {
        let (status, _) = get(app(MockStatsRepository::new()), "/players/search").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_aggregate_without_games_is_empty_object() {
        let mut repo = MockStatsRepository::new();
        repo.expect_player_aggregate().returning(|_| Ok(None));

        let (status, body) = get(app(repo), "/players/agg?person_id=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_aggregate_found() {
        let mut repo = MockStatsRepository::new();
        repo.expect_player_aggregate()
            .withf(|c| c.person_id == 201939 && c.last_n == 2)
            .returning(|_| {
                Ok(Some(PlayerAggregate {
                    person_id: 201939,
                    player_name: Some("Stephen Curry".into()),
                    games_played: 3,
                    last_n_games: 2,
                    last_n_pts: Some(25.0),
                    last_n_reb: Some(5.0),
                    last_n_ast: Some(6.0),
                    last_n_pra: Some(36.0),
                    season_pts: Some(20.0),
                    season_reb: Some(5.0),
                    season_ast: Some(6.0),
                    season_pra: Some(31.0),
                }))
            });

        let (status, body) = get(app(repo), "/players/agg?person_id=201939&last_n=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["last_n_pts"], json!(25.0));
        assert_eq!(body["season_pts"], json!(20.0));
    }

    #[tokio::test]
    async fn test_game_logs_filters_parse() {
        let mut repo = MockStatsRepository::new();
        repo.expect_player_game_logs()
            .withf(|c| {
                c.home == Some(false)
                    && c.opponent.as_deref() == Some("Lakers")
                    && c.game_type.as_deref() == Some("Regular Season")
                    && c.season.map(|s| s.start_year()) == Some(2023)
            })
            .returning(|_| {
                Ok(vec![GameLogRecord {
                    game_id: 22300061,
                    game_date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
                    team: Some("Warriors".into()),
                    opp: Some("Lakers".into()),
                    is_home: Some(false),
                    game_type: Some("Regular Season".into()),
                    points: Some(30),
                    assists: Some(6),
                    rebounds: Some(5),
                    pra: Some(41),
                    tpm: Some(5),
                    fga: Some(21),
                    fgm: Some(11),
                    fta: Some(4),
                    ftm: Some(3),
                    plus_minus: Some(-4),
                    minutes: Some(35.5),
                }])
            });

        let (status, body) = get(
            app(repo),
            "/players/gamelogs?person_id=201939&season=2023&opponent=Lakers&home=false&game_type=Regular%20Season",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["pra"], json!(41));
        assert_eq!(body[0]["game_date"], json!("2023-10-24"));
    }

    #[tokio::test]
    async fn test_home_flag_accepts_numeric_and_word_forms() {
        let mut repo = MockStatsRepository::new();
        repo.expect_player_game_logs()
            .withf(|c| c.home == Some(true))
            .times(1)
            .returning(|_| Ok(vec![]));
        let (status, body) = get(app(repo), "/players/gamelogs?person_id=1&home=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let mut repo = MockStatsRepository::new();
        repo.expect_player_game_logs()
            .withf(|c| c.home == Some(false))
            .times(1)
            .returning(|_| Ok(vec![]));
        let (status, _) = get(app(repo), "/players/gamelogs?person_id=1&home=no").await;
        assert_eq!(status, StatusCode::OK);

        let mut repo = MockStatsRepository::new();
        repo.expect_player_game_logs().never();
        let (status, body) = get(app(repo), "/players/gamelogs?person_id=1&home=maybe").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_search_text_reaches_repository_untrimmed() {
        let mut repo = MockStatsRepository::new();
        repo.expect_search_players()
            .withf(|c| c.text == "Stephen ")
            .times(1)
            .returning(|_| Ok(vec![]));
        let (status, _) = get(app(repo), "/players/search?q=Stephen%20").await;
        assert_eq!(status, StatusCode::OK);

        let mut repo = MockStatsRepository::new();
        repo.expect_search_players()
            .withf(|c| c.text.is_empty())
            .times(1)
            .returning(|_| Ok(vec![]));
        let (status, body) = get(app(repo), "/players/search?q=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_database_failure_is_server_error() {
        let mut repo = MockStatsRepository::new();
        repo.expect_search_players()
            .returning(|_| Err(StatsError::Database(sqlx::Error::PoolTimedOut)));

        let (status, body) = get(app(repo), "/players/search?q=curry").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[tokio::test]
    async fn test_health_reports_database_state() {
        let mut repo = MockStatsRepository::new();
        repo.expect_ping().returning(|| Ok(()));
        let (status, body) = get(app(repo), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["db"], "connected");

        let mut repo = MockStatsRepository::new();
        repo.expect_ping()
            .returning(|| Err(StatsError::Database(sqlx::Error::PoolClosed)));
        let (status, body) = get(app(repo), "/health").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
    }
}
