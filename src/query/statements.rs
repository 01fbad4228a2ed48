//! Statements for the four read operations.
//!
//! Select lists cast columns to fixed types so decoding does not depend on how
//! the loader typed the underlying tables: ids are `bigint`, counting stats are
//! `int`, minutes and averages are `double precision`, dates are `date`.

use sqlx::{Postgres, QueryBuilder};

use super::filter::{FilterSet, Predicate};
use crate::domain::{AggregateCriteria, GameLogCriteria, GamesCriteria, PlayerSearchCriteria};

const FULL_NAME: &str = "(first_name || ' ' || last_name)";

/// Games for a team, newest first
pub fn games_statement(criteria: &GamesCriteria) -> QueryBuilder<'static, Postgres> {
    let mut filters = FilterSet::new();
    filters
        .and_some(criteria.team_id, |id| {
            Predicate::either_eq("home_team_id", "away_team_id", id)
        })
        .and_some(criteria.team_name.clone(), |name| {
            Predicate::either_eq("home_team_name", "away_team_name", name)
        })
        .and_some(criteria.season, |season| {
            Predicate::within("game_date", season.window())
        });

    let mut qb = QueryBuilder::new(
        r#"
        SELECT
            game_id::bigint AS game_id,
            game_date::date AS game_date,
            game_type,
            home_team_id::bigint AS home_team_id,
            home_team_name,
            home_score::int AS home_score,
            away_team_id::bigint AS away_team_id,
            away_team_name,
            away_score::int AS away_score
        FROM games"#,
    );
    filters.push_where(&mut qb);
    // Qualified so the sort uses the stored value, not the `::date` output alias
    qb.push(" ORDER BY games.game_date DESC, games.game_id DESC LIMIT ")
        .push_bind(criteria.limit);
    qb
}

/// Last-N versus full-window averages in a single pass.
///
/// Every game in the filtered window is ranked by recency. The recent
/// aggregates average the rows flagged `recent` (rank <= last_n); the season
/// aggregates average all rows. `HAVING` turns "no games" into zero rows.
pub fn player_aggregate_statement(
    criteria: &AggregateCriteria,
) -> QueryBuilder<'static, Postgres> {
    let mut filters = FilterSet::new();
    filters
        .and(Predicate::eq("ps.person_id", criteria.person_id))
        .and_some(criteria.season, |season| {
            Predicate::within("ps.game_date", season.window())
        });

    let mut qb = QueryBuilder::new(
        r#"
        WITH ranked AS (
            SELECT
                ps.person_id,
                (p.first_name || ' ' || p.last_name) AS player_name,
                ps.points,
                ps.assists,
                ps.rebounds_total AS rebounds,
                (ps.points + ps.assists + ps.rebounds_total) AS pra,
                ROW_NUMBER() OVER (
                    PARTITION BY ps.person_id
                    ORDER BY ps.game_date DESC, ps.game_id DESC
                ) <= "#,
    );
    qb.push_bind(criteria.last_n);
    qb.push(
        r#" AS recent
            FROM player_statistics ps
            JOIN players p ON p.person_id = ps.person_id"#,
    );
    filters.push_where(&mut qb);
    qb.push(
        r#"
        )
        SELECT
            MAX(person_id)::bigint AS person_id,
            MAX(player_name) AS player_name,
            COUNT(*)::bigint AS games_played,
            COUNT(*) FILTER (WHERE recent)::bigint AS last_n_games,
            (AVG(points) FILTER (WHERE recent))::double precision AS last_n_pts,
            (AVG(rebounds) FILTER (WHERE recent))::double precision AS last_n_reb,
            (AVG(assists) FILTER (WHERE recent))::double precision AS last_n_ast,
            (AVG(pra) FILTER (WHERE recent))::double precision AS last_n_pra,
            AVG(points)::double precision AS season_pts,
            AVG(rebounds)::double precision AS season_reb,
            AVG(assists)::double precision AS season_ast,
            AVG(pra)::double precision AS season_pra
        FROM ranked
        HAVING COUNT(*) > 0"#,
    );
    qb
}

/// Box score lines for one player, newest first, offset-paginated
pub fn game_logs_statement(criteria: &GameLogCriteria) -> QueryBuilder<'static, Postgres> {
    let mut filters = FilterSet::new();
    filters
        .and(Predicate::eq("ps.person_id", criteria.person_id))
        .and_some(criteria.season, |season| {
            Predicate::within("ps.game_date", season.window())
        })
        .and_some(criteria.opponent.clone(), |opp| {
            Predicate::eq("ps.opponent_team_name", opp)
        })
        .and_some(criteria.home, |home| Predicate::eq("ps.home", home))
        .and_some(criteria.game_type.clone(), |gt| Predicate::eq("ps.game_type", gt));

    let mut qb = QueryBuilder::new(
        r#"
        SELECT
            ps.game_id::bigint AS game_id,
            ps.game_date::date AS game_date,
            ps.player_team_name AS team,
            ps.opponent_team_name AS opp,
            ps.home::boolean AS is_home,
            ps.game_type,
            ps.points::int AS points,
            ps.assists::int AS assists,
            ps.rebounds_total::int AS rebounds,
            (ps.points + ps.assists + ps.rebounds_total)::int AS pra,
            ps.three_pointers_made::int AS tpm,
            ps.field_goals_attempted::int AS fga,
            ps.field_goals_made::int AS fgm,
            ps.free_throws_attempted::int AS fta,
            ps.free_throws_made::int AS ftm,
            ps.plus_minus_points::int AS plus_minus,
            ps.num_minutes::double precision AS minutes
        FROM player_statistics ps"#,
    );
    filters.push_where(&mut qb);
    qb.push(" ORDER BY ps.game_date DESC, ps.game_id DESC LIMIT ")
        .push_bind(criteria.limit)
        .push(" OFFSET ")
        .push_bind(criteria.offset);
    qb
}

/// Case-insensitive substring search on "first last"
pub fn player_search_statement(
    criteria: &PlayerSearchCriteria,
) -> QueryBuilder<'static, Postgres> {
    let mut filters = FilterSet::new();
    filters.and(
        Predicate::new()
            .sql(FULL_NAME)
            .sql(" ILIKE ")
            .bind(like_substring_pattern(&criteria.text))
            .sql(" ESCAPE '\\'"),
    );

    let mut qb = QueryBuilder::new(
        r#"
        SELECT
            person_id::bigint AS person_id,
            (first_name || ' ' || last_name) AS player_name
        FROM players"#,
    );
    filters.push_where(&mut qb);
    qb.push(" ORDER BY player_name, person_id LIMIT ")
        .push_bind(criteria.limit);
    qb
}

/// `%text%` with LIKE metacharacters escaped so the text matches literally
pub fn like_substring_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
