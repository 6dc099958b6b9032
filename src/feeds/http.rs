use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT},
    Client,
};
use serde_json::Value;

use crate::{cli::types::Season, core::http::maybe_bearer_header_map, Result};


/// League-wide player game log endpoint.
pub const LEAGUE_GAMELOG_URL: &str = "https://stats.nba.com/stats/leaguegamelog";

/// Default prop-line feed.
pub const DEFAULT_PROPS_FEED_URL: &str = "https://api.props.cash/nba/lines";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FEED_USER_AGENT: &str = "Mozilla/5.0 (compatible; OddsFetcher/1.0)";

pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?)
}

/// The stats API rejects requests without browser-like headers.
pub fn stats_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    h.insert("x-nba-stats-token", HeaderValue::from_static("true"));
    h
}

/// Query parameters for one regular season's player game log.
pub fn league_gamelog_params(season: Season) -> Vec<(&'static str, String)> {
    vec![
        ("Counter", "0".to_string()),
        ("DateFrom", String::new()),
        ("DateTo", String::new()),
        ("Direction", "DESC".to_string()),
        ("LeagueID", "00".to_string()),
        ("PlayerOrTeam", "P".to_string()),
        ("Season", season.to_string()),
        ("SeasonType", "Regular Season".to_string()),
        ("Sorter", "DATE".to_string()),
    ]
}

pub async fn get_league_gamelog(client: &Client, url: &str, season: Season) -> Result<Value> {
    let res = client
        .get(url)
        .headers(stats_headers())
        .query(&league_gamelog_params(season))
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

pub async fn get_prop_lines(client: &Client, url: &str, token: Option<&str>) -> Result<Value> {
    let mut headers = maybe_bearer_header_map(token)?.unwrap_or_default();
    headers.insert(USER_AGENT, HeaderValue::from_static(FEED_USER_AGENT));

    let res = client
        .get(url)
        .headers(headers)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
