use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use streakcard_domain::{ActivityCalendar, ActivitySource, DomainError, RawActivityRecord};

use crate::http::HttpClient;

const GRAPHQL_PROVIDER: &str = "leetcode-graphql";
const REST_PROVIDER: &str = "leetcode-calendar-api";
const REFERER: &str = "https://leetcode.com";

const CALENDAR_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    submissionCalendar
  }
}
"#;

/// Submission calendar from the official LeetCode GraphQL endpoint
pub struct LeetCodeGraphQlSource {
    http: HttpClient,
    endpoint: Url,
}

/// Submission calendar from the community REST API
pub struct LeetCodeCalendarSource {
    http: HttpClient,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<GraphQlData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlData {
    matched_user: Option<CalendarHolder>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: String,
}

/// Object carrying `submissionCalendar`, either as a JSON-encoded string or inline
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarHolder {
    submission_calendar: Option<Value>,
}

impl CalendarHolder {
    fn into_calendar(self, provider: &str) -> Result<ActivityCalendar, DomainError> {
        match self.submission_calendar {
            Some(Value::String(raw)) => ActivityCalendar::from_json_str(&raw),
            Some(value @ Value::Object(_)) => ActivityCalendar::from_json_value(&value),
            Some(Value::Null) | None => Err(DomainError::MalformedCalendar(format!(
                "{}: missing submissionCalendar",
                provider
            ))),
            Some(other) => Err(DomainError::MalformedCalendar(format!(
                "{}: unexpected submissionCalendar {}",
                provider, other
            ))),
        }
    }
}

impl LeetCodeGraphQlSource {
    pub fn new(http: HttpClient, endpoint: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            endpoint: super::parse_base_url(endpoint, "LeetCode GraphQL")?,
        })
    }
}

#[async_trait]
impl ActivitySource for LeetCodeGraphQlSource {
    fn name(&self) -> &'static str {
        GRAPHQL_PROVIDER
    }

    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError> {
        debug!(provider = GRAPHQL_PROVIDER, username, "Fetching LeetCode calendar");

        let payload = json!({
            "query": CALENDAR_QUERY,
            "variables": { "username": username },
        });
        let request = self
            .http
            .post(self.endpoint.as_str())
            .header(header::REFERER, REFERER)
            .json(&payload);

        let body = self.http.send_for_text(request, GRAPHQL_PROVIDER).await?;

        parse_graphql_calendar(&body).map(RawActivityRecord::Calendar)
    }
}

impl LeetCodeCalendarSource {
    pub fn new(http: HttpClient, base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http,
            base_url: super::parse_base_url(base_url, "LeetCode calendar API")?,
        })
    }

    fn request_url(&self, username: &str) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DomainError::Infrastructure(format!(
                    "{}: base URL cannot be extended",
                    REST_PROVIDER
                ))
            })?
            .pop_if_empty()
            .push(username)
            .push("calendar");
        Ok(url)
    }
}

#[async_trait]
impl ActivitySource for LeetCodeCalendarSource {
    fn name(&self) -> &'static str {
        REST_PROVIDER
    }

    async fn fetch(&self, username: &str) -> Result<RawActivityRecord, DomainError> {
        let url = self.request_url(username)?;
        debug!(provider = REST_PROVIDER, username, "Fetching LeetCode calendar");

        let body = self
            .http
            .send_for_text(self.http.get(url.as_str()), REST_PROVIDER)
            .await?;

        parse_rest_calendar(&body).map(RawActivityRecord::Calendar)
    }
}

pub(crate) fn parse_graphql_calendar(body: &str) -> Result<ActivityCalendar, DomainError> {
    let response: GraphQlResponse = serde_json::from_str(body).map_err(|e| {
        DomainError::MalformedCalendar(format!("{}: invalid JSON: {}", GRAPHQL_PROVIDER, e))
    })?;

    if !response.errors.is_empty() {
        let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(DomainError::UpstreamUnavailable(format!(
            "{}: {}",
            GRAPHQL_PROVIDER,
            messages.join("; ")
        )));
    }

    response
        .data
        .and_then(|data| data.matched_user)
        .ok_or_else(|| {
            DomainError::UpstreamUnavailable(format!("{}: user not found", GRAPHQL_PROVIDER))
        })?
        .into_calendar(GRAPHQL_PROVIDER)
}

pub(crate) fn parse_rest_calendar(body: &str) -> Result<ActivityCalendar, DomainError> {
    let holder: CalendarHolder = serde_json::from_str(body).map_err(|e| {
        DomainError::MalformedCalendar(format!("{}: invalid JSON: {}", REST_PROVIDER, e))
    })?;
    holder.into_calendar(REST_PROVIDER)
}
