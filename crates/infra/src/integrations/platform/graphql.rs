//! GraphQL profile client
//!
//! Fetches the signed-in student's profile and normalizes the nested
//! response into a [`ProfileRecord`].
//!
//! Validation order matters: a non-OK status is a transport failure, a
//! populated `errors` list is a query failure (first message wins), and only
//! then is `data.user` required to hold exactly one row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use learnboard_core::charts::strongest_per_type;
use learnboard_core::ProfileSource;
use learnboard_domain::{
    GroupStatus, LearnboardError, ProfileRecord, ProjectGroup, Result, SkillEntry, XpTransaction,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::query::profile_query;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the platform's GraphQL endpoint
pub struct PlatformProfileClient {
    graphql_url: String,
    event_id: i64,
    http_client: HttpClient,
}

impl PlatformProfileClient {
    pub fn new(graphql_url: impl Into<String>, event_id: i64, http_client: HttpClient) -> Self {
        Self { graphql_url: graphql_url.into(), event_id, http_client }
    }

    /// POST the profile query and return the raw response envelope.
    async fn execute(&self, token: &str) -> Result<GraphQLResponse> {
        let body = serde_json::json!({ "query": profile_query(self.event_id) });

        let request = self
            .http_client
            .request(Method::POST, &self.graphql_url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .json(&body);

        let response = self.http_client.send(request).await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Received GraphQL response");

        if !status.is_success() {
            return Err(LearnboardError::Transport(format!(
                "GraphQL endpoint returned HTTP {}",
                status.as_u16()
            )));
        }

        let text =
            response.text().await.map_err(|err| LearnboardError::from(InfraError::from(err)))?;
        serde_json::from_str(&text).map_err(|err| {
            LearnboardError::Transport(format!("GraphQL response is not valid JSON: {err}"))
        })
    }
}

#[async_trait]
impl ProfileSource for PlatformProfileClient {
    #[instrument(skip(self, token), fields(event_id = self.event_id))]
    async fn fetch_profile(&self, token: &str) -> Result<ProfileRecord> {
        let response = self.execute(token).await?;
        let row = single_user_row(response)?;
        let raw: RawUser = serde_json::from_value(row).map_err(|err| {
            LearnboardError::DataIntegrity(format!("user row has an unexpected shape: {err}"))
        })?;

        let record = normalize(raw);
        info!(
            login = %record.login,
            xp_transactions = record.xp_transactions.len(),
            skills = record.skills.len(),
            "Fetched profile"
        );
        Ok(record)
    }
}

/// Apply the validation rules to a decoded envelope and return the user row.
pub fn single_user_row(response: GraphQLResponse) -> Result<Value> {
    if let Some(first) = response.errors.as_deref().and_then(<[GraphQLError]>::first) {
        warn!(message = %first.message, "GraphQL query reported errors");
        return Err(LearnboardError::Query(first.message.clone()));
    }

    let users = match response.data.and_then(|mut data| data.get_mut("user").map(Value::take)) {
        Some(Value::Array(users)) => users,
        Some(_) => {
            return Err(LearnboardError::DataIntegrity("data.user is not a list".into()));
        }
        None => return Err(LearnboardError::DataIntegrity("response has no data.user".into())),
    };

    match <[Value; 1]>::try_from(users) {
        Ok([row]) => Ok(row),
        Err(users) => Err(LearnboardError::DataIntegrity(format!(
            "expected exactly one user row, got {}",
            users.len()
        ))),
    }
}

/// Flatten a raw user row.
///
/// Missing level and XP total default to 0. XP transactions are stably
/// sorted by timestamp and skills reduced to the strongest entry per type.
pub fn normalize(raw: RawUser) -> ProfileRecord {
    let level = raw
        .events
        .first()
        .and_then(|event| event.level)
        .and_then(|level| u32::try_from(level).ok())
        .unwrap_or(0);
    let total_xp = raw
        .xp_total
        .and_then(|total| total.aggregate)
        .and_then(|aggregate| aggregate.sum)
        .and_then(|sum| sum.amount)
        .unwrap_or(0.0);

    let mut xp_transactions: Vec<XpTransaction> = raw
        .xp_transactions
        .into_iter()
        .map(|tx| XpTransaction { timestamp: tx.created_at, amount: tx.amount, path: tx.path })
        .collect();
    xp_transactions.sort_by_key(|tx| tx.timestamp);

    let skills: Vec<SkillEntry> = raw
        .skills
        .into_iter()
        .map(|skill| SkillEntry { skill_name: skill.kind, amount: skill.amount })
        .collect();

    ProfileRecord {
        id: raw.id,
        login: raw.login,
        first_name: raw.first_name,
        last_name: raw.last_name,
        email: raw.email,
        campus: raw.campus,
        audit_ratio: raw.audit_ratio,
        total_up: raw.total_up.unwrap_or(0.0),
        total_down: raw.total_down.unwrap_or(0.0),
        level,
        total_xp,
        finished_projects: groups(raw.finished_projects),
        current_projects: groups(raw.current_projects),
        setup_projects: groups(raw.setup_projects),
        xp_transactions,
        skills: strongest_per_type(&skills),
    }
}

fn groups(memberships: Vec<RawMembership>) -> Vec<ProjectGroup> {
    memberships
        .into_iter()
        .map(|membership| ProjectGroup {
            path: membership.group.path,
            status: membership.group.status,
            members: membership.group.members.into_iter().map(|m| m.user_login).collect(),
        })
        .collect()
}

// =============================================================================
// GraphQL Types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    id: i64,
    login: String,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    campus: Option<String>,
    audit_ratio: Option<f64>,
    total_up: Option<f64>,
    total_down: Option<f64>,
    xp_total: Option<RawAggregateField>,
    #[serde(default)]
    events: Vec<RawEvent>,
    #[serde(default)]
    xp_transactions: Vec<RawTransaction>,
    #[serde(default)]
    finished_projects: Vec<RawMembership>,
    #[serde(default)]
    current_projects: Vec<RawMembership>,
    #[serde(default)]
    setup_projects: Vec<RawMembership>,
    #[serde(default)]
    skills: Vec<RawSkill>,
}

#[derive(Debug, Deserialize)]
struct RawAggregateField {
    aggregate: Option<RawAggregate>,
}

#[derive(Debug, Deserialize)]
struct RawAggregate {
    sum: Option<RawSum>,
}

#[derive(Debug, Deserialize)]
struct RawSum {
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    level: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    created_at: DateTime<Utc>,
    amount: f64,
    path: String,
}

#[derive(Debug, Deserialize)]
struct RawMembership {
    group: RawGroup,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    path: String,
    status: GroupStatus,
    #[serde(default)]
    members: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMember {
    user_login: String,
}

#[derive(Debug, Deserialize)]
struct RawSkill {
    #[serde(rename = "type")]
    kind: String,
    amount: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn user_row() -> Value {
        json!({
            "id": 4242,
            "login": "alice",
            "firstName": "Alice",
            "lastName": "Otieno",
            "email": "alice@example.com",
            "campus": "kisumu",
            "auditRatio": 1.2345,
            "totalUp": 1523400,
            "totalDown": 1234000,
            "xpTotal": { "aggregate": { "sum": { "amount": 35 } } },
            "events": [{ "level": 17 }],
            "xpTransactions": [
                {
                    "createdAt": "2024-02-03T09:00:00+00:00",
                    "amount": 25,
                    "path": "/kisumu/module/ascii-art"
                },
                {
                    "createdAt": "2024-01-10T09:00:00.123456+00:00",
                    "amount": 10,
                    "path": "/kisumu/module/go-reloaded"
                }
            ],
            "finishedProjects": [
                { "group": { "path": "/kisumu/module/go-reloaded", "status": "finished" } }
            ],
            "currentProjects": [
                { "group": { "path": "/kisumu/module/graphql", "status": "working",
                             "members": [{ "userLogin": "alice" }, { "userLogin": "bob" }] } }
            ],
            "setupProjects": [],
            "skills": [
                { "type": "skill_go", "amount": 40 },
                { "type": "skill_go", "amount": 15 },
                { "type": "skill_js", "amount": 80 }
            ]
        })
    }

    async fn client_for(server: &MockServer) -> PlatformProfileClient {
        PlatformProfileClient::new(
            format!("{}/api/graphql-engine/v1/graphql", server.uri()),
            75,
            HttpClient::new().unwrap(),
        )
    }

    async fn mount(server: &MockServer, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/graphql-engine/v1/graphql"))
            .and(header("Authorization", "Bearer abc123"))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetches_and_normalizes_profile() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "user": [user_row()] } })),
        )
        .await;

        let profile = client_for(&server).await.fetch_profile("abc123").await.unwrap();

        assert_eq!(profile.id, 4242);
        assert_eq!(profile.login, "alice");
        assert_eq!(profile.level, 17);
        assert_eq!(profile.total_xp, 35.0);
        assert_eq!(profile.total_up, 1_523_400.0);
        assert_eq!(profile.finished_count(), 1);
        assert_eq!(profile.current_count(), 1);
        assert_eq!(profile.setup_count(), 0);
        assert_eq!(profile.current_projects[0].members, vec!["alice", "bob"]);

        let amounts: Vec<f64> = profile.xp_transactions.iter().map(|tx| tx.amount).collect();
        assert_eq!(amounts, vec![10.0, 25.0]);

        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.skills[0].skill_name, "skill_go");
        assert_eq!(profile.skills[0].amount, 40.0);
    }

    #[tokio::test]
    async fn sends_query_as_the_only_body_field() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "user": [user_row()] } })),
        )
        .await;

        client_for(&server).await.fetch_profile("abc123").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["query"]);
        let query = body["query"].as_str().unwrap();
        assert!(query.starts_with("query Profile"));
        assert!(query.contains("eventId: {_eq: 75}"));
        assert_eq!(requests[0].headers.get("content-type").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn empty_user_list_is_data_integrity_error() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(200).set_body_json(json!({ "data": { "user": [] } })))
            .await;

        let err = client_for(&server).await.fetch_profile("abc123").await.unwrap_err();

        assert!(matches!(err, LearnboardError::DataIntegrity(ref msg) if msg.contains("got 0")));
    }

    #[tokio::test]
    async fn multiple_user_rows_are_data_integrity_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "user": [user_row(), user_row()] } })),
        )
        .await;

        let err = client_for(&server).await.fetch_profile("abc123").await.unwrap_err();

        assert!(matches!(err, LearnboardError::DataIntegrity(ref msg) if msg.contains("got 2")));
    }

    #[tokio::test]
    async fn first_graphql_error_becomes_query_error() {
        let server = MockServer::start().await;
        mount(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({
                "errors": [
                    { "message": "Could not verify JWT: JWTExpired" },
                    { "message": "second" }
                ]
            })),
        )
        .await;

        let err = client_for(&server).await.fetch_profile("abc123").await.unwrap_err();

        assert_eq!(err, LearnboardError::Query("Could not verify JWT: JWTExpired".into()));
    }

    #[tokio::test]
    async fn non_ok_status_is_transport_error() {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(502)).await;

        let err = client_for(&server).await.fetch_profile("abc123").await.unwrap_err();

        assert!(matches!(err, LearnboardError::Transport(ref msg) if msg.contains("502")));
    }

    #[test]
    fn missing_level_and_total_default_to_zero() {
        let mut row = user_row();
        row["events"] = json!([]);
        row["xpTotal"] = json!({ "aggregate": { "sum": { "amount": null } } });

        let profile = normalize(serde_json::from_value(row).unwrap());

        assert_eq!(profile.level, 0);
        assert_eq!(profile.total_xp, 0.0);
    }

    #[test]
    fn missing_data_is_data_integrity_error() {
        let response: GraphQLResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(matches!(single_user_row(response), Err(LearnboardError::DataIntegrity(_))));
    }
}
