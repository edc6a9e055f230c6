//! Profile query text

use learnboard_domain::GroupStatus;

/// Build the profile query for one event.
///
/// The event id scopes the XP aggregate, the level and the XP transactions.
/// Skills span every event. Group statuses are enum literals.
pub fn profile_query(event_id: i64) -> String {
    let groups = [
        group_selection("finishedProjects", GroupStatus::Finished, false),
        group_selection("currentProjects", GroupStatus::Working, true),
        group_selection("setupProjects", GroupStatus::Setup, true),
    ]
    .join("\n    ");

    format!(
        r#"query Profile {{
  user {{
    id
    login
    firstName
    lastName
    email
    campus
    auditRatio
    totalUp
    totalDown
    xpTotal: transactions_aggregate(where: {{type: {{_eq: "xp"}}, eventId: {{_eq: {event_id}}}}}) {{
      aggregate {{ sum {{ amount }} }}
    }}
    events(where: {{eventId: {{_eq: {event_id}}}}}) {{ level }}
    xpTransactions: transactions(
      order_by: {{createdAt: asc}}
      where: {{type: {{_eq: "xp"}}, eventId: {{_eq: {event_id}}}}}
    ) {{ createdAt amount path }}
    {groups}
    skills: transactions(
      order_by: [{{type: asc}}, {{amount: desc}}]
      distinct_on: [type]
      where: {{type: {{_like: "skill_%"}}}}
    ) {{ type amount }}
  }}
}}"#
    )
}

fn group_selection(alias: &str, status: GroupStatus, with_members: bool) -> String {
    let members = if with_members { " members { userLogin }" } else { "" };
    let filter = format!("where: {{group: {{status: {{_eq: {status}}}}}}}");
    format!("{alias}: groups({filter}) {{ group {{ path status{members} }} }}")
}
