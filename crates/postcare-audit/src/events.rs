use serde::Serialize;
use tracing::info;

/// Actions worth an audit trail: anything that writes patient data or shows
/// it to a clinician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    #[serde(rename = "checkin_submitted")]
    CheckInSubmitted,
    #[serde(rename = "checkin_summary_viewed")]
    CheckInSummaryViewed,
    DashboardViewed,
    PatientListViewed,
    PatientSummaryViewed,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::CheckInSubmitted => "checkin_submitted",
            AuditAction::CheckInSummaryViewed => "checkin_summary_viewed",
            AuditAction::DashboardViewed => "dashboard_viewed",
            AuditAction::PatientListViewed => "patient_list_viewed",
            AuditAction::PatientSummaryViewed => "patient_summary_viewed",
        }
    }
}

/// A structured audit event for logging API actions.
///
/// Events go out through `tracing`, so they land wherever the subscriber
/// ships logs (JSON lines in deployment).
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(
        action: AuditAction,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action,
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        match &self.details {
            Some(details) => info!(
                audit.action = self.action.as_str(),
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                audit.details = %details,
                "audit event"
            ),
            None => info!(
                audit.action = self.action.as_str(),
                audit.resource_type = %self.resource_type,
                audit.resource_id = %self.resource_id,
                audit.actor = %self.actor,
                "audit event"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_match_serialized_form() {
        for action in [
            AuditAction::CheckInSubmitted,
            AuditAction::CheckInSummaryViewed,
            AuditAction::DashboardViewed,
            AuditAction::PatientListViewed,
            AuditAction::PatientSummaryViewed,
        ] {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.as_str());
        }
    }

    #[test]
    fn serialized_event_names_action_like_the_log_field() {
        let event = AuditEvent::new(AuditAction::CheckInSubmitted, "checkin", "abc", "patient-1");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "checkin_submitted");
        assert_eq!(json["action"], event.action.as_str());
    }

    #[test]
    fn details_are_attached() {
        let event = AuditEvent::new(AuditAction::CheckInSubmitted, "checkin", "abc", "patient-1")
            .with_details(serde_json::json!({ "date": "2024-01-02" }));
        assert_eq!(event.details.unwrap()["date"], "2024-01-02");
        assert_eq!(event.resource_id, "abc");
    }
}
