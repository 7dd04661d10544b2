use reqwest::Method;

/// Every call the portal makes to the workflow webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOp {
    Book,
    Cancel,
    Events,
    Chat,
    Intake,
    Appointments,
    SendReminder,
}

impl WebhookOp {
    pub fn suffix(self) -> &'static str {
        match self {
            WebhookOp::Book => "/book",
            WebhookOp::Cancel => "/cancel",
            WebhookOp::Events => "/events",
            WebhookOp::Chat => "/chat",
            WebhookOp::Intake => "/intake",
            WebhookOp::Appointments => "/appointments",
            WebhookOp::SendReminder => "/send-reminder",
        }
    }

    pub fn method(self) -> Method {
        match self {
            WebhookOp::Events | WebhookOp::Appointments => Method::GET,
            _ => Method::POST,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            WebhookOp::Book => "Failed to book appointment",
            WebhookOp::Cancel => "Failed to cancel appointment",
            WebhookOp::Events => "Failed to fetch events",
            WebhookOp::Chat => "Failed to send message",
            WebhookOp::Intake => "Failed to submit intake form",
            WebhookOp::Appointments => "Failed to fetch appointments",
            WebhookOp::SendReminder => "Failed to send reminder",
        }
    }
}

impl std::fmt::Display for WebhookOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix().trim_start_matches('/'))
    }
}
