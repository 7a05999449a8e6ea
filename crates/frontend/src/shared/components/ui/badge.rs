use contracts::domain::a002_support_tickets::{TicketPriority, TicketStatus};
use contracts::domain::a003_verification_documents::DocumentStatus;
use contracts::enums::{Tier, UserState};
use leptos::prelude::*;

/// Color family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    Info,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Info => "badge--info",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Text and color of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl BadgeSpec {
    const fn new(label: &'static str, variant: BadgeVariant) -> Self {
        Self { label, variant }
    }
}

pub fn ticket_status_badge(status: TicketStatus) -> BadgeSpec {
    let variant = match status {
        TicketStatus::New => BadgeVariant::Primary,
        TicketStatus::Open => BadgeVariant::Info,
        TicketStatus::InProgress => BadgeVariant::Warning,
        TicketStatus::PendingCustomer => BadgeVariant::Warning,
        TicketStatus::Resolved => BadgeVariant::Success,
        TicketStatus::Closed => BadgeVariant::Neutral,
    };
    BadgeSpec::new(status.display_name(), variant)
}

pub fn ticket_priority_badge(priority: TicketPriority) -> BadgeSpec {
    let variant = match priority {
        TicketPriority::Low => BadgeVariant::Neutral,
        TicketPriority::Medium => BadgeVariant::Info,
        TicketPriority::High => BadgeVariant::Warning,
        TicketPriority::Urgent => BadgeVariant::Error,
    };
    BadgeSpec::new(priority.display_name(), variant)
}

pub fn document_status_badge(status: DocumentStatus) -> BadgeSpec {
    let variant = match status {
        DocumentStatus::Pending => BadgeVariant::Warning,
        DocumentStatus::Approved => BadgeVariant::Success,
        DocumentStatus::Rejected => BadgeVariant::Error,
    };
    BadgeSpec::new(status.display_name(), variant)
}

pub fn user_state_badge(state: UserState) -> BadgeSpec {
    let variant = match state {
        UserState::Ok => BadgeVariant::Success,
        UserState::Blocked => BadgeVariant::Error,
        UserState::Disabled => BadgeVariant::Neutral,
        UserState::IncompleteRegistration => BadgeVariant::Warning,
    };
    BadgeSpec::new(state.display_name(), variant)
}

pub fn tier_badge(tier: Tier) -> BadgeSpec {
    let variant = match tier {
        Tier::Bronze => BadgeVariant::Warning,
        Tier::Silver => BadgeVariant::Neutral,
        Tier::Gold => BadgeVariant::Primary,
        Tier::Platinum => BadgeVariant::Info,
    };
    BadgeSpec::new(tier.display_name(), variant)
}

/// Badge component with different variants
#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge rendered from a [`BadgeSpec`]
#[component]
pub fn SpecBadge(spec: BadgeSpec) -> impl IntoView {
    view! {
        <span class=format!("badge {}", spec.variant.class())>
            {spec.label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_badges() {
        let resolved = ticket_status_badge(TicketStatus::Resolved);
        assert_eq!(resolved.label, "Resuelto");
        assert_eq!(resolved.variant, BadgeVariant::Success);
        assert_eq!(ticket_status_badge(TicketStatus::PendingCustomer).label, "Esperando Cliente");
        assert_eq!(ticket_priority_badge(TicketPriority::Urgent).variant, BadgeVariant::Error);
    }

    #[test]
    fn test_labels() {
        assert_eq!(document_status_badge(DocumentStatus::Rejected).label, "Rechazado");
        assert_eq!(user_state_badge(UserState::IncompleteRegistration).label, "Registro incompleto");
        assert_eq!(tier_badge(Tier::Platinum).label, "Platino");
    }
}
