use contracts::domain::a002_support_tickets::{
    SupportTicket, TicketAssignment, TicketFilters, TicketMessage, TicketReply, TicketUpdate,
};
use contracts::shared::errors::{AppError, ValidationError};
use contracts::shared::query::{ListFilters, QueryParams};
use serde_json::Value;

use crate::shared::api::{envelope, ApiClient};

const TICKETS: &str = "/api/support/admin/tickets";

/// The server answers with the whole filtered list; paging is done client-side.
pub async fn get_all_tickets(
    client: &ApiClient,
    filters: &TicketFilters,
) -> Result<Vec<SupportTicket>, AppError> {
    let response = client.get(&filters.to_query().append_to(TICKETS)).await?;
    let tickets: Vec<SupportTicket> = envelope::or_default(response, "Listado de tickets")?;
    log::debug!("Loaded {} tickets", tickets.len());
    Ok(tickets)
}

pub async fn get_ticket_details(client: &ApiClient, ticket_id: i64) -> Result<SupportTicket, AppError> {
    let response = client.get(&format!("{}/{}", TICKETS, ticket_id)).await?;
    envelope::required(response, "Detalle de ticket")
}

pub async fn get_ticket_messages(
    client: &ApiClient,
    ticket_id: i64,
) -> Result<Vec<TicketMessage>, AppError> {
    let response = client
        .get(&format!("{}/{}/messages", TICKETS, ticket_id))
        .await?;
    envelope::or_default(response, "Mensajes del ticket")
}

pub async fn update_ticket(
    client: &ApiClient,
    ticket_id: i64,
    update: &TicketUpdate,
) -> Result<SupportTicket, AppError> {
    if update.is_empty() {
        return Err(AppError::Validation(ValidationError::new(
            "No hay cambios que guardar",
        )));
    }
    let response = client
        .patch(&format!("{}/{}", TICKETS, ticket_id), update)
        .await?;
    let ticket: SupportTicket = envelope::required(response, "Actualización de ticket")?;
    log::info!("Ticket {} updated to {}", ticket_id, ticket.status.code());
    Ok(ticket)
}

pub async fn reply_to_ticket(
    client: &ApiClient,
    ticket_id: i64,
    message: &str,
) -> Result<TicketMessage, AppError> {
    let message = message.trim();
    if message.is_empty() {
        let mut err = ValidationError::new("La respuesta no puede estar vacía");
        err.add_field("message", "Escribe un mensaje");
        return Err(AppError::Validation(err));
    }
    let body = TicketReply {
        message: message.to_string(),
    };
    let response = client
        .post(&format!("{}/{}/reply", TICKETS, ticket_id), &body)
        .await?;
    envelope::required(response, "Respuesta a ticket")
}

pub async fn assign_ticket(client: &ApiClient, ticket_id: i64, staff_id: i64) -> Result<(), AppError> {
    let body = TicketAssignment { staff_id };
    let response = client
        .post(&format!("{}/{}/assign", TICKETS, ticket_id), &body)
        .await?;
    envelope::discard(response);
    log::info!("Ticket {} assigned to staff {}", ticket_id, staff_id);
    Ok(())
}

/// Support metrics, globally or for one staff member. The payload shape
/// varies by deployment and is passed through untyped.
pub async fn get_staff_metrics(client: &ApiClient, staff_id: Option<i64>) -> Result<Value, AppError> {
    let mut q = QueryParams::new();
    q.push_opt("staffId", staff_id);
    let response = client
        .get(&q.append_to("/api/support/admin/metrics"))
        .await?;
    Ok(response.data.unwrap_or(Value::Null))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::api::testing::{test_client, MockTransport};
    use crate::shared::api::transport::Method;
    use contracts::domain::a002_support_tickets::{TicketPriority, TicketStatus};
    use contracts::shared::query::Choice;
    use serde_json::json;

    pub(crate) fn ticket_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "userId": 3,
            "userName": "Pedro Rojas",
            "subject": "No recibí mi pago",
            "description": "Completé la tarea hace una semana",
            "category": "BILLING",
            "priority": "HIGH",
            "status": status,
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_filters_and_bare_array() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([ticket_json(1, "NEW"), ticket_json(2, "OPEN")]));
        let (client, _, _) = test_client(transport.clone());

        let filters = TicketFilters {
            status: Choice::All,
            priority: Choice::Only(TicketPriority::High),
            search: Some("pago".to_string()),
            ..Default::default()
        };
        let tickets = get_all_tickets(&client, &filters).await.unwrap();

        assert_eq!(transport.last_endpoint(), "/api/support/admin/tickets?priority=HIGH&search=pago");
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[1].status, TicketStatus::Open);
    }

    #[tokio::test]
    async fn test_update_status_body() {
        let transport = MockTransport::new();
        transport.push_json(200, ticket_json(42, "RESOLVED"));
        let (client, _, _) = test_client(transport.clone());

        let ticket = update_ticket(&client, 42, &TicketUpdate::status(TicketStatus::Resolved))
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(transport.last_endpoint(), "/api/support/admin/tickets/42");
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"RESOLVED"}"#));
        assert_eq!(ticket.status, TicketStatus::Resolved);
    }

    #[tokio::test]
    async fn test_empty_update_is_not_sent() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone());

        let err = update_ticket(&client, 1, &TicketUpdate::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_reply_and_messages() {
        let transport = MockTransport::new();
        transport.push_json(
            201,
            json!({"id": 9, "ticketId": 5, "fromStaffId": 1, "fromUserName": "Soporte",
                   "message": "Revisando", "isFromCustomer": false, "isFromStaff": true,
                   "createdAt": "2024-03-02T11:00:00Z"}),
        );
        transport.push_json(200, json!(null));
        let (client, _, _) = test_client(transport.clone());

        let reply = reply_to_ticket(&client, 5, "  Revisando ").await.unwrap();
        assert!(reply.is_from_staff);
        assert_eq!(
            transport.last_request().unwrap().body.as_deref(),
            Some(r#"{"message":"Revisando"}"#)
        );

        let messages = get_ticket_messages(&client, 5).await.unwrap();
        assert!(messages.is_empty());
        assert_eq!(transport.last_endpoint(), "/api/support/admin/tickets/5/messages");
    }

    #[tokio::test]
    async fn test_assign_and_metrics() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"ok": true}));
        transport.push_json(200, json!({"openTickets": 4}));
        let (client, _, _) = test_client(transport.clone());

        assign_ticket(&client, 5, 12).await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().body.as_deref(),
            Some(r#"{"staffId":12}"#)
        );

        let metrics = get_staff_metrics(&client, Some(12)).await.unwrap();
        assert_eq!(transport.last_endpoint(), "/api/support/admin/metrics?staffId=12");
        assert_eq!(metrics["openTickets"], 4);
    }

    #[tokio::test]
    async fn test_missing_ticket_keeps_status() {
        let transport = MockTransport::new();
        transport.push_json(404, json!({"error": "Ticket no encontrado"}));
        let (client, _, _) = test_client(transport);

        let err = get_ticket_details(&client, 999).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Ticket no encontrado");
    }
}
