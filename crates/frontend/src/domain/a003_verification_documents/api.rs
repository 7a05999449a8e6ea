use contracts::domain::a003_verification_documents::{
    DocumentFilters, DocumentRejection, VerificationDocument,
};
use contracts::shared::errors::{AppError, ValidationError};
use contracts::shared::query::ListFilters;

use crate::shared::api::{envelope, ApiClient};

const ADMIN: &str = "/api/verification/admin";

pub async fn get_all_documents(
    client: &ApiClient,
    filters: &DocumentFilters,
) -> Result<Vec<VerificationDocument>, AppError> {
    let endpoint = filters.to_query().append_to(&format!("{}/documents", ADMIN));
    let response = client.get(&endpoint).await?;
    let documents: Vec<VerificationDocument> = envelope::required(response, "Documentos de verificación")?;
    log::debug!("Loaded {} verification documents", documents.len());
    Ok(documents)
}

pub async fn approve_document(client: &ApiClient, document_id: i64) -> Result<(), AppError> {
    let response = client
        .post_empty(&format!("{}/document/{}/approve", ADMIN, document_id))
        .await?;
    envelope::discard(response);
    log::info!("Document {} approved", document_id);
    Ok(())
}

/// Rejection requires a reason; a blank one never reaches the server.
pub async fn reject_document(
    client: &ApiClient,
    document_id: i64,
    reason: &str,
) -> Result<(), AppError> {
    let reason = reason.trim();
    if reason.is_empty() {
        let mut err = ValidationError::new("Debes indicar el motivo del rechazo");
        err.add_field("reason", "El motivo es obligatorio");
        return Err(AppError::Validation(err));
    }

    let body = DocumentRejection {
        reason: reason.to_string(),
    };
    let response = client
        .post(&format!("{}/document/{}/reject", ADMIN, document_id), &body)
        .await?;
    envelope::discard(response);
    log::info!("Document {} rejected", document_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{json_response, test_client, MockTransport};
    use crate::shared::api::transport::Method;
    use contracts::domain::a003_verification_documents::{DocumentStatus, DocumentType};
    use contracts::shared::query::Choice;
    use serde_json::{json, Value};

    fn document(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "userId": 11,
            "userName": "Carla Soto",
            "userEmail": "carla@pololitos.cl",
            "documentType": "IDENTITY",
            "status": status,
            "fileUrl": "https://files.test/doc.pdf",
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let transport = MockTransport::new();
        transport.push_json(200, json!([document(1, "PENDING"), document(2, "PENDING")]));
        let (client, _, _) = test_client(transport.clone());

        let filters = DocumentFilters {
            document_type: Choice::Only(DocumentType::Identity),
            search: Some("carla".to_string()),
            ..DocumentFilters::pending()
        };
        let docs = get_all_documents(&client, &filters).await.unwrap();

        assert_eq!(
            transport.last_endpoint(),
            "/api/verification/admin/documents?status=PENDING&type=IDENTITY&search=carla"
        );
        assert_eq!(docs.len(), 2);
        assert!(docs[0].is_pdf());
        assert_eq!(docs[0].status, DocumentStatus::Pending);
    }

    #[tokio::test]
    async fn test_empty_body_is_invalid() {
        let transport = MockTransport::new();
        transport.push(json_response(200, Value::Null));
        let (client, _, _) = test_client(transport);

        let err = get_all_documents(&client, &DocumentFilters::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_approve_posts_without_body() {
        let transport = MockTransport::new();
        transport.push_json(200, json!({"message": "ok"}));
        let (client, _, _) = test_client(transport.clone());

        approve_document(&client, 8).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/api/verification/admin/document/8/approve"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_reject_requires_reason() {
        let transport = MockTransport::new();
        let (client, _, _) = test_client(transport.clone());

        let err = reject_document(&client, 8, "  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(transport.requests().is_empty());

        transport.push_json(200, json!({}));
        reject_document(&client, 8, " Documento ilegible ").await.unwrap();
        let body: Value =
            serde_json::from_str(transport.last_request().unwrap().body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"reason": "Documento ilegible"}));
    }
}
