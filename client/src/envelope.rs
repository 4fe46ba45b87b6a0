//! Wire envelopes shared by every API endpoint.

use boxoffice_domain::page::PageInfo;
use serde::Deserialize;

/// Standard response wrapper: `{success, message?, data?}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Human-readable outcome message, if any.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload; absent on failures and on pure acknowledgements.
    #[serde(default)]
    pub data: Option<T>,
}

/// List response wrapper: `{success, data, pagination}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Failure message, when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
    /// The page of items.
    #[serde(default)]
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PageInfo,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_message_and_data() {
        let envelope: Envelope<String> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_with_payload() {
        let envelope: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "message": "ok", "data": [1, 2]}"#).unwrap();
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }

    #[test]
    fn list_envelope_carries_pagination() {
        let envelope: ListEnvelope<u32> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [1, 2, 3],
                "pagination": {
                    "currentPage": 1,
                    "totalPages": 1,
                    "totalItems": 3,
                    "itemsPerPage": 10,
                    "hasNextPage": false,
                    "hasPreviousPage": false
                }
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert!(envelope.pagination.is_consistent());
    }
}
