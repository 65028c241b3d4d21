use serde::{Deserialize, Serialize};

/// A submitted health declaration, as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub temperature: f64,
    pub has_symptoms: bool,
    pub contact_with_covid: bool,
    pub submission_date: String,
}

/// One page of declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclarationsResponse {
    pub data: Vec<Declaration>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

/// Body of `POST /api/declarations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeclarationRequest {
    pub name: String,
    pub temperature: f64,
    pub has_symptoms: bool,
    pub contact_with_covid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_deserialization_with_mongo_id() {
        let json = r#"{
            "_id": "652f1c",
            "name": "Ada Lovelace",
            "temperature": 36.6,
            "hasSymptoms": false,
            "contactWithCovid": true,
            "submissionDate": "2024-03-01T09:30:00.000Z"
        }"#;
        let declaration: Declaration = serde_json::from_str(json).unwrap();

        assert_eq!(declaration.id, "652f1c");
        assert_eq!(declaration.name, "Ada Lovelace");
        assert_eq!(declaration.temperature, 36.6);
        assert!(!declaration.has_symptoms);
        assert!(declaration.contact_with_covid);
        assert_eq!(declaration.submission_date, "2024-03-01T09:30:00.000Z");
    }

    #[test]
    fn test_declaration_deserialization_with_plain_id() {
        let json = r#"{"id": "7", "name": "Bo", "temperature": 37,
            "hasSymptoms": true, "contactWithCovid": false,
            "submissionDate": "2024-03-01T09:30:00Z"}"#;
        let declaration: Declaration = serde_json::from_str(json).unwrap();

        assert_eq!(declaration.id, "7");
        assert_eq!(declaration.temperature, 37.0);
    }

    #[test]
    fn test_declarations_response_deserialization() {
        let json = r#"{"data": [], "total": 25, "page": 2, "limit": 10}"#;
        let response: DeclarationsResponse = serde_json::from_str(json).unwrap();

        assert!(response.data.is_empty());
        assert_eq!(response.total, 25);
        assert_eq!(response.page, 2);
        assert_eq!(response.limit, 10);
    }

    #[test]
    fn test_create_request_serialization_uses_camel_case() {
        let request = CreateDeclarationRequest {
            name: "Ada".to_string(),
            temperature: 36.5,
            has_symptoms: true,
            contact_with_covid: false,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""name":"Ada""#));
        assert!(json.contains(r#""temperature":36.5"#));
        assert!(json.contains(r#""hasSymptoms":true"#));
        assert!(json.contains(r#""contactWithCovid":false"#));
    }
}
