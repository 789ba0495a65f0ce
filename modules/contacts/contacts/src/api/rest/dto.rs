use contacts_sdk::{Contact, ContactId, ContactUpdate, NewContact};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

/// REST DTO for a stored contact.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    /// 24-character hex identifier
    pub id: String,
    pub name: String,
    pub email: String,
    /// `null` when no phone number was given
    pub phone: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Body of `POST /api/contacts`.
///
/// Every field is optional here so that missing values are reported as
/// validation messages instead of parser errors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct CreateContactReq {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Body of `PUT /api/contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateContactReq {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Body of `DELETE /api/contacts`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct DeleteContactReq {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListContactsResponse {
    pub contacts: Vec<ContactDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactResponse {
    pub message: String,
    pub contact_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Schema validation failures, one message per failing field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Store failure on list/create.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrResponse {
    pub err: String,
}

impl From<Contact> for ContactDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id.to_hex(),
            name: c.name,
            email: c.email,
            phone: c.phone,
            created_at: c.created_at,
        }
    }
}

impl From<CreateContactReq> for NewContact {
    fn from(req: CreateContactReq) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone,
        }
    }
}

impl UpdateContactReq {
    /// Split into the raw identifier and the replacement values.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, ContactUpdate) {
        let update = ContactUpdate {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
        };
        (self.id, update)
    }
}

impl CreateContactResponse {
    #[must_use]
    pub fn created(id: ContactId) -> Self {
        Self {
            message: "Contact Created".to_owned(),
            contact_id: id.to_hex(),
        }
    }
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_dto_uses_camel_case_and_null_phone() {
        let created_at = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let id = ContactId::from_bytes([1; 12]);
        let dto = ContactDto::from(Contact {
            id,
            name: "Ada".to_owned(),
            email: "ada@x.com".to_owned(),
            phone: None,
            created_at,
        });

        let v = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            v,
            json!({
                "id": "010101010101010101010101",
                "name": "Ada",
                "email": "ada@x.com",
                "phone": null,
                "createdAt": "2023-11-14T22:13:20Z",
            })
        );
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateContactReq = serde_json::from_value(json!({ "email": "a@b.co" })).unwrap();
        let new_contact = NewContact::from(req);
        assert_eq!(new_contact.name, "");
        assert_eq!(new_contact.email, "a@b.co");
        assert_eq!(new_contact.phone, None);
    }

    #[test]
    fn created_response_field_names() {
        let id = ContactId::from_bytes([0xff; 12]);
        let v = serde_json::to_value(CreateContactResponse::created(id)).unwrap();
        assert_eq!(v["message"], "Contact Created");
        assert_eq!(v["contactId"], "ffffffffffffffffffffffff");
    }

    #[test]
    fn update_request_splits_id() {
        let req: UpdateContactReq = serde_json::from_value(json!({
            "id": "abc",
            "name": "Ada",
            "email": "ada@x.com",
            "phone": "555"
        }))
        .unwrap();
        let (id, update) = req.into_parts();
        assert_eq!(id.as_deref(), Some("abc"));
        assert_eq!(update, ContactUpdate::new("Ada", "ada@x.com", Some("555".to_owned())));
    }
}
