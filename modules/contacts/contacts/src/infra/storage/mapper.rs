use contacts_sdk::{Contact, ContactId};
use sea_orm::Set;

use super::entity::{ActiveModel, Model};

/// Convert a stored row to a contract model.
///
/// # Errors
/// Fails when the stored identifier is not valid hex.
pub fn to_contact(m: Model) -> anyhow::Result<Contact> {
    let id = ContactId::parse_hex(&m.id)?;
    Ok(Contact {
        id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        created_at: m.created_at,
    })
}

impl From<Contact> for ActiveModel {
    fn from(c: Contact) -> Self {
        Self {
            id: Set(c.id.to_hex()),
            name: Set(c.name),
            email: Set(c.email),
            phone: Set(c.phone),
            created_at: Set(c.created_at),
        }
    }
}
