use async_trait::async_trait;
use contacts_sdk::{Contact, ContactId, ContactUpdate};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::repo::ContactsRepository;

use super::entity::{ActiveModel, Column, Entity as ContactEntity};
use super::mapper::to_contact;

/// SQL-backed contacts collection.
#[derive(Clone)]
pub struct SeaOrmContactsRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactsRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactsRepository for SeaOrmContactsRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
        let rows = ContactEntity::find().all(&self.db).await?;
        rows.into_iter().map(to_contact).collect()
    }

    async fn insert_one(&self, contact: Contact) -> anyhow::Result<ContactId> {
        let id = contact.id;
        let am = ActiveModel::from(contact);
        ContactEntity::insert(am)
            .exec_without_returning(&self.db)
            .await?;
        Ok(id)
    }

    async fn update_one(&self, id: ContactId, update: ContactUpdate) -> anyhow::Result<bool> {
        let hex = id.to_hex();
        let result = ContactEntity::update_many()
            .col_expr(Column::Name, Expr::value(update.name))
            .col_expr(Column::Email, Expr::value(update.email))
            .col_expr(Column::Phone, Expr::value(update.phone))
            .filter(Column::Id.eq(hex.as_str()))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(true);
        }

        // Some backends count changed rather than matched rows.
        let exists = ContactEntity::find_by_id(hex).one(&self.db).await?;
        Ok(exists.is_some())
    }

    async fn delete_one(&self, id: ContactId) -> anyhow::Result<bool> {
        let result = ContactEntity::delete_by_id(id.to_hex())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
