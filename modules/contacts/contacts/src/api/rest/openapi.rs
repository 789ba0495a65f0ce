use utoipa::OpenApi;

use super::dto::{
    ContactDto, CreateContactReq, CreateContactResponse, DeleteContactReq, ErrResponse,
    ErrorResponse, ErrorsResponse, ListContactsResponse, MessageResponse, UpdateContactReq,
};
use super::handlers;

/// OpenAPI document for the contacts endpoint.
#[derive(OpenApi)]
#[openapi(
    info(title = "Contacts API", description = "Manage a shared list of contacts"),
    paths(
        handlers::list_contacts,
        handlers::create_contact,
        handlers::update_contact,
        handlers::delete_contact,
    ),
    components(schemas(
        ContactDto,
        CreateContactReq,
        UpdateContactReq,
        DeleteContactReq,
        ListContactsResponse,
        CreateContactResponse,
        MessageResponse,
        ErrorsResponse,
        ErrorResponse,
        ErrResponse,
    )),
    tags((name = "Contacts", description = "Contact records"))
)]
pub struct ContactsApiDoc;
