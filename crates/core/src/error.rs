use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("No client registered as '{registration_id}' in organization {organization_id}")]
    UnknownRegistration {
        organization_id: DbId,
        registration_id: String,
    },

    #[error("Client '{registration_id}' is not waiting in this queue")]
    ClientNotInQueue { registration_id: String },

    #[error("Client {client_id} is not a member of any group attached to queue {queue_id}")]
    UserNotInGroup { client_id: DbId, queue_id: DbId },

    #[error("Client {client_id} does not belong to any group")]
    UserNotInAnyGroup { client_id: DbId },

    #[error("No queue of service {service_id} is available to client {client_id}")]
    NoQueueAvailable { service_id: DbId, client_id: DbId },

    #[error("Service {service_id} is not open")]
    ServiceNotOpen { service_id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
