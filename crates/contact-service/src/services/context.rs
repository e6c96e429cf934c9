//! Service context - dependency container for services
//!
//! Holds the transaction manager and the helpers every use case needs.

use std::sync::Arc;

use contact_common::PasswordService;
use contact_core::traits::{TransactionManager, UnitOfWork};
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; one instance is shared by every request.
#[derive(Clone)]
pub struct ServiceContext {
    transactions: Arc<dyn TransactionManager>,
    password_service: PasswordService,
}

impl ServiceContext {
    pub fn new(transactions: Arc<dyn TransactionManager>, password_service: PasswordService) -> Self {
        Self {
            transactions,
            password_service,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the transaction manager
    pub fn transactions(&self) -> &dyn TransactionManager {
        self.transactions.as_ref()
    }

    /// Open a new unit of work
    pub async fn begin(&self) -> ServiceResult<Box<dyn UnitOfWork>> {
        Ok(self.transactions.begin().await?)
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Generate a new entity ID
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("transactions", &"dyn TransactionManager")
            .field("password_service", &self.password_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    transactions: Option<Arc<dyn TransactionManager>>,
    password_service: Option<PasswordService>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transaction_manager(mut self, transactions: Arc<dyn TransactionManager>) -> Self {
        self.transactions = Some(transactions);
        self
    }

    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the transaction manager is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let transactions = self
            .transactions
            .ok_or_else(|| ServiceError::internal("transaction manager is required"))?;

        Ok(ServiceContext::new(
            transactions,
            self.password_service.unwrap_or_default(),
        ))
    }
}
