use crate::utils::error::{ModalError, Result};
use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Static description of a service: how it is named and how it is built.
#[derive(Debug)]
pub struct Registration<T> {
    pub name: &'static str,
    pub alt_name: &'static str,
    pub create: fn() -> T,
}

/// Composition root that turns [`Registration`]s into process-wide singletons.
#[derive(Default)]
pub struct ServicesManager {
    services: BTreeMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl ServicesManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the service exactly once and makes it reachable under both of
    /// its names. Nothing is created if either name is already taken.
    pub fn register<T: Any + Send + Sync>(&mut self, registration: &Registration<T>) -> Result<Arc<T>> {
        for name in [registration.name, registration.alt_name] {
            if self.services.contains_key(name) {
                return Err(ModalError::DuplicateService {
                    name: name.to_string(),
                });
            }
        }

        let instance = Arc::new((registration.create)());
        let shared: Arc<dyn Any + Send + Sync> = instance.clone();
        self.services.insert(registration.name, Arc::clone(&shared));
        self.services.insert(registration.alt_name, shared);

        tracing::info!(
            "Registered service '{}' (alias '{}')",
            registration.name,
            registration.alt_name
        );
        Ok(instance)
    }

    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        let service = self
            .services
            .get(name)
            .ok_or_else(|| ModalError::ServiceNotFound {
                name: name.to_string(),
            })?;

        Arc::clone(service)
            .downcast::<T>()
            .map_err(|_| ModalError::ServiceTypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Every registered name, canonical and alternate, in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.services.keys().copied().collect()
    }
}
