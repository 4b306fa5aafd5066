//! Container tokens and registration for the built-in services.

use std::sync::Arc;

use crate::auth::AuthRepository;
use crate::client::AdminClient;
use crate::container::{Container, ServiceToken};
use crate::repositories::{
    CustomerRepository, OrderRepository, ProductRepository, SettingsRepository,
};
use crate::services::{
    AuthService, CustomerService, OrderService, ProductService, SettingsService,
};

/// The shared admin client.
pub const ADMIN_CLIENT: ServiceToken<AdminClient> = ServiceToken::new("AdminClient");

pub const AUTH_REPOSITORY: ServiceToken<AuthRepository> = ServiceToken::new("AuthRepository");
pub const PRODUCT_REPOSITORY: ServiceToken<ProductRepository> =
    ServiceToken::new("ProductRepository");
pub const ORDER_REPOSITORY: ServiceToken<OrderRepository> = ServiceToken::new("OrderRepository");
pub const CUSTOMER_REPOSITORY: ServiceToken<CustomerRepository> =
    ServiceToken::new("CustomerRepository");
pub const SETTINGS_REPOSITORY: ServiceToken<SettingsRepository> =
    ServiceToken::new("SettingsRepository");

pub const AUTH_SERVICE: ServiceToken<AuthService> = ServiceToken::new("AuthService");
pub const PRODUCT_SERVICE: ServiceToken<ProductService> = ServiceToken::new("ProductService");
pub const ORDER_SERVICE: ServiceToken<OrderService> = ServiceToken::new("OrderService");
pub const CUSTOMER_SERVICE: ServiceToken<CustomerService> = ServiceToken::new("CustomerService");
pub const SETTINGS_SERVICE: ServiceToken<SettingsService> = ServiceToken::new("SettingsService");

/// Registers `client` and lazy factories for every repository and service.
///
/// Each repository and service built by the factories shares `client`.
pub fn register_services(container: &Container, client: Arc<AdminClient>) {
    container.register(ADMIN_CLIENT, Arc::clone(&client));

    let executor = Arc::clone(&client);
    container.register_factory(AUTH_REPOSITORY, move || {
        Arc::new(AuthRepository::new(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(PRODUCT_REPOSITORY, move || {
        Arc::new(ProductRepository::new(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(ORDER_REPOSITORY, move || {
        Arc::new(OrderRepository::new(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(CUSTOMER_REPOSITORY, move || {
        Arc::new(CustomerRepository::new(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(SETTINGS_REPOSITORY, move || {
        Arc::new(SettingsRepository::new(Arc::clone(&executor)))
    });

    let executor = Arc::clone(&client);
    container.register_factory(AUTH_SERVICE, move || {
        Arc::new(AuthService::from_executor(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(PRODUCT_SERVICE, move || {
        Arc::new(ProductService::from_executor(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(ORDER_SERVICE, move || {
        Arc::new(OrderService::from_executor(Arc::clone(&executor)))
    });
    let executor = Arc::clone(&client);
    container.register_factory(CUSTOMER_SERVICE, move || {
        Arc::new(CustomerService::from_executor(Arc::clone(&executor)))
    });
    container.register_factory(SETTINGS_SERVICE, move || {
        Arc::new(SettingsService::from_executor(Arc::clone(&client)))
    });
}
