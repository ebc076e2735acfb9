//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use smartbasket_app::{
    context::AppContext,
    domain::{
        auth::{MockAuthService, User},
        carts::{Cart, MockCartsService},
        catalog::MockCatalogService,
        pricing::MockPricingService,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: Uuid = Uuid::nil();

pub(crate) fn make_cart(uuid: Uuid) -> Cart {
    Cart {
        uuid,
        lines: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: Uuid) -> User {
    User {
        uuid,
        phone: "9876543210".to_string(),
        name: "Priya".to_string(),
        email: None,
        saved_items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        last_login: Timestamp::UNIX_EPOCH,
    }
}

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_list_items().never();
    catalog.expect_get_item().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_add_item().never();
    carts.expect_set_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_compare_cart().never();

    carts
}

fn strict_pricing_mock() -> MockPricingService {
    let mut pricing = MockPricingService::new();

    pricing.expect_quote_item().never();
    pricing.expect_compare().never();
    pricing.expect_history().never();

    pricing
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_send_otp().never();
    auth.expect_verify_otp().never();
    auth.expect_authenticate_bearer().never();
    auth.expect_profile().never();
    auth.expect_update_profile().never();
    auth.expect_add_watchlist_item().never();
    auth.expect_logout().never();

    auth
}

fn make_state(
    catalog: MockCatalogService,
    carts: MockCartsService,
    pricing: MockPricingService,
    auth: MockAuthService,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
        pricing: Arc::new(pricing),
        auth: Arc::new(auth),
    }))
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    make_state(
        catalog,
        strict_carts_mock(),
        strict_pricing_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    make_state(
        strict_catalog_mock(),
        carts,
        strict_pricing_mock(),
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_pricing(pricing: MockPricingService) -> Arc<State> {
    make_state(
        strict_catalog_mock(),
        strict_carts_mock(),
        pricing,
        strict_auth_mock(),
    )
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    make_state(
        strict_catalog_mock(),
        strict_carts_mock(),
        strict_pricing_mock(),
        auth,
    )
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
}

pub(crate) fn pricing_service(pricing: MockPricingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_pricing(pricing)))
            .push(route),
    )
}

pub(crate) fn authed_pricing_service(pricing: MockPricingService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_pricing(pricing)))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn auth_routes_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(route),
    )
}

pub(crate) fn authed_auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .hoop(inject_user)
            .push(route),
    )
}
