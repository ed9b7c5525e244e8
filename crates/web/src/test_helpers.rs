//! Test helpers.

use std::sync::Arc;

use rusty_money::iso::USD;
use salvo::{affix_state::inject, http::header::SET_COOKIE, prelude::*};
use uuid::Uuid;

use bazaar_app::{
    context::AppContext,
    domain::{
        carts::{MockCartsService, models::SessionUuid},
        orders::MockOrdersService,
        products::MockProductsService,
    },
};

use crate::{sessions::SESSION_COOKIE, state::State};

pub(crate) const TEST_SESSION: SessionUuid = SessionUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.inject(TEST_SESSION);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

pub(crate) fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_resolve_cart().never();
    carts.expect_line_count().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_view_cart().never();
    carts.expect_receipt().never();

    carts
}

pub(crate) fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_checkout().never();
    orders.expect_get_order().never();

    orders
}

pub(crate) fn state_with(
    products: MockProductsService,
    carts: MockCartsService,
    orders: MockOrdersService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        products: Arc::new(products),
        carts: Arc::new(carts),
        orders: Arc::new(orders),
        currency: USD,
    })
}

pub(crate) fn shop_service(
    products: MockProductsService,
    carts: MockCartsService,
    orders: MockOrdersService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, carts, orders)))
            .hoop(inject_session)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    shop_service(strict_products_mock(), carts, strict_orders_mock(), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    shop_service(strict_products_mock(), strict_carts_mock(), orders, route)
}

/// The session cookie this response sets, if any.
///
/// Request cookies are copied into the response jar as originals, so only the
/// jar's delta and the `Set-Cookie` headers count as issued.
pub(crate) fn issued_session_cookie(res: &Response) -> Option<String> {
    if let Some(cookie) = res
        .cookies()
        .delta()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
    {
        return Some(cookie.to_string());
    }

    res.headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with(SESSION_COOKIE))
        .map(str::to_string)
}
