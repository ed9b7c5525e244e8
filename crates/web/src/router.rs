//! App Router

use salvo::Router;

use crate::{carts, healthcheck, products, purchase, sessions};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(shop_router())
}

/// Routes that belong to a browser session.
fn shop_router() -> Router {
    Router::new()
        .hoop(sessions::handler)
        .get(products::index::handler)
        .push(
            Router::with_path("cart")
                .get(carts::get::handler)
                .push(Router::with_path("receipt").get(carts::receipt::handler))
                .push(
                    Router::with_path("add/{product}")
                        .get(carts::items::create::redirect)
                        .post(carts::items::create::handler),
                )
                .push(
                    Router::with_path("remove/{item}")
                        .get(carts::items::delete::redirect)
                        .post(carts::items::delete::handler),
                ),
        )
        .push(
            Router::with_path("purchase")
                .get(purchase::form::handler)
                .post(purchase::create::handler),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        http::StatusCode,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use uuid::Uuid;

    use bazaar_app::domain::{carts::MockCartsService, products::MockProductsService};

    use crate::test_helpers::{
        issued_session_cookie, state_with, strict_carts_mock, strict_orders_mock,
        strict_products_mock,
    };

    use super::*;

    fn service(carts: MockCartsService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with(
                    strict_products_mock(),
                    carts,
                    strict_orders_mock(),
                )))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn healthcheck_has_no_session() -> TestResult {
        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&service(strict_carts_mock()))
            .await;

        assert!(issued_session_cookie(&res).is_none());
        assert_eq!(res.take_string().await?, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn cart_routes_start_a_session() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_receipt()
            .once()
            .return_once(|_| Ok(String::new()));

        let res = TestClient::get("http://example.com/cart/receipt")
            .send(&service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(issued_session_cookie(&res).is_some());

        Ok(())
    }

    #[tokio::test]
    async fn get_on_mutating_routes_redirects() -> TestResult {
        let uuid = Uuid::now_v7();

        for (path, location) in [
            (format!("/cart/add/{uuid}"), "/"),
            (format!("/cart/remove/{uuid}"), "/cart"),
        ] {
            let res = TestClient::get(format!("http://example.com{path}"))
                .send(&service(strict_carts_mock()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
            assert_eq!(
                res.headers()
                    .get("location")
                    .and_then(|value| value.to_str().ok()),
                Some(location)
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn root_lists_products() -> TestResult {
        let mut products = MockProductsService::new();
        let mut carts = MockCartsService::new();

        products
            .expect_list_products()
            .once()
            .return_once(|| Ok(Vec::new()));

        carts.expect_line_count().once().return_once(|_| Ok(0));
        carts.expect_resolve_cart().never();

        let res = TestClient::get("http://example.com/")
            .send(&Service::new(
                Router::new()
                    .hoop(inject(state_with(products, carts, strict_orders_mock())))
                    .push(app_router()),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(issued_session_cookie(&res).is_some());

        Ok(())
    }
}
