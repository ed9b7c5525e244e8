//! Browser Sessions
//!
//! Every request is tied to a session uuid carried in the `bazaar_session`
//! cookie. Requests without a usable cookie start a new session.

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;
use uuid::Uuid;

use bazaar_app::domain::carts::models::SessionUuid;

pub(crate) const SESSION_COOKIE: &str = "bazaar_session";

/// Resolve the request's session and inject it into the depot.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let session = match session_from_request(req) {
        Some(session) => session,
        None => {
            let session = SessionUuid::new();

            debug!(%session, "starting new session");

            res.add_cookie(session_cookie(session));

            session
        }
    };

    depot.inject(session);

    ctrl.call_next(req, depot, res).await;
}

fn session_from_request(req: &Request) -> Option<SessionUuid> {
    let cookie = req.cookie(SESSION_COOKIE)?;

    Uuid::parse_str(cookie.value())
        .ok()
        .map(SessionUuid::from_uuid)
}

fn session_cookie(session: SessionUuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}
