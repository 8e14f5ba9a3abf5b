use super::*;
use crate::net::types::Profile;
use crate::state::credentials::CredentialRecord;
use crate::util::routes::AppRoute;

fn signed_in(role: Role) -> Session {
    Session::restored(Some(CredentialRecord {
        token: "tok".to_owned(),
        user: Profile {
            id: "u1".to_owned(),
            full_name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            phone: None,
            role,
        },
    }))
}

fn signed_out() -> Session {
    Session::restored(None)
}

// =============================================================
// authorize
// =============================================================

#[test]
fn loading_session_never_redirects() {
    let session = Session::new();
    assert_eq!(authorize(&session, Access::Member), RouteDecision::Pending);
    assert_eq!(authorize(&session, Access::Admin), RouteDecision::Pending);
}

#[test]
fn public_routes_render_for_everyone() {
    assert_eq!(authorize(&Session::new(), Access::Public), RouteDecision::Render);
    assert_eq!(authorize(&signed_out(), Access::Public), RouteDecision::Render);
}

#[test]
fn signed_out_redirects_to_login_regardless_of_role_requirement() {
    assert_eq!(authorize(&signed_out(), Access::Member), RouteDecision::Redirect("/login"));
    assert_eq!(authorize(&signed_out(), Access::Admin), RouteDecision::Redirect("/login"));
}

#[test]
fn client_on_admin_route_redirects_home() {
    assert_eq!(authorize(&signed_in(Role::Client), Access::Admin), RouteDecision::Redirect("/"));
}

#[test]
fn client_renders_member_route() {
    assert_eq!(authorize(&signed_in(Role::Client), Access::Member), RouteDecision::Render);
}

#[test]
fn admin_renders_every_route() {
    let session = signed_in(Role::Admin);
    for access in [Access::Public, Access::Member, Access::Admin] {
        assert_eq!(authorize(&session, access), RouteDecision::Render);
    }
}

#[test]
fn every_protected_route_sends_signed_out_users_to_login() {
    for route in AppRoute::ALL {
        let decision = authorize(&signed_out(), route.access());
        if route.access() == Access::Public {
            assert_eq!(decision, RouteDecision::Render, "{route:?}");
        } else {
            assert_eq!(decision, RouteDecision::Redirect(paths::LOGIN), "{route:?}");
        }
    }
}

// =============================================================
// home_redirect / landing_path
// =============================================================

#[test]
fn home_redirects_admin_to_dashboard() {
    assert_eq!(home_redirect(&signed_in(Role::Admin)), Some("/admin"));
}

#[test]
fn home_stays_for_clients_and_visitors() {
    assert_eq!(home_redirect(&signed_in(Role::Client)), None);
    assert_eq!(home_redirect(&signed_out()), None);
    assert_eq!(home_redirect(&Session::new()), None);
}

#[test]
fn landing_path_depends_on_role() {
    assert_eq!(landing_path(Role::Admin), "/admin");
    assert_eq!(landing_path(Role::Client), "/");
}
