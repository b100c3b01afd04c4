//! Router construction from configuration.

use crate::config::schema::{AppConfig, RouteAction, RouteConfig};
use crate::config::validation::route_pattern;
use crate::location::Location;
use crate::routing::{DispatchContext, Flow, Router, RouterError};

/// Build a router with every configured route registered in file order.
pub fn build_router<L: Location>(
    config: &AppConfig,
    location: L,
) -> Result<Router<L>, RouterError> {
    let mut router = Router::with_options(location, config.router.clone());

    for route in &config.routes {
        router.register(route_pattern(route)?, action_handler(route))?;
    }

    tracing::info!(
        routes = router.routes().len(),
        mode = %router.options().mode,
        "Router built"
    );
    Ok(router)
}

fn action_handler(route: &RouteConfig) -> impl FnMut(&mut DispatchContext) -> Flow + 'static {
    let label = route.label().to_string();
    let action = route.action.clone();
    let flow = Flow::from(route.next);

    move |ctx: &mut DispatchContext| {
        tracing::info!(
            route = %label,
            path = ctx.path(),
            params = ?ctx.params(),
            "Route dispatched"
        );
        match &action {
            RouteAction::Log => {}
            RouteAction::Redirect { to } => ctx.redirect_internal(to.as_str()),
            RouteAction::External { url } => ctx.redirect_external(url.as_str()),
        }
        flow
    }
}
