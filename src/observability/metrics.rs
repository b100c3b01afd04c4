//! Dispatch metrics.
//!
//! # Metrics
//! - `hsh_dispatch_total` (counter): dispatches by mode
//! - `hsh_handlers_invoked_total` (counter): handlers run across all dispatches
//! - `hsh_unmatched_total` (counter): dispatches where no route matched
//! - `hsh_redirect_total` (counter): redirects by kind (internal, external)
//! - `hsh_invalid_fragment_total` (counter): fragments without the expected prefix

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::routing::DispatchMode;

/// Install the Prometheus recorder with its scrape listener.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics recorder"),
    }
}

pub fn record_dispatch(mode: DispatchMode, handlers: usize) {
    ::metrics::counter!("hsh_dispatch_total", "mode" => mode.as_str()).increment(1);
    ::metrics::counter!("hsh_handlers_invoked_total").increment(handlers as u64);
    if handlers == 0 {
        ::metrics::counter!("hsh_unmatched_total").increment(1);
    }
}

pub fn record_redirect(kind: &'static str) {
    ::metrics::counter!("hsh_redirect_total", "kind" => kind).increment(1);
}

pub fn record_invalid_fragment() {
    ::metrics::counter!("hsh_invalid_fragment_total").increment(1);
}
