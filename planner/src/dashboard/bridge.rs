use crate::dashboard::model::DashboardModel;
use anyhow::Context;
use log::info;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::signal;
use warp::{Filter, Rejection, Reply};

type SharedModel = Arc<RwLock<DashboardModel>>;

/// Serves the latest results as JSON (`/routes`, `/results`, `/findings`).
#[derive(Clone, Default)]
pub struct DashboardBridge {
    state: SharedModel,
}

fn with_state(state: SharedModel) -> impl Filter<Extract = (SharedModel,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn read(state: &SharedModel) -> DashboardModel {
    state.read().unwrap_or_else(PoisonError::into_inner).clone()
}

impl DashboardBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, model: DashboardModel) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = model;
        info!(
            "[dashboard] {} routes, {} rows, {} findings",
            guard.routes.len(),
            guard.records.len(),
            guard.findings.len()
        );
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> DashboardModel {
        read(&self.state)
    }

    pub fn filters(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let routes = warp::path!("routes")
            .and(warp::get())
            .and(with_state(self.state.clone()))
            .map(|state: SharedModel| warp::reply::json(&read(&state).routes));

        let results = warp::path!("results")
            .and(warp::get())
            .and(with_state(self.state.clone()))
            .map(|state: SharedModel| warp::reply::json(&read(&state).records));

        let findings = warp::path!("findings")
            .and(warp::get())
            .and(with_state(self.state.clone()))
            .map(|state: SharedModel| warp::reply::json(&read(&state).findings));

        let summary = warp::path::end()
            .and(warp::get())
            .and(with_state(self.state.clone()))
            .map(|state: SharedModel| warp::reply::json(&read(&state)));

        routes.or(results).or(findings).or(summary)
    }

    /// Runs until Ctrl+C.
    pub async fn serve(&self, addr: SocketAddr) -> anyhow::Result<()> {
        let (bound, server) = warp::serve(self.filters())
            .try_bind_with_graceful_shutdown(addr, async {
                let _ = signal::ctrl_c().await;
            })
            .with_context(|| format!("binding dashboard bridge to {addr}"))?;
        info!("[dashboard] listening on http://{bound} (Ctrl+C to stop)");
        server.await;
        Ok(())
    }
}
