//! Health report for the running service
//!
//! A report is a list of component checks folded into a single score.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

/// Share of healthy components needed for the service to report healthy
const HEALTHY_THRESHOLD: f64 = 0.8;

/// Overall health of the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub is_healthy: bool,

    /// Healthy components divided by total components, 1.0 when empty
    pub score: f64,

    pub message: Option<String>,
    pub components: Vec<ComponentHealth>,

    /// Unix timestamp of the check
    pub timestamp: i64,

    pub uptime_seconds: i64,
}

impl HealthStatus {
    pub fn new() -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            message: None,
            components: Vec::new(),
            timestamp: Utc::now().timestamp(),
            uptime_seconds: 0,
        }
    }

    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_uptime(mut self, seconds: i64) -> Self {
        self.uptime_seconds = seconds;
        self
    }

    /// Fold component results into `score` and `is_healthy`.
    ///
    /// Call after every component has been added.
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_score(&mut self) {
        if self.components.is_empty() {
            return;
        }

        let healthy = self.components.iter().filter(|c| c.is_healthy).count();
        self.score = healthy as f64 / self.components.len() as f64;
        self.is_healthy = self.score >= HEALTHY_THRESHOLD;

        if !self.is_healthy {
            let failing: Vec<&str> = self
                .components
                .iter()
                .filter(|c| !c.is_healthy)
                .map(|c| c.name.as_str())
                .collect();
            self.message = Some(format!("degraded: {}", failing.join(", ")));
        }
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health of a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub is_healthy: bool,
    pub message: Option<String>,
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}

/// Check the directory and the static asset folder of a running context.
pub fn check(ctx: &AppContext) -> HealthStatus {
    let directory = if ctx.directory.is_empty() {
        ComponentHealth::unhealthy("directory", "no activities loaded")
    } else {
        ComponentHealth {
            name: "directory".to_string(),
            is_healthy: true,
            message: Some(format!(
                "{} activities, {} registrations",
                ctx.directory.len(),
                ctx.directory.participant_count()
            )),
        }
    };

    let static_dir = &ctx.config.server.static_dir;
    let assets = if static_dir.is_dir() {
        ComponentHealth::healthy("static_assets")
    } else {
        ComponentHealth::unhealthy(
            "static_assets",
            format!("{} is not a directory", static_dir.display()),
        )
    };

    let mut status = HealthStatus::new()
        .with_uptime(ctx.uptime_seconds())
        .add_component(directory)
        .add_component(assets);
    status.calculate_score();
    status
}
