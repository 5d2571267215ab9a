//! Per-scope rate limit thresholds.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::RateScope;

/// Request thresholds per client per rolling window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Window length in seconds.
    pub window_seconds: u64,
    /// `GET /library`
    pub list: u32,
    /// `POST /library`
    pub create: u32,
    /// `GET /library/{id}`
    pub detail: u32,
    /// `PATCH /library/{id}`
    pub update: u32,
    /// `DELETE /library/{id}`
    pub delete: u32,
    /// `GET /library/stats`
    pub stats: u32,
    /// `DELETE /library/clear`
    pub clear: u32,
    /// Everything else.
    pub anon: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_seconds: 60,
            list: 60,
            create: 10,
            detail: 60,
            update: 20,
            delete: 20,
            stats: 30,
            clear: 5,
            anon: 60,
        }
    }
}

impl RateLimitConfig {
    /// Threshold for the given scope.
    pub fn threshold(&self, scope: RateScope) -> u32 {
        match scope {
            RateScope::List => self.list,
            RateScope::Create => self.create,
            RateScope::Detail => self.detail,
            RateScope::Update => self.update,
            RateScope::Delete => self.delete,
            RateScope::Stats => self.stats,
            RateScope::Clear => self.clear,
            RateScope::Anon => self.anon,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), AppError> {
        if self.window_seconds == 0 {
            return Err(AppError::configuration(
                "rate_limit.window_seconds must be greater than zero",
            ));
        }
        for scope in RateScope::ALL {
            if self.threshold(scope) == 0 {
                return Err(AppError::configuration(format!(
                    "rate_limit.{scope} must be greater than zero"
                )));
            }
        }
        Ok(())
    }
}
