use std::env;
use std::str::FromStr;

use crate::meetings::status::MeetingStatus;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub smtp: Option<SmtpConfig>,
    pub booking: BookingConfig,
    pub jobs: JobsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub relay: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

/// Initial status of a slot-based booking. Some deployments want the
/// institution to confirm every request, others auto-confirm; this is a
/// deployment policy, not something the status machine decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingPolicy {
    Pending,
    Confirmed,
}

impl BookingPolicy {
    pub fn initial_status(self) -> MeetingStatus {
        match self {
            BookingPolicy::Pending => MeetingStatus::Pending,
            BookingPolicy::Confirmed => MeetingStatus::Confirmed,
        }
    }
}

impl FromStr for BookingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(BookingPolicy::Pending),
            "confirmed" => Ok(BookingPolicy::Confirmed),
            other => Err(format!("unknown booking policy: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub policy: BookingPolicy,
}

#[derive(Debug, Clone)]
pub struct JobsConfig {
    pub reminder_cron: String,
    pub completion_cron: String,
    /// Half-width of the reminder selection window. Must be at least as
    /// wide as the trigger cadence or meetings fall between runs.
    pub reminder_tolerance_minutes: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8470,
            },
            smtp: None,
            booking: BookingConfig {
                policy: BookingPolicy::Pending,
            },
            jobs: JobsConfig {
                reminder_cron: "0 */5 * * * *".to_string(),
                completion_cron: "0 */5 * * * *".to_string(),
                reminder_tolerance_minutes: 60,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let get = |key: &str, default: String| env::var(key).unwrap_or(default);

        let smtp = env::var("MEETSERVER_SMTP_RELAY").ok().map(|relay| SmtpConfig {
            relay,
            port: env::var("MEETSERVER_SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(587),
            username: get("MEETSERVER_SMTP_USERNAME", String::new()),
            password: get("MEETSERVER_SMTP_PASSWORD", String::new()),
            from_address: get(
                "MEETSERVER_SMTP_FROM",
                "meetings@meetserver.local".to_string(),
            ),
        });

        Self {
            server: ServerConfig {
                host: get("MEETSERVER_HOST", defaults.server.host),
                port: env::var("MEETSERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            smtp,
            booking: BookingConfig {
                policy: env::var("MEETSERVER_BOOKING_STATUS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.booking.policy),
            },
            jobs: JobsConfig {
                reminder_cron: get("MEETSERVER_REMINDER_CRON", defaults.jobs.reminder_cron),
                completion_cron: get("MEETSERVER_COMPLETION_CRON", defaults.jobs.completion_cron),
                reminder_tolerance_minutes: env::var("MEETSERVER_REMINDER_TOLERANCE_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.jobs.reminder_tolerance_minutes),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_policy_parses() {
        assert_eq!(
            "pending".parse::<BookingPolicy>().unwrap(),
            BookingPolicy::Pending
        );
        assert_eq!(
            "CONFIRMED".parse::<BookingPolicy>().unwrap(),
            BookingPolicy::Confirmed
        );
        assert!("auto".parse::<BookingPolicy>().is_err());
    }

    #[test]
    fn policy_maps_to_initial_status() {
        assert_eq!(
            BookingPolicy::Pending.initial_status(),
            MeetingStatus::Pending
        );
        assert_eq!(
            BookingPolicy::Confirmed.initial_status(),
            MeetingStatus::Confirmed
        );
    }
}
