//! Bounded polling for services without a health check
//!
//! The database container reports "running" long before MariaDB accepts
//! connections. We probe it with a query that echoes a sentinel and give up
//! quietly after a fixed number of attempts: the run carries on hoping the
//! database is there by the time it is needed.

use std::time::Duration;

use crate::dialect::DialectPrefix;
use crate::runner::CommandRunner;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Value echoed back by the database probe
pub const DATABASE_SENTINEL: &str = "1234567890";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessCheck {
    pub command: String,
    pub sentinel: String,
    pub max_attempts: u32,
    pub interval: Duration,
}

impl ReadinessCheck {
    /// Probe MariaDB in the `mariadb` service with the credentials from `.env`
    pub fn database(dialect: &DialectPrefix) -> Self {
        let query = dialect.command(&format!(
            "exec -u root mariadb mysql -u${{DB_USER}} -p${{DB_PASSWORD}} ${{DB_NAME}} -e \"SELECT {DATABASE_SENTINEL} AS result\""
        ));
        Self {
            command: format!(". ./.env; {query}"),
            sentinel: DATABASE_SENTINEL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_policy(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.interval = interval;
        self
    }

    /// Exactly one output line carries the sentinel
    pub fn is_satisfied_by(&self, output: &str) -> bool {
        output
            .lines()
            .filter(|line| line.contains(self.sentinel.as_str()))
            .count()
            == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready { attempts: u32 },
    Exhausted { attempts: u32 },
}

impl Readiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, Readiness::Ready { .. })
    }

    pub fn attempts(&self) -> u32 {
        match self {
            Readiness::Ready { attempts } | Readiness::Exhausted { attempts } => *attempts,
        }
    }
}

/// Poll `check.command` until it reports the sentinel or attempts run out.
///
/// Never fails: exhaustion is announced and reported as
/// [`Readiness::Exhausted`].
pub fn wait_for<R: CommandRunner + ?Sized>(runner: &R, check: &ReadinessCheck) -> Readiness {
    let mut remaining = check.max_attempts;
    let mut attempts = 0;

    while remaining > 0 {
        attempts += 1;
        println!("Waiting for database to be ready....");

        let ready = match runner.run_captured(&check.command) {
            Ok(output) => check.is_satisfied_by(&output),
            Err(e) => {
                tracing::debug!(error = %e, "readiness probe could not run");
                false
            }
        };

        if ready {
            println!("Database ready!");
            return Readiness::Ready { attempts };
        }

        std::thread::sleep(check.interval);
        remaining -= 1;
    }

    tracing::warn!(attempts, "readiness probe never reported the sentinel");
    println!("Could not detect if database is ready, trying to continue hoping it is ready");
    Readiness::Exhausted { attempts }
}
