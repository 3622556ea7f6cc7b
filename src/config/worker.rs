//! Background worker (task queue) settings.
//!
//! Parameterizes the distributed task queue that runs SQL Lab queries,
//! scheduled reports, thumbnail generation and cache warmup. The queue
//! itself lives elsewhere; this module only supplies its configuration.

use serde::Serialize;

use super::constants::{SQL_LAB_RATE_LIMIT, WORKER_PREFETCH_MULTIPLIER};
use super::redis::RedisSettings;

/// Minute/hour cron pattern, the only fields the beat schedule uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronPattern {
    pub minute: String,
    pub hour: String,
}

impl CronPattern {
    pub fn every_minute() -> Self {
        Self {
            minute: "*".to_string(),
            hour: "*".to_string(),
        }
    }

    pub fn daily_at_midnight() -> Self {
        Self {
            minute: "0".to_string(),
            hour: "0".to_string(),
        }
    }
}

/// One periodically scheduled task.
#[derive(Debug, Clone, Serialize)]
pub struct BeatEntry {
    pub name: String,
    pub task: String,
    pub schedule: CronPattern,
}

/// Per-task throttling annotation.
#[derive(Debug, Clone, Serialize)]
pub struct TaskAnnotation {
    pub task: String,
    pub rate_limit: String,
}

/// Task queue configuration.
#[derive(Clone, Serialize)]
pub struct WorkerSettings {
    #[serde(skip_serializing)]
    broker_url: String,
    #[serde(skip_serializing)]
    result_backend: String,
    pub imports: Vec<String>,
    pub prefetch_multiplier: u32,
    pub acks_late: bool,
    pub annotations: Vec<TaskAnnotation>,
    pub beat_schedule: Vec<BeatEntry>,
}

impl WorkerSettings {
    pub fn load(redis: &RedisSettings) -> Self {
        Self {
            broker_url: redis.url().to_string(),
            result_backend: redis.url().to_string(),
            // Pass-through values: the queue resolves these as module
            // paths of the host application, so they keep its namespace.
            imports: vec![
                "superset.sql_lab".to_string(),
                "superset.tasks.scheduler".to_string(),
                "superset.tasks.thumbnails".to_string(),
                "superset.tasks.cache".to_string(),
            ],
            prefetch_multiplier: WORKER_PREFETCH_MULTIPLIER,
            acks_late: true,
            annotations: vec![TaskAnnotation {
                task: "sql_lab.get_sql_results".to_string(),
                rate_limit: SQL_LAB_RATE_LIMIT.to_string(),
            }],
            beat_schedule: vec![
                BeatEntry {
                    name: "reports.scheduler".to_string(),
                    task: "reports.scheduler".to_string(),
                    schedule: CronPattern::every_minute(),
                },
                BeatEntry {
                    name: "reports.prune_log".to_string(),
                    task: "reports.prune_log".to_string(),
                    schedule: CronPattern::daily_at_midnight(),
                },
            ],
        }
    }

    /// Queue broker URL (same Redis instance as everything else).
    pub fn broker_url(&self) -> &str {
        &self.broker_url
    }

    pub fn result_backend(&self) -> &str {
        &self.result_backend
    }
}

impl std::fmt::Debug for WorkerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerSettings")
            .field("broker_url", &"[REDACTED]")
            .field("result_backend", &"[REDACTED]")
            .field("imports", &self.imports)
            .field("prefetch_multiplier", &self.prefetch_multiplier)
            .field("acks_late", &self.acks_late)
            .field("annotations", &self.annotations)
            .field("beat_schedule", &self.beat_schedule)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::Env;
    use std::collections::HashMap;

    fn redis() -> RedisSettings {
        RedisSettings::load(&Env::from_map(HashMap::from([(
            "REDIS_URL".to_string(),
            "redis://queue.internal:6379/1".to_string(),
        )])))
    }

    #[test]
    fn broker_and_backend_share_the_redis_url() {
        let settings = WorkerSettings::load(&redis());
        assert_eq!(settings.broker_url(), "redis://queue.internal:6379/1");
        assert_eq!(settings.result_backend(), settings.broker_url());
    }

    #[test]
    fn imports_keep_the_host_application_namespace() {
        let settings = WorkerSettings::load(&redis());
        assert_eq!(
            settings.imports,
            vec![
                "superset.sql_lab",
                "superset.tasks.scheduler",
                "superset.tasks.thumbnails",
                "superset.tasks.cache",
            ]
        );
    }

    #[test]
    fn fair_scheduling_parameters() {
        let settings = WorkerSettings::load(&redis());
        assert_eq!(settings.prefetch_multiplier, 1);
        assert!(settings.acks_late);
    }

    #[test]
    fn sql_lab_results_are_rate_limited() {
        let settings = WorkerSettings::load(&redis());
        let annotation = settings
            .annotations
            .iter()
            .find(|a| a.task == "sql_lab.get_sql_results")
            .expect("sql_lab annotation");
        assert_eq!(annotation.rate_limit, "100/s");
    }

    #[test]
    fn beat_schedule_covers_reports() {
        let settings = WorkerSettings::load(&redis());
        assert_eq!(settings.beat_schedule.len(), 2);
        let scheduler = &settings.beat_schedule[0];
        assert_eq!(scheduler.task, "reports.scheduler");
        assert_eq!(scheduler.schedule, CronPattern::every_minute());
        let prune = &settings.beat_schedule[1];
        assert_eq!(prune.task, "reports.prune_log");
        assert_eq!(prune.schedule, CronPattern::daily_at_midnight());
    }
}
