//! Per-job base stats.

use crate::types::Job;

pub struct JobStats {
    pub movement: i32,
}

pub fn get_job_stats(job: Job) -> JobStats {
    match job {
        Job::Smallfolk => JobStats { movement: 3 },
        Job::Noble => JobStats { movement: 4 },
    }
}
