use crate::matching::models::WorkType;

/// Upper bound of the location/work-type bonus.
pub const MAX_LOCATION_BONUS: f64 = 0.2;

const REMOTE_MATCH_BONUS: f64 = 0.15;
const HYBRID_MATCH_BONUS: f64 = 0.10;
const LOCATION_MATCH_BONUS: f64 = 0.05;

/// Bonus in [0, 0.2] for work-type and geographic alignment.
///
/// Work type: remote/remote earns 0.15, else hybrid preference against a
/// hybrid or remote job earns 0.10. Independently, locations where one
/// contains the other (case-insensitive) earn 0.05. The sum is capped.
pub fn location_bonus(
    user_location: Option<&str>,
    user_work_type: Option<WorkType>,
    job_location: Option<&str>,
    job_work_type: Option<WorkType>,
) -> f64 {
    let mut bonus = 0.0;

    match (user_work_type, job_work_type) {
        (Some(WorkType::Remote), Some(WorkType::Remote)) => bonus += REMOTE_MATCH_BONUS,
        (Some(WorkType::Hybrid), Some(WorkType::Hybrid | WorkType::Remote)) => {
            bonus += HYBRID_MATCH_BONUS
        }
        _ => {}
    }

    if let (Some(user_loc), Some(job_loc)) = (non_empty(user_location), non_empty(job_location)) {
        let user_loc = user_loc.to_lowercase();
        let job_loc = job_loc.to_lowercase();
        if job_loc.contains(&user_loc) || user_loc.contains(&job_loc) {
            bonus += LOCATION_MATCH_BONUS;
        }
    }

    bonus.min(MAX_LOCATION_BONUS)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
