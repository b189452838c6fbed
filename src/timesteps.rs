//! Time-step selection
//!
//! Turns the optional `-t/--timesteps` list into the ordered column indices
//! to process for one dataset.

use crate::errors::{PerfDumpError, Result};

/// Resolves the time steps to process for a dataset with `steps` columns.
///
/// With no list (or an empty one) every step is selected in order. An
/// explicit list is validated up front: any entry outside `[0, steps - 1]`
/// fails the whole selection. Repeated entries keep their first position.
///
/// # Errors
///
/// Returns [`PerfDumpError::InvalidTimestep`] for the first out-of-range entry.
pub fn resolve_timesteps(steps: usize, requested: Option<&[i64]>) -> Result<Vec<usize>> {
    let requested = match requested {
        Some(list) if !list.is_empty() => list,
        _ => return Ok((0..steps).collect()),
    };

    if let Some(&bad) = requested
        .iter()
        .find(|&&s| s < 0 || s as u64 >= steps as u64)
    {
        return Err(PerfDumpError::InvalidTimestep {
            requested: bad,
            steps,
        });
    }

    let mut resolved: Vec<usize> = Vec::with_capacity(requested.len());
    for &s in requested {
        let step = s as usize;
        if resolved.contains(&step) {
            log::warn!("time step {step} requested more than once, ignoring repeat");
            continue;
        }
        resolved.push(step);
    }

    Ok(resolved)
}
