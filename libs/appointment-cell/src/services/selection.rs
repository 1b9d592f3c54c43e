// libs/appointment-cell/src/services/selection.rs
use std::cmp::Reverse;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::debug;

use shared_config::DoctorSelectionPolicy;
use shared_models::{AppointmentRequest, Doctor};

/// Picks one doctor out of the eligible candidates for a pending request.
///
/// `candidates` are already filtered to available doctors of the requested
/// specialization, in directory insertion order. Returning `None` means no
/// doctor can be assigned and the request stays pending.
pub trait DoctorSelectionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn select<'a>(
        &self,
        request: &AppointmentRequest,
        candidates: &'a [Doctor],
    ) -> Option<&'a Doctor>;
}

/// First candidate in directory order.
#[derive(Debug, Default)]
pub struct FirstAvailable;

impl DoctorSelectionStrategy for FirstAvailable {
    fn name(&self) -> &'static str {
        "first_available"
    }

    fn select<'a>(&self, _request: &AppointmentRequest, candidates: &'a [Doctor]) -> Option<&'a Doctor> {
        candidates.first()
    }
}

/// Most years of experience; ties go to the earlier directory entry.
#[derive(Debug, Default)]
pub struct MostExperienced;

impl DoctorSelectionStrategy for MostExperienced {
    fn name(&self) -> &'static str {
        "most_experienced"
    }

    fn select<'a>(&self, _request: &AppointmentRequest, candidates: &'a [Doctor]) -> Option<&'a Doctor> {
        candidates.iter().min_by_key(|d| Reverse(d.experience))
    }
}

/// Rotates a shared cursor over whatever candidate list it is given.
#[derive(Debug, Default)]
pub struct RoundRobin {
    cursor: AtomicUsize,
}

impl DoctorSelectionStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    fn select<'a>(&self, request: &AppointmentRequest, candidates: &'a [Doctor]) -> Option<&'a Doctor> {
        if candidates.is_empty() {
            return None;
        }

        let turn = self.cursor.fetch_add(1, Ordering::Relaxed);
        let picked = &candidates[turn % candidates.len()];
        debug!("Round robin turn {} picked doctor {} for request {}", turn, picked.id, request.id);
        Some(picked)
    }
}

pub fn strategy_for(policy: DoctorSelectionPolicy) -> Arc<dyn DoctorSelectionStrategy> {
    match policy {
        DoctorSelectionPolicy::FirstAvailable => Arc::new(FirstAvailable),
        DoctorSelectionPolicy::MostExperienced => Arc::new(MostExperienced),
        DoctorSelectionPolicy::RoundRobin => Arc::new(RoundRobin::default()),
    }
}
