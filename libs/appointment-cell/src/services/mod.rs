pub mod appointment;
pub mod lifecycle;
pub mod matching;
pub mod request;
pub mod selection;

pub use appointment::AppointmentService;
pub use lifecycle::RequestLifecycleService;
pub use matching::MatchingService;
pub use request::AppointmentRequestService;
pub use selection::{
    strategy_for, DoctorSelectionStrategy, FirstAvailable, MostExperienced, RoundRobin,
};
