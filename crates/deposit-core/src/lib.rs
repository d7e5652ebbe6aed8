//! Origination core: state, navigation/auth gating, and the asynchronous
//! submission lifecycle, behind an event-driven session facade.

pub mod error;
pub mod notify;
pub mod service;
pub mod session;
pub mod state;
pub mod viewmodel;

pub use error::{ServiceError, ServiceResult};
pub use notify::NotificationSlot;
pub use service::{DepositService, SimulatedService};
pub use session::{Event, Session};
pub use state::AppState;
pub use viewmodel::{SummaryLine, ViewModel};
