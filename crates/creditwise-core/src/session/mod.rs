pub mod engine;
pub mod state;

pub use engine::{
    assess, new_session, normalize_stats, record_action, record_login,
    record_profile_update, refresh_achievements, Assessment,
};
pub use state::{MemoryStore, SessionState, SessionStore};
