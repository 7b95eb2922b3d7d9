//! The single handle callers depend on.

use std::fmt;
use std::sync::Arc;

use crate::services::{ProgressService, UserService, WorkoutService};

/// Composes the three domain services.
///
/// Which backend sits behind the handle is decided once, when it is built;
/// nothing downstream can tell the difference. Cloning is cheap and shares
/// the underlying services.
#[derive(Clone)]
pub struct DataService {
    pub workout: Arc<dyn WorkoutService>,
    pub progress: Arc<dyn ProgressService>,
    pub user: Arc<dyn UserService>,
}

impl DataService {
    pub fn new(
        workout: Arc<dyn WorkoutService>,
        progress: Arc<dyn ProgressService>,
        user: Arc<dyn UserService>,
    ) -> Self {
        Self {
            workout,
            progress,
            user,
        }
    }

    /// Backend name reported by the workout service.
    pub fn backend(&self) -> &str {
        self.workout.backend()
    }
}

impl fmt::Debug for DataService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataService")
            .field("workout", &self.workout.backend())
            .field("progress", &self.progress.backend())
            .field("user", &self.user.backend())
            .finish()
    }
}
