use std::cell::RefCell;

use crate::debug_log;
use crate::forms::{AuthForm, ExerciseForm, MeasurementForm, ProfileForm, WorkoutForm};
use crate::messages::{Command, Message, PendingDeletion};
use crate::metrics::BmiResult;
use crate::models::{CurrentUser, Exercise, Student, Workout};
use crate::router::Route;
use crate::update::update;

/// Where the route guard stands for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStatus {
    /// Public route, nothing to check.
    Idle,
    /// Waiting for `/me`.
    Resolving,
    Authorized,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetail {
    Loading,
    Loaded(Workout),
    NotFound,
}

// Store global application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub route: Route,
    pub guard: GuardStatus,
    pub current_user: Option<CurrentUser>,

    /// An action (submit, delete, calculate) is in flight.
    pub busy: bool,

    pub auth_form: AuthForm,

    // Admin catalog; also the checkbox list of the workout dialog
    pub exercises: Vec<Exercise>,
    pub exercises_loaded: bool,
    pub exercise_search: String,
    pub exercise_dialog: Option<ExerciseForm>,

    pub pending_deletion: Option<PendingDeletion>,

    // Student pages
    pub student: Option<Student>,
    pub workout_search: String,
    pub workout_category: String,
    pub workout_dialog: Option<WorkoutForm>,
    pub workout_detail: WorkoutDetail,
    pub bmi_result: Option<BmiResult>,
    pub measurements: MeasurementForm,
    /// `Some` while the profile is being edited.
    pub profile_form: Option<ProfileForm>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Home,
            guard: GuardStatus::Idle,
            current_user: None,
            busy: false,
            auth_form: AuthForm::default(),
            exercises: Vec::new(),
            exercises_loaded: false,
            exercise_search: String::new(),
            exercise_dialog: None,
            pending_deletion: None,
            student: None,
            workout_search: String::new(),
            workout_category: String::new(),
            workout_dialog: None,
            workout_detail: WorkoutDetail::Loading,
            bmi_result: None,
            measurements: MeasurementForm::default(),
            profile_form: None,
        }
    }

    /// Drop everything that belongs to the page being left.
    pub fn reset_page_state(&mut self) {
        self.busy = false;
        self.exercises.clear();
        self.exercises_loaded = false;
        self.exercise_search.clear();
        self.exercise_dialog = None;
        self.pending_deletion = None;
        self.student = None;
        self.workout_search.clear();
        self.workout_category.clear();
        self.workout_dialog = None;
        self.workout_detail = WorkoutDetail::Loading;
        self.bmi_result = None;
        self.measurements = MeasurementForm::default();
        self.profile_form = None;
    }

    /// Page content may be shown: public route, or the guard said yes.
    pub fn page_visible(&self) -> bool {
        !self.route.is_guarded() || self.guard == GuardStatus::Authorized
    }

    /// Id used for `/Aluno/{id}`. Students are keyed by their account id.
    pub fn student_id(&self) -> Option<u32> {
        self.student
            .as_ref()
            .map(|s| s.id)
            .or_else(|| self.current_user.as_ref().map(|u| u.id))
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        debug_log!("dispatch: {:?}", msg);
        update(self, msg)
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Global helper function for dispatching messages with proper UI refresh handling
pub fn dispatch_global_message(msg: Message) {
    // The borrow must end before any command runs: executors and renderers
    // read the state again.
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        crate::command_executors::execute(cmd);
    }
}
