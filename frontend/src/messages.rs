// frontend/src/messages.rs
//
// Everything that can happen in the UI, and the side effects the reducers
// ask for in response.
//
use crate::error::ApiError;
use crate::models::{
    BmiRecord, CurrentUser, Exercise, ExercisePayload, RegisterPayload, Student, StudentPatch,
    Workout, WorkoutPayload,
};
use crate::router::Route;
use crate::toast::ToastKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseField {
    Name,
    Description,
    Repetitions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutField {
    Name,
    Description,
    Category,
    Series,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementField {
    Weight,
    Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Age,
    Weight,
    Height,
}

/// A delete waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingDeletion {
    Exercise { id: u32, name: String },
    Workout { id: u32, name: String },
    BmiRecord { id: u32 },
}

impl PendingDeletion {
    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> String {
        match self {
            PendingDeletion::Exercise { name, .. } => {
                format!("Tem certeza que deseja excluir o exercício \"{}\"?", name)
            }
            PendingDeletion::Workout { name, .. } => {
                format!("Tem certeza que deseja excluir o treino \"{}\"?", name)
            }
            PendingDeletion::BmiRecord { .. } => {
                "Tem certeza que deseja excluir este registro de IMC?".to_string()
            }
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            PendingDeletion::Exercise { .. } => "Exercício excluído com sucesso!",
            PendingDeletion::Workout { .. } => "Treino excluído com sucesso!",
            PendingDeletion::BmiRecord { .. } => "Registro de IMC excluído.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Routing & session
    RouteChanged(Route),
    SessionResolved {
        route: Route,
        user: Option<CurrentUser>,
    },
    SessionExpired,
    Logout,

    // Login / registration form
    UpdateAuthField(AuthField, String),
    SubmitAuthForm,
    LoginSucceeded { token: String },
    RegisterSucceeded,

    // Exercise catalog (admin)
    ExercisesLoaded(Vec<Exercise>),
    SetExerciseSearch(String),
    OpenExerciseDialog(Option<u32>), // None = create
    CloseExerciseDialog,
    UpdateExerciseField(ExerciseField, String),
    SubmitExerciseForm,
    ExerciseSaved { created: bool },

    // Confirmed deletes (exercise, workout, BMI record)
    RequestDeletion(PendingDeletion),
    CancelDeletion,
    ConfirmDeletion,
    Deleted(PendingDeletion),

    // Student record & workouts
    StudentLoaded(Student),
    SetWorkoutSearch(String),
    SetWorkoutCategory(String),
    OpenWorkoutDialog(Option<u32>), // None = create
    CloseWorkoutDialog,
    UpdateWorkoutField(WorkoutField, String),
    ToggleWorkoutExercise(u32),
    SubmitWorkoutForm,
    WorkoutSaved { created: bool },
    WorkoutLoaded(Workout),
    WorkoutNotFound,

    // BMI & measurements
    CalculateBmi,
    BmiRecorded(BmiRecord),
    ClearBmiResult,
    UpdateMeasurementField(MeasurementField, String),
    SubmitMeasurements,
    MeasurementsSaved(BmiRecord),

    // Profile
    StartProfileEdit,
    CancelProfileEdit,
    UpdateProfileField(ProfileField, String),
    SaveProfile,
    ProfileSaved,

    /// Any failed request other than a 401.
    ActionFailed(String),
}

impl Message {
    /// Map a request error to the message the reducers expect: 401 becomes
    /// a session expiry, everything else a transient failure.
    pub fn from_error(err: ApiError) -> Self {
        if err.is_unauthorized() {
            Message::SessionExpired
        } else {
            Message::ActionFailed(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Rebuild the current page from state
    Render,

    ShowToast(ToastKind, String),

    /// Blocking `window.alert`, used for form validation
    Alert(String),

    Navigate(Route),
    StoreToken(String),
    ClearToken,

    /// Validate the stored token against `/me` for a guarded route
    ResolveSession(Route),

    Login { email: String, password: String },
    Register(RegisterPayload),

    FetchExercises,
    CreateExercise(ExercisePayload),
    UpdateExercise { id: u32, payload: ExercisePayload },
    DeleteExercise(u32),

    FetchStudent(u32),
    PatchStudent { id: u32, patch: StudentPatch },
    /// PATCH weight/height, then record a BMI from them
    UpdateMeasurements { id: u32, weight_kg: f64, height_m: f64 },

    FetchWorkout(u32),
    CreateWorkout(WorkoutPayload),
    UpdateWorkout { id: u32, payload: WorkoutPayload },
    DeleteWorkout(u32),

    RecordBmi(u32),
    DeleteBmi(u32),
}

impl Command {
    pub fn success(msg: impl Into<String>) -> Self {
        Command::ShowToast(ToastKind::Success, msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Command::ShowToast(ToastKind::Error, msg.into())
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Command::ShowToast(ToastKind::Info, msg.into())
    }

    /// True for commands that hit the network.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Command::ResolveSession(_)
                | Command::Login { .. }
                | Command::Register(_)
                | Command::FetchExercises
                | Command::CreateExercise(_)
                | Command::UpdateExercise { .. }
                | Command::DeleteExercise(_)
                | Command::FetchStudent(_)
                | Command::PatchStudent { .. }
                | Command::UpdateMeasurements { .. }
                | Command::FetchWorkout(_)
                | Command::CreateWorkout(_)
                | Command::UpdateWorkout { .. }
                | Command::DeleteWorkout(_)
                | Command::RecordBmi(_)
                | Command::DeleteBmi(_)
        )
    }
}
