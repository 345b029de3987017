use std::future::Future;

use crate::auth::session::fetch_current_user;
use crate::error::{ApiError, ApiResult};
use crate::messages::{Command, Message, PendingDeletion};
use crate::models::StudentPatch;
use crate::network::api_client::ApiClient;
use crate::state::dispatch_global_message;
use crate::{debug_log, router, storage, toast, views};

const MSG_BAD_CREDENTIALS: &str = "E-mail ou senha inválidos.";

/// Run a request future and feed its resulting message back into the loop.
fn spawn_request<F>(label: &'static str, fut: F)
where
    F: Future<Output = Message> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let msg = fut.await;
        if let Message::ActionFailed(reason) = &msg {
            web_sys::console::error_1(&format!("{} failed: {}", label, reason).into());
        }
        dispatch_global_message(msg);
    });
}

fn settle<T>(result: ApiResult<T>, on_ok: impl FnOnce(T) -> Message) -> Message {
    match result {
        Ok(value) => on_ok(value),
        Err(e) => Message::from_error(e),
    }
}

pub fn execute(cmd: Command) {
    match cmd {
        Command::Render => {
            if let Err(e) = views::render_current() {
                web_sys::console::error_1(&format!("Failed to render: {:?}", e).into());
            }
        }
        Command::ShowToast(kind, text) => toast::show(&text, kind),
        Command::Alert(text) => {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&text);
            }
        }
        Command::Navigate(route) => router::navigate(&route),
        Command::StoreToken(token) => {
            if let Err(e) = storage::store_token(&token) {
                web_sys::console::error_1(&format!("Failed to store token: {:?}", e).into());
            }
        }
        Command::ClearToken => storage::clear_token(),
        other => execute_request(other),
    }
}

fn execute_request(cmd: Command) {
    match cmd {
        Command::ResolveSession(route) => {
            wasm_bindgen_futures::spawn_local(async move {
                let user = fetch_current_user().await;
                debug_log!("Session for {:?}: {:?}", route, user);
                dispatch_global_message(Message::SessionResolved { route, user });
            });
        }

        Command::Login { email, password } => spawn_request("login", async move {
            match ApiClient::login(&email, &password).await {
                Ok(token) => Message::LoginSucceeded { token: token.access_token },
                // Bad credentials come back as 401 too; there is no session to expire.
                Err(ApiError::Unauthorized) => Message::ActionFailed(MSG_BAD_CREDENTIALS.to_string()),
                Err(e) => Message::ActionFailed(e.to_string()),
            }
        }),
        Command::Register(payload) => spawn_request("register", async move {
            match ApiClient::register(&payload).await {
                Ok(()) => Message::RegisterSucceeded,
                Err(e) => Message::ActionFailed(e.to_string()),
            }
        }),

        Command::FetchExercises => spawn_request("fetch exercises", async {
            settle(ApiClient::list_exercises().await, Message::ExercisesLoaded)
        }),
        Command::CreateExercise(payload) => spawn_request("create exercise", async move {
            settle(ApiClient::create_exercise(&payload).await, |_| Message::ExerciseSaved {
                created: true,
            })
        }),
        Command::UpdateExercise { id, payload } => spawn_request("update exercise", async move {
            settle(ApiClient::update_exercise(id, &payload).await, |_| Message::ExerciseSaved {
                created: false,
            })
        }),
        Command::DeleteExercise(id) => spawn_request("delete exercise", async move {
            settle(ApiClient::delete_exercise(id).await, |_| {
                Message::Deleted(PendingDeletion::Exercise { id, name: String::new() })
            })
        }),

        Command::FetchStudent(id) => spawn_request("fetch student", async move {
            settle(ApiClient::get_student(id).await, Message::StudentLoaded)
        }),
        Command::PatchStudent { id, patch } => spawn_request("update profile", async move {
            settle(ApiClient::patch_student(id, &patch).await, |_| Message::ProfileSaved)
        }),
        Command::UpdateMeasurements { id, weight_kg, height_m } => {
            spawn_request("update measurements", async move {
                let patch = StudentPatch::measurements(weight_kg, height_m);
                let result = match ApiClient::patch_student(id, &patch).await {
                    Ok(()) => ApiClient::record_bmi(id).await,
                    Err(e) => Err(e),
                };
                settle(result, Message::MeasurementsSaved)
            })
        }

        Command::FetchWorkout(id) => spawn_request("fetch workout", async move {
            match ApiClient::get_workout(id).await {
                Ok(workout) => Message::WorkoutLoaded(workout),
                Err(ApiError::Unauthorized) => Message::SessionExpired,
                Err(e) => {
                    web_sys::console::warn_1(&format!("Workout {} unavailable: {}", id, e).into());
                    Message::WorkoutNotFound
                }
            }
        }),
        Command::CreateWorkout(payload) => spawn_request("create workout", async move {
            settle(ApiClient::create_workout(&payload).await, |_| Message::WorkoutSaved {
                created: true,
            })
        }),
        Command::UpdateWorkout { id, payload } => spawn_request("update workout", async move {
            settle(ApiClient::update_workout(id, &payload).await, |_| Message::WorkoutSaved {
                created: false,
            })
        }),
        Command::DeleteWorkout(id) => spawn_request("delete workout", async move {
            settle(ApiClient::delete_workout(id).await, |_| {
                Message::Deleted(PendingDeletion::Workout { id, name: String::new() })
            })
        }),

        Command::RecordBmi(student_id) => spawn_request("record bmi", async move {
            settle(ApiClient::record_bmi(student_id).await, Message::BmiRecorded)
        }),
        Command::DeleteBmi(id) => spawn_request("delete bmi", async move {
            settle(ApiClient::delete_bmi(id).await, |_| {
                Message::Deleted(PendingDeletion::BmiRecord { id })
            })
        }),

        other => debug_log!("No executor for {:?}", other),
    }
}
