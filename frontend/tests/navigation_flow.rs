//! Drives the reducer the way the browser would: hash change, `/me` answer,
//! page data arriving, user actions. No DOM or network is involved; the
//! commands the app would execute are asserted instead.
//!
//! Run with: cargo test --test navigation_flow

use wegogym_frontend::messages::{Command, Message, PendingDeletion};
use wegogym_frontend::models::{CurrentUser, Role, Student};
use wegogym_frontend::router::Route;
use wegogym_frontend::state::{AppState, GuardStatus};

fn student_json() -> Student {
    serde_json::from_str(
        r#"{
            "id_aluno": 7,
            "nome_aluno": "Bruno Lima",
            "email": "bruno@wgg.com",
            "idade": 31,
            "peso_kg": 82.0,
            "altura": 1.8,
            "treinos": [
                {"id_treino": 3, "nome_treino": "Treino A", "categoria": "Força", "num_series": 4,
                 "exercicios": [{"id_exercicio": 1, "nome_exercicio": "Agachamento", "num_repeticoes": 12}]},
                {"id_treino": 4, "nome_treino": "Corrida leve", "categoria": "Cardio", "num_series": 1}
            ],
            "historico_imc": []
        }"#,
    )
    .expect("valid student payload")
}

fn me(role: Role) -> Option<CurrentUser> {
    Some(CurrentUser { id: 7, email: "bruno@wgg.com".into(), role })
}

#[test]
fn student_reaches_dashboard_and_deletes_a_workout() {
    let mut state = AppState::new();

    let cmds = state.dispatch(Message::RouteChanged(Route::from_hash("#/student")));
    assert_eq!(cmds.first(), Some(&Command::ResolveSession(Route::StudentDashboard)));
    assert!(!state.page_visible());

    let cmds = state.dispatch(Message::SessionResolved {
        route: Route::StudentDashboard,
        user: me(Role::Student),
    });
    assert_eq!(state.guard, GuardStatus::Authorized);
    assert!(cmds.contains(&Command::FetchStudent(7)));

    state.dispatch(Message::StudentLoaded(student_json()));
    assert_eq!(state.student.as_ref().map(|s| s.workouts.len()), Some(2));
    // Measurements form is seeded from the record.
    assert_eq!(state.measurements.weight, "82.00");

    state.dispatch(Message::RequestDeletion(PendingDeletion::Workout { id: 3, name: "Treino A".into() }));
    let cmds = state.dispatch(Message::ConfirmDeletion);
    assert_eq!(cmds.first(), Some(&Command::DeleteWorkout(3)));
    assert!(state.busy);

    let cmds = state.dispatch(Message::Deleted(PendingDeletion::Workout { id: 3, name: "Treino A".into() }));
    assert!(!state.busy);
    assert!(cmds.contains(&Command::FetchStudent(7)));
}

#[test]
fn student_is_kept_out_of_the_admin_area() {
    let mut state = AppState::new();
    state.dispatch(Message::RouteChanged(Route::from_hash("#/admin")));
    let cmds = state.dispatch(Message::SessionResolved {
        route: Route::Admin,
        user: me(Role::Student),
    });
    assert_eq!(cmds, vec![Command::Navigate(Route::Unauthorized)]);
    assert!(!cmds.contains(&Command::FetchExercises));

    let cmds = state.dispatch(Message::RouteChanged(Route::from_hash("#/unauthorized")));
    assert_eq!(cmds, vec![Command::Render]);
    assert!(state.page_visible());
}

#[test]
fn expired_session_mid_page_sends_user_to_login() {
    let mut state = AppState::new();
    state.dispatch(Message::RouteChanged(Route::Progress));
    state.dispatch(Message::SessionResolved { route: Route::Progress, user: me(Role::Student) });

    let cmds = state.dispatch(Message::SessionExpired);
    assert!(cmds.contains(&Command::ClearToken));
    assert_eq!(cmds.last(), Some(&Command::Navigate(Route::Login)));

    let cmds = state.dispatch(Message::RouteChanged(Route::Login));
    assert_eq!(cmds, vec![Command::Render]);
    assert!(state.current_user.is_none());
}

#[test]
fn unknown_hashes_fall_back_to_home() {
    assert_eq!(Route::from_hash("#/nowhere"), Route::Home);
    assert_eq!(Route::from_hash(""), Route::Home);
    assert_eq!(Route::from_hash("#/student/workouts/12"), Route::WorkoutDetail(12));
}
