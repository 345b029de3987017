//! Fixtures shared by the reducer tests.

use crate::models::{CurrentUser, Exercise, Role, Student, Workout};
use crate::router::Route;
use crate::state::{AppState, GuardStatus};

pub fn user(role: Role) -> CurrentUser {
    CurrentUser {
        id: 1,
        email: "ana@wgg.com".into(),
        role,
    }
}

/// State as it looks once the guard let the user into their landing page.
pub fn signed_in(role: Role) -> AppState {
    let mut state = AppState::new();
    state.route = Route::home_for(Some(role));
    state.guard = GuardStatus::Authorized;
    state.current_user = Some(user(role));
    state
}

pub fn exercise(id: u32, name: &str) -> Exercise {
    Exercise {
        id,
        name: name.into(),
        description: format!("{} descrição", name),
        repetitions: 10,
    }
}

pub fn workout(id: u32) -> Workout {
    Workout {
        id,
        name: format!("Treino {}", id),
        description: String::new(),
        category: "Força".into(),
        series: 3,
        student_id: Some(1),
        exercises: vec![exercise(id * 10, "Supino")],
    }
}

pub fn student_with_workouts(ids: &[u32]) -> Student {
    Student {
        id: 1,
        name: "Ana Souza".into(),
        email: "ana@wgg.com".into(),
        age: 28,
        weight_kg: 0.0,
        height_m: 0.0,
        workouts: ids.iter().map(|id| workout(*id)).collect(),
        bmi_history: vec![],
    }
}
