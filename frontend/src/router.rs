//! Hash routes (`#/student/workouts/3`, ...).

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Unauthorized,
    Admin,
    StudentDashboard,
    Workouts,
    WorkoutDetail(u32),
    Progress,
    Profile,
}

impl Route {
    /// Parse `location.hash`. Unknown paths fall back to `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let path = path.split('?').next().unwrap_or_default().trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["unauthorized"] => Route::Unauthorized,
            ["admin"] => Route::Admin,
            ["student"] => Route::StudentDashboard,
            ["student", "workouts"] => Route::Workouts,
            ["student", "workouts", id] => match id.parse::<u32>() {
                Ok(id) => Route::WorkoutDetail(id),
                Err(_) => Route::Home,
            },
            ["student", "progress"] => Route::Progress,
            ["student", "profile"] => Route::Profile,
            _ => Route::Home,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Unauthorized => "#/unauthorized".to_string(),
            Route::Admin => "#/admin".to_string(),
            Route::StudentDashboard => "#/student".to_string(),
            Route::Workouts => "#/student/workouts".to_string(),
            Route::WorkoutDetail(id) => format!("#/student/workouts/{}", id),
            Route::Progress => "#/student/progress".to_string(),
            Route::Profile => "#/student/profile".to_string(),
        }
    }

    /// Role a session must carry to see this route. `None` for public pages.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::Home | Route::Login | Route::Register | Route::Unauthorized => None,
            Route::Admin => Some(Role::Admin),
            Route::StudentDashboard
            | Route::Workouts
            | Route::WorkoutDetail(_)
            | Route::Progress
            | Route::Profile => Some(Role::Student),
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.required_role().is_some()
    }

    /// Landing page after login for the given role.
    pub fn home_for(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => Route::Admin,
            _ => Route::StudentDashboard,
        }
    }
}

/// Current route from `window.location.hash`.
pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Change the hash. The `hashchange` listener takes it from there.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        let target = route.to_hash();
        let current = window.location().hash().unwrap_or_default();
        if current == target {
            // Same hash does not fire `hashchange`; route explicitly.
            crate::state::dispatch_global_message(crate::messages::Message::RouteChanged(
                route.clone(),
            ));
        } else if let Err(e) = window.location().set_hash(&target) {
            web_sys::console::warn_1(&format!("Failed to navigate: {:?}", e).into());
        }
    }
}
