//! Session domain reducer: routing, guard resolution, login, registration,
//! logout and session expiry.

use crate::auth::{authorize, decode_claims, GuardOutcome};
use crate::messages::{AuthField, AuthMode, Command, Message};
use crate::models::CurrentUser;
use crate::router::Route;
use crate::state::{AppState, GuardStatus};

pub const MSG_SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
pub const MSG_LOGIN_OK: &str = "Login realizado com sucesso!";
pub const MSG_REGISTER_OK: &str = "Cadastro realizado! Faça login para continuar.";
pub const MSG_LOGGED_OUT: &str = "Você saiu da sua conta.";

/// Requests a page needs once the guard lets the user in.
pub fn page_data_commands(route: &Route, user: &CurrentUser) -> Vec<Command> {
    match route {
        Route::Admin => vec![Command::FetchExercises],
        Route::StudentDashboard | Route::Progress | Route::Profile => {
            vec![Command::FetchStudent(user.id)]
        }
        // The workout dialog lists the exercise catalog.
        Route::Workouts => vec![Command::FetchStudent(user.id), Command::FetchExercises],
        Route::WorkoutDetail(id) => vec![Command::FetchWorkout(*id)],
        Route::Home | Route::Login | Route::Register | Route::Unauthorized => Vec::new(),
    }
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RouteChanged(route) => {
            state.route = route.clone();
            state.reset_page_state();

            match route {
                Route::Login => state.auth_form.mode = AuthMode::Login,
                Route::Register => state.auth_form.mode = AuthMode::Register,
                _ => {}
            }

            if route.is_guarded() {
                // One identity check per mount; nothing is cached.
                state.guard = GuardStatus::Resolving;
                state.current_user = None;
                commands.push(Command::ResolveSession(route.clone()));
            } else {
                state.guard = GuardStatus::Idle;
            }
            commands.push(Command::Render);
            true
        }

        Message::SessionResolved { route, user } => {
            if *route != state.route || state.guard != GuardStatus::Resolving {
                crate::debug_log!("Discarding stale session resolution for {:?}", route);
                return true;
            }

            match authorize(user.as_ref(), route.required_role()) {
                GuardOutcome::Allow => {
                    state.guard = GuardStatus::Authorized;
                    state.current_user = user.clone();
                    if let Some(u) = user {
                        commands.extend(page_data_commands(route, u));
                    }
                    commands.push(Command::Render);
                }
                GuardOutcome::RedirectToLogin => {
                    state.guard = GuardStatus::Idle;
                    state.current_user = None;
                    commands.push(Command::Navigate(Route::Login));
                }
                GuardOutcome::RedirectToUnauthorized => {
                    state.guard = GuardStatus::Idle;
                    state.current_user = user.clone();
                    commands.push(Command::Navigate(Route::Unauthorized));
                }
            }
            true
        }

        Message::SessionExpired => {
            state.busy = false;
            state.current_user = None;
            state.guard = GuardStatus::Idle;
            commands.push(Command::ClearToken);
            commands.push(Command::error(MSG_SESSION_EXPIRED));
            commands.push(Command::Navigate(Route::Login));
            true
        }

        Message::Logout => {
            state.current_user = None;
            state.guard = GuardStatus::Idle;
            state.auth_form.clear_secrets();
            commands.push(Command::ClearToken);
            commands.push(Command::info(MSG_LOGGED_OUT));
            commands.push(Command::Navigate(Route::Login));
            true
        }

        Message::UpdateAuthField(field, value) => {
            let form = &mut state.auth_form;
            match field {
                AuthField::Name => form.name = value.clone(),
                AuthField::Email => form.email = value.clone(),
                AuthField::Password => form.password = value.clone(),
                AuthField::Confirm => form.confirm = value.clone(),
            }
            true
        }

        Message::SubmitAuthForm => {
            if state.busy {
                return true;
            }
            let outcome = match state.auth_form.mode {
                AuthMode::Login => state
                    .auth_form
                    .validate_login()
                    .map(|(email, password)| Command::Login { email, password }),
                AuthMode::Register => state.auth_form.validate_register().map(Command::Register),
            };
            match outcome {
                Ok(cmd) => {
                    state.busy = true;
                    commands.push(cmd);
                    commands.push(Command::Render);
                }
                Err(reason) => commands.push(Command::Alert(reason)),
            }
            true
        }

        Message::LoginSucceeded { token } => {
            state.busy = false;
            state.auth_form.clear_secrets();
            let role = decode_claims(token).ok().and_then(|c| c.role());
            commands.push(Command::StoreToken(token.clone()));
            commands.push(Command::success(MSG_LOGIN_OK));
            commands.push(Command::Navigate(Route::home_for(role)));
            true
        }

        Message::RegisterSucceeded => {
            state.busy = false;
            state.auth_form.mode = AuthMode::Login;
            state.auth_form.name.clear();
            state.auth_form.clear_secrets();
            commands.push(Command::success(MSG_REGISTER_OK));
            if state.route == Route::Register {
                commands.push(Command::Navigate(Route::Login));
            } else {
                commands.push(Command::Render);
            }
            true
        }

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{MSG_FILL_LOGIN, MSG_PASSWORD_MISMATCH};
    use crate::models::Role;
    use crate::test_support::user;
    use crate::update::update as root_update;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    fn token_for(role: &str) -> String {
        format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","papel":"{}"}}"#, role))
        )
    }

    #[test]
    fn guarded_route_waits_for_the_guard() {
        let mut state = AppState::new();
        let cmds = root_update(&mut state, Message::RouteChanged(Route::Progress));
        assert_eq!(state.guard, GuardStatus::Resolving);
        assert!(!state.page_visible());
        assert_eq!(cmds[0], Command::ResolveSession(Route::Progress));
        // No page data is requested before authorization.
        assert!(!cmds.contains(&Command::FetchStudent(1)));
    }

    #[test]
    fn public_route_needs_no_session() {
        let mut state = AppState::new();
        let cmds = root_update(&mut state, Message::RouteChanged(Route::Register));
        assert_eq!(state.guard, GuardStatus::Idle);
        assert_eq!(state.auth_form.mode, AuthMode::Register);
        assert_eq!(cmds, vec![Command::Render]);
    }

    #[test]
    fn missing_session_redirects_to_login() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::StudentDashboard));
        let cmds = root_update(
            &mut state,
            Message::SessionResolved { route: Route::StudentDashboard, user: None },
        );
        assert_eq!(cmds, vec![Command::Navigate(Route::Login)]);
        assert!(!state.page_visible());
    }

    #[test]
    fn wrong_role_redirects_to_unauthorized() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::Admin));
        let cmds = root_update(
            &mut state,
            Message::SessionResolved { route: Route::Admin, user: Some(user(Role::Student)) },
        );
        assert_eq!(cmds, vec![Command::Navigate(Route::Unauthorized)]);
        assert_ne!(state.guard, GuardStatus::Authorized);
    }

    #[test]
    fn matching_role_renders_and_loads_page_data() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::Workouts));
        let cmds = root_update(
            &mut state,
            Message::SessionResolved { route: Route::Workouts, user: Some(user(Role::Student)) },
        );
        assert!(state.page_visible());
        assert_eq!(
            cmds,
            vec![Command::FetchStudent(1), Command::FetchExercises, Command::Render]
        );
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::Admin));
        root_update(&mut state, Message::RouteChanged(Route::Home));
        let cmds = root_update(
            &mut state,
            Message::SessionResolved { route: Route::Admin, user: Some(user(Role::Admin)) },
        );
        assert!(cmds.is_empty());
        assert_eq!(state.route, Route::Home);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn session_expiry_clears_token_and_goes_to_login() {
        let mut state = crate::test_support::signed_in(Role::Student);
        state.busy = true;
        let cmds = root_update(&mut state, Message::SessionExpired);
        assert!(cmds.contains(&Command::ClearToken));
        assert!(cmds.contains(&Command::Navigate(Route::Login)));
        assert!(state.current_user.is_none());
        assert!(!state.busy);
    }

    #[test]
    fn login_validation_blocks_the_request() {
        let mut state = AppState::new();
        let cmds = root_update(&mut state, Message::SubmitAuthForm);
        assert_eq!(cmds, vec![Command::Alert(MSG_FILL_LOGIN.to_string())]);
        assert!(!state.busy);
    }

    #[test]
    fn register_password_mismatch_alerts() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::Register));
        for (field, value) in [
            (AuthField::Name, "Carla"),
            (AuthField::Email, "carla@wgg.com"),
            (AuthField::Password, "abc"),
            (AuthField::Confirm, "xyz"),
        ] {
            root_update(&mut state, Message::UpdateAuthField(field, value.into()));
        }
        let cmds = root_update(&mut state, Message::SubmitAuthForm);
        assert_eq!(cmds, vec![Command::Alert(MSG_PASSWORD_MISMATCH.to_string())]);
    }

    #[test]
    fn login_submits_credentials_once() {
        let mut state = AppState::new();
        root_update(&mut state, Message::UpdateAuthField(AuthField::Email, "a@b.c".into()));
        root_update(&mut state, Message::UpdateAuthField(AuthField::Password, "pw".into()));
        let cmds = root_update(&mut state, Message::SubmitAuthForm);
        assert_eq!(
            cmds[0],
            Command::Login { email: "a@b.c".into(), password: "pw".into() }
        );
        // Second click while busy is ignored.
        assert!(root_update(&mut state, Message::SubmitAuthForm).is_empty());
    }

    #[test]
    fn login_success_routes_by_role_claim() {
        let mut state = AppState::new();
        let token = token_for("admin");
        let cmds = root_update(&mut state, Message::LoginSucceeded { token: token.clone() });
        assert_eq!(cmds[0], Command::StoreToken(token));
        assert_eq!(cmds.last(), Some(&Command::Navigate(Route::Admin)));

        let cmds = root_update(&mut state, Message::LoginSucceeded { token: token_for("aluno") });
        assert_eq!(cmds.last(), Some(&Command::Navigate(Route::StudentDashboard)));

        let cmds = root_update(&mut state, Message::LoginSucceeded { token: "opaque".into() });
        assert_eq!(cmds.last(), Some(&Command::Navigate(Route::StudentDashboard)));
    }

    #[test]
    fn registration_switches_back_to_login() {
        let mut state = AppState::new();
        root_update(&mut state, Message::RouteChanged(Route::Register));
        let cmds = root_update(&mut state, Message::RegisterSucceeded);
        assert_eq!(state.auth_form.mode, AuthMode::Login);
        assert!(cmds.contains(&Command::Navigate(Route::Login)));
    }

    #[test]
    fn logout_clears_everything() {
        let mut state = crate::test_support::signed_in(Role::Admin);
        let cmds = root_update(&mut state, Message::Logout);
        assert!(state.current_user.is_none());
        assert_eq!(cmds.first(), Some(&Command::ClearToken));
        assert_eq!(cmds.last(), Some(&Command::Navigate(Route::Login)));
    }
}
