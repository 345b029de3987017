//! Profile reducer: read-only view, edit toggle, save.

use crate::forms::ProfileForm;
use crate::messages::{Command, Message, ProfileField};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::StartProfileEdit => {
            if let Some(student) = state.student.as_ref() {
                state.profile_form = Some(ProfileForm::from_student(student));
                commands.push(Command::Render);
            }
            true
        }
        Message::CancelProfileEdit => {
            // The view falls back to the last fetched record.
            state.profile_form = None;
            commands.push(Command::Render);
            true
        }
        Message::UpdateProfileField(field, value) => {
            if let Some(form) = state.profile_form.as_mut() {
                let slot = match field {
                    ProfileField::Name => &mut form.name,
                    ProfileField::Email => &mut form.email,
                    ProfileField::Age => &mut form.age,
                    ProfileField::Weight => &mut form.weight,
                    ProfileField::Height => &mut form.height,
                };
                *slot = value.clone();
            }
            true
        }
        Message::SaveProfile => {
            if state.busy {
                return true;
            }
            let (Some(form), Some(id)) = (state.profile_form.as_ref(), state.student_id()) else {
                return true;
            };
            match form.validate() {
                Ok(patch) => {
                    state.busy = true;
                    commands.push(Command::PatchStudent { id, patch });
                    commands.push(Command::Render);
                }
                Err(reason) => commands.push(Command::Alert(reason)),
            }
            true
        }
        Message::ProfileSaved => {
            state.busy = false;
            state.profile_form = None;
            commands.push(Command::success("Perfil atualizado com sucesso!"));
            if let Some(id) = state.student_id() {
                commands.push(Command::FetchStudent(id));
            }
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::MSG_PROFILE_REQUIRED;
    use crate::models::Role;
    use crate::test_support::{signed_in, student_with_workouts};
    use crate::update::update as root_update;

    fn profile_state() -> AppState {
        let mut state = signed_in(Role::Student);
        let mut student = student_with_workouts(&[]);
        student.weight_kg = 61.5;
        student.height_m = 1.68;
        root_update(&mut state, Message::StudentLoaded(student));
        state
    }

    #[test]
    fn edit_then_cancel_restores_view() {
        let mut state = profile_state();
        root_update(&mut state, Message::StartProfileEdit);
        root_update(&mut state, Message::UpdateProfileField(ProfileField::Name, "Outra".into()));
        root_update(&mut state, Message::CancelProfileEdit);
        assert!(state.profile_form.is_none());
        assert_eq!(state.student.as_ref().unwrap().name, "Ana Souza");

        // Re-entering edit mode starts from the fetched record again.
        root_update(&mut state, Message::StartProfileEdit);
        assert_eq!(state.profile_form.as_ref().unwrap().name, "Ana Souza");
    }

    #[test]
    fn save_sends_patch_and_refetches() {
        let mut state = profile_state();
        root_update(&mut state, Message::StartProfileEdit);
        root_update(&mut state, Message::UpdateProfileField(ProfileField::Age, "29".into()));
        let cmds = root_update(&mut state, Message::SaveProfile);
        match &cmds[0] {
            Command::PatchStudent { id, patch } => {
                assert_eq!(*id, 1);
                assert_eq!(patch.age, Some(29));
                assert_eq!(patch.weight_kg, Some(61.5));
                assert_eq!(patch.name.as_deref(), Some("Ana Souza"));
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cmds = root_update(&mut state, Message::ProfileSaved);
        assert!(state.profile_form.is_none());
        assert!(cmds.contains(&Command::FetchStudent(1)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut state = profile_state();
        root_update(&mut state, Message::StartProfileEdit);
        root_update(&mut state, Message::UpdateProfileField(ProfileField::Name, " ".into()));
        let cmds = root_update(&mut state, Message::SaveProfile);
        assert_eq!(cmds, vec![Command::Alert(MSG_PROFILE_REQUIRED.to_string())]);
    }
}
