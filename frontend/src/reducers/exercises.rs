//! Exercise catalog reducer (admin page).

use crate::forms::ExerciseForm;
use crate::messages::{Command, ExerciseField, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ExercisesLoaded(list) => {
            state.exercises = list.clone();
            state.exercises_loaded = true;
            commands.push(Command::Render);
            true
        }
        Message::SetExerciseSearch(query) => {
            state.exercise_search = query.clone();
            commands.push(Command::Render);
            true
        }
        Message::OpenExerciseDialog(target) => {
            let form = match target {
                Some(id) => match state.exercises.iter().find(|e| e.id == *id) {
                    Some(existing) => ExerciseForm::from_exercise(existing),
                    None => return true,
                },
                None => ExerciseForm::default(),
            };
            state.exercise_dialog = Some(form);
            commands.push(Command::Render);
            true
        }
        Message::CloseExerciseDialog => {
            state.exercise_dialog = None;
            commands.push(Command::Render);
            true
        }
        Message::UpdateExerciseField(field, value) => {
            if let Some(form) = state.exercise_dialog.as_mut() {
                match field {
                    ExerciseField::Name => form.name = value.clone(),
                    ExerciseField::Description => form.description = value.clone(),
                    ExerciseField::Repetitions => form.repetitions = value.clone(),
                }
            }
            true
        }
        Message::SubmitExerciseForm => {
            if state.busy {
                return true;
            }
            let Some(form) = state.exercise_dialog.as_ref() else {
                return true;
            };
            match form.validate() {
                Ok(payload) => {
                    state.busy = true;
                    commands.push(match form.editing {
                        Some(id) => Command::UpdateExercise { id, payload },
                        None => Command::CreateExercise(payload),
                    });
                    commands.push(Command::Render);
                }
                Err(reason) => commands.push(Command::Alert(reason)),
            }
            true
        }
        Message::ExerciseSaved { created } => {
            state.busy = false;
            state.exercise_dialog = None;
            commands.push(Command::success(if *created {
                "Exercício criado com sucesso!"
            } else {
                "Exercício atualizado com sucesso!"
            }));
            commands.push(Command::FetchExercises);
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::filter_exercises;
    use crate::forms::MSG_EXERCISE_REQUIRED;
    use crate::models::{ExercisePayload, Role};
    use crate::test_support::{exercise, signed_in};
    use crate::update::update as root_update;

    fn fill(state: &mut AppState, name: &str, desc: &str, reps: &str) {
        root_update(state, Message::UpdateExerciseField(ExerciseField::Name, name.into()));
        root_update(state, Message::UpdateExerciseField(ExerciseField::Description, desc.into()));
        root_update(state, Message::UpdateExerciseField(ExerciseField::Repetitions, reps.into()));
    }

    #[test]
    fn missing_fields_send_nothing() {
        let mut state = signed_in(Role::Admin);
        root_update(&mut state, Message::OpenExerciseDialog(None));
        fill(&mut state, "Supino", "", "10");
        let cmds = root_update(&mut state, Message::SubmitExerciseForm);
        assert_eq!(cmds, vec![Command::Alert(MSG_EXERCISE_REQUIRED.to_string())]);
        assert!(state.exercise_dialog.is_some());
    }

    #[test]
    fn created_exercise_appears_after_refetch() {
        let mut state = signed_in(Role::Admin);
        root_update(&mut state, Message::ExercisesLoaded(vec![exercise(1, "Agachamento")]));
        root_update(&mut state, Message::OpenExerciseDialog(None));
        fill(&mut state, "Supino", "Peito com barra", "12");

        let cmds = root_update(&mut state, Message::SubmitExerciseForm);
        assert_eq!(
            cmds[0],
            Command::CreateExercise(ExercisePayload {
                name: "Supino".into(),
                description: "Peito com barra".into(),
                repetitions: 12,
            })
        );

        let cmds = root_update(&mut state, Message::ExerciseSaved { created: true });
        assert!(cmds.contains(&Command::FetchExercises));
        assert!(state.exercise_dialog.is_none());
        // Not patched locally.
        assert_eq!(state.exercises.len(), 1);

        root_update(
            &mut state,
            Message::ExercisesLoaded(vec![exercise(1, "Agachamento"), exercise(2, "Supino")]),
        );
        root_update(&mut state, Message::SetExerciseSearch("supino".into()));
        let visible = filter_exercises(&state.exercises, &state.exercise_search);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn editing_prefills_and_puts() {
        let mut state = signed_in(Role::Admin);
        root_update(&mut state, Message::ExercisesLoaded(vec![exercise(4, "Remada")]));
        root_update(&mut state, Message::OpenExerciseDialog(Some(4)));
        assert_eq!(state.exercise_dialog.as_ref().unwrap().repetitions, "10");

        root_update(&mut state, Message::UpdateExerciseField(ExerciseField::Repetitions, "15".into()));
        let cmds = root_update(&mut state, Message::SubmitExerciseForm);
        assert!(matches!(
            &cmds[0],
            Command::UpdateExercise { id: 4, payload } if payload.repetitions == 15
        ));
    }

    #[test]
    fn unknown_exercise_does_not_open_dialog() {
        let mut state = signed_in(Role::Admin);
        let cmds = root_update(&mut state, Message::OpenExerciseDialog(Some(99)));
        assert!(cmds.is_empty());
        assert!(state.exercise_dialog.is_none());
    }
}
