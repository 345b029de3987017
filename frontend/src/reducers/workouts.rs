//! Workouts reducer: list filters, create/edit dialog, detail view.

use crate::forms::WorkoutForm;
use crate::messages::{Command, Message, WorkoutField};
use crate::state::{AppState, WorkoutDetail};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SetWorkoutSearch(query) => {
            state.workout_search = query.clone();
            commands.push(Command::Render);
            true
        }
        Message::SetWorkoutCategory(category) => {
            state.workout_category = category.clone();
            commands.push(Command::Render);
            true
        }
        Message::OpenWorkoutDialog(target) => {
            let form = match target {
                Some(id) => {
                    let existing = state
                        .student
                        .as_ref()
                        .and_then(|s| s.workouts.iter().find(|w| w.id == *id));
                    match existing {
                        Some(w) => WorkoutForm::from_workout(w),
                        None => return true,
                    }
                }
                None => WorkoutForm::default(),
            };
            state.workout_dialog = Some(form);
            commands.push(Command::Render);
            true
        }
        Message::CloseWorkoutDialog => {
            state.workout_dialog = None;
            commands.push(Command::Render);
            true
        }
        Message::UpdateWorkoutField(field, value) => {
            if let Some(form) = state.workout_dialog.as_mut() {
                match field {
                    WorkoutField::Name => form.name = value.clone(),
                    WorkoutField::Description => form.description = value.clone(),
                    WorkoutField::Category => form.category = value.clone(),
                    WorkoutField::Series => form.series = value.clone(),
                }
            }
            true
        }
        Message::ToggleWorkoutExercise(id) => {
            if let Some(form) = state.workout_dialog.as_mut() {
                form.toggle_exercise(*id);
            }
            true
        }
        Message::SubmitWorkoutForm => {
            if state.busy {
                return true;
            }
            let (Some(form), Some(student_id)) = (state.workout_dialog.as_ref(), state.student_id())
            else {
                return true;
            };
            match form.validate(student_id) {
                Ok(payload) => {
                    let cmd = match form.editing {
                        Some(id) => Command::UpdateWorkout { id, payload },
                        None => Command::CreateWorkout(payload),
                    };
                    state.busy = true;
                    commands.push(cmd);
                    commands.push(Command::Render);
                }
                Err(reason) => commands.push(Command::Alert(reason)),
            }
            true
        }
        Message::WorkoutSaved { created } => {
            state.busy = false;
            state.workout_dialog = None;
            commands.push(Command::success(if *created {
                "Treino criado com sucesso!"
            } else {
                "Treino atualizado com sucesso!"
            }));
            if let Some(id) = state.student_id() {
                commands.push(Command::FetchStudent(id));
            }
            commands.push(Command::Render);
            true
        }
        Message::WorkoutLoaded(workout) => {
            state.workout_detail = WorkoutDetail::Loaded(workout.clone());
            commands.push(Command::Render);
            true
        }
        Message::WorkoutNotFound => {
            state.workout_detail = WorkoutDetail::NotFound;
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::filter_workouts;
    use crate::forms::MSG_SERIES_INVALID;
    use crate::models::Role;
    use crate::router::Route;
    use crate::test_support::{signed_in, student_with_workouts, workout};
    use crate::update::update as root_update;

    fn student_state() -> AppState {
        let mut state = signed_in(Role::Student);
        state.route = Route::Workouts;
        root_update(&mut state, Message::StudentLoaded(student_with_workouts(&[1, 2])));
        state
    }

    #[test]
    fn create_posts_with_student_and_exercises() {
        let mut state = student_state();
        root_update(&mut state, Message::OpenWorkoutDialog(None));
        root_update(&mut state, Message::UpdateWorkoutField(WorkoutField::Name, "Pernas".into()));
        root_update(&mut state, Message::UpdateWorkoutField(WorkoutField::Category, "Força".into()));
        root_update(&mut state, Message::UpdateWorkoutField(WorkoutField::Series, "4".into()));
        root_update(&mut state, Message::ToggleWorkoutExercise(7));

        let cmds = root_update(&mut state, Message::SubmitWorkoutForm);
        match &cmds[0] {
            Command::CreateWorkout(payload) => {
                assert_eq!(payload.student_id, 1);
                assert_eq!(payload.exercise_ids, vec![7]);
                assert_eq!(payload.series, 4);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(state.busy);

        let cmds = root_update(&mut state, Message::WorkoutSaved { created: true });
        assert!(cmds.contains(&Command::FetchStudent(1)));
        assert!(!state.busy);
    }

    #[test]
    fn invalid_series_alerts() {
        let mut state = student_state();
        root_update(&mut state, Message::OpenWorkoutDialog(Some(2)));
        root_update(&mut state, Message::UpdateWorkoutField(WorkoutField::Series, "zero".into()));
        let cmds = root_update(&mut state, Message::SubmitWorkoutForm);
        assert_eq!(cmds, vec![Command::Alert(MSG_SERIES_INVALID.to_string())]);
    }

    #[test]
    fn edit_prefills_linked_exercises() {
        let mut state = student_state();
        root_update(&mut state, Message::OpenWorkoutDialog(Some(2)));
        let form = state.workout_dialog.as_ref().unwrap();
        assert_eq!(form.editing, Some(2));
        assert_eq!(form.exercise_ids, vec![20]);
        let cmds = root_update(&mut state, Message::SubmitWorkoutForm);
        assert!(matches!(cmds[0], Command::UpdateWorkout { id: 2, .. }));
    }

    #[test]
    fn filters_apply_to_loaded_workouts() {
        let mut state = student_state();
        root_update(&mut state, Message::SetWorkoutSearch("treino 2".into()));
        let student = state.student.as_ref().unwrap();
        let hits = filter_workouts(&student.workouts, &state.workout_search, &state.workout_category);
        assert_eq!(hits.len(), 1);

        root_update(&mut state, Message::SetWorkoutCategory("Cardio".into()));
        let student = state.student.as_ref().unwrap();
        assert!(filter_workouts(&student.workouts, &state.workout_search, &state.workout_category).is_empty());
    }

    #[test]
    fn detail_states() {
        let mut state = signed_in(Role::Student);
        assert_eq!(state.workout_detail, WorkoutDetail::Loading);
        root_update(&mut state, Message::WorkoutLoaded(workout(5)));
        assert!(matches!(state.workout_detail, WorkoutDetail::Loaded(ref w) if w.id == 5));
        root_update(&mut state, Message::WorkoutNotFound);
        assert_eq!(state.workout_detail, WorkoutDetail::NotFound);
    }
}
