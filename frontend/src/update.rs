// frontend/src/update.rs
//
// Root reducer. Domain reducers get the first look at every message; the
// few messages shared across pages are handled here.
//
use crate::messages::{Command, Message, PendingDeletion};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    if crate::reducers::session::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::exercises::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::workouts::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::progress::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::profile::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::StudentLoaded(student) => {
            if state.measurements.weight.is_empty() && state.measurements.height.is_empty() {
                state.measurements = crate::forms::MeasurementForm::from_student(&student);
            }
            state.student = Some(student);
            commands.push(Command::Render);
        }

        Message::RequestDeletion(pending) => {
            state.pending_deletion = Some(pending);
            commands.push(Command::Render);
        }
        Message::CancelDeletion => {
            state.pending_deletion = None;
            commands.push(Command::Render);
        }
        Message::ConfirmDeletion => {
            // Nothing is sent unless a deletion was actually requested.
            if let Some(pending) = state.pending_deletion.take() {
                state.busy = true;
                commands.push(match pending {
                    PendingDeletion::Exercise { id, .. } => Command::DeleteExercise(id),
                    PendingDeletion::Workout { id, .. } => Command::DeleteWorkout(id),
                    PendingDeletion::BmiRecord { id } => Command::DeleteBmi(id),
                });
                commands.push(Command::Render);
            }
        }
        Message::Deleted(pending) => {
            state.busy = false;
            commands.push(Command::success(pending.success_message()));
            match pending {
                PendingDeletion::Exercise { .. } => commands.push(Command::FetchExercises),
                PendingDeletion::Workout { .. } | PendingDeletion::BmiRecord { .. } => {
                    if let Some(id) = state.student_id() {
                        commands.push(Command::FetchStudent(id));
                    }
                }
            }
            commands.push(Command::Render);
        }

        Message::ActionFailed(reason) => {
            state.busy = false;
            commands.push(Command::error(reason));
            commands.push(Command::Render);
        }

        other => {
            crate::debug_log!("Unhandled message: {:?}", other);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Student, Workout};
    use crate::test_support::{signed_in, student_with_workouts};

    #[test]
    fn deletion_never_fires_without_confirmation() {
        let mut state = signed_in(Role::Student);
        let cmds = update(
            &mut state,
            Message::RequestDeletion(PendingDeletion::Workout { id: 2, name: "B".into() }),
        );
        assert!(cmds.iter().all(|c| !c.is_request()));

        let cmds = update(&mut state, Message::CancelDeletion);
        assert!(state.pending_deletion.is_none());
        assert!(cmds.iter().all(|c| !c.is_request()));

        // Confirming after a cancel sends nothing either.
        let cmds = update(&mut state, Message::ConfirmDeletion);
        assert!(cmds.iter().all(|c| !c.is_request()));
    }

    #[test]
    fn confirmed_workout_delete_refetches_before_list_changes() {
        let mut state = signed_in(Role::Student);
        state.student = Some(student_with_workouts(&[1, 2]));

        update(
            &mut state,
            Message::RequestDeletion(PendingDeletion::Workout { id: 2, name: "B".into() }),
        );
        let cmds = update(&mut state, Message::ConfirmDeletion);
        assert!(cmds.contains(&Command::DeleteWorkout(2)));
        assert!(state.busy);

        // The list is untouched until the refetch lands.
        let cmds = update(
            &mut state,
            Message::Deleted(PendingDeletion::Workout { id: 2, name: "B".into() }),
        );
        assert_eq!(state.student.as_ref().unwrap().workouts.len(), 2);
        assert!(cmds.contains(&Command::FetchStudent(1)));

        update(&mut state, Message::StudentLoaded(student_with_workouts(&[1])));
        let ids: Vec<u32> = state.student.as_ref().unwrap().workouts.iter().map(|w: &Workout| w.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn failures_clear_busy_and_keep_data() {
        let mut state = signed_in(Role::Student);
        state.student = Some(student_with_workouts(&[1]));
        state.busy = true;
        let cmds = update(&mut state, Message::ActionFailed("Falha".into()));
        assert!(!state.busy);
        assert!(state.student.is_some());
        assert!(cmds.contains(&Command::error("Falha")));
    }

    #[test]
    fn student_load_prefills_measurements_once() {
        let mut state = signed_in(Role::Student);
        let mut student: Student = student_with_workouts(&[]);
        student.weight_kg = 70.0;
        student.height_m = 1.75;
        update(&mut state, Message::StudentLoaded(student.clone()));
        assert_eq!(state.measurements.weight, "70.00");

        state.measurements.weight = "72".into();
        update(&mut state, Message::StudentLoaded(student));
        assert_eq!(state.measurements.weight, "72");
    }
}
