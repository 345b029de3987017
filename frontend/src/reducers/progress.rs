//! BMI & progress reducer.

use crate::messages::{Command, MeasurementField, Message};
use crate::metrics::{compute_bmi, BmiResult};
use crate::state::AppState;

pub const MSG_NEED_MEASUREMENTS: &str = "Cadastre peso e altura antes de calcular o IMC.";

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CalculateBmi => {
            if state.busy {
                return true;
            }
            let Some(student) = state.student.as_ref() else {
                return true;
            };
            // The backend divides stored weight by stored height squared.
            if compute_bmi(student.weight_kg, student.height_m).is_none() {
                commands.push(Command::Alert(MSG_NEED_MEASUREMENTS.to_string()));
                return true;
            }
            let id = student.id;
            state.busy = true;
            commands.push(Command::RecordBmi(id));
            commands.push(Command::Render);
            true
        }
        Message::BmiRecorded(record) => {
            state.busy = false;
            state.bmi_result = Some(BmiResult::from_value(record.value));
            commands.push(Command::success("IMC calculado e salvo!"));
            commands.push(Command::FetchStudent(record.student_id));
            commands.push(Command::Render);
            true
        }
        Message::ClearBmiResult => {
            state.bmi_result = None;
            commands.push(Command::Render);
            true
        }
        Message::UpdateMeasurementField(field, value) => {
            match field {
                MeasurementField::Weight => state.measurements.weight = value.clone(),
                MeasurementField::Height => state.measurements.height = value.clone(),
            }
            true
        }
        Message::SubmitMeasurements => {
            if state.busy {
                return true;
            }
            let Some(id) = state.student_id() else {
                return true;
            };
            match state.measurements.validate() {
                Ok((weight_kg, height_m)) => {
                    state.busy = true;
                    commands.push(Command::UpdateMeasurements { id, weight_kg, height_m });
                    commands.push(Command::Render);
                }
                Err(reason) => commands.push(Command::Alert(reason)),
            }
            true
        }
        Message::MeasurementsSaved(record) => {
            state.busy = false;
            state.bmi_result = Some(BmiResult::from_value(record.value));
            commands.push(Command::success("Peso e altura atualizados!"));
            commands.push(Command::FetchStudent(record.student_id));
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::MSG_MEASUREMENTS_INVALID;
    use crate::messages::PendingDeletion;
    use crate::metrics::BmiBand;
    use crate::models::{BmiRecord, Role};
    use crate::test_support::{signed_in, student_with_workouts};
    use crate::update::update as root_update;

    fn record(id: u32, value: f64) -> BmiRecord {
        BmiRecord {
            id,
            value,
            calculated_on: "2024-05-01".into(),
            student_id: 1,
        }
    }

    fn with_measurements() -> AppState {
        let mut state = signed_in(Role::Student);
        let mut student = student_with_workouts(&[]);
        student.weight_kg = 80.0;
        student.height_m = 1.8;
        root_update(&mut state, Message::StudentLoaded(student));
        state
    }

    #[test]
    fn calculate_requires_stored_measurements() {
        let mut state = signed_in(Role::Student);
        root_update(&mut state, Message::StudentLoaded(student_with_workouts(&[])));
        let cmds = root_update(&mut state, Message::CalculateBmi);
        assert_eq!(cmds, vec![Command::Alert(MSG_NEED_MEASUREMENTS.to_string())]);
    }

    #[test]
    fn recorded_bmi_is_classified_and_refetched() {
        let mut state = with_measurements();
        let cmds = root_update(&mut state, Message::CalculateBmi);
        assert_eq!(cmds[0], Command::RecordBmi(1));

        let cmds = root_update(&mut state, Message::BmiRecorded(record(9, 24.691)));
        let result = state.bmi_result.unwrap();
        assert_eq!(result.value, 24.7);
        assert_eq!(result.band, BmiBand::Normal);
        assert!(cmds.contains(&Command::FetchStudent(1)));

        root_update(&mut state, Message::ClearBmiResult);
        assert!(state.bmi_result.is_none());
    }

    #[test]
    fn non_positive_measurements_are_rejected() {
        let mut state = with_measurements();
        root_update(&mut state, Message::UpdateMeasurementField(MeasurementField::Weight, "0".into()));
        let cmds = root_update(&mut state, Message::SubmitMeasurements);
        assert_eq!(cmds, vec![Command::Alert(MSG_MEASUREMENTS_INVALID.to_string())]);
        assert!(!state.busy);
    }

    #[test]
    fn measurements_patch_then_record() {
        let mut state = with_measurements();
        root_update(&mut state, Message::UpdateMeasurementField(MeasurementField::Weight, "78,5".into()));
        let cmds = root_update(&mut state, Message::SubmitMeasurements);
        assert_eq!(
            cmds[0],
            Command::UpdateMeasurements { id: 1, weight_kg: 78.5, height_m: 1.8 }
        );
        let cmds = root_update(&mut state, Message::MeasurementsSaved(record(3, 24.2)));
        assert!(cmds.contains(&Command::FetchStudent(1)));
        assert!(!state.busy);
    }

    #[test]
    fn bmi_record_delete_goes_through_confirmation() {
        let mut state = with_measurements();
        root_update(&mut state, Message::RequestDeletion(PendingDeletion::BmiRecord { id: 4 }));
        let cmds = root_update(&mut state, Message::ConfirmDeletion);
        assert_eq!(cmds[0], Command::DeleteBmi(4));
        let cmds = root_update(&mut state, Message::Deleted(PendingDeletion::BmiRecord { id: 4 }));
        assert!(cmds.contains(&Command::FetchStudent(1)));
    }
}
