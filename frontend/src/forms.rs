//! Editable form state and the client-side validation run before any
//! request is sent.
//!
//! Fields are kept as the raw strings typed by the user; `validate` turns
//! them into a request payload or a message for `window.alert`.

use crate::messages::AuthMode;
use crate::models::{Exercise, ExercisePayload, RegisterPayload, Role, Student, StudentPatch, Workout, WorkoutPayload};
use crate::utils::{format_decimal, parse_decimal, parse_positive_int};

pub const MSG_FILL_LOGIN: &str = "Preencha e-mail e senha.";
pub const MSG_FILL_REGISTER: &str = "Preencha todos os campos.";
pub const MSG_PASSWORD_MISMATCH: &str = "As senhas não coincidem!";
pub const MSG_EXERCISE_REQUIRED: &str = "Preencha nome e descrição do exercício.";
pub const MSG_REPETITIONS_INVALID: &str = "Repetições deve ser um número inteiro maior que zero.";
pub const MSG_WORKOUT_REQUIRED: &str = "Preencha nome e categoria do treino.";
pub const MSG_SERIES_INVALID: &str = "Séries deve ser um número inteiro maior que zero.";
pub const MSG_MEASUREMENTS_INVALID: &str = "Peso e Altura devem ser maiores que zero.";
pub const MSG_PROFILE_REQUIRED: &str = "Nome e e-mail são obrigatórios.";
pub const MSG_AGE_INVALID: &str = "Idade inválida.";

#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm: String::new(),
        }
    }
}

impl AuthForm {
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm.clear();
    }

    pub fn validate_login(&self) -> Result<(String, String), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(MSG_FILL_LOGIN.to_string());
        }
        Ok((self.email.trim().to_string(), self.password.clone()))
    }

    /// New accounts are always students.
    pub fn validate_register(&self) -> Result<RegisterPayload, String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(MSG_FILL_REGISTER.to_string());
        }
        if self.password != self.confirm {
            return Err(MSG_PASSWORD_MISMATCH.to_string());
        }
        Ok(RegisterPayload {
            nome: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            senha: self.password.clone(),
            papel: Role::Student,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseForm {
    /// `Some(id)` when editing an existing exercise.
    pub editing: Option<u32>,
    pub name: String,
    pub description: String,
    pub repetitions: String,
}

impl ExerciseForm {
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            editing: Some(exercise.id),
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            repetitions: exercise.repetitions.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ExercisePayload, String> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(MSG_EXERCISE_REQUIRED.to_string());
        }
        let repetitions =
            parse_positive_int(&self.repetitions).ok_or_else(|| MSG_REPETITIONS_INVALID.to_string())?;
        Ok(ExercisePayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            repetitions,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub editing: Option<u32>,
    pub name: String,
    pub description: String,
    pub category: String,
    pub series: String,
    pub exercise_ids: Vec<u32>,
}

impl WorkoutForm {
    pub fn from_workout(workout: &Workout) -> Self {
        Self {
            editing: Some(workout.id),
            name: workout.name.clone(),
            description: workout.description.clone(),
            category: workout.category.clone(),
            series: workout.series.to_string(),
            exercise_ids: workout.exercises.iter().map(|e| e.id).collect(),
        }
    }

    pub fn toggle_exercise(&mut self, id: u32) {
        if let Some(pos) = self.exercise_ids.iter().position(|e| *e == id) {
            self.exercise_ids.remove(pos);
        } else {
            self.exercise_ids.push(id);
        }
    }

    pub fn validate(&self, student_id: u32) -> Result<WorkoutPayload, String> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(MSG_WORKOUT_REQUIRED.to_string());
        }
        let series = parse_positive_int(&self.series).ok_or_else(|| MSG_SERIES_INVALID.to_string())?;
        Ok(WorkoutPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            series,
            student_id,
            exercise_ids: self.exercise_ids.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementForm {
    pub weight: String,
    pub height: String,
}

impl MeasurementForm {
    pub fn from_student(student: &Student) -> Self {
        let show = |v: f64| if v > 0.0 { format_decimal(v, 2) } else { String::new() };
        Self {
            weight: show(student.weight_kg),
            height: show(student.height_m),
        }
    }

    /// `(weight_kg, height_m)`, both strictly positive.
    pub fn validate(&self) -> Result<(f64, f64), String> {
        match (parse_decimal(&self.weight), parse_decimal(&self.height)) {
            (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Ok((w, h)),
            _ => Err(MSG_MEASUREMENTS_INVALID.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub weight: String,
    pub height: String,
}

impl ProfileForm {
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            age: if student.age > 0 { student.age.to_string() } else { String::new() },
            weight: if student.weight_kg > 0.0 { format_decimal(student.weight_kg, 2) } else { String::new() },
            height: if student.height_m > 0.0 { format_decimal(student.height_m, 2) } else { String::new() },
        }
    }

    /// Blank numeric fields are left out of the patch.
    pub fn validate(&self) -> Result<StudentPatch, String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(MSG_PROFILE_REQUIRED.to_string());
        }

        let age = match self.age.trim() {
            "" => None,
            raw => Some(parse_positive_int(raw).ok_or_else(|| MSG_AGE_INVALID.to_string())?),
        };

        let positive = |raw: &str| -> Result<Option<f64>, String> {
            if raw.trim().is_empty() {
                return Ok(None);
            }
            match parse_decimal(raw) {
                Some(v) if v > 0.0 => Ok(Some(v)),
                _ => Err(MSG_MEASUREMENTS_INVALID.to_string()),
            }
        };

        Ok(StudentPatch {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            age,
            weight_kg: positive(&self.weight)?,
            height_m: positive(&self.height)?,
        })
    }
}
