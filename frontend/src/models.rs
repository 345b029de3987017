//! Records mirrored from the backend JSON.
//!
//! The REST services speak Portuguese field names; the Rust side uses English
//! names and maps them with `serde(rename)`.

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_STUDENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "aluno", alias = "student")]
    Student,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => ROLE_STUDENT,
            Role::Admin => ROLE_ADMIN,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aluno" | "student" => Some(Role::Student),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Identity returned by the auth service `/me` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: u32,
    pub email: String,
    #[serde(rename = "papel", alias = "role")]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "id_exercicio")]
    pub id: u32,
    #[serde(rename = "nome_exercicio")]
    pub name: String,
    #[serde(rename = "descricao_exercicio", default)]
    pub description: String,
    #[serde(rename = "num_repeticoes")]
    pub repetitions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    #[serde(rename = "id_treino")]
    pub id: u32,
    #[serde(rename = "nome_treino")]
    pub name: String,
    #[serde(rename = "descricao_treino", default)]
    pub description: String,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "num_series")]
    pub series: u32,
    #[serde(rename = "id_aluno", default)]
    pub student_id: Option<u32>,
    #[serde(rename = "exercicios", default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    #[serde(rename = "id_imc")]
    pub id: u32,
    #[serde(rename = "valor_imc")]
    pub value: f64,
    /// ISO date (`2024-03-05`) or datetime, as sent by the backend.
    #[serde(rename = "dt_calculo")]
    pub calculated_on: String,
    #[serde(rename = "id_aluno")]
    pub student_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "id_aluno")]
    pub id: u32,
    #[serde(rename = "nome_aluno")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "idade", default)]
    pub age: u32,
    #[serde(rename = "peso_kg", default)]
    pub weight_kg: f64,
    /// Height in metres.
    #[serde(rename = "altura", default)]
    pub height_m: f64,
    #[serde(rename = "treinos", default)]
    pub workouts: Vec<Workout>,
    #[serde(rename = "historico_imc", default)]
    pub bmi_history: Vec<BmiRecord>,
}

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExercisePayload {
    #[serde(rename = "nome_exercicio")]
    pub name: String,
    #[serde(rename = "descricao_exercicio")]
    pub description: String,
    #[serde(rename = "num_repeticoes")]
    pub repetitions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPayload {
    #[serde(rename = "nome_treino")]
    pub name: String,
    #[serde(rename = "descricao_treino")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "num_series")]
    pub series: u32,
    #[serde(rename = "id_aluno")]
    pub student_id: u32,
    #[serde(rename = "ids_exercicios")]
    pub exercise_ids: Vec<u32>,
}

/// Partial update of a student. `None` fields are left out of the JSON so
/// the backend keeps their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentPatch {
    #[serde(rename = "nome_aluno", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "idade", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "peso_kg", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "altura", skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
}

impl StudentPatch {
    pub fn measurements(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_m: Some(height_m),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiCreate {
    pub id_aluno: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub papel: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenOut {
    pub access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub token_type: Option<String>,
}
