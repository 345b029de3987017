use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::config::{api_config, auth_config};
use crate::debug_log;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    BmiCreate, BmiRecord, CurrentUser, Exercise, ExercisePayload, RegisterPayload, Student,
    StudentPatch, TokenOut, Workout, WorkoutPayload,
};
use crate::storage;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

// REST client for the data API and the auth API
pub struct ApiClient;

impl ApiClient {
    fn api_url(path: &str) -> String {
        api_config().url(path)
    }

    fn auth_url(path: &str) -> String {
        auth_config().url(path)
    }

    // ---------------- Exercises ----------------

    pub async fn list_exercises() -> ApiResult<Vec<Exercise>> {
        let text = Self::fetch_json(&Self::api_url("/Exercicio/"), "GET", None).await?;
        decode(&text)
    }

    pub async fn create_exercise(payload: &ExercisePayload) -> ApiResult<()> {
        let body = encode(payload)?;
        Self::fetch_json(&Self::api_url("/Exercicio/"), "POST", Some(&body)).await?;
        Ok(())
    }

    pub async fn update_exercise(id: u32, payload: &ExercisePayload) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Exercicio/{}", id));
        let body = encode(payload)?;
        Self::fetch_json(&url, "PUT", Some(&body)).await?;
        Ok(())
    }

    pub async fn delete_exercise(id: u32) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Exercicio/{}", id));
        Self::fetch_json(&url, "DELETE", None).await?;
        Ok(())
    }

    // ---------------- Workouts ----------------

    pub async fn get_workout(id: u32) -> ApiResult<Workout> {
        let url = Self::api_url(&format!("/Treino/{}", id));
        let text = Self::fetch_json(&url, "GET", None).await?;
        decode(&text)
    }

    pub async fn create_workout(payload: &WorkoutPayload) -> ApiResult<()> {
        let body = encode(payload)?;
        Self::fetch_json(&Self::api_url("/Treino/"), "POST", Some(&body)).await?;
        Ok(())
    }

    pub async fn update_workout(id: u32, payload: &WorkoutPayload) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Treino/{}", id));
        let body = encode(payload)?;
        Self::fetch_json(&url, "PUT", Some(&body)).await?;
        Ok(())
    }

    pub async fn delete_workout(id: u32) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Treino/{}", id));
        Self::fetch_json(&url, "DELETE", None).await?;
        Ok(())
    }

    // ---------------- Students ----------------

    pub async fn get_student(id: u32) -> ApiResult<Student> {
        let url = Self::api_url(&format!("/Aluno/{}", id));
        let text = Self::fetch_json(&url, "GET", None).await?;
        decode(&text)
    }

    pub async fn patch_student(id: u32, patch: &StudentPatch) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Aluno/{}", id));
        let body = encode(patch)?;
        Self::fetch_json(&url, "PATCH", Some(&body)).await?;
        Ok(())
    }

    // ---------------- BMI ----------------

    /// The backend computes the value from the stored weight and height.
    pub async fn record_bmi(student_id: u32) -> ApiResult<BmiRecord> {
        let body = encode(&BmiCreate { id_aluno: student_id })?;
        let text = Self::fetch_json(&Self::api_url("/Imc/"), "POST", Some(&body)).await?;
        decode(&text)
    }

    pub async fn delete_bmi(id: u32) -> ApiResult<()> {
        let url = Self::api_url(&format!("/Imc/{}", id));
        Self::fetch_json(&url, "DELETE", None).await?;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Authentication
    // -------------------------------------------------------------------

    /// OAuth2 password form: `username` + `password`.
    pub async fn login(email: &str, password: &str) -> ApiResult<TokenOut> {
        let body = login_form_body(email, password);
        let text = Self::send(&Self::auth_url("/login"), "POST", Some((&body, CONTENT_TYPE_FORM)))
            .await?;
        decode(&text)
    }

    pub async fn register(payload: &RegisterPayload) -> ApiResult<()> {
        let body = encode(payload)?;
        Self::fetch_json(&Self::auth_url("/register"), "POST", Some(&body)).await?;
        Ok(())
    }

    pub async fn me() -> ApiResult<CurrentUser> {
        let text = Self::fetch_json(&Self::auth_url("/me"), "GET", None).await?;
        decode(&text)
    }

    // -------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------

    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> ApiResult<String> {
        Self::send(url, method, body.map(|b| (b, CONTENT_TYPE_JSON))).await
    }

    async fn send(url: &str, method: &str, body: Option<(&str, &str)>) -> ApiResult<String> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;

        // Always attempt to attach Authorization header if token present.
        if let Some(token) = storage::load_token() {
            headers.append("Authorization", &format!("Bearer {}", token))?;
        }

        if let Some((data, content_type)) = body {
            opts.set_body(&wasm_bindgen::JsValue::from_str(data));
            headers.append("Content-Type", content_type)?;
        }

        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        if !resp.ok() {
            let status = resp.status();
            debug_log!("{} {} -> {}", method, url, status);

            // 401 → token expired or invalid; drop it before anyone retries.
            if status == 401 {
                storage::clear_token();
            }
            return Err(ApiError::from_status(status, &resp.status_text(), &text));
        }

        Ok(text)
    }
}

fn encode<T: Serialize>(value: &T) -> ApiResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(text)?)
}

/// `username=...&password=...`, percent-encoded.
pub fn login_form_body(email: &str, password: &str) -> String {
    format!(
        "username={}&password={}",
        urlencoding::encode(email.trim()),
        urlencoding::encode(password)
    )
}
