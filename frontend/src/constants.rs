//! Constants for the frontend application
//!
//! This module centralizes commonly used string literals to prevent typos
//! and enable safe refactoring across the codebase.

// Storage
pub const TOKEN_STORAGE_KEY: &str = "token";

// Service defaults (local development)
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:8001";

// CSS Class Names
pub const CSS_MODAL: &str = "modal";
pub const CSS_CARD: &str = "card";
pub const CSS_FORM_ROW: &str = "form-row";
pub const CSS_ACTIONS_ROW: &str = "actions-row";
pub const CSS_EMPTY_STATE: &str = "empty-state";
pub const CSS_BTN_PRIMARY: &str = "btn-primary";
pub const CSS_BTN_OUTLINE: &str = "btn-outline";
pub const CSS_BTN_DANGER: &str = "btn-danger";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_BADGE: &str = "badge";
pub const CSS_SPINNER: &str = "spinner";

// Element IDs (commonly referenced)
pub const ID_APP_CONTAINER: &str = "app-container";
pub const ID_TOAST_ROOT: &str = "toast-root";
pub const ID_TOAST_STYLES: &str = "toast-styles";
pub const ID_CONFIRM_MODAL: &str = "confirm-modal";
pub const ID_EXERCISE_MODAL: &str = "exercise-modal";
pub const ID_WORKOUT_MODAL: &str = "workout-modal";
pub const ID_GUARD_LOADING: &str = "guard-loading";

// Roles as spelled by the auth service
pub const ROLE_STUDENT: &str = "aluno";
pub const ROLE_ADMIN: &str = "admin";

// Branding
pub const APP_NAME: &str = "We Go Gym";
pub const APP_TAGLINE: &str = "Train Smarter. Grow Stronger.";

// Fallback greeting when the student record is not available yet
pub const DEFAULT_STUDENT_GREETING_NAME: &str = "Aluno";

// Workout category filter sentinel
pub const CATEGORY_ALL_LABEL: &str = "Todas";

// BMI band boundaries
pub const BMI_UNDERWEIGHT_LIMIT: f64 = 18.5;
pub const BMI_OVERWEIGHT_LIMIT: f64 = 25.0;
pub const BMI_OBESE_LIMIT: f64 = 30.0;

// BMI band colours (text / chart reference lines)
pub const COLOR_BMI_UNDERWEIGHT: &str = "#2563eb";
pub const COLOR_BMI_NORMAL: &str = "#16a34a";
pub const COLOR_BMI_OVERWEIGHT: &str = "#ca8a04";
pub const COLOR_BMI_OBESE: &str = "#dc2626";
pub const COLOR_CHART_LINE: &str = "#6366f1";
pub const COLOR_CHART_GRID: &str = "#e2e8f0";

// Button Types
pub const BUTTON_TYPE_BUTTON: &str = "button";
pub const BUTTON_TYPE_SUBMIT: &str = "submit";

// HTML Attributes
pub const ATTR_TYPE: &str = "type";
pub const ATTR_DATA_TESTID: &str = "data-testid";

// Toast lifetime
pub const TOAST_DURATION_MS: u32 = 4000;
