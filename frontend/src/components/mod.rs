pub mod bmi_chart;
pub mod modal;
pub mod nav;
pub mod route_guard;
pub mod workout_card;
