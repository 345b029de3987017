//! Derived BMI metrics: classification, rounding and chart points.
//!
//! Everything here is pure so the progress page, the dashboard stat cards and
//! the chart share one definition of the bands.

use chrono::{Datelike, NaiveDate};

use crate::constants::{
    BMI_OBESE_LIMIT, BMI_OVERWEIGHT_LIMIT, BMI_UNDERWEIGHT_LIMIT, COLOR_BMI_NORMAL,
    COLOR_BMI_OBESE, COLOR_BMI_OVERWEIGHT, COLOR_BMI_UNDERWEIGHT,
};
use crate::models::BmiRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiBand {
    /// Bands are half-open: the lower bound belongs to the heavier band.
    pub fn classify(bmi: f64) -> Self {
        if bmi < BMI_UNDERWEIGHT_LIMIT {
            BmiBand::Underweight
        } else if bmi < BMI_OVERWEIGHT_LIMIT {
            BmiBand::Normal
        } else if bmi < BMI_OBESE_LIMIT {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Abaixo do peso",
            BmiBand::Normal => "Peso normal",
            BmiBand::Overweight => "Sobrepeso",
            BmiBand::Obese => "Obesidade",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BmiBand::Underweight => COLOR_BMI_UNDERWEIGHT,
            BmiBand::Normal => COLOR_BMI_NORMAL,
            BmiBand::Overweight => COLOR_BMI_OVERWEIGHT,
            BmiBand::Obese => COLOR_BMI_OBESE,
        }
    }

    /// Badge modifier class (`badge badge-green`, ...).
    pub fn badge_class(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "badge badge-blue",
            BmiBand::Normal => "badge badge-green",
            BmiBand::Overweight => "badge badge-yellow",
            BmiBand::Obese => "badge badge-red",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BmiBand::Underweight => "Você está abaixo do peso ideal.",
            BmiBand::Normal => "Parabéns! Você está dentro do peso ideal.",
            BmiBand::Overweight => "Você está com sobrepeso.",
            BmiBand::Obese => "Você está com obesidade.",
        }
    }
}

/// A BMI value as shown by the calculator card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub value: f64,
    pub band: BmiBand,
}

impl BmiResult {
    /// Round to one decimal first, then classify the rounded value.
    pub fn from_value(bmi: f64) -> Self {
        let value = round1(bmi);
        Self {
            value,
            band: BmiBand::classify(value),
        }
    }
}

/// Half away from zero, one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// weight / height². `None` unless both inputs are strictly positive.
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> Option<f64> {
    if weight_kg > 0.0 && height_m > 0.0 && weight_kg.is_finite() && height_m.is_finite() {
        Some(weight_kg / (height_m * height_m))
    } else {
        None
    }
}

/// One chart point per calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub label: String,
    pub bmi: f64,
}

/// Collapse records to one point per day. The last record of a day wins but
/// the day keeps the position of its first appearance. Unparsable dates are
/// skipped.
pub fn daily_points(records: &[BmiRecord]) -> Vec<DailyPoint> {
    let mut points: Vec<DailyPoint> = Vec::new();

    for record in records {
        let Some(date) = parse_record_date(&record.calculated_on) else {
            continue;
        };
        match points.iter_mut().find(|p| p.date == date) {
            Some(existing) => existing.bmi = record.value,
            None => points.push(DailyPoint {
                date,
                label: short_date_label(date),
                bmi: record.value,
            }),
        }
    }

    points
}

/// Value of the most recent (last) record.
pub fn current_bmi(records: &[BmiRecord]) -> Option<f64> {
    records.last().map(|r| r.value)
}

/// Accepts `YYYY-MM-DD` optionally followed by a time component.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

const MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

/// Brazilian short form, e.g. `5 de jan.`.
pub fn short_date_label(date: NaiveDate) -> String {
    format!("{} de {}", date.day(), MONTHS_SHORT[date.month0() as usize])
}

/// `dd/mm/yyyy`, used by the history list.
pub fn full_date_label(raw: &str) -> String {
    match parse_record_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: u32, value: f64, date: &str) -> BmiRecord {
        BmiRecord {
            id,
            value,
            calculated_on: date.to_string(),
            student_id: 1,
        }
    }

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(BmiBand::classify(18.49), BmiBand::Underweight);
        assert_eq!(BmiBand::classify(18.5), BmiBand::Normal);
        assert_eq!(BmiBand::classify(24.99), BmiBand::Normal);
        assert_eq!(BmiBand::classify(25.0), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(29.99), BmiBand::Overweight);
        assert_eq!(BmiBand::classify(30.0), BmiBand::Obese);
    }

    #[test]
    fn labels_match_bands() {
        assert_eq!(BmiBand::classify(17.0).label(), "Abaixo do peso");
        assert_eq!(BmiBand::classify(22.0).label(), "Peso normal");
        assert_eq!(BmiBand::classify(27.0).label(), "Sobrepeso");
        assert_eq!(BmiBand::classify(35.0).label(), "Obesidade");
    }

    #[test]
    fn result_classifies_the_rounded_value() {
        // 18.46 rounds to 18.5, which is already "normal".
        let r = BmiResult::from_value(18.46);
        assert_eq!(r.value, 18.5);
        assert_eq!(r.band, BmiBand::Normal);

        let r = BmiResult::from_value(24.96);
        assert_eq!(r.value, 25.0);
        assert_eq!(r.band, BmiBand::Overweight);
    }

    #[test]
    fn compute_bmi_requires_positive_inputs() {
        let bmi = compute_bmi(70.0, 1.75).unwrap();
        assert!((bmi - 22.857).abs() < 0.001);
        assert_eq!(compute_bmi(0.0, 1.75), None);
        assert_eq!(compute_bmi(70.0, 0.0), None);
        assert_eq!(compute_bmi(-1.0, 1.7), None);
    }

    #[test]
    fn same_day_records_keep_only_the_last() {
        let records = vec![
            record(1, 24.0, "2024-01-05"),
            record(2, 23.5, "2024-01-06"),
            record(3, 23.1, "2024-01-05"),
        ];
        let points = daily_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "5 de jan.");
        assert_eq!(points[0].bmi, 23.1);
        assert_eq!(points[1].label, "6 de jan.");
        assert_eq!(points[1].bmi, 23.5);
    }

    #[test]
    fn same_label_in_different_years_stays_separate() {
        let records = vec![record(1, 24.0, "2023-01-05"), record(2, 22.0, "2024-01-05")];
        let points = daily_points(&records);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, points[1].label);
    }

    #[test]
    fn datetimes_and_garbage() {
        let records = vec![
            record(1, 21.0, "2024-03-05T08:30:00"),
            record(2, 99.0, "ontem"),
            record(3, 21.4, "2024-03-05 19:00:00"),
        ];
        let points = daily_points(&records);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].bmi, 21.4);
        assert_eq!(points[0].label, "5 de mar.");
    }

    #[test]
    fn current_bmi_is_last_record() {
        assert_eq!(current_bmi(&[]), None);
        let records = vec![record(1, 24.0, "2024-01-05"), record(2, 23.0, "2024-01-01")];
        assert_eq!(current_bmi(&records), Some(23.0));
    }

    #[test]
    fn full_date_label_formats_or_echoes() {
        assert_eq!(full_date_label("2024-12-31"), "31/12/2024");
        assert_eq!(full_date_label("n/a"), "n/a");
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 5.0f64..60.0, b in 5.0f64..60.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |band: BmiBand| match band {
                BmiBand::Underweight => 0,
                BmiBand::Normal => 1,
                BmiBand::Overweight => 2,
                BmiBand::Obese => 3,
            };
            prop_assert!(rank(BmiBand::classify(lo)) <= rank(BmiBand::classify(hi)));
        }

        #[test]
        fn rounding_stays_within_half_a_tenth(v in 0.0f64..100.0) {
            let r = BmiResult::from_value(v);
            prop_assert!((r.value - v).abs() <= 0.05 + 1e-9);
            prop_assert_eq!(r.band, BmiBand::classify(r.value));
        }

        #[test]
        fn daily_points_never_repeat_a_date(days in proptest::collection::vec(1u32..28, 0..20)) {
            let records: Vec<BmiRecord> = days
                .iter()
                .enumerate()
                .map(|(i, d)| record(i as u32, 20.0 + i as f64, &format!("2024-02-{:02}", d)))
                .collect();
            let points = daily_points(&records);
            let mut dates: Vec<_> = points.iter().map(|p| p.date).collect();
            dates.sort();
            dates.dedup();
            prop_assert_eq!(dates.len(), points.len());
        }
    }
}
