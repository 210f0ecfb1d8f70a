//! Business logic for the `settings` command.

use crate::core::approval::Actor;
use crate::errors::{AppError, AppResult};
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_pattern::{BreakSpan, PatternSlot};
use crate::store::AttendanceStore;
use crate::utils::date;
use chrono::NaiveTime;

/// Caller-supplied settings fields. Pattern fields target `slot` (slot 1 when
/// none is given); `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    pub standard_hours: Option<f64>,
    pub slot: Option<PatternSlot>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub breaks: [Option<BreakSpan>; 3],
    /// Start from last month's settings instead of the stored/default ones.
    pub copy_previous: bool,
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Merge `input` into the month's settings and persist them. Like record
    /// saves, this fails with `MonthLocked` once the month is approved.
    pub fn set(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        year: i32,
        month: u32,
        default_standard_hours: f64,
        input: &SettingsInput,
    ) -> AppResult<MonthlySettings> {
        if !actor.may_act_for(user) {
            return Err(AppError::PermissionDenied(format!(
                "'{}' cannot edit settings of '{}'",
                actor.id, user
            )));
        }

        //
        // 1. Pick the base: last month's copy, the stored row, or defaults.
        //
        let mut settings = if input.copy_previous {
            let (prev_year, prev_month) = date::previous_month(year, month);
            store
                .monthly_settings(user, prev_year, prev_month)?
                .map(|prev| prev.for_month(year, month))
                .ok_or_else(|| {
                    AppError::Other(format!(
                        "no settings stored for {}-{:02} to copy",
                        prev_year, prev_month
                    ))
                })?
        } else {
            store
                .monthly_settings(user, year, month)?
                .unwrap_or_else(|| MonthlySettings::new(user, year, month, default_standard_hours))
        };

        //
        // 2. Merge the provided fields.
        //
        if let Some(hours) = input.standard_hours {
            settings.standard_hours = hours;
        }

        let slot = input.slot.unwrap_or_default();
        let pattern = settings.pattern_mut(slot);
        if let Some(start) = input.start {
            pattern.start = Some(start);
        }
        if let Some(end) = input.end {
            pattern.end = Some(end);
        }
        for (idx, span) in input.breaks.iter().enumerate() {
            if let Some(span) = span {
                pattern.breaks[idx] = *span;
            }
        }

        store.save_monthly_settings(&settings)?;
        Ok(settings)
    }
}
