//! Habit use cases

use crate::domain::{Habit, Session, StreakUpdate};
use crate::error::{MindtrackError, Result};
use chrono::NaiveDate;

/// Record today's completion of the habit at a 1-based list position
pub fn complete_habit(
    session: &mut Session,
    position: usize,
    today: NaiveDate,
) -> Result<(Habit, StreakUpdate)> {
    let index = position
        .checked_sub(1)
        .ok_or(MindtrackError::HabitOutOfRange(position))?;
    let (habit, update) = session.complete_habit(index, today)?;
    Ok((habit.clone(), update))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_complete_habit_converts_position() {
        let mut session = Session::new();
        let today = date(2025, 1, 17);

        let (habit, update) = complete_habit(&mut session, 2, today).unwrap();
        assert_eq!(habit.name, "Positive Affirmations");
        assert_eq!(update, StreakUpdate::Extended(1));
    }

    #[test]
    fn test_complete_habit_position_zero() {
        let mut session = Session::new();

        let result = complete_habit(&mut session, 0, date(2025, 1, 17));
        assert!(matches!(
            result.unwrap_err(),
            MindtrackError::HabitOutOfRange(0)
        ));
    }

    #[test]
    fn test_complete_habit_position_past_end() {
        let mut session = Session::new();

        let result = complete_habit(&mut session, 9, date(2025, 1, 17));
        assert!(matches!(
            result.unwrap_err(),
            MindtrackError::HabitOutOfRange(9)
        ));
    }

    #[test]
    fn test_complete_habit_same_day_repeat() {
        let mut session = Session::new();
        let today = date(2025, 1, 17);

        complete_habit(&mut session, 1, today).unwrap();
        let (habit, update) = complete_habit(&mut session, 1, today).unwrap();
        assert_eq!(update, StreakUpdate::AlreadyDone);
        assert_eq!(habit.streak, 1);
    }
}
