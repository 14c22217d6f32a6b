//! Goal use cases

use crate::domain::{Category, DateRef, Goal, Session};
use crate::error::{MindtrackError, Result};
use chrono::NaiveDate;

/// Add a goal from shell input: a free-text description, a target date
/// reference, and a category name.
pub fn add_goal(
    session: &mut Session,
    description: &str,
    target: &str,
    category: &str,
    today: NaiveDate,
) -> Result<Goal> {
    // 1. Parse the category name
    let category: Category = category.parse()?;

    // 2. Resolve the target date reference
    let target_date = DateRef::parse(target)?.resolve(today);

    // 3. Record the goal
    let goal = session.add_goal(description, target_date, category, today)?;
    Ok(goal.clone())
}

/// Complete the goal at a 1-based list position
pub fn complete_goal(session: &mut Session, position: usize) -> Result<Goal> {
    let index = position
        .checked_sub(1)
        .ok_or(MindtrackError::GoalOutOfRange(position))?;
    let goal = session.complete_goal(index)?;
    Ok(goal.clone())
}
