// Drag-reschedule controller
// Explicit state machine over a single in-flight drag operation. Only one
// drag is ever active: starting a new drag replaces the current reference
// (last-writer-wins), which matches what a single pointer device can do.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};

use crate::models::post::Post;
use crate::services::calendar::ViewType;
use crate::utils::date::{at_slot, week_start};

/// How far in the past a drop target may fall before it is rejected.
const PAST_DROP_TOLERANCE_MINUTES: i64 = 5;

/// Delay before lingering drag state is cleared after drag-end. Guards
/// against drop events that fire after dragend in some pointer-event
/// orderings.
const DRAG_END_GRACE_MILLIS: i64 = 200;

/// The post currently being dragged, with the transient hover preview.
#[derive(Debug, Clone, PartialEq)]
pub struct DragContext {
    pub post_id: String,
    pub original_time: DateTime<Local>,
    pub hovered_day: Option<NaiveDate>,
    pub hovered_slot: Option<NaiveTime>,
}

impl DragContext {
    fn from_post(post: &Post) -> Self {
        Self {
            post_id: post.id.clone(),
            original_time: post.scheduled_time,
            hovered_day: Some(post.scheduled_time.date_naive()),
            hovered_slot: Some(post.scheduled_time.time()),
        }
    }

    /// The time the post would land on if dropped at the current hover target.
    pub fn hovered_target(&self) -> Option<DateTime<Local>> {
        match (self.hovered_day, self.hovered_slot) {
            (Some(day), Some(slot)) => at_slot(day, slot),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// Result of a drop, reported to the caller so it can surface feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Drop arrived with no drag in flight; nothing happened.
    NotDragging,
    /// Target was more than the tolerated window in the past. No mutation;
    /// the post keeps its prior time.
    RejectedInPast {
        post_id: String,
        target: DateTime<Local>,
    },
    /// The post was rescheduled. `new_base` is set when the active week view
    /// no longer contains the new time and the display should move to the
    /// week holding it.
    Committed {
        post_id: String,
        new_time: DateTime<Local>,
        new_base: Option<NaiveDate>,
    },
}

/// Cancellable deadline armed on drag-end.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GraceTimer {
    deadline: DateTime<Local>,
}

/// Coordinates drag start/over/drop/end for one calendar view instance.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
    grace: Option<GraceTimer>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn context(&self) -> Option<&DragContext> {
        match &self.state {
            DragState::Dragging(ctx) => Some(ctx),
            DragState::Idle => None,
        }
    }

    /// Begin dragging a post. Replaces any drag already in flight and cancels
    /// a pending grace timer.
    pub fn drag_start(&mut self, post: &Post) {
        self.grace = None;
        self.state = DragState::Dragging(DragContext::from_post(post));
    }

    /// Update the transient hover preview. No commit happens here.
    pub fn drag_over(&mut self, day: Option<NaiveDate>, slot: NaiveTime) {
        if let DragState::Dragging(ctx) = &mut self.state {
            if day.is_some() {
                ctx.hovered_day = day;
            }
            ctx.hovered_slot = Some(slot);
        }
    }

    /// Commit the drag at the given target cell.
    ///
    /// The final time combines the drop day (falling back to the dragged
    /// post's original date) with the slot's hour/minute, seconds zeroed.
    /// Targets more than five minutes in the past are rejected: the post is
    /// left untouched and a warning goes to the operator log.
    pub fn drop(
        &mut self,
        posts: &mut [Post],
        day: Option<NaiveDate>,
        slot: NaiveTime,
        view: ViewType,
        displayed_base: NaiveDate,
        now: DateTime<Local>,
    ) -> DropOutcome {
        let ctx = match std::mem::take(&mut self.state) {
            DragState::Dragging(ctx) => ctx,
            DragState::Idle => return DropOutcome::NotDragging,
        };
        self.grace = None;

        let target_day = day.unwrap_or_else(|| ctx.original_time.date_naive());
        let target = match at_slot(target_day, slot) {
            Some(target) => target,
            None => {
                log::warn!(
                    "drop target {} {} does not resolve to a local time, ignoring",
                    target_day,
                    slot
                );
                return DropOutcome::NotDragging;
            }
        };

        if target < now - Duration::minutes(PAST_DROP_TOLERANCE_MINUTES) {
            log::warn!(
                "rejected reschedule of post {} to {}: target is in the past",
                ctx.post_id,
                target
            );
            return DropOutcome::RejectedInPast {
                post_id: ctx.post_id,
                target,
            };
        }

        match posts.iter_mut().find(|p| p.id == ctx.post_id) {
            Some(post) => post.scheduled_time = target,
            None => {
                log::warn!("dragged post {} no longer present, drop ignored", ctx.post_id);
                return DropOutcome::NotDragging;
            }
        }

        let new_base = match view {
            ViewType::Week => {
                let displayed_week = week_start(displayed_base);
                let target_week = week_start(target.date_naive());
                (target_week != displayed_week).then_some(target_week)
            }
            _ => None,
        };

        DropOutcome::Committed {
            post_id: ctx.post_id,
            new_time: target,
            new_base,
        }
    }

    /// Drag ended without a drop. Arms the grace timer; the state is cleared
    /// once [`DragController::tick`] observes the deadline passing, unless a
    /// drop or a new drag-start supersedes it first.
    pub fn drag_end(&mut self, now: DateTime<Local>) {
        if self.is_dragging() {
            self.grace = Some(GraceTimer {
                deadline: now + Duration::milliseconds(DRAG_END_GRACE_MILLIS),
            });
        }
    }

    /// Clear lingering drag state once the grace deadline has passed.
    /// Returns true if state was cleared on this tick.
    pub fn tick(&mut self, now: DateTime<Local>) -> bool {
        match self.grace {
            Some(timer) if now >= timer.deadline => {
                self.grace = None;
                self.state = DragState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;

    fn post_at(id: &str, h: u32, min: u32) -> Post {
        let time = Local.with_ymd_and_hms(2030, 6, 10, h, min, 0).unwrap();
        let mut post = Post::new(format!("post {id}"), time);
        post.id = id.to_string();
        post
    }

    fn slot(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2030, 6, 10, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let controller = DragController::new();
        assert!(!controller.is_dragging());
        assert!(controller.context().is_none());
    }

    #[test]
    fn test_drag_start_captures_post() {
        let post = post_at("a", 10, 0);
        let mut controller = DragController::new();
        controller.drag_start(&post);

        let ctx = controller.context().unwrap();
        assert_eq!(ctx.post_id, "a");
        assert_eq!(ctx.original_time, post.scheduled_time);
    }

    #[test]
    fn test_drag_over_updates_preview_only() {
        let posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);
        controller.drag_over(Some(date(2030, 6, 11)), slot(14, 30));

        let preview = controller.context().unwrap().hovered_target().unwrap();
        assert_eq!(preview.date_naive(), date(2030, 6, 11));
        assert_eq!((preview.hour(), preview.minute()), (14, 30));
        // No commit yet
        assert_eq!(posts[0].scheduled_time, post_at("a", 10, 0).scheduled_time);
    }

    #[test]
    fn test_drop_moves_exactly_one_post() {
        let mut posts = vec![post_at("a", 10, 0), post_at("b", 11, 0)];
        let untouched = posts[1].clone();
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 10)),
            slot(14, 0),
            ViewType::Day,
            date(2030, 6, 10),
            now(),
        );

        let expected = Local.with_ymd_and_hms(2030, 6, 10, 14, 0, 0).unwrap();
        assert_eq!(
            outcome,
            DropOutcome::Committed {
                post_id: "a".to_string(),
                new_time: expected,
                new_base: None,
            }
        );
        assert_eq!(posts[0].scheduled_time, expected);
        assert_eq!(posts[0].scheduled_time.second(), 0);
        assert_eq!(posts[0].scheduled_time.nanosecond(), 0);
        assert_eq!(posts[1], untouched);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_in_past_rejected_and_post_unchanged() {
        let mut posts = vec![post_at("a", 10, 0)];
        let original = posts[0].scheduled_time;
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        // now is 08:00; a 06:00 slot on the same day is well past tolerance
        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 10)),
            slot(6, 0),
            ViewType::Day,
            date(2030, 6, 10),
            now(),
        );

        assert!(matches!(outcome, DropOutcome::RejectedInPast { ref post_id, .. } if post_id == "a"));
        assert_eq!(posts[0].scheduled_time, original);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_within_five_minute_tolerance_commits() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        // now is 08:02; a 08:00 slot is only 2 minutes back, inside tolerance
        let drop_now = Local.with_ymd_and_hms(2030, 6, 10, 8, 2, 0).unwrap();
        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 10)),
            slot(8, 0),
            ViewType::Day,
            date(2030, 6, 10),
            drop_now,
        );

        assert!(matches!(outcome, DropOutcome::Committed { .. }));
    }

    #[test]
    fn test_drop_without_day_keeps_original_date() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        let outcome = controller.drop(
            &mut posts,
            None,
            slot(16, 30),
            ViewType::Day,
            date(2030, 6, 10),
            now(),
        );

        let expected = Local.with_ymd_and_hms(2030, 6, 10, 16, 30, 0).unwrap();
        assert!(matches!(outcome, DropOutcome::Committed { new_time, .. } if new_time == expected));
    }

    #[test]
    fn test_week_view_drop_outside_week_reports_new_base() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        // Displayed week holds Jun 10 2030 (Monday); drop lands the following week
        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 18)),
            slot(9, 0),
            ViewType::Week,
            date(2030, 6, 12),
            now(),
        );

        match outcome {
            DropOutcome::Committed { new_base, .. } => {
                assert_eq!(new_base, Some(date(2030, 6, 17)));
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn test_week_view_drop_inside_week_keeps_base() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);

        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 13)),
            slot(9, 0),
            ViewType::Week,
            date(2030, 6, 12),
            now(),
        );

        assert!(matches!(outcome, DropOutcome::Committed { new_base: None, .. }));
    }

    #[test]
    fn test_drop_while_idle_is_noop() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();

        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 10)),
            slot(14, 0),
            ViewType::Day,
            date(2030, 6, 10),
            now(),
        );

        assert_eq!(outcome, DropOutcome::NotDragging);
    }

    #[test]
    fn test_drag_end_clears_state_after_grace() {
        let posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);
        controller.drag_end(now());

        // Still dragging inside the grace window
        assert!(!controller.tick(now() + Duration::milliseconds(100)));
        assert!(controller.is_dragging());

        assert!(controller.tick(now() + Duration::milliseconds(250)));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_during_grace_window_still_commits() {
        let mut posts = vec![post_at("a", 10, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);
        controller.drag_end(now());

        let outcome = controller.drop(
            &mut posts,
            Some(date(2030, 6, 10)),
            slot(15, 0),
            ViewType::Day,
            date(2030, 6, 10),
            now() + Duration::milliseconds(50),
        );

        assert!(matches!(outcome, DropOutcome::Committed { .. }));
        // Timer was cancelled by the drop
        assert!(!controller.tick(now() + Duration::seconds(5)));
    }

    #[test]
    fn test_new_drag_start_replaces_active_drag() {
        let posts = vec![post_at("a", 10, 0), post_at("b", 11, 0)];
        let mut controller = DragController::new();
        controller.drag_start(&posts[0]);
        controller.drag_end(now());
        controller.drag_start(&posts[1]);

        assert_eq!(controller.context().unwrap().post_id, "b");
        // Pending grace timer from the first drag must not clear the new one
        assert!(!controller.tick(now() + Duration::seconds(5)));
        assert!(controller.is_dragging());
    }
}
