use crate::model::position::rounded_delta;
use crate::model::{
    BodyId, EnvironmentalObject, Influence, MotionOutcome, ObjectSelector, PickedObject,
};

use super::bounds::{BoundaryStatus, GridBounds};
use super::context::SolveContext;

/// Resolves one tick's batch of influences into grid mutations and per-body
/// outcomes.
///
/// Influences are processed strictly in batch order; that order is the only
/// tie-break between emitters contending for the same cell. The grid must
/// reflect the cumulative effect of every influence already processed this
/// tick, so resolution is a single sequential pass.
#[derive(Debug, Clone, Copy)]
pub struct InfluenceSolver {
    bounds: GridBounds,
    wrap: bool,
}

impl InfluenceSolver {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            wrap: false,
        }
    }

    pub fn with_wrap(bounds: GridBounds, wrap: bool) -> Self {
        Self { bounds, wrap }
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrap
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Consume the batch, mutating the grid and reporting outcomes through
    /// the sink. Never aborts the batch: structural defects scoped to one
    /// influence are logged and skipped.
    pub fn solve(&self, influences: Vec<Influence>, ctx: &mut SolveContext<'_>) {
        for influence in influences {
            match influence {
                Influence::Motion {
                    emitter,
                    linear_dx,
                    linear_dy,
                    angular,
                } => self.apply_motion(ctx, emitter, linear_dx, linear_dy, angular),
                Influence::PickUp { emitter, target } => self.apply_pick_up(ctx, emitter, &target),
                Influence::DropOff { emitter, object } => self.apply_drop_off(ctx, emitter, object),
                Influence::RemoveObject { object } => {
                    // Despawn uses the object's own recorded position; no
                    // emitter, no outcome.
                    ctx.grid
                        .remove_object(object.position, &ObjectSelector::Exact(object.id));
                }
            }
        }
    }

    fn apply_motion(
        &self,
        ctx: &mut SolveContext<'_>,
        emitter: BodyId,
        linear_dx: f32,
        linear_dy: f32,
        angular: f32,
    ) {
        let Some(body) = ctx.bodies.get(&emitter) else {
            tracing::warn!(body = emitter.0, "motion influence from unknown body; skipping");
            return;
        };
        let origin = body.position;
        let target = origin.displaced_by(linear_dx, linear_dy);
        let (validated, status) = self.bounds.validate(target, self.wrap);
        let heading = body.heading + angular;

        let (mut dx, mut dy) = validated.delta_from(origin);
        if dx == 0 && dy == 0 {
            // No resolved displacement: signal downstream that no physical
            // movement occurred. The grid is never touched.
            ctx.sink
                .report_motion(emitter, MotionOutcome::NoMotion { heading });
            return;
        }

        if status == BoundaryStatus::Wrapped {
            // Across a wrap seam the apparent displacement is a small or
            // negative jump; speed must reflect the requested magnitude.
            (dx, dy) = rounded_delta(linear_dx, linear_dy);
        }

        let mut position = validated;
        if ctx.grid.put_body(validated, emitter) {
            if !ctx.grid.remove_body(origin, emitter) {
                tracing::warn!(
                    body = emitter.0,
                    from = %origin,
                    to = %validated,
                    "body was not at its recorded cell; rolling back move"
                );
                ctx.grid.remove_body(validated, emitter);
                position = origin;
                (dx, dy) = (0, 0);
            }
        } else {
            // Target cell occupied: motion rejected, heading still applies.
            position = origin;
            (dx, dy) = (0, 0);
        }

        let duration = ctx.clock.last_step_duration();
        let speed = if duration == 0.0 {
            0.0
        } else {
            (((dx * dx + dy * dy) as f32).sqrt() / duration).max(0.0)
        };

        ctx.sink.report_motion(
            emitter,
            MotionOutcome::Moved {
                position,
                heading,
                speed,
            },
        );
    }

    fn apply_pick_up(&self, ctx: &mut SolveContext<'_>, emitter: BodyId, target: &ObjectSelector) {
        let Some(body) = ctx.bodies.get(&emitter) else {
            tracing::warn!(body = emitter.0, "pick-up influence from unknown body; skipping");
            return;
        };
        // Substance or not, a successful removal reports the same
        // picked-object record; absence of an outcome is the miss signal.
        if let Some(object) = ctx.grid.remove_object(body.position, target) {
            ctx.sink.report_pick(emitter, PickedObject { object });
        }
    }

    fn apply_drop_off(
        &self,
        ctx: &mut SolveContext<'_>,
        emitter: BodyId,
        object: EnvironmentalObject,
    ) {
        let Some(body) = ctx.bodies.get(&emitter) else {
            tracing::warn!(body = emitter.0, "drop-off influence from unknown body; skipping");
            return;
        };
        // Fire-and-forget: objects stack, so placement cannot fail.
        ctx.grid.put_object(body.position, object);
    }
}
