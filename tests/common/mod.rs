use gridstep::model::{BodyId, Influence};

pub fn move_by(emitter: BodyId, dx: f32, dy: f32) -> Influence {
    Influence::Motion {
        emitter,
        linear_dx: dx,
        linear_dy: dy,
        angular: 0.0,
    }
}

pub fn move_and_turn(emitter: BodyId, dx: f32, dy: f32, angular: f32) -> Influence {
    Influence::Motion {
        emitter,
        linear_dx: dx,
        linear_dy: dy,
        angular,
    }
}
