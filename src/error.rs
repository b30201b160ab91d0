use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum MovingArrayError {
    #[error("capacity must be greater than zero")]
    MovingArrayZeroCapacityError,

    #[error("capacity does not fit the signed index range")]
    MovingArrayCapacityOverflowError(usize),
}

#[derive(Clone, Debug, Error)]
pub enum MovingGridError {
    #[error("side length must be greater than zero")]
    MovingGridZeroSideError,

    #[error("cell count does not fit the signed index range")]
    MovingGridSideOverflowError(usize),
}
