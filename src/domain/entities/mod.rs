mod asteroid;
mod close_approach;

pub use asteroid::Asteroid;
pub use close_approach::CloseApproach;
