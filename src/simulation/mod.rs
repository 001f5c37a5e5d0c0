pub mod states;
pub mod params;
pub mod engine;
pub mod scene;
pub mod forces;
pub mod collision;
pub mod integrator;
pub mod clock;
pub mod scenario;
