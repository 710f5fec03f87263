pub mod constants;
pub mod follower;
pub mod form;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod rotator;
pub mod tilt;
