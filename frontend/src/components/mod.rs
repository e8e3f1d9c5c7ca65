pub mod confetti;
pub mod gradient_background;
pub mod result_modal;

pub use confetti::Confetti;
pub use gradient_background::GradientBackground;
pub use result_modal::ResultModal;
