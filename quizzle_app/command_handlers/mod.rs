mod login;
mod submit_score;

pub use login::LoginCommandHandler;
pub use submit_score::SubmitScoreCommandHandler;
