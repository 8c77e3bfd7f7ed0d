mod get_me;
mod login;
mod signup;
mod utils;

pub use get_me::get_me;
pub use login::login;
pub use signup::signup;
