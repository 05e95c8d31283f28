mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::{SignupAdmin, SignupAuthority, SignupCitizen, SignupFieldWorker};

mod govhome;
pub use govhome::GovHome;
