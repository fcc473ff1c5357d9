mod bundle;
mod credential;
mod education;
mod experience;
mod identity;
mod skill;

pub use bundle::*;
pub use credential::*;
pub use education::*;
pub use experience::*;
pub use identity::*;
pub use skill::*;
