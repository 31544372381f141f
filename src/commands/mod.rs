mod derive;
pub use derive::derive;

mod token;
pub use token::token;
