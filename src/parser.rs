mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ParseError;
pub use interface::UserInterface;
pub use middleware::Parser;

#[cfg(test)]
pub(crate) use interface::util;
