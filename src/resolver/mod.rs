mod as_you_type;
pub(crate) mod helper_constants;
mod helper_functions;
mod resolver_regexps;
pub mod errors;
pub mod enums;
pub mod helper_types;
pub mod phone_resolver;
pub mod state;

pub use enums::{DeepLinkKind, Region};
pub use helper_types::{CountryEntry, PastedNumber};
pub use phone_resolver::PhoneResolver;
pub use state::ResolverState;
