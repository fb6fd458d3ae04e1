mod string_resolver_port;

pub use string_resolver_port::StringResolver;
