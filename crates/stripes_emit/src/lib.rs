pub mod builder;
pub mod emitter;

pub use builder::build_document;
pub use emitter::ConfigEmitter;
