// Path templates with named parameters
//
// A template is a list of literal segments with one parameter between each
// pair of neighbours. It renders two ways: a canonical form with every
// parameter shown as `<prefix><key>`, and a built form with every parameter
// replaced by a caller-supplied value.

mod assembler;
mod instance;
mod param;
mod parser;
mod value;

pub use instance::{configure, path, PathInstance, DEFAULT_PARAM_PREFIX};
pub use param::{param, Param, ParamValue, ParamValues};
pub use parser::TemplateParser;
pub use value::{PathMetadata, PathValue};
